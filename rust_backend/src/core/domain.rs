//! Domain models for catalog records and the canonical dataset.
//!
//! A [`RawRecord`] mirrors one row of the catalog file with every cell kept as
//! text. The preprocessing stage turns raw rows into [`CanonicalRecord`]s, which
//! carry typed, derived fields and are collected into a [`CanonicalDataset`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::time::Timestamp;

/// One untyped row of the space-object catalog.
///
/// Cells are stored exactly as read; empty cells are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub object_type: String,
    pub launch_date_text: String,
    pub decay_date_text: String,
    pub mass: String,
    pub operational_orbit_code: String,
}

impl RawRecord {
    pub fn new(
        object_type: impl Into<String>,
        launch_date_text: impl Into<String>,
        decay_date_text: impl Into<String>,
        mass: impl Into<String>,
        operational_orbit_code: impl Into<String>,
    ) -> Self {
        Self {
            object_type: object_type.into(),
            launch_date_text: launch_date_text.into(),
            decay_date_text: decay_date_text.into(),
            mass: mass.into(),
            operational_orbit_code: operational_orbit_code.into(),
        }
    }
}

/// Coarse orbital regime derived from the catalog's operational orbit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OrbitGroup {
    #[serde(rename = "LEO")]
    Leo,
    #[serde(rename = "GEO")]
    Geo,
    #[serde(rename = "MEO")]
    Meo,
    #[serde(rename = "HEO")]
    Heo,
    #[serde(rename = "Other")]
    Other,
}

impl OrbitGroup {
    pub const ALL: [OrbitGroup; 5] = [
        OrbitGroup::Leo,
        OrbitGroup::Geo,
        OrbitGroup::Meo,
        OrbitGroup::Heo,
        OrbitGroup::Other,
    ];

    /// Map an operational orbit code to its group. Unknown codes fall into `Other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use satlife_rust::core::OrbitGroup;
    ///
    /// assert_eq!(OrbitGroup::from_orbit_code("LLEO/I"), OrbitGroup::Leo);
    /// assert_eq!(OrbitGroup::from_orbit_code("SSO"), OrbitGroup::Leo);
    /// assert_eq!(OrbitGroup::from_orbit_code("GTO"), OrbitGroup::Other);
    /// ```
    pub fn from_orbit_code(code: &str) -> Self {
        match code.trim() {
            "LLEO/S" | "LLEO/I" | "LEO/S" | "LEO/I" | "LEO" | "SSO" => OrbitGroup::Leo,
            "GEO" | "GEO/I" | "GEO/S" => OrbitGroup::Geo,
            "MEO" | "MEO/I" => OrbitGroup::Meo,
            "HEO" | "HEO/I" => OrbitGroup::Heo,
            _ => OrbitGroup::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrbitGroup::Leo => "LEO",
            OrbitGroup::Geo => "GEO",
            OrbitGroup::Meo => "MEO",
            OrbitGroup::Heo => "HEO",
            OrbitGroup::Other => "Other",
        }
    }

    /// Human-readable name used by the orbit dropdown.
    pub fn display_name(&self) -> &'static str {
        match self {
            OrbitGroup::Leo => "Low Earth Orbit (LEO)",
            OrbitGroup::Geo => "Geostationary Orbit (GEO)",
            OrbitGroup::Meo => "Medium Earth Orbit (MEO)",
            OrbitGroup::Heo => "High Earth Orbit (HEO)",
            OrbitGroup::Other => "Other",
        }
    }
}

impl fmt::Display for OrbitGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrbitGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrbitGroup::ALL
            .iter()
            .copied()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| format!("Unknown orbit group: {}", s))
    }
}

/// A validated payload record with derived lifespan and classification fields.
///
/// Records are only produced by the preprocessing stage, which guarantees:
///
/// * `launch_date` is present and `0 <= lifespan_years <= 100`
/// * `is_active == decay_date.is_none()`
/// * `launch_decade == launch_year` rounded down to a multiple of ten
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    pub object_type: String,
    pub launch_date: Option<Timestamp>,
    pub decay_date: Option<Timestamp>,
    pub mass: Option<f64>,
    pub orbit_code: String,
    /// Years of 365.25 days between launch and decay, or the dataset's reference time
    /// for objects still in orbit.
    pub lifespan_years: f64,
    pub launch_year: Option<i32>,
    pub launch_decade: Option<i32>,
    pub is_active: bool,
    pub orbit_group: OrbitGroup,
}

/// Round a year down to its decade bucket.
pub fn decade_of(year: i32) -> i32 {
    year.div_euclid(10) * 10
}

/// Immutable collection of canonical records, built once at load time.
///
/// Cloning is cheap; all clones share the same record storage.
#[derive(Debug, Clone)]
pub struct CanonicalDataset {
    records: Arc<[CanonicalRecord]>,
    reference_time: Timestamp,
}

impl CanonicalDataset {
    /// Wrap derived records. `reference_time` is the instant used as the decay
    /// substitute for active objects when lifespans were computed.
    pub fn new(records: Vec<CanonicalRecord>, reference_time: Timestamp) -> Self {
        Self {
            records: records.into(),
            reference_time,
        }
    }

    pub fn records(&self) -> &[CanonicalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn reference_time(&self) -> Timestamp {
        self.reference_time
    }

    /// Distinct launch decades present in the dataset, ascending.
    pub fn decades(&self) -> Vec<i32> {
        self.records
            .iter()
            .filter_map(|r| r.launch_decade)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn active_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_active).count()
    }
}
