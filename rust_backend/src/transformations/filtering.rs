use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::domain::{CanonicalDataset, CanonicalRecord, OrbitGroup};
use crate::error::{EngineError, EngineResult};

/// Closed interval `[lo, hi]`, serialized as a two-element array.
///
/// An inverted interval (`lo > hi`) contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InclusiveRange<T>(pub T, pub T);

impl<T: PartialOrd + Copy> InclusiveRange<T> {
    pub fn new(lo: T, hi: T) -> Self {
        Self(lo, hi)
    }

    pub fn lo(&self) -> T {
        self.0
    }

    pub fn hi(&self) -> T {
        self.1
    }

    pub fn contains(&self, value: T) -> bool {
        self.0 <= value && value <= self.1
    }
}

/// Orbit dropdown selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OrbitSelector {
    #[default]
    All,
    Group(OrbitGroup),
}

impl OrbitSelector {
    pub fn matches(&self, group: OrbitGroup) -> bool {
        match self {
            OrbitSelector::All => true,
            OrbitSelector::Group(selected) => *selected == group,
        }
    }
}

impl FromStr for OrbitSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(OrbitSelector::All);
        }
        s.parse::<OrbitGroup>()
            .map(OrbitSelector::Group)
            .map_err(|_| format!("Invalid orbit selector: {}. Must be 'All' or an orbit group", s))
    }
}

impl TryFrom<String> for OrbitSelector {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<OrbitSelector> for String {
    fn from(selector: OrbitSelector) -> Self {
        selector.to_string()
    }
}

impl fmt::Display for OrbitSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrbitSelector::All => f.write_str("All"),
            OrbitSelector::Group(group) => f.write_str(group.as_str()),
        }
    }
}

/// Operational status selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusSelector {
    #[default]
    All,
    Active,
    Decommissioned,
}

impl StatusSelector {
    pub fn matches(&self, is_active: bool) -> bool {
        match self {
            StatusSelector::All => true,
            StatusSelector::Active => is_active,
            StatusSelector::Decommissioned => !is_active,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusSelector::All => "All",
            StatusSelector::Active => "Active",
            StatusSelector::Decommissioned => "Decommissioned",
        }
    }
}

/// Chart tab the user is looking at. Only selects the description text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActiveView {
    /// `tab-1`: density ridgeline of lifespans by decade
    #[default]
    LifespanTrends,
    /// `tab-2`: active vs decommissioned by decade
    RetirementStatus,
    /// `tab-3`: orbit groups of decommissioned payloads
    OrbitLocation,
    /// Any other tab identifier, kept verbatim.
    Unknown(String),
}

impl ActiveView {
    pub fn tab_id(&self) -> &str {
        match self {
            ActiveView::LifespanTrends => "tab-1",
            ActiveView::RetirementStatus => "tab-2",
            ActiveView::OrbitLocation => "tab-3",
            ActiveView::Unknown(id) => id.as_str(),
        }
    }
}

impl From<String> for ActiveView {
    fn from(id: String) -> Self {
        match id.as_str() {
            "tab-1" => ActiveView::LifespanTrends,
            "tab-2" => ActiveView::RetirementStatus,
            "tab-3" => ActiveView::OrbitLocation,
            _ => ActiveView::Unknown(id),
        }
    }
}

impl From<&str> for ActiveView {
    fn from(id: &str) -> Self {
        ActiveView::from(id.to_string())
    }
}

impl From<ActiveView> for String {
    fn from(view: ActiveView) -> Self {
        view.tab_id().to_string()
    }
}

/// One dashboard query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub decade_range: InclusiveRange<i32>,
    pub mass_range: InclusiveRange<f64>,
    #[serde(default)]
    pub orbit_selector: OrbitSelector,
    #[serde(default)]
    pub status_selector: StatusSelector,
    #[serde(default)]
    pub active_view: ActiveView,
}

impl Default for FilterCriteria {
    /// Initial state of the dashboard controls.
    fn default() -> Self {
        Self {
            decade_range: InclusiveRange(1980, 2020),
            mass_range: InclusiveRange(0.0, 5000.0),
            orbit_selector: OrbitSelector::All,
            status_selector: StatusSelector::All,
            active_view: ActiveView::LifespanTrends,
        }
    }
}

impl FilterCriteria {
    /// Criteria whose ranges admit every known decade and mass.
    ///
    /// Records without a decade or mass are still excluded.
    pub fn widest() -> Self {
        Self {
            decade_range: InclusiveRange(i32::MIN, i32::MAX),
            mass_range: InclusiveRange(f64::NEG_INFINITY, f64::INFINITY),
            ..Self::default()
        }
    }

    /// Decode criteria from the JSON query shape, reporting the failing field path.
    ///
    /// # Examples
    ///
    /// ```
    /// use satlife_rust::transformations::{FilterCriteria, StatusSelector};
    ///
    /// let criteria = FilterCriteria::from_json(
    ///     r#"{"decadeRange": [1990, 2000], "massRange": [0, 1000],
    ///         "orbitSelector": "LEO", "statusSelector": "Active", "activeView": "tab-2"}"#,
    /// ).unwrap();
    /// assert_eq!(criteria.status_selector, StatusSelector::Active);
    /// ```
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let de = &mut serde_json::Deserializer::from_str(json);
        serde_path_to_error::deserialize(de).map_err(|e| {
            EngineError::InvalidQuery(format!("{} (at '{}')", e.inner(), e.path()))
        })
    }

    /// Whether a single record satisfies every predicate.
    pub fn matches(&self, record: &CanonicalRecord) -> bool {
        // Unknown decade or mass can never be affirmed to lie inside a range.
        let decade_ok = record
            .launch_decade
            .map(|d| self.decade_range.contains(d))
            .unwrap_or(false);
        let mass_ok = record
            .mass
            .map(|m| self.mass_range.contains(m))
            .unwrap_or(false);

        decade_ok
            && mass_ok
            && self.status_selector.matches(record.is_active)
            && self.orbit_selector.matches(record.orbit_group)
    }
}

/// Records of the canonical dataset that satisfy one query, in dataset order.
#[derive(Debug, Clone, Default)]
pub struct FilteredView<'a> {
    records: Vec<&'a CanonicalRecord>,
}

impl<'a> FilteredView<'a> {
    pub fn new(records: Vec<&'a CanonicalRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[&'a CanonicalRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a CanonicalRecord> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> FromIterator<&'a CanonicalRecord> for FilteredView<'a> {
    fn from_iter<I: IntoIterator<Item = &'a CanonicalRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

/// Conjunctive facet filter over the canonical dataset.
pub struct FilterEngine;

impl FilterEngine {
    /// Apply `criteria` to the dataset. An empty result is a valid outcome.
    pub fn apply<'a>(dataset: &'a CanonicalDataset, criteria: &FilterCriteria) -> FilteredView<'a> {
        Self::apply_records(dataset.records(), criteria)
    }

    /// Apply `criteria` to a plain slice of records.
    pub fn apply_records<'a>(
        records: &'a [CanonicalRecord],
        criteria: &FilterCriteria,
    ) -> FilteredView<'a> {
        let view: FilteredView<'a> = records.iter().filter(|r| criteria.matches(r)).collect();

        log::debug!(
            "Filter decades {:?} mass {:?} orbit {} status {}: {} of {} records",
            (criteria.decade_range.lo(), criteria.decade_range.hi()),
            (criteria.mass_range.lo(), criteria.mass_range.hi()),
            criteria.orbit_selector,
            criteria.status_selector.as_str(),
            view.len(),
            records.len()
        );

        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn sample_record(decade: Option<i32>, mass: Option<f64>, active: bool, orbit: OrbitGroup) -> CanonicalRecord {
        let launch = NaiveDate::from_ymd_opt(decade.unwrap_or(2000) + 2, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        CanonicalRecord {
            object_type: "P".to_string(),
            launch_date: Some(launch),
            decay_date: if active { None } else { Some(launch + chrono::Duration::days(900)) },
            mass,
            orbit_code: orbit.as_str().to_string(),
            lifespan_years: 2.5,
            launch_year: decade.map(|d| d + 2),
            launch_decade: decade,
            is_active: active,
            orbit_group: orbit,
        }
    }

    fn sample_records() -> Vec<CanonicalRecord> {
        vec![
            sample_record(Some(1980), Some(500.0), true, OrbitGroup::Leo),
            sample_record(Some(1990), Some(1500.0), false, OrbitGroup::Geo),
            sample_record(Some(2000), None, true, OrbitGroup::Leo),
            sample_record(Some(2010), Some(6000.0), false, OrbitGroup::Meo),
            sample_record(None, Some(100.0), true, OrbitGroup::Other),
            sample_record(Some(2020), Some(0.0), false, OrbitGroup::Leo),
        ]
    }

    #[test]
    fn test_default_criteria_matches_dashboard() {
        let records = sample_records();
        let view = FilterEngine::apply_records(&records, &FilterCriteria::default());
        // 1980, 1990 and 2020 pass; missing mass, heavy and unknown decade do not
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn test_unknown_mass_and_decade_excluded_even_when_widest() {
        let records = sample_records();
        let view = FilterEngine::apply_records(&records, &FilterCriteria::widest());
        assert_eq!(view.len(), 4);
        assert!(view.iter().all(|r| r.mass.is_some() && r.launch_decade.is_some()));
    }

    #[test]
    fn test_status_and_orbit_selectors() {
        let records = sample_records();

        let active = FilterCriteria {
            status_selector: StatusSelector::Active,
            ..FilterCriteria::widest()
        };
        assert_eq!(FilterEngine::apply_records(&records, &active).len(), 1);

        let decommissioned_leo = FilterCriteria {
            status_selector: StatusSelector::Decommissioned,
            orbit_selector: OrbitSelector::Group(OrbitGroup::Leo),
            ..FilterCriteria::widest()
        };
        let view = FilterEngine::apply_records(&records, &decommissioned_leo);
        assert_eq!(view.len(), 1);
        assert_eq!(view.records()[0].launch_decade, Some(2020));
    }

    #[test]
    fn test_ranges_are_inclusive() {
        let records = sample_records();
        let criteria = FilterCriteria {
            decade_range: InclusiveRange(1990, 1990),
            mass_range: InclusiveRange(1500.0, 1500.0),
            ..FilterCriteria::default()
        };
        assert_eq!(FilterEngine::apply_records(&records, &criteria).len(), 1);
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let records = sample_records();
        let criteria = FilterCriteria {
            decade_range: InclusiveRange(2090, 2099),
            ..FilterCriteria::default()
        };
        let view = FilterEngine::apply_records(&records, &criteria);
        assert!(view.is_empty());
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let records = sample_records();
        let criteria = FilterCriteria {
            decade_range: InclusiveRange(2020, 1980),
            ..FilterCriteria::widest()
        };
        assert!(FilterEngine::apply_records(&records, &criteria).is_empty());
    }

    #[test]
    fn test_from_json_full() {
        let criteria = FilterCriteria::from_json(
            r#"{"decadeRange":[1950,2020],"massRange":[0,10000],"orbitSelector":"GEO","statusSelector":"Decommissioned","activeView":"tab-3"}"#,
        )
        .unwrap();
        assert_eq!(criteria.decade_range, InclusiveRange(1950, 2020));
        assert_eq!(criteria.mass_range, InclusiveRange(0.0, 10000.0));
        assert_eq!(criteria.orbit_selector, OrbitSelector::Group(OrbitGroup::Geo));
        assert_eq!(criteria.status_selector, StatusSelector::Decommissioned);
        assert_eq!(criteria.active_view, ActiveView::OrbitLocation);
    }

    #[test]
    fn test_from_json_defaults_and_unknown_view() {
        let criteria = FilterCriteria::from_json(
            r#"{"decadeRange":[1950,2020],"massRange":[0,10000],"activeView":"tab-9"}"#,
        )
        .unwrap();
        assert_eq!(criteria.orbit_selector, OrbitSelector::All);
        assert_eq!(criteria.status_selector, StatusSelector::All);
        assert_eq!(criteria.active_view, ActiveView::Unknown("tab-9".to_string()));
    }

    #[test]
    fn test_from_json_reports_path() {
        let err = FilterCriteria::from_json(
            r#"{"decadeRange":[1950,2020],"massRange":[0,10000],"orbitSelector":"XEO"}"#,
        )
        .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("orbitSelector"), "{}", message);
        assert!(matches!(err, EngineError::InvalidQuery(_)));
    }

    #[test]
    fn test_criteria_json_roundtrip_shape() {
        let json = serde_json::to_value(FilterCriteria::default()).unwrap();
        assert_eq!(json["decadeRange"], serde_json::json!([1980, 2020]));
        assert_eq!(json["orbitSelector"], "All");
        assert_eq!(json["statusSelector"], "All");
        assert_eq!(json["activeView"], "tab-1");
    }

    fn arb_record() -> impl Strategy<Value = CanonicalRecord> {
        (
            prop::option::of(prop::sample::select(vec![1950, 1960, 1970, 1980, 1990, 2000, 2010, 2020])),
            prop::option::of(0.0f64..10000.0),
            any::<bool>(),
            prop::sample::select(OrbitGroup::ALL.to_vec()),
        )
            .prop_map(|(decade, mass, active, orbit)| sample_record(decade, mass, active, orbit))
    }

    proptest! {
        #[test]
        fn prop_widening_never_removes(
            records in prop::collection::vec(arb_record(), 0..60),
            d_lo in 1950i32..2020, d_span in 0i32..70, d_widen in 0i32..40,
            m_lo in 0.0f64..5000.0, m_span in 0.0f64..5000.0, m_widen in 0.0f64..3000.0,
            orbit in prop::sample::select(OrbitGroup::ALL.to_vec()),
            status in prop::sample::select(vec![StatusSelector::Active, StatusSelector::Decommissioned]),
        ) {
            let narrow = FilterCriteria {
                decade_range: InclusiveRange(d_lo, d_lo + d_span),
                mass_range: InclusiveRange(m_lo, m_lo + m_span),
                orbit_selector: OrbitSelector::Group(orbit),
                status_selector: status,
                active_view: ActiveView::LifespanTrends,
            };
            let narrow_view = FilterEngine::apply_records(&records, &narrow);

            let wider = [
                FilterCriteria { decade_range: InclusiveRange(d_lo - d_widen, d_lo + d_span + d_widen), ..narrow.clone() },
                FilterCriteria { mass_range: InclusiveRange(m_lo - m_widen, m_lo + m_span + m_widen), ..narrow.clone() },
                FilterCriteria { orbit_selector: OrbitSelector::All, ..narrow.clone() },
                FilterCriteria { status_selector: StatusSelector::All, ..narrow.clone() },
            ];

            for criteria in wider.iter() {
                let wide_view = FilterEngine::apply_records(&records, criteria);
                for kept in narrow_view.iter() {
                    prop_assert!(wide_view.iter().any(|r| std::ptr::eq(r, kept)));
                }
            }
        }
    }
}
