//! Per-decade counts behind the status and orbit bar charts.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::core::domain::OrbitGroup;
use crate::transformations::filtering::FilteredView;

/// Active and decommissioned payload counts for one launch decade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDecadeRow {
    pub decade: i32,
    pub active: usize,
    pub decommissioned: usize,
}

impl StatusDecadeRow {
    pub fn total(&self) -> usize {
        self.active + self.decommissioned
    }
}

/// Count records per decade and status, ascending by decade.
///
/// Only decades present in the view appear; there is no zero fill.
pub fn build_status_by_decade(view: &FilteredView<'_>) -> Vec<StatusDecadeRow> {
    let mut rows: BTreeMap<i32, StatusDecadeRow> = BTreeMap::new();

    for record in view.iter() {
        let Some(decade) = record.launch_decade else {
            continue;
        };
        let row = rows.entry(decade).or_insert(StatusDecadeRow {
            decade,
            active: 0,
            decommissioned: 0,
        });
        if record.is_active {
            row.active += 1;
        } else {
            row.decommissioned += 1;
        }
    }

    rows.into_values().collect()
}

/// Inactive count for one orbit group in one decade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrbitDecadeCount {
    pub decade: i32,
    pub count: usize,
}

/// Decade breakdown of decommissioned payloads in one orbit group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrbitSeries {
    pub orbit: OrbitGroup,
    pub total: usize,
    /// Ascending by decade, decades with no inactive records omitted.
    pub counts: Vec<OrbitDecadeCount>,
}

/// Decommissioned payloads of the `top_n` most populated orbit groups.
///
/// Groups are ranked by inactive total, descending. Equal totals keep the
/// alphabetical order of their labels.
pub fn build_orbit_by_decade(view: &FilteredView<'_>, top_n: usize) -> Vec<OrbitSeries> {
    let mut per_group: HashMap<OrbitGroup, BTreeMap<i32, usize>> = HashMap::new();

    for record in view.iter().filter(|r| !r.is_active) {
        let Some(decade) = record.launch_decade else {
            continue;
        };
        *per_group
            .entry(record.orbit_group)
            .or_default()
            .entry(decade)
            .or_insert(0) += 1;
    }

    let mut series: Vec<OrbitSeries> = per_group
        .into_iter()
        .map(|(orbit, decades)| OrbitSeries {
            orbit,
            total: decades.values().sum(),
            counts: decades
                .into_iter()
                .map(|(decade, count)| OrbitDecadeCount { decade, count })
                .collect(),
        })
        .collect();

    series.sort_by(|a, b| a.orbit.as_str().cmp(b.orbit.as_str()));
    series.sort_by(|a, b| b.total.cmp(&a.total));
    series.truncate(top_n);

    log::debug!(
        "Orbit ranking: {:?}",
        series.iter().map(|s| (s.orbit.as_str(), s.total)).collect::<Vec<_>>()
    );

    series
}
