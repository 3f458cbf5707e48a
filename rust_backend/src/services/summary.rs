//! Headline statistics for the filtered view.

use serde::{Deserialize, Serialize};

use crate::transformations::filtering::FilteredView;

/// Text shown when a statistic has nothing to summarize.
pub const NO_VALUE: &str = "0";

/// The four summary figures, pre-formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total: String,
    pub active: String,
    pub avg_lifespan: String,
    pub avg_mass: String,
}

impl SummaryStats {
    pub fn empty() -> Self {
        Self {
            total: NO_VALUE.to_string(),
            active: NO_VALUE.to_string(),
            avg_lifespan: NO_VALUE.to_string(),
            avg_mass: NO_VALUE.to_string(),
        }
    }

    pub fn compute(view: &FilteredView<'_>) -> Self {
        if view.is_empty() {
            return Self::empty();
        }

        let active = view.iter().filter(|r| r.is_active).count();
        let lifespans: Vec<f64> = view.iter().map(|r| r.lifespan_years).collect();
        let masses: Vec<f64> = view.iter().filter_map(|r| r.mass).collect();

        Self {
            total: view.len().to_string(),
            active: active.to_string(),
            avg_lifespan: format_mean(&lifespans),
            avg_mass: format_mean(&masses),
        }
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Mean to one decimal place, or [`NO_VALUE`] for an empty slice.
pub fn format_mean(values: &[f64]) -> String {
    match mean(values) {
        Some(m) => format!("{:.1}", m),
        None => NO_VALUE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::{CanonicalRecord, OrbitGroup};

    fn record(lifespan: f64, mass: Option<f64>, active: bool) -> CanonicalRecord {
        CanonicalRecord {
            object_type: "P".to_string(),
            launch_date: None,
            decay_date: None,
            mass,
            orbit_code: "GEO".to_string(),
            lifespan_years: lifespan,
            launch_year: Some(1995),
            launch_decade: Some(1990),
            is_active: active,
            orbit_group: OrbitGroup::Geo,
        }
    }

    #[test]
    fn test_empty_view_is_all_zero() {
        let records: Vec<CanonicalRecord> = vec![];
        let view: FilteredView = records.iter().collect();
        assert_eq!(SummaryStats::compute(&view), SummaryStats::empty());
        assert_eq!(SummaryStats::empty().avg_mass, "0");
    }

    #[test]
    fn test_mean_lifespan_one_decimal() {
        let records: Vec<CanonicalRecord> = [1.0, 2.0, 3.0, 4.0, 5.0, 50.0]
            .iter()
            .map(|&l| record(l, Some(100.0), true))
            .collect();
        let view: FilteredView = records.iter().collect();
        let stats = SummaryStats::compute(&view);

        assert_eq!(stats.total, "6");
        assert_eq!(stats.active, "6");
        assert_eq!(stats.avg_lifespan, "10.8");
        assert_eq!(stats.avg_mass, "100.0");
    }

    #[test]
    fn test_active_and_mass_counts() {
        let records = vec![
            record(1.0, Some(10.0), true),
            record(2.0, Some(25.0), false),
            record(3.0, None, false),
        ];
        let view: FilteredView = records.iter().collect();
        let stats = SummaryStats::compute(&view);

        assert_eq!(stats.total, "3");
        assert_eq!(stats.active, "1");
        assert_eq!(stats.avg_lifespan, "2.0");
        assert_eq!(stats.avg_mass, "17.5");
    }

    #[test]
    fn test_format_mean() {
        assert_eq!(format_mean(&[]), "0");
        assert_eq!(format_mean(&[0.2, 0.4]), "0.3");
        assert_eq!(format_mean(&[1234.56]), "1234.6");
    }
}
