//! Filter widget descriptors and the static per-tab descriptions.

use serde::{Deserialize, Serialize};

use crate::core::domain::OrbitGroup;
use crate::transformations::filtering::{ActiveView, FilterCriteria, StatusSelector};

/// A labelled choice in a dropdown, radio group or tab strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Range slider bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSpec<T> {
    pub min: T,
    pub max: T,
    pub step: T,
    pub value: [T; 2],
    pub marks: Vec<T>,
}

/// Description of every filter control the dashboard shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub decade_slider: SliderSpec<i32>,
    pub mass_slider: SliderSpec<f64>,
    pub orbit_options: Vec<SelectOption>,
    pub status_options: Vec<SelectOption>,
    pub tabs: Vec<SelectOption>,
}

impl FilterOptions {
    /// Controls of the lifespan dashboard, initialised to [`FilterCriteria::default`].
    pub fn dashboard() -> Self {
        let defaults = FilterCriteria::default();

        let mut orbit_options = vec![SelectOption::new("All", "All")];
        orbit_options.extend(
            OrbitGroup::ALL
                .iter()
                .map(|g| SelectOption::new(g.display_name(), g.as_str())),
        );

        let status_options = [
            StatusSelector::All,
            StatusSelector::Active,
            StatusSelector::Decommissioned,
        ]
        .iter()
        .map(|s| SelectOption::new(s.as_str(), s.as_str()))
        .collect();

        let tabs = [
            ActiveView::LifespanTrends,
            ActiveView::RetirementStatus,
            ActiveView::OrbitLocation,
        ]
        .iter()
        .map(|v| SelectOption::new(tab_label(v), v.tab_id()))
        .collect();

        Self {
            decade_slider: SliderSpec {
                min: 1950,
                max: 2020,
                step: 10,
                value: [defaults.decade_range.lo(), defaults.decade_range.hi()],
                marks: (1950..=2030).step_by(10).collect(),
            },
            mass_slider: SliderSpec {
                min: 0.0,
                max: 10000.0,
                step: 100.0,
                value: [defaults.mass_range.lo(), defaults.mass_range.hi()],
                marks: (0..=10000).step_by(2000).map(f64::from).collect(),
            },
            orbit_options,
            status_options,
            tabs,
        }
    }
}

fn tab_label(view: &ActiveView) -> &'static str {
    match view {
        ActiveView::LifespanTrends => "Lifespan Trends Over Time",
        ActiveView::RetirementStatus => "Are Satellites Being Retired Responsibly?",
        ActiveView::OrbitLocation => "Where Are Decommissioned Satellites Located?",
        ActiveView::Unknown(_) => "",
    }
}

const LIFESPAN_TRENDS_DESCRIPTION: &str = "Satellite lifespans have changed over time. Early satellites lasted only a few years, but by the 1990s, better technology meant they stayed active much longer. Recently, the rise of small, low-cost satellites like CubeSats has led to shorter lifespans again—raising concerns about growing space clutter and long-term sustainability.";

const RETIREMENT_STATUS_DESCRIPTION: &str = "Most satellites are never removed after they stop working. While launches have increased each decade, so has the number of inactive satellites left behind. Many older satellites—especially from the 1990s and 2000s—weren't designed to safely deorbit, adding to the growing clutter in space.";

const ORBIT_LOCATION_DESCRIPTION: &str = "Most retired satellites stay in low Earth orbit (LEO). As more small satellites and mega-constellations are launched, LEO is becoming crowded—not just with working satellites, but also with space junk. If this isn't managed, it could threaten future missions.";

/// Static explanatory text for a chart tab. Unknown tabs get an empty string.
pub fn description_for(view: &ActiveView) -> &'static str {
    match view {
        ActiveView::LifespanTrends => LIFESPAN_TRENDS_DESCRIPTION,
        ActiveView::RetirementStatus => RETIREMENT_STATUS_DESCRIPTION,
        ActiveView::OrbitLocation => ORBIT_LOCATION_DESCRIPTION,
        ActiveView::Unknown(_) => "",
    }
}
