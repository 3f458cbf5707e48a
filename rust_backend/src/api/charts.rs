//! Bar chart specifications built from the decade aggregations.

use crate::api::types::{BarChart, BarMode, BarSeries, Chart};
use crate::services::aggregations::{OrbitSeries, StatusDecadeRow};

pub const STATUS_CHART_TITLE: &str = "Active vs Decommissioned Satellites by Launch Decade";
pub const ORBIT_CHART_TITLE: &str = "Top Orbit Types Where Decommissioned Satellites Accumulate";

const DECADE_AXIS: &str = "Launch Decade";
const DECOMMISSIONED_COLOR: &str = "rgba(0, 191, 255, 0.7)";
const ACTIVE_COLOR: &str = "rgba(255, 255, 255, 0.8)";

/// Colors of the orbit series, by rank.
pub const ORBIT_PALETTE: [&str; 4] = [
    "rgba(0, 191, 255, 0.7)",
    "rgba(255, 255, 255, 0.8)",
    "#ffd700",
    "#ff6347",
];

/// Stacked bars of decommissioned and active payloads per decade.
pub fn status_chart(rows: &[StatusDecadeRow]) -> Chart<BarChart> {
    if rows.is_empty() {
        return Chart::empty();
    }

    let decades: Vec<i32> = rows.iter().map(|r| r.decade).collect();
    let series = vec![
        BarSeries {
            name: "Decommissioned".to_string(),
            color: DECOMMISSIONED_COLOR.to_string(),
            x: decades.clone(),
            y: rows.iter().map(|r| r.decommissioned).collect(),
        },
        BarSeries {
            name: "Active".to_string(),
            color: ACTIVE_COLOR.to_string(),
            x: decades,
            y: rows.iter().map(|r| r.active).collect(),
        },
    ];

    Chart::Ready(BarChart {
        title: STATUS_CHART_TITLE.to_string(),
        x_axis_title: DECADE_AXIS.to_string(),
        y_axis_title: "Number of Satellites".to_string(),
        legend_title: "Status".to_string(),
        bar_mode: BarMode::Stack,
        series,
    })
}

/// Grouped bars of decommissioned payloads per decade, one series per ranked orbit group.
pub fn orbit_chart(ranked: &[OrbitSeries]) -> Chart<BarChart> {
    if ranked.is_empty() {
        return Chart::empty();
    }

    let series = ranked
        .iter()
        .enumerate()
        .map(|(rank, s)| BarSeries {
            name: s.orbit.as_str().to_string(),
            color: ORBIT_PALETTE[rank % ORBIT_PALETTE.len()].to_string(),
            x: s.counts.iter().map(|c| c.decade).collect(),
            y: s.counts.iter().map(|c| c.count).collect(),
        })
        .collect();

    Chart::Ready(BarChart {
        title: ORBIT_CHART_TITLE.to_string(),
        x_axis_title: DECADE_AXIS.to_string(),
        y_axis_title: "Number of Inactive Satellites".to_string(),
        legend_title: "Orbit Group".to_string(),
        bar_mode: BarMode::Group,
        series,
    })
}
