use serde::{Deserialize, Serialize};

/// Title of the placeholder figure shown when a query yields nothing to plot.
pub const EMPTY_CHART_MESSAGE: &str =
    "Oops! Nothing to display. The data for this criteria is unavailable.";

/// Placeholder figure returned instead of an error when there is no data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmptyChart {
    pub title: String,
}

impl Default for EmptyChart {
    fn default() -> Self {
        Self {
            title: EMPTY_CHART_MESSAGE.to_string(),
        }
    }
}

/// A chart specification or the empty sentinel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Chart<T> {
    Empty(EmptyChart),
    Ready(T),
}

impl<T> Chart<T> {
    pub fn empty() -> Self {
        Chart::Empty(EmptyChart::default())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Chart::Empty(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Chart::Ready(spec) => Some(spec),
            Chart::Empty(_) => None,
        }
    }
}

/// Why a decade produced no density curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum GroupSkip {
    /// Fewer samples than the estimator needs.
    TooFewSamples { count: usize, required: usize },
    /// Zero or undefined spread; the kernel width collapses.
    DegenerateSpread,
    /// The estimate is zero everywhere on the grid.
    ZeroDensity,
    /// The estimate produced NaN or infinite values.
    NonFinite,
}

/// A decade left out of the ridgeline, and why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedGroup {
    pub decade: i32,
    #[serde(flatten)]
    pub reason: GroupSkip,
}

/// One density curve of the ridgeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RidgeTrace {
    /// Legend label, e.g. `1990s`.
    pub name: String,
    pub decade: i32,
    pub sample_count: usize,
    pub offset: f64,
    pub color: String,
    /// Density scaled to a unit peak, before the offset is added.
    pub density: Vec<f64>,
    /// `density + offset`, the values to plot.
    pub y: Vec<f64>,
}

/// Stacked density ridgeline of lifespans per launch decade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RidgeChart {
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    /// Lifespan sampling grid shared by every trace.
    pub grid: Vec<f64>,
    pub traces: Vec<RidgeTrace>,
    pub skipped: Vec<SkippedGroup>,
}

/// How bar series are laid out relative to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarMode {
    Stack,
    Group,
}

/// One named bar series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSeries {
    pub name: String,
    pub color: String,
    /// Launch decades.
    pub x: Vec<i32>,
    /// Counts per decade.
    pub y: Vec<usize>,
}

/// Bar chart specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub legend_title: String,
    pub bar_mode: BarMode,
    pub series: Vec<BarSeries>,
}

impl BarChart {
    pub fn series_named(&self, name: &str) -> Option<&BarSeries> {
        self.series.iter().find(|s| s.name == name)
    }
}

/// Everything the dashboard renders for one interaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub ridge_chart: Chart<RidgeChart>,
    pub status_bar_chart: Chart<BarChart>,
    pub orbit_bar_chart: Chart<BarChart>,
    pub total_text: String,
    pub active_text: String,
    pub avg_lifespan_text: String,
    pub avg_mass_text: String,
    pub description_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_chart_serializes_with_status() {
        let chart: Chart<BarChart> = Chart::empty();
        assert!(chart.is_empty());
        assert!(chart.ready().is_none());
        assert_eq!(
            serde_json::to_value(&chart).unwrap(),
            json!({"status": "empty", "title": EMPTY_CHART_MESSAGE})
        );
    }

    #[test]
    fn test_ready_chart_flattens_spec() {
        let chart = Chart::Ready(BarChart {
            title: "t".to_string(),
            x_axis_title: "x".to_string(),
            y_axis_title: "y".to_string(),
            legend_title: "l".to_string(),
            bar_mode: BarMode::Group,
            series: vec![],
        });
        let value = serde_json::to_value(&chart).unwrap();
        assert_eq!(value["status"], "ready");
        assert_eq!(value["bar_mode"], "group");
    }

    #[test]
    fn test_skipped_group_flattens_reason() {
        let skipped = SkippedGroup {
            decade: 1960,
            reason: GroupSkip::TooFewSamples { count: 3, required: 5 },
        };
        assert_eq!(
            serde_json::to_value(&skipped).unwrap(),
            json!({"decade": 1960, "reason": "too_few_samples", "count": 3, "required": 5})
        );
    }
}
