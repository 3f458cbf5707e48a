//! Stacked kernel-density ridgeline of lifespans per launch decade.

use std::collections::BTreeMap;

use crate::api::types::{Chart, GroupSkip, RidgeChart, RidgeTrace, SkippedGroup};
use crate::config::RidgeSettings;
use crate::transformations::filtering::FilteredView;

/// Fill colors cycled across decades.
pub const RIDGE_PALETTE: [&str; 10] = [
    "rgba(0, 191, 255, 0.7)",
    "rgba(65, 105, 225, 0.7)",
    "rgba(70, 130, 180, 0.7)",
    "rgba(100, 149, 237, 0.7)",
    "rgba(30, 144, 255, 0.7)",
    "rgba(255, 255, 255, 0.8)",
    "rgba(25, 25, 112, 0.7)",
    "rgba(0, 0, 255, 0.7)",
    "rgba(135, 206, 250, 0.7)",
    "rgba(0, 0, 205, 0.7)",
];

const RIDGE_TITLE: &str = "How Satellite Lifespans Have Changed Over the Decades";
const RIDGE_X_AXIS: &str = "Lifespan (Years)";
const RIDGE_Y_AXIS: &str = "Launch Decade (stacked)";

/// Gaussian kernel density estimate with a scalar bandwidth factor.
///
/// The kernel standard deviation is the sample standard deviation (n - 1
/// denominator) multiplied by the factor.
#[derive(Debug, Clone)]
pub struct GaussianKde {
    samples: Vec<f64>,
    sigma: f64,
}

impl GaussianKde {
    pub fn new(samples: &[f64], bandwidth_factor: f64) -> Result<Self, GroupSkip> {
        if samples.iter().any(|v| !v.is_finite()) {
            return Err(GroupSkip::NonFinite);
        }
        if samples.len() < 2 {
            return Err(GroupSkip::DegenerateSpread);
        }

        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let variance = samples
            .iter()
            .map(|v| {
                let diff = v - mean;
                diff * diff
            })
            .sum::<f64>()
            / (n - 1.0);
        let sigma = variance.sqrt() * bandwidth_factor;

        if !(sigma.is_finite() && sigma > 0.0) {
            return Err(GroupSkip::DegenerateSpread);
        }

        Ok(Self {
            samples: samples.to_vec(),
            sigma,
        })
    }

    /// Kernel standard deviation.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Density at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        let norm = 1.0 / (self.samples.len() as f64 * self.sigma * (2.0 * std::f64::consts::PI).sqrt());
        self.samples
            .iter()
            .map(|&xi| {
                let z = (x - xi) / self.sigma;
                (-0.5 * z * z).exp()
            })
            .sum::<f64>()
            * norm
    }

    pub fn evaluate_grid(&self, grid: &[f64]) -> Vec<f64> {
        grid.iter().map(|&x| self.evaluate(x)).collect()
    }
}

/// `n` evenly spaced points from `start` to `stop`, both included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Result of estimating one decade.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupOutcome {
    Curve { decade: i32, sample_count: usize, density: Vec<f64> },
    Skipped(SkippedGroup),
}

/// Estimate and unit-normalize the density of one decade on `grid`.
pub fn estimate_group(
    decade: i32,
    lifespans: &[f64],
    grid: &[f64],
    settings: &RidgeSettings,
) -> GroupOutcome {
    let skip = |reason: GroupSkip| {
        log::debug!("Skipping decade {} in lifespan ridgeline: {:?}", decade, reason);
        GroupOutcome::Skipped(SkippedGroup { decade, reason })
    };

    if lifespans.len() < settings.min_group_size {
        return skip(GroupSkip::TooFewSamples {
            count: lifespans.len(),
            required: settings.min_group_size,
        });
    }

    let kde = match GaussianKde::new(lifespans, settings.bandwidth) {
        Ok(kde) => kde,
        Err(reason) => return skip(reason),
    };

    let mut density = kde.evaluate_grid(grid);
    if density.iter().any(|y| !y.is_finite()) {
        return skip(GroupSkip::NonFinite);
    }

    let peak = density.iter().copied().fold(0.0_f64, f64::max);
    if peak <= 0.0 {
        return skip(GroupSkip::ZeroDensity);
    }
    for y in density.iter_mut() {
        *y /= peak;
    }

    GroupOutcome::Curve {
        decade,
        sample_count: lifespans.len(),
        density,
    }
}

/// Builds the lifespan ridgeline from a filtered view.
#[derive(Debug, Clone, Default)]
pub struct DensityRidgeBuilder {
    settings: RidgeSettings,
}

impl DensityRidgeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: RidgeSettings) -> Self {
        Self { settings }
    }

    /// Build the ridgeline, or the empty sentinel when no decade yields a curve.
    ///
    /// Surviving curves are stacked in ascending decade order; offset and color
    /// follow the curve's position in that stack, so skipped decades leave no gap.
    pub fn build(&self, view: &FilteredView<'_>) -> Chart<RidgeChart> {
        if view.is_empty() {
            return Chart::empty();
        }

        let mut max_lifespan = view
            .iter()
            .map(|r| r.lifespan_years)
            .fold(f64::NEG_INFINITY, f64::max);
        if !(max_lifespan > 0.0) {
            max_lifespan = 1.0;
        }
        let grid = linspace(0.0, max_lifespan, self.settings.grid_points);

        let mut by_decade: BTreeMap<i32, Vec<f64>> = BTreeMap::new();
        for record in view.iter() {
            if let Some(decade) = record.launch_decade {
                by_decade.entry(decade).or_default().push(record.lifespan_years);
            }
        }

        let mut traces = Vec::new();
        let mut skipped = Vec::new();

        for (decade, lifespans) in &by_decade {
            match estimate_group(*decade, lifespans, &grid, &self.settings) {
                GroupOutcome::Curve {
                    decade,
                    sample_count,
                    density,
                } => {
                    let index = traces.len();
                    let offset = index as f64 * self.settings.overlap;
                    let y = density.iter().map(|v| v + offset).collect();
                    traces.push(RidgeTrace {
                        name: format!("{}s", decade),
                        decade,
                        sample_count,
                        offset,
                        color: RIDGE_PALETTE[index % RIDGE_PALETTE.len()].to_string(),
                        density,
                        y,
                    });
                }
                GroupOutcome::Skipped(group) => skipped.push(group),
            }
        }

        if traces.is_empty() {
            return Chart::empty();
        }

        Chart::Ready(RidgeChart {
            title: RIDGE_TITLE.to_string(),
            x_axis_title: RIDGE_X_AXIS.to_string(),
            y_axis_title: RIDGE_Y_AXIS.to_string(),
            grid,
            traces,
            skipped,
        })
    }
}
