//! Displayable descriptions built by the axes controller: the visible-axes
//! summary table and the scree chart.

use super::command::ContextMenu;
use crate::controller::Container;
use crate::options::{ChartOptions, TableOptions};

/// Prefix of every dimension label (`PC 1`, `PC 2`, ...).
pub const AXIS_PREFIX: &str = "PC";

/// Label of the bar for zero-based `dimension`.
#[must_use]
pub fn axis_label(dimension: usize) -> String {
    format!("{AXIS_PREFIX} {}", dimension + 1)
}

/// One row of the summary table.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    /// Axis position name, e.g. `First Axis`.
    pub axis: String,
    /// Zero-based dimension shown on that axis.
    pub dimension: usize,
    /// Dimension and percent explained, e.g. `PC 2 - 16.26%`.
    pub description: String,
}

/// Table of the three visible axes, by position.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryTable {
    /// Rows for the first, second and third axis.
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    pub(crate) fn build(
        visible: [usize; 3],
        percent_explained: &[f64],
        options: &TableOptions,
    ) -> Self {
        let rows = visible
            .iter()
            .zip(&options.axis_names)
            .map(|(&dimension, name)| {
                let percent =
                    percent_explained.get(dimension).copied().unwrap_or(0.0);
                SummaryRow {
                    axis: format!("{name} Axis"),
                    dimension,
                    description: format!(
                        "{} - {:.*}%",
                        axis_label(dimension),
                        options.decimals,
                        percent
                    ),
                }
            })
            .collect();
        Self { rows }
    }
}

/// One bar of the scree chart, in plot-area pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// Bar label, `PC i`; commands parse the dimension back out of it.
    pub label: String,
    /// Zero-based dimension.
    pub dimension: usize,
    /// Percent explained by the dimension.
    pub percent: f64,
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Band width.
    pub width: f32,
    /// Height, proportional to `percent`.
    pub height: f32,
}

/// Scree chart of percent explained for every dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct VarianceChart {
    /// Chart title.
    pub title: String,
    /// Y-axis label.
    pub y_label: String,
    /// Plot-area width.
    pub width: f32,
    /// Plot-area height.
    pub height: f32,
    /// Y-axis tick values.
    pub y_ticks: Vec<f64>,
    /// Bar fill color.
    pub fill: String,
    /// Bar fill color under the pointer.
    pub hover_fill: String,
    /// One bar per dimension, in dimension order.
    pub bars: Vec<Bar>,
    /// Menu bound to every bar.
    pub menu: ContextMenu,
}

impl VarianceChart {
    pub(crate) fn build(
        percent_explained: &[f64],
        container: &Container,
        options: &ChartOptions,
    ) -> Self {
        let width = (container.width
            - options.margin_left
            - options.margin_right)
            .max(0.0);
        let height = (container.height * options.height_fraction
            - options.margin_top
            - options.margin_bottom)
            .max(0.0);

        let max = percent_explained.iter().copied().fold(0.0, f64::max);
        let bands = round_bands(
            percent_explained.len(),
            width,
            options.band_padding,
        );

        let bars = percent_explained
            .iter()
            .zip(bands)
            .enumerate()
            .map(|(dimension, (&percent, (x, band)))| {
                let bar_height = if max > 0.0 {
                    (percent / max * f64::from(height)) as f32
                } else {
                    0.0
                };
                Bar {
                    label: axis_label(dimension),
                    dimension,
                    percent,
                    x,
                    y: height - bar_height,
                    width: band,
                    height: bar_height,
                }
            })
            .collect();

        Self {
            title: options.title.clone(),
            y_label: options.y_label.clone(),
            width,
            height,
            y_ticks: linear_ticks(max, options.y_ticks),
            fill: options.bar_color.clone(),
            hover_fill: options.hover_color.clone(),
            bars,
            menu: ContextMenu::axis_menu(),
        }
    }

    /// Bar for a label, if the chart has one.
    #[must_use]
    pub fn bar(&self, label: &str) -> Option<&Bar> {
        self.bars.iter().find(|b| b.label == label)
    }
}

/// Split `[0, extent]` into `n` rounded bands separated by `padding`.
///
/// Returns `(start, width)` per band; leftover pixels are split evenly
/// around the bands.
fn round_bands(n: usize, extent: f32, padding: f32) -> Vec<(f32, f32)> {
    if n == 0 {
        return Vec::new();
    }
    let step = (extent / (n as f32 - padding)).floor();
    let leftover = extent - (n as f32 - padding) * step;
    let start = (leftover / 2.0).round();
    let band = (step * (1.0 - padding)).round();
    (0..n).map(|i| (start + step * i as f32, band)).collect()
}

/// Evenly spaced "nice" ticks (multiples of 1, 2 or 5 times a power of ten)
/// covering `[0, max]`.
fn linear_ticks(max: f64, count: usize) -> Vec<f64> {
    if max <= 0.0 || count == 0 {
        return vec![0.0];
    }
    let raw = max / count as f64;
    let mut step = 10f64.powf(raw.log10().floor());
    let error = raw / step;
    if error >= 50f64.sqrt() {
        step *= 10.0;
    } else if error >= 10f64.sqrt() {
        step *= 5.0;
    } else if error >= 2f64.sqrt() {
        step *= 2.0;
    }
    let last = (max / step).floor() as usize;
    (0..=last).map(|i| i as f64 * step).collect()
}
