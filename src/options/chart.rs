use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scree Plot", inline)]
#[serde(default)]
/// Layout and labels of the variance (scree) chart.
pub struct ChartOptions {
    /// Space above the plot area, in pixels.
    #[schemars(skip)]
    pub margin_top: f32,
    /// Space right of the plot area, in pixels.
    #[schemars(skip)]
    pub margin_right: f32,
    /// Space below the plot area (x-axis labels), in pixels.
    #[schemars(skip)]
    pub margin_bottom: f32,
    /// Space left of the plot area (y-axis labels), in pixels.
    #[schemars(skip)]
    pub margin_left: f32,
    /// Fraction of the container height given to the chart.
    #[schemars(
        title = "Chart Height",
        range(min = 0.1, max = 1.0),
        extend("step" = 0.05)
    )]
    pub height_fraction: f32,
    /// Fraction of each band left empty between bars.
    #[schemars(
        title = "Bar Padding",
        range(min = 0.0, max = 0.9),
        extend("step" = 0.05)
    )]
    pub band_padding: f32,
    /// Approximate number of y-axis ticks.
    #[schemars(title = "Y Ticks", range(min = 1, max = 10))]
    pub y_ticks: usize,
    /// Bar fill color.
    #[schemars(skip)]
    pub bar_color: String,
    /// Bar fill color under the pointer.
    #[schemars(skip)]
    pub hover_color: String,
    /// Chart title.
    #[schemars(skip)]
    pub title: String,
    /// Y-axis label.
    #[schemars(skip)]
    pub y_label: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            margin_top: 10.0,
            margin_right: 10.0,
            margin_bottom: 30.0,
            margin_left: 40.0,
            height_fraction: 0.4,
            band_padding: 0.1,
            y_ticks: 4,
            bar_color: "steelblue".into(),
            hover_color: "teal".into(),
            title: "Scree Plot".into(),
            y_label: "% Variation Explained".into(),
        }
    }
}
