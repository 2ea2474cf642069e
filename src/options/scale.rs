use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scale", inline)]
#[serde(default)]
/// Bounds for metadata-driven marker scaling.
pub struct ScaleOptions {
    /// Factor given to the smallest numeric value.
    #[schemars(
        title = "Min Factor",
        range(min = 0.1, max = 10.0),
        extend("step" = 0.1)
    )]
    pub min_factor: f64,
    /// Factor given to the largest numeric value.
    #[schemars(
        title = "Max Factor",
        range(min = 0.1, max = 10.0),
        extend("step" = 0.1)
    )]
    pub max_factor: f64,
    /// Factor of markers without a category value.
    #[schemars(skip)]
    pub default_factor: f64,
    /// Initial global scale, kept as text like the bound input.
    #[schemars(skip)]
    pub default_global_scale: String,
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self {
            min_factor: 1.0,
            max_factor: 5.0,
            default_factor: 1.0,
            default_global_scale: "1.0".into(),
        }
    }
}
