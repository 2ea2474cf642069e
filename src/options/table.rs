use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Axes Table", inline)]
#[serde(default)]
/// Formatting of the visible-axes summary table.
pub struct TableOptions {
    /// Decimal places shown for percent explained.
    #[schemars(title = "Decimals", range(min = 0, max = 6))]
    pub decimals: usize,
    /// Row names for the first, second and third axis.
    #[schemars(skip)]
    pub axis_names: [String; 3],
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decimals: 2,
            axis_names: ["First".into(), "Second".into(), "Third".into()],
        }
    }
}
