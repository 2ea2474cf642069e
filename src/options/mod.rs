//! Presentation and scaling options with TOML preset support.
//!
//! All tweakable settings of the controllers (scree chart layout, summary
//! table formatting, scale factor bounds) are consolidated here. Options
//! serialize to/from TOML so a host can ship presets.

mod chart;
mod scale;
mod table;

use std::path::Path;

pub use chart::ChartOptions;
pub use scale::ScaleOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use table::TableOptions;

use crate::error::OrdiviewError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[scale]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Scree chart layout and labels.
    pub chart: ChartOptions,
    /// Summary table formatting.
    pub table: TableOptions,
    /// Scale factor bounds.
    pub scale: ScaleOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(text: &str) -> Result<Self, OrdiviewError> {
        toml::from_str(text)
            .map_err(|e| OrdiviewError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, OrdiviewError> {
        let content = std::fs::read_to_string(path).map_err(OrdiviewError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), OrdiviewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrdiviewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrdiviewError::Io)?;
        }
        std::fs::write(path, content).map_err(OrdiviewError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[scale]
max_factor = 3.0
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.scale.max_factor, 3.0);
        // Everything else should be default
        assert_eq!(opts.scale.min_factor, 1.0);
        assert_eq!(opts.table.decimals, 2);
        assert_eq!(opts.chart.title, "Scree Plot");
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("[scale\nmax_factor = ").unwrap_err();
        assert!(matches!(err, OrdiviewError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = std::env::temp_dir()
            .join(format!("ordiview-options-{}", std::process::id()));
        let path = dir.join("presets").join("custom.toml");
        let mut opts = Options::default();
        opts.scale.max_factor = 8.0;
        opts.chart.bar_color = "darkorange".into();

        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Options::load(Path::new("/nonexistent/ordiview.toml"))
            .unwrap_err();
        assert!(matches!(err, OrdiviewError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();
        assert!(props.contains_key("chart"));
        assert!(props.contains_key("table"));
        assert!(props.contains_key("scale"));

        let scale = &props["scale"]["properties"];
        assert!(scale.get("max_factor").is_some());
        assert!(scale.get("default_global_scale").is_none());
    }
}
