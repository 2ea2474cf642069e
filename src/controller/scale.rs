//! Scale controller: marker size from a metadata category.
//!
//! Selecting a category gives every distinct value of that column a scale
//! factor, and every marker in every registered view takes the factor of its
//! sample's value. Factors are either uniform (`1.0`) or, with value scaling
//! on, a linear remap of the numeric values onto the configured factor
//! bounds. The state serializes to a flat JSON object:
//!
//! ```json
//! { "category": "DOB", "globalScale": "1.0", "scaleVal": true,
//!   "data": { "20070314": 1.0, "20071112": 5.0 } }
//! ```

use std::collections::BTreeMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Container, ViewController};
use crate::error::OrdiviewError;
use crate::model::Plottable;
use crate::options::{Options, ScaleOptions};
use crate::view::{RenderView, SharedRegistry};

/// Serialized scale state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScaleState {
    /// Selected metadata column; `None` disables category scaling.
    pub category: Option<String>,
    /// Global multiplier as typed by the user.
    pub global_scale: String,
    /// Whether factors follow the numeric values (vs. uniform `1.0`).
    pub scale_val: bool,
    /// Factor of each distinct value of the selected column.
    pub data: BTreeMap<String, f64>,
}

impl Default for ScaleState {
    fn default() -> Self {
        Self {
            category: None,
            global_scale: ScaleOptions::default().default_global_scale,
            scale_val: false,
            data: BTreeMap::new(),
        }
    }
}

/// State of the form controls bound to the controller.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScaleControls {
    /// Selectable metadata columns, across all views.
    pub categories: Vec<String>,
    /// Value shown by the category select.
    pub selected: Option<String>,
    /// Whether the "scale by value" checkbox is ticked.
    pub scaled_value: bool,
    /// Text of the global scale input.
    pub global_scale: String,
}

/// Column of the value grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridColumn {
    /// Field each row provides for this column.
    pub field: &'static str,
    /// Header text.
    pub name: &'static str,
}

/// Table of the current value-to-factor assignment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValueGrid {
    /// Columns in display order; `value` comes first.
    pub columns: Vec<GridColumn>,
    /// `(value, factor)` rows.
    pub rows: Vec<(String, f64)>,
}

/// Scales markers across every registered view by a metadata category.
#[derive(Debug)]
pub struct ScaleController {
    container: Container,
    registry: SharedRegistry,
    options: ScaleOptions,
    state: ScaleState,
    controls: ScaleControls,
    grid: ValueGrid,
}

impl ScaleController {
    const TITLE: &'static str = "Scale";
    const HELP: &'static str = "Change the size of the attributes on the plot";

    /// Create a controller over `registry` with default options.
    ///
    /// Fails when the registry is empty. No category is selected initially.
    pub fn new(
        container: Container,
        registry: SharedRegistry,
    ) -> Result<Self, OrdiviewError> {
        Self::with_options(container, registry, &Options::default())
    }

    /// Create a controller with explicit scale bounds.
    pub fn with_options(
        container: Container,
        registry: SharedRegistry,
        options: &Options,
    ) -> Result<Self, OrdiviewError> {
        if registry.is_empty() {
            return Err(OrdiviewError::EmptyRegistry);
        }
        let options = options.scale.clone();
        let state = ScaleState {
            global_scale: options.default_global_scale.clone(),
            ..ScaleState::default()
        };
        let mut controller = Self {
            container,
            registry,
            options,
            state,
            controls: ScaleControls::default(),
            grid: ValueGrid::default(),
        };
        controller.render();
        Ok(controller)
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &ScaleState {
        &self.state
    }

    /// Bound form controls.
    #[must_use]
    pub fn controls(&self) -> &ScaleControls {
        &self.controls
    }

    /// Value-to-factor grid.
    #[must_use]
    pub fn value_grid(&self) -> &ValueGrid {
        &self.grid
    }

    /// Selected metadata column.
    #[must_use]
    pub fn metadata_field(&self) -> Option<&str> {
        self.state.category.as_deref()
    }

    /// Select the metadata column driving marker scale.
    ///
    /// `None` clears the assignment and returns every marker to the default
    /// factor.
    pub fn set_metadata_field(&mut self, category: Option<&str>) {
        self.state.category = category.map(str::to_owned);
        self.recompute();
        log::debug!(
            "scale category -> {:?} ({} values)",
            self.state.category,
            self.state.data.len()
        );
    }

    /// Switch between uniform and value-based factors for the current
    /// category.
    pub fn set_scale_by_value(&mut self, scaled: bool) {
        self.state.scale_val = scaled;
        self.recompute();
    }

    /// Store the global scale text.
    ///
    /// The global multiplier is applied by the renderer on top of marker
    /// factors; it does not change per-marker scales.
    pub fn set_global_scale(&mut self, value: &str) {
        if value.trim().parse::<f64>().is_err() {
            log::warn!("global scale '{value}' is not numeric");
        }
        value.clone_into(&mut self.state.global_scale);
        self.sync_controls();
    }

    /// Factor for each distinct value in `values`.
    ///
    /// Unscaled, every value gets `1.0`. Scaled, values that are not finite
    /// numbers get `0.0` and numeric values are mapped linearly from their
    /// observed `[min, max]` onto the factor bounds; a single numeric value
    /// gets the lower bound.
    #[must_use]
    pub fn get_scale<S: AsRef<str>>(
        &self,
        values: &[S],
        scaled: bool,
    ) -> BTreeMap<String, f64> {
        if !scaled {
            return values
                .iter()
                .map(|v| (v.as_ref().to_owned(), 1.0))
                .collect();
        }

        let numeric: Vec<f64> =
            values.iter().filter_map(|v| parse_numeric(v.as_ref())).collect();
        let min = numeric.iter().copied().fold(f64::INFINITY, f64::min);
        let max = numeric.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        // halved so spans wider than f64::MAX stay finite
        let half_range = max / 2.0 - min / 2.0;
        let (low, high) = (self.options.min_factor, self.options.max_factor);

        values
            .iter()
            .map(|v| {
                let factor = match parse_numeric(v.as_ref()) {
                    Some(x) if half_range > 0.0 => {
                        let t = (x / 2.0 - min / 2.0) / half_range;
                        low + t.clamp(0.0, 1.0) * (high - low)
                    }
                    Some(_) => low,
                    None => 0.0,
                };
                (v.as_ref().to_owned(), factor)
            })
            .collect()
    }

    /// Set the scale of each referenced marker of `view` to `factor` on all
    /// three axes and mark the view dirty. Other markers are untouched.
    pub fn set_plottable_attributes(
        view: &mut RenderView,
        factor: f32,
        plottables: &[Plottable],
    ) {
        for plottable in plottables {
            if let Some(marker) = view.marker_mut(plottable.idx) {
                marker.scale = glam::Vec3::splat(factor);
            }
        }
        view.force_dirty();
    }

    /// Distinct values of the current category over all views, in order of
    /// first appearance.
    fn category_values(&self, category: &str) -> Vec<String> {
        let mut values: Vec<String> = Vec::new();
        for view in self.registry.unique_views() {
            let view = view.borrow();
            for value in view.model().borrow().unique_values(category) {
                if !values.contains(&value) {
                    values.push(value);
                }
            }
        }
        values
    }

    fn recompute(&mut self) {
        self.state.data = match self.state.category.as_deref() {
            Some(category) => {
                let values = self.category_values(category);
                self.get_scale(&values, self.state.scale_val)
            }
            None => BTreeMap::new(),
        };
        self.apply_to_views();
        self.sync_controls();
    }

    /// Reset every marker to the default factor, then give each sample the
    /// factor of its category value.
    fn apply_to_views(&self) {
        let default = self.options.default_factor as f32;
        for view in self.registry.unique_views() {
            let mut view = view.borrow_mut();
            let model = Rc::clone(view.model());
            let model = model.borrow();

            let all = model.plottables();
            Self::set_plottable_attributes(&mut view, default, &all);
            let Some(category) = self.state.category.as_deref() else {
                continue;
            };
            for (value, &factor) in &self.state.data {
                let group = model.plottables_by_value(category, value);
                if !group.is_empty() {
                    let factor = factor as f32;
                    Self::set_plottable_attributes(&mut view, factor, &group);
                }
            }
        }
    }

    fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for view in self.registry.unique_views() {
            let view = view.borrow();
            let model = view.model().borrow();
            for header in model.metadata_headers() {
                if !categories.contains(header) {
                    categories.push(header.clone());
                }
            }
        }
        categories
    }

    fn sync_controls(&mut self) {
        self.controls = ScaleControls {
            categories: self.categories(),
            selected: self.state.category.clone(),
            scaled_value: self.state.scale_val,
            global_scale: self.state.global_scale.clone(),
        };
        self.grid = ValueGrid {
            columns: vec![
                GridColumn {
                    field: "value",
                    name: "Category Value",
                },
                GridColumn {
                    field: "scale",
                    name: "Scale",
                },
            ],
            rows: self
                .state
                .data
                .iter()
                .map(|(value, &factor)| (value.clone(), factor))
                .collect(),
        };
    }
}

impl ViewController for ScaleController {
    fn title(&self) -> &'static str {
        Self::TITLE
    }

    fn help(&self) -> &'static str {
        Self::HELP
    }

    fn container(&self) -> &Container {
        &self.container
    }

    fn render(&mut self) {
        self.sync_controls();
    }

    fn to_json(&self) -> Result<Value, OrdiviewError> {
        Ok(serde_json::to_value(&self.state)?)
    }

    /// Restore a snapshot. `data` is applied as final factors; it is not
    /// re-derived from the category values. Unknown categories or values
    /// simply match no marker.
    fn from_json(&mut self, json: &Value) -> Result<(), OrdiviewError> {
        let mut state = ScaleState::deserialize(json)?;
        if json.get("globalScale").is_none() {
            state
                .global_scale
                .clone_from(&self.options.default_global_scale);
        }
        if state.category.is_none() && !state.data.is_empty() {
            log::warn!("ignoring scale data without a category");
            state.data.clear();
        }
        self.state = state;
        self.apply_to_views();
        self.sync_controls();
        log::debug!("restored scale state for {:?}", self.state.category);
        Ok(())
    }
}

/// Finite float value of a metadata string, if it has one.
fn parse_numeric(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|x| x.is_finite())
}
