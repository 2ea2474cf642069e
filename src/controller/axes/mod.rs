//! Axes controller: which three dimensions are visible, in what order, and
//! with which orientation.
//!
//! The controller works on one active view of the shared registry at a
//! time. It builds a [`SummaryTable`] of the visible axes and a
//! [`VarianceChart`] whose bars carry the [`AxisCommand`] menu; the host
//! routes a menu activation back through [`AxisController::execute`].

mod chart;
mod command;

use std::rc::Rc;

pub use chart::{axis_label, Bar, SummaryRow, SummaryTable, VarianceChart};
pub use command::{
    parse_axis_label, AxisCommand, ContextMenu, MenuEntry, MenuTrigger,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Container, ViewController};
use crate::error::OrdiviewError;
use crate::options::Options;
use crate::view::{SharedRegistry, SharedView};

/// Serialized axes state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisState {
    /// Registry key of the active view.
    pub view_key: String,
    /// Dimensions on the first, second and third axis.
    pub visible_dimensions: [usize; 3],
    /// Whether each model dimension is drawn inverted.
    #[serde(default)]
    pub flipped_axes: Vec<bool>,
}

/// Controls the visible dimensions of the active view.
#[derive(Debug)]
pub struct AxisController {
    container: Container,
    registry: SharedRegistry,
    active_view_key: String,
    active_view: SharedView,
    options: Options,
    table: Option<SummaryTable>,
    chart: Option<VarianceChart>,
}

impl AxisController {
    const TITLE: &'static str = "Axes";
    const HELP: &'static str = "Change the visible dimensions of the data";

    /// Create a controller over `registry` with default options.
    ///
    /// The first registered view becomes active. Fails when the registry is
    /// empty.
    pub fn new(
        container: Container,
        registry: SharedRegistry,
    ) -> Result<Self, OrdiviewError> {
        Self::with_options(container, registry, &Options::default())
    }

    /// Create a controller with explicit presentation options.
    pub fn with_options(
        container: Container,
        registry: SharedRegistry,
        options: &Options,
    ) -> Result<Self, OrdiviewError> {
        let (key, view) = registry
            .first()
            .map(|(k, v)| (k.to_owned(), Rc::clone(v)))
            .ok_or(OrdiviewError::EmptyRegistry)?;

        let mut controller = Self {
            container,
            registry,
            active_view_key: key,
            active_view: view,
            options: options.clone(),
            table: None,
            chart: None,
        };
        controller.render();
        Ok(controller)
    }

    /// Registry key of the active view.
    #[must_use]
    pub fn active_view_key(&self) -> &str {
        &self.active_view_key
    }

    /// The active view.
    #[must_use]
    pub fn active_view(&self) -> &SharedView {
        &self.active_view
    }

    /// The shared registry.
    #[must_use]
    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    /// Make the view registered under `key` active and redraw.
    pub fn set_active_view(&mut self, key: &str) -> Result<(), OrdiviewError> {
        let view = self
            .registry
            .get(key)
            .ok_or_else(|| OrdiviewError::UnknownView(key.to_owned()))?;
        self.active_view = Rc::clone(view);
        key.clone_into(&mut self.active_view_key);
        log::debug!("axes controller now follows view '{key}'");
        self.render();
        Ok(())
    }

    /// Last built summary table.
    #[must_use]
    pub fn summary_table(&self) -> Option<&SummaryTable> {
        self.table.as_ref()
    }

    /// Last built scree chart.
    #[must_use]
    pub fn variance_chart(&self) -> Option<&VarianceChart> {
        self.chart.as_ref()
    }

    /// Rebuild the table of visible axes from the active view.
    ///
    /// Any previous table is discarded first. The table is not reactive;
    /// command handlers call this after they change the visible dimensions.
    pub fn render_summary_table(&mut self) -> &SummaryTable {
        self.table = None;
        let table = {
            let view = self.active_view.borrow();
            let model = view.model().borrow();
            SummaryTable::build(
                view.visible_dimensions(),
                model.percent_explained(),
                &self.options.table,
            )
        };
        self.table.insert(table)
    }

    /// Rebuild the scree chart: one bar per model dimension.
    pub fn render_variance_chart(&mut self) -> &VarianceChart {
        let chart = {
            let view = self.active_view.borrow();
            let model = view.model().borrow();
            VarianceChart::build(
                model.percent_explained(),
                &self.container,
                &self.options.chart,
            )
        };
        self.chart.insert(chart)
    }

    /// Run a menu command for the bar labelled `label`.
    pub fn execute(
        &mut self,
        label: &str,
        command: AxisCommand,
    ) -> Result<(), OrdiviewError> {
        match command.position() {
            Some(position) => {
                self.update_visible_axes(label, position)?;
                let _ = self.render_summary_table();
                Ok(())
            }
            None => self.flip_axis(label),
        }
    }

    /// Run a menu command given by its key (`assign-first`, ..., `flip`).
    pub fn execute_key(
        &mut self,
        label: &str,
        key: &str,
    ) -> Result<(), OrdiviewError> {
        self.execute(label, key.parse()?)
    }

    /// Put the dimension named by `label` at `position` of the visible
    /// triple and apply it to the active view.
    ///
    /// The other positions are left alone, so the same dimension may end up
    /// on two axes.
    pub fn update_visible_axes(
        &mut self,
        label: &str,
        position: usize,
    ) -> Result<(), OrdiviewError> {
        let dimension = parse_axis_label(label)?;
        let mut view = self.active_view.borrow_mut();
        let mut visible = view.visible_dimensions();
        let Some(slot) = visible.get_mut(position) else {
            return Err(OrdiviewError::InvalidAxisPosition(position));
        };
        *slot = dimension;
        view.change_visible_dimensions(visible)?;
        log::debug!(
            "view '{}' visible dimensions -> {visible:?}",
            self.active_view_key
        );
        Ok(())
    }

    /// Invert the orientation of the dimension named by `label`.
    pub fn flip_axis(&mut self, label: &str) -> Result<(), OrdiviewError> {
        let dimension = parse_axis_label(label)?;
        self.active_view
            .borrow_mut()
            .flip_axis_orientation(dimension)?;
        log::debug!(
            "view '{}' flipped dimension {dimension}",
            self.active_view_key
        );
        Ok(())
    }

    /// Current state of the active view.
    #[must_use]
    pub fn state(&self) -> AxisState {
        let view = self.active_view.borrow();
        let dimensions = view.axis_orientation().len();
        AxisState {
            view_key: self.active_view_key.clone(),
            visible_dimensions: view.visible_dimensions(),
            flipped_axes: (0..dimensions).map(|d| view.is_flipped(d)).collect(),
        }
    }

    /// Apply a state to the registry: switch views, set the visible triple,
    /// and flip the axes whose orientation differs.
    ///
    /// Entries of `flipped_axes` beyond the model's dimensions are ignored.
    pub fn apply_state(
        &mut self,
        state: &AxisState,
    ) -> Result<(), OrdiviewError> {
        let target = self
            .registry
            .get(&state.view_key)
            .ok_or_else(|| OrdiviewError::UnknownView(state.view_key.clone()))?;
        let dimensions = target.borrow().axis_orientation().len();
        if let Some(&dimension) =
            state.visible_dimensions.iter().find(|&&d| d >= dimensions)
        {
            return Err(OrdiviewError::DimensionOutOfRange {
                dimension,
                dimensions,
            });
        }
        self.set_active_view(&state.view_key)?;
        {
            let mut view = self.active_view.borrow_mut();
            view.change_visible_dimensions(state.visible_dimensions)?;
            let dimensions = view.axis_orientation().len();
            for (dimension, &flipped) in
                state.flipped_axes.iter().enumerate().take(dimensions)
            {
                if view.is_flipped(dimension) != flipped {
                    view.flip_axis_orientation(dimension)?;
                }
            }
        }
        let _ = self.render_summary_table();
        Ok(())
    }
}

impl ViewController for AxisController {
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
        let _ = self.render_summary_table();
        let _ = self.render_variance_chart();
    }

    fn to_json(&self) -> Result<Value, OrdiviewError> {
        Ok(serde_json::to_value(self.state())?)
    }

    fn from_json(&mut self, json: &Value) -> Result<(), OrdiviewError> {
        let state = AxisState::deserialize(json)?;
        self.apply_state(&state)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::test_support::{container, two_view_registry};
    use crate::view::ViewRegistry;

    fn controller() -> (AxisController, SharedView, SharedView) {
        let (registry, scatter, biplot) = two_view_registry();
        let c = AxisController::new(container(), registry).unwrap();
        (c, scatter, biplot)
    }

    fn descriptions(c: &AxisController) -> Vec<String> {
        c.summary_table()
            .unwrap()
            .rows
            .iter()
            .map(|r| r.description.clone())
            .collect()
    }

    #[test]
    fn empty_registry_is_fatal() {
        let empty = ViewRegistry::new().into_shared();
        let err = AxisController::new(container(), empty).unwrap_err();
        assert!(matches!(err, OrdiviewError::EmptyRegistry));
    }

    #[test]
    fn first_key_is_active_and_rendered() {
        let (c, scatter, _) = controller();
        assert_eq!(c.title(), "Axes");
        assert_eq!(c.active_view_key(), "scatter");
        assert!(Rc::ptr_eq(c.active_view(), &scatter));
        assert_eq!(
            descriptions(&c),
            vec!["PC 1 - 26.69%", "PC 2 - 16.26%", "PC 3 - 13.78%"]
        );
        assert_eq!(c.variance_chart().unwrap().bars.len(), 8);
    }

    #[test]
    fn table_rows_stay_labelled_by_position() {
        let (mut c, scatter, _) = controller();
        scatter
            .borrow_mut()
            .change_visible_dimensions([1, 0, 2])
            .unwrap();
        let table = c.render_summary_table();
        let axes: Vec<&str> =
            table.rows.iter().map(|r| r.axis.as_str()).collect();
        assert_eq!(axes, vec!["First Axis", "Second Axis", "Third Axis"]);
        assert_eq!(
            descriptions(&c),
            vec!["PC 2 - 16.26%", "PC 1 - 26.69%", "PC 3 - 13.78%"]
        );
    }

    #[test]
    fn chart_covers_every_dimension() {
        let (c, _, _) = controller();
        let chart = c.variance_chart().unwrap();
        let labels: Vec<&str> =
            chart.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels[0], "PC 1");
        assert_eq!(labels[7], "PC 8");
        assert_eq!(chart.y_label, "% Variation Explained");
        assert!(chart.bars[0].height > chart.bars[1].height);
        assert_eq!(chart.menu.commands().count(), 4);
    }

    #[test]
    fn assign_updates_view_and_table() {
        let (mut c, scatter, _) = controller();
        scatter.borrow_mut().mark_rendered();

        c.execute("PC 5", AxisCommand::AssignSecond).unwrap();
        assert_eq!(scatter.borrow().visible_dimensions(), [0, 4, 2]);
        assert!(scatter.borrow().needs_update());
        assert_eq!(descriptions(&c)[1], "PC 5 - 10.02%");

        c.execute_key("PC 8", "assign-third").unwrap();
        assert_eq!(scatter.borrow().visible_dimensions(), [0, 4, 7]);
    }

    #[test]
    fn assign_allows_duplicate_dimensions() {
        let (mut c, scatter, _) = controller();
        c.execute("PC 2", AxisCommand::AssignFirst).unwrap();
        assert_eq!(scatter.borrow().visible_dimensions(), [1, 1, 2]);
        assert_eq!(
            descriptions(&c),
            vec!["PC 2 - 16.26%", "PC 2 - 16.26%", "PC 3 - 13.78%"]
        );
    }

    #[test]
    fn flip_changes_orientation_only() {
        let (mut c, scatter, _) = controller();
        let model = Rc::clone(scatter.borrow().model());
        let percents_before = model.borrow().percent_explained().to_vec();
        let ranges_before = model.borrow().dimension_ranges().clone();

        c.execute("PC 1", AxisCommand::Flip).unwrap();
        assert!(scatter.borrow().is_flipped(0));
        assert_eq!(scatter.borrow().visible_dimensions(), [0, 1, 2]);
        let model = model.borrow();
        assert_eq!(model.percent_explained(), percents_before.as_slice());
        assert_eq!(*model.dimension_ranges(), ranges_before);
    }

    #[test]
    fn bad_labels_and_keys_are_errors() {
        let (mut c, scatter, _) = controller();
        assert!(matches!(
            c.execute("Axis", AxisCommand::AssignFirst),
            Err(OrdiviewError::InvalidAxisLabel(_))
        ));
        assert!(matches!(
            c.execute("PC 9", AxisCommand::AssignFirst),
            Err(OrdiviewError::DimensionOutOfRange { .. })
        ));
        assert!(c.execute_key("PC 1", "zoom").is_err());
        assert!(matches!(
            c.update_visible_axes("PC 2", 3),
            Err(OrdiviewError::InvalidAxisPosition(3))
        ));
        assert_eq!(scatter.borrow().visible_dimensions(), [0, 1, 2]);
    }

    #[test]
    fn switching_views_targets_the_new_view() {
        let (mut c, scatter, biplot) = controller();
        c.set_active_view("biplot").unwrap();
        c.execute("PC 4", AxisCommand::AssignFirst).unwrap();
        assert_eq!(biplot.borrow().visible_dimensions(), [3, 1, 2]);
        assert_eq!(scatter.borrow().visible_dimensions(), [0, 1, 2]);
        assert!(matches!(
            c.set_active_view("nope"),
            Err(OrdiviewError::UnknownView(_))
        ));
        assert_eq!(c.active_view_key(), "biplot");
    }

    #[test]
    fn mutations_are_visible_to_other_controllers() {
        let (registry, scatter, _) = two_view_registry();
        let mut first =
            AxisController::new(container(), Rc::clone(&registry)).unwrap();
        let mut second = AxisController::new(container(), registry).unwrap();

        first.execute("PC 6", AxisCommand::AssignThird).unwrap();
        assert_eq!(scatter.borrow().visible_dimensions(), [0, 1, 5]);
        assert_eq!(descriptions(&second)[2], "PC 3 - 13.78%");
        let _ = second.render_summary_table();
        assert_eq!(descriptions(&second)[2], "PC 6 - 8.23%");
    }

    #[test]
    fn json_round_trip() {
        let (mut c, _, biplot) = controller();
        c.set_active_view("biplot").unwrap();
        c.execute("PC 3", AxisCommand::AssignFirst).unwrap();
        c.execute("PC 2", AxisCommand::Flip).unwrap();

        let json = c.to_json().unwrap();
        assert_eq!(json["viewKey"], json!("biplot"));
        assert_eq!(json["visibleDimensions"], json!([2, 1, 2]));
        assert_eq!(json["flippedAxes"][1], json!(true));

        let (mut fresh, _, fresh_biplot) = controller();
        fresh.from_json(&json).unwrap();
        assert_eq!(fresh.active_view_key(), "biplot");
        assert_eq!(fresh.to_json().unwrap(), json);
        assert_eq!(
            fresh_biplot.borrow().markers(),
            biplot.borrow().markers()
        );
    }

    #[test]
    fn from_json_rejects_unknown_views_and_bad_shapes() {
        let (mut c, _, _) = controller();
        let unknown =
            json!({"viewKey": "nope", "visibleDimensions": [0, 1, 2]});
        assert!(matches!(
            c.from_json(&unknown),
            Err(OrdiviewError::UnknownView(_))
        ));
        let bad = json!({"viewKey": "scatter", "visibleDimensions": [0, 1]});
        assert!(matches!(
            c.from_json(&bad),
            Err(OrdiviewError::StateParse(_))
        ));
        assert_eq!(c.active_view_key(), "scatter");
    }

    #[test]
    fn from_json_out_of_range_triple_leaves_controller_untouched() {
        let (mut c, scatter, biplot) = controller();
        let before = c.summary_table().cloned();
        let json = json!({
            "viewKey": "biplot",
            "visibleDimensions": [0, 1, 9]
        });
        assert!(matches!(
            c.from_json(&json),
            Err(OrdiviewError::DimensionOutOfRange { dimension: 9, .. })
        ));
        assert_eq!(c.active_view_key(), "scatter");
        assert!(Rc::ptr_eq(c.active_view(), &scatter));
        assert_eq!(c.summary_table().cloned(), before);
        assert_eq!(biplot.borrow().visible_dimensions(), [0, 1, 2]);
    }

    #[test]
    fn with_options_uses_custom_axis_names() {
        let (registry, _, _) = two_view_registry();
        let mut options = Options::default();
        options.table.axis_names = ["X".into(), "Y".into(), "Z".into()];
        let c =
            AxisController::with_options(container(), registry, &options)
                .unwrap();
        let table = c.summary_table().unwrap();
        assert_eq!(table.rows[0].axis, "X Axis");
        assert_eq!(table.rows[2].axis, "Z Axis");
    }
}
