//! Renderable projections of coordinate models.
//!
//! A [`RenderView`] pairs one
//! [`CoordinateModel`](crate::model::CoordinateModel) with a marker per
//! sample and tracks which three dimensions are on screen.
//! Views are shared between controllers through a [`ViewRegistry`]; a write
//! through any handle is visible to every other holder on its next access.

mod registry;

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;
pub use registry::{SharedRegistry, ViewRegistry};

use crate::error::OrdiviewError;
use crate::model::SharedModel;

/// Shared, single-threaded handle to a view.
pub type SharedView = Rc<RefCell<RenderView>>;

/// Render proxy for one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// Position along the visible dimensions, orientation applied.
    pub position: Vec3,
    /// Per-axis scale of the rendered glyph.
    pub scale: Vec3,
    /// Whether the marker is drawn.
    pub visible: bool,
}

impl Default for Marker {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: Vec3::ONE,
            visible: true,
        }
    }
}

/// One model projected onto three of its dimensions.
#[derive(Debug)]
pub struct RenderView {
    model: SharedModel,
    markers: Vec<Marker>,
    visible_dimensions: [usize; 3],
    /// `1.0` or `-1.0` per model dimension.
    axis_orientation: Vec<f64>,
    /// Monotonically increasing generation; bumped on any mutation.
    generation: u64,
    /// Generation that was last consumed by the renderer.
    rendered_generation: u64,
}

impl RenderView {
    /// Create a view showing dimensions `[0, 1, 2]` of `model`.
    ///
    /// Fails when the model has fewer than three dimensions.
    pub fn new(model: SharedModel) -> Result<Self, OrdiviewError> {
        let (samples, dimensions) = {
            let m = model.borrow();
            (m.len(), m.dimensions())
        };
        if dimensions < 3 {
            return Err(OrdiviewError::DimensionOutOfRange {
                dimension: 2,
                dimensions,
            });
        }

        let mut view = Self {
            model,
            markers: vec![Marker::default(); samples],
            visible_dimensions: [0, 1, 2],
            axis_orientation: vec![1.0; dimensions],
            generation: 1,
            rendered_generation: 0,
        };
        view.update_positions();
        Ok(view)
    }

    /// Wrap the view in a shared handle.
    #[must_use]
    pub fn into_shared(self) -> SharedView {
        Rc::new(RefCell::new(self))
    }

    /// The model this view projects.
    #[must_use]
    pub fn model(&self) -> &SharedModel {
        &self.model
    }

    /// Markers, indexed like the model's samples.
    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Read access to one marker.
    #[must_use]
    pub fn marker(&self, idx: usize) -> Option<&Marker> {
        self.markers.get(idx)
    }

    /// Write access to one marker (marks the view dirty).
    pub fn marker_mut(&mut self, idx: usize) -> Option<&mut Marker> {
        if idx >= self.markers.len() {
            return None;
        }
        self.invalidate();
        self.markers.get_mut(idx)
    }

    /// Dimensions currently mapped to the first, second and third axes.
    #[must_use]
    pub fn visible_dimensions(&self) -> [usize; 3] {
        self.visible_dimensions
    }

    /// Orientation sign per model dimension.
    #[must_use]
    pub fn axis_orientation(&self) -> &[f64] {
        &self.axis_orientation
    }

    /// Whether `dimension` is drawn with its sign inverted.
    #[must_use]
    pub fn is_flipped(&self, dimension: usize) -> bool {
        self.axis_orientation
            .get(dimension)
            .is_some_and(|&sign| sign < 0.0)
    }

    /// Show `dimensions` on the three axes, in order.
    ///
    /// Repeated entries are accepted; out-of-range entries are rejected
    /// before anything changes.
    pub fn change_visible_dimensions(
        &mut self,
        dimensions: [usize; 3],
    ) -> Result<(), OrdiviewError> {
        for dimension in dimensions {
            self.check_dimension(dimension)?;
        }
        self.visible_dimensions = dimensions;
        self.update_positions();
        self.invalidate();
        Ok(())
    }

    /// Invert the sign of every coordinate along `dimension`.
    pub fn flip_axis_orientation(
        &mut self,
        dimension: usize,
    ) -> Result<(), OrdiviewError> {
        self.check_dimension(dimension)?;
        self.axis_orientation[dimension] *= -1.0;
        self.update_positions();
        self.invalidate();
        Ok(())
    }

    /// Recompute marker positions from the model, e.g. after
    /// [`set_coordinates`](crate::model::CoordinateModel::set_coordinates).
    pub fn sync_positions(&mut self) {
        self.update_positions();
        self.invalidate();
    }

    // -- Dirty tracking --

    fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Whether rendered state changed since last `mark_rendered()`.
    #[must_use]
    pub fn needs_update(&self) -> bool {
        self.generation != self.rendered_generation
    }

    /// Force the view dirty.
    pub fn force_dirty(&mut self) {
        self.invalidate();
    }

    /// Mark the current generation as rendered.
    pub fn mark_rendered(&mut self) {
        self.rendered_generation = self.generation;
    }

    fn check_dimension(&self, dimension: usize) -> Result<(), OrdiviewError> {
        let dimensions = self.axis_orientation.len();
        if dimension < dimensions {
            Ok(())
        } else {
            Err(OrdiviewError::DimensionOutOfRange {
                dimension,
                dimensions,
            })
        }
    }

    fn update_positions(&mut self) {
        let model = self.model.borrow();
        let [a, b, c] = self.visible_dimensions;
        let axis = |row: &[f64], d: usize| {
            (row.get(d).copied().unwrap_or(0.0) * self.axis_orientation[d])
                as f32
        };
        for (marker, row) in self.markers.iter_mut().zip(model.coordinates()) {
            marker.position =
                Vec3::new(axis(row, a), axis(row, b), axis(row, c));
        }
    }
}
