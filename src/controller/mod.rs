//! Interactive controllers over the shared view registry.
//!
//! Each controller implements [`ViewController`] on its own; there is no
//! shared base state. Controllers are driven by synchronous command handlers
//! invoked from the host's event loop, and every handler leaves the shared
//! views consistent before it returns.

pub mod axes;
pub mod scale;

pub use axes::{AxisCommand, AxisController};
pub use scale::{ScaleController, ScaleState};
use serde_json::Value;

use crate::error::OrdiviewError;

/// The host element a controller draws into.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    /// Host element identifier.
    pub id: String,
    /// Available width in pixels.
    pub width: f32,
    /// Available height in pixels.
    pub height: f32,
}

impl Container {
    /// Describe a host element of the given size.
    #[must_use]
    pub fn new(id: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            width,
            height,
        }
    }
}

/// Capabilities every controller exposes to the host.
pub trait ViewController {
    /// Panel title.
    fn title(&self) -> &'static str;

    /// One-line help text shown with the panel.
    fn help(&self) -> &'static str;

    /// The element the controller draws into.
    fn container(&self) -> &Container;

    /// Rebuild everything the controller displays.
    fn render(&mut self);

    /// Snapshot the controller state.
    fn to_json(&self) -> Result<Value, OrdiviewError>;

    /// Restore a snapshot produced by [`to_json`](Self::to_json) and apply
    /// it to the shared views.
    fn from_json(&mut self, json: &Value) -> Result<(), OrdiviewError>;
}
