// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Shared-state core for interactive ordination scatter plots.
//!
//! Ordiview keeps the data behind one or more linked PCoA views consistent
//! while users change which dimensions are plotted, flip axes, or size
//! markers by a metadata category.
//!
//! # Key entry points
//!
//! - [`model::CoordinateModel`] - samples, coordinates, percent explained
//!   and metadata for one dataset
//! - [`range_union::RangeUnion`] - union of dimension ranges over several
//!   models
//! - [`view::RenderView`] and [`view::ViewRegistry`] - the plotted markers
//!   and the keyed set of views controllers act on
//! - [`controller::AxisController`] - visible dimensions, orientation and
//!   the scree chart
//! - [`controller::ScaleController`] - marker size by metadata category
//! - [`options::Options`] - presentation and scaling configuration
//!
//! # Architecture
//!
//! Everything runs on the host's event loop. Models, views and the registry
//! are shared through `Rc` handles; controllers mutate views only from their
//! command handlers and mark them dirty so the host re-draws on its next
//! frame. Controller state round-trips through JSON via
//! [`controller::ViewController`].

pub mod controller;
pub mod error;
pub mod model;
pub mod options;
pub mod range_union;
pub mod view;

#[cfg(test)]
mod test_support;

pub use error::OrdiviewError;
