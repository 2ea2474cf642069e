//! Range union over several models sharing one coordinate space.
//!
//! Widgets that must span more than one dataset at once (axis bounds,
//! normalization for parallel plots) read the union's ranges instead of a
//! single model's. The union is not kept live: after any upstream range
//! change the caller must invoke [`RangeUnion::refresh`], and until then the
//! union may be stale.

use crate::error::OrdiviewError;
use crate::model::{DimensionRanges, SharedModel};

/// Elementwise union of the dimension ranges of a fixed set of models.
#[derive(Debug)]
pub struct RangeUnion {
    models: Vec<SharedModel>,
    dimensions: usize,
    dimension_ranges: DimensionRanges,
}

impl RangeUnion {
    /// Build a union over `models` and compute its ranges.
    ///
    /// Fails when `models` is empty or when any model's dimension count
    /// differs from the first model's.
    pub fn new(models: Vec<SharedModel>) -> Result<Self, OrdiviewError> {
        let Some(first) = models.first() else {
            return Err(OrdiviewError::EmptyModelList);
        };
        let expected = first.borrow().dimensions();
        for (index, model) in models.iter().enumerate().skip(1) {
            let found = model.borrow().dimensions();
            if found != expected {
                return Err(OrdiviewError::DimensionMismatch {
                    expected,
                    found,
                    index,
                });
            }
        }

        let mut union = Self {
            models,
            dimensions: expected,
            dimension_ranges: DimensionRanges::default(),
        };
        union.refresh();
        Ok(union)
    }

    /// Recompute the union of the member ranges.
    ///
    /// When the current union already encloses every member's range nothing
    /// is recomputed, so a union never shrinks on this path.
    pub fn refresh(&mut self) {
        let stale = self.dimension_ranges.is_empty()
            || self.models.iter().any(|model| {
                let member = model.borrow();
                !self.dimension_ranges.encloses(member.dimension_ranges())
            });
        if !stale {
            log::debug!(
                "range union still encloses all {} models",
                self.models.len()
            );
            return;
        }

        self.dimension_ranges.clear();
        for model in &self.models {
            let model = model.borrow();
            if self.dimension_ranges.is_empty() {
                self.dimension_ranges = model.dimension_ranges().clone();
            } else {
                self.dimension_ranges.union_with(model.dimension_ranges());
            }
        }
        log::debug!(
            "recomputed range union over {} models ({} dimensions)",
            self.models.len(),
            self.dimensions
        );
    }

    /// Current union of the member ranges.
    #[must_use]
    pub fn dimension_ranges(&self) -> &DimensionRanges {
        &self.dimension_ranges
    }

    /// Dimension count shared by every member.
    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Member models in construction order.
    #[must_use]
    pub fn models(&self) -> &[SharedModel] {
        &self.models
    }

    /// Number of member models.
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Always `false`: construction rejects an empty model list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
