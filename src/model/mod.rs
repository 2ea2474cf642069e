//! Coordinate models: one ordination result per dataset.
//!
//! A [`CoordinateModel`] holds the sample identifiers, the coordinate matrix,
//! the percent of variation each dimension explains, per-dimension ranges,
//! and the sample metadata table. Models are shared between views and range
//! unions through [`SharedModel`] handles.

mod metadata;
mod plottable;
mod ranges;

use std::cell::RefCell;
use std::rc::Rc;

pub use metadata::MetadataTable;
pub use plottable::Plottable;
pub use ranges::DimensionRanges;
use rustc_hash::FxHashMap;

use crate::error::OrdiviewError;

/// Shared, single-threaded handle to a model.
pub type SharedModel = Rc<RefCell<CoordinateModel>>;

/// A set of samples embedded in an N-dimensional coordinate space.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateModel {
    name: String,
    sample_ids: Vec<String>,
    sample_index: FxHashMap<String, usize>,
    coordinates: Vec<Vec<f64>>,
    dimensions: usize,
    percent_explained: Vec<f64>,
    dimension_ranges: DimensionRanges,
    metadata: MetadataTable,
}

impl CoordinateModel {
    /// Build and validate a model.
    ///
    /// `coordinates` has one row per entry of `sample_ids`; the row length
    /// defines the dimension count. `metadata` rows may come in any order;
    /// the first column of each names its sample.
    pub fn new(
        name: impl Into<String>,
        sample_ids: Vec<String>,
        coordinates: Vec<Vec<f64>>,
        percent_explained: Vec<f64>,
        metadata_headers: Vec<String>,
        metadata: Vec<Vec<String>>,
    ) -> Result<Self, OrdiviewError> {
        if sample_ids.is_empty() {
            return Err(OrdiviewError::Model("no samples".into()));
        }

        let mut sample_index = FxHashMap::default();
        for (i, id) in sample_ids.iter().enumerate() {
            if sample_index.insert(id.clone(), i).is_some() {
                return Err(OrdiviewError::Model(format!(
                    "duplicate sample ID '{id}'"
                )));
            }
        }

        let dimensions = coordinates.first().map_or(0, Vec::len);
        if dimensions == 0 {
            return Err(OrdiviewError::Model("coordinates are empty".into()));
        }
        validate_coordinates(&coordinates, sample_ids.len(), dimensions)?;

        if percent_explained.len() != dimensions {
            return Err(OrdiviewError::Model(format!(
                "{} percent-explained values for {dimensions} dimensions",
                percent_explained.len()
            )));
        }

        let metadata =
            MetadataTable::new(metadata_headers, metadata, &sample_index)?;
        let dimension_ranges =
            DimensionRanges::from_coordinates(&coordinates, dimensions);

        Ok(Self {
            name: name.into(),
            sample_ids,
            sample_index,
            coordinates,
            dimensions,
            percent_explained,
            dimension_ranges,
            metadata,
        })
    }

    /// Wrap the model in a shared handle.
    #[must_use]
    pub fn into_shared(self) -> SharedModel {
        Rc::new(RefCell::new(self))
    }

    /// Dataset name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of coordinate dimensions.
    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sample_ids.len()
    }

    /// Always `false`: construction rejects sample-less models.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sample_ids.is_empty()
    }

    /// Sample identifiers in row order.
    #[must_use]
    pub fn sample_ids(&self) -> &[String] {
        &self.sample_ids
    }

    /// Coordinate matrix, `[sample][dimension]`.
    #[must_use]
    pub fn coordinates(&self) -> &[Vec<f64>] {
        &self.coordinates
    }

    /// Percent of variation explained by each dimension.
    #[must_use]
    pub fn percent_explained(&self) -> &[f64] {
        &self.percent_explained
    }

    /// Per-dimension coordinate ranges.
    #[must_use]
    pub fn dimension_ranges(&self) -> &DimensionRanges {
        &self.dimension_ranges
    }

    /// Sample metadata.
    #[must_use]
    pub fn metadata(&self) -> &MetadataTable {
        &self.metadata
    }

    /// Metadata column names, sample-ID column first.
    #[must_use]
    pub fn metadata_headers(&self) -> &[String] {
        self.metadata.headers()
    }

    /// Replace the coordinate matrix and recompute the ranges.
    ///
    /// The sample count and dimension count cannot change. Range unions
    /// built over this model are not notified; call
    /// [`RangeUnion::refresh`](crate::range_union::RangeUnion::refresh).
    pub fn set_coordinates(
        &mut self,
        coordinates: Vec<Vec<f64>>,
    ) -> Result<(), OrdiviewError> {
        validate_coordinates(&coordinates, self.len(), self.dimensions)?;
        self.dimension_ranges =
            DimensionRanges::from_coordinates(&coordinates, self.dimensions);
        self.coordinates = coordinates;
        Ok(())
    }

    /// Handle for the sample named `id`.
    #[must_use]
    pub fn plottable(&self, id: &str) -> Option<Plottable> {
        self.sample_index
            .get(id)
            .map(|&idx| Plottable::new(idx, id))
    }

    /// Handles for every sample, in row order.
    #[must_use]
    pub fn plottables(&self) -> Vec<Plottable> {
        self.sample_ids
            .iter()
            .enumerate()
            .map(|(idx, id)| Plottable::new(idx, id.as_str()))
            .collect()
    }

    /// Metadata value of `header` for sample `id`.
    #[must_use]
    pub fn metadata_value(&self, id: &str, header: &str) -> Option<&str> {
        let idx = *self.sample_index.get(id)?;
        self.metadata.value(idx, header)
    }

    /// Distinct values of a metadata column, in order of first appearance.
    ///
    /// Empty when the column does not exist.
    #[must_use]
    pub fn unique_values(&self, header: &str) -> Vec<String> {
        let mut seen = Vec::new();
        for value in self.metadata.column_values(header) {
            if !seen.iter().any(|s: &String| s == value) {
                seen.push(value.to_owned());
            }
        }
        seen
    }

    /// Samples whose `header` column equals `value`.
    #[must_use]
    pub fn plottables_by_value(
        &self,
        header: &str,
        value: &str,
    ) -> Vec<Plottable> {
        self.metadata
            .column_values(header)
            .into_iter()
            .enumerate()
            .filter(|(_, v)| *v == value)
            .map(|(idx, _)| Plottable::new(idx, self.sample_ids[idx].as_str()))
            .collect()
    }
}

fn validate_coordinates(
    coordinates: &[Vec<f64>],
    samples: usize,
    dimensions: usize,
) -> Result<(), OrdiviewError> {
    if coordinates.len() != samples {
        return Err(OrdiviewError::Model(format!(
            "{} coordinate rows for {samples} samples",
            coordinates.len()
        )));
    }
    if let Some(row) = coordinates.iter().position(|r| r.len() != dimensions) {
        return Err(OrdiviewError::Model(format!(
            "coordinate row {row} has {} values, expected {dimensions}",
            coordinates[row].len()
        )));
    }
    Ok(())
}
