use rustc_hash::FxHashMap;

use crate::error::OrdiviewError;

/// Sample metadata: named columns, one row per sample.
///
/// The first header names the sample-ID column; its value in every row is
/// the sample the row describes. Rows are stored in model sample order.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl MetadataTable {
    /// Arrange `rows` (in any order) to follow `sample_ids`.
    ///
    /// Every row must carry one value per header, name a known sample in its
    /// first column, and every sample must be described exactly once.
    pub(crate) fn new(
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        sample_index: &FxHashMap<String, usize>,
    ) -> Result<Self, OrdiviewError> {
        if headers.is_empty() {
            return Err(OrdiviewError::Model(
                "metadata needs at least a sample ID header".into(),
            ));
        }

        let mut ordered: Vec<Option<Vec<String>>> =
            vec![None; sample_index.len()];
        for row in rows {
            if row.len() != headers.len() {
                return Err(OrdiviewError::Model(format!(
                    "metadata row has {} values but there are {} headers",
                    row.len(),
                    headers.len()
                )));
            }
            let Some(&idx) = sample_index.get(&row[0]) else {
                return Err(OrdiviewError::Model(format!(
                    "metadata references unknown sample '{}'",
                    row[0]
                )));
            };
            if ordered[idx].is_some() {
                return Err(OrdiviewError::Model(format!(
                    "sample '{}' has more than one metadata row",
                    row[0]
                )));
            }
            ordered[idx] = Some(row);
        }

        let rows = ordered
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| {
                OrdiviewError::Model("every sample needs a metadata row".into())
            })?;

        Ok(Self { headers, rows })
    }

    /// Column names, sample-ID column first.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Position of a column, if present.
    #[must_use]
    pub fn column(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    /// Value of column `header` for the sample at row `idx`.
    #[must_use]
    pub fn value(&self, idx: usize, header: &str) -> Option<&str> {
        let col = self.column(header)?;
        self.rows.get(idx).map(|row| row[col].as_str())
    }

    /// All values of a column in sample order.
    #[must_use]
    pub fn column_values(&self, header: &str) -> Vec<&str> {
        self.column(header).map_or_else(Vec::new, |col| {
            self.rows.iter().map(|row| row[col].as_str()).collect()
        })
    }
}
