/// Handle to one sample of a model: its row index and identifier.
///
/// The index addresses both the model's coordinate row and the marker a
/// [`RenderView`](crate::view::RenderView) keeps for that sample.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Plottable {
    /// Row index into the model's samples (and the view's markers).
    pub idx: usize,
    /// Sample identifier.
    pub name: String,
}

impl Plottable {
    /// Create a handle for sample `name` at row `idx`.
    #[must_use]
    pub fn new(idx: usize, name: impl Into<String>) -> Self {
        Self {
            idx,
            name: name.into(),
        }
    }
}
