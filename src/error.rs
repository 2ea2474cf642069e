//! Crate-level error types.

use std::fmt;

/// Errors produced by the ordiview crate.
#[derive(Debug)]
pub enum OrdiviewError {
    /// A range union was built over zero models.
    EmptyModelList,
    /// Models sharing a range union disagree on their dimension count.
    DimensionMismatch {
        /// Dimension count of the first model.
        expected: usize,
        /// Dimension count of the offending model.
        found: usize,
        /// Position of the offending model in the input list.
        index: usize,
    },
    /// A controller was constructed over an empty view registry.
    EmptyRegistry,
    /// No view is registered under the requested key.
    UnknownView(String),
    /// Coordinate model inputs are malformed.
    Model(String),
    /// A dimension index does not exist in the model.
    DimensionOutOfRange {
        /// Requested dimension (zero-based).
        dimension: usize,
        /// Number of dimensions in the model.
        dimensions: usize,
    },
    /// An axis slot outside first/second/third was addressed.
    InvalidAxisPosition(usize),
    /// A bar label could not be turned into a dimension index.
    InvalidAxisLabel(String),
    /// A menu command key is not part of the command table.
    UnknownCommand(String),
    /// A JSON state snapshot has the wrong shape.
    StateParse(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for OrdiviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyModelList => {
                write!(f, "range union needs at least one model")
            }
            Self::DimensionMismatch {
                expected,
                found,
                index,
            } => write!(
                f,
                "underlying models must have the same number of dimensions: \
                 model {index} has {found}, expected {expected}"
            ),
            Self::EmptyRegistry => {
                write!(f, "the view registry cannot be empty")
            }
            Self::UnknownView(key) => {
                write!(f, "no view registered as '{key}'")
            }
            Self::Model(msg) => write!(f, "invalid coordinate model: {msg}"),
            Self::DimensionOutOfRange {
                dimension,
                dimensions,
            } => write!(
                f,
                "dimension {dimension} out of range for a \
                 {dimensions}-dimensional model"
            ),
            Self::InvalidAxisPosition(position) => {
                write!(f, "axis position {position} is not one of 0, 1, 2")
            }
            Self::InvalidAxisLabel(label) => {
                write!(f, "cannot parse a dimension from axis label '{label}'")
            }
            Self::UnknownCommand(key) => {
                write!(f, "unknown axis command '{key}'")
            }
            Self::StateParse(msg) => write!(f, "state parse error: {msg}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for OrdiviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OrdiviewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for OrdiviewError {
    fn from(e: serde_json::Error) -> Self {
        Self::StateParse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_message_names_the_model() {
        let err = OrdiviewError::DimensionMismatch {
            expected: 8,
            found: 3,
            index: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("model 2 has 3"), "got {msg}");
        assert!(msg.contains("expected 8"), "got {msg}");
    }

    #[test]
    fn json_errors_become_state_parse() {
        let bad = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = OrdiviewError::from(bad);
        assert!(matches!(err, OrdiviewError::StateParse(_)));
    }
}
