//! Error types

use thiserror::Error;

use crate::node::Pk;

/// Errors raised while reading tree markup or driving the collapser.
#[derive(Debug, Error)]
pub enum TreeError {
    /// A toggle refers to a record that is not in the index.
    #[error("no tree node with pk {0}")]
    UnknownNode(Pk),

    /// A toggle lacks an attribute the collapser needs.
    #[error("element {element} has no data-{attribute} attribute")]
    MissingAttribute {
        element: String,
        attribute: &'static str,
    },

    /// An attribute is present but not an integer.
    #[error("element {element} has invalid data-{attribute} {value:?}")]
    InvalidAttribute {
        element: String,
        attribute: &'static str,
        value: String,
    },

    /// A toggle that is not inside any table row.
    #[error("toggle {0} is not inside a row")]
    Detached(String),

    /// The JSON context payload could not be parsed.
    #[error("malformed tree context: {0}")]
    MalformedContext(#[from] serde_json::Error),
}

impl TreeError {
    /// Whether the error comes from malformed markup rather than a bad call.
    pub fn is_markup(&self) -> bool {
        matches!(
            self,
            Self::MissingAttribute { .. } | Self::InvalidAttribute { .. } | Self::Detached(_)
        )
    }
}
