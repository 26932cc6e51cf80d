//! Fatal error taxonomy for layout generation.
//!
//! Only input that cannot be laid out at all becomes a `LayoutError`; every
//! recoverable condition is a `report::Warning` instead.

use thiserror::Error;

/// Errors that reject a whole section (or a whole run, for `InvalidConfig`).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// Fewer than 3 vertices, non-finite coordinates, or zero area.
    #[error("malformed polygon: {reason}")]
    MalformedPolygon { reason: String },

    /// A parameter outside its domain (interpolation parameter, edge index, ...).
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// Two rows of one section share a label; seat ids would collide.
    #[error("duplicate row label {label:?}")]
    DuplicateRowLabel { label: String },

    /// A second section reuses an id already laid out in the venue.
    #[error("duplicate section id {id:?}")]
    DuplicateSectionId { id: String },

    /// Tunables out of range.
    #[error("invalid layout config: {reason}")]
    InvalidConfig { reason: String },
}

impl LayoutError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedPolygon {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}
