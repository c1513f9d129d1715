//! Error type for the runtime lookups.

use std::fmt;

/// Which index a range error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IndexKind {
    Face,
    Subface,
    Vertex,
    Child,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IndexKind::Face => "face",
            IndexKind::Subface => "subface",
            IndexKind::Vertex => "vertex",
            IndexKind::Child => "child",
        };
        f.write_str(name)
    }
}

/// Precondition violations of the descriptor queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TopologyError {
    /// `index` is not in `[0, bound)`.
    IndexRange {
        what: IndexKind,
        index: usize,
        bound: usize,
    },
    /// No descriptor exists for this dimension.
    UnsupportedDimension { dim: usize },
    /// Dimension text is not a non-negative integer.
    InvalidDimension { text: String },
    /// A point has no faces.
    NoFaces { dim: usize },
    /// No child-cell-on-face table for this dimension (faces do not refine).
    NoChildTable { dim: usize },
    /// Attribute name did not parse.
    UnknownAttribute { name: String },
}

impl fmt::Display for TopologyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopologyError::IndexRange { what, index, bound } => {
                write!(f, "{what} index {index} out of range [0, {bound})")
            }
            TopologyError::UnsupportedDimension { dim } => write!(
                f,
                "dimension {dim} is not supported (descriptors exist for 0..={})",
                crate::cfg::MAX_DIM
            ),
            TopologyError::InvalidDimension { text } => {
                write!(f, "`{text}` is not a dimension")
            }
            TopologyError::NoFaces { dim } => {
                write!(f, "a {dim}-dimensional cell has no faces")
            }
            TopologyError::NoChildTable { dim } => write!(
                f,
                "no child-cell-on-face table in dimension {dim} (faces of a {dim}d cell are not refined)"
            ),
            TopologyError::UnknownAttribute { name } => {
                write!(f, "unknown attribute `{name}`")
            }
        }
    }
}

impl std::error::Error for TopologyError {}
