//! Topological metadata of hypercube mesh cells (point, line, quad, hex).
//!
//! Mesh, refinement and assembly code should read vertex/face/child counts and
//! the face relations from here instead of hard-coding per-dimension numbers.
//!
//! Layout
//! - `counts`: the induction ladder `Counts::of(d)` from the point upwards.
//! - `topology`: typed descriptors `GeometryInfo<DIM>` with the literal
//!   opposite-face and child-cell-on-face tables.
//! - `dispatch`: the same data behind a runtime `Dimension`, with checked,
//!   `Result`-returning lookups.
//! - `reference`: unit-cell coordinates consistent with the numbering.
//! - `cfg`: the index contract check knob (`checked` feature).
//!
//! All data is compile-time constant; every query is pure and thread-safe.

pub mod api;
pub mod cfg;
pub mod counts;
pub mod dispatch;
pub mod error;
pub mod reference;
pub mod topology;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use counts::Counts;
pub use dispatch::{child_cell_on_face, count_of, opposite_face, Attribute, Descriptor, Dimension};
pub use error::{IndexKind, TopologyError};
pub use topology::{CellTopology, FaceTopology, GeometryInfo, RefinedFaceTopology};

/// Common imports for dimension-generic mesh code.
pub mod prelude {
    pub use crate::reference::{FacePlane, UnitCell};
    pub use crate::topology::{CellTopology, FaceTopology, GeometryInfo, RefinedFaceTopology};
    pub use crate::{Attribute, Counts, Dimension, TopologyError};
}
