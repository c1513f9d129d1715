//! Build-time configuration for the index contract checks.
//!
//! Policy
//! - The typed lookups (`GeometryInfo::<D>::opposite_face`, ...) check their
//!   indices when `debug_assertions` or the `checked` feature is on, and panic
//!   with a diagnostic naming the index and its bound.
//! - With both off the dedicated check is compiled out. Slice indexing still
//!   catches out-of-range access, but callers must not rely on the diagnostic.
//! - The runtime lookups in `crate::dispatch` always check and return
//!   `TopologyError`; this knob does not apply to them.

use crate::error::{IndexKind, TopologyError};

/// Whether typed lookups run their index contract checks.
pub const CHECKS_ENABLED: bool = cfg!(any(debug_assertions, feature = "checked"));

/// Highest dimension with a typed descriptor and lookup tables.
pub const MAX_DIM: usize = 3;

/// Contract check `index < bound`; no-op unless [`CHECKS_ENABLED`].
#[inline]
#[track_caller]
pub(crate) fn check_index(what: IndexKind, index: usize, bound: usize) {
    if CHECKS_ENABLED && index >= bound {
        panic!("{}", TopologyError::IndexRange { what, index, bound });
    }
}
