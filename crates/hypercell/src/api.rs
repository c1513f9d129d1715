//! Flat query surface keyed by a runtime dimension.
//!
//! Thin re-exports for callers (CLI, bindings) that pick the dimension from
//! user input. Typed code should prefer `GeometryInfo<DIM>`.

pub use crate::dispatch::{
    child_cell_on_face, count_of, opposite_face, Attribute, Descriptor, Dimension, DESCRIPTORS,
};
pub use crate::error::{IndexKind, TopologyError};

/// All counts of `dim` as `(name, value)` pairs, in [`Attribute::ALL`] order.
pub fn counts_table(dim: Dimension) -> Vec<(&'static str, usize)> {
    Attribute::ALL
        .into_iter()
        .map(|a| (a.name(), count_of(a, dim)))
        .collect()
}

/// Every `(dim, face, subface, child)` entry of the child-cell-on-face tables.
pub fn child_cell_entries() -> Vec<(usize, usize, usize, usize)> {
    let mut out = Vec::new();
    for dim in Dimension::ALL {
        let d = dim.descriptor();
        for (face, row) in d.child_cell_table().into_iter().enumerate() {
            for (subface, child) in row.into_iter().enumerate() {
                out.push((d.dim(), face, subface, child));
            }
        }
    }
    out
}

/// Every `(dim, face, opposite)` entry of the opposite-face tables.
pub fn opposite_face_entries() -> Vec<(usize, usize, usize)> {
    Dimension::ALL
        .into_iter()
        .flat_map(|dim| {
            let d = dim.descriptor();
            d.opposite_face
                .iter()
                .enumerate()
                .map(move |(face, &opp)| (d.dim(), face, opp))
        })
        .collect()
}
