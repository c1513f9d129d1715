//! Typed topology descriptors: `GeometryInfo<DIM>` for `DIM ∈ {0, 1, 2, 3}`.
//!
//! Purpose
//! - Replace hard-coded numbers of vertices, faces, children, ... in
//!   dimension-generic mesh code with named constants that are resolved at
//!   compile time.
//!
//! Layout
//! - [`CellTopology`]: the counts of a cell (all dimensions, including the point).
//! - [`FaceTopology`]: face counts and the opposite-face relation (`DIM >= 1`).
//! - [`RefinedFaceTopology`]: which child touches a subface (`DIM >= 2`; the
//!   faces of a line are points and do not refine).
//!
//! Calling a face query on `GeometryInfo<0>` does not compile.
//!
//! Index contract
//! - Lookups take indices in `[0, FACES_PER_CELL)` and `[0, SUBFACES_PER_FACE)`.
//!   Violations panic with a diagnostic when `crate::cfg::CHECKS_ENABLED`.

mod tables;

pub use tables::{
    CHILD_CELL_ON_FACE_2D, CHILD_CELL_ON_FACE_3D, OPPOSITE_FACE_1D, OPPOSITE_FACE_2D,
    OPPOSITE_FACE_3D,
};

use crate::cfg::check_index;
use crate::counts::Counts;
use crate::error::IndexKind;

/// Topology descriptor of a `DIM`-dimensional hypercube cell.
///
/// Zero-sized; all information lives in associated constants and functions of
/// the traits below.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GeometryInfo<const DIM: usize>;

/// Counts of a cell, derived by the induction in [`Counts::of`].
pub trait CellTopology {
    /// Present dimension.
    const DIM: usize;
    const COUNTS: Counts;

    /// Number of children after one uniform refinement.
    const CHILDREN_PER_CELL: usize = Self::COUNTS.children_per_cell;
    const VERTICES_PER_CELL: usize = Self::COUNTS.vertices_per_cell;
    const LINES_PER_CELL: usize = Self::COUNTS.lines_per_cell;
    const QUADS_PER_CELL: usize = Self::COUNTS.quads_per_cell;
    const HEXES_PER_CELL: usize = Self::COUNTS.hexes_per_cell;
}

/// Face counts and the opposite-face relation.
pub trait FaceTopology: CellTopology {
    const FACES_PER_CELL: usize = Self::COUNTS.faces_per_cell;
    /// Number of children each face has when the adjacent cell is refined.
    const SUBFACES_PER_FACE: usize = Self::COUNTS.subfaces_per_face;
    const VERTICES_PER_FACE: usize = Self::COUNTS.vertices_per_face;
    const LINES_PER_FACE: usize = Self::COUNTS.lines_per_face;
    const QUADS_PER_FACE: usize = Self::COUNTS.quads_per_face;

    /// `OPPOSITE_FACE[f]` is the face across the cell from `f`.
    const OPPOSITE_FACE: &'static [usize];

    /// Face opposite `face`.
    #[inline]
    #[track_caller]
    fn opposite_face(face: usize) -> usize {
        check_index(IndexKind::Face, face, Self::FACES_PER_CELL);
        Self::OPPOSITE_FACE[face]
    }
}

/// Children of the refined cell that touch a given subface.
pub trait RefinedFaceTopology: FaceTopology {
    /// Child adjacent to subface `subface` of face `face`; subfaces are
    /// ordered in the direction of the face.
    fn child_cell_on_face(face: usize, subface: usize) -> usize;

    /// All children on `face`, in subface order.
    #[track_caller]
    fn children_on_face(face: usize) -> impl Iterator<Item = usize> {
        check_index(IndexKind::Face, face, Self::FACES_PER_CELL);
        (0..Self::SUBFACES_PER_FACE).map(move |s| Self::child_cell_on_face(face, s))
    }
}

macro_rules! cell_topology {
    ($($dim:literal),*) => {
        $(
            impl CellTopology for GeometryInfo<$dim> {
                const DIM: usize = $dim;
                const COUNTS: Counts = Counts::of($dim);
            }
        )*
    };
}

cell_topology!(0, 1, 2, 3);

impl FaceTopology for GeometryInfo<1> {
    const OPPOSITE_FACE: &'static [usize] = &OPPOSITE_FACE_1D;
}

impl FaceTopology for GeometryInfo<2> {
    const OPPOSITE_FACE: &'static [usize] = &OPPOSITE_FACE_2D;
}

impl FaceTopology for GeometryInfo<3> {
    const OPPOSITE_FACE: &'static [usize] = &OPPOSITE_FACE_3D;
}

impl RefinedFaceTopology for GeometryInfo<2> {
    #[inline]
    #[track_caller]
    fn child_cell_on_face(face: usize, subface: usize) -> usize {
        check_index(IndexKind::Face, face, Self::FACES_PER_CELL);
        check_index(IndexKind::Subface, subface, Self::SUBFACES_PER_FACE);
        CHILD_CELL_ON_FACE_2D[face][subface]
    }
}

impl RefinedFaceTopology for GeometryInfo<3> {
    #[inline]
    #[track_caller]
    fn child_cell_on_face(face: usize, subface: usize) -> usize {
        check_index(IndexKind::Face, face, Self::FACES_PER_CELL);
        check_index(IndexKind::Subface, subface, Self::SUBFACES_PER_FACE);
        CHILD_CELL_ON_FACE_3D[face][subface]
    }
}
