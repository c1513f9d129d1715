//! Structural counts of a `d`-dimensional hypercube, derived by induction.
//!
//! Construction
//! - A `d`-cube is built from a `(d-1)`-cube in two steps: duplicate it along
//!   the new coordinate direction, then connect corresponding vertices of the
//!   original and the copy by lines.
//! - Every `k`-dimensional sub-element of the result is either one of the two
//!   copies of a `k`-element of the original, or a new element swept by the
//!   connecting lines over a `(k-1)`-element of the original. Hence
//!   `n_k(d) = 2 n_k(d-1) + n_{k-1}(d-1)`.
//! - A face of a `d`-cube is a `(d-1)`-cube, so the `*_per_face` values are the
//!   `*_per_cell` values of the previous step.
//!
//! Conventions
//! - Dimension 0 (a point) is the base case: one vertex, no children, no faces.
//!   Counts that are of no use in a low dimension are zero, e.g.
//!   `subfaces_per_face` in 1d.

/// Counts for a hypercube of dimension `dim`.
///
/// All fields are compile-time constants; see [`Counts::of`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Counts {
    pub dim: usize,
    pub children_per_cell: usize,
    pub faces_per_cell: usize,
    pub subfaces_per_face: usize,
    pub vertices_per_cell: usize,
    pub vertices_per_face: usize,
    pub lines_per_cell: usize,
    pub lines_per_face: usize,
    pub quads_per_cell: usize,
    pub quads_per_face: usize,
    pub hexes_per_cell: usize,
}

impl Counts {
    /// Base case of the induction ladder: a single point.
    pub const POINT: Counts = Counts {
        dim: 0,
        children_per_cell: 0,
        faces_per_cell: 0,
        subfaces_per_face: 0,
        vertices_per_cell: 1,
        vertices_per_face: 0,
        lines_per_cell: 0,
        lines_per_face: 0,
        quads_per_cell: 0,
        quads_per_face: 0,
        hexes_per_cell: 0,
    };

    /// Largest dimension whose counts all fit in `usize` (52 on 64-bit
    /// targets; `hexes_per_cell` is the first count to overflow).
    pub const MAX_COUNT_DIM: usize = Counts::largest_dim();

    /// Counts for dimension `dim`, starting at [`Counts::POINT`] and applying
    /// one [`Counts::extrude`] step per dimension.
    ///
    /// Panics (at compile time in const context) if `dim > Counts::MAX_COUNT_DIM`;
    /// see [`Counts::try_of`] for the non-panicking variant.
    pub const fn of(dim: usize) -> Counts {
        match Counts::try_of(dim) {
            Some(counts) => counts,
            None => panic!("hypercube counts overflow usize beyond Counts::MAX_COUNT_DIM"),
        }
    }

    /// Counts for dimension `dim`, or `None` if any of them overflows `usize`.
    pub const fn try_of(dim: usize) -> Option<Counts> {
        let mut counts = Counts::POINT;
        while counts.dim < dim {
            counts = match counts.checked_extrude() {
                Some(next) => next,
                None => return None,
            };
        }
        Some(counts)
    }

    /// One induction step: counts of the `(dim + 1)`-cube swept from `self`.
    ///
    /// Panics if `self.dim == Counts::MAX_COUNT_DIM`.
    pub const fn extrude(&self) -> Counts {
        match self.checked_extrude() {
            Some(next) => next,
            None => panic!("hypercube counts overflow usize beyond Counts::MAX_COUNT_DIM"),
        }
    }

    /// [`Counts::extrude`] with overflow checks on every count.
    pub const fn checked_extrude(&self) -> Option<Counts> {
        let dim = self.dim + 1;
        let (Some(corners), Some(lines), Some(quads), Some(hexes)) = (
            1usize.checked_shl(dim as u32),
            sweep(self.lines_per_cell, self.vertices_per_cell),
            sweep(self.quads_per_cell, self.lines_per_cell),
            sweep(self.hexes_per_cell, self.quads_per_cell),
        ) else {
            return None;
        };
        Some(Counts {
            dim,
            children_per_cell: corners,
            faces_per_cell: 2 * dim,
            subfaces_per_face: self.children_per_cell,
            vertices_per_cell: corners,
            vertices_per_face: self.vertices_per_cell,
            lines_per_cell: lines,
            lines_per_face: self.lines_per_cell,
            quads_per_cell: quads,
            quads_per_face: self.quads_per_cell,
            hexes_per_cell: hexes,
        })
    }

    const fn largest_dim() -> usize {
        let mut counts = Counts::POINT;
        loop {
            match counts.checked_extrude() {
                Some(next) => counts = next,
                None => return counts.dim,
            }
        }
    }

    /// Number of `k`-dimensional sub-elements (0 = vertices, 1 = lines,
    /// 2 = quads, 3 = hexes). `None` for `k > 3`.
    pub const fn sub_elements(&self, k: usize) -> Option<usize> {
        match k {
            0 => Some(self.vertices_per_cell),
            1 => Some(self.lines_per_cell),
            2 => Some(self.quads_per_cell),
            3 => Some(self.hexes_per_cell),
            _ => None,
        }
    }
}

/// `2 * copies + swept`, the count of one sub-element kind after a sweep.
const fn sweep(copies: usize, swept: usize) -> Option<usize> {
    match copies.checked_mul(2) {
        Some(doubled) => doubled.checked_add(swept),
        None => None,
    }
}
