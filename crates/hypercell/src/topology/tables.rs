//! Literal lookup tables for the face relations.
//!
//! These are not derived from the counts: they fix the face numbering and the
//! refinement child numbering used by every consumer of the descriptor, and
//! must be reproduced verbatim.
//!
//! 2d layout (vertices and faces, faces with their direction), and the children
//! after one refinement:
//!
//! ```text
//!        2
//!     3-->--2          *--*--*
//!     |     |          | 3|2 |
//!   3 ^     ^ 1        *--*--*
//!     |     |          | 0|1 |
//!     0-->--1          *--*--*
//!        0
//! ```
//!
//! The children on face 0 are (in face direction) 0 and 1, on face 2 they are
//! 3 and 2, and so on. In 3d, faces are bottom, top, front, right, back, left;
//! children are numbered like the vertices they contain (bottom layer
//! counter-clockwise, then top layer).

use crate::counts::Counts;

pub const OPPOSITE_FACE_1D: [usize; 2] = [1, 0];
pub const OPPOSITE_FACE_2D: [usize; 4] = [2, 3, 0, 1];
pub const OPPOSITE_FACE_3D: [usize; 6] = [1, 0, 4, 5, 2, 3];

/// Child cells adjacent to each subface, indexed `[face][subface]`.
pub const CHILD_CELL_ON_FACE_2D: [[usize; 2]; 4] = [
    [0, 1], //
    [1, 2], //
    [3, 2], //
    [0, 3],
];

pub const CHILD_CELL_ON_FACE_3D: [[usize; 4]; 6] = [
    [0, 1, 2, 3], // bottom
    [4, 5, 6, 7], // top
    [0, 1, 5, 4], // front
    [1, 5, 6, 2], // right
    [3, 2, 6, 7], // back
    [0, 4, 7, 3], // left
];

/// `table` pairs every face with a different face, and the pairing is symmetric.
pub(crate) const fn is_opposite_pairing(table: &[usize]) -> bool {
    let mut f = 0;
    while f < table.len() {
        let g = table[f];
        if g >= table.len() || g == f || table[g] != f {
            return false;
        }
        f += 1;
    }
    true
}

/// Every row has `subfaces_per_face` distinct entries below `children_per_cell`.
pub(crate) const fn is_child_table<const S: usize>(rows: &[[usize; S]], counts: Counts) -> bool {
    if rows.len() != counts.faces_per_cell || S != counts.subfaces_per_face {
        return false;
    }
    let mut f = 0;
    while f < rows.len() {
        let row = &rows[f];
        let mut s = 0;
        while s < S {
            if row[s] >= counts.children_per_cell {
                return false;
            }
            let mut t = s + 1;
            while t < S {
                if row[t] == row[s] {
                    return false;
                }
                t += 1;
            }
            s += 1;
        }
        f += 1;
    }
    true
}

const _: () = assert!(OPPOSITE_FACE_1D.len() == Counts::of(1).faces_per_cell);
const _: () = assert!(OPPOSITE_FACE_2D.len() == Counts::of(2).faces_per_cell);
const _: () = assert!(OPPOSITE_FACE_3D.len() == Counts::of(3).faces_per_cell);
const _: () = assert!(is_opposite_pairing(&OPPOSITE_FACE_1D));
const _: () = assert!(is_opposite_pairing(&OPPOSITE_FACE_2D));
const _: () = assert!(is_opposite_pairing(&OPPOSITE_FACE_3D));
const _: () = assert!(is_child_table(&CHILD_CELL_ON_FACE_2D, Counts::of(2)));
const _: () = assert!(is_child_table(&CHILD_CELL_ON_FACE_3D, Counts::of(3)));
