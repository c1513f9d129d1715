//! Reference unit cell `[0,1]^DIM` matching the face and child numbering.
//!
//! Conventions
//! - 1d: vertex `v` sits at `x = v`; face 0 is `x = 0`, face 1 is `x = 1`.
//! - 2d: vertices counter-clockwise from the origin; faces bottom, right, top,
//!   left (`y = 0, x = 1, y = 1, x = 0`).
//! - 3d: vertices 0–3 form the bottom face `y = 0`, counter-clockwise in the
//!   `(x, z)` plane starting at the origin; vertices 4–7 are the same points at
//!   `y = 1`. Faces bottom, top, front, right, back, left
//!   (`y = 0, y = 1, z = 0, x = 1, z = 1, x = 0`).
//! - Child `c` of a uniform refinement is the child containing vertex `c`.
//!
//! These are what make the literal tables in `crate::topology` geometric: the
//! children listed on face `f` are exactly the children on its side.

use nalgebra::SVector;

use crate::cfg::check_index;
use crate::error::IndexKind;
use crate::topology::{CellTopology, FaceTopology, GeometryInfo};

/// Axis-aligned plane `x[axis] = offset` containing a face of the unit cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FacePlane {
    pub axis: usize,
    pub offset: f64,
}

impl FacePlane {
    #[inline]
    pub const fn new(axis: usize, offset: f64) -> Self {
        Self { axis, offset }
    }
    /// Outward normal sign: `-1` on the lower side, `+1` on the upper side.
    #[inline]
    pub fn outward_sign(&self) -> f64 {
        if self.offset > 0.5 {
            1.0
        } else {
            -1.0
        }
    }
}

/// Vertex coordinates and face planes of the unit cell.
pub trait UnitCell: FaceTopology {
    /// `VERTICES[v]` has `DIM` coordinates, each 0 or 1.
    const VERTICES: &'static [&'static [f64]];
    const FACE_PLANES: &'static [FacePlane];
}

const VERTICES_1D: [&[f64]; 2] = [&[0.0], &[1.0]];
const VERTICES_2D: [&[f64]; 4] = [&[0.0, 0.0], &[1.0, 0.0], &[1.0, 1.0], &[0.0, 1.0]];
const VERTICES_3D: [&[f64]; 8] = [
    &[0.0, 0.0, 0.0],
    &[1.0, 0.0, 0.0],
    &[1.0, 0.0, 1.0],
    &[0.0, 0.0, 1.0],
    &[0.0, 1.0, 0.0],
    &[1.0, 1.0, 0.0],
    &[1.0, 1.0, 1.0],
    &[0.0, 1.0, 1.0],
];

const FACE_PLANES_1D: [FacePlane; 2] = [FacePlane::new(0, 0.0), FacePlane::new(0, 1.0)];
const FACE_PLANES_2D: [FacePlane; 4] = [
    FacePlane::new(1, 0.0),
    FacePlane::new(0, 1.0),
    FacePlane::new(1, 1.0),
    FacePlane::new(0, 0.0),
];
const FACE_PLANES_3D: [FacePlane; 6] = [
    FacePlane::new(1, 0.0),
    FacePlane::new(1, 1.0),
    FacePlane::new(2, 0.0),
    FacePlane::new(0, 1.0),
    FacePlane::new(2, 1.0),
    FacePlane::new(0, 0.0),
];

impl UnitCell for GeometryInfo<1> {
    const VERTICES: &'static [&'static [f64]] = &VERTICES_1D;
    const FACE_PLANES: &'static [FacePlane] = &FACE_PLANES_1D;
}

impl UnitCell for GeometryInfo<2> {
    const VERTICES: &'static [&'static [f64]] = &VERTICES_2D;
    const FACE_PLANES: &'static [FacePlane] = &FACE_PLANES_2D;
}

impl UnitCell for GeometryInfo<3> {
    const VERTICES: &'static [&'static [f64]] = &VERTICES_3D;
    const FACE_PLANES: &'static [FacePlane] = &FACE_PLANES_3D;
}

impl<const DIM: usize> GeometryInfo<DIM>
where
    Self: UnitCell,
{
    /// Position of vertex `vertex` of the unit cell.
    #[track_caller]
    pub fn unit_cell_vertex(vertex: usize) -> SVector<f64, DIM> {
        check_index(IndexKind::Vertex, vertex, Self::VERTICES_PER_CELL);
        let coords = Self::VERTICES[vertex];
        SVector::from_fn(|i, _| coords[i])
    }

    /// Plane containing face `face`.
    #[track_caller]
    pub fn face_plane(face: usize) -> FacePlane {
        check_index(IndexKind::Face, face, Self::FACES_PER_CELL);
        Self::FACE_PLANES[face]
    }

    /// Outward unit normal of face `face`.
    #[track_caller]
    pub fn unit_normal(face: usize) -> SVector<f64, DIM> {
        let plane = Self::face_plane(face);
        let mut n = SVector::zeros();
        n[plane.axis] = plane.outward_sign();
        n
    }

    /// Barycenter of face `face`.
    #[track_caller]
    pub fn face_center(face: usize) -> SVector<f64, DIM> {
        let plane = Self::face_plane(face);
        let mut c = SVector::from_element(0.5);
        c[plane.axis] = plane.offset;
        c
    }

    /// Barycenter of child `child` after one uniform refinement.
    #[track_caller]
    pub fn child_cell_center(child: usize) -> SVector<f64, DIM> {
        check_index(IndexKind::Child, child, Self::CHILDREN_PER_CELL);
        Self::unit_cell_vertex(child) * 0.5 + SVector::from_element(0.25)
    }

    /// Whether `vertex` lies on `face`.
    #[track_caller]
    pub fn vertex_on_face(vertex: usize, face: usize) -> bool {
        let plane = Self::face_plane(face);
        Self::unit_cell_vertex(vertex)[plane.axis] == plane.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::RefinedFaceTopology;
    use nalgebra::{Vector2, Vector3};

    type Line = GeometryInfo<1>;
    type Quad = GeometryInfo<2>;
    type Hex = GeometryInfo<3>;

    const EPS: f64 = 1e-12;

    #[test]
    fn vertices_are_corners_of_unit_cube() {
        assert_eq!(Quad::unit_cell_vertex(2), Vector2::new(1.0, 1.0));
        assert_eq!(Hex::unit_cell_vertex(6), Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(Hex::unit_cell_vertex(3), Vector3::new(0.0, 0.0, 1.0));
        // All distinct.
        for a in 0..Hex::VERTICES_PER_CELL {
            for b in (a + 1)..Hex::VERTICES_PER_CELL {
                assert!((Hex::unit_cell_vertex(a) - Hex::unit_cell_vertex(b)).norm() > 0.5);
            }
        }
    }

    #[test]
    fn opposite_faces_are_parallel_planes() {
        fn check<G: UnitCell>() {
            for f in 0..G::FACES_PER_CELL {
                let p = G::FACE_PLANES[f];
                let q = G::FACE_PLANES[G::opposite_face(f)];
                assert_eq!(p.axis, q.axis, "dim {} face {f}", G::DIM);
                assert!((p.offset + q.offset - 1.0).abs() < EPS);
            }
        }
        check::<Line>();
        check::<Quad>();
        check::<Hex>();
    }

    #[test]
    fn normals_point_outward() {
        for f in 0..Hex::FACES_PER_CELL {
            let n = Hex::unit_normal(f);
            let outward = Hex::face_center(f) - Vector3::from_element(0.5);
            assert!((n.norm() - 1.0).abs() < EPS);
            assert!((n.dot(&outward) - 0.5).abs() < EPS);
        }
        assert_eq!(Line::unit_normal(0)[0], -1.0);
        assert_eq!(Quad::unit_normal(1), Vector2::new(1.0, 0.0));
    }

    #[test]
    fn faces_have_vertices_per_face_vertices() {
        for f in 0..Hex::FACES_PER_CELL {
            let n = (0..Hex::VERTICES_PER_CELL)
                .filter(|&v| Hex::vertex_on_face(v, f))
                .count();
            assert_eq!(n, Hex::VERTICES_PER_FACE);
        }
        for f in 0..Quad::FACES_PER_CELL {
            let n = (0..Quad::VERTICES_PER_CELL)
                .filter(|&v| Quad::vertex_on_face(v, f))
                .count();
            assert_eq!(n, Quad::VERTICES_PER_FACE);
        }
    }

    #[test]
    fn children_on_face_lie_on_its_side() {
        fn check<G: UnitCell + RefinedFaceTopology>() {
            for f in 0..G::FACES_PER_CELL {
                let p = G::FACE_PLANES[f];
                let listed: Vec<usize> = G::children_on_face(f).collect();
                for c in 0..G::CHILDREN_PER_CELL {
                    // Child centers sit 0.25 off every face they touch.
                    let x = G::VERTICES[c][p.axis] * 0.5 + 0.25;
                    let touches = (x - p.offset).abs() < 0.25 + EPS;
                    assert_eq!(listed.contains(&c), touches, "dim {} f={f} c={c}", G::DIM);
                }
            }
        }
        check::<Quad>();
        check::<Hex>();
    }

    #[test]
    fn child_cell_on_face_is_face_vertex_order() {
        // Child c contains vertex c, so the table doubles as the face-vertex list.
        for f in 0..Hex::FACES_PER_CELL {
            for s in 0..Hex::SUBFACES_PER_FACE {
                assert!(Hex::vertex_on_face(Hex::child_cell_on_face(f, s), f));
            }
        }
        for f in 0..Quad::FACES_PER_CELL {
            for s in 0..Quad::SUBFACES_PER_FACE {
                assert!(Quad::vertex_on_face(Quad::child_cell_on_face(f, s), f));
            }
        }
    }

    #[test]
    fn subface_order_agrees_across_opposite_faces() {
        // Across a shared face the neighbor sees `opposite_face(f)`; subface `s`
        // of both sides must be the same patch, so the two children differ only
        // along the face axis.
        for f in 0..Hex::FACES_PER_CELL {
            let g = Hex::opposite_face(f);
            let axis = Hex::face_plane(f).axis;
            for s in 0..Hex::SUBFACES_PER_FACE {
                let a = Hex::child_cell_center(Hex::child_cell_on_face(f, s));
                let b = Hex::child_cell_center(Hex::child_cell_on_face(g, s));
                for i in (0..3).filter(|&i| i != axis) {
                    assert!((a[i] - b[i]).abs() < EPS, "f={f} s={s} axis={i}");
                }
            }
        }
        for f in 0..Quad::FACES_PER_CELL {
            let g = Quad::opposite_face(f);
            let axis = Quad::face_plane(f).axis;
            for s in 0..Quad::SUBFACES_PER_FACE {
                let a = Quad::child_cell_center(Quad::child_cell_on_face(f, s));
                let b = Quad::child_cell_center(Quad::child_cell_on_face(g, s));
                assert!((a[1 - axis] - b[1 - axis]).abs() < EPS, "f={f} s={s}");
            }
        }
    }

    #[test]
    fn child_centers() {
        assert_eq!(Quad::child_cell_center(0), Vector2::new(0.25, 0.25));
        assert_eq!(Quad::child_cell_center(2), Vector2::new(0.75, 0.75));
        assert_eq!(Hex::child_cell_center(5), Vector3::new(0.75, 0.75, 0.25));
    }

    #[test]
    #[should_panic]
    fn vertex_out_of_range_panics() {
        Quad::unit_cell_vertex(4);
    }
}
