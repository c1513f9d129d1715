//! Print, for each face of a refined quad and hex, which children touch it and
//! which children of the neighbor across that face they meet.
//!
//! Two cells sharing a face see it as face `f` and `opposite_face(f)`; in a
//! structured (aligned) mesh subface `s` of one is subface `s` of the other.

use hypercell::prelude::*;

fn report<G: RefinedFaceTopology>() {
    println!("dim {} ({} children)", G::DIM, G::CHILDREN_PER_CELL);
    for f in 0..G::FACES_PER_CELL {
        let g = G::opposite_face(f);
        let pairs: Vec<(usize, usize)> = (0..G::SUBFACES_PER_FACE)
            .map(|s| (G::child_cell_on_face(f, s), G::child_cell_on_face(g, s)))
            .collect();
        println!("  face {f} | neighbor face {g} | (child, neighbor child) {pairs:?}");
    }
}

fn main() {
    report::<GeometryInfo<2>>();
    report::<GeometryInfo<3>>();
}
