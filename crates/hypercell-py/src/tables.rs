//! Count and face-table bindings.

use crate::common::{dimension, map_topology_err};
use hypercell::api::counts_table;
use hypercell::Attribute;
use pyo3::prelude::*;
use pyo3::types::PyDict;

#[pyfunction]
pub fn count_of(attribute: &str, dim: usize) -> PyResult<usize> {
    let attribute: Attribute = attribute.parse().map_err(map_topology_err)?;
    Ok(hypercell::count_of(attribute, dimension(dim)?))
}

#[pyfunction]
pub fn opposite_face(dim: usize, face: usize) -> PyResult<usize> {
    hypercell::opposite_face(dimension(dim)?, face).map_err(map_topology_err)
}

#[pyfunction]
pub fn child_cell_on_face(dim: usize, face: usize, subface: usize) -> PyResult<usize> {
    hypercell::child_cell_on_face(dimension(dim)?, face, subface).map_err(map_topology_err)
}

/// `{"dim", "counts", "opposite_face", "child_cell_on_face"}` for one dimension.
#[pyfunction]
pub fn descriptor(py: Python<'_>, dim: usize) -> PyResult<PyObject> {
    let d = dimension(dim)?;
    let desc = d.descriptor();
    let counts = PyDict::new(py);
    for (name, value) in counts_table(d) {
        counts.set_item(name, value)?;
    }
    let out = PyDict::new(py);
    out.set_item("dim", desc.dim())?;
    out.set_item("counts", counts)?;
    out.set_item("opposite_face", desc.opposite_face.to_vec())?;
    out.set_item("child_cell_on_face", desc.child_cell_table())?;
    Ok(out.to_object(py))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(count_of, m)?)?;
    m.add_function(wrap_pyfunction!(opposite_face, m)?)?;
    m.add_function(wrap_pyfunction!(child_cell_on_face, m)?)?;
    m.add_function(wrap_pyfunction!(descriptor, m)?)?;
    Ok(())
}
