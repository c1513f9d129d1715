use hypercell::{Dimension, TopologyError};
use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::PyErr;

pub fn map_topology_err(err: TopologyError) -> PyErr {
    match err {
        TopologyError::IndexRange { .. } => PyIndexError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

pub fn dimension(dim: usize) -> Result<Dimension, PyErr> {
    Dimension::new(dim).map_err(map_topology_err)
}
