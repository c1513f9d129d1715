//! PyO3 bindings for the `hypercell` descriptor queries.
//!
//! Notes
//! - Dimensions and attributes arrive as plain `int`/`str`; everything is
//!   routed through `hypercell::dispatch`, so indices are always checked.
//! - Errors: range violations raise `IndexError`, everything else `ValueError`.

use pyo3::prelude::*;

mod common;
mod tables;

#[pymodule]
fn hypercell_native(_py: Python, m: &PyModule) -> PyResult<()> {
    tables::register(m)?;
    m.add("VERSION", hypercell::VERSION)?;
    m.add("MAX_DIM", hypercell::cfg::MAX_DIM)?;
    Ok(())
}
