use pyo3::prelude::*;
#[cfg(feature = "stubgen")]
use pyo3_stub_gen::define_stub_info_gatherer;

use animation::{PyAnimation, precompute};
use matrix::cost_matrix;
use model::{PyNetwork, py_create_network};
use routing::{PyEdge, find_path, find_paths, route_geojson, route_polyline};

pub mod animation;
pub mod matrix;
pub mod model;
pub mod routing;

/// A Python module implemented in Rust.
#[pymodule]
fn hermes(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();

    m.add_class::<PyNetwork>()?;
    m.add_class::<PyEdge>()?;
    m.add_function(wrap_pyfunction!(py_create_network, m)?)?;

    m.add_function(wrap_pyfunction!(find_path, m)?)?;
    m.add_function(wrap_pyfunction!(find_paths, m)?)?;
    m.add_function(wrap_pyfunction!(route_polyline, m)?)?;
    m.add_function(wrap_pyfunction!(route_geojson, m)?)?;

    m.add_function(wrap_pyfunction!(cost_matrix, m)?)?;

    m.add_class::<PyAnimation>()?;
    m.add_function(wrap_pyfunction!(precompute, m)?)?;
    Ok(())
}

#[cfg(feature = "stubgen")]
define_stub_info_gatherer!(stub_info);
