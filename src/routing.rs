use hermes_core::export::to_geojson_string;
use hermes_core::prelude::*;
use pyo3::prelude::*;
#[cfg(feature = "stubgen")]
use pyo3_stub_gen::derive::{gen_stub_pyclass, gen_stub_pyfunction, gen_stub_pymethods};

use hermes_core::geometry::points_to_lat_lon;

use crate::model::PyNetwork;

/// One directed edge of a found route
#[cfg_attr(feature = "stubgen", gen_stub_pyclass)]
#[pyclass(name = "Edge")]
#[derive(Clone)]
pub struct PyEdge {
    inner: GuidewayEdge,
}

impl From<&GuidewayEdge> for PyEdge {
    fn from(edge: &GuidewayEdge) -> Self {
        PyEdge {
            inner: edge.clone(),
        }
    }
}

#[cfg_attr(feature = "stubgen", gen_stub_pymethods)]
#[pymethods]
impl PyEdge {
    #[getter]
    pub fn from_station(&self) -> String {
        self.inner.from.clone()
    }

    #[getter]
    pub fn to_station(&self) -> String {
        self.inner.to.clone()
    }

    /// Routing cost in metres
    #[getter]
    pub fn cost(&self) -> f64 {
        self.inner.cost
    }

    /// Geometry as `(lat, lon)` pairs, oriented from `from_station` to `to_station`
    #[getter]
    pub fn path(&self) -> Vec<(f64, f64)> {
        points_to_lat_lon(&self.inner.path)
    }

    #[getter]
    pub fn kind(&self) -> Option<String> {
        self.inner.kind.map(|kind| kind.as_str().to_string())
    }

    fn __repr__(&self) -> String {
        format!(
            "Edge({} -> {}, {:.1} m, {} points)",
            self.inner.from,
            self.inner.to,
            self.inner.cost,
            self.inner.path.len()
        )
    }
}

fn to_py_edges(path: &[&GuidewayEdge]) -> Vec<PyEdge> {
    path.iter().map(|edge| PyEdge::from(*edge)).collect()
}

/// Find the cheapest route between two stations
///
/// Parameters
/// ----------
/// network : Network
///     Network to route on
/// start : str
///     Id of the start station
/// goal : str
///     Id of the goal station
///
/// Returns
/// -------
/// list[Edge]
///     Edges from ``start`` to ``goal``. Empty when both are the same
///     station, when either is unknown or when the goal is unreachable.
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction]
pub fn find_path(network: &PyNetwork, start: &str, goal: &str) -> Vec<PyEdge> {
    let path = hermes_core::routing::find_path(&network.network.graph, start, goal);
    to_py_edges(&path)
}

/// Find routes for many station pairs in parallel
///
/// Returns one edge list per pair, in input order.
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction]
pub fn find_paths(
    py: Python<'_>,
    network: &PyNetwork,
    pairs: Vec<(String, String)>,
) -> Vec<Vec<PyEdge>> {
    py.detach(|| {
        hermes_core::routing::find_paths(&network.network.graph, &pairs)
            .iter()
            .map(|path| to_py_edges(path))
            .collect()
    })
}

/// Find a route and return its geometry as one `(lat, lon)` polyline
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction]
pub fn route_polyline(network: &PyNetwork, start: &str, goal: &str) -> Vec<(f64, f64)> {
    let path = hermes_core::routing::find_path(&network.network.graph, start, goal);
    points_to_lat_lon(&concatenate_paths(&path))
}

/// Find a route and return it as a GeoJSON FeatureCollection string
///
/// Raises
/// ------
/// RuntimeError
///     If the route can not be serialized
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction]
pub fn route_geojson(network: &PyNetwork, start: &str, goal: &str) -> PyResult<String> {
    let path = hermes_core::routing::find_path(&network.network.graph, start, goal);
    route_to_geojson(&path)
        .and_then(|collection| to_geojson_string(&collection))
        .map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                "Failed to export route {start} -> {goal}: {e}"
            ))
        })
}
