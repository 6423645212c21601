use geo::Point;
use hermes_core::export::{network_to_geojson, to_geojson_string};
use hermes_core::geometry::{points_from_lat_lon, points_to_lat_lon};
use hermes_core::prelude::*;
use pyo3::prelude::*;
#[cfg(feature = "stubgen")]
use pyo3_stub_gen::derive::{gen_stub_pyclass, gen_stub_pyfunction, gen_stub_pymethods};

/// Network
///
/// A guideway network: stations, the bidirectional routable graph built
/// from the configured edges, and the geometry needed to draw it.
///
/// Example:
///
/// .. code-block:: python
///
///     network = create_network(config_path="network.json")
///     edges = find_path(network, "cp", "aiims")
#[cfg_attr(feature = "stubgen", gen_stub_pyclass)]
#[pyclass(name = "Network")]
pub struct PyNetwork {
    pub(crate) network: HermesNetwork,
}

#[cfg_attr(feature = "stubgen", gen_stub_pymethods)]
#[pymethods]
impl PyNetwork {
    pub fn station_count(&self) -> usize {
        self.network.graph.station_count()
    }

    pub fn edge_count(&self) -> usize {
        self.network.graph.edge_count()
    }

    /// Station ids in sorted order
    pub fn station_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .network
            .graph
            .stations()
            .map(|station| station.id.clone())
            .collect();
        ids.sort();
        ids
    }

    /// Name and `(lat, lon)` position of a station, or None if unknown
    pub fn station(&self, station_id: &str) -> Option<(String, f64, f64)> {
        self.network
            .graph
            .station(station_id)
            .map(|station| (station.name.clone(), station.lat(), station.lon()))
    }

    /// Every configured edge joined into one `(lat, lon)` polyline
    pub fn full_polyline(&self) -> Vec<(f64, f64)> {
        points_to_lat_lon(&self.network.full_polyline())
    }

    /// Stations, edges and station links as a GeoJSON FeatureCollection string
    pub fn to_geojson(&self) -> PyResult<String> {
        network_to_geojson(&self.network)
            .and_then(|collection| to_geojson_string(&collection))
            .map_err(|e| {
                PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                    "Failed to export network: {e}"
                ))
            })
    }

    fn __repr__(&self) -> String {
        format!(
            "Network with {} stations, {} directed edges and {} station links",
            self.network.graph.station_count(),
            self.network.graph.edge_count(),
            self.network.station_links.len()
        )
    }

    fn __str__(&self) -> String {
        self.__repr__()
    }
}

/// Route provider delegating to a Python callable
/// `route(from_lat, from_lon, to_lat, to_lon) -> list[tuple[float, float]] | None`
struct PyRouteProvider<'a, 'py> {
    callback: &'a Bound<'py, PyAny>,
}

impl RouteProvider for PyRouteProvider<'_, '_> {
    fn route(&self, from: Point<f64>, to: Point<f64>) -> Result<Vec<Point<f64>>, Error> {
        let result = self
            .callback
            .call1((from.y(), from.x(), to.y(), to.x()))
            .map_err(|e| Error::ProviderError(e.to_string()))?;

        if result.is_none() {
            return Err(Error::NoRouteFound);
        }

        let points: Vec<(f64, f64)> = result.extract::<Vec<(f64, f64)>>().map_err(|e| {
            let err: PyErr = e.into();
            Error::ProviderError(err.to_string())
        })?;

        Ok(points_from_lat_lon(&points))
    }
}

/// Create a guideway network from a JSON configuration
///
/// Exactly one of ``config_path`` and ``config_json`` must be given.
/// Edges configured without a ``path`` get their geometry from
/// ``route_provider`` or, if it is None, from straight lines subdivided into
/// 6 m blocks. An edge the provider fails on is logged and left out.
///
/// Parameters
/// ----------
/// config_path : str, optional
///     Path to a JSON network configuration
/// config_json : str, optional
///     JSON network configuration as a string
/// route_provider : Callable[[float, float, float, float], list[tuple[float, float]] | None], optional
///     Called as ``route_provider(from_lat, from_lon, to_lat, to_lon)``; returns
///     the ``(lat, lon)`` polyline between the two points, or None if there is no route
///
/// Returns
/// -------
/// Network
///
/// Raises
/// ------
/// ValueError
///     If the configuration can not be read or is invalid
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction(name = "create_network")]
#[pyo3(signature = (config_path = None, config_json = None, route_provider = None))]
pub fn py_create_network(
    py: Python<'_>,
    config_path: Option<&str>,
    config_json: Option<&str>,
    route_provider: Option<&Bound<'_, PyAny>>,
) -> PyResult<PyNetwork> {
    let config = match (config_path, config_json) {
        (Some(path), None) => NetworkConfig::from_path(path),
        (None, Some(json)) => NetworkConfig::from_json_str(json),
        _ => {
            return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(
                "Provide exactly one of config_path and config_json",
            ));
        }
    }
    .map_err(|e| {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
            "Failed to load network configuration: {e}"
        ))
    })?;

    // A Python route provider needs the GIL for every call
    let network = match route_provider {
        Some(callback) => create_network(&config, &PyRouteProvider { callback }),
        None => py.detach(|| create_network(&config, &StraightLineProvider)),
    }
    .map_err(|e| {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
            "Failed to create network: {e}"
        ))
    })?;

    Ok(PyNetwork { network })
}
