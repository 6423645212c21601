use std::time::{Duration, Instant};

use hermes_core::animation::Footprint;
use hermes_core::export::to_geojson_string;
use hermes_core::geometry::points_from_lat_lon;
use hermes_core::prelude::*;
use pyo3::prelude::*;
#[cfg(feature = "stubgen")]
use pyo3_stub_gen::derive::{gen_stub_pyclass, gen_stub_pyfunction, gen_stub_pymethods};

fn parse_footprint(shape: &str) -> PyResult<Footprint> {
    match shape {
        "pentagon" => Ok(Footprint::default()),
        "rectangle" => Ok(Footprint::rectangle()),
        other => Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
            "Unknown vehicle shape '{other}', expected 'pentagon' or 'rectangle'"
        ))),
    }
}

fn frame_tuples(frame: &Frame) -> Vec<(f64, f64, f64)> {
    frame
        .poses
        .iter()
        .map(|pose| (pose.position.y(), pose.position.x(), pose.heading))
        .collect()
}

/// Animation
///
/// Vehicles looping along a polyline at a shared speed. Every tick moves
/// each vehicle by ``speed * elapsed`` along the path, wrapping at the end.
///
/// Example:
///
/// .. code-block:: python
///
///     anim = Animation(route_polyline(network, "cp", "aiims"), speed_kmh=60)
///     for lat, lon, heading in anim.tick(0.12):
///         ...
#[cfg_attr(feature = "stubgen", gen_stub_pyclass)]
#[pyclass(name = "Animation")]
pub struct PyAnimation {
    inner: Animation,
}

#[cfg_attr(feature = "stubgen", gen_stub_pymethods)]
#[pymethods]
impl PyAnimation {
    /// Parameters
    /// ----------
    /// path : list[tuple[float, float]]
    ///     ``(lat, lon)`` points to loop along
    /// speed_kmh : float, optional
    ///     Initial speed, clamped to the configured range
    /// vehicles : int, optional
    ///     Number of vehicles spaced evenly along the path. By default one
    ///     vehicle is placed at each configured offset.
    /// config_json : str, optional
    ///     Animation configuration as JSON, missing keys take their defaults
    #[new]
    #[pyo3(signature = (path, speed_kmh = None, vehicles = None, config_json = None))]
    pub fn new(
        path: Vec<(f64, f64)>,
        speed_kmh: Option<f64>,
        vehicles: Option<usize>,
        config_json: Option<&str>,
    ) -> PyResult<Self> {
        let config = match config_json {
            Some(json) => AnimationConfig::from_json_str(json).map_err(|e| {
                PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                    "Invalid animation configuration: {e}"
                ))
            })?,
            None => AnimationConfig::default(),
        };

        let mut inner = Animation::new(points_from_lat_lon(&path), config);
        if let Some(count) = vehicles {
            inner.spread_evenly(count);
        }
        if let Some(speed) = speed_kmh {
            inner.set_speed(speed);
        }
        Ok(PyAnimation { inner })
    }

    /// Advance all vehicles by ``elapsed_seconds`` and return their
    /// ``(lat, lon, heading)`` with the heading in radians
    pub fn tick(&mut self, elapsed_seconds: f64) -> Vec<(f64, f64, f64)> {
        let elapsed = Duration::try_from_secs_f64(elapsed_seconds).unwrap_or(Duration::ZERO);
        frame_tuples(&self.inner.advance_by(elapsed))
    }

    /// Advance all vehicles by the wall-clock time since the previous call
    pub fn tick_clock(&mut self) -> Vec<(f64, f64, f64)> {
        frame_tuples(&self.inner.tick(Instant::now()))
    }

    /// Current ``(lat, lon, heading)`` of every vehicle without advancing
    pub fn positions(&self) -> Vec<(f64, f64, f64)> {
        frame_tuples(&self.inner.frame())
    }

    pub fn pause(&mut self) {
        self.inner.pause();
    }

    pub fn resume(&mut self) {
        self.inner.resume();
    }

    #[getter]
    pub fn paused(&self) -> bool {
        self.inner.is_paused()
    }

    /// Speed in km/h
    #[getter]
    pub fn speed(&self) -> f64 {
        self.inner.speed_kmh()
    }

    #[setter]
    pub fn set_speed(&mut self, speed_kmh: f64) {
        self.inner.set_speed(speed_kmh);
    }

    /// Change the speed by ``delta_kmh`` and return the clamped result
    pub fn adjust_speed(&mut self, delta_kmh: f64) -> f64 {
        self.inner.adjust_speed(delta_kmh)
    }

    pub fn speed_up(&mut self) -> f64 {
        self.inner.speed_up()
    }

    pub fn slow_down(&mut self) -> f64 {
        self.inner.slow_down()
    }

    /// Length of the looped path in metres
    #[getter]
    pub fn total_length(&self) -> f64 {
        self.inner.profile().total_length()
    }

    /// Vehicle outlines as closed ``(lat, lon)`` rings
    ///
    /// ``shape`` is ``"pentagon"`` or ``"rectangle"``.
    #[pyo3(signature = (shape = "pentagon"))]
    pub fn vehicle_polygons(&self, shape: &str) -> PyResult<Vec<Vec<(f64, f64)>>> {
        let footprint = parse_footprint(shape)?;
        Ok(self
            .inner
            .frame()
            .poses
            .iter()
            .map(|pose| {
                footprint
                    .polygon(pose)
                    .exterior()
                    .points()
                    .map(|p| (p.y(), p.x()))
                    .collect()
            })
            .collect())
    }

    /// Vehicles as a GeoJSON FeatureCollection string, as points or as
    /// outlines when ``shape`` is given
    #[pyo3(signature = (shape = None))]
    pub fn frame_geojson(&self, shape: Option<&str>) -> PyResult<String> {
        let footprint = shape.map(parse_footprint).transpose()?;
        frame_to_geojson(&self.inner.frame(), footprint.as_ref())
            .and_then(|collection| to_geojson_string(&collection))
            .map_err(|e| {
                PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                    "Failed to export frame: {e}"
                ))
            })
    }

    fn __repr__(&self) -> String {
        format!(
            "Animation({} vehicles, {:.1} km path, {:.0} km/h{})",
            self.inner.vehicles().len(),
            self.inner.profile().total_length() / 1000.0,
            self.inner.speed_kmh(),
            if self.inner.is_paused() { ", paused" } else { "" }
        )
    }
}

/// Cumulative haversine distances along a ``(lat, lon)`` path
///
/// Returns
/// -------
/// tuple[list[float], float]
///     Distance in metres from the first point to each point, and the total
///     length. An empty path gives ``([], 0.0)``.
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction]
pub fn precompute(path: Vec<(f64, f64)>) -> (Vec<f64>, f64) {
    hermes_core::animation::precompute(&points_from_lat_lon(&path))
}
