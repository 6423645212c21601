//! Decoding of OSRM `route/v1` responses.
//!
//! Only the request URL and response format live here; performing the HTTP
//! request is left to the caller's [`RouteProvider`](super::RouteProvider).

use geo::Point;
use serde::Deserialize;

use crate::Error;

/// Public OSRM demo server
pub const OSRM_PUBLIC_URL: &str = "https://router.project-osrm.org";

#[derive(Debug, Deserialize)]
struct OsrmResponse {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    geometry: OsrmGeometry,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    /// `GeoJSON` order: `[lon, lat]`
    coordinates: Vec<[f64; 2]>,
}

/// Builds a route request with full `GeoJSON` geometry
pub fn osrm_route_url(base_url: &str, profile: &str, from: Point<f64>, to: Point<f64>) -> String {
    format!(
        "{}/route/v1/{profile}/{},{};{},{}?overview=full&geometries=geojson",
        base_url.trim_end_matches('/'),
        from.x(),
        from.y(),
        to.x(),
        to.y()
    )
}

/// Extracts the geometry of the first route in an OSRM response
///
/// # Errors
///
/// Returns [`Error::NoRouteFound`] when the response has no route and
/// [`Error::JsonError`] when the body can not be decoded
pub fn parse_osrm_route(body: &str) -> Result<Vec<Point<f64>>, Error> {
    let response: OsrmResponse = serde_json::from_str(body)?;

    if let Some(code) = response.code.as_deref()
        && code != "Ok"
    {
        log::debug!("OSRM responded with code {code}");
    }

    let route = response
        .routes
        .into_iter()
        .next()
        .ok_or(Error::NoRouteFound)?;

    Ok(route
        .geometry
        .coordinates
        .into_iter()
        .map(|[lon, lat]| Point::new(lon, lat))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::lat_lon;

    #[test]
    fn formats_lon_lat_pairs() {
        let url = osrm_route_url(
            "https://router.project-osrm.org/",
            "driving",
            lat_lon(28.6315, 77.2167),
            lat_lon(28.6129, 77.2295),
        );
        assert_eq!(
            url,
            "https://router.project-osrm.org/route/v1/driving/77.2167,28.6315;77.2295,28.6129?overview=full&geometries=geojson"
        );
    }

    #[test]
    fn decodes_first_route() {
        let body = r#"{
            "code": "Ok",
            "routes": [
                { "geometry": { "type": "LineString", "coordinates": [[77.2167, 28.6315], [77.22, 28.62]] }, "distance": 2500.0 },
                { "geometry": { "type": "LineString", "coordinates": [[0.0, 0.0]] } }
            ]
        }"#;

        let path = parse_osrm_route(body).unwrap();
        assert_eq!(path, vec![lat_lon(28.6315, 77.2167), lat_lon(28.62, 77.22)]);
    }

    #[test]
    fn missing_route_is_reported() {
        let body = r#"{ "code": "NoRoute", "message": "Impossible route", "routes": [] }"#;
        assert!(matches!(parse_osrm_route(body), Err(Error::NoRouteFound)));
        assert!(matches!(parse_osrm_route(r#"{ "code": "NoRoute" }"#), Err(Error::NoRouteFound)));
    }
}
