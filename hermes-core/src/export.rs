//! `GeoJSON` rendering of routes, networks and animation frames

use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use serde_json::json;

use crate::{
    Error, GuidewayEdge, HermesNetwork, RawEdge,
    animation::{Footprint, Frame},
};

fn collection(features: Vec<Feature>) -> FeatureCollection {
    FeatureCollection {
        features,
        bbox: None,
        foreign_members: None,
    }
}

/// Converts a found path to a `FeatureCollection` with one line per edge
pub fn route_to_geojson(path: &[&GuidewayEdge]) -> Result<FeatureCollection, Error> {
    let features = path
        .iter()
        .enumerate()
        .map(|(idx, edge)| {
            let geometry = Geometry::new(GeoJsonValue::from(&edge.geometry()));
            let value = json!({
                "type": "Feature",
                "geometry": geometry,
                "properties": {
                    "feature_type": "edge",
                    "leg_index": idx,
                    "from": edge.from,
                    "to": edge.to,
                    "cost_m": edge.cost,
                    "kind": edge.kind.map(|kind| kind.as_str()),
                }
            });
            Feature::from_json_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(collection(features))
}

/// Converts a whole network to stations, edge lines and station links
pub fn network_to_geojson(network: &HermesNetwork) -> Result<FeatureCollection, Error> {
    let mut features = Vec::new();

    let mut stations: Vec<_> = network.graph.stations().collect();
    stations.sort_by(|a, b| a.id.cmp(&b.id));
    for station in stations {
        let value = json!({
            "type": "Feature",
            "geometry": Geometry::new(GeoJsonValue::from(&station.position)),
            "properties": {
                "feature_type": "station",
                "id": station.id,
                "name": station.name,
            }
        });
        features.push(
            Feature::from_json_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))?,
        );
    }

    for edge in &network.edges {
        features.push(raw_edge_feature(edge, "edge")?);
    }
    for link in &network.station_links {
        features.push(raw_edge_feature(link, "station_link")?);
    }

    Ok(collection(features))
}

fn raw_edge_feature(edge: &RawEdge, feature_type: &str) -> Result<Feature, Error> {
    let line: geo::LineString<f64> = edge.path.iter().copied().collect();
    let value = json!({
        "type": "Feature",
        "geometry": Geometry::new(GeoJsonValue::from(&line)),
        "properties": {
            "feature_type": feature_type,
            "from": edge.from,
            "to": edge.to,
            "kind": edge.kind.map(|kind| kind.as_str()),
        }
    });
    Feature::from_json_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}

/// Converts a frame to vehicle features.
///
/// Vehicles are points, or outlines when a footprint is given.
pub fn frame_to_geojson(
    frame: &Frame,
    footprint: Option<&Footprint>,
) -> Result<FeatureCollection, Error> {
    let features = frame
        .poses
        .iter()
        .enumerate()
        .map(|(idx, pose)| {
            let geometry = match footprint {
                Some(footprint) => Geometry::new(GeoJsonValue::from(&footprint.polygon(pose))),
                None => Geometry::new(GeoJsonValue::from(&pose.position)),
            };
            let value = json!({
                "type": "Feature",
                "geometry": geometry,
                "properties": {
                    "feature_type": "vehicle",
                    "vehicle_index": idx,
                    "heading_rad": pose.heading,
                    "bearing_deg": pose.compass_bearing(),
                    "speed_kmh": frame.speed_kmh,
                    "paused": frame.paused,
                }
            });
            Feature::from_json_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(collection(features))
}

pub fn to_geojson_string(collection: &FeatureCollection) -> Result<String, Error> {
    serde_json::to_string(collection).map_err(|e| Error::GeoJsonError(e.to_string()))
}
