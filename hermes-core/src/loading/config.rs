use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use hashbrown::HashSet;
use serde::Deserialize;

use crate::{
    EdgeKind, Error, Station,
    geometry::lat_lon,
    model::station::{DEFAULT_PLATFORM_BLOCKS, DEFAULT_PLATFORM_LENGTH},
};

/// Static description of a guideway network.
///
/// Positions are `[lat, lon]` pairs, the order map widgets use.
///
/// ```json
/// {
///   "stations": [{ "id": "cp", "name": "Connaught Place", "position": [28.6315, 77.2167] }],
///   "edges": [{ "from": "cp", "to": "indiaGate", "type": "straight" }]
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
    pub stations: Vec<StationConfig>,
    #[serde(default)]
    pub edges: Vec<EdgeConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StationConfig {
    pub id: String,
    pub name: String,
    pub position: [f64; 2],
    #[serde(default = "default_platform_length")]
    pub length: f64,
    #[serde(default = "default_platform_blocks")]
    pub blocks: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EdgeConfig {
    pub from: String,
    pub to: String,
    #[serde(default, rename = "type")]
    pub kind: Option<EdgeKind>,
    /// Precomputed geometry; edges without one are resolved by a route provider
    #[serde(default)]
    pub path: Vec<[f64; 2]>,
}

fn default_platform_length() -> f64 {
    DEFAULT_PLATFORM_LENGTH
}

fn default_platform_blocks() -> u32 {
    DEFAULT_PLATFORM_BLOCKS
}

impl NetworkConfig {
    /// Reads and validates a JSON network configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the file can not be read, is not valid JSON or
    /// fails validation
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("Failed to open file '{}': {}", path.display(), e),
            )
        })?;
        let config: NetworkConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a JSON network configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid JSON or fails validation
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let config: NetworkConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that stations exist, are unique and have finite positions
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] describing the first problem found
    pub fn validate(&self) -> Result<(), Error> {
        if self.stations.is_empty() {
            return Err(Error::InvalidData(
                "No stations provided in the configuration".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(self.stations.len());
        for station in &self.stations {
            if !seen.insert(station.id.as_str()) {
                return Err(Error::InvalidData(format!(
                    "Duplicate station id: {}",
                    station.id
                )));
            }
            if !station.position.iter().all(|c| c.is_finite()) {
                return Err(Error::InvalidData(format!(
                    "Station {} has a non-finite position",
                    station.id
                )));
            }
        }

        Ok(())
    }

    pub fn stations(&self) -> Vec<Station> {
        self.stations.iter().map(StationConfig::to_station).collect()
    }
}

impl StationConfig {
    pub fn to_station(&self) -> Station {
        let [lat, lon] = self.position;
        Station::new(self.id.clone(), self.name.clone(), lat_lon(lat, lon))
            .with_platform(self.length, self.blocks)
    }
}
