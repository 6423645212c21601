use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Unknown station: {0}")]
    UnknownStation(String),
    #[error("No route found")]
    NoRouteFound,
    #[error("Route provider error: {0}")]
    ProviderError(String),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}
