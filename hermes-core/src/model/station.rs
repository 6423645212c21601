use geo::Point;

use crate::StationId;

/// Platform length used when the configuration does not specify one
pub const DEFAULT_PLATFORM_LENGTH: f64 = 72.0;
/// Blocks per platform used when the configuration does not specify them
pub const DEFAULT_PLATFORM_BLOCKS: u32 = 12;

/// Named point of the guideway network
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Unique identifier
    pub id: StationId,
    /// Human readable name
    pub name: String,
    /// Station location (`x` is longitude, `y` is latitude)
    pub position: Point<f64>,
    /// Platform length in metres
    pub length_m: f64,
    /// Number of signalling blocks along the platform
    pub blocks: u32,
}

impl Station {
    pub fn new(id: impl Into<StationId>, name: impl Into<String>, position: Point<f64>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position,
            length_m: DEFAULT_PLATFORM_LENGTH,
            blocks: DEFAULT_PLATFORM_BLOCKS,
        }
    }

    #[must_use]
    pub fn with_platform(mut self, length_m: f64, blocks: u32) -> Self {
        self.length_m = length_m;
        self.blocks = blocks;
        self
    }

    pub fn lat(&self) -> f64 {
        self.position.y()
    }

    pub fn lon(&self) -> f64 {
        self.position.x()
    }
}
