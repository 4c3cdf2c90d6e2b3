use crate::coordinates::Position;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_X: f32 = 2048.0;
pub const DEFAULT_MAX_Z: f32 = 2048.0;

/// Rectangular footprint `[0, max_x] x [0, max_z]` shared by every position
/// on a map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    #[serde(default = "default_max_x")]
    pub max_x: f32,
    #[serde(default = "default_max_z")]
    pub max_z: f32,
}

pub(crate) fn default_max_x() -> f32 {
    DEFAULT_MAX_X
}

pub(crate) fn default_max_z() -> f32 {
    DEFAULT_MAX_Z
}

impl Bounds {
    pub fn new(max_x: f32, max_z: f32) -> Self {
        Self { max_x, max_z }
    }

    pub fn contains(&self, position: &Position) -> bool {
        (0.0..=self.max_x).contains(&position.x) && (0.0..=self.max_z).contains(&position.z)
    }

    pub fn clamp(&self, position: &mut Position) -> bool {
        position.clamp_to_bounds(self)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_X, DEFAULT_MAX_Z)
    }
}
