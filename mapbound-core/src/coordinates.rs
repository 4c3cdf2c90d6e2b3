use crate::bounds::Bounds;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32, // height; never touched by clamping
    pub z: f32,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Forces `x` into `[0, max_x]` and `z` into `[0, max_z]`, returning
    /// `true` when nothing had to be corrected.
    ///
    /// All four checks always run, lower bounds first. A NaN coordinate fails
    /// every comparison and is left as is.
    pub fn clamp_to_bounds(&mut self, bounds: &Bounds) -> bool {
        let mut was_in_bounds = true;

        if self.x < 0.0 {
            self.x = 0.0;
            was_in_bounds = false;
        }

        if self.z < 0.0 {
            self.z = 0.0;
            was_in_bounds = false;
        }

        if self.x > bounds.max_x {
            self.x = bounds.max_x;
            was_in_bounds = false;
        }

        if self.z > bounds.max_z {
            self.z = bounds.max_z;
            was_in_bounds = false;
        }

        was_in_bounds
    }

    pub fn clamped(mut self, bounds: &Bounds) -> Self {
        self.clamp_to_bounds(bounds);
        self
    }
}

impl From<[f32; 3]> for Position {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }
}
