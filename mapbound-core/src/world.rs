use crate::bounds::Bounds;
use crate::coordinates::Position;
use crate::error::MapError;
use crate::map::{MapHeader, load_positions};
use std::path::Path;
use tracing::{debug, trace};

/// Owns one set of bounds and every position that lives under it.
pub struct World {
    pub tick: u64,
    bounds: Bounds,
    positions: Vec<Position>,
}

impl World {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            tick: 0,
            bounds,
            positions: Vec::new(),
        }
    }

    pub fn from_header(header: &MapHeader) -> Result<Self, MapError> {
        Ok(Self::new(header.bounds()?))
    }

    /// Builds a world from a map header file and a positions file.
    pub fn load(
        map_path: impl AsRef<Path>,
        positions_path: impl AsRef<Path>,
    ) -> Result<Self, MapError> {
        let header = MapHeader::load(map_path)?;
        let mut world = Self::from_header(&header)?;
        world.set_positions(load_positions(positions_path)?);
        Ok(world)
    }

    /// Advances one tick and pulls every position back inside the bounds.
    pub fn step(&mut self) -> usize {
        self.tick += 1;
        self.clamp_all()
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn positions_mut(&mut self) -> &mut [Position] {
        &mut self.positions
    }

    pub fn set_positions(&mut self, positions: Vec<Position>) {
        self.positions = positions;
    }

    pub fn add_position(&mut self, position: Position) {
        self.positions.push(position);
    }

    pub fn into_positions(self) -> Vec<Position> {
        self.positions
    }

    pub fn positions_json(&self) -> Result<String, MapError> {
        Ok(serde_json::to_string_pretty(&self.positions)?)
    }

    /// Clamps every position and returns how many needed correcting.
    pub fn clamp_all(&mut self) -> usize {
        let bounds = self.bounds;
        let mut corrected = 0;

        for (index, position) in self.positions.iter_mut().enumerate() {
            let before = *position;
            if !position.clamp_to_bounds(&bounds) {
                trace!(index, ?before, after = ?position, "clamped position");
                corrected += 1;
            }
        }

        debug!(
            tick = self.tick,
            total = self.positions.len(),
            corrected,
            "clamped positions to bounds"
        );
        corrected
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(Bounds::default())
    }
}
