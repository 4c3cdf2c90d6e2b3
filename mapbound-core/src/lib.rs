pub mod bounds;
pub mod coordinates;
pub mod error;
pub mod map;
pub mod world;

pub use bounds::{Bounds, DEFAULT_MAX_X, DEFAULT_MAX_Z};
pub use coordinates::Position;
pub use error::MapError;
pub use map::{MapHeader, load_positions};
pub use world::World;
