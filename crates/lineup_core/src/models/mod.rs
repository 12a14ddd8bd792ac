pub mod player;
pub mod registry;

pub use player::{Availability, Player, Position, PositionGroup};
pub use registry::PlayerRegistry;
