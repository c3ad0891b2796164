mod occupancy;
mod pose;
mod snapshot;
mod texture;

pub mod demo;

pub use occupancy::{OPEN_COLOR, OccupancySurface};
pub use pose::Pose;
pub use snapshot::MapSlot;
pub use texture::{MISSING_TEXEL, Texture, TextureError};
