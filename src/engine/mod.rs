pub mod intersect;
pub mod projection;
pub mod scheduler;
pub mod texture_map;
pub mod types;

pub use intersect::{Intersection, RayHit, RayIntersector};
pub use projection::{Projection, project, shade};
pub use scheduler::{ColumnCaster, FrameScheduler, SchedulerError, partition_columns};
pub use texture_map::texture_column;
pub use types::{HitFamily, RenderConfig, Screen};
