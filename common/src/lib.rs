pub mod collider;
pub mod shapes;

pub use collider::{Collider, ColliderId, IdAllocator};
pub use shapes::{Rectangle, Region, Shape, Vec2};
