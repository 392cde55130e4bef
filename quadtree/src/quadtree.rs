mod api;
mod config;
mod core;
mod storage;
mod types;

pub use config::{Config, MAX_LEVEL, MAX_LEVEL_LIMIT, PREFERRED_LEN};
pub use storage::PoolStats;

use common::collider::ColliderId;
use common::shapes::Region;
use fxhash::FxHashSet;
use std::cell::RefCell;
use storage::{ListPool, NodePool};

/// Fixed-depth region quadtree used as a broadphase filter.
///
/// The tree stores copies of colliders. A collider whose box straddles a split line is
/// stored in every leaf it overlaps, so queries can deduplicate by identity on request.
/// Clearing rewinds the node and list pools instead of freeing them; after the first few
/// frames a clear-and-rebuild cycle does not touch the allocator.
///
/// Not reentrant: calling back into the tree from a query callback panics.
pub struct QuadTree {
    inner: RefCell<QuadTreeInner>,
}

pub(crate) struct QuadTreeInner {
    region: Region,
    config: Config,
    nodes: NodePool,
    lists: ListPool,
    seen: FxHashSet<ColliderId>,
}
