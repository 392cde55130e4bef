use super::storage::{ListPool, NodePool, PoolStats};
use super::types::{child_indices, NodeKind, QuadNode, ROOT};
use super::{Config, QuadTreeInner};
use crate::collision_detection::{collider_region, rectangle_region};
use crate::error::{QuadtreeError, QuadtreeResult};
use common::collider::{Collider, ColliderId};
use common::shapes::{Rectangle, Region};
use fxhash::FxHashSet;
use log::{debug, trace};

impl QuadTreeInner {
    pub(crate) fn new_with_config(region: Region, config: Config) -> QuadtreeResult<Self> {
        if region.is_empty() {
            return Err(QuadtreeError::InvalidRegion {
                width: region.width,
                height: region.height,
            });
        }
        if region.x.checked_add(region.width).is_none()
            || region.y.checked_add(region.height).is_none()
        {
            return Err(QuadtreeError::RegionOverflow {
                x: region.x,
                y: region.y,
                width: region.width,
                height: region.height,
            });
        }
        config.validate()?;
        let pool_size = config.pool_size();
        // A leaf holds at most preferred_len + 1 colliders before it splits.
        let mut lists = ListPool::with_capacity(pool_size, config.preferred_len + 1);
        let root = QuadNode::leaf(region, 0, lists.acquire());
        let nodes = NodePool::with_root(root, pool_size);
        debug!(
            "quadtree over {:?}: preferred_len {}, max_level {}, {} pool slots",
            region, config.preferred_len, config.max_level, pool_size
        );
        Ok(Self {
            region,
            config,
            nodes,
            lists,
            seen: FxHashSet::default(),
        })
    }

    pub(crate) fn region(&self) -> Region {
        self.region
    }

    pub(crate) fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn add(&mut self, collider: &Collider) {
        if !collider_region(collider, &self.region) {
            trace!("collider {} lies outside {:?}, not indexed", collider.id(), self.region);
            return;
        }
        self.add_to(ROOT, collider);
    }

    fn add_to(&mut self, node_idx: u32, collider: &Collider) {
        let node = *self.nodes.get(node_idx);
        match node.kind {
            NodeKind::Internal { first_child } => self.add_to_children(first_child, collider),
            NodeKind::Leaf { list } => {
                // The split check runs before the push, so a leaf reaches preferred_len + 1.
                let len = self.lists.get(list).len();
                if node.level == self.config.max_level || len <= self.config.preferred_len {
                    self.lists.get_mut(list).push(*collider);
                } else {
                    let first_child = self.split(node_idx, list);
                    self.add_to_children(first_child, collider);
                }
            }
        }
    }

    fn add_to_children(&mut self, first_child: u32, collider: &Collider) {
        for child in child_indices(first_child) {
            if collider_region(collider, &self.nodes.get(child).region) {
                self.add_to(child, collider);
            }
        }
    }

    /// Turns a leaf into an internal node and pushes its colliders down one level.
    fn split(&mut self, node_idx: u32, list: u32) -> u32 {
        let node = *self.nodes.get(node_idx);
        trace!("splitting level {} node over {:?}", node.level, node.region);
        let level = node.level + 1;
        let lists = &mut self.lists;
        let children = node
            .region
            .quadrants()
            .map(|region| QuadNode::leaf(region, level, lists.acquire()));
        let first_child = self.nodes.acquire_block(children);
        self.nodes.get_mut(node_idx).kind = NodeKind::Internal { first_child };

        let held = self.lists.take(list);
        for collider in &held {
            self.add_to_children(first_child, collider);
        }
        self.lists.restore(list, held);
        first_child
    }

    pub(crate) fn remove(&mut self, collider: &Collider) -> bool {
        self.remove_from(ROOT, collider)
    }

    fn remove_from(&mut self, node_idx: u32, collider: &Collider) -> bool {
        let kind = self.nodes.get(node_idx).kind;
        match kind {
            NodeKind::Internal { first_child } => {
                let mut removed = false;
                for child in child_indices(first_child) {
                    if collider_region(collider, &self.nodes.get(child).region) {
                        removed |= self.remove_from(child, collider);
                    }
                }
                removed
            }
            NodeKind::Leaf { list } => {
                let held = self.lists.get_mut(list);
                match held.iter().position(|c| c.id() == collider.id()) {
                    Some(pos) => {
                        held.swap_remove(pos);
                        true
                    }
                    None => false,
                }
            }
        }
    }

    pub(crate) fn potential_collisions<F>(&mut self, query: &Rectangle, dedup: bool, mut f: F)
    where
        F: FnMut(&Collider),
    {
        if dedup {
            self.seen.clear();
        }
        if !rectangle_region(query, &self.region) {
            return;
        }
        gather(
            &self.nodes,
            &self.lists,
            ROOT,
            query,
            dedup,
            &mut self.seen,
            &mut f,
        );
    }

    pub(crate) fn clear(&mut self) {
        trace!("clearing quadtree, {} nodes released", self.nodes.len());
        self.nodes.rewind();
        self.lists.rewind();
        let list = self.lists.acquire();
        let root = self.nodes.get_mut(ROOT);
        root.kind = NodeKind::Leaf { list };
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.nodes.iter().all(|node| match node.kind {
            NodeKind::Leaf { list } => self.lists.get(list).is_empty(),
            NodeKind::Internal { .. } => true,
        })
    }

    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn depth(&self) -> u32 {
        self.nodes.iter().map(|node| node.level).max().unwrap_or(0)
    }

    pub(crate) fn node_regions(&self, regions: &mut Vec<Region>) {
        regions.extend(self.nodes.iter().map(|node| node.region));
    }

    pub(crate) fn leaf_regions(&self, regions: &mut Vec<Region>) {
        regions.extend(
            self.nodes
                .iter()
                .filter(|node| node.is_leaf())
                .map(|node| node.region),
        );
    }

    pub(crate) fn all_colliders(&mut self, colliders: &mut Vec<Collider>) {
        self.seen.clear();
        for node in self.nodes.iter() {
            if let NodeKind::Leaf { list } = node.kind {
                for collider in self.lists.get(list) {
                    if self.seen.insert(collider.id()) {
                        colliders.push(*collider);
                    }
                }
            }
        }
    }

    pub(crate) fn pool_stats(&self) -> PoolStats {
        PoolStats {
            lists_used: self.lists.used(),
            lists_capacity: self.lists.capacity(),
            blocks_used: self.nodes.blocks_used(),
            blocks_capacity: self.nodes.blocks_capacity(),
        }
    }
}

// Walks every node under `node_idx` whose region overlaps the query and reports the
// colliders held by the leaves it reaches.
fn gather<F>(
    nodes: &NodePool,
    lists: &ListPool,
    node_idx: u32,
    query: &Rectangle,
    dedup: bool,
    seen: &mut FxHashSet<ColliderId>,
    f: &mut F,
) where
    F: FnMut(&Collider),
{
    match nodes.get(node_idx).kind {
        NodeKind::Internal { first_child } => {
            for child in child_indices(first_child) {
                if rectangle_region(query, &nodes.get(child).region) {
                    gather(nodes, lists, child, query, dedup, seen, f);
                }
            }
        }
        NodeKind::Leaf { list } => {
            for collider in lists.get(list) {
                if dedup && !seen.insert(collider.id()) {
                    continue;
                }
                f(collider);
            }
        }
    }
}
