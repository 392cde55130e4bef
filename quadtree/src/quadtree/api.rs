use super::{Config, PoolStats, QuadTree, QuadTreeInner};
use crate::error::QuadtreeResult;
use common::collider::Collider;
use common::shapes::{Region, Shape};
use std::cell::RefCell;

impl QuadTree {
    pub fn new(region: Region) -> QuadtreeResult<Self> {
        Self::new_with_config(region, Config::default())
    }

    pub fn new_with_config(region: Region, config: Config) -> QuadtreeResult<Self> {
        Ok(Self {
            inner: RefCell::new(QuadTreeInner::new_with_config(region, config)?),
        })
    }

    /// Indexes a copy of `collider` in every leaf its box overlaps.
    ///
    /// Colliders entirely outside the tree's region are dropped. Adding the same collider
    /// twice stores it twice; see [`QuadTree::remove`].
    pub fn add(&mut self, collider: &Collider) {
        self.inner.get_mut().add(collider);
    }

    /// Removes one stored copy of `collider` from every leaf overlapping its current box.
    /// Returns whether any copy was found.
    ///
    /// The leaves are found from the geometry passed in, so a collider that moved since it
    /// was added has to be removed with its old position (see [`QuadTree::relocate`]).
    pub fn remove(&mut self, collider: &Collider) -> bool {
        self.inner.get_mut().remove(collider)
    }

    /// Moves a collider from the box it was indexed with to its new one.
    pub fn relocate(&mut self, previous: &Collider, current: &Collider) -> bool {
        let inner = self.inner.get_mut();
        let removed = inner.remove(previous);
        inner.add(current);
        removed
    }

    /// Empties the tree back to a single leaf root. Pools are rewound, not freed.
    pub fn clear(&mut self) {
        self.inner.get_mut().clear();
    }

    /// Fills `collisions` with every collider stored in a leaf whose region overlaps `query`.
    ///
    /// With `remove_duplicates` each collider is reported once even if it straddles
    /// several leaves. Without it the identity check is skipped and a straddling collider
    /// shows up once per leaf.
    pub fn potential_collisions<S: Shape + ?Sized>(
        &self,
        query: &S,
        collisions: &mut Vec<Collider>,
        remove_duplicates: bool,
    ) {
        collisions.clear();
        self.inner.borrow_mut().potential_collisions(
            &query.bounding_box(),
            remove_duplicates,
            |collider| collisions.push(*collider),
        );
    }

    pub fn for_each_potential_collision<S, F>(&self, query: &S, f: F)
    where
        S: Shape + ?Sized,
        F: FnMut(&Collider),
    {
        self.inner
            .borrow_mut()
            .potential_collisions(&query.bounding_box(), true, f);
    }

    /// Colliders that actually overlap `query`, excluding `query` itself.
    pub fn colliding_with(&self, query: &Collider, collisions: &mut Vec<Collider>) {
        collisions.clear();
        self.inner
            .borrow_mut()
            .potential_collisions(&query.bounding_box(), true, |collider| {
                if query.intersects(collider) {
                    collisions.push(*collider);
                }
            });
    }

    pub fn region(&self) -> Region {
        self.inner.borrow().region()
    }

    pub fn config(&self) -> Config {
        self.inner.borrow().config().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.inner.borrow().node_count()
    }

    /// Level of the deepest node; 0 while the root is still a leaf.
    pub fn depth(&self) -> u32 {
        self.inner.borrow().depth()
    }

    pub fn node_regions(&self, regions: &mut Vec<Region>) {
        self.inner.borrow().node_regions(regions);
    }

    pub fn leaf_regions(&self, regions: &mut Vec<Region>) {
        self.inner.borrow().leaf_regions(regions);
    }

    /// Every stored collider, once each.
    pub fn all_colliders(&self, colliders: &mut Vec<Collider>) {
        self.inner.borrow_mut().all_colliders(colliders);
    }

    pub fn pool_stats(&self) -> PoolStats {
        self.inner.borrow().pool_stats()
    }
}
