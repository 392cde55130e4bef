use crate::shapes::{Rectangle, Shape, Vec2};
use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColliderId(u64);

impl ColliderId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ColliderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out collider identities in strictly increasing order.
///
/// Identities are never reused or rewound. Whoever creates game entities owns the
/// allocator; two allocators may hand out the same identity, so colliders that end up in
/// the same tree must come from the same allocator.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    pub fn next_id(&mut self) -> ColliderId {
        let id = ColliderId(self.next);
        self.next += 1;
        id
    }

    /// Number of identities handed out so far when started at zero.
    pub fn peek(&self) -> u64 {
        self.next
    }
}

/// Axis-aligned hitbox with a stable identity.
///
/// Equality and hashing go through the identity only, so two colliders with identical
/// geometry are still distinct.
#[derive(Debug, Copy, Clone)]
pub struct Collider {
    pub position: Vec2,
    pub size: Vec2,
    id: ColliderId,
}

impl Collider {
    pub fn new(ids: &mut IdAllocator, position: Vec2, size: Vec2) -> Self {
        debug_assert!(
            size.x > 0.0 && size.y > 0.0,
            "collider size must be positive (width: {}, height: {})",
            size.x,
            size.y
        );
        Self {
            position,
            size,
            id: ids.next_id(),
        }
    }

    pub fn from_xywh(ids: &mut IdAllocator, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(ids, Vec2::new(x, y), Vec2::new(width, height))
    }

    pub fn id(&self) -> ColliderId {
        self.id
    }

    pub fn left(&self) -> f32 {
        self.position.x
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.position.y
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Geometric overlap with strict inequalities; touching edges do not count.
    pub fn overlaps<S: Shape + ?Sized>(&self, other: &S) -> bool {
        self.bounding_box().intersects(&other.bounding_box())
    }

    /// Like [`Collider::overlaps`], but a collider never intersects itself (or a copy of
    /// itself returned from a query).
    pub fn intersects(&self, other: &Collider) -> bool {
        self.id != other.id && self.overlaps(other)
    }

    /// True when `other` lies fully inside this collider, boundaries included.
    pub fn contains<S: Shape + ?Sized>(&self, other: &S) -> bool {
        self.bounding_box().contains(&other.bounding_box())
    }
}

impl Shape for Collider {
    fn bounding_box(&self) -> Rectangle {
        Rectangle::from_position_size(self.position, self.size)
    }
}

impl PartialEq for Collider {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Collider {}

impl Hash for Collider {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
