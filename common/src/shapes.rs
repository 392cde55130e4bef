use rand::Rng;
use std::fmt::Debug;
use std::ops::{Add, AddAssign};

/// Anything that can be reduced to an axis-aligned box.
pub trait Shape: Debug {
    fn bounding_box(&self) -> Rectangle;
}

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

/// Float rectangle anchored at its top-left corner.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Open-interval overlap: rectangles that only share an edge or a corner do not intersect.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        other.left() < self.right()
            && self.left() < other.right()
            && other.top() < self.bottom()
            && self.top() < other.bottom()
    }

    /// Inclusive containment of `other` within `self`.
    pub fn contains(&self, other: &Rectangle) -> bool {
        self.left() <= other.left()
            && other.right() <= self.right()
            && self.top() <= other.top()
            && other.bottom() <= self.bottom()
    }

    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.left() && x <= self.right() && y >= self.top() && y <= self.bottom()
    }

    /// Picks a top-left corner for a box of `size` that lies entirely inside this rectangle.
    /// Boxes larger than the rectangle are pinned to its top-left corner on that axis.
    pub fn random_position_inside<R: Rng>(&self, size: Vec2, rng: &mut R) -> Vec2 {
        Vec2::new(
            self._safe_randf32(rng, self.left(), self.right() - size.x),
            self._safe_randf32(rng, self.top(), self.bottom() - size.y),
        )
    }

    fn _safe_randf32<R: Rng>(&self, rng: &mut R, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }
        rng.gen_range(min..=max)
    }
}

impl Shape for Rectangle {
    fn bounding_box(&self) -> Rectangle {
        *self
    }
}

/// Integer rectangle governed by a quadtree node.
///
/// Regions split with integer halving; when a side is odd the extra unit goes to the
/// left/top quadrants so the four children always tile the parent exactly.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Quadrants in the order top-left, top-right, bottom-left, bottom-right.
    pub fn quadrants(&self) -> [Region; 4] {
        let right_width = self.width / 2;
        let left_width = self.width - right_width;
        let bottom_height = self.height / 2;
        let top_height = self.height - bottom_height;
        let mid_x = self.x + left_width;
        let mid_y = self.y + top_height;
        [
            Region::new(self.x, self.y, left_width, top_height),
            Region::new(mid_x, self.y, right_width, top_height),
            Region::new(self.x, mid_y, left_width, bottom_height),
            Region::new(mid_x, mid_y, right_width, bottom_height),
        ]
    }

    pub fn to_rectangle(&self) -> Rectangle {
        Rectangle::new(
            self.x as f32,
            self.y as f32,
            self.width as f32,
            self.height as f32,
        )
    }
}

impl Shape for Region {
    fn bounding_box(&self) -> Rectangle {
        self.to_rectangle()
    }
}
