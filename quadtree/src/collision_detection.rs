use common::collider::Collider;
use common::shapes::{Rectangle, Region, Shape};

// Same open-interval rule as Rectangle::intersects, without converting the region first
#[inline]
pub fn rectangle_region(rectangle: &Rectangle, region: &Region) -> bool {
    let (left, top) = (region.x as f32, region.y as f32);
    let (right, bottom) = (region.right() as f32, region.bottom() as f32);
    left < rectangle.right()
        && rectangle.left() < right
        && top < rectangle.bottom()
        && rectangle.top() < bottom
}

#[inline]
pub fn collider_region(collider: &Collider, region: &Region) -> bool {
    rectangle_region(&collider.bounding_box(), region)
}

