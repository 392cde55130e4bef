use common::collider::*;
use common::shapes::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

#[test]
fn test_new_and_getters() {
    let rect = Rectangle::new(2.0, 3.0, 4.0, 6.0);
    assert_eq!(rect.width(), 4.0);
    assert_eq!(rect.height(), 6.0);
    assert_eq!(rect.left(), 2.0);
    assert_eq!(rect.right(), 6.0);
    assert_eq!(rect.top(), 3.0);
    assert_eq!(rect.bottom(), 9.0);
    assert_eq!(rect.position(), Vec2::new(2.0, 3.0));
    assert_eq!(rect.size(), Vec2::new(4.0, 6.0));
}

#[test]
fn test_touching_rectangles_do_not_intersect() {
    let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
    let right = Rectangle::new(10.0, 0.0, 10.0, 10.0);
    let below = Rectangle::new(0.0, 10.0, 10.0, 10.0);
    let corner = Rectangle::new(10.0, 10.0, 10.0, 10.0);
    for other in [right, below, corner] {
        assert!(!a.intersects(&other));
        assert!(!other.intersects(&a));
    }
    assert!(a.intersects(&Rectangle::new(9.5, 9.5, 10.0, 10.0)));
}

#[test]
fn test_contains_is_inclusive() {
    let outer = Rectangle::new(0.0, 0.0, 10.0, 10.0);
    assert!(outer.contains(&outer));
    assert!(outer.contains(&Rectangle::new(0.0, 0.0, 10.0, 5.0)));
    assert!(outer.contains(&Rectangle::new(2.0, 2.0, 1.0, 1.0)));
    assert!(!outer.contains(&Rectangle::new(5.0, 5.0, 6.0, 1.0)));
    assert!(!outer.contains(&Rectangle::new(-0.5, 0.0, 1.0, 1.0)));
}

#[test]
fn test_contains_point() {
    let rect = Rectangle::new(2.0, 3.0, 4.0, 6.0);
    assert!(rect.contains_point(2.0, 3.0));
    assert!(rect.contains_point(6.0, 9.0));
    assert!(!rect.contains_point(6.5, 3.0));
    assert!(!rect.contains_point(2.0, 9.5));
}

#[test]
fn test_region_quadrants_even() {
    let region = Region::new(0, 0, 320, 180);
    assert_eq!(
        region.quadrants(),
        [
            Region::new(0, 0, 160, 90),
            Region::new(160, 0, 160, 90),
            Region::new(0, 90, 160, 90),
            Region::new(160, 90, 160, 90),
        ]
    );
}

#[test]
fn test_region_quadrants_odd_extra_goes_left_top() {
    let region = Region::new(10, 20, 81, 45);
    let [tl, tr, bl, br] = region.quadrants();
    assert_eq!(tl, Region::new(10, 20, 41, 23));
    assert_eq!(tr, Region::new(51, 20, 40, 23));
    assert_eq!(bl, Region::new(10, 43, 41, 22));
    assert_eq!(br, Region::new(51, 43, 40, 22));
    assert_eq!(tr.right(), region.right());
    assert_eq!(br.bottom(), region.bottom());
}

#[test]
fn test_region_to_rectangle() {
    let region = Region::new(-5, 7, 20, 30);
    assert_eq!(region.bounding_box(), Rectangle::new(-5.0, 7.0, 20.0, 30.0));
    assert!(!region.is_empty());
    assert!(Region::new(0, 0, 0, 10).is_empty());
}

#[test]
fn test_id_allocator_is_monotonic() {
    let mut ids = IdAllocator::new();
    let first = ids.next_id();
    let second = ids.next_id();
    let third = ids.next_id();
    assert_eq!(first.get(), 0);
    assert!(first < second && second < third);
    assert_eq!(ids.peek(), 3);

    let mut offset = IdAllocator::starting_at(100);
    assert_eq!(offset.next_id().get(), 100);
    assert_eq!(offset.next_id().to_string(), "#101");
}

#[test]
fn test_id_allocator_passes_u32_range() {
    let mut ids = IdAllocator::starting_at(u32::MAX as u64);
    let last_u32 = ids.next_id();
    let beyond = ids.next_id();
    assert_eq!(last_u32.get(), u32::MAX as u64);
    assert_eq!(beyond.get(), u32::MAX as u64 + 1);
    assert!(last_u32 < beyond);
}

#[test]
fn test_collider_equality_is_by_identity() {
    let mut ids = IdAllocator::new();
    let a = Collider::from_xywh(&mut ids, 1.0, 1.0, 4.0, 4.0);
    let b = Collider::from_xywh(&mut ids, 1.0, 1.0, 4.0, 4.0);
    assert_ne!(a, b);

    let mut moved = a;
    moved.translate(Vec2::new(50.0, 50.0));
    assert_eq!(a, moved);

    let set: HashSet<Collider> = [a, b, moved].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_same_geometry_colliders_intersect_unless_identical() {
    let mut ids = IdAllocator::new();
    let a = Collider::from_xywh(&mut ids, 5.0, 5.0, 2.0, 2.0);
    let b = Collider::from_xywh(&mut ids, 5.0, 5.0, 2.0, 2.0);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
    assert!(!a.intersects(&a));
    let copy = a;
    assert!(!a.intersects(&copy));
    assert!(a.overlaps(&a));
    assert!(a.overlaps(&b));
}

#[test]
fn test_collider_touching_is_not_colliding() {
    let mut ids = IdAllocator::new();
    let a = Collider::from_xywh(&mut ids, 0.0, 0.0, 10.0, 10.0);
    let b = Collider::from_xywh(&mut ids, 10.0, 0.0, 10.0, 10.0);
    assert!(!a.intersects(&b));
    assert!(!a.overlaps(&b));
}

#[test]
fn test_collider_contains_and_region_overlap() {
    let mut ids = IdAllocator::new();
    let big = Collider::from_xywh(&mut ids, 0.0, 0.0, 16.0, 16.0);
    let small = Collider::from_xywh(&mut ids, 16.0 - 4.0, 0.0, 4.0, 4.0);
    assert!(big.contains(&small));
    assert!(!small.contains(&big));
    assert!(big.overlaps(&Region::new(8, 8, 100, 100)));
    assert!(!big.overlaps(&Region::new(16, 0, 100, 100)));
    assert_eq!(big.right(), 16.0);
    assert_eq!(big.bottom(), 16.0);
}

#[test]
fn test_random_position_inside() {
    let world = Rectangle::new(0.0, 0.0, 320.0, 180.0);
    let size = Vec2::new(16.0, 16.0);

    // Use a fixed seed for reproducibility.
    let mut rng: StdRng = SeedableRng::seed_from_u64(123);

    for _ in 0..100 {
        let position = world.random_position_inside(size, &mut rng);
        assert!(world.contains(&Rectangle::from_position_size(position, size)));
    }
}

#[test]
fn test_random_position_inside_small_rectangle() {
    let rect = Rectangle::new(2.0, 3.0, 2.0, 2.0);
    let mut rng: StdRng = SeedableRng::seed_from_u64(123);

    let position = rect.random_position_inside(Vec2::new(4.0, 4.0), &mut rng);
    // Oversized boxes are pinned to the top-left corner.
    assert_eq!(position, Vec2::new(2.0, 3.0));
}
