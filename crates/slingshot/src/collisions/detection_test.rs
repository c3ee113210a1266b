use nalgebra::{Point2, Vector2};

use crate::body::{Body, BodyId, Colour};
use crate::collisions::detection::*;

fn disk(id: u64, x: f64, y: f64, radius: f64) -> Body {
    Body {
        id: BodyId(id),
        mass: 1.0e24,
        radius,
        position: Point2::new(x, y),
        velocity: Vector2::zeros(),
        colour: Colour::WHITE,
        is_target: false,
        player_spawned: false,
        is_deleted: false,
    }
}

#[test]
fn test_touching_at_sum_of_radii_collides() {
    let a = disk(0, 0.0, 0.0, 2.0);
    let b = disk(1, 5.0, 0.0, 3.0);

    assert!(colliding(&a, &b));
}

#[test]
fn test_just_beyond_sum_of_radii_does_not_collide() {
    let a = disk(0, 0.0, 0.0, 2.0);
    let b = disk(1, 5.0 + 1e-9, 0.0, 3.0);

    assert!(!colliding(&a, &b));
}

#[test]
fn test_partial_overlap_collides() {
    let a = disk(0, 0.0, 0.0, 7.0e9);
    let b = disk(1, 3.0e9, 4.0e9, 7.0e9);

    assert!(colliding(&a, &b));
}

#[test]
fn test_far_apart_does_not_collide() {
    let a = disk(0, 0.0, 0.0, 7.0e9);
    let b = disk(1, 1.5e11, 0.0, 7.0e9);

    assert!(!colliding(&a, &b));
}

#[test]
fn test_internal_tangency_collides() {
    // Small disk touching the inside edge of a large one: d == |ra - rb|
    let big = disk(0, 0.0, 0.0, 10.0);
    let small = disk(1, 6.0, 0.0, 4.0);

    assert!(colliding(&big, &small));
}

#[test]
fn test_fully_nested_disk_does_not_collide() {
    // Strictly inside: d < |ra - rb|
    let big = disk(0, 0.0, 0.0, 10.0);
    let small = disk(1, 1.0, 0.0, 2.0);

    assert!(!colliding(&big, &small));
}

#[test]
fn test_equal_radii_coincident_centers_collide() {
    let a = disk(0, 4.0, 4.0, 3.0);
    let b = disk(1, 4.0, 4.0, 3.0);

    assert!(colliding(&a, &b));
}

#[test]
fn test_symmetry() {
    let cases = [
        (disk(0, 0.0, 0.0, 2.0), disk(1, 5.0, 0.0, 3.0)),
        (disk(0, 0.0, 0.0, 2.0), disk(1, 5.1, 0.0, 3.0)),
        (disk(0, 0.0, 0.0, 10.0), disk(1, 1.0, 1.0, 2.0)),
        (disk(0, 0.0, 0.0, 10.0), disk(1, 6.0, 0.0, 4.0)),
        (disk(0, -3.0, 2.0, 1.0), disk(1, -3.0, 2.0, 1.0)),
        (disk(0, 1.0e11, -2.0e11, 7.0e9), disk(1, 1.0e11, -1.9e11, 1.0e9)),
    ];

    for (a, b) in &cases {
        assert_eq!(colliding(a, b), colliding(b, a));
    }
}

#[test]
fn test_overlapping_pairs_skips_deleted() {
    let a = disk(0, 0.0, 0.0, 2.0);
    let b = disk(1, 3.0, 0.0, 2.0);
    let mut c = disk(2, 1.0, 0.0, 2.0);
    let d = disk(3, 100.0, 0.0, 2.0);

    let pairs = overlapping_pairs(&[a, b, c, d]);
    assert_eq!(
        pairs,
        vec![
            (BodyId(0), BodyId(1)),
            (BodyId(0), BodyId(2)),
            (BodyId(1), BodyId(2))
        ]
    );

    c.mark_deleted();
    let pairs = overlapping_pairs(&[a, b, c, d]);
    assert_eq!(pairs, vec![(BodyId(0), BodyId(1))]);
}
