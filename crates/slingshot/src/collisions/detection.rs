//! Disk overlap test between two bodies

use crate::body::{Body, BodyId};

/// Whether the disks of `a` and `b` touch or overlap
///
/// True iff the center distance lies in `[|ra - rb|, ra + rb]`, both bounds
/// inclusive. Compared on squared distances so no square root is taken.
/// A small disk sitting strictly inside a larger one does not count; two
/// equal disks on the same center do.
///
/// # Examples
///
/// ```
/// use slingshot::body::{spawn, IdAllocator, SpawnParams};
/// use slingshot::collisions::colliding;
/// use nalgebra::{Point2, Vector2};
///
/// let mut ids = IdAllocator::new();
/// let a = spawn(&mut ids, SpawnParams::new(Point2::new(0.0, 0.0), Vector2::zeros(), 1.0).with_radius(2.0)).unwrap();
/// let b = spawn(&mut ids, SpawnParams::new(Point2::new(5.0, 0.0), Vector2::zeros(), 1.0).with_radius(3.0)).unwrap();
///
/// // Exactly touching counts
/// assert!(colliding(&a, &b));
/// assert!(colliding(&b, &a));
/// ```
pub fn colliding(a: &Body, b: &Body) -> bool {
    let d2 = a.distance_squared_to(b);
    let inner = a.radius - b.radius;
    let outer = a.radius + b.radius;

    inner * inner <= d2 && d2 <= outer * outer
}

/// Every unordered pair of live bodies whose disks currently overlap
///
/// Deleted bodies are ignored. Pairs come out in list order, lower index
/// first.
pub fn overlapping_pairs(bodies: &[Body]) -> Vec<(BodyId, BodyId)> {
    let n = bodies.len();

    (0..n)
        .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
        .filter(|&(i, j)| {
            let (a, b) = (&bodies[i], &bodies[j]);
            !a.is_deleted() && !b.is_deleted() && colliding(a, b)
        })
        .map(|(i, j)| (bodies[i].id, bodies[j].id))
        .collect()
}
