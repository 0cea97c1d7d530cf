//! Circle overlap tests
//!
//! Used at placement time (obstacle vs obstacle, with extra clearance) and
//! every frame (player vs obstacles).

use super::entity::Collidable;
use crate::distance;

/// Whether two entities overlap
///
/// Strict: circles that exactly touch do not collide.
#[inline]
pub fn collides<A, B>(a: &A, b: &B) -> bool
where
    A: Collidable + ?Sized,
    B: Collidable + ?Sized,
{
    let (a, b) = (a.circle(), b.circle());
    distance(a.center, b.center) < a.radius + b.radius
}

/// Whether two entities are separated by at least `buffer` beyond their radii
#[inline]
pub fn is_clear_of<A, B>(a: &A, b: &B, buffer: f32) -> bool
where
    A: Collidable + ?Sized,
    B: Collidable + ?Sized,
{
    let (a, b) = (a.circle(), b.circle());
    distance(a.center, b.center) >= a.radius + b.radius + buffer
}

/// Indices of all `others` overlapping `entity`, in collection order
pub fn contacts<E, O>(entity: &E, others: &[O]) -> Vec<usize>
where
    E: Collidable + ?Sized,
    O: Collidable,
{
    others
        .iter()
        .enumerate()
        .filter(|(_, other)| collides(entity, *other))
        .map(|(i, _)| i)
        .collect()
}
