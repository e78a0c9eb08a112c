//! Region algebra: composable predicates over 2D points.
//!
//! A [`Region`] is a first-class predicate value: a pure function from a
//! point to a boolean. It has no internal state; its identity is its
//! behaviour. Factories produce primitive regions and combinators build new
//! regions out of existing ones, so a compound membership test like
//! [`in_range`] reads as set algebra instead of coordinate arithmetic.
//!
//! Every function here is total: negative radii and non-finite coordinates
//! produce well-defined (if degenerate) boolean answers, never failures.

use std::rc::Rc;

use crate::types::Point;

/// A region of the 2D plane, represented by its membership predicate.
///
/// Regions are cheap to clone and share. Evaluation has no side effects and
/// combinators never mutate what they capture, so the same point always
/// gets the same answer.
#[derive(Clone)]
pub struct Region {
    test: Rc<dyn Fn(Point) -> bool>,
}

impl Region {
    /// Lift an arbitrary predicate into a region.
    pub fn new(test: impl Fn(Point) -> bool + 'static) -> Self {
        Self {
            test: Rc::new(test),
        }
    }

    /// Test whether `point` lies inside the region.
    pub fn contains(&self, point: Point) -> bool {
        (self.test)(point)
    }
}

/// A disk of the given radius centred on the origin.
///
/// The boundary is inclusive. A negative radius yields the empty region,
/// since no distance is ≤ a negative number.
pub fn circle(radius: f64) -> Region {
    Region::new(move |point| point.distance(Point::ORIGIN) <= radius)
}

/// Relocate a region so its local origin sits at `offset`.
///
/// The incoming point is translated into the region's frame before testing,
/// so any origin-centred region can be placed anywhere in the plane.
pub fn shift(offset: Point, region: Region) -> Region {
    Region::new(move |point| region.contains(point - offset))
}

/// The complement of a region: true wherever `region` is false.
pub fn invert(region: Region) -> Region {
    Region::new(move |point| !region.contains(point))
}

/// Points inside both regions.
pub fn intersection(a: Region, b: Region) -> Region {
    Region::new(move |point| a.contains(point) && b.contains(point))
}

/// Points inside either region.
pub fn union(a: Region, b: Region) -> Region {
    Region::new(move |point| a.contains(point) || b.contains(point))
}

/// Points inside `region` but outside `minus`.
pub fn difference(region: Region, minus: Region) -> Region {
    intersection(region, invert(minus))
}

/// Range check: is `target` within `range` of `own_position`, strictly
/// farther than `minimum_distance` from `own_position`, and strictly
/// farther than `minimum_distance` from `friendly`?
///
/// The reachable area is an annulus around `own_position` (range boundary
/// inclusive, minimum boundary exclusive) minus a safety disk around
/// `friendly`.
pub fn in_range(
    own_position: Point,
    target: Point,
    friendly: Point,
    range: f64,
    minimum_distance: f64,
) -> bool {
    let ring = difference(circle(range), circle(minimum_distance));
    let reachable = shift(own_position, ring);
    let friendly_zone = shift(friendly, circle(minimum_distance));
    difference(reachable, friendly_zone).contains(target)
}
