use geo::{BoundingRect, Point, Polygon};
use rand::Rng;

use crate::geometry::point_in_polygon;
use crate::land_mask::LandMask;

/// Bounds the rejection loop; the sampler's only termination guarantee.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleResult {
    Accepted(Point<f64>),
    /// No candidate passed both membership tests within the attempt budget.
    /// Expected outcome for shapes over open ocean, not an error.
    Exhausted,
}

/// Draws uniform candidates from the shape's bounding box until one lies
/// both inside the shape and on land, or the budget runs out.
///
/// The distribution is uniform over the bounding box, not over the valid
/// area; acceptance degrades as the shape's land fraction of its box shrinks.
pub fn sample_in_region<R: Rng>(
    rng: &mut R,
    shape: &Polygon<f64>,
    land: &LandMask,
    max_attempts: usize,
) -> SampleResult {
    let Some(bounds) = shape.bounding_rect() else {
        return SampleResult::Exhausted;
    };

    for _ in 0..max_attempts {
        let lng = rng.random_range(bounds.min().x..=bounds.max().x);
        let lat = rng.random_range(bounds.min().y..=bounds.max().y);
        let candidate = Point::new(lng, lat);

        if point_in_polygon(&candidate, shape) && land.is_on_land(&candidate) {
            return SampleResult::Accepted(candidate);
        }
    }

    SampleResult::Exhausted
}
