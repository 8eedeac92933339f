use geo::{Contains, MultiPolygon, Point, Polygon};

/// Pure containment test against a single ring set. Self-intersecting or
/// degenerate rings give undefined results; input is not validated.
pub fn point_in_polygon(point: &Point<f64>, polygon: &Polygon<f64>) -> bool {
    polygon.contains(point)
}

/// A point is in a multi-polygon if at least one member contains it.
pub fn point_in_multi_polygon(point: &Point<f64>, multi: &MultiPolygon<f64>) -> bool {
    multi.0.iter().any(|polygon| polygon.contains(point))
}
