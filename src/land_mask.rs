use geo::{LineString, MultiPolygon, Point, Polygon};
use shapefile::{PolygonRing, Reader, Shape};
use std::error::Error;

use crate::geometry::point_in_multi_polygon;

/// All land masses as one multi-polygon, built once at startup and read-only
/// afterwards.
pub struct LandMask {
    land: MultiPolygon<f64>,
}

impl LandMask {
    pub fn new(land: MultiPolygon<f64>) -> Self {
        Self { land }
    }

    /// Loads the mask from a polygon shapefile (e.g. Natural Earth land).
    /// Non-polygon shapes in the file are skipped by policy, not rejected.
    pub fn from_shapefile(shapefile_path: &str) -> Result<Self, Box<dyn Error>> {
        let mut reader = Reader::from_path(shapefile_path)?;
        let mut polygons: Vec<Polygon<f64>> = Vec::new();

        for record in reader.iter_shapes_and_records() {
            let (shape, _) = record?;

            match shape {
                Shape::Polygon(p) => {
                    for ring in p.rings() {
                        let line = LineString::from(
                            ring.points()
                                .iter()
                                .map(|pt| (pt.x, pt.y))
                                .collect::<Vec<_>>(),
                        );
                        match ring {
                            PolygonRing::Outer(_) => {
                                polygons.push(Polygon::new(line, vec![]));
                            }
                            // holes follow the outer ring they belong to
                            PolygonRing::Inner(_) => {
                                if let Some(polygon) = polygons.last_mut() {
                                    polygon.interiors_push(line);
                                }
                            }
                        }
                    }
                }
                _ => {
                    // skip non-polygons
                }
            }
        }

        Ok(Self::new(MultiPolygon(polygons)))
    }

    pub fn is_on_land(&self, point: &Point<f64>) -> bool {
        point_in_multi_polygon(point, &self.land)
    }
}
