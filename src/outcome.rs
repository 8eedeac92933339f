use geo::Point;
use serde::Serialize;

use crate::load_cities::City;
use crate::nearest_city::{EmptyCityList, nearest};
use crate::sample_point::SampleResult;

/// Presentation-ready record for the caller. `NoValidPoint` is rendered by
/// the UI as "no land found, please adjust your shape".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Success {
        point: Point<f64>,
        city: String,
        country: String,
        distance_km: f64,
    },
    NoValidPoint,
}

/// Glues sampler and locator output together; no new computation.
pub fn assemble(sample: SampleResult, cities: &[City]) -> Result<Outcome, EmptyCityList> {
    match sample {
        SampleResult::Accepted(point) => {
            let located = nearest(&point, cities)?;
            Ok(Outcome::Success {
                point,
                city: located.city.name.clone(),
                country: located.city.country.clone(),
                distance_km: located.distance_km,
            })
        }
        SampleResult::Exhausted => Ok(Outcome::NoValidPoint),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::land_mask::LandMask;
    use crate::sample_point::{DEFAULT_MAX_ATTEMPTS, sample_in_region};
    use geo::{LineString, MultiPolygon, Polygon};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn city(name: &str, lat: f64, lng: f64) -> City {
        City {
            name: name.to_string(),
            country: "X".to_string(),
            lat,
            lng,
            population: 0,
        }
    }

    fn unit_square() -> Polygon<f64> {
        Polygon::new(
            LineString::from(vec![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)]),
            vec![],
        )
    }

    #[test]
    fn exhausted_maps_to_no_valid_point() {
        let outcome = assemble(SampleResult::Exhausted, &[]).unwrap();
        assert_eq!(outcome, Outcome::NoValidPoint);
    }

    #[test]
    fn accepted_with_empty_cities_is_an_error() {
        let sample = SampleResult::Accepted(Point::new(0.5, 0.5));
        assert!(assemble(sample, &[]).is_err());
    }

    #[test]
    fn end_to_end_unit_square() {
        let shape = unit_square();
        let mask = LandMask::new(MultiPolygon(vec![unit_square()]));
        let cities = vec![city("near", 0.0, 0.0), city("far", 40.0, 40.0)];
        let mut rng = StdRng::seed_from_u64(99);

        let sample = sample_in_region(&mut rng, &shape, &mask, DEFAULT_MAX_ATTEMPTS);
        match assemble(sample, &cities).unwrap() {
            Outcome::Success { point, city, distance_km, .. } => {
                assert!((0.0..=1.0).contains(&point.x()));
                assert!((0.0..=1.0).contains(&point.y()));
                assert_eq!(city, "near");
                assert!(distance_km >= 0.0);
            }
            Outcome::NoValidPoint => panic!("full-overlap shape must produce a point"),
        }
    }

    #[test]
    fn no_valid_point_serializes_with_status_tag() {
        let json = serde_json::to_string(&Outcome::NoValidPoint).unwrap();
        assert_eq!(json, r#"{"status":"no_valid_point"}"#);
    }

    #[test]
    fn success_serializes_city_fields() {
        let outcome = Outcome::Success {
            point: Point::new(1.0, 2.0),
            city: "A".to_string(),
            country: "X".to_string(),
            distance_km: 3.5,
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains(r#""status":"success""#));
        assert!(json.contains(r#""city":"A""#));
        assert!(json.contains(r#""distance_km":3.5"#));
    }
}
