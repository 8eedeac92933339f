use geo::{Distance, Haversine, Point};
use std::error::Error;
use std::fmt;

use crate::load_cities::City;

const METERS_PER_KM: f64 = 1000.0;

/// The city dataset must be non-empty; this is a configuration error, not a
/// per-query condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCityList;

impl fmt::Display for EmptyCityList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "city dataset is empty")
    }
}

impl Error for EmptyCityList {}

#[derive(Debug, Clone, Copy)]
pub struct LocateResult<'a> {
    pub city: &'a City,
    pub distance_km: f64,
}

/// Linear scan for the city with minimum great-circle distance to `point`.
/// Strict comparison keeps the first-encountered city on ties, so results
/// are stable across calls. Distances are unrounded kilometers.
pub fn nearest<'a>(point: &Point<f64>, cities: &'a [City]) -> Result<LocateResult<'a>, EmptyCityList> {
    let mut best: Option<LocateResult<'a>> = None;

    for city in cities {
        let distance_km = Haversine.distance(*point, city.location()) / METERS_PER_KM;
        let closer = match &best {
            Some(found) => distance_km < found.distance_km,
            None => true,
        };
        if closer {
            best = Some(LocateResult { city, distance_km });
        }
    }

    best.ok_or(EmptyCityList)
}
