use geo::Point;
use serde::Deserialize;
use std::error::Error;
use std::fs;

use crate::nearest_city::EmptyCityList;

/// One record of the GeoNames-derived city dataset. Loaded once at startup,
/// read-only afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct City {
    pub name: String,
    pub country: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub population: u64,
}

impl City {
    pub fn location(&self) -> Point<f64> {
        Point::new(self.lng, self.lat)
    }
}

/// An empty dataset is a data error and fails startup validation here
/// rather than surfacing on the first query.
pub fn load_cities(path: &str) -> Result<Vec<City>, Box<dyn Error>> {
    let raw = fs::read_to_string(path)?;
    let cities: Vec<City> = serde_json::from_str(&raw)?;
    if cities.is_empty() {
        return Err(Box::new(EmptyCityList));
    }
    Ok(cities)
}
