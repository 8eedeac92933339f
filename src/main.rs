mod geometry;
pub use geometry::point_in_multi_polygon;
pub use geometry::point_in_polygon;

mod land_mask;
pub use land_mask::LandMask;

mod sample_point;
pub use sample_point::DEFAULT_MAX_ATTEMPTS;
pub use sample_point::SampleResult;
pub use sample_point::sample_in_region;

mod load_cities;
pub use load_cities::City;
pub use load_cities::load_cities;

mod nearest_city;
pub use nearest_city::EmptyCityList;
pub use nearest_city::LocateResult;
pub use nearest_city::nearest;

mod outcome;
pub use outcome::Outcome;
pub use outcome::assemble;

use std::net::SocketAddr;
use std::sync::Arc;

use futures_util::SinkExt;
use futures_util::StreamExt;
use geo::LineString;
use geo::Polygon;
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;
use tokio::net::TcpStream;
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::tungstenite::Result;

pub const SHAPEFILE_PATH: &'static str = "land/ne_110m_land.shp";
pub const CITIES_PATH: &'static str = "data/cities.json";

/// One drawn region from the map UI: a closed ring of [lng, lat] pairs.
#[derive(Debug, Deserialize)]
struct Request {
    ring: Vec<[f64; 2]>,
    max_attempts: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let land = Arc::new(LandMask::from_shapefile(SHAPEFILE_PATH).expect("failed to load land shapefile"));
    let cities = Arc::new(load_cities(CITIES_PATH).expect("failed to load city dataset"));

    println!("loaded {} cities, land mask ready", cities.len());
    let server = TcpListener::bind("0.0.0.0:25555")
        .await
        .expect("Failed to bind to address");

    loop {
        let (stream, addr) = server.accept().await?;
        tokio::spawn(handle_connection(stream, addr, land.clone(), cities.clone()));
    }
}

async fn handle_connection(
    stream: TcpStream,
    addr: SocketAddr,
    land: Arc<LandMask>,
    cities: Arc<Vec<City>>,
) -> Result<()> {
    let ws_stream = accept_async(stream).await?;
    println!("New WebSocket connection: {}", addr);

    let (mut write, mut read) = ws_stream.split();

    while let Some(message) = read.next().await {
        let Message::Text(text) = message? else {
            continue;
        };

        let reply = match serde_json::from_str::<Request>(text.as_str()) {
            Ok(request) => match pick_birthplace(&request, &land, &cities) {
                Ok(outcome) => serde_json::to_string(&outcome).unwrap(),
                Err(err) => error_reply(&err.to_string()),
            },
            Err(err) => error_reply(&err.to_string()),
        };

        write.send(Message::Text(reply.into())).await?;
    }

    Ok(())
}

fn pick_birthplace(
    request: &Request,
    land: &LandMask,
    cities: &[City],
) -> std::result::Result<Outcome, EmptyCityList> {
    let shape = ring_to_polygon(&request.ring);
    let max_attempts = request.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS);

    let mut rng = rand::rng();
    let sample = sample_in_region(&mut rng, &shape, land, max_attempts);
    assemble(sample, cities)
}

fn ring_to_polygon(ring: &[[f64; 2]]) -> Polygon<f64> {
    let exterior = LineString::from(
        ring.iter()
            .map(|[lng, lat]| (*lng, *lat))
            .collect::<Vec<_>>(),
    );
    Polygon::new(exterior, vec![])
}

fn error_reply(message: &str) -> String {
    json!({ "status": "error", "message": message }).to_string()
}
