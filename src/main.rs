use q3m_rs::{Cell, Q3mError, decode, encode, grid_info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Q3mError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let lat = 48.8584;
    let lon = 2.2945;

    let addr = encode(lat, lon)?;
    println!("Address: {}", addr);

    let coord = decode(&addr.to_string())?;
    println!("Decoded: ({:.6}, {:.6})", coord.lat, coord.lon);

    let cell = Cell::from_address(&addr.to_string())?;
    println!("Cell {} centre: ({}, {})", cell.index, cell.easting(), cell.northing());
    println!("Footprint: {:?}", cell.to_wgs84_polygon());

    let info = serde_json::to_string_pretty(&grid_info())
        .map_err(|e| Q3mError::IoError(e.to_string()))?;
    println!("{}", info);

    Ok(())
}
