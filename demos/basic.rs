//! Basic example demonstrating the EMT Madrid client.
//!
//! Run with:
//! ```
//! EMT_CLIENT_ID=your-id EMT_PASS_KEY=your-key cargo run --example basic
//! ```

use emtmadrid::{EmtClient, RequestParams};

#[tokio::main]
async fn main() -> emtmadrid::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating EMT Madrid client...");
    let client = EmtClient::from_env()?;

    // Next bus arrivals for a stop near Puerta del Sol
    println!("\n--- Arrivals at stop 2443 ---");
    let arrivals = client
        .geo()
        .get_arrive_stop(
            RequestParams::new()
                .with("idStop", 2443)
                .with("cultureInfo", "ES"),
        )
        .await?;

    if let Some(arrives) = arrivals["arrives"].as_array() {
        for arrive in arrives.iter().take(5) {
            println!(
                "  line {} -> {} in {}s",
                arrive["lineId"], arrive["destination"], arrive["busTimeLeft"]
            );
        }
    }

    // BiciMAD stations, counting free bases
    println!("\n--- BiciMAD stations ---");
    let stations = client.bike().get_stations().await?;
    if let Some(data) = stations["data"].as_array() {
        println!("Found {} stations", data.len());
        for station in data.iter().take(5) {
            println!(
                "  {} free bases at {}",
                station["free_bases"], station["name"]
            );
        }
    }

    // Parking garages, in English
    println!("\n--- Parkings ---");
    let parkings = client.parking().list_parking("EN").await?;
    if let Some(data) = parkings["data"].as_array() {
        println!("Found {} parkings", data.len());
    }

    // The factory route: pick a service by name, dispatch by endpoint id
    println!("\n--- Factory dispatch ---");
    if let Some(bus) = client.service("bus") {
        let groups = bus.call("GET_GROUPS", RequestParams::new()).await?;
        println!("Line groups: {}", groups);
    }

    Ok(())
}
