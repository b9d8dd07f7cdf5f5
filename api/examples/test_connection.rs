use donut_api::{ApiConfig, DonutClient, EntryLookup};
use donut_core::models::SortMode;
use std::env;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let Some(api_key) = env::var("DONUTSMP_API").ok().filter(|k| !k.is_empty()) else {
        eprintln!("Error: DONUTSMP_API not set.");
        eprintln!("Create a .env file with:");
        eprintln!("DONUTSMP_API=your_key_here\n");
        return;
    };

    let search = env::args().nth(1).unwrap_or_else(|| "diamond".to_string());

    let mut client = DonutClient::new(ApiConfig::new(api_key));

    println!("Searching the auction house for '{}'...\n", search);

    let auction = client
        .fetch_auction_listings(&search, &SortMode::LowestPrice)
        .await
        .auction();

    if let Some(e) = auction.last_error() {
        eprintln!("Error fetching listings: {}", e);
        return;
    }

    println!("Found {} listings:", auction.len());
    for i in 0.. {
        match auction.entry_at(i) {
            EntryLookup::Entry(entry) => println!(
                "{}. {} x{} by {} - ${} ({} left)",
                i + 1,
                entry.item_name(),
                entry.count(),
                entry.seller(),
                entry.price(),
                entry.time_left()
            ),
            EntryLookup::End => break,
            EntryLookup::Failed(reason) => {
                eprintln!("Error reading listings: {}", reason);
                break;
            }
        }
    }
}
