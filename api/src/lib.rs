pub mod client;
pub mod endpoints;
pub mod results;
pub mod types;

pub use client::{ApiConfig, DonutClient, DEFAULT_BASE_URL};
pub use results::{AuctionEntry, AuctionResults, EntryLookup, PlayerStats};
