//! Turns stored API results into chat messages.

use donut_api::{AuctionResults, EntryLookup, PlayerStats};
use donut_core::{format::title_case, models::SortMode};
use std::fmt;

use crate::embed::{Color, Embed};

pub const AUCTION_FOOTER: &str =
    "WARNING: Amethyst Items don't work and could lead to wrong results!!";

/// (label, stat key, shown as currency)
pub const STAT_LABELS: [(&str, &str, bool); 10] = [
    ("Money", "money", true),
    ("Shards", "shards", false),
    ("Kills", "kills", false),
    ("Deaths", "deaths", false),
    ("Playtime", "playtime", false),
    ("Placed Blocks", "placed_blocks", false),
    ("Broken Blocks", "broken_blocks", false),
    ("Mobs Killed", "mobs_killed", false),
    ("Money Spent on Shop", "money_spent_on_shop", true),
    ("Money Made From Sell", "money_made_from_sell", true),
];

pub fn auction_embed(
    results: &AuctionResults,
    item: &str,
    sort: &SortMode,
    max_results: usize,
) -> Embed {
    let mut embed = Embed::new(format!("Auction Results For `{}`", item))
        .description(format!("**{}**", sort.label()))
        .color(Color::Purple)
        .footer(AUCTION_FOOTER);

    for index in 0..max_results {
        match results.entry_at(index) {
            EntryLookup::Entry(entry) => {
                embed.add_field(
                    format!(
                        "{}. **{}** ({}) by `{}`",
                        index + 1,
                        title_case(&entry.item_name()),
                        entry.count(),
                        entry.seller()
                    ),
                    format!("💵 **${}** | ⌛ **{}**", entry.price(), entry.time_left()),
                    false,
                );
            }
            lookup => {
                if let EntryLookup::Failed(reason) = lookup {
                    tracing::warn!(item, "No usable auction results: {}", reason);
                }
                embed.color = Color::Red;
                embed.add_field(format!("No results for **{}**", item), "", false);
                break;
            }
        }
    }

    embed
}

pub fn stats_embed(stats: &PlayerStats, player: &str) -> Embed {
    if let Some(e) = stats.last_error() {
        tracing::warn!(player, "Rendering stats after failed lookup: {}", e);
    }

    let mut text = String::new();
    for (label, key, is_currency) in STAT_LABELS {
        let value = stats.stat(key);
        let value = if is_currency {
            format!("${}", value)
        } else {
            value
        };
        text.push_str(&format!("**{}:** `{}`\n", label, value));
    }

    let mut embed = Embed::new(format!("Stats for {}", player)).color(Color::Purple);
    embed.add_field("", text, false);
    embed
}

pub fn error_embed(message: impl Into<String>) -> Embed {
    Embed::new("Error").description(message).color(Color::Red)
}

/// Sort dropdown attached to auction results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortMenu {
    pub item: String,
    pub placeholder: &'static str,
    pub options: &'static [SortMode],
}

impl SortMenu {
    pub fn new(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            placeholder: "Sort by...",
            options: SortMode::ALL,
        }
    }
}

impl fmt::Display for SortMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.placeholder)?;
        for (i, option) in self.options.iter().enumerate() {
            write!(f, "  {}) {}", i + 1, option.name())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use donut_core::DonutError;
    use serde_json::json;

    fn listing(seller: &str, id: &str, count: u32) -> serde_json::Value {
        json!({
            "seller": { "name": seller },
            "price": 250000,
            "time_left": 7_322_000,
            "item": { "id": id, "count": count }
        })
    }

    #[test]
    fn auction_embed_lists_entries_then_reports_end() {
        let results = AuctionResults::from_json(json!({
            "result": [
                listing("Steve", "minecraft:diamond_sword", 1),
                listing("Alex", "minecraft:oak_log", 64),
            ]
        }));

        let embed = auction_embed(&results, "sword", &SortMode::HighestPrice, 10);

        assert_eq!(embed.title, "Auction Results For `sword`");
        assert_eq!(embed.description.as_deref(), Some("**Highest Price Sort**"));
        assert_eq!(embed.footer.as_deref(), Some(AUCTION_FOOTER));
        assert_eq!(embed.fields.len(), 3);
        assert_eq!(embed.fields[0].name, "1. **Diamond Sword** (1) by `Steve`");
        assert_eq!(embed.fields[0].value, "💵 **$250K** | ⌛ **2hr 2min 2sec**");
        assert_eq!(embed.fields[1].name, "2. **Oak Log** (64) by `Alex`");
        assert_eq!(embed.fields[2].name, "No results for **sword**");
        assert_eq!(embed.fields[2].value, "");
        assert_eq!(embed.color, Color::Red);
    }

    #[test]
    fn full_page_stays_purple() {
        let list: Vec<_> = (0..12)
            .map(|i| listing(&format!("seller{i}"), "minecraft:dirt", 1))
            .collect();
        let results = AuctionResults::from_json(json!({ "result": list }));

        let embed = auction_embed(&results, "dirt", &SortMode::LowestPrice, 10);

        assert_eq!(embed.fields.len(), 10);
        assert_eq!(embed.color, Color::Purple);
        assert_eq!(embed.fields[9].name, "10. **Dirt** (1) by `seller9`");
    }

    #[test]
    fn failed_search_renders_no_results() {
        let results = AuctionResults::from_error(DonutError::Network("refused".to_string()));

        let embed = auction_embed(&results, "dirt", &SortMode::Other("odd_sort".to_string()), 10);

        assert_eq!(embed.description.as_deref(), Some("**Unknown Sort**"));
        assert_eq!(embed.fields.len(), 1);
        assert_eq!(embed.fields[0].name, "No results for **dirt**");
        assert_eq!(embed.color, Color::Red);
    }

    #[test]
    fn stats_embed_lists_every_label() {
        let stats = PlayerStats::from_json(json!({
            "result": {
                "money": 1500000,
                "shards": 320,
                "kills": 5,
                "playtime": "90000000",
                "money_made_from_sell": "2500"
            }
        }));

        let embed = stats_embed(&stats, "Steve");

        assert_eq!(embed.title, "Stats for Steve");
        assert_eq!(embed.fields.len(), 1);
        let lines: Vec<_> = embed.fields[0].value.lines().collect();
        assert_eq!(lines.len(), STAT_LABELS.len());
        assert_eq!(lines[0], "**Money:** `$1.5M`");
        assert_eq!(lines[1], "**Shards:** `320`");
        assert_eq!(lines[3], "**Deaths:** `0`");
        assert_eq!(lines[4], "**Playtime:** `1d 1h 0m`");
        assert_eq!(lines[8], "**Money Spent on Shop:** `$0`");
        assert_eq!(lines[9], "**Money Made From Sell:** `$2.5K`");
    }

    #[test]
    fn sort_menu_lists_options_in_order() {
        let menu = SortMenu::new("dirt");
        assert_eq!(
            menu.to_string(),
            "Sort by...  1) Lowest Price  2) Highest Price  3) Recently Listed  4) Last Listed"
        );
    }
}
