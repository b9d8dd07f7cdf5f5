use anyhow::{anyhow, bail, Result};
use donut_core::models::SortMode;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Search the auction house
    Auction { item: String, sort: SortMode },
    /// Look up a player's stats
    Stats { player: String },
    /// Re-sort the last auction search
    Sort(SortMode),
    Help,
    Quit,
}

pub const HELP: &str = "\
/ah <item> [sort]   Shows auction house listings
/stats <player>     Shows a player's stats
/sort <sort>        Re-sorts the last auction search (name or 1-4)
/help               Shows this message
/quit               Exits

Sorts: lowest_price, highest_price, recently_listed, last_listed";

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match name {
            "/ah" => parse_auction(rest),
            "/stats" => {
                if rest.is_empty() {
                    bail!("usage: /stats <player>");
                }
                Ok(Command::Stats {
                    player: rest.to_string(),
                })
            }
            "/sort" => parse_sort_choice(rest).map(Command::Sort),
            "/help" => Ok(Command::Help),
            "/quit" | "/exit" => Ok(Command::Quit),
            other => Err(anyhow!("unknown command '{}', try /help", other)),
        }
    }
}

/// The last word is taken as the sort when it names a known sort.
fn parse_auction(rest: &str) -> Result<Command> {
    if rest.is_empty() {
        bail!("usage: /ah <item> [sort]");
    }

    if let Some((item, last)) = rest.rsplit_once(char::is_whitespace) {
        let sort: SortMode = last.parse()?;
        if sort.is_known() {
            return Ok(Command::Auction {
                item: item.trim().to_string(),
                sort,
            });
        }
    }

    Ok(Command::Auction {
        item: rest.to_string(),
        sort: SortMode::default(),
    })
}

/// Accepts a sort name or its 1-based position in the sort menu.
pub fn parse_sort_choice(choice: &str) -> Result<SortMode> {
    if choice.is_empty() {
        bail!("usage: /sort <sort>");
    }

    if let Ok(position) = choice.parse::<usize>() {
        return position
            .checked_sub(1)
            .and_then(|i| SortMode::ALL.get(i))
            .cloned()
            .ok_or_else(|| anyhow!("pick a sort between 1 and {}", SortMode::ALL.len()));
    }

    Ok(choice.parse()?)
}
