use donut_api::{ApiConfig, DonutClient};
use donut_core::models::SortMode;
use std::fmt;

use crate::command::{Command, HELP};
use crate::embed::Embed;
use crate::render::{self, SortMenu};

/// A message sent back for one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub embed: Embed,
    pub menu: Option<SortMenu>,
}

impl From<Embed> for Reply {
    fn from(embed: Embed) -> Self {
        Self { embed, menu: None }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.embed)?;
        if let Some(menu) = &self.menu {
            writeln!(f)?;
            writeln!(f, "{}", menu)?;
        }
        Ok(())
    }
}

/// Dispatches commands for one user; remembers the last search so it can be re-sorted
pub struct Session {
    config: ApiConfig,
    max_results: usize,
    last_menu: Option<SortMenu>,
}

impl Session {
    pub fn new(config: ApiConfig, max_results: usize) -> Self {
        Self {
            config,
            max_results,
            last_menu: None,
        }
    }

    pub async fn handle(&mut self, command: Command) -> Reply {
        tracing::info!(?command, "Handling command");

        match command {
            Command::Auction { item, sort } => self.auction(item, sort).await,
            Command::Stats { player } => self.stats(&player).await,
            Command::Sort(sort) => match self.last_menu.take() {
                Some(menu) => self.auction(menu.item, sort).await,
                None => render::error_embed("Nothing to sort yet, search with /ah first").into(),
            },
            Command::Help => Embed::new("Commands").description(HELP).into(),
            Command::Quit => Embed::new("Bye!").into(),
        }
    }

    async fn auction(&mut self, item: String, sort: SortMode) -> Reply {
        let mut client = DonutClient::new(self.config.clone());
        let results = client.fetch_auction_listings(&item, &sort).await.auction();

        let embed = render::auction_embed(results, &item, &sort, self.max_results);
        let menu = SortMenu::new(item);
        self.last_menu = Some(menu.clone());

        Reply {
            embed,
            menu: Some(menu),
        }
    }

    async fn stats(&self, player: &str) -> Reply {
        let mut client = DonutClient::new(self.config.clone());
        let stats = client.fetch_player_stats(player).await.stats();

        render::stats_embed(stats, player).into()
    }
}
