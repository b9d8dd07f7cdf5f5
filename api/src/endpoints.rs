use donut_core::{models::SortMode, DonutError, Result};
use reqwest::RequestBuilder;
use serde_json::Value;

use crate::{
    client::DonutClient,
    results::{AuctionResults, PlayerStats},
    types::AuctionQuery,
};

const AUCTION_PAGE: &str = "1";

impl DonutClient {
    /// Search the auction house and store the outcome.
    ///
    /// Failures are stored too, so this always returns the client for
    /// chaining; check [`AuctionResults::last_error`] to tell them apart.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_auction_listings(&mut self, search: &str, sort: &SortMode) -> &mut Self {
        self.auction = match self.request_auction_listings(search, sort).await {
            Ok(body) => {
                tracing::debug!("Auction search succeeded");
                AuctionResults::from_json(body)
            }
            Err(e) => {
                tracing::warn!("Auction search failed: {}", e);
                AuctionResults::from_error(e)
            }
        };
        self
    }

    /// Look up a player's statistics and store the outcome.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_player_stats(&mut self, player_name: &str) -> &mut Self {
        self.stats = match self.request_player_stats(player_name).await {
            Ok(body) => {
                tracing::debug!("Stats lookup succeeded");
                PlayerStats::from_json(body)
            }
            Err(e) => {
                tracing::warn!("Stats lookup failed: {}", e);
                PlayerStats::from_error(e)
            }
        };
        self
    }

    async fn request_auction_listings(&self, search: &str, sort: &SortMode) -> Result<Value> {
        let url = self.endpoint(&["auction", "list", AUCTION_PAGE])?;

        let request = self
            .client()
            .get(url)
            .headers(self.headers()?)
            .json(&AuctionQuery {
                search,
                sort: sort.api_param(),
            });

        send_json(request).await
    }

    async fn request_player_stats(&self, player_name: &str) -> Result<Value> {
        let url = self.endpoint(&["stats", player_name])?;

        let request = self.client().get(url).headers(self.headers()?);

        send_json(request).await
    }
}

async fn send_json(request: RequestBuilder) -> Result<Value> {
    let response = request
        .send()
        .await
        .map_err(|e| DonutError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(DonutError::Api {
            status: status.as_u16(),
            body,
        });
    }

    response
        .json()
        .await
        .map_err(|e| DonutError::Parse(e.to_string()))
}
