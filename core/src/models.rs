use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sort order accepted by the auction search endpoint.
///
/// Values the bot does not know about are kept as [`SortMode::Other`] and
/// forwarded to the server untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortMode {
    #[default]
    LowestPrice,
    HighestPrice,
    RecentlyListed,
    LastListed,
    Other(String),
}

impl SortMode {
    pub const ALL: &'static [SortMode] = &[
        SortMode::LowestPrice,
        SortMode::HighestPrice,
        SortMode::RecentlyListed,
        SortMode::LastListed,
    ];

    /// Value sent as the `sort` field of the search payload
    pub fn api_param(&self) -> &str {
        match self {
            SortMode::LowestPrice => "lowest_price",
            SortMode::HighestPrice => "highest_price",
            SortMode::RecentlyListed => "recently_listed",
            SortMode::LastListed => "last_listed",
            SortMode::Other(raw) => raw,
        }
    }

    /// Short name shown in the sort menu
    pub fn name(&self) -> &str {
        match self {
            SortMode::LowestPrice => "Lowest Price",
            SortMode::HighestPrice => "Highest Price",
            SortMode::RecentlyListed => "Recently Listed",
            SortMode::LastListed => "Last Listed",
            SortMode::Other(_) => "Unknown",
        }
    }

    /// Heading used in rendered auction results
    pub fn label(&self) -> &str {
        match self {
            SortMode::LowestPrice => "Lowest Price Sort",
            SortMode::HighestPrice => "Highest Price Sort",
            SortMode::RecentlyListed => "Recently Listed Sort",
            SortMode::LastListed => "Last Listed Sort",
            SortMode::Other(_) => "Unknown Sort",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, SortMode::Other(_))
    }
}

impl FromStr for SortMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl From<String> for SortMode {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "lowest_price" => SortMode::LowestPrice,
            "highest_price" => SortMode::HighestPrice,
            "recently_listed" => SortMode::RecentlyListed,
            "last_listed" => SortMode::LastListed,
            _ => SortMode::Other(raw),
        }
    }
}

impl From<SortMode> for String {
    fn from(mode: SortMode) -> Self {
        mode.api_param().to_string()
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_param())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_modes_round_trip_through_api_param() {
        for mode in SortMode::ALL {
            let parsed: SortMode = mode.api_param().parse().unwrap();
            assert_eq!(&parsed, mode);
            assert!(parsed.is_known());
        }
    }

    #[test]
    fn unknown_mode_is_passed_through() {
        let mode: SortMode = "cheapest_first".parse().unwrap();
        assert_eq!(mode, SortMode::Other("cheapest_first".to_string()));
        assert_eq!(mode.api_param(), "cheapest_first");
        assert_eq!(mode.label(), "Unknown Sort");
    }

    #[test]
    fn default_is_lowest_price() {
        assert_eq!(SortMode::default(), SortMode::LowestPrice);
        assert_eq!(SortMode::default().label(), "Lowest Price Sort");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&SortMode::RecentlyListed).unwrap();
        assert_eq!(json, "\"recently_listed\"");
    }
}
