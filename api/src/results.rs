//! Read access to stored API responses.
//!
//! Getters never fail: anything missing or malformed falls back to
//! `"Unknown"` or a zero value.

use donut_core::format;
use donut_core::DonutError;
use serde_json::{Map, Value};

pub const UNKNOWN: &str = "Unknown";

static NULL: Value = Value::Null;

/// Outcome of looking up one entry by index
#[derive(Debug, Clone, PartialEq)]
pub enum EntryLookup<'a> {
    Entry(AuctionEntry<'a>),
    /// The index is past the last listing
    End,
    /// There is no usable result list
    Failed(String),
}

impl<'a> EntryLookup<'a> {
    pub fn entry(self) -> Option<AuctionEntry<'a>> {
        match self {
            EntryLookup::Entry(entry) => Some(entry),
            _ => None,
        }
    }
}

/// Stored response of an auction search
#[derive(Debug, Default)]
pub struct AuctionResults {
    response: Option<Result<Value, DonutError>>,
}

impl AuctionResults {
    pub fn from_json(body: Value) -> Self {
        Self {
            response: Some(Ok(body)),
        }
    }

    pub fn from_error(error: DonutError) -> Self {
        Self {
            response: Some(Err(error)),
        }
    }

    pub fn is_fetched(&self) -> bool {
        self.response.is_some()
    }

    /// The error captured by the last fetch, if it failed
    pub fn last_error(&self) -> Option<&DonutError> {
        self.response.as_ref().and_then(|r| r.as_ref().err())
    }

    fn listings(&self) -> Result<&[Value], String> {
        let body = match &self.response {
            None => return Err("no auction search has been made".to_string()),
            Some(Err(e)) => return Err(e.to_string()),
            Some(Ok(body)) => body,
        };

        match body.get("result") {
            Some(Value::Array(list)) => Ok(list),
            Some(_) => Err("'result' is not a list".to_string()),
            None => Err("response has no 'result' field".to_string()),
        }
    }

    /// Number of listings in the stored response
    pub fn len(&self) -> usize {
        self.listings().map(|l| l.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn entry_at(&self, index: usize) -> EntryLookup<'_> {
        match self.listings() {
            Ok(list) => list
                .get(index)
                .map(|raw| EntryLookup::Entry(AuctionEntry::new(raw)))
                .unwrap_or(EntryLookup::End),
            Err(reason) => EntryLookup::Failed(reason),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = AuctionEntry<'_>> {
        self.listings()
            .unwrap_or_default()
            .iter()
            .map(AuctionEntry::new)
    }

    /// Entry at `index`, or an empty one whose getters all return defaults
    fn entry_or_empty(&self, index: usize) -> AuctionEntry<'_> {
        self.entry_at(index)
            .entry()
            .unwrap_or(AuctionEntry::new(&NULL))
    }

    pub fn seller(&self, index: usize) -> String {
        self.entry_or_empty(index).seller()
    }

    pub fn price(&self, index: usize) -> String {
        self.entry_or_empty(index).price()
    }

    pub fn time_left(&self, index: usize) -> String {
        self.entry_or_empty(index).time_left()
    }

    pub fn item_name(&self, index: usize) -> String {
        self.entry_or_empty(index).item_name()
    }

    pub fn count(&self, index: usize) -> String {
        self.entry_or_empty(index).count()
    }
}

/// View over one listing of an auction response
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuctionEntry<'a> {
    raw: &'a Value,
}

impl<'a> AuctionEntry<'a> {
    pub fn new(raw: &'a Value) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> &'a Value {
        self.raw
    }

    fn item(&self) -> Option<&'a Value> {
        self.raw.get("item")
    }

    pub fn seller(&self) -> String {
        self.raw
            .get("seller")
            .and_then(|s| s.get("name"))
            .map(format::display_value)
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    pub fn price(&self) -> String {
        match self.raw.get("price") {
            Some(price) => format::abbreviate_value(price),
            None => format::abbreviate(0.0),
        }
    }

    pub fn time_left(&self) -> String {
        let millis = self
            .raw
            .get("time_left")
            .map(format::millis_from_value)
            .unwrap_or(0);
        format::time_left(millis)
    }

    pub fn item_name(&self) -> String {
        match self.item().and_then(|i| i.get("id")) {
            Some(id) => format::item_name(&format::display_value(id)),
            None => UNKNOWN.to_string(),
        }
    }

    pub fn count(&self) -> String {
        self.item()
            .and_then(|i| i.get("count"))
            .map(format::display_value)
            .unwrap_or_else(|| UNKNOWN.to_string())
    }
}

/// Stored response of a player stats lookup
#[derive(Debug, Default)]
pub struct PlayerStats {
    response: Option<Result<Value, DonutError>>,
}

impl PlayerStats {
    pub fn from_json(body: Value) -> Self {
        Self {
            response: Some(Ok(body)),
        }
    }

    pub fn from_error(error: DonutError) -> Self {
        Self {
            response: Some(Err(error)),
        }
    }

    pub fn is_fetched(&self) -> bool {
        self.response.is_some()
    }

    pub fn last_error(&self) -> Option<&DonutError> {
        self.response.as_ref().and_then(|r| r.as_ref().err())
    }

    fn result(&self) -> Option<&Map<String, Value>> {
        match &self.response {
            Some(Ok(body)) => body.get("result").and_then(Value::as_object),
            _ => None,
        }
    }

    /// Raw value of a stat, if present
    pub fn raw(&self, key: &str) -> Option<&Value> {
        self.result().and_then(|r| r.get(key))
    }

    /// Formatted stat value.
    ///
    /// `playtime` is rendered as days, hours and minutes; every other key
    /// goes through magnitude abbreviation. Missing stats count as 0.
    pub fn stat(&self, key: &str) -> String {
        let raw = self.raw(key);

        if key == "playtime" {
            return format::playtime(raw.map(format::millis_from_value).unwrap_or(0));
        }

        match raw {
            Some(value) => format::abbreviate_value(value),
            None => format::abbreviate(0.0),
        }
    }
}
