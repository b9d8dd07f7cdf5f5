use serde::Serialize;

/// JSON body of an auction search.
///
/// The endpoint takes its filters as a body even though it is a GET.
#[derive(Debug, Serialize)]
pub struct AuctionQuery<'a> {
    pub search: &'a str,
    pub sort: &'a str,
}
