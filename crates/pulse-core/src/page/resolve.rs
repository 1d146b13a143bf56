//! Free text to ticker: shared by the predict and risk pages.
use super::InputError;
use pulse_client::schema::SearchHit;
use pulse_client::MarketApi;

pub const SEARCH_FAILED: &str = "Search failed. Please try again.";

/// Where a search leaves the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    /// The user has to pick one of these.
    Candidates(Vec<SearchHit>),
    /// Nothing matched; the raw input is used as a ticker as-is.
    Fallback(String),
}

/// Trimmed query, or [`InputError::EmptyQuery`] for blank input.
pub fn validate_query(query: &str) -> Result<&str, InputError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(InputError::EmptyQuery);
    }
    Ok(query)
}

/// Search for `query` (already validated).
pub async fn resolve<A: MarketApi>(api: &A, query: &str) -> Result<Resolved, String> {
    log::debug!("searching for {query:?}");
    match api.search(query).await {
        Ok(found) if found.results.is_empty() => {
            log::info!("no matches for {query:?}, trying it as a ticker");
            Ok(Resolved::Fallback(query.to_string()))
        }
        Ok(found) => Ok(Resolved::Candidates(found.results)),
        Err(e) => {
            log::error!("search for {query:?} failed: {e}");
            Err(SEARCH_FAILED.to_string())
        }
    }
}

/// Error shown when the direct lookup after an empty search fails.
pub fn fallback_message(query: &str, detail: &str) -> String {
    format!("No search matches for \"{query}\"; direct lookup failed: {detail}")
}
