//! Page controllers.
//!
//! Each page owns a [`PageState`](crate::state::PageState) and drives it from
//! user input through [`MarketApi`](pulse_client::MarketApi) calls. Input that
//! can be rejected locally is rejected before any request goes out.

pub mod compare;
pub mod home;
pub mod news;
pub mod predict;
pub mod resolve;
pub mod risk;
pub mod strategy;
pub mod tape;

#[cfg(test)]
pub(crate) mod fake;

use thiserror::Error;

/// Input rejected before any network call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a company name or ticker.")]
    EmptyQuery,

    /// Carries the number of tickers actually given.
    #[error("Please enter between 2 and 4 tickers to compare.")]
    TickerCount(usize),

    #[error("Please enter a ticker.")]
    EmptyTicker,
}

/// Upper-cased, trimmed ticker or [`InputError::EmptyTicker`].
pub fn normalize_ticker(ticker: &str) -> Result<String, InputError> {
    let ticker = ticker.trim();
    if ticker.is_empty() {
        return Err(InputError::EmptyTicker);
    }
    Ok(ticker.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickers_are_normalized() {
        assert_eq!(normalize_ticker(" aapl "), Ok("AAPL".to_string()));
        assert_eq!(normalize_ticker("reliance.ns"), Ok("RELIANCE.NS".to_string()));
        assert_eq!(normalize_ticker("  "), Err(InputError::EmptyTicker));
    }

    #[test]
    fn messages() {
        assert_eq!(
            InputError::TickerCount(5).to_string(),
            "Please enter between 2 and 4 tickers to compare."
        );
        assert_eq!(
            InputError::EmptyQuery.to_string(),
            "Please enter a company name or ticker."
        );
    }
}
