use super::normalize_ticker;
use crate::state::{PageState, ViewState};
use pulse_client::prelude::*;

/// Headlines and their overall sentiment for one ticker.
#[derive(Debug, Default)]
pub struct NewsPage {
    state: PageState<NewsReport>,
    ticker: Option<String>,
}

impl NewsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &ViewState<NewsReport> {
        self.state.view()
    }

    pub fn ticker(&self) -> Option<&str> {
        self.ticker.as_deref()
    }

    pub async fn load<A: MarketApi>(&mut self, api: &A, ticker: &str) {
        let ticker = match normalize_ticker(ticker) {
            Ok(ticker) => ticker,
            Err(e) => return self.state.reject(e.to_string()),
        };

        let ticket = self.state.begin();
        log::debug!("loading news for {ticker}");
        let result = api.news(&ticker).await.map_err(|e| {
            log::error!("news for {ticker} failed: {e}");
            format!("Failed to fetch news for {ticker}.")
        });
        self.ticker = Some(ticker);
        self.state.settle(ticket, result);
    }
}
