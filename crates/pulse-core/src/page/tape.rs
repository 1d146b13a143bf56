use crate::view::tape::{frame, tape_line};
use pulse_client::prelude::*;

/// Scrolling strip of the top stocks. Fetched once; never refreshed.
#[derive(Debug, Default)]
pub struct TickerTape {
    items: Vec<TopStock>,
    line: String,
}

impl TickerTape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the strip. The list is doubled so the scroll wraps without a
    /// visible seam; a failure is logged and leaves the strip empty.
    pub async fn load<A: MarketApi>(&mut self, api: &A) {
        match api.top_stocks().await {
            Ok(stocks) => {
                self.items = stocks.iter().chain(stocks.iter()).cloned().collect();
            }
            Err(e) => {
                log::error!("fetching ticker tape failed: {e}");
                self.items.clear();
            }
        }
        self.line = tape_line(&self.items);
    }

    pub fn items(&self) -> &[TopStock] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Visible window after scrolling `offset` characters.
    pub fn frame(&self, offset: usize, width: usize) -> String {
        frame(&self.line, offset, width)
    }
}
