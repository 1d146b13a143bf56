//! Formatting, views and page controllers of the MarketPulse terminal client.
//!
//! Nothing in here talks to the network directly; page controllers go through
//! [`pulse_client::MarketApi`] so they can be driven by a fake in tests.

pub mod format;
pub mod page;
pub mod state;
pub mod view;

pub use state::{PageState, Ticket, ViewState};
