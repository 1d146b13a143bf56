//! HTTP client for the MarketPulse analysis API.
//!
//! - `schema`: serde models of every JSON payload the API returns.
//! - `endpoint`: endpoint paths, query parameters and the selectable enums
//!   (`Period`, `Strategy`) that parameterise them.
//! - `client_ext`: the [`MarketApi`] trait and its `reqwest` implementation.
//! - `error`: [`ApiError`] and the crate `Result` alias.
pub mod client_ext;
pub mod endpoint;
pub mod error;
pub mod schema;

pub use client_ext::{MarketApi, PulseClient};
pub use endpoint::{Endpoint, Period, Strategy};
pub use error::{ApiError, Result};

pub mod prelude {
    pub use crate::client_ext::{MarketApi, PulseClient};
    pub use crate::endpoint::{Period, Strategy};
    pub use crate::error::{ApiError, Result};
    pub use crate::schema::*;

    pub fn build_client(api_url: &str, user_agent: &str) -> Result<PulseClient> {
        PulseClient::new(api_url, user_agent)
    }
}
