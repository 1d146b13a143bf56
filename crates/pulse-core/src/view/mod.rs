//! Stateless renderers: already-fetched data in, terminal text out.

pub mod cards;
pub mod chart;
pub mod lists;
pub mod loading;
pub mod tape;
