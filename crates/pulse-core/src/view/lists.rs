use colored::Colorize;
use pulse_client::schema::{Headline, SearchHit};

/// Headlines shown under a sentiment summary.
pub const HEADLINE_LIMIT: usize = 5;

/// Numbered list of the first [`HEADLINE_LIMIT`] headlines with their links.
pub fn news_list(headlines: &[Headline]) -> String {
    if headlines.is_empty() {
        return "  No recent headlines.\n".to_string();
    }
    let mut out = String::new();
    for (i, headline) in headlines.iter().take(HEADLINE_LIMIT).enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, headline.title));
        if !headline.url.is_empty() {
            out.push_str(&format!("     {}\n", headline.url.dimmed()));
        }
    }
    out
}

pub fn search_results(hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return "No results found.\n".to_string();
    }
    hits.iter()
        .map(|hit| format!("  {:<14} {}\n", hit.ticker.bold(), hit.name))
        .collect()
}

/// Label used by the interactive picker.
pub fn hit_label(hit: &SearchHit) -> String {
    format!("{} ({})", hit.name, hit.ticker)
}
