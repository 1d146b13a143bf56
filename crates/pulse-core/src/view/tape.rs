use crate::format::{format_currency, format_signed};
use pulse_client::schema::TopStock;

const GAP: &str = "    ";

/// Text of the whole strip, `AAPL $189.30 ▲ +0.85%` plus a gap per item.
pub fn tape_line(stocks: &[TopStock]) -> String {
    stocks
        .iter()
        .map(|stock| {
            let arrow = if stock.change >= 0.0 { "▲" } else { "▼" };
            format!(
                "{} {} {arrow} {}{GAP}",
                stock.ticker,
                format_currency(Some(stock.price), &stock.currency),
                format_signed(stock.change_percent, "%")
            )
        })
        .collect()
}

/// `width` characters of the strip starting `offset` characters in; the
/// strip repeats endlessly so any offset is valid.
pub fn frame(line: &str, offset: usize, width: usize) -> String {
    let len = line.chars().count();
    if len == 0 {
        return " ".repeat(width);
    }
    line.chars().cycle().skip(offset % len).take(width).collect()
}
