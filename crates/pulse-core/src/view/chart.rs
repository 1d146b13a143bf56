use crate::format::format_currency;
use crate::page::strategy::CombinedPoint;
use colored::{Color, ColoredString, Colorize};
use pulse_client::schema::{Chart, SignalKind};
use std::ops::Range;

/// Eight-level block glyphs, lowest first.
pub const SPARKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Default terminal columns given to the plotted series.
pub const DEFAULT_WIDTH: usize = 60;

/// How y-values are printed in chart summaries.
#[derive(Debug, Clone, PartialEq)]
pub enum Scale {
    /// Prices in the given ISO currency.
    Currency(String),
    /// Normalized performance, already in percent.
    Percent,
}

impl Scale {
    pub fn usd() -> Self {
        Scale::Currency("USD".to_string())
    }

    pub fn fmt(&self, value: f64) -> String {
        match self {
            Scale::Currency(code) => format_currency(Some(value), code),
            Scale::Percent => format!("{value:.2}%"),
        }
    }
}

/// Band charts carry helper series that should not get a legend entry: the
/// lower edge of each confidence band and any individually drawn simulation.
pub fn legend_visible(label: &str) -> bool {
    !(label.contains("(Lower)") || label.contains("Sim "))
}

////////////////////////////////////////////////////////////////////////////////////////////////////
//
// Sparklines
//
////////////////////////////////////////////////////////////////////////////////////////////////////

/// Split `len` points into at most `width` contiguous, non-empty columns.
pub fn columns(len: usize, width: usize) -> Vec<Range<usize>> {
    let width = width.max(1).min(len);
    (0..width)
        .map(|c| (c * len / width)..((c + 1) * len / width))
        .collect()
}

/// Down-sample to `width` columns, keeping the last non-null value of each.
pub fn resample(data: &[Option<f64>], width: usize) -> Vec<Option<f64>> {
    columns(data.len(), width)
        .into_iter()
        .map(|range| data[range].iter().rev().find_map(|v| *v))
        .collect()
}

/// Map each value onto a block glyph between `lo` and `hi`; gaps stay blank.
pub fn sparkline(values: &[Option<f64>], lo: f64, hi: f64) -> String {
    let span = hi - lo;
    values
        .iter()
        .map(|value| match value {
            None => ' ',
            Some(_) if span <= f64::EPSILON => SPARKS[SPARKS.len() / 2],
            Some(v) => {
                let level = ((v - lo) / span * (SPARKS.len() - 1) as f64).round();
                SPARKS[level.clamp(0.0, (SPARKS.len() - 1) as f64) as usize]
            }
        })
        .collect()
}

fn bounds<'a>(series: impl Iterator<Item = &'a Option<f64>>) -> Option<(f64, f64)> {
    series
        .filter_map(|v| *v)
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

////////////////////////////////////////////////////////////////////////////////////////////////////
//
// Line charts
//
////////////////////////////////////////////////////////////////////////////////////////////////////

/// Render every legend-visible dataset of `chart` as one sparkline row on a
/// shared y-range, followed by the x-axis extent.
///
/// On band charts, helper series are hidden and a dataset immediately followed
/// by its `(Lower)` twin is summarised as a band (`lower..upper`) instead of a
/// single last value. Other charts show every series as-is.
pub fn render_chart(title: &str, chart: &Chart, scale: &Scale, width: usize) -> String {
    let mut out = format!("{}\n", title.bold());
    let band = chart.is_band_chart();

    let visible: Vec<usize> = chart
        .datasets
        .iter()
        .enumerate()
        .filter(|(_, d)| !band || legend_visible(&d.label))
        .map(|(i, _)| i)
        .collect();

    let Some((lo, hi)) = bounds(visible.iter().flat_map(|&i| chart.datasets[i].data.iter()))
    else {
        out.push_str("  (no data)\n");
        return out;
    };

    let label_width = visible
        .iter()
        .map(|&i| chart.datasets[i].label.chars().count())
        .max()
        .unwrap_or(0)
        .min(32);

    for &i in &visible {
        let dataset = &chart.datasets[i];
        let spark = sparkline(&resample(&dataset.data, width), lo, hi);

        let lower = chart
            .datasets
            .get(i + 1)
            .filter(|next| band && next.label.contains("(Lower)"))
            .and_then(|next| next.last());
        let summary = match (lower, dataset.last()) {
            (Some(lower), Some(upper)) => {
                format!("band {}..{}", scale.fmt(lower), scale.fmt(upper))
            }
            (None, Some(last)) => format!("last {}", scale.fmt(last)),
            (_, None) => "last N/A".to_string(),
        };

        let label: String = dataset.label.chars().take(label_width).collect();
        out.push_str(&format!(
            "  {label:<label_width$}  {}  {summary}\n",
            spark.cyan()
        ));
    }

    out.push_str(&format!(
        "  {:<label_width$}  range {}..{}\n",
        "",
        scale.fmt(lo),
        scale.fmt(hi)
    ));
    if let (Some(first), Some(last)) = (chart.labels.first(), chart.labels.last()) {
        out.push_str(&format!(
            "  {:<label_width$}  {first} → {last} ({} points)\n",
            "",
            chart.labels.len()
        ));
    }

    out
}

/// Historical, intraday and Monte Carlo charts.
pub fn price_chart(title: &str, chart: &Chart, currency: &str) -> String {
    render_chart(title, chart, &Scale::Currency(currency.to_string()), DEFAULT_WIDTH)
}

/// Normalized multi-ticker performance.
pub fn comparison_chart(chart: &Chart) -> String {
    render_chart(
        "Normalized Stock Performance Comparison (%)",
        chart,
        &Scale::Percent,
        DEFAULT_WIDTH,
    )
}

////////////////////////////////////////////////////////////////////////////////////////////////////
//
// Backtest chart
//
////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub glyph: char,
    pub color: Color,
}

impl Marker {
    pub fn paint(&self) -> ColoredString {
        self.glyph.to_string().color(self.color).bold()
    }
}

/// Buy and sell get distinct markers; rows without a signal get none.
pub fn signal_marker(kind: Option<SignalKind>) -> Option<Marker> {
    match kind? {
        SignalKind::Buy => Some(Marker {
            glyph: '▲',
            color: Color::Green,
        }),
        SignalKind::Sell => Some(Marker {
            glyph: '▼',
            color: Color::Red,
        }),
    }
}

/// Close-price sparkline with a marker row underneath; a column shows the
/// marker of the last signal that falls inside it.
pub fn backtest_chart(points: &[CombinedPoint], currency: &str, width: usize) -> String {
    let closes: Vec<Option<f64>> = points.iter().map(|p| Some(p.close)).collect();
    let Some((lo, hi)) = bounds(closes.iter()) else {
        return "  (no price data)\n".to_string();
    };
    let scale = Scale::Currency(currency.to_string());

    let spark = sparkline(&resample(&closes, width), lo, hi);
    let markers: String = columns(points.len(), width)
        .into_iter()
        .map(|range| {
            points[range]
                .iter()
                .rev()
                .find_map(|p| signal_marker(p.kind))
                .map(|m| m.paint().to_string())
                .unwrap_or_else(|| " ".to_string())
        })
        .collect();

    let mut out = String::new();
    out.push_str(&format!("  Close    {}\n", spark.cyan()));
    out.push_str(&format!("  Signals  {markers}\n"));
    out.push_str(&format!(
        "           range {}..{}\n",
        scale.fmt(lo),
        scale.fmt(hi)
    ));
    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        out.push_str(&format!(
            "           {} → {} ({} points)\n",
            first.date,
            last.date,
            points.len()
        ));
    }
    out
}
