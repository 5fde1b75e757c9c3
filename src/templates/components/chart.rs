use crate::format;
use maud::{html, Markup};

const WIDTH: f64 = 340.0;
const HEIGHT: f64 = 180.0;
const PAD_LEFT: f64 = 44.0;
const PAD_RIGHT: f64 = 10.0;
const PAD_TOP: f64 = 10.0;
const PAD_BOTTOM: f64 = 24.0;
const Y_TICKS: usize = 4;

/// Plot coordinates for a price series.
#[derive(Debug, Clone, PartialEq)]
struct Plot {
    points: Vec<(f64, f64)>,
    y_min: f64,
    y_max: f64,
}

impl Plot {
    fn new(prices: &[f64]) -> Self {
        let lo = prices.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let pad = if hi > lo { (hi - lo) * 0.1 } else { hi.abs() * 0.02 + 1.0 };
        let (y_min, y_max) = (lo - pad, hi + pad);

        let inner_w = WIDTH - PAD_LEFT - PAD_RIGHT;
        let step = if prices.len() > 1 {
            inner_w / (prices.len() - 1) as f64
        } else {
            0.0
        };
        let x0 = if prices.len() > 1 {
            PAD_LEFT
        } else {
            PAD_LEFT + inner_w / 2.0
        };

        let points = prices
            .iter()
            .enumerate()
            .map(|(i, p)| (x0 + step * i as f64, y_for(*p, y_min, y_max)))
            .collect();

        Self {
            points,
            y_min,
            y_max,
        }
    }

    fn line_path(&self) -> String {
        self.points
            .iter()
            .enumerate()
            .map(|(i, (x, y))| format!("{}{x:.1},{y:.1}", if i == 0 { "M" } else { "L" }))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn area_path(&self) -> String {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return String::new();
        };
        let floor = HEIGHT - PAD_BOTTOM;
        format!(
            "{} L{:.1},{floor:.1} L{:.1},{floor:.1} Z",
            self.line_path(),
            last.0,
            first.0
        )
    }

    /// Evenly spaced `(y, value)` gridlines, top to bottom.
    fn ticks(&self) -> Vec<(f64, f64)> {
        (0..Y_TICKS)
            .map(|i| {
                let value = self.y_max - (self.y_max - self.y_min) * i as f64 / (Y_TICKS - 1) as f64;
                (y_for(value, self.y_min, self.y_max), value)
            })
            .collect()
    }
}

fn y_for(value: f64, y_min: f64, y_max: f64) -> f64 {
    let inner_h = HEIGHT - PAD_TOP - PAD_BOTTOM;
    PAD_TOP + (y_max - value) / (y_max - y_min) * inner_h
}

/// Line chart of the synthetic price history, drawn as inline SVG.
pub fn price_chart(prices: &[f64], labels: &[&str]) -> Markup {
    if prices.is_empty() {
        return html! { p class="chart-empty" { "No price history available." } };
    }

    let plot = Plot::new(prices);

    html! {
        svg
            id="price-chart"
            class="price-chart"
            xmlns="http://www.w3.org/2000/svg"
            viewBox=(format!("0 0 {WIDTH} {HEIGHT}"))
            role="img"
            aria-label="Price trend over the last months"
        {
            defs {
                linearGradient id="chart-fill" x1="0" y1="0" x2="0" y2="1" {
                    stop offset="0%" stop-color="rgba(21, 101, 192, 0.30)" {}
                    stop offset="100%" stop-color="rgba(21, 101, 192, 0.00)" {}
                }
            }

            @for (y, value) in plot.ticks() {
                line class="chart-grid" x1=(PAD_LEFT) x2=(WIDTH - PAD_RIGHT) y1=(format!("{y:.1}")) y2=(format!("{y:.1}")) {}
                text class="chart-tick" x=(PAD_LEFT - 6.0) y=(format!("{:.1}", y + 4.0)) text-anchor="end" {
                    (format::thousands_tick(value))
                }
            }

            path class="chart-area" d=(plot.area_path()) fill="url(#chart-fill)" {}
            path class="chart-line" d=(plot.line_path()) fill="none" stroke="#1565C0" stroke-width="2.5" {}

            @for (i, (x, y)) in plot.points.iter().enumerate() {
                circle class="chart-point" cx=(format!("{x:.1}")) cy=(format!("{y:.1}")) r="3" fill="#1565C0" {
                    title { (labels.get(i).copied().unwrap_or_default()) " " (format::currency(prices[i])) }
                }
                @if let Some(label) = labels.get(i) {
                    text class="chart-label" x=(format!("{x:.1}")) y=(HEIGHT - 6.0) text-anchor="middle" { (label) }
                }
            }
        }
    }
}
