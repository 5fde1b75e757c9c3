pub mod analysis;
pub mod attributes;
pub mod estimator;
pub mod history;
pub mod report;
pub mod valuation;

pub use attributes::{PropertyAttributes, PropertyInput};
pub use estimator::Estimator;
pub use report::ValuationReport;

/// Rounds halves up (towards +∞), matching `Math.round` so series computed
/// here line up with ones computed in the browser.
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Nearest 1,000, halves up.
pub fn round_to_thousand(x: f64) -> i64 {
    (round_half_up(x / 1_000.0) * 1_000.0) as i64
}
