// src/domain/valuation.rs

use crate::domain::attributes::PropertyAttributes;
use crate::domain::{round_half_up, round_to_thousand};
use serde::{Deserialize, Serialize};

pub const MARGIN_ERROR_PCT: f64 = 4.0;
pub const ANNUAL_TREND_PCT: f64 = 4.2;

const MARGIN_FRACTION: f64 = 0.04;
/// Zone average sits 5.5 % under the subject property.
const ZONE_FACTOR: f64 = 0.945;
/// Living area (ft²) above which a zipcoded estimate is trusted.
const HIGH_CONFIDENCE_AREA: f64 = 600.0;

pub const HOT_MARKET_MESSAGE: &str = "The market in your area is very active. Similar properties sell in under 15 days. It's an excellent time to sell.";
pub const BALANCED_MARKET_MESSAGE: &str =
    "The market is balanced. There is good demand and a reasonable supply in the area.";
pub const COLD_MARKET_MESSAGE: &str = "The market is cooler. Properties take longer to sell. Consider adjusting the price.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn label(&self) -> &'static str {
        match self {
            Confidence::High => "High",
            Confidence::Medium => "Medium",
            Confidence::Low => "Low",
        }
    }

    /// Icon colour on the result screen.
    pub fn color(&self) -> &'static str {
        match self {
            Confidence::High => "var(--clr-positive)",
            Confidence::Medium => "#F9A825",
            Confidence::Low => "var(--clr-negative)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
    pub mid: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    pub price_range: PriceRange,
    pub confidence: Confidence,
    pub market_temperature: f64,
    pub market_message: String,
    pub zone_average_price: i64,
    pub vs_zone_percent: i64,
    pub margin_error_pct: f64,
    pub annual_trend_pct: f64,
}

/// Builds the result record around an estimated mid price.
pub fn assemble(attrs: &PropertyAttributes, mid: f64) -> ValuationResult {
    let margin = mid * MARGIN_FRACTION;
    let price_range = PriceRange {
        min: round_to_thousand(mid - margin),
        max: round_to_thousand(mid + margin),
        mid: round_to_thousand(mid),
    };

    let zone_average_price = round_to_thousand(mid * ZONE_FACTOR);
    let vs_zone_percent = if zone_average_price == 0 {
        0
    } else {
        round_half_up((mid / zone_average_price as f64 - 1.0) * 100.0) as i64
    };

    let market_temperature = market_temperature(attrs);

    let confidence = if attrs.living_area > HIGH_CONFIDENCE_AREA && attrs.zipcode.is_some() {
        Confidence::High
    } else {
        Confidence::Medium
    };

    ValuationResult {
        price_range,
        confidence,
        market_temperature,
        market_message: market_message(market_temperature).to_string(),
        zone_average_price,
        vs_zone_percent,
        margin_error_pct: MARGIN_ERROR_PCT,
        annual_trend_pct: ANNUAL_TREND_PCT,
    }
}

/// 0–100 heat gauge, clamped to `[5, 95]` so the dot never leaves the bar.
pub fn market_temperature(attrs: &PropertyAttributes) -> f64 {
    let raw = 40.0 + f64::from(attrs.view_score) * 12.0 + (f64::from(attrs.condition) - 3.0) * 8.0;
    raw.clamp(5.0, 95.0)
}

pub fn market_message(temperature: f64) -> &'static str {
    if temperature > 65.0 {
        HOT_MARKET_MESSAGE
    } else if temperature > 40.0 {
        BALANCED_MARKET_MESSAGE
    } else {
        COLD_MARKET_MESSAGE
    }
}
