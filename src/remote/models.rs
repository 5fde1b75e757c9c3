use crate::domain::attributes::{PropertyAttributes, DEFAULT_ZIPCODE};
use crate::domain::valuation::{
    market_message, Confidence, PriceRange, ValuationResult, ANNUAL_TREND_PCT, MARGIN_ERROR_PCT,
};
use crate::domain::{round_half_up, round_to_thousand};
use serde::{Deserialize, Serialize};

// Request (PropertyInput schema)
//  ├── area
//  ├── rooms
//  ├── bathrooms
//  ├── floor
//  ├── grade
//  ├── lot_area?
//  ├── above_area?
//  ├── year_built?
//  ├── year_renovated?
//  └── location
//       ├── latitude
//       ├── longitude
//       └── postal_code

#[derive(Debug, Serialize, PartialEq)]
pub struct ValuationPayload {
    pub area: f64,
    pub rooms: u32,
    pub bathrooms: f64,
    pub floor: f64,
    pub grade: u8,
    pub lot_area: Option<f64>,
    pub above_area: Option<f64>,
    pub year_built: Option<i32>,
    pub year_renovated: Option<i32>,
    pub location: PayloadLocation,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct PayloadLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub postal_code: String,
}

impl From<&PropertyAttributes> for ValuationPayload {
    fn from(attrs: &PropertyAttributes) -> Self {
        Self {
            area: attrs.living_area,
            rooms: attrs.bedroom_count,
            bathrooms: attrs.bathroom_count,
            floor: attrs.floor_count,
            grade: attrs.grade,
            lot_area: attrs.lot_area,
            above_area: attrs.above_area,
            year_built: attrs.year_built,
            year_renovated: attrs.year_renovated,
            location: PayloadLocation {
                latitude: attrs.latitude,
                longitude: attrs.longitude,
                postal_code: attrs
                    .zipcode
                    .clone()
                    .unwrap_or_else(|| DEFAULT_ZIPCODE.to_string()),
            },
        }
    }
}

// Response
//  ├── id?
//  ├── precio_estimado
//  │    ├── minimo
//  │    ├── maximo
//  │    └── precio_medio
//  ├── confianza            ALTA | MEDIA | BAJA
//  ├── margen_error_pct?
//  └── mercado
//       ├── temperatura
//       ├── precio_medio_zona
//       ├── tendencia_anual_pct?
//       ├── mensaje?
//       └── vs_zona_pct

#[derive(Debug, Deserialize)]
pub struct RemoteValuation {
    pub id: Option<String>,
    #[serde(rename = "precio_estimado")]
    pub estimated_price: RemotePrice,
    #[serde(rename = "confianza")]
    pub confidence: RemoteConfidence,
    #[serde(rename = "margen_error_pct")]
    pub margin_error_pct: Option<f64>,
    #[serde(rename = "mercado")]
    pub market: RemoteMarket,
}

#[derive(Debug, Deserialize)]
pub struct RemotePrice {
    #[serde(rename = "minimo")]
    pub min: f64,
    #[serde(rename = "maximo")]
    pub max: f64,
    #[serde(rename = "precio_medio")]
    pub mid: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub enum RemoteConfidence {
    #[serde(rename = "ALTA")]
    High,
    #[serde(rename = "MEDIA")]
    Medium,
    #[serde(rename = "BAJA")]
    Low,
}

#[derive(Debug, Deserialize)]
pub struct RemoteMarket {
    #[serde(rename = "temperatura")]
    pub temperature: f64,
    #[serde(rename = "precio_medio_zona")]
    pub zone_average_price: f64,
    #[serde(rename = "tendencia_anual_pct")]
    pub annual_trend_pct: Option<f64>,
    #[serde(rename = "mensaje")]
    pub message: Option<String>,
    #[serde(rename = "vs_zona_pct")]
    pub vs_zone_pct: f64,
}

impl From<RemoteConfidence> for Confidence {
    fn from(c: RemoteConfidence) -> Self {
        match c {
            RemoteConfidence::High => Confidence::High,
            RemoteConfidence::Medium => Confidence::Medium,
            RemoteConfidence::Low => Confidence::Low,
        }
    }
}

impl RemoteValuation {
    /// Maps the service's document onto our result, keeping the same rounding
    /// and temperature bounds a local estimate gets.
    pub fn into_result(self) -> ValuationResult {
        let temperature = self.market.temperature.clamp(5.0, 95.0);
        let message = self
            .market
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| market_message(temperature).to_string());

        ValuationResult {
            price_range: PriceRange {
                min: round_to_thousand(self.estimated_price.min),
                max: round_to_thousand(self.estimated_price.max),
                mid: round_to_thousand(self.estimated_price.mid),
            },
            confidence: self.confidence.into(),
            market_temperature: temperature,
            market_message: message,
            zone_average_price: round_to_thousand(self.market.zone_average_price),
            vs_zone_percent: round_half_up(self.market.vs_zone_pct) as i64,
            margin_error_pct: self.margin_error_pct.unwrap_or(MARGIN_ERROR_PCT),
            annual_trend_pct: self.market.annual_trend_pct.unwrap_or(ANNUAL_TREND_PCT),
        }
    }
}
