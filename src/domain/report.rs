// src/domain/report.rs

use crate::domain::attributes::PropertyAttributes;
use crate::domain::valuation::ValuationResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A valuation as shown to the user: the result plus the attributes it was
/// computed from, stamped with an id and creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationReport {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub result: ValuationResult,
    pub property: PropertyAttributes,
}

impl ValuationReport {
    /// `source` prefixes the id, e.g. `local-1718000000000`.
    pub fn new(source: &str, result: ValuationResult, property: PropertyAttributes) -> Self {
        let created_at = Utc::now();
        Self {
            id: format!("{source}-{}", created_at.timestamp_millis()),
            created_at,
            result,
            property,
        }
    }

    /// Mid price per ft² of living area.
    pub fn price_per_sqft(&self) -> Option<i64> {
        if self.property.living_area > 0.0 {
            Some((self.result.price_range.mid as f64 / self.property.living_area).round() as i64)
        } else {
            None
        }
    }
}
