// src/domain/estimator.rs

use crate::domain::attributes::PropertyAttributes;

/// Average King County price per ft².
pub const BASE_RATE_PER_SQFT: f64 = 200.0;
pub const BASEMENT_RATE_PER_SQFT: f64 = 80.0;
pub const MIN_PRICE: f64 = 80_000.0;
pub const DEFAULT_REFERENCE_YEAR: i32 = 2024;

const BEDROOM_STEP: f64 = 14_000.0;
const BATHROOM_STEP: f64 = 10_000.0;
const FLOOR_STEP: f64 = 8_000.0;
const CONDITION_STEP: f64 = 22_000.0;
const GRADE_STEP: f64 = 18_000.0;
const VIEW_STEP: f64 = 28_000.0;
const WATERFRONT_PREMIUM: f64 = 190_000.0;

const AGE_STEP: f64 = 400.0;
const MAX_AGE_DEPRECIATION: f64 = 60_000.0;
const RENOVATION_BASE_YEAR: i32 = 2000;
const RENOVATION_STEP: f64 = 500.0;
const MAX_RENOVATION_BOOST: f64 = 40_000.0;

/// Linear heuristic mirroring the feature space of the trained model.
///
/// Every term is a delta from the median property (3 bed, 2 bath, 1 floor,
/// condition 3, grade 7), so a median home is valued purely on its area.
/// Age is measured against a fixed `reference_year` rather than the clock so
/// the same input always prices the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Estimator {
    reference_year: i32,
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new(DEFAULT_REFERENCE_YEAR)
    }
}

impl Estimator {
    pub fn new(reference_year: i32) -> Self {
        Self { reference_year }
    }

    /// Price in dollars, never below [`MIN_PRICE`].
    pub fn estimate(&self, attrs: &PropertyAttributes) -> f64 {
        let mut price = attrs.living_area * BASE_RATE_PER_SQFT;

        price += (f64::from(attrs.bedroom_count) - 3.0) * BEDROOM_STEP;
        price += (attrs.bathroom_count - 2.0) * BATHROOM_STEP;
        price += (attrs.floor_count - 1.0) * FLOOR_STEP;
        price += (f64::from(attrs.condition) - 3.0) * CONDITION_STEP;
        price += (f64::from(attrs.grade) - 7.0) * GRADE_STEP;
        price += f64::from(attrs.view_score) * VIEW_STEP;

        if attrs.is_waterfront {
            price += WATERFRONT_PREMIUM;
        }

        if let Some(basement) = attrs.basement_area.filter(|a| *a > 0.0) {
            price += basement * BASEMENT_RATE_PER_SQFT;
        }

        if let Some(built) = attrs.year_built {
            let age = f64::from(self.reference_year) - f64::from(built);
            price -= (age * AGE_STEP).min(MAX_AGE_DEPRECIATION);
        }

        if let Some(renovated) = attrs.year_renovated.filter(|yr| *yr > RENOVATION_BASE_YEAR) {
            let years = f64::from(renovated - RENOVATION_BASE_YEAR);
            price += (years * RENOVATION_STEP).min(MAX_RENOVATION_BOOST);
        }

        price.max(MIN_PRICE)
    }
}
