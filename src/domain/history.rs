// src/domain/history.rs

use crate::domain::round_half_up;

/// 4.2 % a year, compounded monthly.
pub const ANNUAL_GROWTH: f64 = 0.042;
pub const DEFAULT_POINT_COUNT: usize = 12;
/// Ten years of months.
pub const MAX_POINT_COUNT: usize = 120;

/// Noise amplitude as a fraction of the final price (±2 %).
const NOISE_FRACTION: f64 = 0.04;

const LCG_MULTIPLIER: u32 = 1_664_525;
const LCG_INCREMENT: u32 = 1_013_904_223;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Numerical Recipes LCG over `u32`, seeded from the price so a given
/// valuation always draws the same chart.
struct Lcg(u32);

impl Lcg {
    fn seeded_from(price: f64) -> Self {
        Self((price.floor() as i64).rem_euclid(1_000) as u32)
    }

    /// Advances the state and returns it scaled into `[0, 1)`.
    fn next_unit(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        f64::from(self.0) / TWO_POW_32
    }
}

/// Synthetic monthly prices for the trend chart.
///
/// Walks a compounded growth curve back from `final_price`, jitters each
/// month with seeded noise, then pins the last point to `final_price`
/// exactly. Same inputs always give the same series.
pub fn generate(final_price: f64, point_count: usize) -> Vec<f64> {
    if point_count == 0 {
        return Vec::new();
    }

    let growth = 1.0 + ANNUAL_GROWTH / 12.0;
    let base = final_price / growth.powf((point_count - 1) as f64);
    let mut rng = Lcg::seeded_from(final_price);

    let mut points: Vec<f64> = (0..point_count)
        .map(|i| {
            let trend = base * growth.powf(i as f64);
            let noise = (rng.next_unit() - 0.5) * final_price * NOISE_FRACTION;
            round_half_up(trend + noise)
        })
        .collect();

    if let Some(last) = points.last_mut() {
        *last = final_price;
    }

    points
}
