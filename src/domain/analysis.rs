// src/domain/analysis.rs

use crate::domain::attributes::PropertyAttributes;
use crate::domain::history;
use crate::domain::report::ValuationReport;
use crate::domain::round_half_up;

pub const MONTH_LABELS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Shown as "+3.2% this month".
pub const MONTHLY_CHANGE_PCT: f64 = 3.2;

const MAX_IMPACTS: usize = 5;
const HOT_ALERT_TEMPERATURE: f64 = 60.0;
/// Age past which an unrenovated home is flagged.
const STALE_AGE_YEARS: i32 = 25;

/// One characteristic that pushes the price up or down.
#[derive(Debug, Clone, PartialEq)]
pub struct Impact {
    /// Material Symbols icon name.
    pub icon: &'static str,
    pub label: &'static str,
    pub description: String,
    pub pct: i32,
}

impl Impact {
    fn new(icon: &'static str, label: &'static str, description: impl Into<String>, pct: i32) -> Self {
        Self {
            icon,
            label,
            description: description.into(),
            pct,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.pct > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketAlert {
    OptimalToSell,
    Calm,
}

impl MarketAlert {
    pub fn for_temperature(temperature: f64) -> Self {
        if temperature > HOT_ALERT_TEMPERATURE {
            MarketAlert::OptimalToSell
        } else {
            MarketAlert::Calm
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MarketAlert::OptimalToSell => "Optimal Moment to Sell",
            MarketAlert::Calm => "Calm Market",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MarketAlert::OptimalToSell => "The local market is rising with little supply available.",
            MarketAlert::Calm => "Take your time to find the best price.",
        }
    }
}

/// Everything the market-analysis screen shows besides the report itself.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketAnalysis {
    pub price_per_sqft: Option<i64>,
    pub alert: MarketAlert,
    pub impacts: Vec<Impact>,
    pub similar_sold: i64,
    pub history: Vec<f64>,
}

pub fn analyze(report: &ValuationReport, reference_year: i32, history_points: usize) -> MarketAnalysis {
    let temperature = report.result.market_temperature;

    MarketAnalysis {
        price_per_sqft: report.price_per_sqft(),
        alert: MarketAlert::for_temperature(temperature),
        impacts: characteristic_impacts(&report.property, reference_year),
        similar_sold: 10 + round_half_up(temperature / 10.0) as i64,
        history: history::generate(report.result.price_range.mid as f64, history_points),
    }
}

/// Month labels for a series of `n` points ending in December.
pub fn month_labels(n: usize) -> Vec<&'static str> {
    (0..n)
        .map(|i| MONTH_LABELS[(i + 12 - n % 12) % 12])
        .collect()
}

/// Up to five impacts in display order; market tension always closes the list.
pub fn characteristic_impacts(attrs: &PropertyAttributes, reference_year: i32) -> Vec<Impact> {
    let mut impacts = Vec::new();

    if attrs.condition >= 4 {
        impacts.push(Impact::new(
            "home_repair_service",
            "Condition",
            "Excellent upkeep of the property",
            8,
        ));
    } else if attrs.condition <= 2 {
        impacts.push(Impact::new(
            "home_repair_service",
            "Condition",
            "Needs major renovation",
            -10,
        ));
    }

    if attrs.view_score >= 3 {
        impacts.push(Impact::new("landscape", "Exceptional Views", "High-demand area", 12));
    }

    if attrs.is_waterfront {
        impacts.push(Impact::new("water", "Waterfront Property", "Direct water access", 25));
    }

    if attrs.grade >= 10 {
        impacts.push(Impact::new("star", "Premium Quality", "High-end construction", 15));
    } else if attrs.grade <= 5 {
        impacts.push(Impact::new("star_border", "Basic Quality", "Standard materials", -8));
    }

    if let Some(built) = attrs.year_built {
        if attrs.year_renovated.is_none() && reference_year - built > STALE_AGE_YEARS {
            impacts.push(Impact::new(
                "update",
                "No Recent Renovation",
                format!("Built in {built}"),
                -5,
            ));
        }
    }

    if attrs.floor_count >= 2.0 {
        impacts.push(Impact::new(
            "stairs",
            "Multiple Floors",
            format!("{} floors", attrs.floor_count),
            -3,
        ));
    }

    impacts.push(Impact::new(
        "local_fire_department",
        "Market Tension",
        "Little supply in the neighbourhood",
        4,
    ));

    impacts.truncate(MAX_IMPACTS);
    impacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::valuation::assemble;

    #[test]
    fn median_home_only_has_market_tension() {
        let impacts = characteristic_impacts(&PropertyAttributes::default(), 2024);

        assert_eq!(impacts.len(), 1);
        assert_eq!(impacts[0].label, "Market Tension");
        assert!(impacts[0].is_positive());
    }

    #[test]
    fn impacts_are_capped_at_five() {
        let attrs = PropertyAttributes {
            condition: 5,
            view_score: 4,
            is_waterfront: true,
            grade: 12,
            year_built: Some(1950),
            floor_count: 2.0,
            ..PropertyAttributes::default()
        };

        let impacts = characteristic_impacts(&attrs, 2024);
        let labels: Vec<_> = impacts.iter().map(|i| i.label).collect();

        assert_eq!(
            labels,
            vec![
                "Condition",
                "Exceptional Views",
                "Waterfront Property",
                "Premium Quality",
                "No Recent Renovation",
            ]
        );
        assert_eq!(impacts[4].description, "Built in 1950");
        assert!(!impacts[4].is_positive());
    }

    #[test]
    fn renovation_suppresses_age_impact() {
        let attrs = PropertyAttributes {
            year_built: Some(1950),
            year_renovated: Some(2015),
            ..PropertyAttributes::default()
        };

        let impacts = characteristic_impacts(&attrs, 2024);

        assert!(impacts.iter().all(|i| i.label != "No Recent Renovation"));
    }

    #[test]
    fn negative_impacts() {
        let attrs = PropertyAttributes {
            condition: 2,
            grade: 4,
            floor_count: 2.5,
            ..PropertyAttributes::default()
        };

        let pcts: Vec<_> = characteristic_impacts(&attrs, 2024)
            .iter()
            .map(|i| i.pct)
            .collect();

        assert_eq!(pcts, vec![-10, -8, -3, 4]);
    }

    #[test]
    fn analysis_of_a_hot_listing() {
        let attrs = PropertyAttributes {
            living_area: 1500.0,
            view_score: 2,
            ..PropertyAttributes::default()
        };
        let report = ValuationReport::new("local", assemble(&attrs, 300_000.0), attrs);

        let analysis = analyze(&report, 2024, 12);

        // 40 + 2 * 12
        assert_eq!(report.result.market_temperature, 64.0);
        assert_eq!(analysis.alert, MarketAlert::OptimalToSell);
        assert_eq!(analysis.similar_sold, 16);
        assert_eq!(analysis.price_per_sqft, Some(200));
        assert_eq!(analysis.history.len(), 12);
        assert_eq!(analysis.history[11], 300_000.0);
    }

    #[test]
    fn month_labels_end_in_december() {
        assert_eq!(month_labels(12), MONTH_LABELS.to_vec());
        assert_eq!(month_labels(3), vec!["OCT", "NOV", "DEC"]);
        assert!(month_labels(0).is_empty());
    }
}
