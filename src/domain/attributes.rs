// src/domain/attributes.rs

use crate::forms::FormFields;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Users enter m², the pricing model works in ft².
pub const SQFT_PER_M2: f64 = 10.7639;

pub const DEFAULT_LIVING_AREA_M2: f64 = 140.0;
pub const DEFAULT_BEDROOMS: u32 = 3;
pub const DEFAULT_BATHROOMS: f64 = 2.0;
pub const DEFAULT_FLOORS: f64 = 1.0;
pub const DEFAULT_CONDITION: u8 = 3;
pub const DEFAULT_GRADE: u8 = 7;
pub const DEFAULT_VIEW: u8 = 0;
pub const DEFAULT_ZIPCODE: &str = "98178";
pub const DEFAULT_LATITUDE: f64 = 47.5112;
pub const DEFAULT_LONGITUDE: f64 = -122.2571;

pub const CONDITION_RANGE: (u8, u8) = (1, 5);
pub const GRADE_RANGE: (u8, u8) = (1, 13);
pub const VIEW_RANGE: (u8, u8) = (0, 4);

/// Property input exactly as submitted: every field optional, areas in m².
/// This is what the form and the JSON API hand us before any defaulting.
/// Wrongly typed JSON values decode as absent, so they fall back to the
/// defaults the same way an empty form field does.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyInput {
    #[serde(deserialize_with = "lenient_number")]
    pub living_area_m2: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub bedrooms: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub bathrooms: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub floors: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub condition: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub grade: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub view: Option<f64>,
    #[serde(deserialize_with = "lenient_flag")]
    pub waterfront: bool,
    #[serde(deserialize_with = "lenient_number")]
    pub basement_area_m2: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub lot_area_m2: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub above_area_m2: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub year_built: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub year_renovated: Option<f64>,
    #[serde(deserialize_with = "lenient_text")]
    pub zipcode: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub latitude: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub longitude: Option<f64>,
}

/// Normalized attributes fed to the estimator. Areas are in ft².
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyAttributes {
    pub living_area: f64,
    pub bedroom_count: u32,
    pub bathroom_count: f64,
    pub floor_count: f64,
    pub condition: u8,
    pub grade: u8,
    pub view_score: u8,
    pub is_waterfront: bool,
    pub basement_area: Option<f64>,
    pub year_built: Option<i32>,
    pub year_renovated: Option<i32>,
    pub zipcode: Option<String>,

    // Only forwarded to the remote model
    pub lot_area: Option<f64>,
    pub above_area: Option<f64>,
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for PropertyAttributes {
    fn default() -> Self {
        PropertyInput::default().normalize()
    }
}

impl PropertyInput {
    /// Reads the property form. Field names follow the model's CSV columns.
    ///
    /// The basement area only counts while the basement toggle is on, and an
    /// age slider sitting at `current_year` means "new", i.e. no year built.
    pub fn from_form(fields: &FormFields, current_year: i32) -> Self {
        let num = |key: &str| fields.get(key).and_then(parse_number);

        let basement_area_m2 = if fields.is_checked("has_basement") {
            num("sqft_basement")
        } else {
            None
        };

        let year_built = num("yr_built").filter(|yr| *yr < f64::from(current_year));

        Self {
            living_area_m2: num("sqft_living"),
            bedrooms: num("bedrooms"),
            bathrooms: num("bathrooms"),
            floors: num("floors"),
            condition: num("condition"),
            grade: num("grade"),
            view: num("view"),
            waterfront: fields.get("waterfront") == Some("1"),
            basement_area_m2,
            lot_area_m2: num("sqft_lot"),
            above_area_m2: num("sqft_above"),
            year_built,
            year_renovated: num("yr_renovated"),
            zipcode: fields.get("zipcode").map(str::to_string),
            latitude: num("lat"),
            longitude: num("long"),
        }
    }

    /// Substitutes the median default for anything absent, non-finite or
    /// negative, and clamps the bounded scores into range.
    pub fn normalize(&self) -> PropertyAttributes {
        PropertyAttributes {
            living_area: positive(self.living_area_m2).unwrap_or(DEFAULT_LIVING_AREA_M2)
                * SQFT_PER_M2,
            bedroom_count: non_negative(self.bedrooms)
                .map(|b| b.trunc() as u32)
                .unwrap_or(DEFAULT_BEDROOMS),
            bathroom_count: non_negative(self.bathrooms).unwrap_or(DEFAULT_BATHROOMS),
            floor_count: non_negative(self.floors).unwrap_or(DEFAULT_FLOORS),
            condition: score(self.condition, CONDITION_RANGE, DEFAULT_CONDITION),
            grade: score(self.grade, GRADE_RANGE, DEFAULT_GRADE),
            view_score: score(self.view, VIEW_RANGE, DEFAULT_VIEW),
            is_waterfront: self.waterfront,
            basement_area: positive(self.basement_area_m2).map(|a| a * SQFT_PER_M2),
            year_built: year(self.year_built),
            year_renovated: year(self.year_renovated),
            zipcode: self
                .zipcode
                .as_deref()
                .map(str::trim)
                .filter(|z| !z.is_empty())
                .map(str::to_string),
            lot_area: positive(self.lot_area_m2).map(|a| a * SQFT_PER_M2),
            above_area: positive(self.above_area_m2).map(|a| a * SQFT_PER_M2),
            latitude: finite(self.latitude).unwrap_or(DEFAULT_LATITUDE),
            longitude: finite(self.longitude).unwrap_or(DEFAULT_LONGITUDE),
        }
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Numbers or numeric strings; anything else counts as absent.
fn lenient_number<'de, D>(de: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(de)? {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_number(&s),
        _ => None,
    })
}

/// `true`/`false`, `1`/`0`, or the form's checkbox strings.
fn lenient_flag<'de, D>(de: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(de)? {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "on" | "yes"
        ),
        _ => false,
    })
}

/// Zipcodes arrive as strings or bare numbers.
fn lenient_text<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(de)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn finite(v: Option<f64>) -> Option<f64> {
    v.filter(|v| v.is_finite())
}

fn non_negative(v: Option<f64>) -> Option<f64> {
    finite(v).filter(|v| *v >= 0.0)
}

fn positive(v: Option<f64>) -> Option<f64> {
    finite(v).filter(|v| *v > 0.0)
}

fn score(v: Option<f64>, (lo, hi): (u8, u8), default: u8) -> u8 {
    finite(v)
        .map(|s| s.round().clamp(f64::from(lo), f64::from(hi)) as u8)
        .unwrap_or(default)
}

fn year(v: Option<f64>) -> Option<i32> {
    positive(v).map(|y| y.trunc() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_uses_medians() {
        let attrs = PropertyInput::default().normalize();

        assert!((attrs.living_area - 140.0 * SQFT_PER_M2).abs() < 1e-9);
        assert_eq!(attrs.bedroom_count, 3);
        assert_eq!(attrs.bathroom_count, 2.0);
        assert_eq!(attrs.floor_count, 1.0);
        assert_eq!(attrs.condition, 3);
        assert_eq!(attrs.grade, 7);
        assert_eq!(attrs.view_score, 0);
        assert!(!attrs.is_waterfront);
        assert_eq!(attrs.basement_area, None);
        assert_eq!(attrs.year_built, None);
        assert_eq!(attrs.zipcode, None);
        assert_eq!(attrs.latitude, DEFAULT_LATITUDE);
        assert_eq!(attrs, PropertyAttributes::default());
    }

    #[test]
    fn negative_and_out_of_range_values_are_replaced() {
        let input = PropertyInput {
            living_area_m2: Some(-50.0),
            bedrooms: Some(-1.0),
            bathrooms: Some(f64::NAN),
            condition: Some(9.0),
            grade: Some(0.0),
            view: Some(-3.0),
            basement_area_m2: Some(0.0),
            year_built: Some(-1990.0),
            ..Default::default()
        };

        let attrs = input.normalize();

        assert!(attrs.living_area > 0.0);
        assert_eq!(attrs.bedroom_count, DEFAULT_BEDROOMS);
        assert_eq!(attrs.bathroom_count, DEFAULT_BATHROOMS);
        assert_eq!(attrs.condition, 5);
        assert_eq!(attrs.grade, 1);
        assert_eq!(attrs.view_score, 0);
        assert_eq!(attrs.basement_area, None);
        assert_eq!(attrs.year_built, None);
    }

    #[test]
    fn form_fields_are_read_and_converted() {
        let fields: FormFields = [
            ("sqft_living", "100"),
            ("bedrooms", "4"),
            ("bathrooms", "2.5"),
            ("floors", "2"),
            ("condition", "4"),
            ("grade", "9"),
            ("view", "2"),
            ("waterfront", "1"),
            ("has_basement", "on"),
            ("sqft_basement", "20"),
            ("yr_built", "1985"),
            ("yr_renovated", "abc"),
            ("zipcode", "  98103 "),
        ]
        .into_iter()
        .collect();

        let attrs = PropertyInput::from_form(&fields, 2026).normalize();

        assert!((attrs.living_area - 1076.39).abs() < 1e-6);
        assert_eq!(attrs.bedroom_count, 4);
        assert_eq!(attrs.bathroom_count, 2.5);
        assert_eq!(attrs.floor_count, 2.0);
        assert_eq!(attrs.condition, 4);
        assert_eq!(attrs.grade, 9);
        assert_eq!(attrs.view_score, 2);
        assert!(attrs.is_waterfront);
        assert!((attrs.basement_area.unwrap() - 215.278).abs() < 1e-6);
        assert_eq!(attrs.year_built, Some(1985));
        assert_eq!(attrs.year_renovated, None);
        assert_eq!(attrs.zipcode.as_deref(), Some("98103"));
    }

    #[test]
    fn basement_ignored_without_toggle() {
        let fields: FormFields = [("sqft_basement", "30")].into_iter().collect();

        let input = PropertyInput::from_form(&fields, 2026);

        assert_eq!(input.basement_area_m2, None);
    }

    #[test]
    fn age_slider_at_current_year_means_new() {
        let fields: FormFields = [("yr_built", "2026")].into_iter().collect();

        assert_eq!(PropertyInput::from_form(&fields, 2026).year_built, None);
        assert_eq!(
            PropertyInput::from_form(&fields, 2027).year_built,
            Some(2026.0)
        );
    }

    #[test]
    fn json_with_wrong_types_falls_back_to_defaults() {
        let input: PropertyInput = serde_json::from_str(
            r#"{
                "living_area_m2": "100",
                "bedrooms": "abc",
                "bathrooms": [1],
                "grade": null,
                "waterfront": 1,
                "zipcode": 98103
            }"#,
        )
        .unwrap();

        assert_eq!(input.living_area_m2, Some(100.0));
        assert_eq!(input.bedrooms, None);
        assert_eq!(input.bathrooms, None);
        assert_eq!(input.grade, None);
        assert!(input.waterfront);
        assert_eq!(input.zipcode.as_deref(), Some("98103"));

        let attrs = input.normalize();
        assert_eq!(attrs.bedroom_count, DEFAULT_BEDROOMS);
        assert_eq!(attrs.bathroom_count, DEFAULT_BATHROOMS);
        assert_eq!(attrs.grade, DEFAULT_GRADE);
    }

    #[test]
    fn waterfront_flag_forms() {
        let flag = |json: &str| serde_json::from_str::<PropertyInput>(json).unwrap().waterfront;

        assert!(flag(r#"{"waterfront": true}"#));
        assert!(flag(r#"{"waterfront": "1"}"#));
        assert!(!flag(r#"{"waterfront": 0}"#));
        assert!(!flag(r#"{"waterfront": "nope"}"#));
        assert!(!flag("{}"));
    }

    #[test]
    fn blank_zipcode_is_absent() {
        let fields: FormFields = [("zipcode", "   ")].into_iter().collect();

        let attrs = PropertyInput::from_form(&fields, 2026).normalize();

        assert_eq!(attrs.zipcode, None);
    }
}
