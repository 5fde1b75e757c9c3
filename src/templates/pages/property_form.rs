use crate::domain::attributes::{
    PropertyInput, DEFAULT_BATHROOMS, DEFAULT_BEDROOMS, DEFAULT_CONDITION, DEFAULT_GRADE,
};
use crate::navigation::Step;
use crate::templates::components::slider::{condition_label, grade_label, CONDITION_LABELS};
use crate::templates::components::counter::{self, counter};
use crate::templates::components::{range_slider, toast};
use crate::templates::{app_layout, card};
use maud::{html, Markup};

pub const OLDEST_YEAR: i32 = 1900;

const FLOOR_OPTIONS: [f64; 5] = [1.0, 1.5, 2.0, 2.5, 3.0];
const VIEW_OPTIONS: [(u8, &str); 5] = [
    (0, "No view"),
    (1, "Fair"),
    (2, "Average"),
    (3, "Good"),
    (4, "Excellent"),
];

pub struct PropertyFormVm<'a> {
    /// Values to pre-fill, e.g. when coming back from the result screen.
    pub input: &'a PropertyInput,
    /// Basement toggle state; kept even when no area was entered.
    pub has_basement: bool,
    pub current_year: i32,
    pub toast: Option<&'a str>,
}

/// Badge and hint under the age slider.
pub fn age_labels(year: i32, current_year: i32) -> (String, String) {
    if year >= current_year {
        ("New".to_string(), "Built roughly today".to_string())
    } else {
        let age = current_year - year;
        (format!("~{year}"), format!("Built about {age} years ago"))
    }
}

fn opt_value(v: Option<f64>) -> String {
    v.map(|n| n.to_string()).unwrap_or_default()
}

pub fn property_form_page(vm: &PropertyFormVm) -> Markup {
    let input = vm.input;

    let condition = input
        .condition
        .map(|c| c.round().clamp(1.0, 5.0) as u8)
        .unwrap_or(DEFAULT_CONDITION);
    let grade = input
        .grade
        .map(|g| g.round().clamp(1.0, 13.0) as u8)
        .unwrap_or(DEFAULT_GRADE);
    let floors = input.floors.unwrap_or(1.0);
    let view = input.view.map(|v| v.round() as i64).unwrap_or(0);
    let has_basement = vm.has_basement || input.basement_area_m2.is_some();

    let year_built = input
        .year_built
        .map(|y| y as i32)
        .unwrap_or(vm.current_year)
        .clamp(OLDEST_YEAR, vm.current_year);
    let (age_badge, age_hint) = age_labels(year_built, vm.current_year);

    app_layout(
        Step::Property,
        None,
        html! {
            form id="property-form" method="post" action="/valuation" {
                (card("Main details", html! {
                    div class="field" {
                        label class="field-label" for="sqft-living" { "Living area (m²)" }
                        input
                            type="number"
                            id="sqft-living"
                            name="sqft_living"
                            min="1"
                            step="any"
                            inputmode="decimal"
                            placeholder="140"
                            value=(opt_value(input.living_area_m2));
                    }

                    div class="field" {
                        label class="field-label" for="zipcode" { "Zipcode" }
                        input
                            type="text"
                            id="zipcode"
                            name="zipcode"
                            inputmode="numeric"
                            autocomplete="postal-code"
                            placeholder="98178"
                            value=(input.zipcode.as_deref().unwrap_or_default());
                    }

                    (counter(
                        "bedrooms",
                        "Bedrooms",
                        input.bedrooms.unwrap_or(f64::from(DEFAULT_BEDROOMS)),
                        counter::BEDROOMS,
                    ))
                    (counter(
                        "bathrooms",
                        "Bathrooms",
                        input.bathrooms.unwrap_or(DEFAULT_BATHROOMS),
                        counter::BATHROOMS,
                    ))

                    div class="field" {
                        label class="field-label" for="floors" { "Floors" }
                        select id="floors" name="floors" {
                            @for f in FLOOR_OPTIONS {
                                option value=(f) selected[f == floors] { (f) }
                            }
                        }
                    }
                }))

                (card("Condition & quality", html! {
                    (range_slider(
                        "condition",
                        "Condition",
                        (1, 5),
                        i32::from(condition),
                        condition_label(condition),
                        Some(&CONDITION_LABELS.join("|")),
                    ))
                    (range_slider(
                        "grade",
                        "Construction grade",
                        (1, 13),
                        i32::from(grade),
                        &grade_label(grade),
                        None,
                    ))

                    div class="field slider" {
                        div class="slider-head" {
                            label class="field-label" for="yr-age" { "Year built" }
                            span id="age-label" class="slider-badge" { (age_badge) }
                        }
                        input
                            type="range"
                            id="yr-age"
                            name="yr_built"
                            min=(OLDEST_YEAR)
                            max=(vm.current_year)
                            step="1"
                            value=(year_built);
                        p id="age-hint" class="field-hint" { (age_hint) }
                    }

                    div class="field" {
                        label class="field-label" for="yr-renovated" { "Year renovated (optional)" }
                        input
                            type="number"
                            id="yr-renovated"
                            name="yr_renovated"
                            min=(OLDEST_YEAR)
                            max=(vm.current_year)
                            value=(opt_value(input.year_renovated));
                    }
                }))

                (card("Extras", html! {
                    div class="field" {
                        label class="field-label" for="view" { "View" }
                        select id="view" name="view" {
                            @for (score, name) in VIEW_OPTIONS {
                                option value=(score) selected[i64::from(score) == view] { (name) }
                            }
                        }
                    }

                    label class="switch" {
                        input type="checkbox" id="waterfront" name="waterfront" value="1" checked[input.waterfront];
                        span { "Waterfront" }
                    }

                    label class="switch" {
                        input type="checkbox" id="has-basement" name="has_basement" checked[has_basement];
                        span { "Has basement" }
                    }
                    div id="basement-reveal" class="field" hidden[!has_basement] {
                        label class="field-label" for="sqft-basement" { "Basement area (m²)" }
                        input
                            type="number"
                            id="sqft-basement"
                            name="sqft_basement"
                            min="0"
                            step="any"
                            value=(opt_value(input.basement_area_m2));
                    }

                    div class="field" {
                        label class="field-label" for="sqft-lot" { "Lot area (m², optional)" }
                        input type="number" id="sqft-lot" name="sqft_lot" min="0" step="any"
                            value=(opt_value(input.lot_area_m2));
                    }
                    div class="field" {
                        label class="field-label" for="sqft-above" { "Above-ground area (m², optional)" }
                        input type="number" id="sqft-above" name="sqft_above" min="0" step="any"
                            value=(opt_value(input.above_area_m2));
                    }

                    details class="field" {
                        summary { "Exact location" }
                        input type="number" name="lat" step="any" placeholder="47.5112"
                            aria-label="Latitude" value=(opt_value(input.latitude));
                        input type="number" name="long" step="any" placeholder="-122.2571"
                            aria-label="Longitude" value=(opt_value(input.longitude));
                    }
                }))

                button type="submit" class="primary cta" { "Get my valuation" }
            }

            (toast(vm.toast))
        },
    )
}
