use crate::domain::ValuationReport;
use crate::format;
use crate::forms::FormFields;
use crate::navigation::Step;
use crate::templates::components::{carry_form, toast};
use crate::templates::components::share::{contact_mailto, share_text};
use crate::templates::layouts::app::BACK_FORM_ID;
use crate::templates::{app_layout, card};
use maud::{html, Markup};

pub const ANALYSIS_FORM_ID: &str = "analysis-form";
pub const REPORT_FORM_ID: &str = "report-form";

pub struct ValuationVm<'a> {
    pub report: &'a ValuationReport,
    /// The submitted property form, carried to the next screens.
    pub fields: &'a FormFields,
}

/// "6% above" / "3% below"
pub fn vs_zone_text(vs_zone_percent: i64) -> String {
    let side = if vs_zone_percent >= 0 { "above" } else { "below" };
    format!("{}% {side}", vs_zone_percent.abs())
}

/// Report actions shared by the result and analysis screens.
pub fn report_actions(range: &str) -> Markup {
    html! {
        div class="actions" {
            a class="button secondary" href=(contact_mailto(range)) {
                span class="material-symbols-rounded" { "mail" }
                "Contact an expert"
            }
            button type="submit" class="button secondary" form=(REPORT_FORM_ID) {
                span class="material-symbols-rounded" { "download" }
                "Save report"
            }
            button type="button" class="button ghost" data-action="print" {
                span class="material-symbols-rounded" { "print" }
                "Print"
            }
        }
    }
}

pub fn valuation_page(vm: &ValuationVm) -> Markup {
    let result = &vm.report.result;
    let range = format::currency_range(result.price_range.min, result.price_range.max);
    let trend_class = if result.annual_trend_pct >= 0.0 {
        "stat-value positive"
    } else {
        "stat-value negative"
    };

    app_layout(
        Step::Valuation,
        Some(&share_text(&range)),
        html! {
            (carry_form(BACK_FORM_ID, Step::Property.action(), vm.fields))
            (carry_form(ANALYSIS_FORM_ID, Step::Analysis.action(), vm.fields))
            (carry_form(REPORT_FORM_ID, "/report", vm.fields))

            section class="hero" {
                p class="hero-label" { "Estimated value" }
                p id="price-range" class="hero-price" { (range) }
                div id="confidence-badge" class="confidence" {
                    span class="material-symbols-rounded confidence-icon" style=(format!("color: {}", result.confidence.color())) {
                        "verified"
                    }
                    span { "Confidence: " span id="confidence-text" { (result.confidence.label()) } }
                }
            }

            (card("Market temperature", html! {
                div class="thermometer" {
                    div class="thermometer-bar" {
                        div id="market-dot" class="thermometer-dot" style=(format!("left: {}%", result.market_temperature)) {}
                    }
                    div class="thermometer-scale" {
                        span { "Cold" } span { "Balanced" } span { "Hot" }
                    }
                }
                p id="market-text" { (result.market_message) }
            }))

            (card("Your area", html! {
                div class="stats" {
                    div class="stat" {
                        span class="stat-label" { "Zone average" }
                        span id="zone-avg-price" class="stat-value" { (format::currency(result.zone_average_price as f64)) }
                    }
                    div class="stat" {
                        span class="stat-label" { "Annual trend" }
                        span id="annual-trend" class=(trend_class) { (format::signed_pct(result.annual_trend_pct)) }
                    }
                }
                p class="note" {
                    "Your property is "
                    strong id="vs-zone" { (vs_zone_text(result.vs_zone_percent)) }
                    " the zone average."
                }
            }))

            button id="view-analysis-btn" type="submit" class="primary cta" form=(ANALYSIS_FORM_ID) {
                "View market analysis"
            }

            (report_actions(&range))
            (toast(None))
        },
    )
}
