use crate::domain::analysis::{month_labels, MarketAnalysis, MONTHLY_CHANGE_PCT};
use crate::domain::ValuationReport;
use crate::format;
use crate::forms::FormFields;
use crate::navigation::Step;
use crate::templates::components::share::share_text;
use crate::templates::components::{carry_form, impacts_list, price_chart, toast};
use crate::templates::layouts::app::BACK_FORM_ID;
use crate::templates::pages::valuation::{report_actions, REPORT_FORM_ID};
use crate::templates::{app_layout, card};
use maud::{html, Markup};

pub struct AnalysisVm<'a> {
    pub report: &'a ValuationReport,
    pub analysis: &'a MarketAnalysis,
    pub fields: &'a FormFields,
}

pub fn analysis_page(vm: &AnalysisVm) -> Markup {
    let result = &vm.report.result;
    let analysis = vm.analysis;
    let range = format::currency_range(result.price_range.min, result.price_range.max);
    let labels = month_labels(analysis.history.len());

    let price_per_sqft = analysis
        .price_per_sqft
        .map(|p| format!("${p}/sqft"))
        .unwrap_or_else(|| "—".to_string());

    app_layout(
        Step::Analysis,
        Some(&share_text(&range)),
        html! {
            (carry_form(BACK_FORM_ID, Step::Valuation.action(), vm.fields))
            (carry_form(REPORT_FORM_ID, "/report", vm.fields))

            section class="hero" {
                p class="hero-label" { "Estimated price" }
                p id="analysis-price" class="hero-price" { (format::currency(result.price_range.mid as f64)) }
                div class="chips" {
                    span id="analysis-conf-chip" class="chip" { (result.confidence.label()) " Confidence" }
                    span id="monthly-change" class="chip positive" { (format::signed_pct(MONTHLY_CHANGE_PCT)) " this month" }
                }
                p class="hero-note" {
                    "Margin of error ±" span id="margin-pct" { (format!("{:.1}", result.margin_error_pct)) } "%"
                }
            }

            (card("Price trend", html! {
                (price_chart(&analysis.history, &labels))
            }))

            div class="kpis" {
                div class="kpi" {
                    span class="kpi-label" { "Price per area" }
                    span id="price-per-sqft" class="kpi-value" { (price_per_sqft) }
                }
                div class="kpi" {
                    span class="kpi-label" { "Trend" }
                    span id="kpi-trend" class="kpi-value positive" { (format::signed_pct(result.annual_trend_pct)) " annual" }
                }
            }

            section class="alert" {
                span class="material-symbols-rounded" { "trending_up" }
                div {
                    p id="alert-title" class="alert-title" { (analysis.alert.title()) }
                    p id="alert-desc" class="alert-desc" { (analysis.alert.description()) }
                }
            }

            (card("What moves your price", impacts_list(&analysis.impacts)))

            (card("Neighbourhood", html! {
                p id="neighborhood-text" {
                    (analysis.similar_sold) " similar properties sold recently"
                }
            }))

            (report_actions(&range))
            (toast(None))
        },
    )
}
