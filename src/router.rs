use crate::domain::analysis::month_labels;
use crate::domain::history::{self, MAX_POINT_COUNT};
use crate::domain::{PropertyInput, ValuationReport};
use crate::errors::{ResultResp, ServerError};
use crate::forms::{read_body, FormFields};
use crate::responses::{
    asset_response, html_response, html_response_with_status, json_error_response, json_response,
};
use crate::spreadsheets::export_report_xlsx;
use crate::state::AppState;
use crate::templates::pages::{
    analysis_page, property_form_page, valuation_page, AnalysisVm, PropertyFormVm, ValuationVm,
};
use astra::Request;
use serde::Serialize;

pub const VALUATION_FAILED_TOAST: &str = "We couldn't get your valuation. Please try again.";

const KNOWN_PATHS: [&str; 7] = [
    "/",
    "/edit",
    "/valuation",
    "/analysis",
    "/report",
    "/api/history",
    "/api/valuation",
];

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => property_form(state, &FormFields::default(), None, 200),
        ("POST", "/edit") => {
            let fields = FormFields::from_body(&mut req)?;
            property_form(state, &fields, None, 200)
        }
        ("POST", "/valuation") => valuation(&mut req, state),
        ("POST", "/analysis") => analysis(&mut req, state),
        ("POST", "/report") => report(&mut req, state),

        ("GET", "/api/history") => api_history(&req, state),
        ("POST", "/api/valuation") => {
            Ok(api_valuation(&mut req, state).unwrap_or_else(|e| json_error_response(&e)))
        }

        ("GET", p) if p.starts_with("/static/") => asset_response(p),
        (_, p) if KNOWN_PATHS.contains(&p) => Err(ServerError::MethodNotAllowed),
        _ => Err(ServerError::NotFound),
    }
}

/// Step 1, pre-filled from whatever form fields were carried back.
fn property_form(
    state: &AppState,
    fields: &FormFields,
    toast: Option<&str>,
    status: u16,
) -> ResultResp {
    let current_year = state.current_year();
    let page = property_form_page(&PropertyFormVm {
        input: &PropertyInput::from_form(fields, current_year),
        has_basement: fields.is_checked("has_basement"),
        current_year,
        toast,
    });
    html_response_with_status(status, page)
}

/// Parses the submitted property form and values it.
fn value_form(
    req: &mut Request,
    state: &AppState,
) -> Result<(FormFields, Result<ValuationReport, ServerError>), ServerError> {
    let fields = FormFields::from_body(req)?;
    let input = PropertyInput::from_form(&fields, state.current_year());
    let report = state.value(&input.normalize()).map_err(ServerError::from);
    Ok((fields, report))
}

fn valuation(req: &mut Request, state: &AppState) -> ResultResp {
    let (fields, report) = value_form(req, state)?;

    match report {
        Ok(report) => html_response(valuation_page(&ValuationVm {
            report: &report,
            fields: &fields,
        })),
        Err(err) => {
            // Keep the user's answers and let them retry.
            tracing::warn!(error = %err, "valuation failed");
            property_form(state, &fields, Some(VALUATION_FAILED_TOAST), err.status())
        }
    }
}

fn analysis(req: &mut Request, state: &AppState) -> ResultResp {
    let (fields, report) = value_form(req, state)?;
    let report = report?;
    let analysis = state.analyze(&report);

    html_response(analysis_page(&AnalysisVm {
        report: &report,
        analysis: &analysis,
        fields: &fields,
    }))
}

fn report(req: &mut Request, state: &AppState) -> ResultResp {
    let (_, report) = value_form(req, state)?;
    let report = report?;
    let analysis = state.analyze(&report);

    tracing::info!(id = %report.id, "exporting valuation report");
    export_report_xlsx(&report, &analysis)
}

#[derive(Debug, Serialize)]
struct HistoryBody {
    points: Vec<f64>,
    labels: Vec<&'static str>,
}

fn api_history(req: &Request, state: &AppState) -> ResultResp {
    let query = FormFields::from_query(req);

    let price = query
        .get("price")
        .ok_or_else(|| ServerError::BadRequest("missing price".into()))?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .ok_or_else(|| ServerError::BadRequest("price must be a number".into()))?;

    let points = match query.get("points") {
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .map_err(|_| ServerError::BadRequest("points must be a whole number".into()))?,
        None => state.config.history_points,
    }
    .min(MAX_POINT_COUNT);

    json_response(
        200,
        &HistoryBody {
            points: history::generate(price, points),
            labels: month_labels(points),
        },
    )
}

fn api_valuation(req: &mut Request, state: &AppState) -> ResultResp {
    let body = read_body(req)?;
    let input: PropertyInput = serde_json::from_slice(&body)
        .map_err(|e| ServerError::BadRequest(format!("invalid property JSON: {e}")))?;

    let report = state.value(&input.normalize())?;
    json_response(200, &report)
}
