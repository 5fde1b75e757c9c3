use crate::domain::analysis::{month_labels, MarketAnalysis};
use crate::domain::ValuationReport;
use crate::errors::{ResultResp, ServerError};
use crate::format;
use crate::responses::xlsx_response;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

fn xlsx_err(what: &str) -> impl Fn(XlsxError) -> ServerError + '_ {
    move |e| ServerError::XlsxError(format!("Failed to write {what}: {e}"))
}

/// Two sheets: a field/value summary and the monthly price history.
pub fn build_report_workbook(
    report: &ValuationReport,
    analysis: &MarketAnalysis,
) -> Result<Vec<u8>, ServerError> {
    let result = &report.result;
    let property = &report.property;

    let mut summary = Worksheet::new();
    summary.set_name("Valuation").map_err(xlsx_err("sheet name"))?;

    let text_rows: [(&str, String); 6] = [
        ("Report ID", report.id.clone()),
        ("Created", report.created_at.to_rfc3339()),
        (
            "Price range",
            format::currency_range(result.price_range.min, result.price_range.max),
        ),
        ("Confidence", result.confidence.label().to_string()),
        ("Market", result.market_message.clone()),
        (
            "Zipcode",
            property.zipcode.clone().unwrap_or_default(),
        ),
    ];

    let number_rows: [(&str, f64); 10] = [
        ("Minimum price", result.price_range.min as f64),
        ("Estimated price", result.price_range.mid as f64),
        ("Maximum price", result.price_range.max as f64),
        ("Margin of error (%)", result.margin_error_pct),
        ("Market temperature", result.market_temperature),
        ("Zone average price", result.zone_average_price as f64),
        ("Vs zone (%)", result.vs_zone_percent as f64),
        ("Annual trend (%)", result.annual_trend_pct),
        ("Living area (sqft)", property.living_area.round()),
        (
            "Price per sqft",
            analysis.price_per_sqft.unwrap_or_default() as f64,
        ),
    ];

    summary.write_string(0, 0, "Field").map_err(xlsx_err("header"))?;
    summary.write_string(0, 1, "Value").map_err(xlsx_err("header"))?;

    let mut row = 1u32;
    for (label, value) in &text_rows {
        summary.write_string(row, 0, *label).map_err(xlsx_err(label))?;
        summary.write_string(row, 1, value).map_err(xlsx_err(label))?;
        row += 1;
    }
    for (label, value) in &number_rows {
        summary.write_string(row, 0, *label).map_err(xlsx_err(label))?;
        summary.write_number(row, 1, *value).map_err(xlsx_err(label))?;
        row += 1;
    }

    let mut history = Worksheet::new();
    history.set_name("History").map_err(xlsx_err("sheet name"))?;
    history.write_string(0, 0, "Month").map_err(xlsx_err("header"))?;
    history.write_string(0, 1, "Price").map_err(xlsx_err("header"))?;

    let labels = month_labels(analysis.history.len());
    for (i, (label, price)) in labels.iter().zip(&analysis.history).enumerate() {
        let r = (i + 1) as u32;
        history.write_string(r, 0, *label).map_err(xlsx_err("month"))?;
        history.write_number(r, 1, *price).map_err(xlsx_err("price"))?;
    }

    let mut workbook = Workbook::new();
    workbook.push_worksheet(summary);
    workbook.push_worksheet(history);

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}

pub fn export_report_xlsx(report: &ValuationReport, analysis: &MarketAnalysis) -> ResultResp {
    let buffer = build_report_workbook(report, analysis)?;
    xlsx_response(buffer, &format!("valuation_{}.xlsx", report.id))
}
