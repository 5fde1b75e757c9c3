// responses/xlsx.rs
use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Workbook bytes as a download. Report ids can come from the pricing
/// service, so the filename is reduced to a header-safe charset.
pub fn xlsx_response(buffer: Vec<u8>, filename: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", XLSX_CONTENT_TYPE)
        .header(
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", safe_filename(filename)),
        )
        .body(Body::from(buffer))
        .map_err(|_| ServerError::InternalError)
}

fn safe_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
