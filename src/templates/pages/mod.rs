pub mod analysis;
pub mod property_form;
pub mod valuation;

pub use analysis::{analysis_page, AnalysisVm};
pub use property_form::{property_form_page, PropertyFormVm};
pub use valuation::{valuation_page, ValuationVm};
