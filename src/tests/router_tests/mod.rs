mod analysis_tests;
mod api_tests;
mod form_tests;
mod valuation_tests;

/// 100 m² median home, submitted the way the step 1 form does it.
pub const MEDIAN_FORM: &str =
    "sqft_living=100&bedrooms=3&bathrooms=2&floors=1&condition=3&grade=7&view=0&zipcode=98103";
