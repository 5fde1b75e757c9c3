// Share & contact

pub const EXPERT_EMAIL: &str = "expert@maia.app";

pub fn share_text(price_range: &str) -> String {
    format!("My property is valued at {price_range} according to MAIA.")
}

/// `mailto:` link asking an expert for a formal appraisal.
pub fn contact_mailto(price_range: &str) -> String {
    let subject = "Request a professional appraisal";
    let body = format!(
        "Hello, I'm interested in an official appraisal. My MAIA estimate is: {price_range}"
    );
    format!(
        "mailto:{EXPERT_EMAIL}?subject={}&body={}",
        mailto_encode(subject),
        mailto_encode(&body)
    )
}

// form_urlencoded turns spaces into '+', which mail clients show literally.
// A literal '+' is already emitted as %2B, so swapping is safe.
fn mailto_encode(s: &str) -> String {
    url::form_urlencoded::byte_serialize(s.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
