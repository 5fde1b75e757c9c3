// src/forms.rs

use crate::errors::ServerError;
use astra::Request;
use std::io::Read;

/// Decoded `application/x-www-form-urlencoded` pairs, kept in submission order
/// so they can be echoed back into hidden fields unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    pub fn from_urlencoded(bytes: &[u8]) -> Self {
        Self(url::form_urlencoded::parse(bytes).into_owned().collect())
    }

    pub fn from_query(req: &Request) -> Self {
        req.uri()
            .query()
            .map(|q| Self::from_urlencoded(q.as_bytes()))
            .unwrap_or_default()
    }

    /// Reads and decodes the whole request body.
    pub fn from_body(req: &mut Request) -> Result<Self, ServerError> {
        let bytes = read_body(req)?;
        Ok(Self::from_urlencoded(&bytes))
    }

    /// First value submitted under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_checked(&self, key: &str) -> bool {
        matches!(self.get(key), Some(v) if !v.is_empty() && v != "0")
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

pub fn read_body(req: &mut Request) -> Result<Vec<u8>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("Failed to read request body: {e}")))?;
    Ok(buf)
}
