mod client;
mod models;
mod remote_error;

pub use client::ValuationClient;
pub use models::{RemoteValuation, ValuationPayload};
pub use remote_error::RemoteError;
