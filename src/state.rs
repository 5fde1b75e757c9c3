// src/state.rs

use crate::config::AppConfig;
use crate::domain::analysis::{self, MarketAnalysis};
use crate::domain::valuation::assemble;
use crate::domain::{Estimator, PropertyAttributes, ValuationReport};
use crate::remote::{RemoteError, ValuationClient, ValuationPayload};
use chrono::{Datelike, Utc};

/// Where valuations come from.
pub enum Valuer {
    /// Heuristic estimator, no network.
    Local(Estimator),
    /// Remote pricing service.
    Remote(ValuationClient),
}

impl Valuer {
    pub fn value(&self, attrs: &PropertyAttributes) -> Result<ValuationReport, RemoteError> {
        match self {
            Valuer::Local(estimator) => {
                let mid = estimator.estimate(attrs);
                Ok(ValuationReport::new(
                    "local",
                    assemble(attrs, mid),
                    attrs.clone(),
                ))
            }
            Valuer::Remote(client) => {
                let remote = client.request_valuation(&ValuationPayload::from(attrs))?;
                let id = remote.id.clone();
                let mut report = ValuationReport::new("remote", remote.into_result(), attrs.clone());
                if let Some(id) = id {
                    report.id = id;
                }
                Ok(report)
            }
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Valuer::Remote(_))
    }
}

/// Everything a request handler needs. Built once at startup and shared
/// read-only by all workers.
pub struct AppState {
    pub config: AppConfig,
    pub valuer: Valuer,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, RemoteError> {
        let valuer = if config.use_remote {
            Valuer::Remote(ValuationClient::new(
                config.api_base.clone(),
                config.remote_timeout,
            )?)
        } else {
            Valuer::Local(Estimator::new(config.reference_year))
        };

        Ok(Self { config, valuer })
    }

    pub fn value(&self, attrs: &PropertyAttributes) -> Result<ValuationReport, RemoteError> {
        let report = self.valuer.value(attrs)?;
        tracing::info!(
            id = %report.id,
            mid = report.result.price_range.mid,
            confidence = report.result.confidence.label(),
            "valuation computed"
        );
        Ok(report)
    }

    pub fn analyze(&self, report: &ValuationReport) -> MarketAnalysis {
        analysis::analyze(report, self.config.reference_year, self.config.history_points)
    }

    /// Upper bound of the age slider.
    pub fn current_year(&self) -> i32 {
        Utc::now().year()
    }
}
