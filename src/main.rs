use crate::config::AppConfig;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use tracing_subscriber::EnvFilter;

mod config;
mod domain;
mod errors;
mod format;
mod forms;
mod navigation;
mod remote;
mod responses;
mod router;
mod spreadsheets;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("valuation_simple=info")),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    let state = match AppState::new(config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("could not set up the pricing client: {e}");
            std::process::exit(1);
        }
    };

    let addr = state.config.bind_addr;
    tracing::info!(
        %addr,
        remote = state.valuer.is_remote(),
        reference_year = state.config.reference_year,
        "starting server at http://{addr}"
    );

    let server = Server::bind(&addr).max_workers(state.config.max_workers);

    let result = server.serve(move |req: astra::Request, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_string();
        tracing::debug!(%method, %path, "request");

        match handle(req, &state) {
            Ok(resp) => resp,
            Err(err) => {
                if err.status() >= 500 {
                    tracing::error!(%method, %path, error = %err, "request failed");
                } else {
                    tracing::debug!(%method, %path, error = %err, "request rejected");
                }
                templates::html_error_response(err)
            }
        }
    });

    if let Err(e) = result {
        tracing::error!("server ended with error: {e}");
    }

    tracing::info!("server shut down cleanly");
}
