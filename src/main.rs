use crate::config::AppConfig;
use crate::geo::NominatimGeocoder;
use crate::router::{handle, AppState};
use crate::scraper::Property24Scraper;
use crate::store::load_or_scrape;
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod domain;
mod errors;
mod geo;
mod responses;
mod router;
mod scraper;
mod spreadsheets;
mod store;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::default();

    // 1️⃣ Load saved listings, or scrape fresh ones
    let loaded = load_or_scrape(&config.data_file, || {
        match Property24Scraper::new(&config.scrape) {
            Ok(scraper) => scraper.scrape().listings,
            Err(e) => {
                error!(error = %e, "scraper init failed");
                Vec::new()
            }
        }
    });
    info!(rows = loaded.table.len(), notice = ?loaded.notice, "listings ready");

    let state = AppState {
        table: loaded.table,
        notice: loaded.notice,
        geocoder: Box::new(NominatimGeocoder::new(&config.geocoder)),
        map: config.map,
    };

    // 2️⃣ Serve the dashboard, one request at a time
    let addr = config.bind_addr;
    info!("Starting dashboard at http://{addr}");

    let server = Server::bind(&addr).max_workers(1);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
