use thiserror::Error;

/// Failures of a single HTTP attempt. All of them are retried the same way.
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP status {status} for {url}")]
    Status { status: u16, url: String },
    #[error("Client config error: {0}")]
    Config(String),
    #[error("Bad selector '{0}'")]
    Selector(String),
}

/// Why a single listing tile was dropped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtractError {
    #[error("price digits '{0}' do not fit an integer")]
    PriceOverflow(String),
}
