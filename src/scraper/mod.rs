mod extract;
mod scraper;
mod scraper_error;
mod transport;

pub use self::extract::ListingExtractor;
pub use self::scraper::{Property24Scraper, RetryPolicy};
pub use self::scraper_error::{ExtractError, ScraperError};
pub use self::transport::{Fetch, HttpFetcher};
