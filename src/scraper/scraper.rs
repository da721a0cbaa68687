// scraper.rs
use crate::config::ScrapeConfig;
use crate::domain::Listing;
use crate::scraper::{ExtractError, Fetch, HttpFetcher, ListingExtractor, ScraperError};
use rand::Rng;
use std::ops::RangeInclusive;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Per-page retry schedule: a random polite delay before every attempt, and
/// `backoff_base * 2^attempt` after every failed one.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub backoff_base: Duration,
    pub polite_delay: RangeInclusive<Duration>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            backoff_base: Duration::from_secs(1),
            polite_delay: Duration::from_secs(1)..=Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// Same attempt count, no sleeping.
    #[cfg(test)]
    pub fn immediate() -> Self {
        Self {
            attempts: 3,
            backoff_base: Duration::ZERO,
            polite_delay: Duration::ZERO..=Duration::ZERO,
        }
    }

    fn backoff(&self, attempt: u32) -> Duration {
        self.backoff_base * 2u32.saturating_pow(attempt)
    }

    fn polite_delay(&self) -> Duration {
        let (lo, hi) = (*self.polite_delay.start(), *self.polite_delay.end());
        if hi <= lo {
            return lo;
        }
        rand::thread_rng().gen_range(lo..=hi)
    }
}

/// A tile that was dropped during extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct FailedRecord {
    pub page: u32,
    pub reason: ExtractError,
}

/// Everything a scrape pass produced.
#[derive(Debug, Default)]
pub struct ScrapeReport {
    pub listings: Vec<Listing>,
    pub pages_fetched: Vec<u32>,
    pub pages_skipped: Vec<u32>,
    pub failed_records: Vec<FailedRecord>,
}

pub struct Property24Scraper<F = HttpFetcher> {
    fetcher: F,
    extractor: ListingExtractor,
    base_url: String,
    pages: RangeInclusive<u32>,
    retry: RetryPolicy,
}

impl Property24Scraper<HttpFetcher> {
    pub fn new(config: &ScrapeConfig) -> Result<Self, ScraperError> {
        let fetcher = HttpFetcher::new(config.timeout)?;
        Self::with_fetcher(config, fetcher)
    }
}

impl<F: Fetch> Property24Scraper<F> {
    pub fn with_fetcher(config: &ScrapeConfig, fetcher: F) -> Result<Self, ScraperError> {
        Ok(Self {
            fetcher,
            extractor: ListingExtractor::new(&config.site_origin, config.region.clone())?,
            base_url: config.base_url.clone(),
            pages: config.start_page..=config.end_page,
            retry: config.retry.clone(),
        })
    }

    pub fn page_url(&self, page: u32) -> String {
        format!("{}&Page={page}", self.base_url)
    }

    /// Fetch one results page. `None` once every attempt has failed.
    pub fn fetch_page(&self, page: u32) -> Option<String> {
        let url = self.page_url(page);

        for attempt in 0..self.retry.attempts {
            std::thread::sleep(self.retry.polite_delay());
            let start = Instant::now();

            match self.fetcher.get(&url) {
                Ok(html) => {
                    debug!(page, attempt, elapsed = ?start.elapsed(), "page fetched");
                    return Some(html);
                }
                Err(e) => {
                    warn!(page, attempt, error = %e, "⚠️ page fetch failed");
                    std::thread::sleep(self.retry.backoff(attempt));
                }
            }
        }

        None
    }

    /// Walk the page range and collect every listing that extracts cleanly.
    pub fn scrape(&self) -> ScrapeReport {
        let mut report = ScrapeReport::default();

        for page in self.pages.clone() {
            info!(page, url = %self.page_url(page), "📄 Scraping page");

            let Some(html) = self.fetch_page(page) else {
                warn!(page, "skipping page after {} failed attempts", self.retry.attempts);
                report.pages_skipped.push(page);
                continue;
            };
            report.pages_fetched.push(page);

            let mut parsed = 0;
            for result in self.extractor.extract_page(&html) {
                match result {
                    Ok(listing) => {
                        parsed += 1;
                        report.listings.push(listing);
                    }
                    Err(reason) => {
                        warn!(page, error = %reason, "❌ Error parsing listing");
                        report.failed_records.push(FailedRecord { page, reason });
                    }
                }
            }
            info!(page, listings = parsed, "✅ Page parsed");
        }

        info!(
            listings = report.listings.len(),
            fetched = report.pages_fetched.len(),
            skipped = report.pages_skipped.len(),
            failed = report.failed_records.len(),
            "Scrape complete"
        );
        report
    }
}
