// src/store/bootstrap.rs
use crate::domain::{Listing, ListingTable};
use crate::store::flat_file::{read_listings, write_listings};
use std::fs;
use std::path::Path;
use tracing::{error, info, warn};

/// What happened at startup, shown as a banner on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadNotice {
    Loaded { rows: usize },
    Scraped { rows: usize },
    /// Listings are served but the next start will scrape again.
    ScrapedNotSaved { rows: usize, error: String },
    NothingScraped,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

impl LoadNotice {
    pub fn level(&self) -> NoticeLevel {
        match self {
            LoadNotice::Loaded { .. } => NoticeLevel::Info,
            LoadNotice::Scraped { .. } => NoticeLevel::Success,
            LoadNotice::ScrapedNotSaved { .. }
            | LoadNotice::NothingScraped
            | LoadNotice::Failed(_) => NoticeLevel::Error,
        }
    }

    pub fn message(&self) -> String {
        match self {
            LoadNotice::Loaded { rows } => format!("🔄 Loaded {rows} listings from existing data."),
            LoadNotice::Scraped { rows } => format!("✅ Scraped and saved {rows} listings."),
            LoadNotice::ScrapedNotSaved { rows, error } => {
                format!("❌ Scraped {rows} listings but could not save them: {error}")
            }
            LoadNotice::NothingScraped => {
                "❌ No data scraped. Check connection or scraping logic.".to_string()
            }
            LoadNotice::Failed(msg) => format!("❌ Could not load listings: {msg}"),
        }
    }
}

/// The table the dashboard serves, yields already applied.
#[derive(Debug)]
pub struct Loaded {
    pub table: ListingTable,
    pub notice: LoadNotice,
}

/// Reuse the data file when it holds something, otherwise run `scrape` and
/// save whatever it returns. Never fails: problems degrade to an empty table
/// plus an error notice.
pub fn load_or_scrape<S>(path: &Path, scrape: S) -> Loaded
where
    S: FnOnce() -> Vec<Listing>,
{
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(dir) {
            warn!(dir = %dir.display(), error = %e, "could not create data directory");
        }
    }

    // A zero-byte file is a leftover from an aborted write
    if fs::metadata(path).map(|m| m.len() == 0).unwrap_or(false) {
        warn!(path = %path.display(), "removing empty data file");
        if let Err(e) = fs::remove_file(path) {
            warn!(error = %e, "could not remove empty data file");
        }
    }

    let (mut table, notice) = if path.exists() {
        info!(path = %path.display(), "🔄 Loading existing data");
        match read_listings(path) {
            Ok(table) => {
                let rows = table.len();
                (table, LoadNotice::Loaded { rows })
            }
            Err(e) => {
                error!(error = %e, "failed to read data file");
                (ListingTable::empty(), LoadNotice::Failed(e.to_string()))
            }
        }
    } else {
        info!("⏳ No saved data, scraping Property24");
        let rows = scrape();
        if rows.is_empty() {
            error!("no listings scraped");
            (ListingTable::empty(), LoadNotice::NothingScraped)
        } else {
            let count = rows.len();
            let notice = match write_listings(path, &rows) {
                Ok(()) => LoadNotice::Scraped { rows: count },
                Err(e) => {
                    error!(error = %e, "failed to save scraped listings");
                    LoadNotice::ScrapedNotSaved {
                        rows: count,
                        error: e.to_string(),
                    }
                }
            };
            (ListingTable::new(rows), notice)
        }
    };

    table.apply_yields();
    Loaded { table, notice }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir()
            .join(format!("p24_bootstrap_{name}_{nanos}"))
            .join("listings.csv")
    }

    fn scraped() -> Vec<Listing> {
        vec![Listing {
            title: Some("Flat".into()),
            price: Some(400_000),
            suburb: Some("Alberton".into()),
            city: Some("Gauteng".into()),
            monthly_rent: Some(2_000),
            ..Default::default()
        }]
    }

    #[test]
    fn scrapes_and_saves_when_file_missing() {
        let path = temp_path("missing");
        let loaded = load_or_scrape(&path, scraped);

        assert_eq!(loaded.notice, LoadNotice::Scraped { rows: 1 });
        assert!(path.exists());
        assert_eq!(loaded.table.rows()[0].yield_pct, Some(6.0));

        // Second start reuses the file and never calls the scraper
        let again = load_or_scrape(&path, || panic!("should not scrape"));
        assert_eq!(again.notice, LoadNotice::Loaded { rows: 1 });
        assert_eq!(again.table.rows()[0].title.as_deref(), Some("Flat"));
    }

    #[test]
    fn empty_file_is_replaced_by_a_scrape() {
        let path = temp_path("empty");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "").unwrap();

        let loaded = load_or_scrape(&path, scraped);
        assert_eq!(loaded.notice, LoadNotice::Scraped { rows: 1 });
    }

    #[test]
    fn unwritable_data_path_reports_unsaved_scrape() {
        // Parent of the data file is a regular file, so nothing can be written
        let path = temp_path("unwritable");
        let blocker = path.parent().unwrap().to_path_buf();
        fs::create_dir_all(blocker.parent().unwrap()).unwrap();
        fs::write(&blocker, "not a directory").unwrap();

        let loaded = load_or_scrape(&path, scraped);

        assert!(matches!(
            loaded.notice,
            LoadNotice::ScrapedNotSaved { rows: 1, .. }
        ));
        assert_eq!(loaded.notice.level(), NoticeLevel::Error);
        assert!(!loaded.notice.message().contains("saved 1"));
        assert_eq!(loaded.table.len(), 1);
        assert!(!path.exists());
    }

    #[test]
    fn empty_scrape_gives_empty_table_and_error() {
        let path = temp_path("nothing");
        let loaded = load_or_scrape(&path, Vec::new);

        assert_eq!(loaded.notice, LoadNotice::NothingScraped);
        assert_eq!(loaded.notice.level(), NoticeLevel::Error);
        assert!(loaded.table.is_empty());
        assert!(!path.exists());
    }
}
