// config.rs
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::scraper::RetryPolicy;

const SEARCH_URL: &str = "https://www.property24.com/for-sale/advanced-search/results?sp=cid%3d767%2c3%2c7%2c8%2c5%26pf%3d300000%26pt%3d700000&PropertyCategory=House%2cApartmentOrFlat";
const SITE_ORIGIN: &str = "https://www.property24.com";
const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Every tunable the app needs. There is no config file or env layer: the
/// defaults are the configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub scrape: ScrapeConfig,
    pub data_file: PathBuf,
    pub bind_addr: SocketAddr,
    pub geocoder: GeocoderConfig,
    pub map: MapConfig,
}

#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub base_url: String,
    pub site_origin: String,
    pub region: String,
    pub start_page: u32,
    pub end_page: u32,
    pub timeout: Duration,
    pub retry: RetryPolicy,
}

#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    pub endpoint: String,
    pub user_agent: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, Copy)]
pub struct MapConfig {
    pub center: (f64, f64),
    pub zoom: u8,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scrape: ScrapeConfig::default(),
            data_file: PathBuf::from("data/property24_listings.csv"),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            geocoder: GeocoderConfig::default(),
            map: MapConfig::default(),
        }
    }
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: SEARCH_URL.to_string(),
            site_origin: SITE_ORIGIN.to_string(),
            region: "Gauteng".to_string(),
            start_page: 1,
            // Limit for scrape speed
            end_page: 10,
            timeout: Duration::from_secs(10),
            retry: RetryPolicy::default(),
        }
    }
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            endpoint: NOMINATIM_URL.to_string(),
            user_agent: "property24_app".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        // Centred on South Africa
        Self {
            center: (-30.0, 25.0),
            zoom: 5,
        }
    }
}
