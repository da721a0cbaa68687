use crate::config::GeocoderConfig;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Place string in, coordinates out. Failures of any kind are `None`.
pub trait Geocoder {
    fn geocode(&self, place: &str) -> Option<Coordinates>;
}

/// Nominatim API response for geocoding
#[derive(Debug, Deserialize)]
struct NominatimResponse {
    lat: String,
    lon: String,
}

/// Geocodes through Nominatim (OpenStreetMap). No retries.
pub struct NominatimGeocoder {
    client: Option<Client>,
    endpoint: String,
}

impl NominatimGeocoder {
    pub fn new(config: &GeocoderConfig) -> Self {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()
            .map_err(|e| warn!(error = %e, "geocoder client unavailable, map will be empty"))
            .ok();

        Self {
            client,
            endpoint: config.endpoint.clone(),
        }
    }

    fn lookup(&self, place: &str) -> Result<Option<Coordinates>, String> {
        let client = self.client.as_ref().ok_or("no HTTP client")?;
        let url = Url::parse_with_params(
            &self.endpoint,
            &[("q", place), ("format", "json"), ("limit", "1")],
        )
        .map_err(|e| e.to_string())?;

        let results: Vec<NominatimResponse> = client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| e.to_string())?
            .json()
            .map_err(|e| e.to_string())?;

        let Some(first) = results.first() else {
            return Ok(None);
        };

        let latitude = first.lat.parse::<f64>().map_err(|e| e.to_string())?;
        let longitude = first.lon.parse::<f64>().map_err(|e| e.to_string())?;
        Ok(Some(Coordinates {
            latitude,
            longitude,
        }))
    }
}

impl Geocoder for NominatimGeocoder {
    fn geocode(&self, place: &str) -> Option<Coordinates> {
        match self.lookup(place) {
            Ok(coords) => {
                debug!(place, ?coords, "geocoded");
                coords
            }
            Err(e) => {
                warn!(place, error = %e, "geocoding failed");
                None
            }
        }
    }
}
