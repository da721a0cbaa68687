use crate::config::MapConfig;
use crate::domain::{Listing, ListingTable};
use crate::geo::{Coordinates, Geocoder};
use crate::router::AppState;
use crate::store::LoadNotice;
use astra::{Body, Request, Response};
use std::io::Read;

/// Resolves every place except "Nowhere, ..." to a fixed point.
pub struct FixedGeocoder;

impl Geocoder for FixedGeocoder {
    fn geocode(&self, place: &str) -> Option<Coordinates> {
        (!place.starts_with("Nowhere")).then_some(Coordinates {
            latitude: -26.2,
            longitude: 28.0,
        })
    }
}

pub fn listing(title: &str, suburb: &str, price: Option<i64>, rent: Option<i64>) -> Listing {
    Listing {
        title: Some(title.to_string()),
        price,
        suburb: Some(suburb.to_string()),
        city: Some("Gauteng".to_string()),
        monthly_rent: rent,
        url: Some(format!("https://www.property24.com/for-sale/{title}")),
        ..Default::default()
    }
}

/// Two suburbs, one row without a yield.
pub fn sample_state() -> AppState {
    let mut table = ListingTable::new(vec![
        listing("alberton-flat", "Alberton", Some(500_000), Some(4_000)),
        listing("benoni-house", "Benoni", Some(350_000), None),
        listing("alberton-house", "Alberton", Some(650_000), Some(3_000)),
        listing("benoni-flat", "Benoni", Some(300_000), Some(2_500)),
    ]);
    table.apply_yields();
    state_with(table, LoadNotice::Loaded { rows: 4 })
}

pub fn state_with(table: ListingTable, notice: LoadNotice) -> AppState {
    AppState {
        table,
        notice,
        geocoder: Box::new(FixedGeocoder),
        map: MapConfig::default(),
    }
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(http::Method::GET)
        .uri(uri)
        .body(Body::from(""))
        .unwrap()
}

pub fn body_string(mut resp: Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}
