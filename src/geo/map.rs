// src/geo/map.rs
use crate::config::MapConfig;
use crate::domain::Listing;
use crate::geo::Geocoder;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub lat: f64,
    pub lon: f64,
    pub popup: String,
}

/// Everything the browser-side map needs to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingMap {
    pub center: (f64, f64),
    pub zoom: u8,
    pub markers: Vec<Marker>,
}

/// Unique `"{Suburb}, {City}"` places in first-seen order. Rows without a
/// suburb have nothing worth geocoding.
pub fn unique_places(listings: &[Listing]) -> Vec<String> {
    let mut seen = HashSet::new();
    listings
        .iter()
        .filter_map(Listing::place)
        .filter(|p| seen.insert(p.clone()))
        .collect()
}

/// Geocode each place once and drop a marker on every one that resolved.
pub fn build_map<G: Geocoder + ?Sized>(listings: &[Listing], geocoder: &G, config: MapConfig) -> ListingMap {
    let markers = unique_places(listings)
        .into_iter()
        .filter_map(|place| {
            let coords = geocoder.geocode(&place)?;
            Some(Marker {
                lat: coords.latitude,
                lon: coords.longitude,
                popup: place,
            })
        })
        .collect();

    ListingMap {
        center: config.center,
        zoom: config.zoom,
        markers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coordinates;
    use std::cell::RefCell;

    /// Resolves everything to the 0,0 point in the Gulf of Guinea.
    struct NullIslandGeocoder;

    impl Geocoder for NullIslandGeocoder {
        fn geocode(&self, _place: &str) -> Option<Coordinates> {
            Some(Coordinates {
                latitude: 0.0,
                longitude: 0.0,
            })
        }
    }

    struct FakeGeocoder {
        calls: RefCell<Vec<String>>,
    }

    impl Geocoder for FakeGeocoder {
        fn geocode(&self, place: &str) -> Option<Coordinates> {
            self.calls.borrow_mut().push(place.to_string());
            place.starts_with("Alberton").then_some(Coordinates {
                latitude: -26.27,
                longitude: 28.12,
            })
        }
    }

    fn listing(suburb: Option<&str>) -> Listing {
        Listing {
            suburb: suburb.map(str::to_string),
            city: Some("Gauteng".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn geocodes_each_place_once() {
        let rows = vec![
            listing(Some("Alberton")),
            listing(Some("Benoni")),
            listing(Some("Alberton")),
            listing(None),
        ];
        let geocoder = FakeGeocoder {
            calls: RefCell::new(Vec::new()),
        };

        let map = build_map(&rows, &geocoder, MapConfig::default());

        assert_eq!(
            *geocoder.calls.borrow(),
            vec!["Alberton, Gauteng", "Benoni, Gauteng"]
        );
        assert_eq!(
            map.markers,
            vec![Marker {
                lat: -26.27,
                lon: 28.12,
                popup: "Alberton, Gauteng".to_string(),
            }]
        );
        assert_eq!(map.center, (-30.0, 25.0));
        assert_eq!(map.zoom, 5);
    }

    #[test]
    fn zero_coordinates_still_get_a_marker() {
        let map = build_map(&[listing(Some("Benoni"))], &NullIslandGeocoder, MapConfig::default());

        assert_eq!(
            map.markers,
            vec![Marker {
                lat: 0.0,
                lon: 0.0,
                popup: "Benoni, Gauteng".to_string(),
            }]
        );
    }
}
