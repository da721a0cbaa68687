pub mod geocoder;
pub mod map;

pub use geocoder::{Coordinates, Geocoder, NominatimGeocoder};
pub use map::{build_map, ListingMap};
