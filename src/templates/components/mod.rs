pub mod card;
pub mod error;
pub mod listing_map;
pub mod listings_table;
pub mod notice;

pub use card::card;
pub use error::html_error_response;
pub use listing_map::listing_map;
pub use listings_table::listings_table;
pub use notice::{notice, warning};
