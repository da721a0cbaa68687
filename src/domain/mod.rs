pub mod listing;
pub mod table;
pub mod yield_calc;

pub use listing::{Listing, COLUMNS};
pub use table::{ListingTable, SortKey, ViewQuery};
