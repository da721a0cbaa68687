pub mod bootstrap;
pub mod flat_file;

pub use bootstrap::{load_or_scrape, LoadNotice, NoticeLevel};
pub use flat_file::write_csv;
