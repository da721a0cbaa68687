use crate::domain::Listing;
use crate::errors::ServerError;
use crate::responses::{csv_response, ResultResp};
use crate::spreadsheets::EXPORT_BASENAME;
use crate::store::write_csv;

/// The current view, every persisted column, as a CSV download.
pub fn export_listings_csv(listings: &[Listing]) -> ResultResp {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, listings).map_err(|e| ServerError::CsvError(e.to_string()))?;

    csv_response(buffer, &format!("{EXPORT_BASENAME}.csv"))
}
