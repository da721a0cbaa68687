// src/store/flat_file.rs
use crate::domain::{Listing, ListingTable, COLUMNS};
use std::fs::File;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl StoreError {
    fn io(path: &Path, source: io::Error) -> Self {
        StoreError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Load a listings file written by [`write_listings`] (or by hand). Missing
/// columns read back as absent values.
pub fn read_listings(path: &Path) -> Result<ListingTable, StoreError> {
    let file = File::open(path).map_err(|e| StoreError::io(path, e))?;
    read_listings_from(file)
}

pub fn read_listings_from<R: io::Read>(reader: R) -> Result<ListingTable, StoreError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let has_suburb_column = rdr.headers()?.iter().any(|h| h == "Suburb");

    let mut rows = Vec::new();
    for record in rdr.deserialize::<Listing>() {
        rows.push(record?);
    }

    Ok(ListingTable::with_schema(rows, has_suburb_column))
}

pub fn write_listings(path: &Path, rows: &[Listing]) -> Result<(), StoreError> {
    let file = File::create(path).map_err(|e| StoreError::io(path, e))?;
    write_csv(file, rows)
}

/// Header row first, even for an empty table.
pub fn write_csv<W: io::Write>(writer: W, rows: &[Listing]) -> Result<(), StoreError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(COLUMNS)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush().map_err(|e| StoreError::Csv(e.into()))?;
    Ok(())
}
