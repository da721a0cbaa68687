use crate::domain::{Listing, COLUMNS};
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use crate::spreadsheets::EXPORT_BASENAME;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

pub fn export_listings_xlsx(listings: &[Listing]) -> ResultResp {
    let buffer = listings_workbook(listings)
        .map_err(|e| ServerError::XlsxError(format!("Failed to build workbook: {e}")))?;

    xlsx_response(buffer, &format!("{EXPORT_BASENAME}.xlsx"))
}

fn listings_workbook(listings: &[Listing]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // Headers
    for (col, header) in COLUMNS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    // Rows. Absent values stay blank cells.
    for (i, listing) in listings.iter().enumerate() {
        let r = (i + 1) as u32;

        write_text(worksheet, r, 0, &listing.title)?;
        write_number(worksheet, r, 1, listing.price.map(|v| v as f64))?;
        write_text(worksheet, r, 2, &listing.suburb)?;
        write_text(worksheet, r, 3, &listing.address)?;
        write_text(worksheet, r, 4, &listing.city)?;
        write_number(worksheet, r, 5, listing.bedrooms.map(f64::from))?;
        write_number(worksheet, r, 6, listing.bathrooms.map(f64::from))?;
        write_number(worksheet, r, 7, listing.parking.map(f64::from))?;
        write_text(worksheet, r, 8, &listing.size)?;
        write_text(worksheet, r, 9, &listing.url)?;
        write_text(worksheet, r, 10, &listing.agent)?;
        write_number(worksheet, r, 11, listing.monthly_rent.map(|v| v as f64))?;
        write_number(worksheet, r, 12, listing.yield_pct)?;
    }

    workbook.save_to_buffer()
}

fn write_text(ws: &mut Worksheet, row: u32, col: u16, value: &Option<String>) -> Result<(), XlsxError> {
    if let Some(text) = value {
        ws.write_string(row, col, text)?;
    }
    Ok(())
}

fn write_number(ws: &mut Worksheet, row: u32, col: u16, value: Option<f64>) -> Result<(), XlsxError> {
    if let Some(n) = value {
        ws.write_number(row, col, n)?;
    }
    Ok(())
}
