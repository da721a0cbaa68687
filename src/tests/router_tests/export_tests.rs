use crate::router::handle;
use crate::tests::utils::{body_string, get, sample_state};

#[test]
fn csv_download_matches_filtered_sorted_view() {
    let resp = handle(get("/export.csv?filter=1&suburb=Benoni&sort=price"), &sample_state()).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()["Content-Disposition"],
        "attachment; filename=\"property24_listings.csv\""
    );
    assert!(resp.headers()["Content-Type"]
        .to_str()
        .unwrap()
        .starts_with("text/csv"));

    let body = body_string(resp);
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(
        lines[0],
        "Title,Price,Suburb,Address,City,Bedrooms,Bathrooms,Parking,Size,URL,Agent,MonthlyRent,Yield%"
    );
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("benoni-flat,300000,Benoni,"));
    assert!(lines[2].starts_with("benoni-house,350000,Benoni,"));
}

#[test]
fn xlsx_download_is_a_zip_workbook() {
    let resp = handle(get("/export.xlsx"), &sample_state()).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()["Content-Disposition"],
        "attachment; filename=\"property24_listings.xlsx\""
    );
    assert_eq!(
        resp.headers()["Content-Type"],
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );

    let mut resp = resp;
    let mut bytes = Vec::new();
    std::io::Read::read_to_end(&mut resp.body_mut().reader(), &mut bytes).unwrap();
    // XLSX is a zip archive
    assert_eq!(&bytes[..2], b"PK");
}
