// src/tests/router_tests/dashboard_tests.rs

use crate::domain::{ListingTable, SortKey, ViewQuery};
use crate::errors::ServerError;
use crate::router::{handle, parse_view_query, view_query_string};
use crate::store::LoadNotice;
use crate::tests::utils::{body_string, get, listing, sample_state, state_with};

/// Position of each needle in the body, to check row order.
fn positions(body: &str, needles: &[&str]) -> Vec<usize> {
    needles
        .iter()
        .map(|n| body.find(n).unwrap_or_else(|| panic!("'{n}' not in page")))
        .collect()
}

#[test]
fn dashboard_lists_every_priced_row_by_default() {
    let resp = handle(get("/"), &sample_state()).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Listings Found: 4"));
    assert!(body.contains("Loaded 4 listings"));

    // Price ascending
    let pos = positions(
        &body,
        &["benoni-flat", "benoni-house", "alberton-flat", "alberton-house"],
    );
    assert!(pos.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn suburb_filter_keeps_only_selected_rows() {
    let resp = handle(get("/?filter=1&suburb=Alberton&sort=price"), &sample_state()).unwrap();
    let body = body_string(resp);

    assert!(body.contains("Listings Found: 2"));
    assert!(body.contains("alberton-flat"));
    assert!(!body.contains("benoni-flat"));
    assert!(!body.contains("benoni-house"));
}

#[test]
fn yield_sort_puts_rows_without_yield_last() {
    let resp = handle(get("/?sort=yield"), &sample_state()).unwrap();
    let body = body_string(resp);

    // benoni-house is cheapest-but-one and has no yield
    let pos = positions(
        &body,
        &["benoni-flat", "alberton-flat", "alberton-house", "benoni-house"],
    );
    assert!(pos.windows(2).all(|w| w[0] < w[1]));
    assert!(body.contains("10.00"));
}

#[test]
fn unknown_sort_is_bad_request() {
    let err = handle(get("/?sort=size"), &sample_state()).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn unknown_route_is_not_found() {
    let err = handle(get("/admin"), &sample_state()).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn map_renders_only_on_request() {
    let state = sample_state();

    let without = body_string(handle(get("/"), &state).unwrap());
    assert!(!without.contains("id=\"listing-map\""));

    let with = body_string(handle(get("/?map=1"), &state).unwrap());
    assert!(with.contains("id=\"listing-map\""));
    assert!(with.contains("Alberton, Gauteng"));
    assert!(with.contains("Benoni, Gauteng"));
}

#[test]
fn empty_table_shows_error_and_warning() {
    let state = state_with(ListingTable::empty(), LoadNotice::NothingScraped);
    let body = body_string(handle(get("/"), &state).unwrap());

    assert!(body.contains("No data scraped"));
    assert!(body.contains("No listings to show"));
    assert!(!body.contains("Listings Found"));
}

#[test]
fn missing_suburb_column_disables_filter() {
    let table = ListingTable::with_schema(
        vec![listing("only", "Alberton", Some(1), None)],
        false,
    );
    let state = state_with(table, LoadNotice::Loaded { rows: 1 });
    let body = body_string(handle(get("/?filter=1&suburb=Benoni"), &state).unwrap());

    assert!(body.contains("'Suburb' column missing"));
    assert!(body.contains("Filtering unavailable."));
    assert!(body.contains("Listings Found: 1"));
}

#[test]
fn query_string_round_trips_view_state() {
    let query = ViewQuery {
        suburbs: Some(vec!["Glen Marais".to_string(), "Benoni".to_string()]),
        sort: SortKey::Yield,
        show_map: false,
    };
    let encoded = view_query_string(&query);
    assert_eq!(encoded, "filter=1&suburb=Glen+Marais&suburb=Benoni&sort=yield");

    let parsed = parse_view_query(&get(&format!("/?{encoded}"))).unwrap();
    assert_eq!(parsed, query);
}

#[test]
fn untouched_filter_means_default_selection() {
    let parsed = parse_view_query(&get("/?sort=price")).unwrap();
    assert_eq!(parsed.suburbs, None);

    let submitted_empty = parse_view_query(&get("/?filter=1&sort=price")).unwrap();
    assert_eq!(submitted_empty.suburbs, Some(vec![]));
}
