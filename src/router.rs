use crate::config::MapConfig;
use crate::domain::{Listing, ListingTable, SortKey, ViewQuery};
use crate::errors::ServerError;
use crate::geo::{build_map, Geocoder};
use crate::responses::{html_response, ResultResp};
use crate::spreadsheets::{export_listings_csv, export_listings_xlsx};
use crate::store::LoadNotice;
use crate::templates::pages::{dashboard_page, DashboardVm};
use astra::Request;
use tracing::info;
use url::form_urlencoded;

/// Read-only state shared by every request.
pub struct AppState {
    pub table: ListingTable,
    pub notice: LoadNotice,
    pub geocoder: Box<dyn Geocoder + Send + Sync>,
    pub map: MapConfig,
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => dashboard(&req, state),
        ("GET", "/export.csv") => {
            let query = parse_view_query(&req)?;
            export_listings_csv(&state.table.view(&query))
        }
        ("GET", "/export.xlsx") => {
            let query = parse_view_query(&req)?;
            export_listings_xlsx(&state.table.view(&query))
        }
        _ => Err(ServerError::NotFound),
    }
}

fn dashboard(req: &Request, state: &AppState) -> ResultResp {
    let query = parse_view_query(req)?;
    let rows: Vec<Listing> = state.table.view(&query);

    let filtering_enabled = state.table.has_suburb_column();
    let suburbs = if filtering_enabled {
        state.table.suburbs()
    } else {
        Vec::new()
    };
    let selected = query.suburbs.clone().unwrap_or_else(|| suburbs.clone());

    // Geocoding is slow, only on demand
    let map = (query.show_map && !rows.is_empty()).then(|| {
        info!(rows = rows.len(), "🗺 building listing map");
        build_map(&rows, &*state.geocoder, state.map)
    });

    let vm = DashboardVm {
        notice: &state.notice,
        suburbs,
        selected,
        filtering_enabled,
        sort: query.sort,
        rows: &rows,
        map,
        query: view_query_string(&query),
    };

    html_response(dashboard_page(&vm))
}

/// `filter=1` marks a submitted form, `suburb` repeats per selection,
/// `sort` is `price` or `yield`, `map=1` requests the map.
pub fn parse_view_query(req: &Request) -> Result<ViewQuery, ServerError> {
    let mut query = ViewQuery::default();
    let mut submitted = false;
    let mut suburbs = Vec::new();

    let raw = req.uri().query().unwrap_or("");
    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        match key.as_ref() {
            "filter" => submitted = true,
            "suburb" => suburbs.push(value.into_owned()),
            "sort" => query.sort = value.parse::<SortKey>().map_err(ServerError::BadRequest)?,
            "map" => query.show_map = value == "1",
            _ => {}
        }
    }

    if submitted || !suburbs.is_empty() {
        query.suburbs = Some(suburbs);
    }
    Ok(query)
}

/// The filter and sort part of a [`ViewQuery`], ready to put after `?`.
pub fn view_query_string(query: &ViewQuery) -> String {
    let mut out = form_urlencoded::Serializer::new(String::new());
    if let Some(suburbs) = &query.suburbs {
        out.append_pair("filter", "1");
        for suburb in suburbs {
            out.append_pair("suburb", suburb);
        }
    }
    out.append_pair("sort", query.sort.as_str());
    out.finish()
}
