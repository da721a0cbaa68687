// src/domain/table.rs

use crate::domain::listing::Listing;
use crate::domain::yield_calc::gross_yield;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::str::FromStr;

/// The in-memory listings table the dashboard reads from.
#[derive(Debug, Clone)]
pub struct ListingTable {
    rows: Vec<Listing>,
    /// False when the table came from a file without a `Suburb` column.
    /// Filtering is disabled in that case.
    has_suburb_column: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Ascending
    #[default]
    Price,
    /// Descending, rows without a yield last
    Yield,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price" | "Price" => Ok(SortKey::Price),
            "yield" | "Yield%" => Ok(SortKey::Yield),
            other => Err(format!("unknown sort key '{other}'")),
        }
    }
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Price => "price",
            SortKey::Yield => "yield",
        }
    }
}

/// How the dashboard wants the table cut.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewQuery {
    /// `None` means the user never touched the filter, which selects every
    /// suburb. `Some(vec![])` means an explicit empty selection: no filter.
    pub suburbs: Option<Vec<String>>,
    pub sort: SortKey,
    pub show_map: bool,
}

impl ListingTable {
    pub fn new(rows: Vec<Listing>) -> Self {
        Self {
            rows,
            has_suburb_column: true,
        }
    }

    pub fn with_schema(rows: Vec<Listing>, has_suburb_column: bool) -> Self {
        Self {
            rows,
            has_suburb_column,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    #[cfg(test)]
    pub fn rows(&self) -> &[Listing] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_suburb_column(&self) -> bool {
        self.has_suburb_column
    }

    /// Recompute `Yield%` for every row from `Price` and `MonthlyRent`.
    pub fn apply_yields(&mut self) {
        for row in &mut self.rows {
            row.yield_pct = gross_yield(row.price, row.monthly_rent);
        }
    }

    /// Sorted, de-duplicated suburbs, ignoring rows without one.
    pub fn suburbs(&self) -> Vec<String> {
        self.rows
            .iter()
            .filter_map(|r| r.suburb.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Filter, drop unpriced rows, then sort.
    pub fn view(&self, query: &ViewQuery) -> Vec<Listing> {
        let mut rows: Vec<Listing> = if self.has_suburb_column {
            let selected = match &query.suburbs {
                Some(selected) => selected.clone(),
                None => self.suburbs(),
            };
            filter_by_suburbs(&self.rows, &selected)
        } else {
            self.rows.clone()
        };

        rows.retain(|r| r.price.is_some());
        sort_listings(&mut rows, query.sort);
        rows
    }
}

/// Keep rows whose suburb is in `selected`. An empty selection keeps everything.
pub fn filter_by_suburbs(rows: &[Listing], selected: &[String]) -> Vec<Listing> {
    if selected.is_empty() {
        return rows.to_vec();
    }

    rows.iter()
        .filter(|r| {
            r.suburb
                .as_ref()
                .map(|s| selected.contains(s))
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// Stable sort, so ties keep scrape order.
pub fn sort_listings(rows: &mut [Listing], key: SortKey) {
    match key {
        SortKey::Price => rows.sort_by(|a, b| cmp_absent_last(a.price, b.price, |x, y| x.cmp(&y))),
        SortKey::Yield => rows.sort_by(|a, b| {
            cmp_absent_last(a.yield_pct, b.yield_pct, |x, y| y.total_cmp(&x))
        }),
    }
}

fn cmp_absent_last<T, F>(a: Option<T>, b: Option<T>, present: F) -> Ordering
where
    F: Fn(T, T) -> Ordering,
{
    match (a, b) {
        (Some(x), Some(y)) => present(x, y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
