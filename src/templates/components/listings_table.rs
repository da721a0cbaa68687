use crate::domain::Listing;
use maud::{html, Markup};

const HEADERS: [&str; 8] = [
    "Title",
    "Price",
    "Suburb",
    "City",
    "Bedrooms",
    "Bathrooms",
    "Parking",
    "Yield%",
];

fn opt<T: std::fmt::Display>(value: &Option<T>) -> String {
    value.as_ref().map(|v| v.to_string()).unwrap_or_default()
}

pub fn listings_table(rows: &[Listing]) -> Markup {
    html! {
        table id="listings" {
            thead {
                tr {
                    @for h in HEADERS {
                        th { (h) }
                    }
                }
            }
            tbody {
                @for row in rows {
                    tr {
                        td {
                            @match (&row.title, &row.url) {
                                (Some(title), Some(url)) => {
                                    a href=(url) target="_blank" rel="noopener" { (title) }
                                }
                                (title, _) => { (opt(title)) }
                            }
                        }
                        td class="num" { (opt(&row.price)) }
                        td { (opt(&row.suburb)) }
                        td { (opt(&row.city)) }
                        td class="num" { (opt(&row.bedrooms)) }
                        td class="num" { (opt(&row.bathrooms)) }
                        td class="num" { (opt(&row.parking)) }
                        td class="num" {
                            @if let Some(y) = row.yield_pct {
                                (format!("{y:.2}"))
                            }
                        }
                    }
                }
            }
        }
    }
}
