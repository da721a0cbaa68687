use crate::domain::{Listing, SortKey};
use crate::geo::ListingMap;
use crate::store::LoadNotice;
use crate::templates::components::{card, listing_map, listings_table, notice, warning};
use crate::templates::desktop_layout;
use crate::store::NoticeLevel;
use maud::{html, Markup};

pub const PAGE_TITLE: &str = "🏠 Property24 Listings Dashboard";

pub struct DashboardVm<'a> {
    pub notice: &'a LoadNotice,
    /// All suburb options; empty when the table has no Suburb column.
    pub suburbs: Vec<String>,
    pub selected: Vec<String>,
    pub filtering_enabled: bool,
    pub sort: SortKey,
    pub rows: &'a [Listing],
    pub map: Option<ListingMap>,
    /// Encoded filter/sort state, reused by the map and download links.
    pub query: String,
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    desktop_layout(
        PAGE_TITLE,
        html! {
            div class="page" {
                aside {
                    (sidebar(vm))
                }
                main {
                    (notice(vm.notice.level(), &vm.notice.message()))

                    @if !vm.filtering_enabled {
                        (notice(NoticeLevel::Error, "❌ 'Suburb' column missing. Check scraper parsing."))
                    }

                    @if vm.rows.is_empty() {
                        (warning("⚠️ No listings to show. Try re-running the scraper."))
                    } @else {
                        h2 { "📊 Listings Found: " (vm.rows.len()) }
                        (listings_table(vm.rows))

                        div class="actions" {
                            a href=(format!("/?{}&map=1#map-card", vm.query)) { button type="button" { "🗺 Show Map of Listings" } }
                            a href=(format!("/export.csv?{}", vm.query)) { button type="button" { "💾 Download CSV" } }
                            a href=(format!("/export.xlsx?{}", vm.query)) { button type="button" { "Download XLSX" } }
                        }

                        @if let Some(map) = &vm.map {
                            (listing_map(map))
                        }
                    }
                }
            }
        },
    )
}

fn sidebar(vm: &DashboardVm) -> Markup {
    html! {
        form method="get" action="/" {
            input type="hidden" name="filter" value="1";

            (card("Filter by Suburb:", html! {
                @if vm.filtering_enabled {
                    select name="suburb" multiple size="12" {
                        @for suburb in &vm.suburbs {
                            option value=(suburb) selected[vm.selected.contains(suburb)] { (suburb) }
                        }
                    }
                } @else {
                    p { "Filtering unavailable." }
                }
            }))

            (card("Sort by:", html! {
                label {
                    input type="radio" name="sort" value=(SortKey::Price.as_str()) checked[vm.sort == SortKey::Price];
                    " Price"
                }
                br;
                label {
                    input type="radio" name="sort" value=(SortKey::Yield.as_str()) checked[vm.sort == SortKey::Yield];
                    " Yield%"
                }
            }))

            button type="submit" { "Apply" }
        }
    }
}
