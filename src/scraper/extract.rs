// extract.rs
//
// Listing tile markup, as served on the search results page:
//
// div.js_resultTile
//  ├── a[href]                      -> URL (site relative)
//  ├── .p24_title                   -> Title
//  ├── .p24_price                   -> Price ("R 450 000")
//  ├── .p24_location                -> Suburb
//  ├── .p24_address                 -> Address
//  ├── .p24_featureDetails[title]   -> Bedrooms / Bathrooms / Parking
//  │    └── span                    -> count
//  ├── .p24_size span               -> Size
//  └── .p24_branding[title]         -> Agent

use crate::domain::Listing;
use crate::scraper::{ExtractError, ScraperError};
use scraper::{ElementRef, Html, Selector};
use url::Url;

pub const TILE_SELECTOR: &str = ".js_resultTile";

struct Selectors {
    tile: Selector,
    title: Selector,
    price: Selector,
    suburb: Selector,
    address: Selector,
    features: Selector,
    feature_value: Selector,
    size: Selector,
    agent: Selector,
    link: Selector,
}

fn compile(css: &str) -> Result<Selector, ScraperError> {
    Selector::parse(css).map_err(|e| ScraperError::Selector(format!("{css}: {e}")))
}

impl Selectors {
    fn new() -> Result<Self, ScraperError> {
        Ok(Self {
            tile: compile(TILE_SELECTOR)?,
            title: compile(".p24_title")?,
            price: compile(".p24_price")?,
            suburb: compile(".p24_location")?,
            address: compile(".p24_address")?,
            features: compile(".p24_featureDetails")?,
            feature_value: compile("span")?,
            size: compile(".p24_size span")?,
            agent: compile(".p24_branding")?,
            link: compile("a[href]")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FeatureKind {
    Bedrooms,
    Bathrooms,
    Parking,
}

impl FeatureKind {
    /// Case-insensitive substring match on the feature's `title` label.
    fn from_label(label: &str) -> Option<Self> {
        let label = label.to_lowercase();
        if label.contains("bedroom") {
            Some(FeatureKind::Bedrooms)
        } else if label.contains("bathroom") {
            Some(FeatureKind::Bathrooms)
        } else if label.contains("parking") {
            Some(FeatureKind::Parking)
        } else {
            None
        }
    }
}

/// Turns listing tiles into [`Listing`] records.
pub struct ListingExtractor {
    selectors: Selectors,
    site_origin: Url,
    region: String,
}

impl ListingExtractor {
    pub fn new(site_origin: &str, region: impl Into<String>) -> Result<Self, ScraperError> {
        let site_origin = Url::parse(site_origin)
            .map_err(|e| ScraperError::Config(format!("site origin '{site_origin}': {e}")))?;

        Ok(Self {
            selectors: Selectors::new()?,
            site_origin,
            region: region.into(),
        })
    }

    /// Extract every tile on a results page, in document order.
    pub fn extract_page(&self, html: &str) -> Vec<Result<Listing, ExtractError>> {
        let document = Html::parse_document(html);
        document
            .select(&self.selectors.tile)
            .map(|tile| self.extract_tile(tile))
            .collect()
    }

    /// Extract a single tile given as a standalone markup fragment.
    #[cfg(test)]
    pub fn parse_listing(&self, fragment: &str) -> Result<Listing, ExtractError> {
        let fragment = Html::parse_fragment(fragment);
        self.extract_tile(fragment.root_element())
    }

    fn extract_tile(&self, tile: ElementRef) -> Result<Listing, ExtractError> {
        let s = &self.selectors;

        let price = match first(tile, &s.price) {
            Some(el) => parse_price(&el.text().collect::<String>())?,
            None => None,
        };

        let mut listing = Listing {
            title: first_text(tile, &s.title),
            price,
            suburb: first_text(tile, &s.suburb),
            address: first_text(tile, &s.address),
            city: Some(self.region.clone()),
            size: first_text(tile, &s.size),
            url: first(tile, &s.link)
                .and_then(|a| a.value().attr("href"))
                .and_then(|href| absolute_url(&self.site_origin, href)),
            agent: first(tile, &s.agent)
                .and_then(|el| el.value().attr("title"))
                .and_then(non_blank),
            ..Default::default()
        };

        for feature in tile.select(&s.features) {
            let Some(kind) = feature.value().attr("title").and_then(FeatureKind::from_label)
            else {
                continue;
            };
            let value = first(feature, &s.feature_value)
                .and_then(|span| parse_count(&span.text().collect::<String>()));

            match kind {
                FeatureKind::Bedrooms => listing.bedrooms = value,
                FeatureKind::Bathrooms => listing.bathrooms = value,
                FeatureKind::Parking => listing.parking = value,
            }
        }

        Ok(listing)
    }
}

fn first<'a>(el: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    el.select(selector).next()
}

fn first_text(el: ElementRef, selector: &Selector) -> Option<String> {
    first(el, selector).and_then(|e| non_blank(&e.text().collect::<String>()))
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Strip every non-digit and read what is left. No digits means no price.
pub(crate) fn parse_price(text: &str) -> Result<Option<i64>, ExtractError> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Ok(None);
    }
    digits
        .parse::<i64>()
        .map(Some)
        .map_err(|_| ExtractError::PriceOverflow(digits))
}

/// Only purely numeric text counts.
pub(crate) fn parse_count(text: &str) -> Option<u32> {
    let text = text.trim();
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn absolute_url(origin: &Url, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    origin.join(href).ok().map(String::from)
}
