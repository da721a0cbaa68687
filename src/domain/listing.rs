use serde::{Deserialize, Serialize};

/// One Property24 listing as scraped, plus the rent/yield columns derived
/// afterwards. Field names on disk match the flat file's header row.
///
/// `#[serde(default)]` lets a hand-edited file drop columns; anything missing
/// reads back as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Listing {
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Price")]
    pub price: Option<i64>,
    #[serde(rename = "Suburb")]
    pub suburb: Option<String>,
    #[serde(rename = "Address")]
    pub address: Option<String>,
    #[serde(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "Bedrooms")]
    pub bedrooms: Option<u32>,
    #[serde(rename = "Bathrooms")]
    pub bathrooms: Option<u32>,
    #[serde(rename = "Parking")]
    pub parking: Option<u32>,
    #[serde(rename = "Size")]
    pub size: Option<String>,
    #[serde(rename = "URL")]
    pub url: Option<String>,
    #[serde(rename = "Agent")]
    pub agent: Option<String>,

    // Derived
    #[serde(rename = "MonthlyRent")]
    pub monthly_rent: Option<i64>,
    #[serde(rename = "Yield%")]
    pub yield_pct: Option<f64>,
}

/// Header row of the flat file and of CSV exports.
pub const COLUMNS: [&str; 13] = [
    "Title",
    "Price",
    "Suburb",
    "Address",
    "City",
    "Bedrooms",
    "Bathrooms",
    "Parking",
    "Size",
    "URL",
    "Agent",
    "MonthlyRent",
    "Yield%",
];

impl Listing {
    /// `"{Suburb}, {City}"`, the string handed to the geocoder.
    pub fn place(&self) -> Option<String> {
        let suburb = self.suburb.as_deref()?;
        match self.city.as_deref() {
            Some(city) => Some(format!("{suburb}, {city}")),
            None => Some(suburb.to_string()),
        }
    }
}
