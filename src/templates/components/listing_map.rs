use crate::geo::ListingMap;
use maud::{html, Markup, PreEscaped};

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

/// Leaflet map with one marker per geocoded place. The markers travel as
/// JSON inside the page script.
pub fn listing_map(map: &ListingMap) -> Markup {
    // Keep "</script>" inside popups from closing the tag
    let data = serde_json::to_string(map)
        .unwrap_or_else(|_| "null".to_string())
        .replace("</", "<\\/");

    let script = format!(
        r#"(function () {{
  var data = {data};
  if (!data) return;
  var map = L.map('listing-map').setView(data.center, data.zoom);
  L.tileLayer('https://{{s}}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
    attribution: '&copy; OpenStreetMap contributors'
  }}).addTo(map);
  data.markers.forEach(function (m) {{
    L.marker([m.lat, m.lon]).bindPopup(document.createTextNode(m.popup)).addTo(map);
  }});
}})();"#
    );

    html! {
        section class="card" id="map-card" {
            h3 { "Map of Listings" }
            p { (map.markers.len()) " places located" }
            link rel="stylesheet" href=(LEAFLET_CSS);
            div id="listing-map" {}
            script src=(LEAFLET_JS) {}
            script { (PreEscaped(script)) }
        }
    }
}
