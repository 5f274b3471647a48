use serde::{Deserialize, Serialize};

/// Placeholder written for optional hotel fields the page does not carry.
pub const NOT_AVAILABLE: &str = "N/A";

/// Image host every hotel `imgUrl` path is appended to.
pub const IMAGE_HOST_PREFIX: &str = "https://ak-d.tripcdn.com/images";

/// A destination city listed on the hotels landing page.
///
/// Serialized with the page's own camelCase keys so the output file mirrors
/// the source vocabulary. Every field is the page's own JSON value, so a
/// numeric `id` stays a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    pub id: serde_json::Value,
    pub name: serde_json::Value,
    /// Relative city slug, e.g. `"paris"`. Hotels reference their city by this value.
    pub city_url: serde_json::Value,
    pub img_url: serde_json::Value,
}

/// A recommended hotel embedded under a city on the landing page.
///
/// `rating`, `latitude`, `longitude` and `price` are copied through as the
/// page's own JSON scalars, or [`NOT_AVAILABLE`] when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelRecord {
    pub property_title: String,
    pub rating: serde_json::Value,
    /// `cityUrl` of the enclosing city.
    pub location: String,
    pub latitude: serde_json::Value,
    pub longitude: serde_json::Value,
    /// Facility names in page order.
    pub room_type: Vec<String>,
    pub price: serde_json::Value,
    pub image_url: String,
    /// Download set for the image collaborator. Always `[image_url]`.
    pub image_urls: Vec<String>,
}

/// Build an absolute image URL from a hotel's relative `imgUrl` path.
///
/// The path is appended verbatim; an empty path yields the bare host prefix.
#[must_use]
pub fn image_url(path: &str) -> String {
    format!("{IMAGE_HOST_PREFIX}{path}")
}
