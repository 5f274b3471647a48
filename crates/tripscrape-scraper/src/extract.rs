//! Walks the parsed `window.IBU_HOTEL` tree into location and hotel records.
//!
//! Shape consumed:
//!
//! ```text
//! initData.htlsData
//!   .inboundCities[]  / .outboundCities[]
//!     { type: "City", id, name, cityUrl, imgUrl, recommendHotels?: [ hotel ] }
//! ```
//!
//! Root-level problems (unparseable JSON, missing `initData.htlsData`) are
//! fatal. A node missing a required field is skipped and reported in
//! [`Extraction::skipped`].

use serde_json::Value;
use tripscrape_core::{image_url, HotelRecord, LocationRecord, NOT_AVAILABLE};

use crate::error::{FieldMissing, ScrapeError};
use crate::lookup::{lookup, lookup_array, lookup_or, lookup_str, lookup_text};
use crate::sink::RecordSink;

/// Path from the JSON root to the city group object.
pub const DATA_PATH: [&str; 2] = ["initData", "htlsData"];

/// City groups in processing order.
pub const CITY_GROUPS: [&str; 2] = ["inboundCities", "outboundCities"];

const CITY_TYPE: &str = "City";

/// Records recovered from one page, in encounter order.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub locations: Vec<LocationRecord>,
    pub hotels: Vec<HotelRecord>,
    /// Nodes dropped for a missing required field.
    pub skipped: Vec<FieldMissing>,
}

/// Parse `json_text` and extract every location and hotel record.
///
/// Each hotel is handed to `sink` as soon as it is built, then also kept in
/// the returned batch.
///
/// # Errors
///
/// - [`ScrapeError::MalformedJson`] if `json_text` does not parse.
/// - [`ScrapeError::SchemaMismatch`] if `initData.htlsData` is absent or not
///   an object.
pub fn extract<S>(json_text: &str, sink: &mut S) -> Result<Extraction, ScrapeError>
where
    S: RecordSink + ?Sized,
{
    let root: Value = serde_json::from_str(json_text).map_err(ScrapeError::MalformedJson)?;
    extract_from_value(&root, sink)
}

/// Same as [`extract`] for an already parsed tree.
///
/// # Errors
///
/// Returns [`ScrapeError::SchemaMismatch`] if `initData.htlsData` is absent
/// or not an object.
pub fn extract_from_value<S>(root: &Value, sink: &mut S) -> Result<Extraction, ScrapeError>
where
    S: RecordSink + ?Sized,
{
    let groups = lookup(root, &DATA_PATH)
        .filter(|v| v.is_object())
        .ok_or(ScrapeError::SchemaMismatch {
            path: "initData.htlsData",
        })?;

    let mut out = Extraction::default();

    for group in CITY_GROUPS {
        let Some(cities) = lookup(groups, &[group]) else {
            tracing::debug!(group, "city group absent");
            continue;
        };
        let Some(cities) = cities.as_array() else {
            tracing::warn!(group, "city group is not an array; ignoring");
            continue;
        };

        for (index, city) in cities.iter().enumerate() {
            if lookup_str(city, &["type"]) != Some(CITY_TYPE) {
                continue;
            }
            let city_path = format!("{group}[{index}]");

            match build_location(city, &city_path) {
                Ok(location) => out.locations.push(location),
                Err(skip) => {
                    tracing::warn!(path = %skip.path, field = skip.field, "skipping location");
                    out.skipped.push(skip);
                }
            }

            // Hotels keep the city's slug even when the location itself was skipped.
            let location =
                lookup_text(city, &["cityUrl"]).unwrap_or_else(|| NOT_AVAILABLE.to_owned());

            let hotels = lookup_array(city, &["recommendHotels"]);
            for (hotel_index, node) in hotels.iter().enumerate() {
                let hotel_path = format!("{city_path}.recommendHotels[{hotel_index}]");
                match build_hotel(node, &location, &hotel_path) {
                    Ok(hotel) => {
                        sink.emit(&hotel);
                        out.hotels.push(hotel);
                    }
                    Err(skip) => {
                        tracing::warn!(path = %skip.path, field = skip.field, "skipping hotel");
                        out.skipped.push(skip);
                    }
                }
            }
        }
    }

    tracing::info!(
        locations = out.locations.len(),
        hotels = out.hotels.len(),
        skipped = out.skipped.len(),
        "extracted records"
    );
    Ok(out)
}

fn build_location(city: &Value, path: &str) -> Result<LocationRecord, FieldMissing> {
    let require = |field: &'static str| {
        lookup(city, &[field]).cloned().ok_or_else(|| FieldMissing {
            record: "location",
            path: path.to_owned(),
            field,
        })
    };

    Ok(LocationRecord {
        id: require("id")?,
        name: require("name")?,
        city_url: require("cityUrl")?,
        img_url: require("imgUrl")?,
    })
}

fn build_hotel(node: &Value, location: &str, path: &str) -> Result<HotelRecord, FieldMissing> {
    let property_title = lookup_text(node, &["hotelName"]).ok_or_else(|| FieldMissing {
        record: "hotel",
        path: path.to_owned(),
        field: "hotelName",
    })?;

    let room_type = lookup_array(node, &["hotelFacilityList"])
        .iter()
        .filter_map(|facility| lookup_text(facility, &["name"]))
        .collect();

    let image_url = image_url(&lookup_text(node, &["imgUrl"]).unwrap_or_default());

    Ok(HotelRecord {
        property_title,
        rating: lookup_or(node, &["rating"], NOT_AVAILABLE),
        location: location.to_owned(),
        latitude: lookup_or(node, &["lat"], NOT_AVAILABLE),
        longitude: lookup_or(node, &["lon"], NOT_AVAILABLE),
        room_type,
        price: lookup_or(node, &["displayPrice", "price"], NOT_AVAILABLE),
        image_urls: vec![image_url.clone()],
        image_url,
    })
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
