use std::collections::BTreeMap;

use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::score::{search_popularity, seo_saturation};
use crate::text::title_case;

/// OpenStreetMap-style key/value tags.
pub type Tags = BTreeMap<String, String>;

/// Label used when an element carries no recognised category tag.
pub const FALLBACK_KIND: &str = "Attraction";

const NAME_TAG: &str = "name";
const KIND_TAGS: [&str; 2] = ["tourism", "leisure"];

/// WGS84 position persisted as `{"lat": .., "lng": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl Coordinates {
    /// Construct coordinates from a latitude/longitude pair.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<Coord<f64>> for Coordinates {
    fn from(coord: Coord<f64>) -> Self {
        Self::new(coord.y, coord.x)
    }
}

impl From<Coordinates> for Coord<f64> {
    fn from(coordinates: Coordinates) -> Self {
        Self {
            x: coordinates.lng,
            y: coordinates.lat,
        }
    }
}

/// A family attraction found in a city.
///
/// `name` is the collection key: two attractions with the same name are the
/// same record as far as merging is concerned, whatever their other fields.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use playscout_core::{Attraction, Tags};
///
/// let tags = Tags::from([
///     ("name".to_owned(), "Tierpark".to_owned()),
///     ("tourism".to_owned(), "zoo".to_owned()),
///     ("website".to_owned(), "https://tierpark.example".to_owned()),
/// ]);
/// let attraction = Attraction::from_tags("berlin", Coord { x: 13.53, y: 52.50 }, &tags)
///     .expect("named element");
///
/// assert_eq!(attraction.city, "Berlin");
/// assert_eq!(attraction.kind, "Zoo");
/// assert_eq!(attraction.seo_saturation, 4);
/// assert_eq!(attraction.search_popularity, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attraction {
    /// Title-cased city the attraction was collected for.
    pub city: String,
    /// Display name and unique key.
    pub name: String,
    /// Title-cased category, e.g. `Zoo` or `Playground`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Position of the element or of its centroid.
    pub coordinates: Coordinates,
    /// Web-presence score in `0..=10`.
    pub seo_saturation: u8,
    /// Tag-count score in `0..=10`.
    pub search_popularity: u8,
}

impl Attraction {
    /// Build a scored attraction from a located, tagged map element.
    ///
    /// Returns `None` when the element has no usable `name` tag.
    #[must_use]
    pub fn from_tags(city: &str, location: Coord<f64>, tags: &Tags) -> Option<Self> {
        let name = tags.get(NAME_TAG).filter(|name| !name.is_empty())?;
        Some(Self {
            city: title_case(city),
            name: name.clone(),
            kind: kind_of(tags),
            coordinates: Coordinates::from(location),
            seo_saturation: seo_saturation(tags),
            search_popularity: search_popularity(tags),
        })
    }
}

fn kind_of(tags: &Tags) -> String {
    let raw = KIND_TAGS
        .iter()
        .find_map(|key| tags.get(*key).filter(|value| !value.is_empty()))
        .map_or(FALLBACK_KIND, String::as_str);
    title_case(raw)
}
