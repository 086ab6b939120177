//! Serde models for Overpass JSON output.

use geo::Coord;
use playscout_core::Tags;
use serde::Deserialize;

/// Top-level Overpass response body.
///
/// A body without an `elements` array decodes as an empty response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OverpassResponse {
    /// Matched nodes, ways, and relations.
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
}

/// Centre point computed by `out center;` for ways and relations.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Center {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

/// One element of an Overpass response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OverpassElement {
    /// `node`, `way`, or `relation`.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// OSM identifier.
    #[serde(default)]
    pub id: u64,
    /// Node latitude.
    #[serde(default)]
    pub lat: Option<f64>,
    /// Node longitude.
    #[serde(default)]
    pub lon: Option<f64>,
    /// Centroid for ways and relations.
    #[serde(default)]
    pub center: Option<Center>,
    /// Element tags.
    #[serde(default)]
    pub tags: Tags,
}

impl OverpassElement {
    /// Position of the element.
    ///
    /// Each axis uses the element's own value when present and otherwise the
    /// centre's. Returns `None` when either axis stays unresolved.
    #[must_use]
    pub fn location(&self) -> Option<Coord<f64>> {
        let center = self.center.as_ref();
        let lat = self.lat.or_else(|| center.map(|c| c.lat))?;
        let lon = self.lon.or_else(|| center.map(|c| c.lon))?;
        Some(Coord { x: lon, y: lat })
    }
}
