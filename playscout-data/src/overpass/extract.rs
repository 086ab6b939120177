//! Convert Overpass elements into scored attractions.

use log::debug;
use playscout_core::Attraction;

use super::OverpassElement;

/// Build attractions for `city` from raw elements, preserving order.
///
/// Elements without a non-empty `name` tag or without a resolvable position
/// are skipped.
#[must_use]
pub fn extract_attractions(city: &str, elements: &[OverpassElement]) -> Vec<Attraction> {
    let attractions: Vec<Attraction> = elements
        .iter()
        .filter_map(|element| {
            let location = element.location()?;
            Attraction::from_tags(city, location, &element.tags)
        })
        .collect();
    let skipped = elements.len() - attractions.len();
    if skipped > 0 {
        debug!("skipped {skipped} of {} elements for {city}", elements.len());
    }
    attractions
}
