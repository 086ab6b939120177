//! Metadata-completeness scores for map elements.
//!
//! Both scores are bounded to `0..=MAX_SCORE` and depend only on which tag
//! keys are present, never on their values.

use crate::Tags;

/// Upper bound for every score.
pub const MAX_SCORE: u8 = 10;

const WEBSITE_KEY: &str = "website";
const PHONE_KEY: &str = "phone";
const WIKIPEDIA_KEY: &str = "wikipedia";
const WIKIDATA_KEY: &str = "wikidata";

const WEBSITE_POINTS: u8 = 4;
const PHONE_POINTS: u8 = 3;
const ENCYCLOPAEDIA_POINTS: u8 = 3;

/// Estimate how much web presence an element advertises.
///
/// A website is worth 4 points, a phone number 3, and a Wikipedia or
/// Wikidata reference 3. The weights sum to [`MAX_SCORE`].
///
/// # Examples
/// ```
/// use playscout_core::{Tags, seo_saturation};
///
/// let tags = Tags::from([
///     ("website".to_owned(), "https://zoo.example".to_owned()),
///     ("wikidata".to_owned(), "Q1".to_owned()),
/// ]);
/// assert_eq!(seo_saturation(&tags), 7);
/// ```
#[must_use]
pub fn seo_saturation(tags: &Tags) -> u8 {
    let mut score = 0;
    if tags.contains_key(WEBSITE_KEY) {
        score += WEBSITE_POINTS;
    }
    if tags.contains_key(PHONE_KEY) {
        score += PHONE_POINTS;
    }
    if tags.contains_key(WIKIPEDIA_KEY) || tags.contains_key(WIKIDATA_KEY) {
        score += ENCYCLOPAEDIA_POINTS;
    }
    score.min(MAX_SCORE)
}

/// Count the tags carried by an element, capped at [`MAX_SCORE`].
#[must_use]
pub fn search_popularity(tags: &Tags) -> u8 {
    let capped = tags.len().min(usize::from(MAX_SCORE));
    u8::try_from(capped).unwrap_or(MAX_SCORE)
}
