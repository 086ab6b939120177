//! Overpass QL for family attractions inside a named city.

use std::fmt;

/// `leisure=*` values that count as attractions.
pub const LEISURE_CATEGORIES: [&str; 3] = ["playground", "theme_park", "water_park"];
/// `tourism=*` values that count as attractions.
pub const TOURISM_CATEGORIES: [&str; 3] = ["zoo", "aquarium", "museum"];
/// `shop=*` value that counts as an attraction.
pub const SHOP_CATEGORY: &str = "toy";

const ADMIN_LEVELS: [&str; 3] = ["4", "5", "8"];
const PLACE_KINDS: [&str; 2] = ["city", "borough"];
const SERVER_TIMEOUT_SECS: u32 = 90;

/// An Overpass QL query selecting attractions within one city.
///
/// The city is matched case-insensitively against area names restricted to
/// administrative boundaries (levels 4, 5, 8) or `city`/`borough` places.
/// Ways and relations are returned with a computed centre.
///
/// # Examples
/// ```
/// use playscout_data::OverpassQuery;
///
/// let query = OverpassQuery::kids_attractions("berlin");
/// assert!(query.as_str().contains(r#"area["name"~"berlin",i]"#));
/// assert!(query.as_str().trim_end().ends_with("out center;"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverpassQuery {
    city: String,
    text: String,
}

impl OverpassQuery {
    /// Build the attraction query for `city`.
    #[must_use]
    pub fn kids_attractions(city: &str) -> Self {
        let pattern = escape_ql_string(city);
        let admin_levels = ADMIN_LEVELS.join("|");
        let place_kinds = PLACE_KINDS.join("|");
        let leisure = LEISURE_CATEGORIES.join("|");
        let tourism = TOURISM_CATEGORIES.join("|");
        let text = format!(
            "[out:json][timeout:{SERVER_TIMEOUT_SECS}];\n\
             (\n\
             \x20 area[\"name\"~\"{pattern}\",i][\"admin_level\"~\"{admin_levels}\"];\n\
             \x20 area[\"name\"~\"{pattern}\",i][\"place\"~\"{place_kinds}\"];\n\
             )->.searchArea;\n\
             (\n\
             \x20 nwr[\"leisure\"~\"{leisure}\"](area.searchArea);\n\
             \x20 nwr[\"tourism\"~\"{tourism}\"](area.searchArea);\n\
             \x20 nwr[\"shop\"=\"{SHOP_CATEGORY}\"](area.searchArea);\n\
             );\n\
             out center;\n"
        );
        Self {
            city: city.to_owned(),
            text,
        }
    }

    /// City the query was built for.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Query text to send to the interpreter.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for OverpassQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Escape a value for embedding in a double-quoted QL string.
fn escape_ql_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '\\' | '"') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn query_targets_city_areas() {
        let query = OverpassQuery::kids_attractions("Hamburg");

        assert_eq!(query.city(), "Hamburg");
        let text = query.as_str();
        assert!(text.starts_with("[out:json][timeout:90];"));
        assert!(text.contains(r#"area["name"~"Hamburg",i]["admin_level"~"4|5|8"];"#));
        assert!(text.contains(r#"area["name"~"Hamburg",i]["place"~"city|borough"];"#));
        assert!(text.contains(")->.searchArea;"));
    }

    #[rstest]
    fn query_selects_every_category() {
        let text = OverpassQuery::kids_attractions("berlin").to_string();

        assert!(text.contains(r#"nwr["leisure"~"playground|theme_park|water_park"](area.searchArea);"#));
        assert!(text.contains(r#"nwr["tourism"~"zoo|aquarium|museum"](area.searchArea);"#));
        assert!(text.contains(r#"nwr["shop"="toy"](area.searchArea);"#));
        assert!(text.ends_with("out center;\n"));
    }

    #[rstest]
    #[case("berlin", "berlin")]
    #[case(r#"say "hi""#, r#"say \"hi\""#)]
    #[case(r"back\slash", r"back\\slash")]
    fn city_is_escaped_inside_quotes(#[case] city: &str, #[case] expected: &str) {
        let query = OverpassQuery::kids_attractions(city);
        let needle = format!(r#"area["name"~"{expected}",i]"#);
        assert!(query.as_str().contains(&needle), "missing {needle}");
    }
}
