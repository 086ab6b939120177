//! Text normalisation shared by record construction.

/// Title-case `input` word by word.
///
/// An alphabetic character is upper-cased when it starts the string or
/// follows a non-alphabetic character, and lower-cased otherwise. Underscores
/// and apostrophes therefore start new words.
///
/// # Examples
/// ```
/// use playscout_core::title_case;
///
/// assert_eq!(title_case("berlin"), "Berlin");
/// assert_eq!(title_case("theme_park"), "Theme_Park");
/// assert_eq!(title_case("NEW YORK"), "New York");
/// ```
#[must_use]
pub fn title_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut inside_word = false;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if inside_word {
                output.extend(ch.to_lowercase());
            } else {
                output.extend(ch.to_uppercase());
            }
            inside_word = true;
        } else {
            output.push(ch);
            inside_word = false;
        }
    }
    output
}
