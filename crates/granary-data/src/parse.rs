//! Text processing for raw imported rows.
//!
//! External goods listings arrive as display text: durations like
//! "2 h 30 min", need lists like "Wheat (3) Egg (1)", source cells like
//! "Bakery (Level 2)". These helpers turn that text into typed values.
//! Malformed entries inside a list are logged and skipped; only a string
//! that cannot be interpreted at all yields a [`ParseError`].

use granary_core::Minutes;
use regex::Regex;
use std::sync::OnceLock;

/// Errors for strings that cannot be interpreted.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unrecognized duration string: '{0}'")]
    InvalidDuration(String),
}

fn duration_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:(\d+)\s*h)?\s*(?:(\d+)\s*min)?").expect("duration pattern is valid")
    })
}

fn needs_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([^()]+)\s*\((\d+)\)").expect("needs pattern is valid"))
}

/// Parse a production duration like "2 h", "45 min", or "1 h 30 min" into
/// minutes. A string containing neither component is an error.
pub fn parse_duration(text: &str) -> Result<Minutes, ParseError> {
    let captures = duration_re()
        .captures(text)
        .ok_or_else(|| ParseError::InvalidDuration(text.to_string()))?;

    let hours = captures.get(1).map(|m| m.as_str());
    let minutes = captures.get(2).map(|m| m.as_str());
    if hours.is_none() && minutes.is_none() {
        return Err(ParseError::InvalidDuration(text.to_string()));
    }

    let hours: Minutes = hours
        .map(str::parse)
        .transpose()
        .map_err(|_| ParseError::InvalidDuration(text.to_string()))?
        .unwrap_or(0);
    let minutes: Minutes = minutes
        .map(str::parse)
        .transpose()
        .map_err(|_| ParseError::InvalidDuration(text.to_string()))?
        .unwrap_or(0);

    Ok(hours * 60 + minutes)
}

/// Parse a need list like "wheat (3) brown sugar (1)" into capitalized
/// (name, quantity) pairs. "N/A" and empty input mean "no recipe"; entries
/// with out-of-range amounts are logged and skipped.
pub fn parse_needs(raw: &str) -> Vec<(String, u32)> {
    if raw.is_empty() || raw == "N/A" {
        return Vec::new();
    }

    let mut needs = Vec::new();
    for captures in needs_re().captures_iter(raw) {
        let name = capitalize_words(captures[1].trim());
        match captures[2].parse::<u32>() {
            Ok(quantity) => needs.push((name, quantity)),
            Err(err) => log::warn!("skipping need '{name}': bad amount ({err})"),
        }
    }
    needs
}

/// Title-case each whitespace-separated word, collapsing runs of whitespace.
pub fn capitalize_words(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip a parenthesized suffix from a source cell: "Bakery (Level 2)"
/// becomes "Bakery".
pub fn normalize_source(raw: &str) -> String {
    let head = raw.split_once('(').map_or(raw, |(head, _)| head);
    head.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // parse_duration
    // -----------------------------------------------------------------------

    #[test]
    fn duration_minutes_only() {
        assert_eq!(parse_duration("5 min").unwrap(), 5);
    }

    #[test]
    fn duration_hours_only() {
        assert_eq!(parse_duration("2 h").unwrap(), 120);
    }

    #[test]
    fn duration_hours_and_minutes() {
        assert_eq!(parse_duration("1 h 30 min").unwrap(), 90);
    }

    #[test]
    fn duration_without_spaces() {
        assert_eq!(parse_duration("2h 15min").unwrap(), 135);
    }

    #[test]
    fn duration_garbage_is_an_error() {
        assert!(matches!(
            parse_duration("Instant"),
            Err(ParseError::InvalidDuration(_))
        ));
    }

    #[test]
    fn duration_empty_is_an_error() {
        assert!(parse_duration("").is_err());
    }

    // -----------------------------------------------------------------------
    // parse_needs
    // -----------------------------------------------------------------------

    #[test]
    fn needs_single_entry() {
        assert_eq!(parse_needs("wheat (3)"), vec![("Wheat".to_string(), 3)]);
    }

    #[test]
    fn needs_multiple_entries() {
        let needs = parse_needs("wheat (3) brown sugar (1)");
        assert_eq!(
            needs,
            vec![
                ("Wheat".to_string(), 3),
                ("Brown Sugar".to_string(), 1),
            ]
        );
    }

    #[test]
    fn needs_not_applicable_is_empty() {
        assert!(parse_needs("N/A").is_empty());
        assert!(parse_needs("").is_empty());
    }

    #[test]
    fn needs_text_without_amounts_is_empty() {
        assert!(parse_needs("just some words").is_empty());
    }

    #[test]
    fn needs_overlong_amount_is_skipped() {
        let needs = parse_needs("wheat (99999999999999999999) egg (1)");
        assert_eq!(needs, vec![("Egg".to_string(), 1)]);
    }

    // -----------------------------------------------------------------------
    // capitalize_words / normalize_source
    // -----------------------------------------------------------------------

    #[test]
    fn capitalize_lowercases_the_tail() {
        assert_eq!(capitalize_words("BROWN sugar"), "Brown Sugar");
    }

    #[test]
    fn capitalize_collapses_whitespace() {
        assert_eq!(capitalize_words("  goat   cheese "), "Goat Cheese");
    }

    #[test]
    fn capitalize_empty_is_empty() {
        assert_eq!(capitalize_words(""), "");
    }

    #[test]
    fn source_suffix_is_stripped() {
        assert_eq!(normalize_source("Bakery (Level 2)"), "Bakery");
    }

    #[test]
    fn source_without_suffix_is_trimmed() {
        assert_eq!(normalize_source("  Field "), "Field");
    }
}
