// ==========================================
// Binari Ammissibili - track name normalization
// ==========================================
// Single normalization step for identifiers carrying a number (Roman or
// decimal) and an optional suffix word; every filter and criterion consumes
// the parsed form, never the raw string.
// ==========================================

/// Roman numeral values for track names I..XXV
const ROMAN: [(&str, i64); 25] = [
    ("I", 1),
    ("II", 2),
    ("III", 3),
    ("IV", 4),
    ("V", 5),
    ("VI", 6),
    ("VII", 7),
    ("VIII", 8),
    ("IX", 9),
    ("X", 10),
    ("XI", 11),
    ("XII", 12),
    ("XIII", 13),
    ("XIV", 14),
    ("XV", 15),
    ("XVI", 16),
    ("XVII", 17),
    ("XVIII", 18),
    ("XIX", 19),
    ("XX", 20),
    ("XXI", 21),
    ("XXII", 22),
    ("XXIII", 23),
    ("XXIV", 24),
    ("XXV", 25),
];

/// Parsed track identifier
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedTrackName {
    /// Leading numeric portion (decimal or Roman), when recognizable
    pub number: Option<i64>,

    /// Second word of the identifier ("BIS", "NORD", ...), empty when absent
    pub suffix: String,

    /// Upper-cased, whitespace-collapsed identifier
    pub normalized: String,
}

impl ParsedTrackName {
    pub fn has_suffix(&self) -> bool {
        !self.suffix.is_empty()
    }

    pub fn is_bis(&self) -> bool {
        self.suffix == "BIS"
    }
}

fn roman_to_number(token: &str) -> Option<i64> {
    ROMAN
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, value)| *value)
}

/// Parse a raw track identifier into `{number, suffix, normalized}`
///
/// Empty or blank input yields an all-empty parse, not an error.
pub fn parse_track_name(name: &str) -> ParsedTrackName {
    let normalized = name
        .trim()
        .to_uppercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if normalized.is_empty() {
        return ParsedTrackName::default();
    }

    let mut parts = normalized.split(' ');
    let first = parts.next().unwrap_or("");
    let number = first
        .parse::<i64>()
        .ok()
        .filter(|_| first.chars().all(|c| c.is_ascii_digit()))
        .or_else(|| roman_to_number(first));
    let suffix = parts.next().unwrap_or("").to_string();

    ParsedTrackName {
        number,
        suffix,
        normalized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roman_numbers() {
        let parsed = parse_track_name("XIV");
        assert_eq!(parsed.number, Some(14));
        assert_eq!(parsed.suffix, "");
        assert_eq!(parsed.normalized, "XIV");
    }

    #[test]
    fn test_decimal_numbers() {
        let parsed = parse_track_name("15");
        assert_eq!(parsed.number, Some(15));
    }

    #[test]
    fn test_bis_suffix() {
        let parsed = parse_track_name("v bis");
        assert_eq!(parsed.number, Some(5));
        assert_eq!(parsed.suffix, "BIS");
        assert!(parsed.is_bis());
        assert_eq!(parsed.normalized, "V BIS");
    }

    #[test]
    fn test_nord_suffix() {
        let parsed = parse_track_name("I NORD");
        assert_eq!(parsed.number, Some(1));
        assert_eq!(parsed.suffix, "NORD");
    }

    #[test]
    fn test_whitespace_collapse() {
        let parsed = parse_track_name("  vii   BIS  ");
        assert_eq!(parsed.normalized, "VII BIS");
        assert_eq!(parsed.number, Some(7));
    }

    #[test]
    fn test_unrecognizable_number() {
        let parsed = parse_track_name("SSE AMB.");
        assert_eq!(parsed.number, None);
        assert_eq!(parsed.suffix, "AMB.");
        assert_eq!(parsed.normalized, "SSE AMB.");
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(parse_track_name("   "), ParsedTrackName::default());
    }
}
