use chrono::{NaiveDate, NaiveDateTime};

use super::Timestamp;

/// Formats tried in order, most specific first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateFormat {
    /// `1957 Oct 4 1928`
    DateHourMinute,
    /// `1957 Oct 4`
    Date,
    /// `1957 Oct`
    YearMonth,
    /// `1957`
    Year,
}

const FORMATS: [DateFormat; 4] = [
    DateFormat::DateHourMinute,
    DateFormat::Date,
    DateFormat::YearMonth,
    DateFormat::Year,
];

impl DateFormat {
    fn parse(self, s: &str) -> Option<Timestamp> {
        match self {
            DateFormat::DateHourMinute => NaiveDateTime::parse_from_str(s, "%Y %b %d %H%M").ok(),
            DateFormat::Date => NaiveDate::parse_from_str(s, "%Y %b %d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0)),
            DateFormat::YearMonth => {
                // A bare "%Y %b" does not identify a day, pin it to the first.
                if s.split(' ').count() != 2 {
                    return None;
                }
                NaiveDate::parse_from_str(&format!("{} 1", s), "%Y %b %d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            }
            DateFormat::Year => {
                if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                let year: i32 = s.parse().ok()?;
                NaiveDate::from_ymd_opt(year, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0))
            }
        }
    }
}

/// Normalizer for the catalog's approximate date notation.
///
/// Never fails loudly: anything that cannot be read yields `None`.
pub struct DateNormalizer;

impl DateNormalizer {
    /// Parse a free-text catalog date.
    ///
    /// Blank input and a lone `?` mean "unknown". Trailing `?` and `s` markers
    /// flag estimated dates and are removed before parsing. Runs of internal
    /// whitespace (used for column alignment in the catalog) are collapsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use satlife_rust::time::DateNormalizer;
    ///
    /// let launch = DateNormalizer::parse("1957 Oct  4 1928").unwrap();
    /// assert_eq!(launch.to_string(), "1957-10-04 19:28:00");
    ///
    /// let decade = DateNormalizer::parse("1970s").unwrap();
    /// assert_eq!(decade.to_string(), "1970-01-01 00:00:00");
    ///
    /// assert!(DateNormalizer::parse("?").is_none());
    /// ```
    pub fn parse(text: &str) -> Option<Timestamp> {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed == "?" {
            return None;
        }

        let stripped = trimmed.trim_end_matches(|c| c == '?' || c == 's');
        let normalized = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
        if normalized.is_empty() {
            return None;
        }

        FORMATS.iter().find_map(|format| format.parse(&normalized))
    }

    /// Parse an optional cell; `None` input yields `None`.
    pub fn parse_opt(text: Option<&str>) -> Option<Timestamp> {
        text.and_then(Self::parse)
    }
}

/// Convenience wrapper around [`DateNormalizer::parse`].
pub fn parse_vague_date(text: &str) -> Option<Timestamp> {
    DateNormalizer::parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_order_prefers_most_specific() {
        let ts = DateNormalizer::parse("1990 Jan 05 0630").unwrap();
        assert_eq!(ts.to_string(), "1990-01-05 06:30:00");
    }

    #[test]
    fn test_year_month_pins_first_day() {
        let ts = DateNormalizer::parse("1962 Apr").unwrap();
        assert_eq!(ts.to_string(), "1962-04-01 00:00:00");
    }

    #[test]
    fn test_parse_opt_none() {
        assert!(DateNormalizer::parse_opt(None).is_none());
        assert!(DateNormalizer::parse_opt(Some("2001")).is_some());
    }
}
