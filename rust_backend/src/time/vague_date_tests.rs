#[cfg(test)]
mod tests {
    use crate::time::vague_date::{parse_vague_date, DateNormalizer};
    use chrono::{Datelike, NaiveDate, Timelike};
    use proptest::prelude::*;

    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];

    #[test]
    fn test_blank_and_unknown_are_absent() {
        assert!(DateNormalizer::parse("").is_none());
        assert!(DateNormalizer::parse("   ").is_none());
        assert!(DateNormalizer::parse("?").is_none());
        assert!(DateNormalizer::parse(" ? ").is_none());
    }

    #[test]
    fn test_only_markers_is_absent() {
        assert!(DateNormalizer::parse("??").is_none());
        assert!(DateNormalizer::parse("s").is_none());
    }

    #[test]
    fn test_garbage_is_absent() {
        assert!(DateNormalizer::parse("-").is_none());
        assert!(DateNormalizer::parse("unknown").is_none());
        assert!(DateNormalizer::parse("1990 Foo 12").is_none());
        assert!(DateNormalizer::parse("19").is_none());
        assert!(DateNormalizer::parse("1990 Jan 32").is_none());
    }

    #[test]
    fn test_full_timestamp() {
        let ts = parse_vague_date("1957 Oct  4 1928").unwrap();
        assert_eq!(ts.year(), 1957);
        assert_eq!(ts.month(), 10);
        assert_eq!(ts.day(), 4);
        assert_eq!(ts.hour(), 19);
        assert_eq!(ts.minute(), 28);
    }

    #[test]
    fn test_calendar_date() {
        let ts = parse_vague_date("1998 Nov 20").unwrap();
        assert_eq!(
            ts,
            NaiveDate::from_ymd_opt(1998, 11, 20)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_approximate_markers_stripped() {
        let exact = parse_vague_date("2003 Jun 10").unwrap();
        assert_eq!(parse_vague_date("2003 Jun 10?").unwrap(), exact);
        assert_eq!(parse_vague_date("  2003 Jun 10 ?").unwrap(), exact);
        assert_eq!(parse_vague_date("1970s").unwrap().year(), 1970);
        assert_eq!(parse_vague_date("1985?").unwrap().year(), 1985);
    }

    proptest! {
        #[test]
        fn prop_markers_do_not_change_date(
            year in 1950i32..2030,
            month in 0usize..12,
            day in 1u32..=28,
            hour in 0u32..24,
            minute in 0u32..60,
            precision in 0usize..4,
            marker in prop::sample::select(vec!["", "?", "s", "??", "?s"]),
        ) {
            let base = match precision {
                0 => format!("{} {} {:>2} {:02}{:02}", year, MONTHS[month], day, hour, minute),
                1 => format!("{} {} {:02}", year, MONTHS[month], day),
                2 => format!("{} {}", year, MONTHS[month]),
                _ => format!("{}", year),
            };
            let plain = DateNormalizer::parse(&base);
            prop_assert!(plain.is_some(), "failed to parse {:?}", base);

            let marked = DateNormalizer::parse(&format!("{}{}", base, marker));
            prop_assert_eq!(marked, plain);

            let date = plain.unwrap().date();
            prop_assert_eq!(date.year(), year);
            match precision {
                0 | 1 => {
                    prop_assert_eq!(date.month() as usize, month + 1);
                    prop_assert_eq!(date.day(), day);
                }
                2 => {
                    prop_assert_eq!(date.month() as usize, month + 1);
                    prop_assert_eq!(date.day(), 1);
                }
                _ => {
                    prop_assert_eq!(date.month(), 1);
                    prop_assert_eq!(date.day(), 1);
                }
            }
        }
    }
}
