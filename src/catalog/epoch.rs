use chrono::NaiveDateTime;

const INPUT_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];
const OUTPUT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Truncates an ISO-8601 epoch to whole seconds as `YYYY-MM-DD HH:MM:SS`.
///
/// Fractional seconds and anything after them are dropped. Text that does not
/// start with a date and time is returned unchanged.
pub fn parse_epoch(text: &str) -> String {
    let head = text.get(..19).unwrap_or(text);
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(head, fmt).ok())
        .map(|dt| dt.format(OUTPUT_FORMAT).to_string())
        .unwrap_or_else(|| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_fractional_seconds() {
        assert_eq!(
            parse_epoch("2026-02-22T10:00:00.123456"),
            "2026-02-22 10:00:00"
        );
    }

    #[test]
    fn accepts_whole_seconds_and_space_separator() {
        assert_eq!(parse_epoch("2026-02-21T23:59:59"), "2026-02-21 23:59:59");
        assert_eq!(parse_epoch("2026-02-21 23:59:59Z"), "2026-02-21 23:59:59");
    }

    #[test]
    fn unparseable_text_is_returned_as_is() {
        assert_eq!(parse_epoch("26053.41666667"), "26053.41666667");
        assert_eq!(parse_epoch("2026-13-40T99:00:00"), "2026-13-40T99:00:00");
        assert_eq!(parse_epoch(""), "");
    }
}
