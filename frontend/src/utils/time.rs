use chrono::{DateTime, NaiveDate, Utc};

/// Parses the `YYYY-MM-DD` value of a date input.
pub fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Start of the given day in UTC, the form the leave API stores.
pub fn start_of_day_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

pub fn format_date(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parse_date_input_accepts_iso_dates_only() {
        assert_eq!(
            parse_date_input(" 2025-03-01 "),
            NaiveDate::from_ymd_opt(2025, 3, 1)
        );
        assert!(parse_date_input("").is_none());
        assert!(parse_date_input("01/03/2025").is_none());
        assert!(parse_date_input("2025-02-30").is_none());
    }

    #[test]
    fn start_of_day_is_midnight_utc() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(
            start_of_day_utc(date),
            Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn format_date_drops_time_of_day() {
        let value = Utc.with_ymd_and_hms(2025, 12, 24, 18, 30, 0).unwrap();
        assert_eq!(format_date(&value), "2025-12-24");
    }
}
