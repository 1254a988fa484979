use chrono::NaiveDate;

/// Date form used by upstream web forms: `MM-DD-YYYY`.
pub const WEB_DATE_FORMAT: &str = "%m-%d-%Y";

/// ISO date form: `YYYY-MM-DD`.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a date written in either the ISO or the web form.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, ISO_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(s, WEB_DATE_FORMAT))
        .ok()
}

/// Formats a date in the web form.
pub fn to_web_date(date: NaiveDate) -> String {
    date.format(WEB_DATE_FORMAT).to_string()
}

/// Whole years from `date_of_birth` to `at`, or `None` when the birth date
/// is in the future.
pub fn age_at(date_of_birth: NaiveDate, at: NaiveDate) -> Option<u32> {
    at.years_since(date_of_birth)
}
