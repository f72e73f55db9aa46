use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn format_date(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Compact `MM-DD` label used on the chart's date axis.
pub fn short_label(d: NaiveDate) -> String {
    d.format("%m-%d").to_string()
}
