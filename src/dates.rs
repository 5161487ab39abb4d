use chrono::{Local, NaiveDate};

pub const STORAGE_KEY_PREFIX: &str = "blink-focus-";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn storage_key(date: NaiveDate) -> String {
    format!("{STORAGE_KEY_PREFIX}{}", date.format("%Y-%m-%d"))
}

pub fn date_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}
