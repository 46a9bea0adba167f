pub mod clipboard;
pub mod export;
pub mod ics;
pub mod link;
pub mod schedule;

use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CalendarError {
    #[error("Unparseable date: {month} {day} {year}")]
    UnparseableDate {
        month: String,
        day: String,
        year: String,
    },

    #[error("{0} does not exist in the configured timezone")]
    NonexistentLocalTime(NaiveDateTime),
}

/// Month abbreviations as the catalog writes them
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::EnumIter)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// 1-based, as chrono expects
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }
}
