use chrono::{Datelike, Months, NaiveDate};

/// Hour-of-day slot index; schedules hold whole hours only.
pub type Hour = u8;

/// Weekday letters in Monday..Sunday order. Patterns are validated against
/// this alphabet and projection reads it to pick a date's letter.
pub const DAY_LETTERS: &str = "LMCJVSG";

/// Occupant label that closes slots instead of booking them.
pub const CLOSED: &str = "Closed";

/// Canonical letter for a date's weekday (`L` for Monday … `G` for Sunday).
pub fn weekday_letter(date: NaiveDate) -> char {
    let idx = date.weekday().num_days_from_monday() as usize;
    DAY_LETTERS.as_bytes()[idx] as char
}

/// Half-open hour range `[start, end)` within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourRange {
    pub start: Hour,
    pub end: Hour,
}

impl HourRange {
    pub fn new(start: Hour, end: Hour) -> Self {
        debug_assert!(start < end, "HourRange start must be before end");
        Self { start, end }
    }

    pub fn overlaps(&self, other: &HourRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Slot indexes covered by the range, ascending.
    pub fn hours(self) -> impl Iterator<Item = Hour> {
        self.start..self.end
    }
}

/// Target month plus the language pair for weekday-pattern translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleConfig {
    pub year: i32,
    pub month: u32,
    pub source_lang: String,
    pub target_lang: String,
}

/// One calendar month; every schedule is bound to exactly one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub year: i32,
    pub month: u32,
    first: NaiveDate,
    last: NaiveDate,
}

impl MonthWindow {
    /// None when the month number or year has no calendar representation.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
        Some(Self { year, month, first, last })
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        self.last
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first <= date && date <= self.last
    }

    /// Intersect an inclusive date range with the window; None when disjoint.
    pub fn clip(&self, start: NaiveDate, end: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        if end < self.first || start > self.last {
            return None;
        }
        Some((start.max(self.first), end.min(self.last)))
    }
}
