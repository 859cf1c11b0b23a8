use chrono::NaiveDate;

use crate::model::{CLOSED, DAY_LETTERS, Hour, HourRange};

const DATE_FORMAT: &str = "%d/%m/%Y";

/// One recurring booking request.
///
/// Parsing never fails outright: every field problem is recorded on the
/// record itself and the record stays inspectable. Only `is_valid` records
/// ever reach a schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    activity: String,
    room: String,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    day_pattern: String,
    hours: Vec<HourRange>,
    /// Date and time-pattern problems, in field order. Fixed at parse.
    parse_errors: Vec<String>,
    /// Weekday-pattern problem. Re-derived when the pattern is rewritten.
    pattern_error: Option<String>,
    /// Start date after end date.
    range_error: Option<String>,
}

impl Reservation {
    /// Build a record from the six raw fields, collecting every problem
    /// instead of stopping at the first one.
    pub fn parse(
        activity: &str,
        room: &str,
        start_text: &str,
        end_text: &str,
        day_pattern: &str,
        time_text: &str,
    ) -> Self {
        let mut parse_errors = Vec::new();

        let start = parse_date(start_text, "start", &mut parse_errors);
        let end = parse_date(end_text, "end", &mut parse_errors);
        let hours = parse_time_ranges(time_text, &mut parse_errors);
        let pattern_error = day_pattern_error(day_pattern);

        let range_error = match (start, end) {
            (Some(s), Some(e)) if s > e => Some("start date after end date".to_string()),
            _ => None,
        };

        Self {
            activity: activity.to_string(),
            room: room.to_string(),
            start,
            end,
            day_pattern: day_pattern.to_string(),
            hours,
            parse_errors,
            pattern_error,
            range_error,
        }
    }

    pub fn activity(&self) -> &str {
        &self.activity
    }

    pub fn room(&self) -> &str {
        &self.room
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end
    }

    pub fn day_pattern(&self) -> &str {
        &self.day_pattern
    }

    pub fn hours(&self) -> &[HourRange] {
        &self.hours
    }

    pub fn is_closed(&self) -> bool {
        self.activity == CLOSED
    }

    /// All field problems joined with `"; "`, in field order.
    pub fn error(&self) -> Option<String> {
        let mut parts: Vec<&str> = self.parse_errors.iter().map(String::as_str).collect();
        if let Some(e) = &self.pattern_error {
            parts.push(e);
        }
        if let Some(e) = &self.range_error {
            parts.push(e);
        }
        if parts.is_empty() { None } else { Some(parts.join("; ")) }
    }

    /// Record is projectable: nothing failed and every field is present.
    pub fn is_valid(&self) -> bool {
        self.parse_errors.is_empty()
            && self.pattern_error.is_none()
            && self.range_error.is_none()
            && self.start.is_some()
            && self.end.is_some()
            && !self.day_pattern.is_empty()
            && !self.hours.is_empty()
    }

    /// Same record under a rewritten weekday pattern. The pattern check runs
    /// again, so a rewrite can clear (or introduce) a pattern problem.
    pub fn with_day_pattern(&self, pattern: &str) -> Self {
        Self {
            day_pattern: pattern.to_string(),
            pattern_error: day_pattern_error(pattern),
            ..self.clone()
        }
    }
}

fn parse_date(text: &str, which: &str, errors: &mut Vec<String>) -> Option<NaiveDate> {
    if zero_padded(text) && let Ok(date) = NaiveDate::parse_from_str(text, DATE_FORMAT) {
        return Some(date);
    }
    errors.push(format!("invalid {which} date '{text}', expected day/month/year"));
    None
}

/// chrono's `%d`/`%m` also take one-digit fields; record dates are strictly
/// zero-padded `dd/mm/yyyy`.
fn zero_padded(text: &str) -> bool {
    let mut parts = text.split('/');
    let (Some(day), Some(month), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    day.len() == 2
        && month.len() == 2
        && year.len() == 4
        && [day, month, year]
            .into_iter()
            .all(|field| field.bytes().all(|b| b.is_ascii_digit()))
}

/// Parse `start-end` tokens joined by `_`. One bad token fails the whole
/// field: the error names the token and no ranges are kept.
fn parse_time_ranges(text: &str, errors: &mut Vec<String>) -> Vec<HourRange> {
    if text.trim().is_empty() {
        errors.push("empty time pattern".to_string());
        return Vec::new();
    }
    let mut ranges = Vec::new();
    for token in text.split('_') {
        let parsed = token
            .split_once('-')
            .and_then(|(s, e)| Some((s.parse::<i32>().ok()?, e.parse::<i32>().ok()?)));
        let Some((start, end)) = parsed else {
            errors.push(format!("invalid time range '{token}', expected start-end"));
            return Vec::new();
        };
        if start < 0 || end > 24 || start >= end {
            errors.push(format!(
                "invalid time range '{token}', hours must be within 0-24 and start before end"
            ));
            return Vec::new();
        }
        ranges.push(HourRange::new(start as Hour, end as Hour));
    }
    ranges
}

fn day_pattern_error(pattern: &str) -> Option<String> {
    if pattern.is_empty() {
        return Some("empty weekday pattern".to_string());
    }
    // Only the first bad letter is reported.
    pattern
        .chars()
        .find(|c| !DAY_LETTERS.contains(*c))
        .map(|bad| format!("invalid weekday letter '{bad}', must be one of {DAY_LETTERS}"))
}
