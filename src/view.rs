use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::engine::{Agenda, RoomSchedule};
use crate::model::{Hour, MonthWindow};

/// Status label for a slot nobody booked or closed.
pub const FREE: &str = "free";

const EMPTY_AGENDA_NOTICE: &str =
    "No valid bookings found for the specified month. Check your booking requests file.";

/// Month report shaped for display: per room, the month grouped into
/// Monday-started weeks, plus the conflict log.
#[derive(Debug, Serialize)]
pub struct AgendaView {
    pub year: i32,
    pub month: u32,
    pub rooms: BTreeMap<String, Vec<WeekView>>,
    pub conflicts: Vec<String>,
}

/// Seven consecutive days starting on a Monday.
#[derive(Debug, Serialize)]
pub struct WeekView {
    pub start: NaiveDate,
    pub days: Vec<DayView>,
}

/// One display cell column. Days padding the first and last week out to
/// Monday..Sunday carry `in_month: false` and are always free.
#[derive(Debug, Serialize)]
pub struct DayView {
    pub date: NaiveDate,
    pub in_month: bool,
    pub hours: BTreeMap<Hour, String>,
}

impl DayView {
    pub fn status(&self, hour: Hour) -> &str {
        self.hours.get(&hour).map(String::as_str).unwrap_or(FREE)
    }
}

impl AgendaView {
    pub fn build(agenda: &Agenda) -> Self {
        let window = agenda.window();
        let mut rooms = BTreeMap::new();
        for (name, schedule) in agenda.rooms() {
            rooms.insert(name.clone(), month_weeks(schedule, window));
        }
        let mut conflicts = agenda.conflicts().to_vec();
        if rooms.is_empty() && conflicts.is_empty() {
            conflicts.push(EMPTY_AGENDA_NOTICE.to_string());
        }
        Self {
            year: window.year,
            month: window.month,
            rooms,
            conflicts,
        }
    }
}

/// Group the month into Monday-aligned weeks covering first..last day.
fn month_weeks(schedule: &RoomSchedule, window: MonthWindow) -> Vec<WeekView> {
    let first = window.first_day();
    let rewind = Days::new(u64::from(first.weekday().num_days_from_monday()));
    let Some(mut cursor) = first.checked_sub_days(rewind) else {
        return Vec::new();
    };

    let mut weeks = Vec::new();
    while cursor <= window.last_day() {
        let days = (0..7u64)
            .filter_map(|offset| cursor.checked_add_days(Days::new(offset)))
            .map(|date| {
                let in_month = window.contains(date);
                let hours = if in_month {
                    schedule.days().get(&date).cloned().unwrap_or_default()
                } else {
                    BTreeMap::new()
                };
                DayView { date, in_month, hours }
            })
            .collect();
        weeks.push(WeekView { start: cursor, days });
        match cursor.checked_add_days(Days::new(7)) {
            Some(next) => cursor = next,
            None => break,
        }
    }
    weeks
}

/// Plain-text month report: per room, each booked day on one line with the
/// occupied hours compacted into `start-end label` runs.
pub fn render_text(view: &AgendaView) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    let _ = writeln!(out, "Agenda for {:04}-{:02}", view.year, view.month);
    for (room, weeks) in &view.rooms {
        let _ = writeln!(out);
        let _ = writeln!(out, "Room {room}");
        for week in weeks {
            for day in week.days.iter().filter(|d| d.in_month && !d.hours.is_empty()) {
                let _ = write!(out, "  {}", day.date);
                for (start, end, label) in hour_runs(&day.hours) {
                    let _ = write!(out, "  {start}-{end} {label}");
                }
                let _ = writeln!(out);
            }
        }
    }
    if !view.conflicts.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Conflicts:");
        for line in &view.conflicts {
            let _ = writeln!(out, "  {line}");
        }
    }
    out
}

/// Collapse consecutive hours with the same label into half-open runs.
fn hour_runs(hours: &BTreeMap<Hour, String>) -> Vec<(Hour, Hour, &str)> {
    let mut runs: Vec<(Hour, Hour, &str)> = Vec::new();
    for (&hour, label) in hours {
        if let Some(last) = runs.last_mut()
            && last.1 == hour
            && last.2 == label.as_str()
        {
            last.1 = hour + 1;
            continue;
        }
        runs.push((hour, hour + 1, label.as_str()));
    }
    runs
}
