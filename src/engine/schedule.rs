use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use chrono::NaiveDate;

use crate::model::{CLOSED, Hour, MonthWindow, weekday_letter};
use crate::reservation::Reservation;

/// Hour-granularity occupancy for one room in one month. Slots are created
/// on first write; an absent slot is free.
#[derive(Debug, Clone)]
pub struct RoomSchedule {
    window: MonthWindow,
    days: BTreeMap<NaiveDate, BTreeMap<Hour, String>>,
}

impl RoomSchedule {
    pub fn new(window: MonthWindow) -> Self {
        Self {
            window,
            days: BTreeMap::new(),
        }
    }

    pub fn occupant(&self, date: NaiveDate, hour: Hour) -> Option<&str> {
        self.days
            .get(&date)
            .and_then(|slots| slots.get(&hour))
            .map(String::as_str)
    }

    /// Occupied slots by date, ascending. Dates with no bookings are absent.
    pub fn days(&self) -> &BTreeMap<NaiveDate, BTreeMap<Hour, String>> {
        &self.days
    }

    /// Paint a record onto the month: clip its date range to the window, keep
    /// the dates whose weekday letter appears in the pattern, then claim every
    /// hour of every range. Returns one description per slot that was already
    /// taken; the existing occupant always keeps the slot.
    pub fn project(&mut self, rec: &Reservation) -> Vec<String> {
        let mut conflicts = Vec::new();
        let (Some(start), Some(end)) = (rec.start_date(), rec.end_date()) else {
            return conflicts;
        };
        let Some((from, to)) = self.window.clip(start, end) else {
            return conflicts;
        };

        let mut date = from;
        while date <= to {
            if rec.day_pattern().contains(weekday_letter(date)) {
                for range in rec.hours() {
                    for hour in range.hours() {
                        self.claim(date, hour, rec, &mut conflicts);
                    }
                }
            }
            let Some(next) = date.succ_opt() else { break };
            date = next;
        }
        conflicts
    }

    fn claim(&mut self, date: NaiveDate, hour: Hour, rec: &Reservation, conflicts: &mut Vec<String>) {
        let slots = self.days.entry(date).or_default();
        match slots.entry(hour) {
            Entry::Vacant(slot) => {
                slot.insert(rec.activity().to_string());
            }
            Entry::Occupied(slot) => {
                let occupant = slot.get();
                if rec.is_closed() && occupant == CLOSED {
                    return; // closing twice is a no-op
                }
                conflicts.push(format!(
                    "Time slot {}-{} on {} already booked for '{}'",
                    hour,
                    hour + 1,
                    date,
                    occupant
                ));
            }
        }
    }
}
