mod schedule;

pub use schedule::RoomSchedule;

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::model::{CLOSED, MonthWindow, ScheduleConfig};
use crate::reservation::Reservation;
use crate::translate::WeekdayTable;

#[derive(Debug, PartialEq, Eq)]
pub enum EngineError {
    InvalidWindow { year: i32, month: u32 },
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidWindow { year, month } => {
                write!(f, "no calendar month for year {year} month {month}")
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// One month of room schedules plus the conflict log, filled by a single
/// ingestion run. Rooms exist once something references them; nothing is
/// predeclared and nothing survives the run.
#[derive(Debug)]
pub struct Agenda {
    config: ScheduleConfig,
    window: MonthWindow,
    rooms: BTreeMap<String, RoomSchedule>,
    conflicts: Vec<String>,
}

impl Agenda {
    pub fn new(config: ScheduleConfig) -> Result<Self, EngineError> {
        let window = MonthWindow::new(config.year, config.month).ok_or(
            EngineError::InvalidWindow {
                year: config.year,
                month: config.month,
            },
        )?;
        Ok(Self {
            config,
            window,
            rooms: BTreeMap::new(),
            conflicts: Vec::new(),
        })
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    pub fn window(&self) -> MonthWindow {
        self.window
    }

    pub fn rooms(&self) -> &BTreeMap<String, RoomSchedule> {
        &self.rooms
    }

    /// Conflict descriptions and invalid-record reports, in ingestion order.
    pub fn conflicts(&self) -> &[String] {
        &self.conflicts
    }

    /// Project a batch of records. Blackout records go first so a closure can
    /// never lose its slot to an ordinary activity, whatever the input order.
    /// One bad record never stops the batch.
    pub fn ingest(&mut self, table: &WeekdayTable, records: &[Reservation]) {
        for rec in records.iter().filter(|r| r.activity() == CLOSED) {
            self.ingest_one(table, rec);
        }
        for rec in records.iter().filter(|r| r.activity() != CLOSED) {
            self.ingest_one(table, rec);
        }
    }

    fn ingest_one(&mut self, table: &WeekdayTable, rec: &Reservation) {
        let translated =
            table.translate(rec.day_pattern(), &self.config.source_lang, &self.config.target_lang);
        if translated != rec.day_pattern() {
            self.project_record(&rec.with_day_pattern(&translated));
        } else {
            self.project_record(rec);
        }
    }

    fn project_record(&mut self, rec: &Reservation) {
        if !rec.is_valid() {
            let entry = match rec.error() {
                Some(detail) => {
                    format!("Invalid reservation format: {} - {}", rec.activity(), detail)
                }
                None => format!("Invalid reservation format: {}", rec.activity()),
            };
            warn!("{entry}");
            self.conflicts.push(entry);
            return;
        }
        // is_valid guarantees both dates are present
        let (Some(start), Some(end)) = (rec.start_date(), rec.end_date()) else {
            return;
        };
        if self.window.clip(start, end).is_none() {
            // Outside the target month: not an error, and the room (if new)
            // stays untracked.
            return;
        }

        let window = self.window;
        let schedule = self
            .rooms
            .entry(rec.room().to_string())
            .or_insert_with(|| RoomSchedule::new(window));
        for detail in schedule.project(rec) {
            let entry = format!(
                "Conflict in room {} for activity {}: {}",
                rec.room(),
                rec.activity(),
                detail
            );
            debug!("{entry}");
            self.conflicts.push(entry);
        }
    }
}
