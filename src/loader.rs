use tracing::warn;

use crate::model::ScheduleConfig;
use crate::reservation::Reservation;

#[derive(Debug)]
pub enum LoadError {
    MissingLine(&'static str),
    BadDateLine(String),
    BadLanguageLine(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::MissingLine(what) => {
                write!(f, "config ended before the {what} line")
            }
            LoadError::BadDateLine(line) => {
                write!(f, "bad config date line '{line}', expected '<year> <month>'")
            }
            LoadError::BadLanguageLine(line) => {
                write!(f, "bad config language line '{line}', expected '<source> <target>'")
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// Parse the two-line config format: `<year> <month>` then `<source> <target>`,
/// exactly two fields per line. The month number is range-checked by the
/// engine, not here.
pub fn parse_config(text: &str) -> Result<ScheduleConfig, LoadError> {
    let mut lines = text.lines();
    let date_line = lines.next().ok_or(LoadError::MissingLine("year/month"))?;
    let lang_line = lines.next().ok_or(LoadError::MissingLine("language pair"))?;

    let fields: Vec<&str> = date_line.split_whitespace().collect();
    if fields.len() != 2 {
        return Err(LoadError::BadDateLine(date_line.to_string()));
    }
    let year: i32 = fields[0]
        .parse()
        .map_err(|_| LoadError::BadDateLine(date_line.to_string()))?;
    let month: u32 = fields[1]
        .parse()
        .map_err(|_| LoadError::BadDateLine(date_line.to_string()))?;

    let fields: Vec<&str> = lang_line.split_whitespace().collect();
    if fields.len() != 2 {
        return Err(LoadError::BadLanguageLine(lang_line.to_string()));
    }

    Ok(ScheduleConfig {
        year,
        month,
        source_lang: fields[0].to_string(),
        target_lang: fields[1].to_string(),
    })
}

/// Parse booking request lines: six whitespace-separated fields per line,
/// extra fields ignored. Blank lines are skipped; lines with fewer than six
/// fields are logged and dropped. Records that tokenize but fail validation
/// are kept; the agenda reports those individually.
pub fn parse_requests(text: &str) -> Vec<Reservation> {
    let mut records = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 6 {
            warn!("request line {}: expected 6 fields, got {}", idx + 1, fields.len());
            continue;
        }
        records.push(Reservation::parse(
            fields[0], fields[1], fields[2], fields[3], fields[4], fields[5],
        ));
    }
    records
}
