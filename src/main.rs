use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use horario::engine::Agenda;
use horario::loader;
use horario::translate::WeekdayTable;
use horario::view::{self, AgendaView};

/// Project recurring room bookings onto a monthly agenda and report conflicts.
#[derive(Parser, Debug)]
#[command(name = "horario", version)]
struct Args {
    /// Config file: a year/month line, then a source/target language line.
    config: PathBuf,
    /// Booking requests file: six whitespace-separated fields per line.
    requests: PathBuf,
    /// Emit the agenda as pretty JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let config_text = std::fs::read_to_string(&args.config)?;
    let requests_text = std::fs::read_to_string(&args.requests)?;

    let config = loader::parse_config(&config_text)?;
    let records = loader::parse_requests(&requests_text);
    info!(
        "loaded {} booking requests for {:04}-{:02}",
        records.len(),
        config.year,
        config.month
    );

    let table = WeekdayTable::new();
    let mut agenda = Agenda::new(config)?;
    agenda.ingest(&table, &records);
    info!(
        "{} rooms scheduled, {} conflicts",
        agenda.rooms().len(),
        agenda.conflicts().len()
    );

    let view = AgendaView::build(&agenda);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", view::render_text(&view));
    }
    Ok(())
}
