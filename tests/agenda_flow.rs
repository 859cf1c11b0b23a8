use horario::engine::Agenda;
use horario::loader;
use horario::translate::WeekdayTable;
use horario::view::{self, AgendaView, FREE};

const JULY_ESP_ENG: &str = "2024 7\nESP ENG\n";

fn run(config: &str, requests: &str) -> Agenda {
    let config = loader::parse_config(config).expect("config parses");
    let records = loader::parse_requests(requests);
    let mut agenda = Agenda::new(config).expect("valid month");
    agenda.ingest(&WeekdayTable::new(), &records);
    agenda
}

#[test]
fn clean_month_end_to_end() {
    let agenda = run(
        JULY_ESP_ENG,
        "Clase Aula1 01/07/2024 05/07/2024 LMCJV 8-9\n",
    );
    assert!(agenda.conflicts().is_empty());

    let view = AgendaView::build(&agenda);
    assert_eq!(view.year, 2024);
    assert_eq!(view.month, 7);
    assert!(view.conflicts.is_empty());

    // July 1st 2024 is the Monday opening the first display week.
    let monday = &view.rooms["Aula1"][0].days[0];
    assert_eq!(monday.status(8), "Clase");
    assert_eq!(monday.status(9), FREE);
}

#[test]
fn conflicting_request_is_reported_once() {
    let agenda = run(
        JULY_ESP_ENG,
        "Clase Aula1 01/07/2024 05/07/2024 LMCJV 8-9\n\
         Taller Aula1 03/07/2024 03/07/2024 C 8-9\n",
    );
    assert_eq!(
        agenda.conflicts(),
        ["Conflict in room Aula1 for activity Taller: \
          Time slot 8-9 on 2024-07-03 already booked for 'Clase'"]
    );

    let view = AgendaView::build(&agenda);
    let wednesday = &view.rooms["Aula1"][0].days[2];
    assert_eq!(wednesday.status(8), "Clase");
}

#[test]
fn closure_wins_regardless_of_file_order() {
    let agenda = run(
        JULY_ESP_ENG,
        "Yoga Aula1 01/07/2024 05/07/2024 LMCJV 8-9\n\
         Closed Aula1 03/07/2024 03/07/2024 C 0-24\n",
    );

    let view = AgendaView::build(&agenda);
    let wednesday = &view.rooms["Aula1"][0].days[2];
    assert_eq!(wednesday.status(8), "Closed");

    assert_eq!(agenda.conflicts().len(), 1);
    assert!(agenda.conflicts()[0].contains("for activity Yoga"));
    assert!(agenda.conflicts()[0].contains("already booked for 'Closed'"));
}

#[test]
fn bad_lines_and_bad_records_do_not_poison_the_batch() {
    let agenda = run(
        JULY_ESP_ENG,
        "Clase Aula1 01/07/2024 05/07/2024 LMCJV 8-9\n\
         OnlyThreeFields Aula1 01/07/2024\n\
         Roto Aula2 99/99/9999 05/07/2024 L 8-9\n",
    );

    // The short line vanished at load; the unparseable record is reported.
    assert_eq!(agenda.conflicts().len(), 1);
    assert!(agenda.conflicts()[0].starts_with("Invalid reservation format: Roto"));
    assert!(agenda.rooms().contains_key("Aula1"));
    assert!(!agenda.rooms().contains_key("Aula2"));
}

#[test]
fn weekday_pattern_translates_between_languages() {
    let agenda = run(
        "2024 7\nESP CAT\n",
        "Clase Aula1 01/07/2024 07/07/2024 XD 8-9\n",
    );
    assert!(agenda.conflicts().is_empty());

    let view = AgendaView::build(&agenda);
    let week = &view.rooms["Aula1"][0];
    assert_eq!(week.days[2].status(8), "Clase"); // Wednesday via X
    assert_eq!(week.days[6].status(8), "Clase"); // Sunday via D
    assert_eq!(week.days[0].status(8), FREE);
}

#[test]
fn empty_requests_file_yields_the_advisory_notice() {
    let agenda = run(JULY_ESP_ENG, "\n\n");
    let view = AgendaView::build(&agenda);
    assert!(view.rooms.is_empty());
    assert_eq!(view.conflicts.len(), 1);
    assert!(view.conflicts[0].contains("No valid bookings found"));
}

#[test]
fn text_and_json_reports_agree() {
    let agenda = run(
        JULY_ESP_ENG,
        "Clase Aula1 01/07/2024 05/07/2024 LMCJV 8-10\n",
    );
    let view = AgendaView::build(&agenda);

    let text = view::render_text(&view);
    assert!(text.contains("Agenda for 2024-07"));
    assert!(text.contains("Room Aula1"));
    assert!(text.contains("2024-07-01  8-10 Clase"));

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["rooms"]["Aula1"][0]["days"][0]["hours"]["8"], "Clase");
    assert_eq!(json["rooms"]["Aula1"][0]["days"][0]["hours"]["9"], "Clase");
}
