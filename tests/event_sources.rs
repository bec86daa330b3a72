use carecal::model::CalendarEvent;
use carecal::model::adapter::load_events;
use chrono::{TimeZone, Utc};
use std::io::Write;

const APPOINTMENTS_ICS: &str = "BEGIN:VCALENDAR\r
VERSION:2.0\r
PRODID:-//carecal//tests//EN\r
BEGIN:VEVENT\r
UID:appt-1\r
DTSTAMP:20261001T000000Z\r
DTSTART:20261017T090000Z\r
DTEND:20261017T093000Z\r
SUMMARY:Check-up\r
END:VEVENT\r
BEGIN:VEVENT\r
UID:appt-2\r
DTSTAMP:20261001T000000Z\r
DTSTART;VALUE=DATE:20261020\r
SUMMARY:Clinic closed\r
END:VEVENT\r
BEGIN:VEVENT\r
DTSTAMP:20261001T000000Z\r
DTSTART:20261018T140000Z\r
SUMMARY:Walk-in\r
END:VEVENT\r
BEGIN:VEVENT\r
UID:broken\r
DTSTAMP:20261001T000000Z\r
SUMMARY:No start\r
END:VEVENT\r
END:VCALENDAR\r
";

#[test]
fn test_ics_events() {
    let events = CalendarEvent::from_ics(APPOINTMENTS_ICS).unwrap();
    assert_eq!(events.len(), 3, "event without DTSTART is skipped");

    let checkup = &events[0];
    assert_eq!(checkup.id, "appt-1");
    assert_eq!(checkup.title, "Check-up");
    assert_eq!(checkup.start, Utc.with_ymd_and_hms(2026, 10, 17, 9, 0, 0).unwrap());
    assert_eq!(checkup.end, Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap());
    assert!(!checkup.all_day);

    let closed = &events[1];
    assert!(closed.all_day);
    assert_eq!(closed.start, Utc.with_ymd_and_hms(2026, 10, 20, 0, 0, 0).unwrap());
    assert_eq!(closed.end, Utc.with_ymd_and_hms(2026, 10, 21, 0, 0, 0).unwrap());

    let walk_in = &events[2];
    assert!(!walk_in.id.is_empty());
    assert_eq!(walk_in.end, Utc.with_ymd_and_hms(2026, 10, 18, 15, 0, 0).unwrap());
}

#[test]
fn test_load_by_extension() {
    let dir = tempfile::tempdir().unwrap();

    let ics_path = dir.path().join("appointments.ics");
    std::fs::write(&ics_path, APPOINTMENTS_ICS).unwrap();
    assert_eq!(load_events(&ics_path).unwrap().len(), 3);

    let json_path = dir.path().join("appointments.json");
    let mut file = std::fs::File::create(&json_path).unwrap();
    write!(
        file,
        r#"[{{"id":"id123","start":"2026-10-17T09:00:00Z","end":"2026-10-17T10:00:00Z","#
    )
    .unwrap();
    write!(file, r#""allDay":true,"title":"Title"}}]"#).unwrap();
    let events = load_events(&json_path).unwrap();
    assert_eq!(
        events,
        vec![
            CalendarEvent::new(
                "id123",
                "Title",
                Utc.with_ymd_and_hms(2026, 10, 17, 9, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2026, 10, 17, 10, 0, 0).unwrap(),
            )
            .all_day(true)
        ]
    );
}

#[test]
fn test_bad_sources_are_errors() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_events(dir.path().join("missing.ics")).is_err());

    let json_path = dir.path().join("broken.json");
    std::fs::write(&json_path, "{ not json").unwrap();
    assert!(matches!(
        load_events(&json_path),
        Err(carecal::Error::Json(_))
    ));
}
