#![cfg(feature = "tui")]

use carecal::calendar::Calendar;
use carecal::engine::CalendarApi;
use carecal::model::{CalendarEvent, ViewKind};
use carecal::tui::action::{Action, AppEvent, Direction};
use carecal::tui::state::{AppState, EngineState, local_to_utc};
use chrono::{Duration, NaiveDate};
use std::cell::RefCell;
use std::rc::Rc;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_paging_reaches_caller_after_engine_moves() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let spy = seen.clone();
    let calendar = Calendar::new()
        .with_view(ViewKind::Week)
        .on_next_click(move || spy.borrow_mut().push("next"));
    let config = calendar.render();

    let mut engine = EngineState::new(day(2026, 10, 17));
    engine.sync(&config);
    engine.dispatch(Action::PressButton("customNext"), &config);

    assert_eq!(engine.date, day(2026, 10, 24));
    assert_eq!(*seen.borrow(), ["next"]);
    assert_eq!(engine.view().kind, "timeGridWeek");
}

#[test]
fn test_month_click_is_all_day() {
    let clicks = Rc::new(RefCell::new(Vec::new()));
    let spy = clicks.clone();
    let calendar = Calendar::new()
        .with_view(ViewKind::Month)
        .on_date_click(move |date, all_day| spy.borrow_mut().push((date, all_day)));
    let config = calendar.render();

    let mut engine = EngineState::new(day(2026, 10, 17));
    engine.sync(&config);
    engine.dispatch(Action::Move(Direction::Down), &config);
    engine.dispatch(Action::Click, &config);

    let expected = local_to_utc(day(2026, 10, 24).and_hms_opt(0, 0, 0).unwrap());
    assert_eq!(*clicks.borrow(), vec![(expected, true)]);
}

#[test]
fn test_time_grid_selection_spans_hours() {
    let ranges = Rc::new(RefCell::new(Vec::new()));
    let spy = ranges.clone();
    let calendar = Calendar::new()
        .with_view(ViewKind::Day)
        .on_date_range_selected(move |start, end, all_day| {
            spy.borrow_mut().push((start, end, all_day))
        });
    let config = calendar.render();

    let mut engine = EngineState::new(day(2026, 10, 17));
    engine.sync(&config);
    engine.dispatch(Action::BeginSelect, &config);
    engine.dispatch(Action::Move(Direction::Down), &config);
    engine.dispatch(Action::Move(Direction::Down), &config);
    engine.dispatch(Action::Click, &config);

    let start = local_to_utc(day(2026, 10, 17).and_hms_opt(9, 0, 0).unwrap());
    let end = local_to_utc(day(2026, 10, 17).and_hms_opt(12, 0, 0).unwrap());
    assert_eq!(*ranges.borrow(), vec![(start, end, false)]);
    assert_eq!(engine.selection, None);
}

#[test]
fn test_view_switcher_uses_offered_views() {
    let calendar = Calendar::new().with_views([ViewKind::Month, ViewKind::Day]);
    let config = calendar.render();
    let mut engine = EngineState::new(day(2026, 10, 17));
    engine.sync(&config);
    assert_eq!(engine.active_view(), ViewKind::Week);

    engine.dispatch(Action::SwitchView(0), &config);
    assert_eq!(engine.active_view(), ViewKind::Month);
    engine.dispatch(Action::SwitchView(1), &config);
    assert_eq!(engine.active_view(), ViewKind::Day);
    engine.dispatch(Action::SwitchView(2), &config);
    assert_eq!(engine.active_view(), ViewKind::Day);
}

#[test]
fn test_event_click_uses_focused_event() {
    let d = day(2026, 10, 17);
    let first = CalendarEvent::new(
        "a",
        "Rounds",
        local_to_utc(d.and_hms_opt(8, 0, 0).unwrap()),
        local_to_utc(d.and_hms_opt(9, 0, 0).unwrap()),
    );
    let second = CalendarEvent::new(
        "b",
        "Surgery",
        local_to_utc(d.and_hms_opt(13, 0, 0).unwrap()),
        local_to_utc(d.and_hms_opt(15, 0, 0).unwrap()),
    );

    let clicked = Rc::new(RefCell::new(Vec::new()));
    let spy = clicked.clone();
    let calendar = Calendar::new()
        .with_events(vec![second.clone(), first.clone()])
        .on_event_click(move |event| spy.borrow_mut().push(event.id.clone()));
    let config = calendar.render();

    let mut engine = EngineState::new(d);
    engine.sync(&config);
    engine.dispatch(Action::OpenEvent, &config);
    engine.dispatch(Action::FocusNextEvent, &config);
    engine.dispatch(Action::OpenEvent, &config);
    engine.dispatch(Action::FocusNextEvent, &config);
    engine.dispatch(Action::OpenEvent, &config);

    assert_eq!(*clicked.borrow(), ["a", "b", "a"]);
}

#[test]
fn test_app_reacts_to_notifications() {
    let mut app = AppState::new(Calendar::default());
    let start = local_to_utc(day(2026, 10, 17).and_hms_opt(10, 0, 0).unwrap());

    app.apply(AppEvent::EventsLoaded(Ok(vec![])));
    assert!(!app.loading);

    app.apply(AppEvent::DateClicked(start, false));
    assert_eq!(app.calendar.events.len(), 1);
    assert_eq!(app.calendar.events[0].end, start + Duration::hours(1));
    assert!(!app.calendar.events[0].all_day);

    app.apply(AppEvent::RangeSelected(start, start + Duration::days(2), true));
    assert_eq!(app.calendar.events.len(), 2);
    assert!(app.calendar.events[1].all_day);

    app.apply(AppEvent::Paged("next"));
    assert_eq!(app.message, "Paged: next");

    app.toggle_disabled();
    assert!(!app.calendar.render().selectable);

    app.apply(AppEvent::EventsLoaded(Err("missing.ics: not found".to_string())));
    assert!(app.message.starts_with("Error"));
}
