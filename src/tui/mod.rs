// File: ./src/tui/mod.rs
//! Terminal rendering engine and the demo application driving it through
//! the calendar adapter.
pub mod action;
pub mod glyphs;
pub mod state;
pub mod view;

use crate::calendar::{Calendar, NEXT_LABEL, PREV_LABEL, TODAY_LABEL};
use crate::config::Config;
use crate::model::adapter::parse_events;
use action::{Action, AppEvent};
use anyhow::Result;
use chrono::Local;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use state::{AppState, EngineState};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Attaches callbacks that forward every notification to the app loop.
fn wire_callbacks(calendar: Calendar, tx: &UnboundedSender<AppEvent>) -> Calendar {
    let date_tx = tx.clone();
    let range_tx = tx.clone();
    let event_tx = tx.clone();
    let prev_tx = tx.clone();
    let next_tx = tx.clone();
    let today_tx = tx.clone();

    calendar
        .on_date_click(move |date, all_day| {
            let _ = date_tx.send(AppEvent::DateClicked(date, all_day));
        })
        .on_date_range_selected(move |start, end, all_day| {
            let _ = range_tx.send(AppEvent::RangeSelected(start, end, all_day));
        })
        .on_event_click(move |event| {
            let _ = event_tx.send(AppEvent::EventClicked(event.clone()));
        })
        .on_prev_click(move || {
            let _ = prev_tx.send(AppEvent::Paged(PREV_LABEL));
        })
        .on_next_click(move || {
            let _ = next_tx.send(AppEvent::Paged(NEXT_LABEL));
        })
        .on_today_click(move || {
            let _ = today_tx.send(AppEvent::Paged(TODAY_LABEL));
        })
}

pub async fn run(config: Config) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let mut app = AppState::new(wire_callbacks(config.calendar(), &event_tx));
    let mut engine = EngineState::new(Local::now().date_naive());

    // SPAWN LOADER
    if let Some(path) = config.events_file.clone() {
        let tx = event_tx.clone();
        tokio::spawn(async move {
            let result = match tokio::fs::read_to_string(&path).await {
                Ok(contents) => parse_events(&path, &contents).map_err(|e| e.to_string()),
                Err(e) => Err(format!("{}: {}", path.display(), e)),
            };
            if let Err(e) = &result {
                tracing::error!(path = %path.display(), error = %e, "could not load events");
            }
            let _ = tx.send(AppEvent::EventsLoaded(result));
        });
    } else {
        app.loading = false;
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, &mut engine, &mut event_rx);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Tui,
    app: &mut AppState,
    engine: &mut EngineState,
    event_rx: &mut UnboundedReceiver<AppEvent>,
) -> Result<()> {
    loop {
        let mut toggle_disabled = false;
        {
            // Fresh engine config from the current props on every frame
            let config = app.calendar.render();
            engine.sync(&config);
            terminal.draw(|f| view::draw(f, engine, &config, app))?;

            if event::poll(Duration::from_millis(50))?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                match Action::from_key(key.code) {
                    Some(Action::Quit) => break,
                    Some(Action::ToggleDisabled) => toggle_disabled = true,
                    Some(action) => engine.dispatch(action, &config),
                    None => {}
                }
            }
        }

        if toggle_disabled {
            app.toggle_disabled();
        }
        // Callbacks fired during dispatch land here
        while let Ok(event) = event_rx.try_recv() {
            app.apply(event);
        }
    }
    Ok(())
}
