use super::glyphs::TerminalGlyphs;
use super::state::{AppState, EngineState, local_to_utc, occurs_at};
use crate::engine::{CUSTOM_NEXT, CUSTOM_PREV, CUSTOM_TODAY, Header, NativeConfig};
use crate::icon::{Icon, IconKind};
use crate::model::{CalendarEvent, ViewKind};
use chrono::{Datelike, NaiveDate};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub fn draw(f: &mut Frame, engine: &EngineState, config: &NativeConfig<'_>, app: &AppState) {
    // 1. Layout: Header / Grid / Footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    draw_header(f, chunks[0], engine, config, app);

    match engine.active_view() {
        ViewKind::Month => draw_month(f, chunks[1], engine, config),
        ViewKind::Week | ViewKind::Day => draw_time_grid(f, chunks[1], engine, config),
    }

    draw_footer(f, chunks[2], engine, config, app);
}

fn button_spans(name: &str, text: &'static str) -> Vec<Span<'static>> {
    let glyph = |kind| Icon::new(kind).render(&TerminalGlyphs);
    let mut spans = vec![Span::raw("[")];
    match name {
        CUSTOM_PREV => spans.extend([glyph(IconKind::LeftArrow), Span::raw(" "), Span::raw(text)]),
        CUSTOM_NEXT => spans.extend([Span::raw(text), Span::raw(" "), glyph(IconKind::RightArrow)]),
        CUSTOM_TODAY => spans.extend([glyph(IconKind::Calendar), Span::raw(" "), Span::raw(text)]),
        _ => spans.push(Span::raw(text)),
    }
    spans.push(Span::raw("] "));
    spans
}

fn draw_header(
    f: &mut Frame,
    area: Rect,
    engine: &EngineState,
    config: &NativeConfig<'_>,
    app: &AppState,
) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(30),
            Constraint::Percentage(35),
        ])
        .split(inner);

    let left: Vec<Span> = Header::controls(&config.header.left)
        .filter_map(|name| {
            config
                .custom_buttons
                .get(name)
                .map(|b| button_spans(name, b.text))
        })
        .flatten()
        .collect();
    f.render_widget(Paragraph::new(Line::from(left)), parts[0]);

    let title = if app.loading {
        format!("{} (Loading...)", engine.title())
    } else {
        engine.title()
    };
    f.render_widget(
        Paragraph::new(title)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        parts[1],
    );

    let active = engine.active_view().native_id();
    let switcher: Vec<Span> = config
        .view_controls()
        .into_iter()
        .enumerate()
        .map(|(i, native)| {
            let label = ViewKind::from_native_id(native).map_or(native, |v| v.as_str());
            let style = if native == active {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::Cyan)
            };
            Span::styled(format!(" {}:{} ", i + 1, label), style)
        })
        .collect();
    f.render_widget(
        Paragraph::new(Line::from(switcher)).alignment(Alignment::Right),
        parts[2],
    );
}

fn event_line(event: &CalendarEvent, focused: bool) -> Line<'static> {
    let mut style = Style::default().fg(Color::Green);
    if focused {
        style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
    }
    Line::from(vec![
        Icon::new(IconKind::Appointment)
            .outline(!event.all_day)
            .render(&TerminalGlyphs),
        Span::styled(format!(" {}", event.title), style),
    ])
}

fn day_style(engine: &EngineState, day: NaiveDate, hour: Option<u32>) -> Style {
    let mut style = Style::default();
    if engine.is_selected(day, hour) {
        style = style.bg(Color::Blue);
    }
    let on_cursor = day == engine.date && hour.is_none_or(|h| h == engine.hour);
    if on_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}

fn draw_month(f: &mut Frame, area: Rect, engine: &EngineState, config: &NativeConfig<'_>) {
    let days = engine.month_grid();
    let weeks = (days.len() / 7).max(1) as u16;
    let row_height = (area.height.saturating_sub(3) / weeks).max(1);
    let month = engine.date.month();

    let header = Row::new(WEEKDAYS).style(Style::default().add_modifier(Modifier::BOLD));
    let rows = days.chunks(7).map(|week| {
        let cells = week.iter().map(|&day| {
            let mut number = Style::default();
            if day.month() != month {
                number = number.fg(Color::DarkGray);
            }
            if day == engine.today_date() {
                number = number.fg(Color::Yellow).add_modifier(Modifier::BOLD);
            }
            let mut lines = vec![Line::from(Span::styled(day.day().to_string(), number))];

            let events = engine.events_on(config.events, day);
            let room = usize::from(row_height.saturating_sub(1));
            let shown = if events.len() > room {
                room.saturating_sub(1)
            } else {
                events.len()
            };
            for (i, event) in events.iter().take(shown).enumerate() {
                let focused = day == engine.date && i == engine.event_focus;
                lines.push(event_line(event, focused));
            }
            if events.len() > shown {
                lines.push(Line::from(format!("+{} more", events.len() - shown)));
            }
            Cell::from(Text::from(lines)).style(day_style(engine, day, None))
        });
        Row::new(cells).height(row_height)
    });

    let table = Table::new(rows, [Constraint::Ratio(1, 7); 7])
        .header(header)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(table, area);
}

fn draw_time_grid(f: &mut Frame, area: Rect, engine: &EngineState, config: &NativeConfig<'_>) {
    let days = engine.visible_days();

    // Hour window around the cursor
    let visible = u32::from(area.height.saturating_sub(4)).clamp(1, 24);
    let first = engine
        .hour
        .saturating_sub(visible / 2)
        .min(24 - visible);

    let mut header_cells = vec![Cell::from("")];
    header_cells.extend(days.iter().map(|d| {
        let mut style = Style::default().add_modifier(Modifier::BOLD);
        if *d == engine.today_date() {
            style = style.fg(Color::Yellow);
        }
        Cell::from(d.format("%a %-d").to_string()).style(style)
    }));
    let header = Row::new(header_cells);

    let mut all_day_cells = vec![Cell::from("all-day")];
    all_day_cells.extend(days.iter().map(|&day| {
        let lines: Vec<Line> = engine
            .events_on(config.events, day)
            .into_iter()
            .enumerate()
            .filter(|(_, e)| e.all_day)
            .map(|(i, e)| event_line(e, day == engine.date && i == engine.event_focus))
            .collect();
        Cell::from(Text::from(lines))
    }));
    let mut rows = vec![Row::new(all_day_cells)];

    for hour in first..first + visible {
        let mut cells = vec![Cell::from(format!("{:02}:00", hour))];
        cells.extend(days.iter().map(|&day| {
            let slot_start = local_to_utc(day.and_hms_opt(hour, 0, 0).unwrap_or_default());
            let events = engine.events_on(config.events, day);
            let lines: Vec<Line> = events
                .iter()
                .enumerate()
                .filter(|(_, e)| occurs_at(e, day, hour))
                .map(|(i, e)| {
                    if e.start >= slot_start {
                        event_line(e, day == engine.date && i == engine.event_focus)
                    } else {
                        Line::from(Span::styled("│", Style::default().fg(Color::Green)))
                    }
                })
                .collect();
            Cell::from(Text::from(lines)).style(day_style(engine, day, Some(hour)))
        }));
        rows.push(Row::new(cells));
    }

    let mut widths = vec![Constraint::Length(7)];
    widths.extend(days.iter().map(|_| Constraint::Ratio(1, days.len() as u32)));

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(table, area);
}

fn draw_footer(
    f: &mut Frame,
    area: Rect,
    engine: &EngineState,
    config: &NativeConfig<'_>,
    app: &AppState,
) {
    let footer_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let status_color = if app.message.contains("Error") {
        Color::Red
    } else {
        Color::Cyan
    };
    let status = Paragraph::new(app.message.clone())
        .style(Style::default().fg(status_color))
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
                .title(" Status "),
        );

    let shortcuts = if engine.selection.is_some() {
        "Enter: Finish selection | Esc: Cancel"
    } else if config.selectable {
        "Enter: Add | v: Select | Tab/o: Event | x: Disable | q: Quit"
    } else {
        "Enter: Add | Tab/o: Event | x: Enable | q: Quit"
    };
    let help = Paragraph::new(shortcuts)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::TOP | Borders::BOTTOM)
                .title(" Actions "),
        );

    f.render_widget(status, footer_chunks[0]);
    f.render_widget(help, footer_chunks[1]);
}
