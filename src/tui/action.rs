use crate::engine::{CUSTOM_NEXT, CUSTOM_PREV, CUSTOM_TODAY};
use crate::model::CalendarEvent;
use chrono::{DateTime, Utc};
use crossterm::event::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Input handled by the terminal engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    PressButton(&'static str),
    SwitchView(usize),
    Move(Direction),
    Click,
    BeginSelect,
    CancelSelect,
    FocusNextEvent,
    OpenEvent,
    ToggleDisabled,
    Quit,
}

impl Action {
    pub fn from_key(code: KeyCode) -> Option<Self> {
        let action = match code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('p') | KeyCode::Char('[') => Action::PressButton(CUSTOM_PREV),
            KeyCode::Char('n') | KeyCode::Char(']') => Action::PressButton(CUSTOM_NEXT),
            KeyCode::Char('t') => Action::PressButton(CUSTOM_TODAY),
            KeyCode::Char(c @ '1'..='9') => Action::SwitchView(c as usize - '1' as usize),
            KeyCode::Left | KeyCode::Char('h') => Action::Move(Direction::Left),
            KeyCode::Right | KeyCode::Char('l') => Action::Move(Direction::Right),
            KeyCode::Up | KeyCode::Char('k') => Action::Move(Direction::Up),
            KeyCode::Down | KeyCode::Char('j') => Action::Move(Direction::Down),
            KeyCode::Enter => Action::Click,
            KeyCode::Char('v') => Action::BeginSelect,
            KeyCode::Esc => Action::CancelSelect,
            KeyCode::Tab => Action::FocusNextEvent,
            KeyCode::Char('o') => Action::OpenEvent,
            KeyCode::Char('x') => Action::ToggleDisabled,
            _ => return None,
        };
        Some(action)
    }
}

/// Notifications reaching the application, from its calendar callbacks or
/// from background work.
#[derive(Debug, Clone)]
pub enum AppEvent {
    EventsLoaded(Result<Vec<CalendarEvent>, String>),
    DateClicked(DateTime<Utc>, bool),
    RangeSelected(DateTime<Utc>, DateTime<Utc>, bool),
    EventClicked(CalendarEvent),
    Paged(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_pick_switcher_slots_from_zero() {
        assert_eq!(
            Action::from_key(KeyCode::Char('1')),
            Some(Action::SwitchView(0))
        );
        assert_eq!(
            Action::from_key(KeyCode::Char('3')),
            Some(Action::SwitchView(2))
        );
        assert_eq!(Action::from_key(KeyCode::Char('0')), None);
    }
}
