// File: ./src/model/event.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An entry on the calendar, in the shape the rendering engine consumes.
///
/// The adapters forward events untouched; nothing here is validated
/// (an `end` before `start` is the caller's business).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub all_day: bool,
    pub title: String,
}

impl CalendarEvent {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            all_day: false,
            title: title.into(),
        }
    }

    pub fn all_day(mut self, all_day: bool) -> Self {
        self.all_day = all_day;
        self
    }
}
