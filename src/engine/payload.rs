// File: ./src/engine/payload.rs
// Payloads the engine passes to its handler slots
use crate::model::CalendarEvent;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Where the pointer (or keyboard cursor) was when the gesture happened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PointerInput {
    pub column: u16,
    pub row: u16,
}

/// Active layout and the range it displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeView {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub active_start: DateTime<Utc>,
    pub active_end: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateClickArg {
    pub date: DateTime<Utc>,
    pub date_str: String,
    pub all_day: bool,
    pub resource: Option<String>,
    pub day_el: String,
    pub js_event: PointerInput,
    pub view: NativeView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectArg {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub start_str: String,
    pub end_str: String,
    pub all_day: bool,
    pub js_event: PointerInput,
    pub view: NativeView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventClickArg {
    pub event: CalendarEvent,
    pub el: String,
    pub js_event: PointerInput,
    pub view: NativeView,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ButtonClickArg {
    pub el: String,
}
