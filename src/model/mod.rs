// File: ./src/model/mod.rs
// Aggregates the split model files
pub mod adapter;
pub mod event;
pub mod view;

pub use event::CalendarEvent;
pub use view::{ViewKind, ViewSet};
