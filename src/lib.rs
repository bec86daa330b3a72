pub mod calendar;
pub mod config;
pub mod engine;
pub mod error;
pub mod icon;
pub mod logging;
pub mod model;

#[cfg(feature = "tui")]
pub mod tui;

pub use calendar::Calendar;
pub use error::{Error, Result};
pub use icon::{Icon, IconKind};
pub use model::{CalendarEvent, ViewKind, ViewSet};
