// File: ./src/engine/mod.rs
//! The rendering engine's native protocol.
//!
//! The engine consumes a [`NativeConfig`] per render and, on user
//! interaction, calls the handler slots inside it with rich payloads. Custom
//! header buttons additionally receive a [`CalendarApi`] so they can trigger
//! the engine's own navigation.
pub mod config;
pub mod payload;

pub use config::{CustomButton, CustomButtons, Handler, Header, NativeConfig};
pub use payload::{
    ButtonClickArg, DateClickArg, EventClickArg, NativeView, PointerInput, SelectArg,
};

pub const CUSTOM_PREV: &str = "customPrev";
pub const CUSTOM_NEXT: &str = "customNext";
pub const CUSTOM_TODAY: &str = "customToday";

/// Navigation surface the engine hands to custom-button handlers.
///
/// Implementations own the displayed date range and the active view; the
/// adapters never compute dates themselves.
pub trait CalendarApi {
    /// Moves the displayed range back by one unit of the active view.
    fn prev(&mut self);
    /// Moves the displayed range forward by one unit of the active view.
    fn next(&mut self);
    /// Moves the displayed range to the one containing the current date.
    fn today(&mut self);
    /// Switches the active layout. Unknown identifiers are ignored.
    fn change_view(&mut self, native_view: &str);
    /// Snapshot of the active view and its range.
    fn view(&self) -> NativeView;
}
