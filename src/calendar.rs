// File: ./src/calendar.rs
//! Scheduling calendar adapter.
//!
//! [`Calendar`] holds the public, declarative props. [`Calendar::render`]
//! turns them into the engine's [`NativeConfig`] and wires the engine's
//! handler slots to the caller's callbacks, reducing each native payload to
//! the documented arguments.
use crate::engine::{
    ButtonClickArg, CalendarApi, CustomButton, CustomButtons, DateClickArg, EventClickArg, Header,
    NativeConfig, SelectArg,
};
use crate::model::{CalendarEvent, ViewKind, ViewSet};
use chrono::{DateTime, Utc};
use std::fmt;

pub type DateClickCallback = Box<dyn Fn(DateTime<Utc>, bool)>;
pub type DateRangeCallback = Box<dyn Fn(DateTime<Utc>, DateTime<Utc>, bool)>;
pub type EventClickCallback = Box<dyn Fn(&CalendarEvent)>;
pub type NotifyCallback = Box<dyn Fn()>;

pub const HEADER_LEFT: &str = "customPrev,customNext customToday";
pub const HEADER_CENTER: &str = "title";

pub const PREV_LABEL: &str = "previous";
pub const NEXT_LABEL: &str = "next";
pub const TODAY_LABEL: &str = "today";

/// Public props of the calendar.
///
/// `Calendar::default()` is a week view offering day, week and month, with
/// range selection enabled, no events and no callbacks.
#[derive(Default)]
pub struct Calendar {
    pub view: ViewKind,
    pub views: ViewSet,
    /// Withdraws drag selection; rendering and view switching stay available.
    pub disabled: bool,
    pub events: Vec<CalendarEvent>,
    pub on_date_click: Option<DateClickCallback>,
    pub on_date_range_selected: Option<DateRangeCallback>,
    pub on_event_click: Option<EventClickCallback>,
    pub on_prev_click: Option<NotifyCallback>,
    pub on_next_click: Option<NotifyCallback>,
    pub on_today_click: Option<NotifyCallback>,
}

/// Built-in engine navigation behind each custom button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Paging {
    Prev,
    Next,
    Today,
}

impl Paging {
    fn apply(self, api: &mut dyn CalendarApi) {
        match self {
            Paging::Prev => api.prev(),
            Paging::Next => api.next(),
            Paging::Today => api.today(),
        }
    }
}

impl Calendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_view(mut self, view: ViewKind) -> Self {
        self.view = view;
        self
    }

    pub fn with_views(mut self, views: impl Into<ViewSet>) -> Self {
        self.views = views.into();
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_events(mut self, events: Vec<CalendarEvent>) -> Self {
        self.events = events;
        self
    }

    pub fn on_date_click(mut self, f: impl Fn(DateTime<Utc>, bool) + 'static) -> Self {
        self.on_date_click = Some(Box::new(f));
        self
    }

    pub fn on_date_range_selected(
        mut self,
        f: impl Fn(DateTime<Utc>, DateTime<Utc>, bool) + 'static,
    ) -> Self {
        self.on_date_range_selected = Some(Box::new(f));
        self
    }

    pub fn on_event_click(mut self, f: impl Fn(&CalendarEvent) + 'static) -> Self {
        self.on_event_click = Some(Box::new(f));
        self
    }

    pub fn on_prev_click(mut self, f: impl Fn() + 'static) -> Self {
        self.on_prev_click = Some(Box::new(f));
        self
    }

    pub fn on_next_click(mut self, f: impl Fn() + 'static) -> Self {
        self.on_next_click = Some(Box::new(f));
        self
    }

    pub fn on_today_click(mut self, f: impl Fn() + 'static) -> Self {
        self.on_today_click = Some(Box::new(f));
        self
    }

    /// Derives the engine configuration from the current props.
    ///
    /// Nothing is cached: every call re-derives the configuration and
    /// re-attaches the handlers, which borrow `self` for the lifetime of the
    /// returned value.
    pub fn render(&self) -> NativeConfig<'_> {
        if !self.views.contains(self.view) {
            // Left as-is: the switcher simply has no control for the active view.
            tracing::warn!(view = %self.view, "active view is not among the offered views");
        }

        let config = NativeConfig {
            default_view: self.view.native_id(),
            header: Header {
                left: HEADER_LEFT.to_string(),
                center: HEADER_CENTER.to_string(),
                right: self.views.to_native_controls(),
            },
            selectable: !self.disabled,
            events: &self.events,
            custom_buttons: CustomButtons {
                custom_prev: Self::paging_button(PREV_LABEL, Paging::Prev, &self.on_prev_click),
                custom_next: Self::paging_button(NEXT_LABEL, Paging::Next, &self.on_next_click),
                custom_today: Self::paging_button(
                    TODAY_LABEL,
                    Paging::Today,
                    &self.on_today_click,
                ),
            },
            date_click: Box::new(move |arg: &DateClickArg| self.handle_date_click(arg)),
            select: Box::new(move |arg: &SelectArg| self.handle_select(arg)),
            event_click: Box::new(move |arg: &EventClickArg| self.handle_event_click(arg)),
        };

        tracing::debug!(
            default_view = config.default_view,
            views = %config.header.right,
            offered = self.views.len(),
            selectable = config.selectable,
            events = config.events.len(),
            "derived native calendar config"
        );
        config
    }

    fn paging_button<'a>(
        text: &'static str,
        paging: Paging,
        notify: &'a Option<NotifyCallback>,
    ) -> CustomButton<'a> {
        CustomButton {
            text,
            click: Box::new(move |api: &mut dyn CalendarApi, _: &ButtonClickArg| {
                tracing::trace!(?paging, "custom paging button pressed");
                // Engine state moves first so the caller observes the new range.
                paging.apply(api);
                if let Some(cb) = notify {
                    cb();
                }
            }),
        }
    }

    fn handle_date_click(&self, arg: &DateClickArg) {
        tracing::trace!(date = %arg.date, all_day = arg.all_day, "date click");
        if let Some(cb) = &self.on_date_click {
            cb(arg.date, arg.all_day);
        }
    }

    fn handle_select(&self, arg: &SelectArg) {
        tracing::trace!(start = %arg.start, end = %arg.end, all_day = arg.all_day, "range select");
        if let Some(cb) = &self.on_date_range_selected {
            cb(arg.start, arg.end, arg.all_day);
        }
    }

    fn handle_event_click(&self, arg: &EventClickArg) {
        tracing::trace!(id = %arg.event.id, "event click");
        if let Some(cb) = &self.on_event_click {
            cb(&arg.event);
        }
    }
}

impl fmt::Debug for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calendar")
            .field("view", &self.view)
            .field("views", &self.views)
            .field("disabled", &self.disabled)
            .field("events", &self.events)
            .field("on_date_click", &self.on_date_click.is_some())
            .field(
                "on_date_range_selected",
                &self.on_date_range_selected.is_some(),
            )
            .field("on_event_click", &self.on_event_click.is_some())
            .field("on_prev_click", &self.on_prev_click.is_some())
            .field("on_next_click", &self.on_next_click.is_some())
            .field("on_today_click", &self.on_today_click.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_groups_paging_controls_on_the_left() {
        let calendar = Calendar::default();
        let config = calendar.render();
        let left: Vec<_> = Header::controls(&config.header.left).collect();
        assert_eq!(left, ["customPrev", "customNext", "customToday"]);
        for name in left {
            assert!(config.custom_buttons.get(name).is_some(), "{name}");
        }
        assert_eq!(config.header.center, "title");
    }

    #[test]
    fn active_view_outside_the_view_set_is_kept() {
        let calendar = Calendar::new()
            .with_view(ViewKind::Month)
            .with_views([ViewKind::Day]);
        let config = calendar.render();
        assert_eq!(config.default_view, "dayGridMonth");
        assert_eq!(config.view_controls(), ["timeGridDay"]);
    }
}
