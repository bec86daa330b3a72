// File: ./src/engine/config.rs
use super::payload::{ButtonClickArg, DateClickArg, EventClickArg, SelectArg};
use super::{CUSTOM_NEXT, CUSTOM_PREV, CUSTOM_TODAY, CalendarApi};
use crate::model::CalendarEvent;
use serde::Serialize;
use std::fmt;

pub type Handler<'a, A> = Box<dyn Fn(&A) + 'a>;
pub type ButtonHandler<'a> = Box<dyn Fn(&mut dyn CalendarApi, &ButtonClickArg) + 'a>;

/// Control groups of the engine's header toolbar. Each group is a control
/// string: names joined by `,` are grouped together, a space separates groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub left: String,
    pub center: String,
    pub right: String,
}

impl Header {
    /// Control names of a group, in display order.
    pub fn controls(group: &str) -> impl Iterator<Item = &str> {
        group
            .split([',', ' '])
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

#[derive(Serialize)]
pub struct CustomButton<'a> {
    pub text: &'static str,
    #[serde(skip)]
    pub click: ButtonHandler<'a>,
}

impl CustomButton<'_> {
    pub fn press(&self, api: &mut dyn CalendarApi, arg: &ButtonClickArg) {
        (self.click)(api, arg)
    }
}

impl fmt::Debug for CustomButton<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomButton")
            .field("text", &self.text)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomButtons<'a> {
    pub custom_prev: CustomButton<'a>,
    pub custom_next: CustomButton<'a>,
    pub custom_today: CustomButton<'a>,
}

impl<'a> CustomButtons<'a> {
    /// Looks a button up by the name used in header control strings.
    pub fn get(&self, name: &str) -> Option<&CustomButton<'a>> {
        match name {
            CUSTOM_PREV => Some(&self.custom_prev),
            CUSTOM_NEXT => Some(&self.custom_next),
            CUSTOM_TODAY => Some(&self.custom_today),
            _ => None,
        }
    }
}

/// Everything the engine needs for one render.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeConfig<'a> {
    pub default_view: &'static str,
    pub header: Header,
    pub selectable: bool,
    pub events: &'a [CalendarEvent],
    pub custom_buttons: CustomButtons<'a>,
    #[serde(skip)]
    pub date_click: Handler<'a, DateClickArg>,
    #[serde(skip)]
    pub select: Handler<'a, SelectArg>,
    #[serde(skip)]
    pub event_click: Handler<'a, EventClickArg>,
}

impl NativeConfig<'_> {
    /// The configuration object as the engine's JSON. Handler slots are
    /// omitted.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Native view identifiers offered by the header's view switcher.
    pub fn view_controls(&self) -> Vec<&str> {
        Header::controls(&self.header.right).collect()
    }
}

impl fmt::Debug for NativeConfig<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeConfig")
            .field("default_view", &self.default_view)
            .field("header", &self.header)
            .field("selectable", &self.selectable)
            .field("events", &self.events)
            .field("custom_buttons", &self.custom_buttons)
            .finish_non_exhaustive()
    }
}
