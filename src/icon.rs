// File: ./src/icon.rs
//! Semantic icons mapped onto an external glyph set.
use crate::engine::PointerInput;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    Add,
    Admin,
    Appointment,
    AppointmentAdd,
    AppointmentRemove,
    Calendar,
    Dashboard,
    DownArrow,
    Edit,
    Image,
    Incident,
    Lab,
    LeftArrow,
    Medication,
    Patient,
    PatientAdd,
    PatientRemove,
    Patients,
    Remove,
    RightArrow,
    Save,
    Setting,
    UpArrow,
}

// (icon, identifier, glyph name)
static ICON_TABLE: [(IconKind, &str, &str); 23] = [
    (IconKind::Add, "add", "plus"),
    (IconKind::Admin, "admin", "user-shield"),
    (IconKind::Appointment, "appointment", "calendar"),
    (IconKind::AppointmentAdd, "appointment-add", "calendar-plus"),
    (IconKind::AppointmentRemove, "appointment-remove", "calendar-minus"),
    (IconKind::Calendar, "calendar", "calendar-alt"),
    (IconKind::Dashboard, "dashboard", "columns"),
    (IconKind::DownArrow, "down-arrow", "chevron-down"),
    (IconKind::Edit, "edit", "edit"),
    (IconKind::Image, "image", "camera"),
    (IconKind::Incident, "incident", "file-alt"),
    (IconKind::Lab, "lab", "microscope"),
    (IconKind::LeftArrow, "left-arrow", "chevron-left"),
    (IconKind::Medication, "medication", "pills"),
    (IconKind::Patient, "patient", "user"),
    (IconKind::PatientAdd, "patient-add", "user-plus"),
    (IconKind::PatientRemove, "patient-remove", "user-minus"),
    (IconKind::Patients, "patients", "users"),
    (IconKind::Remove, "remove", "minus"),
    (IconKind::RightArrow, "right-arrow", "chevron-right"),
    (IconKind::Save, "save", "save"),
    (IconKind::Setting, "setting", "cog"),
    (IconKind::UpArrow, "up-arrow", "chevron-up"),
];

impl IconKind {
    pub fn all() -> impl Iterator<Item = IconKind> {
        ICON_TABLE.iter().map(|(kind, _, _)| *kind)
    }

    fn entry(self) -> &'static (IconKind, &'static str, &'static str) {
        // The table is indexed in declaration order.
        &ICON_TABLE[self as usize]
    }

    pub fn id(self) -> &'static str {
        self.entry().1
    }

    pub fn glyph_name(self) -> &'static str {
        self.entry().2
    }

    /// Reverse lookup. Glyph names are unique across the table.
    pub fn from_glyph_name(glyph: &str) -> Option<Self> {
        ICON_TABLE
            .iter()
            .find(|(_, _, g)| *g == glyph)
            .map(|(kind, _, _)| *kind)
    }
}

impl fmt::Display for IconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for IconKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ICON_TABLE
            .iter()
            .find(|(_, id, _)| *id == s)
            .map(|(kind, _, _)| *kind)
            .ok_or_else(|| Error::UnknownIcon(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphVariant {
    #[default]
    Filled,
    /// Not every glyph has an outline version; the renderer decides what to show.
    Outline,
}

impl GlyphVariant {
    /// Glyph-set prefix of the variant.
    pub fn prefix(self) -> &'static str {
        match self {
            GlyphVariant::Filled => "fas",
            GlyphVariant::Outline => "far",
        }
    }
}

/// What the glyph renderer receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Glyph<'a> {
    pub variant: GlyphVariant,
    pub name: &'static str,
    pub class_name: Option<&'a str>,
    pub style: Option<&'a str>,
}

impl Glyph<'_> {
    pub fn icon_pair(&self) -> [&'static str; 2] {
        [self.variant.prefix(), self.name]
    }
}

/// External component that draws glyphs.
pub trait GlyphRenderer {
    type Output;

    fn render(&self, glyph: &Glyph<'_>) -> Self::Output;
}

pub type IconClickCallback = Box<dyn Fn(&PointerInput)>;

/// Icon props. Size and colour come from `class_name`/`style`, which are
/// handed to the renderer untouched.
pub struct Icon {
    pub icon: IconKind,
    pub outline: bool,
    pub class_name: Option<String>,
    pub style: Option<String>,
    pub on_click: Option<IconClickCallback>,
}

impl Icon {
    pub fn new(icon: IconKind) -> Self {
        Self {
            icon,
            outline: false,
            class_name: None,
            style: None,
            on_click: None,
        }
    }

    pub fn outline(mut self, outline: bool) -> Self {
        self.outline = outline;
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn on_click(mut self, f: impl Fn(&PointerInput) + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    pub fn glyph(&self) -> Glyph<'_> {
        Glyph {
            variant: if self.outline {
                GlyphVariant::Outline
            } else {
                GlyphVariant::Filled
            },
            name: self.icon.glyph_name(),
            class_name: self.class_name.as_deref(),
            style: self.style.as_deref(),
        }
    }

    pub fn render<R: GlyphRenderer>(&self, renderer: &R) -> R::Output {
        renderer.render(&self.glyph())
    }

    /// Forwards a click to `on_click`, if any.
    pub fn click(&self, input: &PointerInput) {
        if let Some(cb) = &self.on_click {
            cb(input);
        }
    }
}

impl fmt::Debug for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Icon")
            .field("icon", &self.icon)
            .field("outline", &self.outline)
            .field("class_name", &self.class_name)
            .field("style", &self.style)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_follows_declaration_order() {
        for (i, (kind, _, _)) in ICON_TABLE.iter().enumerate() {
            assert_eq!(*kind as usize, i);
        }
    }

    #[test]
    fn serde_names_match_identifiers() {
        for kind in IconKind::all() {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.id()));
        }
    }
}
