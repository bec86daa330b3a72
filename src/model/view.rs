// File: ./src/model/view.rs
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const TIME_GRID_DAY: &str = "timeGridDay";
pub const TIME_GRID_WEEK: &str = "timeGridWeek";
pub const DAY_GRID_MONTH: &str = "dayGridMonth";

/// Separator the engine expects between controls of one header group.
pub const CONTROL_SEPARATOR: &str = ",";

/// Display granularity of the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    Day,
    #[default]
    Week,
    Month,
}

impl ViewKind {
    pub const ALL: [ViewKind; 3] = [ViewKind::Day, ViewKind::Week, ViewKind::Month];

    /// Layout identifier understood by the rendering engine.
    pub fn native_id(self) -> &'static str {
        match self {
            ViewKind::Day => TIME_GRID_DAY,
            ViewKind::Week => TIME_GRID_WEEK,
            ViewKind::Month => DAY_GRID_MONTH,
        }
    }

    pub fn from_native_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.native_id() == id)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ViewKind::Day => "day",
            ViewKind::Week => "week",
            ViewKind::Month => "month",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" => Ok(ViewKind::Day),
            "week" => Ok(ViewKind::Week),
            "month" => Ok(ViewKind::Month),
            _ => Err(Error::UnknownView(s.to_string())),
        }
    }
}

/// Ordered set of views offered by the view switcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewSet(Vec<ViewKind>);

impl ViewSet {
    pub fn new(views: impl IntoIterator<Item = ViewKind>) -> Self {
        Self(views.into_iter().collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = ViewKind> + '_ {
        self.0.iter().copied()
    }

    pub fn contains(&self, view: ViewKind) -> bool {
        self.0.contains(&view)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Native control string for the header's view switcher, in caller order.
    pub fn to_native_controls(&self) -> String {
        self.iter()
            .map(ViewKind::native_id)
            .collect::<Vec<_>>()
            .join(CONTROL_SEPARATOR)
    }
}

impl Default for ViewSet {
    fn default() -> Self {
        Self(ViewKind::ALL.to_vec())
    }
}

impl From<Vec<ViewKind>> for ViewSet {
    fn from(views: Vec<ViewKind>) -> Self {
        Self(views)
    }
}

impl<const N: usize> From<[ViewKind; N]> for ViewSet {
    fn from(views: [ViewKind; N]) -> Self {
        Self(views.to_vec())
    }
}

impl FromIterator<ViewKind> for ViewSet {
    fn from_iter<I: IntoIterator<Item = ViewKind>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_ids_are_distinct_and_reversible() {
        for view in ViewKind::ALL {
            assert_eq!(ViewKind::from_native_id(view.native_id()), Some(view));
        }
        assert_eq!(ViewKind::from_native_id("listWeek"), None);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Month".parse::<ViewKind>().unwrap(), ViewKind::Month);
        assert_eq!(" day ".parse::<ViewKind>().unwrap(), ViewKind::Day);
        assert!(matches!(
            "agenda".parse::<ViewKind>(),
            Err(Error::UnknownView(v)) if v == "agenda"
        ));
    }

    #[test]
    fn controls_keep_caller_order() {
        let views = ViewSet::from([ViewKind::Month, ViewKind::Day]);
        assert_eq!(views.to_native_controls(), "dayGridMonth,timeGridDay");
        assert_eq!(views.len(), 2);

        let none = ViewSet::from(Vec::new());
        assert!(none.is_empty());
        assert_eq!(none.to_native_controls(), "");
    }
}
