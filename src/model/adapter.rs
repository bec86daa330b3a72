// File: ./src/model/adapter.rs
// Turns event sources (ICS / JSON files) into CalendarEvents
use crate::error::{Error, Result};
use crate::model::event::CalendarEvent;
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use icalendar::{Calendar as IcsCalendar, CalendarComponent, Component, Event};
use std::fs;
use std::path::Path;
use uuid::Uuid;

/// A parsed DTSTART/DTEND value. Date-only values mean an all-day event.
#[derive(Debug, Clone, Copy, PartialEq)]
enum IcsTime {
    Date(DateTime<Utc>),
    DateTime(DateTime<Utc>),
}

impl IcsTime {
    fn parse(val: &str) -> Option<Self> {
        let val = val.trim();
        if val.len() == 8 {
            NaiveDate::parse_from_str(val, "%Y%m%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|d| IcsTime::Date(d.and_utc()))
        } else {
            // Floating and TZID-qualified times are read as UTC.
            NaiveDateTime::parse_from_str(
                val,
                if val.ends_with('Z') {
                    "%Y%m%dT%H%M%SZ"
                } else {
                    "%Y%m%dT%H%M%S"
                },
            )
            .ok()
            .map(|d| IcsTime::DateTime(Utc.from_utc_datetime(&d)))
        }
    }

    fn instant(self) -> DateTime<Utc> {
        match self {
            IcsTime::Date(d) | IcsTime::DateTime(d) => d,
        }
    }
}

impl CalendarEvent {
    /// Reads every VEVENT of an iCalendar document.
    ///
    /// Components without a usable DTSTART are skipped; the rest is taken
    /// as-is. Floating and `TZID`-qualified times carry no offset here and
    /// are read as UTC, so they shift by the zone's offset. Only `Z` times
    /// and all-day dates are exact.
    pub fn from_ics(raw_ics: &str) -> Result<Vec<Self>> {
        let calendar: IcsCalendar = raw_ics.parse().map_err(|e| Error::Ics(format!("{}", e)))?;

        let events = calendar
            .components
            .iter()
            .filter_map(|c| match c {
                CalendarComponent::Event(e) => Some(e),
                _ => None,
            })
            .filter_map(|e| {
                let parsed = Self::from_vevent(e);
                if parsed.is_none() {
                    tracing::warn!(uid = ?e.get_uid(), "skipping VEVENT without DTSTART");
                }
                parsed
            })
            .collect();

        Ok(events)
    }

    fn from_vevent(event: &Event) -> Option<Self> {
        let start = event
            .properties()
            .get("DTSTART")
            .and_then(|p| IcsTime::parse(p.value()))?;
        let end = event
            .properties()
            .get("DTEND")
            .and_then(|p| IcsTime::parse(p.value()));

        let all_day = matches!(start, IcsTime::Date(_));
        let start = start.instant();
        let end = match end {
            Some(e) => e.instant(),
            None if all_day => start + Duration::days(1),
            None => start + Duration::hours(1),
        };

        let id = event
            .get_uid()
            .filter(|uid| !uid.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let title = event.get_summary().unwrap_or("No Title").to_string();

        Some(CalendarEvent {
            id,
            start,
            end,
            all_day,
            title,
        })
    }

    /// Reads a JSON array of events in the engine's event shape.
    pub fn from_json(raw_json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(raw_json)?)
    }
}

/// Parses `contents` according to the extension of `path` (`.json`, anything
/// else is treated as iCalendar).
pub fn parse_events(path: &Path, contents: &str) -> Result<Vec<CalendarEvent>> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        CalendarEvent::from_json(contents)
    } else {
        CalendarEvent::from_ics(contents)
    }
}

pub fn load_events<P: AsRef<Path>>(path: P) -> Result<Vec<CalendarEvent>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let events = parse_events(path, &contents)?;
    tracing::debug!(path = %path.display(), count = events.len(), "loaded events");
    Ok(events)
}
