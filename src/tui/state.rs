use super::action::{Action, AppEvent, Direction};
use crate::calendar::Calendar;
use crate::engine::{
    ButtonClickArg, CalendarApi, DateClickArg, EventClickArg, NativeConfig, NativeView,
    PointerInput, SelectArg,
};
use crate::model::{CalendarEvent, ViewKind};
use chrono::{
    DateTime, Datelike, Days, Duration, Local, Months, NaiveDate, NaiveDateTime, TimeZone, Utc,
};
use uuid::Uuid;

pub const MONTH_GRID_WEEKS: u64 = 6;

/// Wall-clock time in the local zone as an instant. Skipped local times
/// (DST gaps) fall back to reading the wall clock as UTC.
pub fn local_to_utc(naive: NaiveDateTime) -> DateTime<Utc> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|d| d.with_timezone(&Utc))
        .unwrap_or_else(|| naive.and_utc())
}

fn start_of(day: NaiveDate) -> NaiveDateTime {
    day.and_hms_opt(0, 0, 0).unwrap_or_default()
}

fn at_hour(day: NaiveDate, hour: u32) -> NaiveDateTime {
    day.and_hms_opt(hour, 0, 0).unwrap_or_else(|| start_of(day))
}

fn week_start(day: NaiveDate) -> NaiveDate {
    day - Days::new(u64::from(day.weekday().num_days_from_monday()))
}

fn month_start(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap_or(day)
}

/// Whether `event` overlaps the local calendar day `day`.
pub fn occurs_on(event: &CalendarEvent, day: NaiveDate) -> bool {
    let day_start = local_to_utc(start_of(day));
    let day_end = local_to_utc(start_of(day + Days::new(1)));
    if event.start == event.end {
        return event.start >= day_start && event.start < day_end;
    }
    event.start < day_end && event.end > day_start
}

/// Whether `event` overlaps the hour slot starting at `hour` on `day`.
pub fn occurs_at(event: &CalendarEvent, day: NaiveDate, hour: u32) -> bool {
    if event.all_day {
        return false;
    }
    let slot_start = local_to_utc(at_hour(day, hour));
    let slot_end = slot_start + Duration::hours(1);
    if event.start == event.end {
        return event.start >= slot_start && event.start < slot_end;
    }
    event.start < slot_end && event.end > slot_start
}

/// State owned by the terminal rendering engine: active layout, focused
/// date/hour, pending range selection and focused event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineState {
    view: Option<ViewKind>,
    pub date: NaiveDate,
    pub hour: u32,
    pub selection: Option<(NaiveDate, u32)>,
    pub event_focus: usize,
    today: NaiveDate,
}

impl EngineState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            view: None,
            date: today,
            hour: 9,
            selection: None,
            event_focus: 0,
            today,
        }
    }

    pub fn today_date(&self) -> NaiveDate {
        self.today
    }

    pub fn active_view(&self) -> ViewKind {
        self.view.unwrap_or_default()
    }

    /// Applies the config for this render. The default view is only read on
    /// the first one; afterwards the engine keeps its own view.
    pub fn sync(&mut self, config: &NativeConfig<'_>) {
        if self.view.is_none() {
            self.view = Some(ViewKind::from_native_id(config.default_view).unwrap_or_default());
        }
        if !config.selectable {
            self.selection = None;
        }
        let focused = self.events_on(config.events, self.date).len();
        if self.event_focus >= focused {
            self.event_focus = 0;
        }
    }

    /// First and last (exclusive) day displayed.
    pub fn range(&self) -> (NaiveDate, NaiveDate) {
        match self.active_view() {
            ViewKind::Day => (self.date, self.date + Days::new(1)),
            ViewKind::Week => {
                let start = week_start(self.date);
                (start, start + Days::new(7))
            }
            ViewKind::Month => {
                let start = month_start(self.date);
                (start, start + Months::new(1))
            }
        }
    }

    /// Days of the month grid: whole weeks, starting on the Monday on or
    /// before the first of the month.
    pub fn month_grid(&self) -> Vec<NaiveDate> {
        let first = week_start(month_start(self.date));
        (0..MONTH_GRID_WEEKS * 7)
            .map(|i| first + Days::new(i))
            .collect()
    }

    pub fn visible_days(&self) -> Vec<NaiveDate> {
        match self.active_view() {
            ViewKind::Month => self.month_grid(),
            _ => {
                let (start, end) = self.range();
                start.iter_days().take_while(|d| *d < end).collect()
            }
        }
    }

    pub fn title(&self) -> String {
        let (start, end) = self.range();
        match self.active_view() {
            ViewKind::Day => self.date.format("%A, %B %-d, %Y").to_string(),
            ViewKind::Week => {
                let last = end - Days::new(1);
                format!(
                    "{} – {}",
                    start.format("%b %-d"),
                    last.format("%b %-d, %Y")
                )
            }
            ViewKind::Month => start.format("%B %Y").to_string(),
        }
    }

    pub fn events_on<'e>(
        &self,
        events: &'e [CalendarEvent],
        day: NaiveDate,
    ) -> Vec<&'e CalendarEvent> {
        let mut found: Vec<_> = events.iter().filter(|e| occurs_on(e, day)).collect();
        found.sort_by(|a, b| (!a.all_day, a.start).cmp(&(!b.all_day, b.start)));
        found
    }

    pub fn focused_event<'e>(&self, events: &'e [CalendarEvent]) -> Option<&'e CalendarEvent> {
        self.events_on(events, self.date)
            .get(self.event_focus)
            .copied()
    }

    /// Whether a pending selection (anchor to cursor) covers `day` at `hour`.
    pub fn is_selected(&self, day: NaiveDate, hour: Option<u32>) -> bool {
        let Some(anchor) = self.selection else {
            return false;
        };
        let (lo, hi) = ordered(anchor, (self.date, self.hour));
        match hour {
            Some(h) => (lo..=hi).contains(&(day, h)),
            None => (lo.0..=hi.0).contains(&day),
        }
    }

    fn native_view(&self) -> NativeView {
        let (start, end) = self.range();
        NativeView {
            kind: self.active_view().native_id().to_string(),
            title: self.title(),
            active_start: local_to_utc(start_of(start)),
            active_end: local_to_utc(start_of(end)),
        }
    }

    fn pointer(&self) -> PointerInput {
        let col = self.date.weekday().num_days_from_monday() as u16;
        PointerInput {
            column: col,
            row: self.hour as u16,
        }
    }

    fn move_cursor(&mut self, dir: Direction) {
        let time_grid = self.active_view() != ViewKind::Month;
        match dir {
            Direction::Left => self.date = self.date - Days::new(1),
            Direction::Right => self.date = self.date + Days::new(1),
            Direction::Up if time_grid => self.hour = self.hour.saturating_sub(1),
            Direction::Down if time_grid => self.hour = (self.hour + 1).min(23),
            Direction::Up => self.date = self.date - Days::new(7),
            Direction::Down => self.date = self.date + Days::new(7),
        }
        self.event_focus = 0;
    }

    fn date_click_arg(&self) -> DateClickArg {
        let all_day = self.active_view() == ViewKind::Month;
        let wall = if all_day {
            start_of(self.date)
        } else {
            at_hour(self.date, self.hour)
        };
        let date = local_to_utc(wall);
        DateClickArg {
            date,
            date_str: if all_day {
                self.date.format("%Y-%m-%d").to_string()
            } else {
                date.with_timezone(&Local).to_rfc3339()
            },
            all_day,
            resource: None,
            day_el: format!("day-{}", self.date),
            js_event: self.pointer(),
            view: self.native_view(),
        }
    }

    fn select_arg(&self, anchor: (NaiveDate, u32)) -> SelectArg {
        let all_day = self.active_view() == ViewKind::Month;
        let (lo, hi) = ordered(anchor, (self.date, self.hour));
        let (start, end) = if all_day {
            (start_of(lo.0), start_of(hi.0 + Days::new(1)))
        } else {
            let end = at_hour(hi.0, hi.1) + Duration::hours(1);
            (at_hour(lo.0, lo.1), end)
        };
        let (start, end) = (local_to_utc(start), local_to_utc(end));
        SelectArg {
            start,
            end,
            start_str: start.to_rfc3339(),
            end_str: end.to_rfc3339(),
            all_day,
            js_event: self.pointer(),
            view: self.native_view(),
        }
    }

    /// Runs an input against the current render's configuration, calling its
    /// handler slots where the gesture warrants it.
    pub fn dispatch(&mut self, action: Action, config: &NativeConfig<'_>) {
        match action {
            Action::PressButton(name) => {
                if let Some(button) = config.custom_buttons.get(name) {
                    let arg = ButtonClickArg {
                        el: format!("fc-{name}-button"),
                    };
                    button.press(self, &arg);
                }
            }
            Action::SwitchView(index) => {
                if let Some(native) = config.view_controls().get(index) {
                    self.change_view(native);
                }
            }
            Action::Move(dir) => self.move_cursor(dir),
            Action::Click => match self.selection.take() {
                Some(anchor) if config.selectable => (config.select)(&self.select_arg(anchor)),
                Some(_) => {}
                None => (config.date_click)(&self.date_click_arg()),
            },
            Action::BeginSelect => {
                if config.selectable {
                    self.selection = Some((self.date, self.hour));
                }
            }
            Action::CancelSelect => self.selection = None,
            Action::FocusNextEvent => {
                let count = self.events_on(config.events, self.date).len();
                if count > 0 {
                    self.event_focus = (self.event_focus + 1) % count;
                }
            }
            Action::OpenEvent => {
                if let Some(event) = self.focused_event(config.events) {
                    let arg = EventClickArg {
                        event: event.clone(),
                        el: format!("event-{}", event.id),
                        js_event: self.pointer(),
                        view: self.native_view(),
                    };
                    (config.event_click)(&arg);
                }
            }
            // Application-level actions
            Action::ToggleDisabled | Action::Quit => {}
        }
    }
}

fn ordered(a: (NaiveDate, u32), b: (NaiveDate, u32)) -> ((NaiveDate, u32), (NaiveDate, u32)) {
    if a <= b { (a, b) } else { (b, a) }
}

impl CalendarApi for EngineState {
    fn prev(&mut self) {
        self.date = match self.active_view() {
            ViewKind::Day => self.date - Days::new(1),
            ViewKind::Week => self.date - Days::new(7),
            ViewKind::Month => month_start(self.date) - Months::new(1),
        };
        self.event_focus = 0;
    }

    fn next(&mut self) {
        self.date = match self.active_view() {
            ViewKind::Day => self.date + Days::new(1),
            ViewKind::Week => self.date + Days::new(7),
            ViewKind::Month => month_start(self.date) + Months::new(1),
        };
        self.event_focus = 0;
    }

    fn today(&mut self) {
        self.date = self.today;
        self.event_focus = 0;
    }

    fn change_view(&mut self, native_view: &str) {
        match ViewKind::from_native_id(native_view) {
            Some(view) => self.view = Some(view),
            None => tracing::debug!(native_view, "ignoring unknown view"),
        }
    }

    fn view(&self) -> NativeView {
        self.native_view()
    }
}

/// The application around the calendar: its props and what it tells the
/// user.
pub struct AppState {
    pub calendar: Calendar,
    pub message: String,
    pub loading: bool,
}

impl AppState {
    pub fn new(calendar: Calendar) -> Self {
        Self {
            calendar,
            message: "p/n: Page | t: Today | 1-3: View | Enter: Add | v: Select".to_string(),
            loading: true,
        }
    }

    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::EventsLoaded(Ok(events)) => {
                self.message = format!("Events: {}", events.len());
                self.calendar.events = events;
                self.loading = false;
            }
            AppEvent::EventsLoaded(Err(e)) => {
                self.message = format!("Error: {}", e);
                self.loading = false;
            }
            AppEvent::DateClicked(date, all_day) => {
                let end = if all_day {
                    date + Duration::days(1)
                } else {
                    date + Duration::hours(1)
                };
                self.add_appointment(date, end, all_day);
            }
            AppEvent::RangeSelected(start, end, all_day) => {
                self.add_appointment(start, end, all_day);
            }
            AppEvent::EventClicked(event) => {
                let start = event.start.with_timezone(&Local);
                self.message = if event.all_day {
                    format!("{} (all day, {})", event.title, start.format("%a %b %-d"))
                } else {
                    let end = event.end.with_timezone(&Local);
                    format!(
                        "{} ({} – {})",
                        event.title,
                        start.format("%a %b %-d %H:%M"),
                        end.format("%H:%M")
                    )
                };
            }
            AppEvent::Paged(label) => {
                self.message = format!("Paged: {}", label);
            }
        }
    }

    fn add_appointment(&mut self, start: DateTime<Utc>, end: DateTime<Utc>, all_day: bool) {
        let event = CalendarEvent::new(Uuid::new_v4().to_string(), "New appointment", start, end)
            .all_day(all_day);
        tracing::info!(id = %event.id, %start, %end, all_day, "appointment added");
        self.message = format!(
            "Added appointment on {}",
            start.with_timezone(&Local).format("%a %b %-d")
        );
        self.calendar.events.push(event);
    }

    pub fn toggle_disabled(&mut self) {
        self.calendar.disabled = !self.calendar.disabled;
        self.message = if self.calendar.disabled {
            "Calendar disabled: range selection off".to_string()
        } else {
            "Calendar enabled".to_string()
        };
    }
}
