//! Calendar view binder
//!
//! Holds what the calendar currently displays: the resource set (doctors),
//! the event source (appointments) and the active view. [`CalendarBinder::sync`]
//! replaces both collections wholesale every time either changes, so the
//! calendar always carries exactly one event source.

use crate::booking::{Appointment, Doctor, Schedule};
use crate::calendar::options::CalendarOptions;
use crate::calendar::view::CalendarView;
use chrono::NaiveDateTime;
use serde::Serialize;

/// A calendar lane
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
}

impl From<&Doctor> for Resource {
    fn from(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id.clone(),
            title: doctor.title.clone(),
        }
    }
}

/// A renderable event block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub resource_id: String,
    pub background_color: String,
    pub border_color: String,
    pub text_color: String,
}

impl CalendarEvent {
    fn from_appointment(appointment: &Appointment, options: &CalendarOptions) -> Self {
        Self {
            id: appointment.id.clone(),
            title: appointment.title.clone(),
            start: appointment.start,
            end: appointment.end,
            resource_id: appointment.resource_id.clone(),
            background_color: options.event_background_color.clone(),
            border_color: options.event_border_color.clone(),
            text_color: options.event_text_color.clone(),
        }
    }

    /// Block caption honouring the time/end display toggles
    pub fn label(&self, options: &CalendarOptions) -> String {
        match (options.display_event_time, options.display_event_end) {
            (false, _) => self.title.clone(),
            (true, false) => format!("{} {}", self.start.format("%H:%M"), self.title),
            (true, true) => format!(
                "{} - {} {}",
                self.start.format("%H:%M"),
                self.end.format("%H:%M"),
                self.title
            ),
        }
    }
}

/// A set of events fed to the calendar together
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EventSource {
    pub events: Vec<CalendarEvent>,
}

/// Current calendar configuration
#[derive(Debug, Clone)]
pub struct CalendarBinder {
    options: CalendarOptions,
    view: CalendarView,
    resources: Vec<Resource>,
    sources: Vec<EventSource>,
    revision: u64,
}

impl CalendarBinder {
    pub fn new(options: CalendarOptions) -> Self {
        Self {
            view: options.initial_view,
            options,
            resources: Vec::new(),
            sources: Vec::new(),
            revision: 0,
        }
    }

    /// Replace resources and the event source with the given collections
    pub fn sync(&mut self, doctors: &[Doctor], appointments: &[Appointment]) {
        self.resources = doctors.iter().map(Resource::from).collect();

        let source = EventSource {
            events: appointments
                .iter()
                .map(|a| CalendarEvent::from_appointment(a, &self.options))
                .collect(),
        };
        self.sources.clear();
        self.sources.push(source);
        self.revision += 1;

        tracing::debug!(
            "Calendar synced (rev {}): {} resources, {} events",
            self.revision,
            self.resources.len(),
            self.sources[0].events.len()
        );
    }

    pub fn sync_schedule(&mut self, schedule: &Schedule) {
        self.sync(schedule.doctors(), schedule.appointments());
    }

    /// Switch the display mode
    pub fn change_view(&mut self, view: CalendarView) {
        if self.view != view {
            tracing::debug!("Calendar view {} -> {}", self.view, view);
        }
        self.view = view;
    }

    pub fn view(&self) -> CalendarView {
        self.view
    }

    pub fn options(&self) -> &CalendarOptions {
        &self.options
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn event_sources(&self) -> &[EventSource] {
        &self.sources
    }

    /// Every event across all sources
    pub fn events(&self) -> impl Iterator<Item = &CalendarEvent> {
        self.sources.iter().flat_map(|s| s.events.iter())
    }

    /// Number of completed syncs
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl Default for CalendarBinder {
    fn default() -> Self {
        Self::new(CalendarOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::local_datetime;

    fn schedule() -> Schedule {
        Schedule::new(
            vec![Doctor::new("D1", "Grey"), Doctor::new("D2", "Zhang")],
            vec![Appointment::new(
                "D1",
                "Alice",
                local_datetime::parse("2024-01-01T09:00").unwrap(),
            )],
        )
    }

    #[test]
    fn test_repeated_sync_keeps_single_source() {
        let mut binder = CalendarBinder::default();
        let schedule = schedule();

        for _ in 0..5 {
            binder.sync_schedule(&schedule);
        }

        assert_eq!(binder.event_sources().len(), 1);
        assert_eq!(binder.events().count(), 1);
        assert_eq!(binder.resources().len(), 2);
        assert_eq!(binder.revision(), 5);
    }

    #[test]
    fn test_sync_reflects_latest_collections() {
        let mut binder = CalendarBinder::default();
        let mut schedule = schedule();
        binder.sync_schedule(&schedule);

        schedule.book(Appointment::new(
            "D3",
            "Bob",
            local_datetime::parse("2024-01-01T10:00").unwrap(),
        ));
        binder.sync_schedule(&schedule);

        let ids: Vec<_> = binder.resources().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["D1", "D2", "D3"]);
        assert_eq!(binder.events().count(), 2);
    }

    #[test]
    fn test_events_carry_configured_colours() {
        let mut binder = CalendarBinder::default();
        binder.sync_schedule(&schedule());

        let event = binder.events().next().unwrap();
        assert_eq!(event.background_color, "#2ecc71");
        assert_eq!(event.border_color, "#27ae60");
        assert_eq!(event.text_color, "#ffffff");
        assert_eq!(event.resource_id, "D1");
    }

    #[test]
    fn test_change_view() {
        let mut binder = CalendarBinder::default();
        assert_eq!(binder.view(), CalendarView::ResourceTimeGridDay);

        binder.change_view(CalendarView::DayGridMonth);
        assert_eq!(binder.view(), CalendarView::DayGridMonth);

        binder.change_view(CalendarView::TimeGridWeek);
        assert_eq!(binder.view(), CalendarView::TimeGridWeek);
    }

    #[test]
    fn test_event_label() {
        let mut binder = CalendarBinder::default();
        binder.sync_schedule(&schedule());
        let event = binder.events().next().unwrap().clone();

        assert_eq!(event.label(binder.options()), "09:00 - 09:00 Alice");

        let options = CalendarOptions {
            display_event_end: false,
            ..Default::default()
        };
        assert_eq!(event.label(&options), "09:00 Alice");

        let options = CalendarOptions {
            display_event_time: false,
            ..Default::default()
        };
        assert_eq!(event.label(&options), "Alice");
    }
}
