//! Visible ranges and event placement for each view
//!
//! Weeks start on Sunday. Time-grid placement uses the binder's slot
//! settings; events outside the visible hours are collected separately
//! rather than dropped.

use crate::calendar::binder::{CalendarBinder, CalendarEvent, Resource};
use crate::calendar::view::CalendarView;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Half-open date interval `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        let count = (self.end - self.start).num_days().max(0);
        (0..count).map(move |i| start + Duration::days(i))
    }

    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// Sunday on or before `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

fn month_bounds(anchor: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = anchor.with_day(1).unwrap_or(anchor);
    let next = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    (first, next.unwrap_or(first + Duration::days(31)))
}

/// Dates the given view shows around `anchor`
pub fn visible_range(view: CalendarView, anchor: NaiveDate) -> DateRange {
    match view {
        CalendarView::ResourceTimeGridDay => DateRange {
            start: anchor,
            end: anchor + Duration::days(1),
        },
        CalendarView::TimeGridWeek => {
            let start = week_start(anchor);
            DateRange {
                start,
                end: start + Duration::days(7),
            }
        }
        CalendarView::DayGridMonth => {
            let (first, next) = month_bounds(anchor);
            let last = next - Duration::days(1);
            DateRange {
                start: week_start(first),
                end: week_start(last) + Duration::days(7),
            }
        }
    }
}

/// Events in `range`, ordered by start time (stable for equal starts)
pub fn events_in_range(binder: &CalendarBinder, range: DateRange) -> Vec<CalendarEvent> {
    let mut events: Vec<CalendarEvent> = binder
        .events()
        .filter(|e| range.contains(e.start.date()))
        .cloned()
        .collect();
    events.sort_by_key(|e| e.start);
    events
}

/// An event pinned to a time slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedEvent {
    pub slot: usize,
    pub event: CalendarEvent,
}

/// One column of a time grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column<K> {
    pub key: K,
    pub events: Vec<PlacedEvent>,
}

/// A time grid: slot rows times columns (doctors in the day view, dates in
/// the week view)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeGrid<K> {
    pub range: DateRange,
    pub slots: Vec<NaiveTime>,
    pub columns: Vec<Column<K>>,
    /// Events inside the range but outside the visible hours
    pub out_of_hours: Vec<CalendarEvent>,
    /// Day view only: events whose resource is not a known doctor
    pub unassigned: Vec<CalendarEvent>,
}

impl<K> TimeGrid<K> {
    /// Events occupying `(column, slot)`
    pub fn cell(&self, column: usize, slot: usize) -> impl Iterator<Item = &CalendarEvent> {
        self.columns
            .get(column)
            .into_iter()
            .flat_map(|c| c.events.iter())
            .filter(move |p| p.slot == slot)
            .map(|p| &p.event)
    }
}

/// Resource time grid for a single date
pub fn day_grid(binder: &CalendarBinder, date: NaiveDate) -> TimeGrid<Resource> {
    let options = binder.options();
    let range = visible_range(CalendarView::ResourceTimeGridDay, date);

    let mut columns: Vec<Column<Resource>> = binder
        .resources()
        .iter()
        .map(|r| Column {
            key: r.clone(),
            events: Vec::new(),
        })
        .collect();
    let mut out_of_hours = Vec::new();
    let mut unassigned = Vec::new();

    for event in events_in_range(binder, range) {
        let column = columns.iter_mut().find(|c| c.key.id == event.resource_id);
        match (column, options.slot_of(event.start.time())) {
            (None, _) => unassigned.push(event),
            (Some(_), None) => out_of_hours.push(event),
            (Some(column), Some(slot)) => column.events.push(PlacedEvent { slot, event }),
        }
    }

    TimeGrid {
        range,
        slots: options.slot_times(),
        columns,
        out_of_hours,
        unassigned,
    }
}

/// Seven-day time grid for the week containing `anchor`
pub fn week_grid(binder: &CalendarBinder, anchor: NaiveDate) -> TimeGrid<NaiveDate> {
    let options = binder.options();
    let range = visible_range(CalendarView::TimeGridWeek, anchor);

    let mut columns: Vec<Column<NaiveDate>> = range
        .days()
        .map(|d| Column {
            key: d,
            events: Vec::new(),
        })
        .collect();
    let mut out_of_hours = Vec::new();

    for event in events_in_range(binder, range) {
        let index = (event.start.date() - range.start).num_days() as usize;
        match (columns.get_mut(index), options.slot_of(event.start.time())) {
            (Some(column), Some(slot)) => column.events.push(PlacedEvent { slot, event }),
            _ => out_of_hours.push(event),
        }
    }

    TimeGrid {
        range,
        slots: options.slot_times(),
        columns,
        out_of_hours,
        unassigned: Vec::new(),
    }
}

/// A day cell of the month grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthCell {
    pub date: NaiveDate,
    /// False for leading/trailing days of adjacent months
    pub in_month: bool,
    pub events: Vec<CalendarEvent>,
}

/// Month grid, one row per week
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub range: DateRange,
    pub weeks: Vec<Vec<MonthCell>>,
}

pub fn month_grid(binder: &CalendarBinder, anchor: NaiveDate) -> MonthGrid {
    let range = visible_range(CalendarView::DayGridMonth, anchor);
    let (first, next) = month_bounds(anchor);
    let events = events_in_range(binder, range);

    let cells: Vec<MonthCell> = range
        .days()
        .map(|date| MonthCell {
            date,
            in_month: date >= first && date < next,
            events: events
                .iter()
                .filter(|e| e.start.date() == date)
                .cloned()
                .collect(),
        })
        .collect();

    MonthGrid {
        range,
        weeks: cells.chunks(7).map(|w| w.to_vec()).collect(),
    }
}

/// Slot for the "now" line, when the indicator is on and `now` is visible
/// on `date`
pub fn now_slot(binder: &CalendarBinder, date: NaiveDate, now: NaiveDateTime) -> Option<usize> {
    let options = binder.options();
    if !options.now_indicator || now.date() != date {
        return None;
    }
    options.slot_of(now.time())
}
