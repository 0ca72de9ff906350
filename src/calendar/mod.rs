//! Calendar view model
//!
//! - **view**: the three display modes and their literal names
//! - **options**: visible hours, slot size, colours and display toggles
//! - **binder**: resources + event source kept in step with the schedule
//! - **layout**: visible date ranges and slot placement per view
//!
//! # Flow
//!
//! ```text
//! Schedule change → CalendarBinder::sync → layout::{day,week}_grid / month_grid → renderer
//! View button     → CalendarBinder::change_view
//! ```

pub mod binder;
pub mod layout;
pub mod options;
pub mod view;

pub use binder::{CalendarBinder, CalendarEvent, EventSource, Resource};
pub use layout::{
    day_grid, events_in_range, month_grid, now_slot, visible_range, week_grid, week_start,
    Column, DateRange, MonthCell, MonthGrid, PlacedEvent, TimeGrid,
};
pub use options::CalendarOptions;
pub use view::CalendarView;
