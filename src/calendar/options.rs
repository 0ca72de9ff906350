//! Calendar widget options
//!
//! Mirrors the configuration the booking screen applies to its calendar:
//! visible hours, slot size, event colours and display toggles. Deserialises
//! from the `[calendar]` config section with every field optional.

use crate::calendar::view::CalendarView;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarOptions {
    #[serde(default)]
    pub initial_view: CalendarView,

    /// First visible time of day
    #[serde(default = "default_slot_min_time")]
    pub slot_min_time: NaiveTime,

    /// End of the visible day (exclusive)
    #[serde(default = "default_slot_max_time")]
    pub slot_max_time: NaiveTime,

    /// Slot length in minutes
    #[serde(default = "default_slot_minutes")]
    pub slot_minutes: u32,

    #[serde(default = "default_true")]
    pub editable: bool,

    #[serde(default = "default_true")]
    pub now_indicator: bool,

    #[serde(default = "default_true")]
    pub display_event_time: bool,

    #[serde(default = "default_true")]
    pub display_event_end: bool,

    #[serde(default = "default_theme")]
    pub theme: String,

    #[serde(default = "default_background_color")]
    pub event_background_color: String,

    #[serde(default = "default_border_color")]
    pub event_border_color: String,

    #[serde(default = "default_text_color")]
    pub event_text_color: String,

    /// Whether events on one lane may overlap
    #[serde(default)]
    pub event_overlap: bool,
}

fn default_slot_min_time() -> NaiveTime {
    NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default()
}

fn default_slot_max_time() -> NaiveTime {
    NaiveTime::from_hms_opt(20, 0, 0).unwrap_or_default()
}

fn default_slot_minutes() -> u32 {
    30
}

fn default_true() -> bool {
    true
}

fn default_theme() -> String {
    "bootstrap".to_string()
}

fn default_background_color() -> String {
    "#2ecc71".to_string()
}

fn default_border_color() -> String {
    "#27ae60".to_string()
}

fn default_text_color() -> String {
    "#ffffff".to_string()
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            initial_view: CalendarView::default(),
            slot_min_time: default_slot_min_time(),
            slot_max_time: default_slot_max_time(),
            slot_minutes: default_slot_minutes(),
            editable: true,
            now_indicator: true,
            display_event_time: true,
            display_event_end: true,
            theme: default_theme(),
            event_background_color: default_background_color(),
            event_border_color: default_border_color(),
            event_text_color: default_text_color(),
            event_overlap: false,
        }
    }
}

impl CalendarOptions {
    /// Check that the slot range is non-empty and divisible into slots
    pub fn validate(&self) -> Result<(), String> {
        if self.slot_min_time >= self.slot_max_time {
            return Err(format!(
                "slot_min_time ({}) must be before slot_max_time ({})",
                self.slot_min_time, self.slot_max_time
            ));
        }
        if self.slot_minutes == 0 {
            return Err("slot_minutes must be greater than zero".to_string());
        }
        Ok(())
    }

    /// Number of slots between `slot_min_time` and `slot_max_time`
    pub fn slot_count(&self) -> usize {
        if self.slot_minutes == 0 || self.slot_min_time >= self.slot_max_time {
            return 0;
        }
        let minutes = (self.slot_max_time - self.slot_min_time).num_minutes();
        let per_slot = i64::from(self.slot_minutes);
        ((minutes + per_slot - 1) / per_slot) as usize
    }

    /// Start time of every slot
    pub fn slot_times(&self) -> Vec<NaiveTime> {
        let step = chrono::Duration::minutes(i64::from(self.slot_minutes));
        (0..self.slot_count())
            .map(|i| self.slot_min_time + step * i as i32)
            .collect()
    }

    /// Slot index holding `time`, or `None` outside the visible hours
    pub fn slot_of(&self, time: NaiveTime) -> Option<usize> {
        if self.slot_minutes == 0 || time < self.slot_min_time || time >= self.slot_max_time {
            return None;
        }
        let minutes = (time - self.slot_min_time).num_minutes();
        Some((minutes / i64::from(self.slot_minutes)) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_defaults_match_booking_screen() {
        let options = CalendarOptions::default();
        assert_eq!(options.initial_view, CalendarView::ResourceTimeGridDay);
        assert_eq!(options.slot_min_time, t(8, 0));
        assert_eq!(options.slot_max_time, t(20, 0));
        assert_eq!(options.event_background_color, "#2ecc71");
        assert!(!options.event_overlap);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_slots() {
        let options = CalendarOptions::default();
        assert_eq!(options.slot_count(), 24);
        assert_eq!(options.slot_times()[0], t(8, 0));
        assert_eq!(options.slot_times()[23], t(19, 30));

        assert_eq!(options.slot_of(t(8, 0)), Some(0));
        assert_eq!(options.slot_of(t(9, 15)), Some(2));
        assert_eq!(options.slot_of(t(19, 59)), Some(23));
        assert_eq!(options.slot_of(t(20, 0)), None);
        assert_eq!(options.slot_of(t(7, 59)), None);
    }

    #[test]
    fn test_validate_rejects_empty_range() {
        let options = CalendarOptions {
            slot_min_time: t(20, 0),
            slot_max_time: t(8, 0),
            ..Default::default()
        };
        assert!(options.validate().is_err());
        assert_eq!(options.slot_count(), 0);
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let options: CalendarOptions = serde_json::from_str(
            r#"{"initial_view":"timeGridWeek","slot_min_time":"07:00:00"}"#,
        )
        .unwrap();

        assert_eq!(options.initial_view, CalendarView::TimeGridWeek);
        assert_eq!(options.slot_min_time, t(7, 0));
        assert_eq!(options.slot_max_time, t(20, 0));
        assert_eq!(options.slot_minutes, 30);
    }
}
