//! Calendar display modes

use serde::{Deserialize, Serialize};

/// The three views offered by the view-switch buttons.
///
/// Serialised under their literal names (`dayGridMonth`, `timeGridWeek`,
/// `resourceTimeGridDay`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CalendarView {
    /// Month grid
    #[serde(rename = "dayGridMonth")]
    DayGridMonth,
    /// Week time grid
    #[serde(rename = "timeGridWeek")]
    TimeGridWeek,
    /// Day time grid with one lane per doctor
    #[default]
    #[serde(rename = "resourceTimeGridDay")]
    ResourceTimeGridDay,
}

impl CalendarView {
    /// All views, in button order
    pub fn all() -> &'static [CalendarView] {
        &[
            CalendarView::DayGridMonth,
            CalendarView::TimeGridWeek,
            CalendarView::ResourceTimeGridDay,
        ]
    }

    /// Literal view name
    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarView::DayGridMonth => "dayGridMonth",
            CalendarView::TimeGridWeek => "timeGridWeek",
            CalendarView::ResourceTimeGridDay => "resourceTimeGridDay",
        }
    }

    /// Button caption
    pub fn label(&self) -> &'static str {
        match self {
            CalendarView::DayGridMonth => "Month View",
            CalendarView::TimeGridWeek => "Week View",
            CalendarView::ResourceTimeGridDay => "Day View",
        }
    }
}

impl std::fmt::Display for CalendarView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CalendarView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dayGridMonth" | "month" => Ok(CalendarView::DayGridMonth),
            "timeGridWeek" | "week" => Ok(CalendarView::TimeGridWeek),
            "resourceTimeGridDay" | "day" => Ok(CalendarView::ResourceTimeGridDay),
            other => Err(format!(
                "Unknown view '{}'. Use: month, week, day (or dayGridMonth, timeGridWeek, resourceTimeGridDay)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_names_round_trip() {
        for view in CalendarView::all() {
            assert_eq!(view.as_str().parse::<CalendarView>().unwrap(), *view);
            let json = serde_json::to_string(view).unwrap();
            assert_eq!(json, format!("\"{}\"", view.as_str()));
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("month".parse::<CalendarView>().unwrap(), CalendarView::DayGridMonth);
        assert_eq!("week".parse::<CalendarView>().unwrap(), CalendarView::TimeGridWeek);
        assert_eq!("day".parse::<CalendarView>().unwrap(), CalendarView::ResourceTimeGridDay);
        assert!("year".parse::<CalendarView>().is_err());
    }

    #[test]
    fn test_default_is_day_view() {
        assert_eq!(CalendarView::default(), CalendarView::ResourceTimeGridDay);
    }
}
