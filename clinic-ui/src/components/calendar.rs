//! Calendar Component
//!
//! Renders the binder's events for the active view around the anchor date.

use chrono::{Local, NaiveDate, NaiveDateTime};
use clinic_calendar::calendar::{
    day_grid, month_grid, now_slot, week_grid, CalendarBinder, CalendarEvent, CalendarOptions,
    CalendarView, Column, TimeGrid,
};
use leptos::*;

use crate::state::BookingState;

#[component]
pub fn Calendar() -> impl IntoView {
    let state = use_context::<BookingState>().expect("BookingState not found");
    let binder = state.binder;
    let anchor = state.anchor;

    // Ticks once a minute so the now line moves
    let (now, set_now) = create_signal(Local::now().naive_local());
    gloo_timers::callback::Interval::new(60_000, move || {
        set_now.set(Local::now().naive_local());
    })
    .forget();

    view! {
        <div id="calendar" class="mb-4">
            {move || {
                let date = anchor.get();
                let now = now.get();
                binder.with(|b| match b.view() {
                    CalendarView::ResourceTimeGridDay => {
                        let grid = day_grid(b, date);
                        let headers = grid.columns.iter().map(|c| c.key.title.clone()).collect();
                        time_grid_view(b, &grid, headers, |_| date, now)
                    }
                    CalendarView::TimeGridWeek => {
                        let grid = week_grid(b, date);
                        let headers = grid
                            .columns
                            .iter()
                            .map(|c| c.key.format("%a %-m/%-d").to_string())
                            .collect();
                        time_grid_view(b, &grid, headers, |c| c.key, now)
                    }
                    CalendarView::DayGridMonth => month_view(b, date).into_view(),
                })
            }}
        </div>
    }
}

fn time_grid_view<K>(
    binder: &CalendarBinder,
    grid: &TimeGrid<K>,
    headers: Vec<String>,
    column_date: impl Fn(&Column<K>) -> NaiveDate,
    now: NaiveDateTime,
) -> View {
    let options = binder.options();
    let now_slots: Vec<Option<usize>> = grid
        .columns
        .iter()
        .map(|c| now_slot(binder, column_date(c), now))
        .collect();

    let rows = grid
        .slots
        .iter()
        .enumerate()
        .map(|(slot, time)| {
            let cells = (0..grid.columns.len())
                .map(|column| {
                    let class = if now_slots[column] == Some(slot) {
                        "border-top border-danger"
                    } else {
                        ""
                    };
                    let events = grid
                        .cell(column, slot)
                        .map(|e| event_block(e, options))
                        .collect_view();
                    view! { <td class=class>{events}</td> }
                })
                .collect_view();
            view! {
                <tr>
                    <th scope="row" class="text-muted small">{time.format("%H:%M").to_string()}</th>
                    {cells}
                </tr>
            }
        })
        .collect_view();

    let mut leftovers: Vec<CalendarEvent> = grid.out_of_hours.clone();
    leftovers.extend(grid.unassigned.iter().cloned());

    view! {
        <table class="table table-bordered table-sm">
            <thead>
                <tr>
                    <th scope="col"></th>
                    {headers.into_iter().map(|h| view! { <th scope="col">{h}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
        {(!leftovers.is_empty()).then(|| view! {
            <div class="small text-muted">
                <strong>"Outside the grid: "</strong>
                {leftovers.iter().map(|e| view! {
                    <span class="badge badge-secondary mr-1">
                        {format!("{} {}", e.start.format("%H:%M"), e.title)}
                    </span>
                }).collect_view()}
            </div>
        })}
    }
    .into_view()
}

fn month_view(binder: &CalendarBinder, anchor: NaiveDate) -> impl IntoView {
    let options = binder.options();
    let grid = month_grid(binder, anchor);
    let today = Local::now().date_naive();

    let weeks = grid
        .weeks
        .iter()
        .map(|week| {
            let cells = week
                .iter()
                .map(|cell| {
                    let class = match (cell.in_month, cell.date == today) {
                        (_, true) => "table-warning",
                        (false, false) => "text-muted bg-light",
                        (true, false) => "",
                    };
                    view! {
                        <td class=class style="height: 6rem; vertical-align: top;">
                            <div class="small">{cell.date.format("%-d").to_string()}</div>
                            {cell.events.iter().map(|e| event_block(e, options)).collect_view()}
                        </td>
                    }
                })
                .collect_view();
            view! { <tr>{cells}</tr> }
        })
        .collect_view();

    view! {
        <table class="table table-bordered table-sm">
            <thead>
                <tr>
                    {["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
                        .iter()
                        .map(|d| view! { <th scope="col">{*d}</th> })
                        .collect_view()}
                </tr>
            </thead>
            <tbody>{weeks}</tbody>
        </table>
    }
}

fn event_block(event: &CalendarEvent, options: &CalendarOptions) -> impl IntoView {
    let style = format!(
        "background-color: {}; border: 1px solid {}; color: {};",
        event.background_color, event.border_color, event.text_color
    );

    view! {
        <div class="rounded px-1 small mb-1" style=style title=event.title.clone()>
            {event.label(options)}
        </div>
    }
}
