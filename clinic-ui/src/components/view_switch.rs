//! View Switch
//!
//! Month / week / day buttons plus date navigation.

use clinic_calendar::calendar::{visible_range, CalendarView};
use leptos::*;

use crate::state::BookingState;

#[component]
pub fn ViewSwitch() -> impl IntoView {
    let state = use_context::<BookingState>().expect("BookingState not found");
    let binder = state.binder;
    let anchor = state.anchor;

    let title = move || {
        let view = binder.with(|b| b.view());
        let date = anchor.get();
        match view {
            CalendarView::DayGridMonth => date.format("%B %Y").to_string(),
            CalendarView::TimeGridWeek => {
                let range = visible_range(view, date);
                let last = range.end.pred_opt().unwrap_or(range.end);
                format!("{} - {}", range.start.format("%b %-d"), last.format("%b %-d, %Y"))
            }
            CalendarView::ResourceTimeGridDay => date.format("%A, %B %-d, %Y").to_string(),
        }
    };

    let prev = state.clone();
    let next = state.clone();
    let today = state.clone();

    view! {
        <div class="d-flex justify-content-between align-items-center mb-3">
            <div class="btn-group" role="group">
                <button type="button" class="btn btn-outline-secondary" on:click=move |_| prev.step(false)>
                    "<"
                </button>
                <button type="button" class="btn btn-outline-secondary" on:click=move |_| today.today()>
                    "Today"
                </button>
                <button type="button" class="btn btn-outline-secondary" on:click=move |_| next.step(true)>
                    ">"
                </button>
            </div>

            <h2 class="h4 mb-0">{title}</h2>

            <div class="btn-group" role="group">
                {CalendarView::all()
                    .iter()
                    .copied()
                    .map(|view| {
                        let state = state.clone();
                        let class = move || {
                            if binder.with(|b| b.view()) == view {
                                "btn btn-primary"
                            } else {
                                "btn btn-outline-primary"
                            }
                        };
                        view! {
                            <button
                                type="button"
                                id=view.as_str()
                                class=class
                                on:click=move |_| state.change_view(view)
                            >
                                {view.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
