use shared::DayAvailability;
use yew::prelude::*;

use crate::services::date_utils;

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    /// Displayed month, `YYYY-MM`.
    pub month: String,
    /// Day availability in backend order; rendered sequentially.
    pub days: Vec<DayAvailability>,
    pub selected: Option<String>,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
    pub on_pick: Callback<String>,
}

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Month grid, Monday-start weeks. Pure function of its props; day cells
/// with no free slots are disabled and never report a pick.
#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let grid = date_utils::build_month_grid(&props.month, &props.days);

    let on_prev = {
        let on_prev = props.on_prev.clone();
        Callback::from(move |_: MouseEvent| on_prev.emit(()))
    };
    let on_next = {
        let on_next = props.on_next.clone();
        Callback::from(move |_: MouseEvent| on_next.emit(()))
    };

    html! {
        <div class="calendar">
            <div class="calendar-header">
                <button class="calendar-nav-btn" onclick={on_prev}>{"‹"}</button>
                <h3 class="calendar-title">{date_utils::month_title(&props.month)}</h3>
                <button class="calendar-nav-btn" onclick={on_next}>{"›"}</button>
            </div>
            <div class="calendar-weekdays">
                {for WEEKDAYS.iter().map(|weekday| html! {
                    <div class="weekday">{weekday}</div>
                })}
            </div>
            <div class="calendar-grid">
                {for grid.iter().enumerate().map(|(index, cell)| match cell {
                    None => html! {
                        <div key={format!("pad-{index}")} class="calendar-day empty"></div>
                    },
                    Some(day) => day_cell(props, day),
                })}
            </div>
        </div>
    }
}

fn day_cell(props: &CalendarProps, day: &DayAvailability) -> Html {
    let booked_out = day.free == 0;
    let selected = props.selected.as_deref() == Some(day.date.as_str());
    let class = format!(
        "calendar-day{}{}",
        if booked_out { " booked-out" } else { "" },
        if selected { " selected" } else { "" },
    );
    let onclick = {
        let on_pick = props.on_pick.clone();
        let date = day.date.clone();
        Callback::from(move |_: MouseEvent| on_pick.emit(date.clone()))
    };

    html! {
        <button key={day.date.clone()} {class} disabled={booked_out} onclick={onclick}>
            <div class="day-number">{date_utils::day_number(&day.date)}</div>
            <div class={if day.free > 0 { "free-indicator available" } else { "free-indicator" }}></div>
        </button>
    }
}
