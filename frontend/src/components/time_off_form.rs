use shared::Barber;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::input_value;
use crate::state::admin::TimeOffDraft;

#[derive(Properties, PartialEq)]
pub struct TimeOffFormProps {
    pub barbers: Vec<Barber>,
    pub draft: TimeOffDraft,
    pub on_barber: Callback<Option<String>>,
    pub on_date: Callback<String>,
    pub on_start: Callback<String>,
    pub on_end: Callback<String>,
    pub on_reason: Callback<String>,
    pub on_submit: Callback<()>,
}

/// Admin form for blocking a barber out: one date, a start/end time pair and
/// an optional reason. An empty barber choice falls back to the list filter.
#[function_component(TimeOffForm)]
pub fn time_off_form(props: &TimeOffFormProps) -> Html {
    let on_barber_change = {
        let on_barber = props.on_barber.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            let value = select.value();
            on_barber.emit((!value.is_empty()).then_some(value));
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <form class="admin-card time-off-form" onsubmit={onsubmit}>
            <div class="admin-card-title">{"Add time off"}</div>
            <div class="time-off-grid">
                <select class="form-field" onchange={on_barber_change}>
                    <option value="" selected={props.draft.barber_id.is_none()}>
                        {"(use filtered barber)"}
                    </option>
                    {for props.barbers.iter().map(|barber| {
                        let selected = props.draft.barber_id.as_deref() == Some(barber.id.as_str());
                        html! {
                            <option key={barber.id.clone()} value={barber.id.clone()} {selected}>
                                {&barber.name}
                            </option>
                        }
                    })}
                </select>
                <input
                    type="date"
                    class="form-field"
                    value={props.draft.date.clone()}
                    oninput={input_value(&props.on_date)}
                />
                <input
                    type="time"
                    class="form-field"
                    value={props.draft.start_time.clone()}
                    oninput={input_value(&props.on_start)}
                />
                <input
                    type="time"
                    class="form-field"
                    value={props.draft.end_time.clone()}
                    oninput={input_value(&props.on_end)}
                />
                <input
                    type="text"
                    class="form-field time-off-reason"
                    placeholder="Reason (optional)"
                    value={props.draft.reason.clone()}
                    oninput={input_value(&props.on_reason)}
                />
            </div>
            <button type="submit" class="btn btn-primary">{"Set block"}</button>
        </form>
    }
}
