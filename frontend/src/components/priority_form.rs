use yew::prelude::*;

use super::{checkbox_value, input_value};

#[derive(Properties, PartialEq)]
pub struct PriorityFormProps {
    pub date: Option<String>,
    pub time: String,
    pub note: String,
    pub name: String,
    pub phone: String,
    pub consent: bool,
    pub honeypot: String,
    pub on_date: Callback<String>,
    pub on_time: Callback<String>,
    pub on_note: Callback<String>,
    pub on_name: Callback<String>,
    pub on_phone: Callback<String>,
    pub on_consent: Callback<bool>,
    pub on_honeypot: Callback<String>,
    pub on_submit: Callback<()>,
}

/// Interest submission for an overbooked day: desired date and free-text
/// time instead of a slot pick, same contact and consent rules as a booking.
#[function_component(PriorityForm)]
pub fn priority_form(props: &PriorityFormProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <form class="priority-form" onsubmit={onsubmit}>
            <div class="priority-form-title">{"Priority request"}</div>
            <div class="priority-when">
                <input
                    type="date"
                    class="form-field"
                    value={props.date.clone().unwrap_or_default()}
                    oninput={input_value(&props.on_date)}
                />
                <input
                    type="time"
                    class="form-field"
                    value={props.time.clone()}
                    oninput={input_value(&props.on_time)}
                />
            </div>
            <input
                type="text"
                class="form-field"
                placeholder="Full name"
                value={props.name.clone()}
                oninput={input_value(&props.on_name)}
            />
            <input
                type="tel"
                class="form-field"
                placeholder="Phone number (+43…)"
                value={props.phone.clone()}
                oninput={input_value(&props.on_phone)}
            />
            <input
                type="text"
                class="form-field"
                placeholder="Note (optional)"
                value={props.note.clone()}
                oninput={input_value(&props.on_note)}
            />
            <label class="consent-row">
                <input
                    type="checkbox"
                    checked={props.consent}
                    onchange={checkbox_value(&props.on_consent)}
                />
                <span>
                    {"I agree to the "}
                    <a href="/datenschutz" target="_blank">{"privacy policy"}</a>
                    {"."}
                </span>
            </label>
            <input
                class="hp-field"
                tabindex="-1"
                autocomplete="off"
                aria-hidden="true"
                value={props.honeypot.clone()}
                oninput={input_value(&props.on_honeypot)}
            />
            <div class="form-actions">
                <button type="submit" class="btn btn-primary">{"Send priority request"}</button>
            </div>
        </form>
    }
}
