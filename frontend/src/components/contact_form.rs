use yew::prelude::*;

use super::{checkbox_value, click, input_value};

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub name: String,
    pub phone: String,
    pub consent: bool,
    pub honeypot: String,
    pub on_name: Callback<String>,
    pub on_phone: Callback<String>,
    pub on_consent: Callback<bool>,
    pub on_honeypot: Callback<String>,
    pub on_back: Callback<()>,
    pub on_submit: Callback<()>,
}

/// Step 3: contact details, consent, and the hidden honeypot field.
#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <form class="contact-form" onsubmit={onsubmit}>
            <h2>{"Your details"}</h2>
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
                <button type="button" class="btn" onclick={click(&props.on_back)}>
                    {"BACK"}
                </button>
                <button type="submit" class="btn btn-primary" disabled={!props.consent}>
                    {"CONFIRM BOOKING"}
                </button>
            </div>
        </form>
    }
}
