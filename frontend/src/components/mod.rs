pub mod admin_panel;
pub mod barber_picker;
pub mod booking_wizard;
pub mod calendar;
pub mod confirmation_card;
pub mod contact_form;
pub mod header;
pub mod legal_pages;
pub mod priority_form;
pub mod slot_picker;
pub mod step_indicator;
pub mod time_off_form;

use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Adapt a `Callback<String>` to a text input's `oninput`.
pub(crate) fn input_value(callback: &Callback<String>) -> Callback<InputEvent> {
    let callback = callback.clone();
    Callback::from(move |event: InputEvent| {
        let input: HtmlInputElement = event.target_unchecked_into();
        callback.emit(input.value());
    })
}

/// Adapt a `Callback<bool>` to a checkbox's `onchange`.
pub(crate) fn checkbox_value(callback: &Callback<bool>) -> Callback<Event> {
    let callback = callback.clone();
    Callback::from(move |event: Event| {
        let input: HtmlInputElement = event.target_unchecked_into();
        callback.emit(input.checked());
    })
}

/// Adapt a `Callback<()>` to a plain button click.
pub(crate) fn click(callback: &Callback<()>) -> Callback<MouseEvent> {
    let callback = callback.clone();
    Callback::from(move |_: MouseEvent| callback.emit(()))
}
