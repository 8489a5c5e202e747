use yew::prelude::*;

use super::click;
use crate::services::calendar_export;
use crate::state::wizard::Confirmation;

#[derive(Properties, PartialEq)]
pub struct ConfirmationCardProps {
    pub confirmation: Confirmation,
    pub on_dismiss: Callback<()>,
}

/// Banner after a successful booking or priority request, with the calendar
/// export actions. Stays visible until dismissed.
#[function_component(ConfirmationCard)]
pub fn confirmation_card(props: &ConfirmationCardProps) -> Html {
    let confirmation = &props.confirmation;

    let download = {
        let confirmation = confirmation.clone();
        Callback::from(move |_: MouseEvent| {
            calendar_export::export_ics(
                &confirmation.barber_name,
                &confirmation.date,
                &confirmation.time,
            );
        })
    };

    let calendar_link = calendar_export::google_calendar_link(
        &confirmation.barber_name,
        &confirmation.date,
        &confirmation.time,
    );

    html! {
        <div class="confirmation-card">
            <div class="confirmation-title">{"Booking/request received"}</div>
            <div class="confirmation-body">
                {if !confirmation.barber_name.is_empty() {
                    html! { <div>{"Barber: "}<b>{&confirmation.barber_name}</b></div> }
                } else { html! {} }}
                <div>{"Time: "}<b>{confirmation.when_label()}</b></div>
                {if let Some(id) = confirmation.booking_id.as_ref() {
                    html! { <div>{"Booking ID: "}<b>{id}</b></div> }
                } else { html! {} }}
            </div>
            <div class="confirmation-actions">
                <button class="btn" onclick={download}>{"Download .ics"}</button>
                {if let Some(url) = calendar_link {
                    html! {
                        <a class="btn" href={url} target="_blank">{"Add to Google Calendar"}</a>
                    }
                } else { html! {} }}
            </div>
            <button class="btn confirmation-dismiss" onclick={click(&props.on_dismiss)}>
                {"Close"}
            </button>
        </div>
    }
}
