use shared::Barber;
use yew::prelude::*;

use super::barber_picker::BarberPicker;
use super::calendar::Calendar;
use super::click;
use super::confirmation_card::ConfirmationCard;
use super::contact_form::ContactForm;
use super::priority_form::PriorityForm;
use super::slot_picker::SlotPicker;
use super::step_indicator::StepIndicator;
use crate::hooks::use_booking::use_booking;
use crate::services::api::ApiClient;
use crate::state::wizard::{Notice, WizardStep};

#[derive(Properties, PartialEq)]
pub struct BookingWizardProps {
    pub api_client: ApiClient,
    pub barbers: Vec<Barber>,
}

/// The three-step booking flow plus the priority side-flow. All state and
/// gating lives in the wizard model; this component only renders it and
/// wires the actions.
#[function_component(BookingWizard)]
pub fn booking_wizard(props: &BookingWizardProps) -> Html {
    let booking = use_booking(&props.api_client, &props.barbers);
    let state = &booking.state;
    let actions = &booking.actions;

    let next_button = {
        let label = "NEXT";
        html! {
            <button
                class={if state.can_advance() { "btn btn-primary" } else { "btn" }}
                disabled={!state.can_advance()}
                onclick={click(&actions.advance)}
            >
                {label}
            </button>
        }
    };

    let step_content = match state.step {
        WizardStep::Barber => html! {
            <div class="wizard-step">
                <h2>{"Choose your barber"}</h2>
                <BarberPicker
                    barbers={props.barbers.clone()}
                    selected={state.barber_id.clone()}
                    on_select={actions.select_barber.clone()}
                />
                <div class="form-actions form-actions-end">
                    {next_button.clone()}
                </div>
            </div>
        },
        WizardStep::Schedule => html! {
            <div class="wizard-step">
                {if state.priority_prompt() {
                    html! {
                        <div class="priority-banner">
                            <div class="priority-banner-title">{"No appointment left?"}</div>
                            <button class="btn btn-accent" onclick={click(&actions.toggle_priority)}>
                                {"Send a priority request"}
                            </button>
                        </div>
                    }
                } else { html! {} }}

                <h2>{"Pick date & time"}</h2>
                <Calendar
                    month={state.month.clone()}
                    days={state.days.clone()}
                    selected={state.date.clone()}
                    on_prev={actions.prev_month.clone()}
                    on_next={actions.next_month.clone()}
                    on_pick={actions.pick_date.clone()}
                />
                <SlotPicker
                    date={state.date.clone()}
                    slots={state.slots.clone()}
                    selected={state.time.clone()}
                    on_pick={actions.pick_time.clone()}
                />

                {if state.priority_open {
                    html! {
                        <PriorityForm
                            date={state.date.clone()}
                            time={state.priority_time.clone()}
                            note={state.priority_note.clone()}
                            name={state.customer_name.clone()}
                            phone={state.phone.clone()}
                            consent={state.consent}
                            honeypot={state.honeypot.clone()}
                            on_date={actions.pick_desired_date.clone()}
                            on_time={actions.set_priority_time.clone()}
                            on_note={actions.set_priority_note.clone()}
                            on_name={actions.set_name.clone()}
                            on_phone={actions.set_phone.clone()}
                            on_consent={actions.set_consent.clone()}
                            on_honeypot={actions.set_honeypot.clone()}
                            on_submit={actions.submit_priority.clone()}
                        />
                    }
                } else { html! {} }}

                <div class="form-actions">
                    <button class="btn" onclick={click(&actions.back)}>{"BACK"}</button>
                    {next_button.clone()}
                </div>
            </div>
        },
        WizardStep::Contact => html! {
            <ContactForm
                name={state.customer_name.clone()}
                phone={state.phone.clone()}
                consent={state.consent}
                honeypot={state.honeypot.clone()}
                on_name={actions.set_name.clone()}
                on_phone={actions.set_phone.clone()}
                on_consent={actions.set_consent.clone()}
                on_honeypot={actions.set_honeypot.clone()}
                on_back={actions.back.clone()}
                on_submit={actions.submit.clone()}
            />
        },
    };

    html! {
        <div class="booking-wizard">
            <header class="wizard-header">
                <h1>{"Book your appointment"}</h1>
                <p>{"Confirmation & reminder through your calendar."}</p>
            </header>

            <StepIndicator current={state.step.number()} />

            {if let Some(notice) = state.notice.as_ref() {
                let class = match notice {
                    Notice::RequestFailed(_) => "form-message error",
                    _ => "form-message warning",
                };
                html! {
                    <div {class}>
                        {notice.message()}
                        <button class="notice-dismiss" onclick={click(&actions.dismiss_notice)}>
                            {"×"}
                        </button>
                    </div>
                }
            } else { html! {} }}

            {step_content}

            {if let Some(confirmation) = state.confirmation.clone() {
                html! {
                    <ConfirmationCard
                        confirmation={confirmation}
                        on_dismiss={actions.dismiss_confirmation.clone()}
                    />
                }
            } else { html! {} }}
        </div>
    }
}
