use shared::Barber;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::date_utils;
use crate::services::logging::Logger;
use crate::state::wizard::{Command, WizardAction, WizardState};

const COMPONENT: &str = "booking-wizard";

pub struct UseBookingResult {
    pub state: WizardState,
    pub actions: BookingActions,
}

/// Callback bundle the wizard component wires into its views. Every
/// callback just dispatches one [`WizardAction`].
#[derive(Clone, PartialEq)]
pub struct BookingActions {
    pub select_barber: Callback<String>,
    pub prev_month: Callback<()>,
    pub next_month: Callback<()>,
    pub pick_date: Callback<String>,
    pub pick_desired_date: Callback<String>,
    pub pick_time: Callback<String>,
    pub advance: Callback<()>,
    pub back: Callback<()>,
    pub set_name: Callback<String>,
    pub set_phone: Callback<String>,
    pub set_consent: Callback<bool>,
    pub set_honeypot: Callback<String>,
    pub toggle_priority: Callback<()>,
    pub set_priority_time: Callback<String>,
    pub set_priority_note: Callback<String>,
    pub submit: Callback<()>,
    pub submit_priority: Callback<()>,
    pub dismiss_confirmation: Callback<()>,
    pub dismiss_notice: Callback<()>,
}

/// Owns the wizard state and runs the commands its transitions record.
///
/// The state machine itself lives in [`crate::state::wizard`]; this hook is
/// only the async glue. State goes through a reducer so responses landing
/// after further user input are applied to the state as it is then — the
/// stale-overwrite guards in the model see current selections.
#[hook]
pub fn use_booking(api_client: &ApiClient, barbers: &[Barber]) -> UseBookingResult {
    let state = use_reducer(|| WizardState::new(date_utils::current_month()));

    {
        let dispatcher = state.dispatcher();
        use_effect_with(barbers.to_vec(), move |barbers| {
            dispatcher.dispatch(WizardAction::BarbersLoaded(barbers.clone()));
            || ()
        });
    }

    // Run each recorded command exactly once, keyed by its sequence number.
    {
        let dispatcher = state.dispatcher();
        let api_client = api_client.clone();
        use_effect_with((state.command_seq, state.command.clone()), move |(_, command)| {
            if let Some(command) = command.clone() {
                run_command(dispatcher, api_client, command);
            }
            || ()
        });
    }

    macro_rules! action {
        ($variant:expr) => {{
            let dispatcher = state.dispatcher();
            Callback::from(move |_: ()| dispatcher.dispatch($variant))
        }};
        ($ty:ty, $variant:expr) => {{
            let dispatcher = state.dispatcher();
            Callback::from(move |value: $ty| dispatcher.dispatch($variant(value)))
        }};
    }

    let actions = BookingActions {
        select_barber: action!(String, WizardAction::SelectBarber),
        prev_month: action!(WizardAction::ShiftMonth(-1)),
        next_month: action!(WizardAction::ShiftMonth(1)),
        pick_date: action!(String, WizardAction::PickDate),
        pick_desired_date: action!(String, WizardAction::PickDesiredDate),
        pick_time: action!(String, WizardAction::PickTime),
        advance: action!(WizardAction::Advance),
        back: action!(WizardAction::Back),
        set_name: action!(String, WizardAction::SetName),
        set_phone: action!(String, WizardAction::SetPhone),
        set_consent: action!(bool, WizardAction::SetConsent),
        set_honeypot: action!(String, WizardAction::SetHoneypot),
        toggle_priority: action!(WizardAction::TogglePriority),
        set_priority_time: action!(String, WizardAction::SetPriorityTime),
        set_priority_note: action!(String, WizardAction::SetPriorityNote),
        submit: action!(WizardAction::Submit),
        submit_priority: action!(WizardAction::SubmitPriority),
        dismiss_confirmation: action!(WizardAction::DismissConfirmation),
        dismiss_notice: action!(WizardAction::DismissNotice),
    };

    UseBookingResult {
        state: (*state).clone(),
        actions,
    }
}

fn run_command(
    dispatcher: UseReducerDispatcher<WizardState>,
    api_client: ApiClient,
    command: Command,
) {
    spawn_local(async move {
        match command {
            Command::LoadMonth { barber_id, month } => {
                match api_client.month_overview(&barber_id, &month).await {
                    Ok(overview) => dispatcher.dispatch(WizardAction::MonthLoaded {
                        barber_id,
                        month,
                        days: overview.days,
                    }),
                    Err(error) => {
                        Logger::error(COMPONENT, &format!("month overview failed: {error}"));
                        dispatcher.dispatch(WizardAction::LoadFailed(error.to_string()));
                    }
                }
            }
            Command::LoadSlots { barber_id, date } => {
                match api_client.availability(&barber_id, &date).await {
                    Ok(day) => dispatcher.dispatch(WizardAction::SlotsLoaded {
                        barber_id,
                        date,
                        slots: day.slots,
                    }),
                    Err(error) => {
                        Logger::error(COMPONENT, &format!("availability failed: {error}"));
                        dispatcher.dispatch(WizardAction::LoadFailed(error.to_string()));
                    }
                }
            }
            Command::SubmitBooking(request) => match api_client.book(&request).await {
                Ok(response) => {
                    dispatcher.dispatch(WizardAction::BookingConfirmed(Some(response.booking_id)));
                }
                Err(error) => {
                    Logger::error(COMPONENT, &format!("booking failed: {error}"));
                    dispatcher.dispatch(WizardAction::SubmitFailed(error.to_string()));
                }
            },
            Command::SubmitPriority(request) => {
                match api_client.priority_request(&request).await {
                    Ok(()) => dispatcher.dispatch(WizardAction::BookingConfirmed(None)),
                    Err(error) => {
                        Logger::error(COMPONENT, &format!("priority request failed: {error}"));
                        dispatcher.dispatch(WizardAction::SubmitFailed(error.to_string()));
                    }
                }
            }
        }
    });
}
