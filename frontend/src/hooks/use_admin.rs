use shared::Barber;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::date_utils;
use crate::services::logging::Logger;
use crate::state::admin::{AdminAction, AdminState};

const COMPONENT: &str = "admin-panel";

pub struct UseAdminResult {
    pub state: AdminState,
    pub actions: AdminActions,
}

#[derive(Clone, PartialEq)]
pub struct AdminActions {
    pub set_username: Callback<String>,
    pub set_password: Callback<String>,
    pub set_from: Callback<String>,
    pub set_to: Callback<String>,
    pub set_barber_filter: Callback<Option<String>>,
    pub load: Callback<()>,
    pub cancel: Callback<String>,
    pub set_time_off_barber: Callback<Option<String>>,
    pub set_time_off_date: Callback<String>,
    pub set_time_off_start: Callback<String>,
    pub set_time_off_end: Callback<String>,
    pub set_time_off_reason: Callback<String>,
    pub submit_time_off: Callback<()>,
}

/// State and async glue for the admin page. Request parameters are read
/// from the state at click time; outcomes are dispatched through the
/// reducer, so the list mutates only after the backend confirmed and a slow
/// response never clobbers concurrent edits.
#[hook]
pub fn use_admin(api_client: &ApiClient, barbers: &[Barber]) -> UseAdminResult {
    let state = use_reducer(|| AdminState::new(date_utils::today()));

    macro_rules! setter {
        ($ty:ty, $variant:expr) => {{
            let dispatcher = state.dispatcher();
            Callback::from(move |value: $ty| dispatcher.dispatch($variant(value)))
        }};
    }

    let load = {
        let state = state.clone();
        let api_client = api_client.clone();
        Callback::from(move |_: ()| {
            let dispatcher = state.dispatcher();
            let api_client = api_client.clone();
            let auth = state.auth_header();
            let from = state.from.clone();
            let to = state.to.clone();
            let barber_filter = state.barber_filter.clone();
            spawn_local(async move {
                match api_client
                    .admin_bookings(&auth, &from, &to, barber_filter.as_deref())
                    .await
                {
                    Ok(response) => {
                        dispatcher.dispatch(AdminAction::BookingsLoaded(response.items));
                    }
                    Err(error) => {
                        // Wrong credentials and transport errors surface the
                        // same generic notice.
                        Logger::warn(COMPONENT, &format!("bookings load failed: {error}"));
                        dispatcher.dispatch(AdminAction::LoadFailed);
                    }
                }
            });
        })
    };

    let cancel = {
        let state = state.clone();
        let api_client = api_client.clone();
        Callback::from(move |booking_id: String| {
            let dispatcher = state.dispatcher();
            let api_client = api_client.clone();
            let auth = state.auth_header();
            spawn_local(async move {
                match api_client.admin_cancel(&auth, &booking_id).await {
                    Ok(()) => dispatcher.dispatch(AdminAction::CancelConfirmed(booking_id)),
                    Err(error) => {
                        Logger::warn(COMPONENT, &format!("cancel failed: {error}"));
                        dispatcher.dispatch(AdminAction::CancelFailed);
                    }
                }
            });
        })
    };

    let submit_time_off = {
        let state = state.clone();
        let api_client = api_client.clone();
        let barbers = barbers.to_vec();
        let load = load.clone();
        Callback::from(move |_: ()| {
            let dispatcher = state.dispatcher();
            let Some(request) = state.time_off_request(&barbers) else {
                dispatcher.dispatch(AdminAction::TimeOffFailed);
                return;
            };
            let api_client = api_client.clone();
            let auth = state.auth_header();
            let load = load.clone();
            spawn_local(async move {
                match api_client.admin_time_off(&auth, &request).await {
                    Ok(()) => {
                        dispatcher.dispatch(AdminAction::TimeOffSaved);
                        // A new block changes availability; refresh the list.
                        load.emit(());
                    }
                    Err(error) => {
                        Logger::warn(COMPONENT, &format!("time-off save failed: {error}"));
                        dispatcher.dispatch(AdminAction::TimeOffFailed);
                    }
                }
            });
        })
    };

    let actions = AdminActions {
        set_username: setter!(String, AdminAction::SetUsername),
        set_password: setter!(String, AdminAction::SetPassword),
        set_from: setter!(String, AdminAction::SetFrom),
        set_to: setter!(String, AdminAction::SetTo),
        set_barber_filter: setter!(Option<String>, AdminAction::SetBarberFilter),
        load,
        cancel,
        set_time_off_barber: setter!(Option<String>, AdminAction::SetTimeOffBarber),
        set_time_off_date: setter!(String, AdminAction::SetTimeOffDate),
        set_time_off_start: setter!(String, AdminAction::SetTimeOffStart),
        set_time_off_end: setter!(String, AdminAction::SetTimeOffEnd),
        set_time_off_reason: setter!(String, AdminAction::SetTimeOffReason),
        submit_time_off,
    };

    UseAdminResult {
        state: (*state).clone(),
        actions,
    }
}
