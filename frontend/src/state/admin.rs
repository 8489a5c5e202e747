use std::rc::Rc;

use shared::{AdminBookingItem, Barber, TimeOffRequest, STATUS_CANCELLED};
use yew::functional::Reducible;

use crate::services::api;

/// Generic notices for the admin page. A failed list load deliberately does
/// not distinguish bad credentials from transport errors.
#[derive(Debug, Clone, PartialEq)]
pub enum AdminNotice {
    LoginFailed,
    CancelFailed,
    TimeOffSaved,
    TimeOffFailed,
}

impl AdminNotice {
    pub fn message(&self) -> &'static str {
        match self {
            AdminNotice::LoginFailed => "Could not load bookings. Check the credentials.",
            AdminNotice::CancelFailed => "Cancelling the booking failed. The list is unchanged.",
            AdminNotice::TimeOffSaved => "Time-off block saved.",
            AdminNotice::TimeOffFailed => "Saving the time-off block failed.",
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, AdminNotice::TimeOffSaved)
    }
}

/// Draft for one time-off block: a single date plus a start and end time.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeOffDraft {
    /// Explicit barber choice; empty falls back to the list filter, then to
    /// the first known barber.
    pub barber_id: Option<String>,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub reason: String,
}

/// In-page state of the admin panel. Mutations that depend on a server
/// response (`bookings_loaded`, `cancel_confirmed`, …) are only applied once
/// the hook got that response.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminState {
    pub username: String,
    pub password: String,
    /// Inclusive query window, `YYYY-MM-DD`.
    pub from: String,
    pub to: String,
    pub barber_filter: Option<String>,
    pub items: Vec<AdminBookingItem>,
    pub notice: Option<AdminNotice>,
    pub time_off: TimeOffDraft,
}

impl AdminState {
    /// `today` comes from the browser clock; the window defaults to the next
    /// two weeks.
    pub fn new(today: String) -> Self {
        let to = crate::services::date_utils::add_days(&today, 14);
        Self {
            username: "admin".to_string(),
            password: String::new(),
            from: today.clone(),
            to,
            barber_filter: None,
            items: Vec::new(),
            notice: None,
            time_off: TimeOffDraft {
                barber_id: None,
                date: today,
                start_time: "10:00".to_string(),
                end_time: "12:00".to_string(),
                reason: "Block".to_string(),
            },
        }
    }

    /// `Authorization` header value for every admin request.
    pub fn auth_header(&self) -> String {
        api::basic_auth(&self.username, &self.password)
    }

    /// The response replaces the displayed list wholesale.
    pub fn bookings_loaded(&mut self, items: Vec<AdminBookingItem>) {
        self.items = items;
        self.notice = None;
    }

    pub fn load_failed(&mut self) {
        self.notice = Some(AdminNotice::LoginFailed);
    }

    /// Mark exactly the confirmed booking as cancelled, in place. No
    /// re-fetch; all other rows stay untouched.
    pub fn cancel_confirmed(&mut self, booking_id: &str) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == booking_id) {
            item.status = STATUS_CANCELLED.to_string();
        }
    }

    pub fn cancel_failed(&mut self) {
        self.notice = Some(AdminNotice::CancelFailed);
    }

    /// Resolve the barber for the block: explicit choice, then the list
    /// filter, then the first known barber.
    pub fn time_off_request(&self, barbers: &[Barber]) -> Option<TimeOffRequest> {
        let barber_id = self
            .time_off
            .barber_id
            .clone()
            .or_else(|| self.barber_filter.clone())
            .or_else(|| barbers.first().map(|b| b.id.clone()))?;
        Some(TimeOffRequest {
            barber_id,
            start_local_iso: format!("{}T{}", self.time_off.date, self.time_off.start_time),
            end_local_iso: format!("{}T{}", self.time_off.date, self.time_off.end_time),
            reason: self.time_off.reason.clone(),
        })
    }

    pub fn time_off_saved(&mut self) {
        self.notice = Some(AdminNotice::TimeOffSaved);
    }

    pub fn time_off_failed(&mut self) {
        self.notice = Some(AdminNotice::TimeOffFailed);
    }
}

/// Form edits and request outcomes, dispatched through a reducer so a
/// response never clobbers fields edited while it was in flight.
#[derive(Debug, Clone, PartialEq)]
pub enum AdminAction {
    SetUsername(String),
    SetPassword(String),
    SetFrom(String),
    SetTo(String),
    SetBarberFilter(Option<String>),
    BookingsLoaded(Vec<AdminBookingItem>),
    LoadFailed,
    CancelConfirmed(String),
    CancelFailed,
    SetTimeOffBarber(Option<String>),
    SetTimeOffDate(String),
    SetTimeOffStart(String),
    SetTimeOffEnd(String),
    SetTimeOffReason(String),
    TimeOffSaved,
    TimeOffFailed,
}

impl Reducible for AdminState {
    type Action = AdminAction;

    fn reduce(self: Rc<Self>, action: AdminAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AdminAction::SetUsername(value) => next.username = value,
            AdminAction::SetPassword(value) => next.password = value,
            AdminAction::SetFrom(value) => next.from = value,
            AdminAction::SetTo(value) => next.to = value,
            AdminAction::SetBarberFilter(value) => next.barber_filter = value,
            AdminAction::BookingsLoaded(items) => next.bookings_loaded(items),
            AdminAction::LoadFailed => next.load_failed(),
            AdminAction::CancelConfirmed(id) => next.cancel_confirmed(&id),
            AdminAction::CancelFailed => next.cancel_failed(),
            AdminAction::SetTimeOffBarber(value) => next.time_off.barber_id = value,
            AdminAction::SetTimeOffDate(value) => next.time_off.date = value,
            AdminAction::SetTimeOffStart(value) => next.time_off.start_time = value,
            AdminAction::SetTimeOffEnd(value) => next.time_off.end_time = value,
            AdminAction::SetTimeOffReason(value) => next.time_off.reason = value,
            AdminAction::TimeOffSaved => next.time_off_saved(),
            AdminAction::TimeOffFailed => next.time_off_failed(),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn item(id: &str, status: &str) -> AdminBookingItem {
        AdminBookingItem {
            id: id.into(),
            customer_name: "Eva Moser".into(),
            phone_e164: "+4366412345".into(),
            email: None,
            status: status.into(),
            start_local: "2025-03-10 14:00".into(),
            end_local: "2025-03-10 14:30".into(),
            barber_name: "Anna".into(),
            service_name: "Haircut".into(),
        }
    }

    fn barbers() -> Vec<Barber> {
        ["b1", "b2"]
            .iter()
            .map(|id| Barber {
                id: (*id).into(),
                name: format!("Barber {id}"),
                photo_url: None,
            })
            .collect()
    }

    #[wasm_bindgen_test]
    fn query_window_defaults_to_two_weeks() {
        let state = AdminState::new("2025-03-10".into());
        assert_eq!(state.from, "2025-03-10");
        assert_eq!(state.to, "2025-03-24");
    }

    #[wasm_bindgen_test]
    fn cancel_mutates_only_the_confirmed_row() {
        let mut state = AdminState::new("2025-03-10".into());
        state.bookings_loaded(vec![item("x1", "confirmed"), item("x2", "confirmed")]);

        state.cancel_confirmed("x2");
        assert_eq!(state.items[0].status, "confirmed");
        assert_eq!(state.items[1].status, "cancelled");

        // An id the list does not contain changes nothing.
        state.cancel_confirmed("x9");
        assert_eq!(state.items[0].status, "confirmed");
    }

    #[wasm_bindgen_test]
    fn cancel_failure_keeps_the_list_and_raises_a_notice() {
        let mut state = AdminState::new("2025-03-10".into());
        state.bookings_loaded(vec![item("x1", "confirmed")]);
        state.cancel_failed();
        assert_eq!(state.items[0].status, "confirmed");
        assert_eq!(state.notice, Some(AdminNotice::CancelFailed));
    }

    #[wasm_bindgen_test]
    fn time_off_barber_falls_back_filter_then_first() {
        let mut state = AdminState::new("2025-03-10".into());
        state.time_off.start_time = "09:00".into();
        state.time_off.end_time = "11:00".into();

        let request = state.time_off_request(&barbers()).unwrap();
        assert_eq!(request.barber_id, "b1");
        assert_eq!(request.start_local_iso, "2025-03-10T09:00");
        assert_eq!(request.end_local_iso, "2025-03-10T11:00");

        state.barber_filter = Some("b2".into());
        assert_eq!(state.time_off_request(&barbers()).unwrap().barber_id, "b2");

        state.time_off.barber_id = Some("b1".into());
        assert_eq!(state.time_off_request(&barbers()).unwrap().barber_id, "b1");

        let empty = AdminState::new("2025-03-10".into());
        assert_eq!(empty.time_off_request(&[]), None);
    }

    #[wasm_bindgen_test]
    fn load_replaces_the_list_and_clears_notices() {
        let mut state = AdminState::new("2025-03-10".into());
        state.load_failed();
        assert_eq!(state.notice, Some(AdminNotice::LoginFailed));

        state.bookings_loaded(vec![item("x1", "confirmed")]);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.notice, None);

        state.bookings_loaded(Vec::new());
        assert!(state.items.is_empty());
    }
}
