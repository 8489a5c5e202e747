use std::rc::Rc;

use shared::{Barber, BookingRequest, DayAvailability, PriorityRequestBody};
use yew::functional::Reducible;

use crate::services::date_utils;

const DEFAULT_PRIORITY_TIME: &str = "12:00";

/// The three user-facing steps. A successful submission resets the draft to
/// the first step with the confirmation banner shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Barber,
    Schedule,
    Contact,
}

impl WizardStep {
    pub fn number(self) -> u8 {
        match self {
            WizardStep::Barber => 1,
            WizardStep::Schedule => 2,
            WizardStep::Contact => 3,
        }
    }
}

/// Side effect a transition asks the controller to run. Transitions never
/// touch the network themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    LoadMonth { barber_id: String, month: String },
    LoadSlots { barber_id: String, date: String },
    SubmitBooking(BookingRequest),
    SubmitPriority(PriorityRequestBody),
}

/// User-visible notice. Validation notices are raised before any network
/// call; `RequestFailed` carries the API error text.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    NameAndPhoneRequired,
    ConsentRequired,
    DateRequired,
    RequestFailed(String),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::NameAndPhoneRequired => "Please enter your name and phone number.".into(),
            Notice::ConsentRequired => "Please accept the privacy policy.".into(),
            Notice::DateRequired => "Please pick a date first.".into(),
            Notice::RequestFailed(detail) => {
                format!("The request could not be completed: {detail}")
            }
        }
    }
}

/// Banner content after a successful booking or priority request. Priority
/// requests carry no booking id.
#[derive(Debug, Clone, PartialEq)]
pub struct Confirmation {
    pub barber_name: String,
    pub date: String,
    pub time: String,
    pub booking_id: Option<String>,
}

impl Confirmation {
    pub fn when_label(&self) -> String {
        format!("{} {}", self.date, self.time)
    }
}

/// Labels captured when a submission goes out; turned into a
/// [`Confirmation`] once the server confirms.
#[derive(Debug, Clone, PartialEq)]
struct PendingSubmission {
    barber_name: String,
    date: String,
    time: String,
}

/// The whole booking flow as an explicit state machine.
///
/// Every mutation happens through a transition method; methods that need a
/// fetch or submission return the [`Command`] for the controller to run.
/// Responses come back through `month_loaded`/`slots_loaded`/
/// `booking_confirmed`/`submit_failed`, which drop payloads that no longer
/// match the current selection.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardState {
    pub step: WizardStep,
    pub barbers: Vec<Barber>,
    pub barber_id: Option<String>,
    /// Displayed month, `YYYY-MM`.
    pub month: String,
    pub days: Vec<DayAvailability>,
    pub date: Option<String>,
    /// `None` until the selected date's slot list has arrived.
    pub slots: Option<Vec<String>>,
    pub time: Option<String>,
    pub customer_name: String,
    pub phone: String,
    pub consent: bool,
    /// Hidden form field; any content marks the submitter as a bot.
    pub honeypot: String,
    pub priority_open: bool,
    pub priority_time: String,
    pub priority_note: String,
    pub confirmation: Option<Confirmation>,
    pub notice: Option<Notice>,
    /// Side effect requested by the last reduced action. `command_seq` bumps
    /// with every new request so the controller runs each exactly once.
    pub command: Option<Command>,
    pub command_seq: u64,
    pending: Option<PendingSubmission>,
}

impl WizardState {
    pub fn new(month: String) -> Self {
        Self {
            step: WizardStep::Barber,
            barbers: Vec::new(),
            barber_id: None,
            month,
            days: Vec::new(),
            date: None,
            slots: None,
            time: None,
            customer_name: String::new(),
            phone: String::new(),
            consent: false,
            honeypot: String::new(),
            priority_open: false,
            priority_time: DEFAULT_PRIORITY_TIME.to_string(),
            priority_note: String::new(),
            confirmation: None,
            notice: None,
            command: None,
            command_seq: 0,
            pending: None,
        }
    }

    pub fn barbers_loaded(&mut self, barbers: Vec<Barber>) {
        self.barbers = barbers;
    }

    pub fn barber_name(&self) -> Option<&str> {
        let id = self.barber_id.as_deref()?;
        self.barbers
            .iter()
            .find(|b| b.id == id)
            .map(|b| b.name.as_str())
    }

    pub fn select_barber(&mut self, id: &str) -> Option<Command> {
        self.barber_id = Some(id.to_string());
        self.clear_schedule();
        Some(Command::LoadMonth {
            barber_id: id.to_string(),
            month: self.month.clone(),
        })
    }

    pub fn shift_month(&mut self, delta: i32) -> Option<Command> {
        self.month = date_utils::shift_month(&self.month, delta);
        self.clear_schedule();
        self.barber_id.as_ref().map(|id| Command::LoadMonth {
            barber_id: id.clone(),
            month: self.month.clone(),
        })
    }

    /// Apply a month overview response; late responses for a barber or month
    /// the user has already left are dropped.
    pub fn month_loaded(&mut self, barber_id: &str, month: &str, days: Vec<DayAvailability>) {
        if self.barber_id.as_deref() != Some(barber_id) || self.month != month {
            return;
        }
        self.days = days;
    }

    /// Pick a day from the calendar. Fully booked days are not selectable.
    pub fn pick_date(&mut self, date: &str) -> Option<Command> {
        if self.day_is_full(date) {
            return None;
        }
        self.set_date(date)
    }

    /// Desired-date entry in the priority panel; deliberately skips the
    /// fully-booked guard since that is the point of the request.
    pub fn pick_desired_date(&mut self, date: &str) -> Option<Command> {
        self.set_date(date)
    }

    fn set_date(&mut self, date: &str) -> Option<Command> {
        self.date = Some(date.to_string());
        self.time = None;
        self.slots = None;
        self.barber_id.as_ref().map(|id| Command::LoadSlots {
            barber_id: id.clone(),
            date: date.to_string(),
        })
    }

    fn day_is_full(&self, date: &str) -> bool {
        self.days.iter().any(|d| d.date == date && d.free == 0)
    }

    /// Apply a slot list response; dropped when barber or date moved on.
    pub fn slots_loaded(&mut self, barber_id: &str, date: &str, slots: Vec<String>) {
        if self.barber_id.as_deref() != Some(barber_id) || self.date.as_deref() != Some(date) {
            return;
        }
        self.slots = Some(slots);
    }

    pub fn pick_time(&mut self, time: &str) {
        self.time = Some(time.to_string());
    }

    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::Barber => self.barber_id.is_some(),
            WizardStep::Schedule => self.date.is_some() && self.time.is_some(),
            WizardStep::Contact => false,
        }
    }

    pub fn advance(&mut self) {
        if !self.can_advance() {
            return;
        }
        self.step = match self.step {
            WizardStep::Barber => WizardStep::Schedule,
            WizardStep::Schedule | WizardStep::Contact => WizardStep::Contact,
        };
    }

    pub fn back(&mut self) {
        self.step = match self.step {
            WizardStep::Barber | WizardStep::Schedule => WizardStep::Barber,
            WizardStep::Contact => WizardStep::Schedule,
        };
    }

    pub fn toggle_priority(&mut self) {
        self.priority_open = !self.priority_open;
    }

    pub fn set_customer_name(&mut self, value: String) {
        self.customer_name = value;
    }

    pub fn set_phone(&mut self, value: String) {
        self.phone = value;
    }

    pub fn set_consent(&mut self, value: bool) {
        self.consent = value;
    }

    pub fn set_honeypot(&mut self, value: String) {
        self.honeypot = value;
    }

    pub fn set_priority_time(&mut self, value: String) {
        self.priority_time = value;
    }

    pub fn set_priority_note(&mut self, value: String) {
        self.priority_note = value;
    }

    /// True when the loaded month has days but none of them any free slots.
    pub fn no_free_in_month(&self) -> bool {
        !self.days.is_empty() && self.days.iter().all(|d| d.free == 0)
    }

    /// True once the selected date's slot list arrived empty.
    pub fn selected_day_booked_out(&self) -> bool {
        self.date.is_some() && matches!(&self.slots, Some(slots) if slots.is_empty())
    }

    /// Whether the "no appointment left?" banner with the priority entry
    /// point is shown on the schedule step.
    pub fn priority_prompt(&self) -> bool {
        self.no_free_in_month() || self.selected_day_booked_out()
    }

    /// Validate and build the booking submission. A filled honeypot aborts
    /// silently; validation problems raise a notice and no command.
    pub fn submit(&mut self) -> Option<Command> {
        if !self.honeypot.is_empty() {
            return None;
        }
        if !self.contact_valid() {
            return None;
        }
        let (Some(date), Some(time)) = (self.date.clone(), self.time.clone()) else {
            self.notice = Some(Notice::DateRequired);
            return None;
        };
        let barber_id = self.barber_id.clone()?;
        self.pending = Some(PendingSubmission {
            barber_name: self.barber_name().unwrap_or_default().to_string(),
            date: date.clone(),
            time: time.clone(),
        });
        self.notice = None;
        Some(Command::SubmitBooking(BookingRequest {
            barber_id,
            start_ts_iso: format!("{date}T{time}"),
            customer_name: self.customer_name.trim().to_string(),
            phone_e164: self.phone.trim().to_string(),
        }))
    }

    /// Validate and build the priority request. Same honeypot/consent rules
    /// as `submit`, but the desired time is free text and a date must have
    /// been chosen in the panel.
    pub fn submit_priority(&mut self) -> Option<Command> {
        if !self.honeypot.is_empty() {
            return None;
        }
        let Some(date) = self.date.clone() else {
            self.notice = Some(Notice::DateRequired);
            return None;
        };
        if !self.contact_valid() {
            return None;
        }
        let barber_id = self.barber_id.clone()?;
        let time = self.priority_time.clone();
        self.pending = Some(PendingSubmission {
            barber_name: self.barber_name().unwrap_or_default().to_string(),
            date: date.clone(),
            time: time.clone(),
        });
        self.notice = None;
        let note = self.priority_note.trim();
        Some(Command::SubmitPriority(PriorityRequestBody {
            barber_id,
            desired_local_iso: format!("{date}T{time}"),
            customer_name: self.customer_name.trim().to_string(),
            phone_e164: self.phone.trim().to_string(),
            notes: (!note.is_empty()).then(|| note.to_string()),
        }))
    }

    fn contact_valid(&mut self) -> bool {
        if self.customer_name.trim().is_empty() || self.phone.trim().is_empty() {
            self.notice = Some(Notice::NameAndPhoneRequired);
            return false;
        }
        if !self.consent {
            self.notice = Some(Notice::ConsentRequired);
            return false;
        }
        true
    }

    /// The server accepted the submission: show the banner and reset the
    /// draft unconditionally. The banner survives the reset until dismissed.
    pub fn booking_confirmed(&mut self, booking_id: Option<String>) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        self.confirmation = Some(Confirmation {
            barber_name: pending.barber_name,
            date: pending.date,
            time: pending.time,
            booking_id,
        });
        self.reset_draft();
    }

    /// The submission failed: keep the form editable and say so.
    pub fn submit_failed(&mut self, message: String) {
        self.pending = None;
        self.notice = Some(Notice::RequestFailed(message));
    }

    /// A month or slot fetch failed. Same surface as submission failures.
    pub fn load_failed(&mut self, message: String) {
        self.notice = Some(Notice::RequestFailed(message));
    }

    pub fn dismiss_confirmation(&mut self) {
        self.confirmation = None;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn reset_draft(&mut self) {
        self.step = WizardStep::Barber;
        self.barber_id = None;
        self.clear_schedule();
        self.customer_name.clear();
        self.phone.clear();
        self.consent = false;
        self.honeypot.clear();
        self.priority_note.clear();
        self.priority_time = DEFAULT_PRIORITY_TIME.to_string();
    }

    fn clear_schedule(&mut self) {
        self.days.clear();
        self.date = None;
        self.slots = None;
        self.time = None;
        self.priority_open = false;
    }
}

/// Everything that can happen to the wizard, from the user or from a
/// completed request. Dispatched through a reducer so late responses are
/// applied to the state as it is then, not as it was when the request
/// started.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardAction {
    BarbersLoaded(Vec<Barber>),
    SelectBarber(String),
    ShiftMonth(i32),
    MonthLoaded {
        barber_id: String,
        month: String,
        days: Vec<DayAvailability>,
    },
    PickDate(String),
    PickDesiredDate(String),
    SlotsLoaded {
        barber_id: String,
        date: String,
        slots: Vec<String>,
    },
    PickTime(String),
    Advance,
    Back,
    TogglePriority,
    SetName(String),
    SetPhone(String),
    SetConsent(bool),
    SetHoneypot(String),
    SetPriorityTime(String),
    SetPriorityNote(String),
    Submit,
    SubmitPriority,
    BookingConfirmed(Option<String>),
    SubmitFailed(String),
    LoadFailed(String),
    DismissConfirmation,
    DismissNotice,
}

impl Reducible for WizardState {
    type Action = WizardAction;

    fn reduce(self: Rc<Self>, action: WizardAction) -> Rc<Self> {
        let mut next = (*self).clone();
        let command = match action {
            WizardAction::BarbersLoaded(barbers) => {
                next.barbers_loaded(barbers);
                None
            }
            WizardAction::SelectBarber(id) => next.select_barber(&id),
            WizardAction::ShiftMonth(delta) => next.shift_month(delta),
            WizardAction::MonthLoaded { barber_id, month, days } => {
                next.month_loaded(&barber_id, &month, days);
                None
            }
            WizardAction::PickDate(date) => next.pick_date(&date),
            WizardAction::PickDesiredDate(date) => next.pick_desired_date(&date),
            WizardAction::SlotsLoaded { barber_id, date, slots } => {
                next.slots_loaded(&barber_id, &date, slots);
                None
            }
            WizardAction::PickTime(time) => {
                next.pick_time(&time);
                None
            }
            WizardAction::Advance => {
                next.advance();
                None
            }
            WizardAction::Back => {
                next.back();
                None
            }
            WizardAction::TogglePriority => {
                next.toggle_priority();
                None
            }
            WizardAction::SetName(value) => {
                next.set_customer_name(value);
                None
            }
            WizardAction::SetPhone(value) => {
                next.set_phone(value);
                None
            }
            WizardAction::SetConsent(value) => {
                next.set_consent(value);
                None
            }
            WizardAction::SetHoneypot(value) => {
                next.set_honeypot(value);
                None
            }
            WizardAction::SetPriorityTime(value) => {
                next.set_priority_time(value);
                None
            }
            WizardAction::SetPriorityNote(value) => {
                next.set_priority_note(value);
                None
            }
            WizardAction::Submit => next.submit(),
            WizardAction::SubmitPriority => next.submit_priority(),
            WizardAction::BookingConfirmed(booking_id) => {
                next.booking_confirmed(booking_id);
                None
            }
            WizardAction::SubmitFailed(message) => {
                next.submit_failed(message);
                None
            }
            WizardAction::LoadFailed(message) => {
                next.load_failed(message);
                None
            }
            WizardAction::DismissConfirmation => {
                next.dismiss_confirmation();
                None
            }
            WizardAction::DismissNotice => {
                next.dismiss_notice();
                None
            }
        };
        if let Some(command) = command {
            next.command_seq += 1;
            next.command = Some(command);
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn anna() -> Barber {
        Barber {
            id: "b1".into(),
            name: "Anna".into(),
            photo_url: None,
        }
    }

    fn state_with_barber() -> WizardState {
        let mut state = WizardState::new("2025-03".into());
        state.barbers_loaded(vec![anna()]);
        state.select_barber("b1");
        state
    }

    fn march_days(free_on_10th: u32) -> Vec<DayAvailability> {
        (1..=31)
            .map(|day| DayAvailability {
                date: format!("2025-03-{day:02}"),
                free: if day == 10 { free_on_10th } else { 0 },
            })
            .collect()
    }

    #[wasm_bindgen_test]
    fn step_one_requires_a_barber() {
        let mut state = WizardState::new("2025-03".into());
        assert!(!state.can_advance());
        state.advance();
        assert_eq!(state.step, WizardStep::Barber);

        state.barbers_loaded(vec![anna()]);
        state.select_barber("b1");
        assert!(state.can_advance());
        state.advance();
        assert_eq!(state.step, WizardStep::Schedule);
    }

    #[wasm_bindgen_test]
    fn selecting_a_barber_requests_the_month_and_resets_the_schedule() {
        let mut state = WizardState::new("2025-03".into());
        state.barbers_loaded(vec![anna()]);
        let command = state.select_barber("b1");
        assert_eq!(
            command,
            Some(Command::LoadMonth {
                barber_id: "b1".into(),
                month: "2025-03".into()
            })
        );
        assert_eq!(state.date, None);
        assert_eq!(state.slots, None);
        assert!(!state.priority_open);
    }

    #[wasm_bindgen_test]
    fn month_navigation_refetches_and_clears_selection() {
        let mut state = state_with_barber();
        state.month_loaded("b1", "2025-03", march_days(2));
        state.pick_date("2025-03-10");
        state.priority_open = true;

        let command = state.shift_month(1);
        assert_eq!(
            command,
            Some(Command::LoadMonth {
                barber_id: "b1".into(),
                month: "2025-04".into()
            })
        );
        assert!(state.days.is_empty());
        assert_eq!(state.date, None);
        assert_eq!(state.time, None);
        assert!(!state.priority_open);
    }

    #[wasm_bindgen_test]
    fn month_shift_without_barber_changes_month_only() {
        let mut state = WizardState::new("2025-01".into());
        assert_eq!(state.shift_month(-1), None);
        assert_eq!(state.month, "2024-12");
    }

    #[wasm_bindgen_test]
    fn stale_month_response_is_dropped() {
        let mut state = state_with_barber();
        // The user moves to April before March arrives.
        state.shift_month(1);
        state.month_loaded("b1", "2025-03", march_days(2));
        assert!(state.days.is_empty());

        state.month_loaded("b1", "2025-04", march_days(2));
        assert_eq!(state.days.len(), 31);
    }

    #[wasm_bindgen_test]
    fn fully_booked_days_are_not_selectable() {
        let mut state = state_with_barber();
        state.month_loaded("b1", "2025-03", march_days(2));
        assert_eq!(state.pick_date("2025-03-11"), None);
        assert_eq!(state.date, None);

        let command = state.pick_date("2025-03-10");
        assert_eq!(
            command,
            Some(Command::LoadSlots {
                barber_id: "b1".into(),
                date: "2025-03-10".into()
            })
        );
    }

    #[wasm_bindgen_test]
    fn stale_slot_response_is_dropped() {
        let mut state = state_with_barber();
        state.month_loaded("b1", "2025-03", march_days(2));
        state.pick_date("2025-03-10");
        state.slots_loaded("b1", "2025-03-09", vec!["09:00".into()]);
        assert_eq!(state.slots, None);

        state.slots_loaded("b1", "2025-03-10", vec!["09:00".into()]);
        assert_eq!(state.slots.as_deref(), Some(&["09:00".to_string()][..]));
    }

    #[wasm_bindgen_test]
    fn picking_a_new_date_resets_the_chosen_time() {
        let mut state = state_with_barber();
        state.month_loaded("b1", "2025-03", march_days(2));
        state.pick_date("2025-03-10");
        state.slots_loaded("b1", "2025-03-10", vec!["09:00".into(), "09:30".into()]);
        state.pick_time("09:30");
        assert_eq!(state.time.as_deref(), Some("09:30"));

        state.pick_desired_date("2025-03-11");
        assert_eq!(state.time, None);
        assert_eq!(state.slots, None);
    }

    #[wasm_bindgen_test]
    fn banner_needs_an_empty_slot_list_not_just_a_thin_month() {
        let mut state = state_with_barber();
        // One day still has slots: the month view alone shows no banner.
        state.month_loaded("b1", "2025-03", march_days(2));
        assert!(!state.no_free_in_month());
        assert!(!state.priority_prompt());

        // Selecting a day whose slot list comes back empty shows it.
        state.pick_date("2025-03-10");
        assert!(!state.priority_prompt());
        state.slots_loaded("b1", "2025-03-10", Vec::new());
        assert!(state.priority_prompt());
    }

    #[wasm_bindgen_test]
    fn dead_month_shows_the_banner_on_its_own() {
        let mut state = state_with_barber();
        state.month_loaded("b1", "2025-03", march_days(0));
        assert!(state.no_free_in_month());
        assert!(state.priority_prompt());

        // An unloaded month shows nothing.
        state.shift_month(1);
        assert!(!state.priority_prompt());
    }

    fn ready_to_submit() -> WizardState {
        let mut state = state_with_barber();
        state.month_loaded("b1", "2025-03", march_days(2));
        state.pick_date("2025-03-10");
        state.slots_loaded("b1", "2025-03-10", vec!["09:30".into()]);
        state.pick_time("09:30");
        state.advance();
        state.advance();
        state
    }

    #[wasm_bindgen_test]
    fn missing_contact_details_block_the_submission() {
        let mut state = ready_to_submit();
        assert_eq!(state.submit(), None);
        assert_eq!(state.notice, Some(Notice::NameAndPhoneRequired));

        state.set_customer_name("Eva Moser".into());
        state.set_phone("+436641234567".into());
        assert_eq!(state.submit(), None);
        assert_eq!(state.notice, Some(Notice::ConsentRequired));
    }

    #[wasm_bindgen_test]
    fn filled_honeypot_suppresses_submission_silently() {
        let mut state = ready_to_submit();
        state.set_customer_name("Eva Moser".into());
        state.set_phone("+436641234567".into());
        state.set_consent(true);
        state.set_honeypot("http://spam".into());

        assert_eq!(state.submit(), None);
        assert_eq!(state.notice, None);
        assert_eq!(state.submit_priority(), None);
        assert_eq!(state.notice, None);
    }

    #[wasm_bindgen_test]
    fn successful_booking_confirms_and_resets_the_draft() {
        let mut state = state_with_barber();
        state.month_loaded("b1", "2025-03", march_days(2));
        state.pick_desired_date("2025-04-01");
        state.slots_loaded("b1", "2025-04-01", vec!["09:30".into()]);
        state.pick_time("09:30");
        state.set_customer_name("Eva Moser".into());
        state.set_phone("+436641234567".into());
        state.set_consent(true);

        let command = state.submit().unwrap();
        match &command {
            Command::SubmitBooking(request) => {
                assert_eq!(request.start_ts_iso, "2025-04-01T09:30");
                assert_eq!(request.customer_name, "Eva Moser");
            }
            other => panic!("expected a booking submission, got {other:?}"),
        }

        state.booking_confirmed(Some("abc123".into()));
        let confirmation = state.confirmation.clone().unwrap();
        assert_eq!(confirmation.barber_name, "Anna");
        assert_eq!(confirmation.when_label(), "2025-04-01 09:30");
        assert_eq!(confirmation.booking_id.as_deref(), Some("abc123"));

        assert_eq!(state.step, WizardStep::Barber);
        assert_eq!(state.barber_id, None);
        assert!(state.customer_name.is_empty());
        assert!(state.phone.is_empty());
        assert!(!state.consent);

        state.dismiss_confirmation();
        assert_eq!(state.confirmation, None);
    }

    #[wasm_bindgen_test]
    fn priority_request_confirms_without_a_booking_id() {
        let mut state = state_with_barber();
        state.month_loaded("b1", "2025-03", march_days(0));
        state.toggle_priority();
        assert_eq!(state.submit_priority(), None);
        assert_eq!(state.notice, Some(Notice::DateRequired));

        state.pick_desired_date("2025-03-11");
        state.set_customer_name("Eva Moser".into());
        state.set_phone("+436641234567".into());
        state.set_consent(true);
        state.set_priority_time("17:30".into());
        state.set_priority_note("  ".into());

        let command = state.submit_priority().unwrap();
        match &command {
            Command::SubmitPriority(request) => {
                assert_eq!(request.desired_local_iso, "2025-03-11T17:30");
                assert_eq!(request.notes, None);
            }
            other => panic!("expected a priority submission, got {other:?}"),
        }

        state.booking_confirmed(None);
        let confirmation = state.confirmation.clone().unwrap();
        assert_eq!(confirmation.booking_id, None);
        assert_eq!(confirmation.when_label(), "2025-03-11 17:30");
        assert_eq!(state.priority_time, "12:00");
    }

    #[wasm_bindgen_test]
    fn failed_submission_keeps_the_form_editable() {
        let mut state = ready_to_submit();
        state.set_customer_name("Eva Moser".into());
        state.set_phone("+436641234567".into());
        state.set_consent(true);
        assert!(state.submit().is_some());

        state.submit_failed("Slot already taken".into());
        assert_eq!(
            state.notice,
            Some(Notice::RequestFailed("Slot already taken".into()))
        );
        assert_eq!(state.confirmation, None);
        assert_eq!(state.customer_name, "Eva Moser");
        assert_eq!(state.step, WizardStep::Contact);

        // A confirmation without a pending submission is ignored.
        state.booking_confirmed(Some("zzz".into()));
        assert_eq!(state.confirmation, None);
    }

    #[wasm_bindgen_test]
    fn reducer_records_commands_with_a_fresh_sequence_number() {
        let mut initial = WizardState::new("2025-03".into());
        initial.barbers_loaded(vec![anna()]);

        let state = Rc::new(initial).reduce(WizardAction::SelectBarber("b1".into()));
        assert_eq!(state.command_seq, 1);
        assert_eq!(
            state.command,
            Some(Command::LoadMonth {
                barber_id: "b1".into(),
                month: "2025-03".into()
            })
        );

        // Applying a response issues nothing new; the executor must not
        // re-run the recorded command.
        let state = state.reduce(WizardAction::MonthLoaded {
            barber_id: "b1".into(),
            month: "2025-03".into(),
            days: march_days(2),
        });
        assert_eq!(state.command_seq, 1);
        assert_eq!(state.days.len(), 31);

        // A rejected transition leaves the slot untouched as well.
        let state = state.reduce(WizardAction::PickDate("2025-03-11".into()));
        assert_eq!(state.command_seq, 1);
        assert_eq!(state.date, None);
    }
}
