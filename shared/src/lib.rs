use serde::{Deserialize, Serialize};

/// A bookable barber as returned by `GET /barbers`.
///
/// The list is fetched once at startup and treated as immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Barber {
    pub id: String,
    pub name: String,
    /// Absolute URL of a profile photo, if the shop uploaded one.
    pub photo_url: Option<String>,
}

/// Per-day free-slot summary for one barber and one month
/// (`GET /month_overview`).
///
/// The backend emits one entry per calendar day of the month, days 1..=N in
/// ascending order. The calendar grid relies on that ordering and places
/// entries sequentially.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthOverview {
    pub days: Vec<DayAvailability>,
}

/// One day inside a [`MonthOverview`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAvailability {
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Number of free slot start times left on this day. `0` means fully
    /// booked (the day renders disabled).
    pub free: u32,
}

/// Free slot start times for one barber and one date (`GET /availability`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySlots {
    /// `HH:MM` labels in shop-local time, ascending.
    pub slots: Vec<String>,
}

/// Payload for `POST /book`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub barber_id: String,
    /// Requested start, `YYYY-MM-DDTHH:MM` in shop-local time.
    pub start_ts_iso: String,
    pub customer_name: String,
    pub phone_e164: String,
}

/// Successful `POST /book` response. The backend also sends an `ok` flag,
/// which serde ignores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingResponse {
    pub booking_id: String,
}

/// Payload for `POST /priority_request` — a non-binding interest submission
/// for an overbooked day, not a confirmed booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityRequestBody {
    pub barber_id: String,
    /// Desired start, `YYYY-MM-DDTHH:MM` in shop-local time.
    pub desired_local_iso: String,
    pub customer_name: String,
    pub phone_e164: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One booking row in the admin list (`GET /admin/bookings`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminBookingItem {
    pub id: String,
    pub customer_name: String,
    pub phone_e164: String,
    pub email: Option<String>,
    /// Free-form status string; `"cancelled"` gets distinct styling.
    pub status: String,
    /// Start/end as shop-local display labels.
    pub start_local: String,
    pub end_local: String,
    pub barber_name: String,
    pub service_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminBookingsResponse {
    pub items: Vec<AdminBookingItem>,
}

/// Payload for `POST /admin/time_off` — blocks a barber out for an interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeOffRequest {
    pub barber_id: String,
    pub start_local_iso: String,
    pub end_local_iso: String,
    pub reason: String,
}

/// Status value the admin panel writes into a row after a confirmed cancel.
pub const STATUS_CANCELLED: &str = "cancelled";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn barber_photo_url_is_optional() {
        let barber: Barber = serde_json::from_str(r#"{"id":"b1","name":"Anna"}"#).unwrap();
        assert_eq!(barber.id, "b1");
        assert_eq!(barber.photo_url, None);

        let barber: Barber =
            serde_json::from_str(r#"{"id":"b2","name":"Mo","photo_url":"https://x/p.jpg"}"#)
                .unwrap();
        assert_eq!(barber.photo_url.as_deref(), Some("https://x/p.jpg"));
    }

    #[test]
    fn month_overview_matches_wire_names() {
        let overview: MonthOverview = serde_json::from_str(
            r#"{"month":"2025-03","days":[{"date":"2025-03-01","free":0},{"date":"2025-03-02","free":4}]}"#,
        )
        .unwrap();
        assert_eq!(overview.days.len(), 2);
        assert_eq!(overview.days[1].date, "2025-03-02");
        assert_eq!(overview.days[1].free, 4);
    }

    #[test]
    fn booking_response_tolerates_extra_fields() {
        let response: BookingResponse =
            serde_json::from_str(r#"{"ok":true,"booking_id":"abc123"}"#).unwrap();
        assert_eq!(response.booking_id, "abc123");
    }

    #[test]
    fn priority_request_omits_empty_notes() {
        let body = PriorityRequestBody {
            barber_id: "b1".into(),
            desired_local_iso: "2025-03-10T12:00".into(),
            customer_name: "Eva Moser".into(),
            phone_e164: "+436641234567".into(),
            notes: None,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(!json.contains("notes"));

        let body = PriorityRequestBody {
            notes: Some("after 17:00 if possible".into()),
            ..body
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains(r#""notes":"after 17:00 if possible""#));
    }

    #[test]
    fn admin_item_email_is_optional() {
        let item: AdminBookingItem = serde_json::from_str(
            r#"{"id":"x1","customer_name":"Eva Moser","phone_e164":"+4366412345",
                "status":"confirmed","start_local":"2025-03-10 14:00",
                "end_local":"2025-03-10 14:30","barber_name":"Anna",
                "service_name":"Haircut"}"#,
        )
        .unwrap();
        assert_eq!(item.email, None);
        assert_eq!(item.status, "confirmed");
    }
}
