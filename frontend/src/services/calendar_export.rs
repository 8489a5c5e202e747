use chrono::{DateTime, Duration, Local, NaiveDateTime, TimeZone, Utc};
use uuid::Uuid;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::services::logging::Logger;

/// Fixed appointment length; the backend books the same duration.
pub const EVENT_MINUTES: i64 = 30;

const SALON_NAME: &str = "Fairmont Barbers";
const EVENT_DETAILS: &str = "Booked online.";

/// Interpret `YYYY-MM-DD` + `HH:MM` as wall-clock time in `tz` and return
/// the UTC event window (fixed 30-minute duration).
///
/// Generic over the zone so tests can pin a `FixedOffset` instead of the
/// browser's local zone.
pub fn event_window<Tz: TimeZone>(
    tz: &Tz,
    date: &str,
    time: &str,
) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let naive = NaiveDateTime::parse_from_str(&format!("{date}T{time}"), "%Y-%m-%dT%H:%M").ok()?;
    let start = tz.from_local_datetime(&naive).earliest()?;
    let start = start.with_timezone(&Utc);
    let end = start + Duration::minutes(EVENT_MINUTES);
    Some((start, end))
}

/// `YYYYMMDDTHHMMSSZ`, the timestamp form used by both export targets.
pub fn format_utc_stamp(stamp: &DateTime<Utc>) -> String {
    stamp.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Minimal VCALENDAR/VEVENT document. Deterministic given its inputs; the
/// caller supplies the UID and the DTSTAMP instant.
pub fn ics_document(
    uid: &str,
    stamped_at: &DateTime<Utc>,
    start: &DateTime<Utc>,
    end: &DateTime<Utc>,
    barber_name: &str,
) -> String {
    let lines = [
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:-//{SALON_NAME}//Booking//EN"),
        "BEGIN:VEVENT".to_string(),
        format!("UID:{uid}"),
        format!("DTSTAMP:{}", format_utc_stamp(stamped_at)),
        format!("DTSTART:{}", format_utc_stamp(start)),
        format!("DTEND:{}", format_utc_stamp(end)),
        format!("SUMMARY:Haircut with {barber_name}"),
        format!("DESCRIPTION:{EVENT_DETAILS}"),
        format!("LOCATION:{SALON_NAME}"),
        "END:VEVENT".to_string(),
        "END:VCALENDAR".to_string(),
    ];
    lines.join("\r\n")
}

/// Download name for the generated event file.
pub fn ics_filename(date: &str, time: &str) -> String {
    format!("termin-{date}-{time}.ics")
}

fn encode(component: &str) -> String {
    String::from(js_sys::encode_uri_component(component))
}

/// Google Calendar deep link for the same event window.
pub fn google_calendar_url(barber_name: &str, start: &DateTime<Utc>, end: &DateTime<Utc>) -> String {
    format!(
        "https://calendar.google.com/calendar/render?action=TEMPLATE&text={}&dates={}/{}&location={}&details={}",
        encode(&format!("Haircut with {barber_name}")),
        format_utc_stamp(start),
        format_utc_stamp(end),
        encode(SALON_NAME),
        encode(EVENT_DETAILS),
    )
}

/// Deep link for a confirmed appointment, or `None` if the stored
/// date/time labels do not parse.
pub fn google_calendar_link(barber_name: &str, date: &str, time: &str) -> Option<String> {
    let (start, end) = event_window(&Local, date, time)?;
    Some(google_calendar_url(barber_name, &start, &end))
}

/// Build the event for a confirmed appointment and hand it to the browser as
/// a file download.
pub fn export_ics(barber_name: &str, date: &str, time: &str) {
    let Some((start, end)) = event_window(&Local, date, time) else {
        Logger::warn("calendar-export", &format!("unparseable appointment {date} {time}"));
        return;
    };
    let uid = Uuid::new_v4().to_string();
    let document = ics_document(&uid, &Utc::now(), &start, &end, barber_name);
    if trigger_download(&document, &ics_filename(date, time)).is_none() {
        Logger::error("calendar-export", "browser refused the .ics download");
    }
}

fn trigger_download(content: &str, filename: &str) -> Option<()> {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(content));
    let options = BlobPropertyBag::new();
    options.set_type("text/calendar;charset=utf-8");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).ok()?;
    let url = Url::create_object_url_with_blob(&blob).ok()?;

    let document = web_sys::window()?.document()?;
    let anchor: HtmlAnchorElement = document.create_element("a").ok()?.dyn_into().ok()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    document.body()?.append_child(&anchor).ok()?;
    anchor.click();
    anchor.remove();
    let _ = Url::revoke_object_url(&url);
    Some(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn cet() -> FixedOffset {
        FixedOffset::east_opt(3600).unwrap()
    }

    #[wasm_bindgen_test]
    fn local_wall_clock_converts_to_utc() {
        // 14:00 in a UTC+1 zone is 13:00Z; the event runs 30 minutes.
        let (start, end) = event_window(&cet(), "2025-03-10", "14:00").unwrap();
        assert_eq!(format_utc_stamp(&start), "20250310T130000Z");
        assert_eq!(format_utc_stamp(&end), "20250310T133000Z");
    }

    #[wasm_bindgen_test]
    fn event_window_rejects_garbage() {
        assert!(event_window(&cet(), "2025-13-40", "14:00").is_none());
        assert!(event_window(&cet(), "2025-03-10", "later").is_none());
    }

    #[wasm_bindgen_test]
    fn ics_document_carries_event_fields() {
        let (start, end) = event_window(&cet(), "2025-03-10", "14:00").unwrap();
        let stamped = Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap();
        let doc = ics_document("uid-1", &stamped, &start, &end, "Anna");

        assert!(doc.starts_with("BEGIN:VCALENDAR"));
        assert!(doc.ends_with("END:VCALENDAR"));
        assert!(doc.contains("UID:uid-1"));
        assert!(doc.contains("DTSTAMP:20250301T080000Z"));
        assert!(doc.contains("DTSTART:20250310T130000Z"));
        assert!(doc.contains("DTEND:20250310T133000Z"));
        assert!(doc.contains("SUMMARY:Haircut with Anna"));
    }

    #[wasm_bindgen_test]
    fn ics_filename_embeds_date_and_time() {
        assert_eq!(ics_filename("2025-03-10", "14:00"), "termin-2025-03-10-14:00.ics");
    }

    #[wasm_bindgen_test]
    fn google_link_encodes_window_and_text() {
        let (start, end) = event_window(&cet(), "2025-03-10", "14:00").unwrap();
        let url = google_calendar_url("Anna", &start, &end);
        assert!(url.contains("action=TEMPLATE"));
        assert!(url.contains("dates=20250310T130000Z/20250310T133000Z"));
        assert!(url.contains("text=Haircut%20with%20Anna"));
    }
}
