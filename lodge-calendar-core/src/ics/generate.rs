//! ICS file generation.

use chrono::{DateTime, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use icalendar::{Calendar, Component};
use tracing::debug;

use crate::event::{CalendarEvent, wall_clock};

pub const PRODID: &str = "-//Masonic Calendar//EN";
pub const UID_DOMAIN: &str = "masoniccalendar.com";

/// Start time used for events without a scheduled time
const DEFAULT_START: NaiveTime = wall_clock(9, 0);

const ICS_DATETIME: &str = "%Y%m%dT%H%M%SZ";

/// Generate .ics content for `events`, stamped with the current time.
pub fn to_ics(events: &[CalendarEvent]) -> String {
    to_ics_at(events, Utc::now())
}

/// Generate .ics content for `events` with an explicit DTSTAMP.
///
/// Unlabelled events are skipped. Wall-clock times are written as UTC, and
/// every event lasts two hours.
pub fn to_ics_at(events: &[CalendarEvent], dtstamp: DateTime<Utc>) -> String {
    let mut cal = Calendar::new();
    let stamp = dtstamp.format(ICS_DATETIME).to_string();

    let mut exported = 0usize;
    for event in events.iter().filter(|e| !e.label.is_empty()) {
        cal.push(ics_event(event, &stamp));
        exported += 1;
    }

    debug!(exported, skipped = events.len() - exported, "generated ics");

    let cal = cal.done();
    normalize_header(&cal.to_string())
}

/// File name offered for download: `<prefix>-<year>.ics`
pub fn ics_filename(prefix: &str, year: i32) -> String {
    format!("{}-{}.ics", prefix, year)
}

fn ics_event(event: &CalendarEvent, stamp: &str) -> icalendar::Event {
    let start = event.date.and_time(event.time.unwrap_or(DEFAULT_START));
    // Past chrono's last representable day the end collapses onto the start
    let end = start
        .checked_add_signed(TimeDelta::hours(2))
        .unwrap_or(start);

    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&format!("{}@{}", event.id, UID_DOMAIN));
    ics_event.add_property("DTSTAMP", stamp);
    ics_event.add_property("DTSTART", format_utc(start));
    ics_event.add_property("DTEND", format_utc(end));
    ics_event.summary(&event.label);

    if let Some(ref desc) = event.description {
        ics_event.description(desc);
    }

    ics_event.done()
}

fn format_utc(dt: NaiveDateTime) -> String {
    dt.format(ICS_DATETIME).to_string()
}

/// Rewrite the calendar header the icalendar crate emits
/// - Replace its PRODID with ours
/// - Keep CALSCALE:GREGORIAN and add METHOD:PUBLISH right after PRODID
fn normalize_header(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len() + 64);

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str(&format!("PRODID:{}\r\n", PRODID));
            result.push_str("CALSCALE:GREGORIAN\r\n");
            result.push_str("METHOD:PUBLISH\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" || line.starts_with("METHOD:") {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
