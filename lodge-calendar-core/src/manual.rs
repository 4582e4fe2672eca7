//! Fixed one-off entries added every year.

use crate::dates::first_monday;
use crate::event::{CalendarEvent, EventType, event_id, wall_clock};

/// The Lodge of Instruction AGM, held on the year's first Monday.
pub fn manual_events(year: i32) -> Vec<CalendarEvent> {
    let Some(date) = first_monday(year) else {
        return Vec::new();
    };

    vec![CalendarEvent {
        id: event_id("manual-loi-agm", date),
        date,
        label: "LoI AGM 8pm".to_string(),
        event_type: EventType::Monday,
        is_meeting: false,
        time: Some(wall_clock(20, 0)),
        description: Some("Lodge of Instruction Annual General Meeting".to_string()),
    }]
}
