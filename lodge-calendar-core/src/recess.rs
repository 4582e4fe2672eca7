//! Summer recess and the Lodge of Instruction degree rotation.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::event::{CalendarEvent, EventType, wall_clock};

pub const DEGREES: [&str; 3] = ["1st Degree", "2nd Degree", "3rd Degree"];

pub const RECESS_LABEL: &str = "Centre Closed";
const RECESS_DESCRIPTION: &str = "The Masonic Centre is closed for the summer recess.";

/// Whether `date` is a Monday inside the August closure (3rd to 31st).
pub fn is_recess(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Mon && date.month() == 8 && (3..=31).contains(&date.day())
}

/// Mark recess Mondays closed and give every other unclaimed Monday the
/// next degree in the rotation.
///
/// `events` must already be sorted by date. Recess overrides whatever the
/// merge put on those Mondays, holidays and meetings included, and does not
/// advance the rotation.
pub fn assign_recess_and_degrees(events: Vec<CalendarEvent>) -> Vec<CalendarEvent> {
    let mut rotation = DEGREES.iter().cycle();

    events
        .into_iter()
        .map(|event| {
            if is_recess(event.date) {
                return CalendarEvent {
                    label: RECESS_LABEL.to_string(),
                    event_type: EventType::Recess,
                    is_meeting: false,
                    time: None,
                    description: Some(RECESS_DESCRIPTION.to_string()),
                    ..event
                };
            }

            if event.date.weekday() == Weekday::Mon && event.is_unassigned() {
                if let Some(degree) = rotation.next() {
                    return CalendarEvent {
                        label: degree.to_string(),
                        time: Some(wall_clock(19, 30)),
                        description: Some(format!("Lodge of Instruction - Practice for {}", degree)),
                        ..event
                    };
                }
            }

            event
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::monday_slots;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_recess_window() {
        assert!(is_recess(date(2026, 8, 3)));
        assert!(is_recess(date(2026, 8, 31)));
        // 2020-08-03 is a Monday, 2020-08-02 is not
        assert!(is_recess(date(2020, 8, 3)));
        // Monday 1 Aug 2022 falls before the window
        assert!(!is_recess(date(2022, 8, 1)));
        // Not a Monday
        assert!(!is_recess(date(2026, 8, 4)));
    }

    #[test]
    fn test_degrees_rotate_and_skip_recess() {
        let events = assign_recess_and_degrees(monday_slots(2026));

        let july: Vec<_> = events
            .iter()
            .filter(|e| e.date.month() == 7)
            .map(|e| e.label.as_str())
            .collect();
        let september_first = events
            .iter()
            .find(|e| e.date.month() == 9)
            .map(|e| e.label.as_str());

        assert!(events.iter().filter(|e| e.date.month() == 8).all(|e| e.label == RECESS_LABEL));

        // Rotation resumes after August where July left off
        let last_july = july.last().copied().unwrap();
        let idx = DEGREES.iter().position(|d| *d == last_july).unwrap();
        assert_eq!(september_first, Some(DEGREES[(idx + 1) % 3]));
    }

    #[test]
    fn test_recess_overrides_everything() {
        let mut holiday = CalendarEvent::monday(date(2026, 8, 31));
        holiday.label = "August Bank Holiday".to_string();
        holiday.event_type = EventType::BankHoliday;
        holiday.is_meeting = true;
        holiday.time = Some(wall_clock(9, 0));

        let events = assign_recess_and_degrees(vec![holiday.clone()]);
        let day = &events[0];
        assert_eq!(day.label, RECESS_LABEL);
        assert_eq!(day.event_type, EventType::Recess);
        assert_eq!(day.time, None);
        assert!(!day.is_meeting);
        assert_eq!(day.id, holiday.id);
    }

    #[test]
    fn test_labelled_mondays_untouched() {
        let mut agm = CalendarEvent::monday(date(2026, 1, 5));
        agm.label = "LoI AGM 8pm".to_string();
        let free = CalendarEvent::monday(date(2026, 1, 12));

        let events = assign_recess_and_degrees(vec![agm.clone(), free]);
        assert_eq!(events[0], agm);
        assert_eq!(events[1].label, "1st Degree");
        assert_eq!(events[1].time_label().as_deref(), Some("19:30"));
        assert_eq!(
            events[1].description.as_deref(),
            Some("Lodge of Instruction - Practice for 1st Degree")
        );
    }
}
