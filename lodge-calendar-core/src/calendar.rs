//! Whole-year calendar generation.

use tracing::debug;

use crate::dates::monday_slots;
use crate::event::CalendarEvent;
use crate::holidays::bank_holidays;
use crate::manual::manual_events;
use crate::merge::merge_events;
use crate::recess::assign_recess_and_degrees;
use crate::schedule::{MEETING_RULES, meetings_and_officers};

/// Generate the lodge calendar for `year`, sorted by date.
///
/// Pure function of `year`: calling it twice gives equal results. Every
/// Monday of the year gets exactly one entry; meetings add entries on their
/// own weekdays.
pub fn generate(year: i32) -> Vec<CalendarEvent> {
    let baseline = monday_slots(year);

    let mut special = bank_holidays(year);
    special.extend(meetings_and_officers(year, &MEETING_RULES));
    special.extend(manual_events(year));

    let merged = merge_events(baseline, special);
    let events = assign_recess_and_degrees(merged);

    debug!(year, count = events.len(), "generated calendar");
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::mondays;
    use crate::event::{EventType, Venue};
    use crate::holidays::easter_monday;
    use crate::recess::{DEGREES, RECESS_LABEL, is_recess};
    use chrono::{Datelike, NaiveDate, Weekday};
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn on(events: &[CalendarEvent], day: NaiveDate) -> &CalendarEvent {
        events.iter().find(|e| e.date == day).unwrap()
    }

    #[test]
    fn test_generate_is_idempotent() {
        assert_eq!(generate(2026), generate(2026));
    }

    #[test]
    fn test_easter_monday_2026() {
        let events = generate(2026);
        assert_eq!(easter_monday(2026), Some(date(2026, 4, 6)));
        let day = on(&events, date(2026, 4, 6));
        assert_eq!(day.event_type, EventType::BankHoliday);
        assert!(day.label.starts_with("Easter Monday"));
    }

    #[test]
    fn test_new_year_sub_2028() {
        let events = generate(2028);
        let day = on(&events, date(2028, 1, 3));
        assert_eq!(day.event_type, EventType::BankHoliday);
        // The AGM also lands on the first Monday
        assert_eq!(day.label, "New Year's Day (Sub) & LoI AGM 8pm");
        assert!(day.label.starts_with("New Year's Day (Sub)"));
    }

    #[test]
    fn test_recess_2026() {
        let events = generate(2026);
        let day = on(&events, date(2026, 8, 10));
        assert_eq!(day.label, RECESS_LABEL);
        assert_eq!(day.event_type, EventType::Recess);
        assert_eq!(day.time, None);

        // Bank holiday on 31 Aug is swallowed by the recess
        assert_eq!(on(&events, date(2026, 8, 31)).label, RECESS_LABEL);
    }

    #[test]
    fn test_first_monday_2026_is_agm() {
        let events = generate(2026);
        let day = on(&events, date(2026, 1, 5));
        assert_eq!(day.label, "LoI AGM 8pm");
        assert_eq!(day.time_label().as_deref(), Some("20:00"));
        assert_eq!(day.id, CalendarEvent::monday(date(2026, 1, 5)).id);
    }

    #[test]
    fn test_officers_night_on_bank_holiday_2026() {
        // Aldenham meets Sat 9 May 2026; its officers night is Early May Monday
        let events = generate(2026);
        let day = on(&events, date(2026, 5, 4));
        assert_eq!(day.label, "Early May Bank Holiday & Officers Night: Aldenham");
        assert_eq!(day.event_type, EventType::BankHoliday);
        assert_eq!(day.time_label().as_deref(), Some("19:30"));
    }

    #[test]
    fn test_degree_rotation_2026() {
        let events = generate(2026);
        let degrees: Vec<_> = events
            .iter()
            .filter(|e| DEGREES.contains(&e.label.as_str()))
            .map(|e| e.label.as_str())
            .collect();

        assert!(!degrees.is_empty());
        for (i, label) in degrees.iter().enumerate() {
            assert_eq!(*label, DEGREES[i % 3], "degree #{}", i);
        }

        // First unclaimed Monday of 2026 is 12 January
        assert_eq!(on(&events, date(2026, 1, 12)).label, "1st Degree");
    }

    #[test]
    fn test_aldenham_meeting_count() {
        for year in [2024, 2025, 2026, 2027, 2028] {
            let expected = MEETING_RULES
                .iter()
                .filter(|r| r.venue == Venue::Aldenham && r.date_in(year).is_some())
                .count();
            let actual = generate(year)
                .iter()
                .filter(|e| e.is_meeting && e.event_type == EventType::MeetingAldenham)
                .count();
            assert_eq!(actual, expected, "year {}", year);
            assert_eq!(actual, 5);
        }
    }

    proptest! {
        #[test]
        fn prop_one_event_per_monday(year in 1900i32..2200) {
            let events = generate(year);
            let expected = mondays(year);

            let monday_events: Vec<_> = events
                .iter()
                .filter(|e| e.date.weekday() == Weekday::Mon)
                .map(|e| e.date)
                .collect();
            prop_assert_eq!(monday_events, expected);

            let mut dates: Vec<_> = events.iter().map(|e| e.date).collect();
            dates.dedup();
            prop_assert_eq!(dates.len(), events.len());
            prop_assert!(events.windows(2).all(|w| w[0].date < w[1].date));
        }

        #[test]
        fn prop_weekdays_match_category(year in 1900i32..2200) {
            for event in generate(year) {
                prop_assert_eq!(event.date.year(), year);
                if event.event_type.is_lodge_meeting() {
                    prop_assert!(event.is_meeting);
                    prop_assert!(matches!(
                        event.date.weekday(),
                        Weekday::Sat | Weekday::Thu | Weekday::Wed
                    ));
                } else {
                    prop_assert!(!event.is_meeting);
                    prop_assert_eq!(event.date.weekday(), Weekday::Mon);
                    prop_assert!(!event.label.is_empty());
                }
                if is_recess(event.date) {
                    prop_assert_eq!(event.event_type, EventType::Recess);
                }
            }
        }
    }
}
