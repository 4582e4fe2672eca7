//! Recurring lodge meetings and the officers nights that precede them.

use chrono::{Month, NaiveDate, NaiveTime, Weekday};
use tracing::debug;

use crate::dates::{nth_weekday_of_month, preceding_monday};
use crate::event::{CalendarEvent, Venue, event_id, wall_clock};

const INSTALLATION_TIME: NaiveTime = wall_clock(16, 0);
const MEETING_TIME: NaiveTime = wall_clock(16, 30);
const OFFICERS_NIGHT_TIME: NaiveTime = wall_clock(19, 30);

/// A lodge meeting held on the `nth` `weekday` of `month` every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecurrenceRule {
    pub name: &'static str,
    pub venue: Venue,
    pub month: Month,
    pub weekday: Weekday,
    /// 1-based occurrence within the month
    pub nth: u8,
}

impl RecurrenceRule {
    const fn new(name: &'static str, venue: Venue, month: Month, weekday: Weekday, nth: u8) -> Self {
        RecurrenceRule {
            name,
            venue,
            month,
            weekday,
            nth,
        }
    }

    pub fn is_installation(&self) -> bool {
        self.name.contains("Installation")
    }

    /// The meeting date in `year`, or `None` when the occurrence doesn't exist.
    pub fn date_in(&self, year: i32) -> Option<NaiveDate> {
        nth_weekday_of_month(year, self.month, self.weekday, self.nth)
    }
}

/// The meeting table of the three lodges.
pub const MEETING_RULES: [RecurrenceRule; 14] = [
    // Aldenham (Saturdays)
    RecurrenceRule::new("Aldenham Meeting", Venue::Aldenham, Month::January, Weekday::Sat, 4),
    RecurrenceRule::new("Aldenham Meeting", Venue::Aldenham, Month::March, Weekday::Sat, 1),
    RecurrenceRule::new("Aldenham Meeting", Venue::Aldenham, Month::May, Weekday::Sat, 2),
    RecurrenceRule::new("Aldenham Meeting", Venue::Aldenham, Month::September, Weekday::Sat, 4),
    RecurrenceRule::new("Aldenham Meeting", Venue::Aldenham, Month::November, Weekday::Sat, 4),
    // Radlett (Saturdays)
    RecurrenceRule::new("Radlett Meeting", Venue::Radlett, Month::February, Weekday::Sat, 2),
    RecurrenceRule::new("Radlett Meeting", Venue::Radlett, Month::April, Weekday::Sat, 1),
    RecurrenceRule::new("Radlett Meeting", Venue::Radlett, Month::July, Weekday::Sat, 2),
    RecurrenceRule::new("Radlett Meeting", Venue::Radlett, Month::September, Weekday::Sat, 1),
    RecurrenceRule::new(
        "Radlett Meeting (Installation)",
        Venue::Radlett,
        Month::December,
        Weekday::Sat,
        2,
    ),
    // Elstree (Thursdays, Wednesday in December)
    RecurrenceRule::new("Elstree Meeting", Venue::Elstree, Month::March, Weekday::Thu, 3),
    RecurrenceRule::new("Elstree Meeting", Venue::Elstree, Month::June, Weekday::Thu, 3),
    RecurrenceRule::new(
        "Elstree Meeting (Installation)",
        Venue::Elstree,
        Month::October,
        Weekday::Thu,
        3,
    ),
    RecurrenceRule::new("Elstree Meeting", Venue::Elstree, Month::December, Weekday::Wed, 3),
];

/// Meetings and officers nights for `year` under `rules`, in rule order.
///
/// Each meeting is followed by its officers night on the Monday before it.
pub fn meetings_and_officers(year: i32, rules: &[RecurrenceRule]) -> Vec<CalendarEvent> {
    let mut events = Vec::with_capacity(rules.len() * 2);

    for rule in rules {
        let Some(meeting_date) = rule.date_in(year) else {
            debug!(
                year,
                rule = rule.name,
                month = ?rule.month,
                nth = rule.nth,
                "no such occurrence, skipping"
            );
            continue;
        };

        events.push(meeting(rule, meeting_date));

        if let Some(officers) = officers_night(rule.venue, meeting_date) {
            events.push(officers);
        }
    }

    events
}

fn meeting(rule: &RecurrenceRule, date: NaiveDate) -> CalendarEvent {
    let (time, description) = if rule.is_installation() {
        (INSTALLATION_TIME, "Annual Installation Meeting")
    } else {
        (MEETING_TIME, "Regular Lodge Meeting")
    };

    CalendarEvent {
        id: event_id("mtg", date),
        date,
        label: rule.name.to_string(),
        event_type: rule.venue.meeting_type(),
        is_meeting: true,
        time: Some(time),
        description: Some(description.to_string()),
    }
}

/// Officers night on the Monday immediately preceding the meeting.
fn officers_night(venue: Venue, meeting_date: NaiveDate) -> Option<CalendarEvent> {
    let date = preceding_monday(meeting_date, 1)?;

    Some(CalendarEvent {
        // Keyed on the meeting, not the Monday
        id: event_id("off1", meeting_date),
        date,
        label: format!("Officers Night: {}", venue),
        event_type: venue.officers_type(),
        is_meeting: false,
        time: Some(OFFICERS_NIGHT_TIME),
        description: Some(format!(
            "Officers Night allocated to the {} meeting. Rehearsal and Lodge of Instruction.",
            venue
        )),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventType, epoch_millis};
    use chrono::Datelike;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_rule_table_shape() {
        let count = |venue| MEETING_RULES.iter().filter(|r| r.venue == venue).count();
        assert_eq!(count(Venue::Aldenham), 5);
        assert_eq!(count(Venue::Radlett), 5);
        assert_eq!(count(Venue::Elstree), 4);
        assert_eq!(MEETING_RULES.iter().filter(|r| r.is_installation()).count(), 2);
    }

    #[test]
    fn test_meetings_2026() {
        let events = meetings_and_officers(2026, &MEETING_RULES);
        assert_eq!(events.len(), 28);

        let meeting = &events[0];
        assert_eq!(meeting.date, date(2026, 1, 24));
        assert_eq!(meeting.label, "Aldenham Meeting");
        assert_eq!(meeting.event_type, EventType::MeetingAldenham);
        assert!(meeting.is_meeting);
        assert_eq!(meeting.time_label().as_deref(), Some("16:30"));
        assert_eq!(meeting.description.as_deref(), Some("Regular Lodge Meeting"));

        let officers = &events[1];
        assert_eq!(officers.date, date(2026, 1, 19));
        assert_eq!(officers.label, "Officers Night: Aldenham");
        assert_eq!(officers.event_type, EventType::OfficersAldenham);
        assert!(!officers.is_meeting);
        assert_eq!(officers.time_label().as_deref(), Some("19:30"));
        assert_eq!(
            officers.id,
            format!("off1-{}", epoch_millis(date(2026, 1, 24)))
        );
    }

    #[test]
    fn test_installation_meetings() {
        let events = meetings_and_officers(2026, &MEETING_RULES);
        let installations: Vec<_> = events
            .iter()
            .filter(|e| e.label.contains("Installation"))
            .collect();

        assert_eq!(installations.len(), 2);
        for event in installations {
            assert_eq!(event.time_label().as_deref(), Some("16:00"));
            assert_eq!(event.description.as_deref(), Some("Annual Installation Meeting"));
        }

        // 2nd Saturday of December 2026
        assert!(events.iter().any(|e| e.label == "Radlett Meeting (Installation)"
            && e.date == date(2026, 12, 12)));
    }

    #[test]
    fn test_officers_nights_fall_on_the_monday_before() {
        for pair in meetings_and_officers(2026, &MEETING_RULES).chunks(2) {
            let (meeting, officers) = (&pair[0], &pair[1]);
            assert_eq!(officers.date.weekday(), Weekday::Mon);
            let gap = (meeting.date - officers.date).num_days();
            assert!((0..7).contains(&gap), "{} -> {}", officers.date, meeting.date);
            assert_eq!(meeting.event_type.venue(), officers.event_type.venue());
        }
    }

    #[test]
    fn test_missing_occurrence_yields_nothing() {
        let rules = [RecurrenceRule::new(
            "Radlett Meeting",
            Venue::Radlett,
            Month::February,
            Weekday::Sat,
            5,
        )];
        assert!(meetings_and_officers(2026, &rules).is_empty());
    }
}
