//! Calendar event types.
//!
//! Every source (baseline Mondays, bank holidays, meetings, manual entries)
//! produces these values, and the merge and sweep stages rebuild them rather
//! than patching them in place.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};

/// The three lodges that meet at the centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Venue {
    Aldenham,
    Radlett,
    Elstree,
}

impl Venue {
    pub const ALL: [Venue; 3] = [Venue::Aldenham, Venue::Radlett, Venue::Elstree];

    pub fn name(self) -> &'static str {
        match self {
            Venue::Aldenham => "Aldenham",
            Venue::Radlett => "Radlett",
            Venue::Elstree => "Elstree",
        }
    }

    /// Event type of this lodge's regular meetings.
    pub fn meeting_type(self) -> EventType {
        match self {
            Venue::Aldenham => EventType::MeetingAldenham,
            Venue::Radlett => EventType::MeetingRadlett,
            Venue::Elstree => EventType::MeetingElstree,
        }
    }

    /// Event type of the officers night preceding this lodge's meetings.
    pub fn officers_type(self) -> EventType {
        match self {
            Venue::Aldenham => EventType::OfficersAldenham,
            Venue::Radlett => EventType::OfficersRadlett,
            Venue::Elstree => EventType::OfficersElstree,
        }
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    /// An ordinary Monday night (Lodge of Instruction slot)
    Monday,
    BankHoliday,
    MeetingAldenham,
    MeetingRadlett,
    MeetingElstree,
    OfficersAldenham,
    OfficersRadlett,
    OfficersElstree,
    /// Summer closure of the centre
    Recess,
}

impl EventType {
    /// The lodge this event belongs to, for meetings and officers nights.
    pub fn venue(self) -> Option<Venue> {
        match self {
            EventType::MeetingAldenham | EventType::OfficersAldenham => Some(Venue::Aldenham),
            EventType::MeetingRadlett | EventType::OfficersRadlett => Some(Venue::Radlett),
            EventType::MeetingElstree | EventType::OfficersElstree => Some(Venue::Elstree),
            EventType::Monday | EventType::BankHoliday | EventType::Recess => None,
        }
    }

    pub fn is_officers_night(self) -> bool {
        matches!(
            self,
            EventType::OfficersAldenham | EventType::OfficersRadlett | EventType::OfficersElstree
        )
    }

    pub fn is_lodge_meeting(self) -> bool {
        matches!(
            self,
            EventType::MeetingAldenham | EventType::MeetingRadlett | EventType::MeetingElstree
        )
    }
}

/// A single day's entry in the generated calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub date: NaiveDate,
    /// Empty until some rule claims the day
    pub label: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub is_meeting: bool,
    #[serde(default, with = "hhmm", skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CalendarEvent {
    /// A bare Monday slot with nothing assigned to it yet.
    pub fn monday(date: NaiveDate) -> Self {
        CalendarEvent {
            id: event_id("mon", date),
            date,
            label: String::new(),
            event_type: EventType::Monday,
            is_meeting: false,
            time: None,
            description: None,
        }
    }

    pub fn is_unassigned(&self) -> bool {
        self.label.is_empty()
    }

    /// The scheduled time as "HH:MM", if any.
    pub fn time_label(&self) -> Option<String> {
        self.time.map(|t| t.format(TIME_FORMAT).to_string())
    }
}

impl fmt::Display for CalendarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.time_label() {
            Some(time) => write!(f, "{} {} {}", self.date, time, self.label),
            None => write!(f, "{} {}", self.date, self.label),
        }
    }
}

const TIME_FORMAT: &str = "%H:%M";

/// Build a time-of-day at compile time.
pub(crate) const fn wall_clock(hour: u32, min: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, min, 0) {
        Some(t) => t,
        None => panic!("invalid wall-clock time"),
    }
}

/// Parse a 24h "HH:MM" time.
pub fn parse_time(s: &str) -> CalendarResult<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), TIME_FORMAT)
        .map_err(|_| CalendarError::InvalidTime(s.to_string()))
}

/// Milliseconds since the Unix epoch of the date's midnight (wall clock read as UTC).
pub fn epoch_millis(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

/// Deterministic id for an event of the given source on the given date.
pub(crate) fn event_id(prefix: &str, date: NaiveDate) -> String {
    format!("{}-{}", prefix, epoch_millis(date))
}

/// Serde support for `Option<NaiveTime>` as "HH:MM".
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{TIME_FORMAT, parse_time};

    pub fn serialize<S: Serializer>(time: &Option<NaiveTime>, s: S) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => s.serialize_str(&t.format(TIME_FORMAT).to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        raw.map(|s| parse_time(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}
