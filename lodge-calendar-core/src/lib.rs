//! Date-rule engine for the lodge meeting calendar.
//!
//! `generate(year)` builds the year's calendar in one pass:
//! - `dates`: one slot per Monday, plus nth-weekday and preceding-Monday arithmetic
//! - `holidays`: UK bank holidays, Easter included
//! - `schedule`: recurring lodge meetings and their officers nights
//! - `manual`: fixed annual entries (the LoI AGM)
//! - `merge`: one entry per day, combining clashes
//! - `recess`: August closure and the degree rotation
//!
//! `ics` exports the result, `query` filters and summarises it.

pub mod calendar;
pub mod dates;
pub mod error;
pub mod event;
pub mod holidays;
pub mod ics;
pub mod manual;
pub mod merge;
pub mod query;
pub mod recess;
pub mod schedule;

pub use calendar::generate;
pub use error::{CalendarError, CalendarResult};
pub use event::{CalendarEvent, EventType, Venue, parse_time};
pub use ics::{ics_filename, to_ics, to_ics_at};
pub use query::{CalendarStats, Category, EventFilter, MonthData, group_by_month, upcoming_event};
pub use schedule::{MEETING_RULES, RecurrenceRule};
