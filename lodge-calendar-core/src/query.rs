//! Read-side helpers over a generated year: filtering, grouping and counts.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};
use crate::event::{CalendarEvent, Venue};
use crate::recess::RECESS_LABEL;

/// Category filter over event labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    All,
    Aldenham,
    Radlett,
    Elstree,
    /// Lodge of Instruction: degrees, AGM and officers nights
    Loi,
}

impl Category {
    pub fn matches(self, event: &CalendarEvent) -> bool {
        let label = event.label.as_str();
        match self {
            Category::All => true,
            Category::Aldenham => label.contains(Venue::Aldenham.name()),
            Category::Radlett => label.contains(Venue::Radlett.name()),
            Category::Elstree => label.contains(Venue::Elstree.name()),
            Category::Loi => {
                label.contains("LoI") || label.contains("Degree") || label.contains("Officers")
            }
        }
    }
}

impl FromStr for Category {
    type Err = CalendarError;

    fn from_str(s: &str) -> CalendarResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Category::All),
            "aldenham" => Ok(Category::Aldenham),
            "radlett" => Ok(Category::Radlett),
            "elstree" => Ok(Category::Elstree),
            "loi" => Ok(Category::Loi),
            _ => Err(CalendarError::UnknownCategory(s.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::All => "all",
            Category::Aldenham => "aldenham",
            Category::Radlett => "radlett",
            Category::Elstree => "elstree",
            Category::Loi => "loi",
        };
        f.write_str(name)
    }
}

/// Free-text search plus category filter.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub search: String,
    pub category: Category,
}

impl EventFilter {
    pub fn new(search: impl Into<String>, category: Category) -> Self {
        EventFilter {
            search: search.into(),
            category,
        }
    }

    pub fn matches(&self, event: &CalendarEvent) -> bool {
        let needle = self.search.trim().to_lowercase();
        if !needle.is_empty() && !searchable_text(event).contains(&needle) {
            return false;
        }
        self.category.matches(event)
    }

    pub fn apply<'a>(&self, events: &'a [CalendarEvent]) -> Vec<&'a CalendarEvent> {
        events.iter().filter(|e| self.matches(e)).collect()
    }
}

/// Everything a search can hit for `event`, lower-cased.
///
/// Dates are offered in UK day-first forms: "15", "15th", "15/8",
/// "15/8/2026", "15/08", "15 August", "15th August", "15 Aug", "15th Aug".
fn searchable_text(event: &CalendarEvent) -> String {
    let day = event.date.day();
    let month = event.date.month();
    let year = event.date.year();
    let month_name = month_name_of(event.date);
    let short_month = month_name.get(..3).unwrap_or(month_name);
    let suffix = ordinal_suffix(day);

    let mut terms: Vec<String> = vec![event.label.clone()];
    terms.extend(event.description.clone());
    terms.extend(event.time_label());
    terms.extend([
        month_name.to_string(),
        short_month.to_string(),
        format!("{}", day),
        format!("{}{}", day, suffix),
        format!("{}/{}", day, month),
        format!("{}/{}/{}", day, month, year),
        format!("{:02}/{:02}", day, month),
        format!("{} {}", day, month_name),
        format!("{}{} {}", day, suffix, month_name),
        format!("{} {}", day, short_month),
        format!("{}{} {}", day, suffix, short_month),
    ]);

    terms.retain(|t| !t.is_empty());
    terms.join(" ").to_lowercase()
}

/// English ordinal suffix for a day of month: 1st, 2nd, 3rd, 4th, 11th, 22nd.
pub fn ordinal_suffix(day: u32) -> &'static str {
    if (4..21).contains(&day) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

pub fn month_name(month: Month) -> &'static str {
    month.name()
}

fn month_name_of(date: NaiveDate) -> &'static str {
    u8::try_from(date.month())
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map_or("", |m| m.name())
}

/// One month's slice of a year's events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthData<'a> {
    pub name: &'static str,
    pub year: i32,
    pub month: Month,
    pub events: Vec<&'a CalendarEvent>,
}

/// Group `events` into the twelve months of `year`, January first.
///
/// Events dated outside `year` are left out.
pub fn group_by_month<'a, I>(year: i32, events: I) -> Vec<MonthData<'a>>
where
    I: IntoIterator<Item = &'a CalendarEvent>,
{
    let mut months: Vec<MonthData<'a>> = (0u8..12)
        .filter_map(|i| Month::try_from(i + 1).ok())
        .map(|month| MonthData {
            name: month.name(),
            year,
            month,
            events: Vec::new(),
        })
        .collect();

    for event in events.into_iter().filter(|e| e.date.year() == year) {
        if let Some(bucket) = months.get_mut(event.date.month0() as usize) {
            bucket.events.push(event);
        }
    }

    months
}

/// Headline counts over a set of events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CalendarStats {
    /// Regular and installation lodge meetings
    pub meetings: usize,
    /// Degree practice nights and the AGM
    pub loi: usize,
    pub officers: usize,
}

impl CalendarStats {
    pub fn from_events<'a, I>(events: I) -> Self
    where
        I: IntoIterator<Item = &'a CalendarEvent>,
    {
        events.into_iter().fold(CalendarStats::default(), |mut stats, e| {
            if e.is_meeting {
                stats.meetings += 1;
            }
            if e.label.contains("Degree") || e.label.contains("AGM") {
                stats.loi += 1;
            }
            if e.label.contains("Officers") {
                stats.officers += 1;
            }
            stats
        })
    }
}

/// The first labelled event on or after `today`, ignoring recess closures.
pub fn upcoming_event(events: &[CalendarEvent], today: NaiveDate) -> Option<&CalendarEvent> {
    events
        .iter()
        .find(|e| e.date >= today && !e.label.is_empty() && !e.label.contains(RECESS_LABEL))
}
