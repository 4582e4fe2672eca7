//! Reconciliation of all event sources into one entry per day.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use chrono::NaiveDate;
use tracing::trace;

use crate::event::{CalendarEvent, EventType};

/// How an incoming event combines with the one already on its date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Collision {
    /// Existing is a bank holiday: it keeps its type, labels joined with " & "
    OntoHoliday,
    /// Existing already carries something: labels joined with " / "
    Append,
    /// Existing is an empty Monday slot: incoming takes it over
    Claim,
}

impl Collision {
    fn classify(existing: &CalendarEvent) -> Self {
        if existing.event_type == EventType::BankHoliday {
            Collision::OntoHoliday
        } else if existing.event_type != EventType::Monday || !existing.label.is_empty() {
            Collision::Append
        } else {
            Collision::Claim
        }
    }
}

/// Merge `special` events onto the `baseline` Monday slots.
///
/// Special events are applied in order, so the result depends on source
/// order (bank holidays, then meetings, then manual entries). The returned
/// list is sorted by date with exactly one event per date.
pub fn merge_events(baseline: Vec<CalendarEvent>, special: Vec<CalendarEvent>) -> Vec<CalendarEvent> {
    let mut by_date: BTreeMap<NaiveDate, CalendarEvent> =
        baseline.into_iter().map(|e| (e.date, e)).collect();

    for incoming in special {
        match by_date.entry(incoming.date) {
            Entry::Vacant(slot) => {
                slot.insert(incoming);
            }
            Entry::Occupied(mut slot) => {
                let merged = combine(slot.get(), incoming);
                slot.insert(merged);
            }
        }
    }

    by_date.into_values().collect()
}

/// Build the record for a day claimed by both `existing` and `incoming`.
fn combine(existing: &CalendarEvent, incoming: CalendarEvent) -> CalendarEvent {
    let collision = Collision::classify(existing);
    trace!(
        date = %existing.date,
        %existing,
        %incoming,
        ?collision,
        "merging events"
    );

    let (label, event_type, description) = match collision {
        Collision::OntoHoliday => (
            format!("{} & {}", existing.label, incoming.label),
            EventType::BankHoliday,
            join_descriptions(&existing.description, incoming.description, ". "),
        ),
        Collision::Append => (
            format!("{} / {}", existing.label, incoming.label),
            incoming.event_type,
            join_descriptions(&existing.description, incoming.description, " | "),
        ),
        Collision::Claim => (
            incoming.label,
            incoming.event_type,
            incoming.description.or_else(|| existing.description.clone()),
        ),
    };

    let is_meeting = match collision {
        Collision::Claim => incoming.is_meeting,
        Collision::OntoHoliday | Collision::Append => existing.is_meeting,
    };

    CalendarEvent {
        id: existing.id.clone(),
        date: existing.date,
        label,
        event_type,
        is_meeting,
        time: incoming.time.or(existing.time),
        description,
    }
}

fn join_descriptions(existing: &Option<String>, incoming: Option<String>, sep: &str) -> Option<String> {
    match (existing, incoming) {
        (Some(a), Some(b)) => Some(format!("{}{}{}", a, sep, b)),
        (Some(a), None) => Some(a.clone()),
        (None, b) => b,
    }
}
