//! Date arithmetic shared by the rule stages.
//!
//! All walks are day-by-day over `NaiveDate`; a walk that would leave the
//! range chrono can represent yields `None` instead of panicking.

use chrono::{Datelike, Days, Month, NaiveDate, Weekday};

use crate::event::CalendarEvent;

/// First Monday on or after Jan 1 of `year`.
pub fn first_monday(year: i32) -> Option<NaiveDate> {
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1)?;
    walk_forward_to(jan1, Weekday::Mon)
}

/// Every Monday of `year`, ascending.
pub fn mondays(year: i32) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = first_monday(year);

    while let Some(date) = current.filter(|d| d.year() == year) {
        dates.push(date);
        current = date.checked_add_days(Days::new(7));
    }

    dates
}

/// One bare, unlabeled slot per Monday of `year`.
pub fn monday_slots(year: i32) -> Vec<CalendarEvent> {
    mondays(year).into_iter().map(CalendarEvent::monday).collect()
}

/// The `nth` (1-based) occurrence of `weekday` in `month` of `year`.
///
/// Returns `None` when that occurrence spills into the next month (e.g. a
/// fifth Saturday in a month with only four).
pub fn nth_weekday_of_month(year: i32, month: Month, weekday: Weekday, nth: u8) -> Option<NaiveDate> {
    if nth == 0 {
        return None;
    }

    let first = NaiveDate::from_ymd_opt(year, month.number_from_month(), 1)?;
    let first_match = walk_forward_to(first, weekday)?;
    let date = first_match.checked_add_days(Days::new(7 * u64::from(nth - 1)))?;

    (date.month() == month.number_from_month()).then_some(date)
}

/// Last `weekday` of `month`, found by walking back from the month's final day.
pub fn last_weekday_of_month(year: i32, month: Month, weekday: Weekday) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month.number_from_month(), 1)?;
    let last_day = first.checked_add_months(chrono::Months::new(1))?.pred_opt()?;
    walk_back_to(last_day, weekday)
}

/// The Monday at or before `date`, stepped back a further `offset - 1` weeks.
///
/// `offset = 1` is the immediately preceding Monday (or `date` itself when it
/// is a Monday).
pub fn preceding_monday(date: NaiveDate, offset: u32) -> Option<NaiveDate> {
    let monday = walk_back_to(date, Weekday::Mon)?;
    let weeks_back = u64::from(offset.saturating_sub(1));
    monday.checked_sub_days(Days::new(7 * weeks_back))
}

fn walk_forward_to(mut date: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    while date.weekday() != weekday {
        date = date.succ_opt()?;
    }
    Some(date)
}

fn walk_back_to(mut date: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    while date.weekday() != weekday {
        date = date.pred_opt()?;
    }
    Some(date)
}
