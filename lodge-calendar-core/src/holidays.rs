//! UK bank holidays as observed by the centre.
//!
//! Only holidays that land on (or are substituted onto) a Monday matter to
//! the calendar, so New Year's Day, Christmas and Boxing Day are emitted only
//! for the weekday combinations below. Other combinations produce nothing.

use chrono::{Datelike, Days, Month, NaiveDate, Weekday};
use tracing::trace;

use crate::dates::{last_weekday_of_month, nth_weekday_of_month};
use crate::event::{CalendarEvent, EventType, event_id};

const BANK_HOLIDAY_DESCRIPTION: &str = "National Bank Holiday";

/// Easter Sunday by the anonymous Gregorian (Meeus/Jones/Butcher) algorithm.
///
/// Exact for 1583..=4099. Years outside that range run the same arithmetic
/// and give a date, but not a meaningful one.
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c.div_euclid(4);
    let k = c.rem_euclid(4);
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l).div_euclid(451);

    let month = (h + l - 7 * m + 114).div_euclid(31);
    let day = (h + l - 7 * m + 114).rem_euclid(31) + 1;

    NaiveDate::from_ymd_opt(year, u32::try_from(month).ok()?, u32::try_from(day).ok()?)
}

pub fn easter_monday(year: i32) -> Option<NaiveDate> {
    easter_sunday(year)?.checked_add_days(Days::new(1))
}

/// Bank holidays of `year`, in rule order.
pub fn bank_holidays(year: i32) -> Vec<CalendarEvent> {
    let mut holidays: Vec<(NaiveDate, &'static str)> = Vec::new();

    if let Some(jan1) = NaiveDate::from_ymd_opt(year, 1, 1) {
        match jan1.weekday() {
            Weekday::Sat => push_day(&mut holidays, year, 1, 3, "New Year's Day (Sub)"),
            Weekday::Sun => push_day(&mut holidays, year, 1, 2, "New Year's Day (Sub)"),
            Weekday::Mon => holidays.push((jan1, "New Year's Day")),
            _ => {}
        }
    }

    if let Some(date) = easter_monday(year) {
        holidays.push((date, "Easter Monday"));
    }

    if let Some(date) = nth_weekday_of_month(year, Month::May, Weekday::Mon, 1) {
        holidays.push((date, "Early May Bank Holiday"));
    }

    if let Some(date) = last_weekday_of_month(year, Month::May, Weekday::Mon) {
        holidays.push((date, "Spring Bank Holiday"));
    }

    if let Some(date) = last_weekday_of_month(year, Month::August, Weekday::Mon) {
        holidays.push((date, "August Bank Holiday"));
    }

    if let (Some(xmas), Some(boxing)) = (
        NaiveDate::from_ymd_opt(year, 12, 25),
        NaiveDate::from_ymd_opt(year, 12, 26),
    ) {
        if xmas.weekday() == Weekday::Mon {
            holidays.push((xmas, "Christmas Day"));
        }
        if boxing.weekday() == Weekday::Mon {
            holidays.push((boxing, "Boxing Day"));
        }

        match xmas.weekday() {
            // Boxing Day falls on Saturday
            Weekday::Fri => push_day(&mut holidays, year, 12, 28, "Boxing Day (Sub)"),
            // Christmas on Saturday, Boxing Day on Sunday
            Weekday::Sat => push_day(&mut holidays, year, 12, 27, "Christmas Day (Sub)"),
            _ => {}
        }
    }

    trace!(year, count = holidays.len(), "computed bank holidays");

    holidays
        .into_iter()
        .map(|(date, label)| CalendarEvent {
            id: event_id("bh", date),
            date,
            label: label.to_string(),
            event_type: EventType::BankHoliday,
            is_meeting: false,
            time: None,
            description: Some(BANK_HOLIDAY_DESCRIPTION.to_string()),
        })
        .collect()
}

fn push_day(
    holidays: &mut Vec<(NaiveDate, &'static str)>,
    year: i32,
    month: u32,
    day: u32,
    label: &'static str,
) {
    if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
        holidays.push((date, label));
    }
}
