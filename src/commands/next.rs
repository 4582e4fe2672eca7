use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use lodge_calendar_core::{CalendarEvent, generate, upcoming_event};
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(today: NaiveDate) -> Result<()> {
    match find_next(today) {
        Some(event) => {
            println!("{}", "Next up".bold());
            println!("{}", event.render());
            if let Some(desc) = &event.description {
                println!("  {}", desc.dimmed());
            }
        }
        None => println!("{}", "Nothing scheduled".dimmed()),
    }

    Ok(())
}

/// The next event from `today`, looking into the following year when the
/// current one has nothing left.
fn find_next(today: NaiveDate) -> Option<CalendarEvent> {
    [today.year(), today.year() + 1]
        .into_iter()
        .find_map(|year| upcoming_event(&generate(year), today).cloned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_next_rolls_into_next_year() {
        // 28 Dec 2026 is the last Monday of the year
        let today = NaiveDate::from_ymd_opt(2026, 12, 29).unwrap();
        let next = find_next(today).unwrap();
        assert_eq!(next.date.year(), 2027);
    }

    #[test]
    fn test_find_next_same_day() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        let next = find_next(today).unwrap();
        assert_eq!(next.date, today);
        assert_eq!(next.label, "Aldenham Meeting");
    }
}
