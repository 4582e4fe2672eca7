//! TUI rendering for lodge-calendar-core types.
//!
//! Extension traits that add colored terminal output using owo_colors.

use chrono::Datelike;
use lodge_calendar_core::query::ordinal_suffix;
use lodge_calendar_core::{CalendarEvent, CalendarStats, EventType, MonthData, Venue};
use owo_colors::{OwoColorize, Style};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Colour scheme for an event: degrees purple, holidays red, one hue per lodge
/// (bold for the meeting, plain for its officers night).
fn event_style(event: &CalendarEvent) -> Style {
    if event.label.contains("Degree") {
        return Style::new().purple();
    }

    match event.event_type {
        EventType::BankHoliday => Style::new().red(),
        EventType::Recess => Style::new().dimmed(),
        EventType::Monday => Style::new().cyan(),
        t => {
            let style = match t.venue() {
                Some(Venue::Aldenham) => Style::new().blue(),
                Some(Venue::Radlett) => Style::new().green(),
                Some(Venue::Elstree) => Style::new().yellow(),
                None => return Style::new(),
            };
            if t.is_officers_night() {
                style
            } else {
                style.bold()
            }
        }
    }
}

impl Render for CalendarEvent {
    fn render(&self) -> String {
        let day = self.date.day();
        let date = format!(
            "{} {:>2}{}",
            self.date.format("%a"),
            day,
            ordinal_suffix(day)
        );
        let time = self.time_label().unwrap_or_else(|| "     ".to_string());

        format!(
            "  {} {} {}",
            date.dimmed(),
            time,
            self.label.style(event_style(self))
        )
    }
}

impl Render for MonthData<'_> {
    fn render(&self) -> String {
        let mut lines = vec![format!("{} {}", self.name, self.year).bold().to_string()];

        if self.events.is_empty() {
            lines.push("  No events".dimmed().to_string());
        }

        lines.extend(self.events.iter().map(|e| e.render()));
        lines.join("\n")
    }
}

impl Render for CalendarStats {
    fn render(&self) -> String {
        [
            format!("{:>4}  {}", self.meetings, "lodge meetings".bold()),
            format!("{:>4}  {}", self.loi, "LoI nights (degrees & AGM)".purple()),
            format!("{:>4}  {}", self.officers, "officers nights".dimmed()),
        ]
        .join("\n")
    }
}
