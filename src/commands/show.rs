use anyhow::Result;
use lodge_calendar_core::{EventFilter, generate, group_by_month};
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(year: i32, filter: EventFilter, json: bool) -> Result<()> {
    let events = generate(year);
    let matching = filter.apply(&events);

    if json {
        println!("{}", serde_json::to_string_pretty(&matching)?);
        return Ok(());
    }

    if matching.is_empty() {
        println!("{}", "No events match".dimmed());
        return Ok(());
    }

    let months: Vec<_> = group_by_month(year, matching)
        .into_iter()
        .filter(|m| !m.events.is_empty())
        .collect();

    for (i, month) in months.iter().enumerate() {
        println!("{}", month.render());

        // Add spacing between months (but not after the last one)
        if i < months.len() - 1 {
            println!();
        }
    }

    Ok(())
}
