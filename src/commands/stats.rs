use anyhow::Result;
use lodge_calendar_core::{CalendarStats, EventFilter, generate};

use crate::render::Render;

pub fn run(year: i32, filter: EventFilter) -> Result<()> {
    let events = generate(year);
    let stats = CalendarStats::from_events(filter.apply(&events));

    println!("{}", stats.render());

    Ok(())
}
