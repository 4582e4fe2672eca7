pub mod config;
pub mod export;
pub mod next;
pub mod show;
pub mod stats;

use anyhow::Result;
use lodge_calendar_core::{Category, EventFilter};

/// Build the filter from the `--search` / `--category` arguments.
pub fn build_filter(search: Option<String>, category: Option<&str>) -> Result<EventFilter> {
    let category = match category {
        Some(c) => c.parse::<Category>()?,
        None => Category::All,
    };

    Ok(EventFilter::new(search.unwrap_or_default(), category))
}
