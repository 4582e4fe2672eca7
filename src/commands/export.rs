use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lodge_calendar_core::{generate, ics_filename, to_ics};
use owo_colors::OwoColorize;

use crate::config::Config;

pub fn run(config: &Config, year: i32, output: Option<PathBuf>) -> Result<()> {
    let path = output.unwrap_or_else(|| default_path(config, year));
    let written = write_ics(year, &path)?;

    println!(
        "{} {} events to {}",
        "Exported".green(),
        written,
        path.display()
    );

    Ok(())
}

/// `<output_dir>/<file_prefix>-<year>.ics`
pub fn default_path(config: &Config, year: i32) -> PathBuf {
    config
        .output_path()
        .join(ics_filename(&config.file_prefix, year))
}

/// Write the year's calendar to `path`, returning the number of events exported.
pub fn write_ics(year: i32, path: &Path) -> Result<usize> {
    let events = generate(year);
    let content = to_ics(&events);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(events.iter().filter(|e| !e.label.is_empty()).count())
}
