use std::path::PathBuf;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::Config;

/// Settings to change; all `None` just shows the current config.
#[derive(Debug, Default)]
pub struct ConfigUpdate {
    pub output_dir: Option<PathBuf>,
    pub file_prefix: Option<String>,
    pub default_year: Option<i32>,
}

impl ConfigUpdate {
    fn is_empty(&self) -> bool {
        self.output_dir.is_none() && self.file_prefix.is_none() && self.default_year.is_none()
    }

    fn apply(self, config: &mut Config) {
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        if let Some(prefix) = self.file_prefix {
            config.file_prefix = prefix;
        }
        if let Some(year) = self.default_year {
            config.default_year = Some(year);
        }
    }
}

pub fn run(update: ConfigUpdate) -> Result<()> {
    let path = Config::config_path()?;
    let mut config = Config::load()?;

    if !update.is_empty() {
        update.apply(&mut config);
        config.save_to(&path)?;
        println!("{} {}", "Saved".green(), path.display());
    } else {
        println!("{}", path.display().to_string().dimmed());
    }

    println!("output_dir   = {}", config.output_dir.display());
    println!("file_prefix  = {}", config.file_prefix);
    match config.default_year {
        Some(year) => println!("default_year = {}", year),
        None => println!("default_year = {}", "(current year)".dimmed()),
    }

    Ok(())
}
