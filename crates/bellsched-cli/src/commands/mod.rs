pub mod config;
pub mod conflicts;
pub mod day;

use bellsched_core::{Config, ScheduleBook, TimeOfDay};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::{Path, PathBuf};

/// Date/time selection shared by the schedule commands.
#[derive(Args, Debug, Clone)]
pub struct MomentArgs {
    /// Day to show (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Time of day (H:MM or H:MM:SS); defaults to now. An explicit time
    /// treats the chosen date as the current day.
    #[arg(long)]
    pub time: Option<String>,
    /// Schedule book file; defaults to `book_path` from the config
    #[arg(long)]
    pub book: Option<PathBuf>,
}

/// Resolved inputs for one schedule query.
pub struct Moment {
    pub date: NaiveDate,
    pub now: TimeOfDay,
    pub is_today: bool,
}

impl MomentArgs {
    pub fn moment(&self) -> Result<Moment, Box<dyn std::error::Error>> {
        let local = Local::now();
        let today = local.date_naive();
        let date = self.date.unwrap_or(today);
        let now = match &self.time {
            Some(text) => text.parse::<TimeOfDay>()?,
            None => TimeOfDay::from(local.time()),
        };
        Ok(Moment {
            date,
            now,
            is_today: date == today || self.time.is_some(),
        })
    }

    pub fn load_book(&self, config: &Config) -> Result<ScheduleBook, Box<dyn std::error::Error>> {
        load_book(self.book.as_deref(), config)
    }
}

/// Load the book from `path` if given, else from `book_path` in the config.
pub fn load_book(
    path: Option<&Path>,
    config: &Config,
) -> Result<ScheduleBook, Box<dyn std::error::Error>> {
    let path = path.or(config.book_path.as_deref()).ok_or(
        "no schedule book configured; pass --book or run `config set book_path <file>`",
    )?;
    tracing::debug!("using schedule book {}", path.display());
    Ok(ScheduleBook::load(path)?)
}

/// Load the config from `path` if given, else from the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(Config::load_from(path)?),
        None => Ok(Config::load_or_default()),
    }
}

/// Save the config to `path` if given, else to the default location.
pub fn save_config(
    config: &Config,
    path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(path) => config.save_to(path)?,
        None => config.save()?,
    }
    Ok(())
}
