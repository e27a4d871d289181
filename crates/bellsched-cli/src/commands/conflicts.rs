use bellsched_core::{detect_conflicts, TimeOfDay};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::{Path, PathBuf};

use super::{load_book, load_config};

// Conflicts depend only on the day, so there is no `--time`.
#[derive(Args, Debug)]
pub struct ConflictsArgs {
    /// Day to check (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Schedule book file; defaults to `book_path` from the config
    #[arg(long)]
    pub book: Option<PathBuf>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(
    config_path: Option<&Path>,
    args: ConflictsArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let book = load_book(args.book.as_deref(), &config)?;
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());

    // Not "today", so no passing periods are synthesized.
    let entries = book.resolve_date(
        date,
        &config.roster,
        config.lunch,
        TimeOfDay::MIDNIGHT,
        false,
    );
    let events: Vec<_> = config
        .events
        .iter()
        .filter(|e| e.occurs_on(date))
        .cloned()
        .collect();
    let conflicts = detect_conflicts(&events, &entries);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&conflicts)?);
        return Ok(());
    }
    if conflicts.is_empty() {
        println!("No conflicts.");
        return Ok(());
    }
    for conflict in &conflicts {
        let event = &events[conflict.event_index];
        println!(
            "{:?}: {} ({} to {}) overlaps {} ({})",
            conflict.severity,
            event.title,
            event.start_time.format(false),
            event.end_time.format(false),
            conflict.conflicting_entry.class_name(),
            conflict.conflicting_entry.time_range,
        );
    }
    Ok(())
}
