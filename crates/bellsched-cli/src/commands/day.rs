use bellsched_core::{
    merge_custom_events, select_for_compact_view, Config, EntryKind, ScheduleEntry,
};
use clap::Args;
use std::path::Path;

use super::{load_config, Moment, MomentArgs};

#[derive(Args, Debug)]
pub struct DayArgs {
    #[command(flatten)]
    pub moment: MomentArgs,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Resolve the day and merge in the configured custom events.
fn display_sequence(
    config: &Config,
    args: &DayArgs,
    moment: &Moment,
) -> Result<(Vec<ScheduleEntry>, Option<String>), Box<dyn std::error::Error>> {
    let book = args.moment.load_book(config)?;

    let entries = book.resolve_date(
        moment.date,
        &config.roster,
        config.lunch,
        moment.now,
        moment.is_today,
    );
    let header = book.day_info(moment.date).map(|info| {
        let name = book
            .templates
            .get(&info.day_code)
            .map(|t| t.display_name.as_str())
            .unwrap_or("unknown day type");
        if info.note.is_empty() {
            format!("{} {} ({name})", moment.date, info.day_code)
        } else {
            format!("{} {} ({name}) - {}", moment.date, info.day_code, info.note)
        }
    });

    if entries.is_empty() {
        return Ok((entries, header));
    }

    let mut merged = merge_custom_events(
        &entries,
        &config.events,
        moment.date,
        moment.now,
        moment.is_today,
    );
    if !config.display.show_passing_periods {
        merged.retain(|e| e.kind != EntryKind::PassingPeriod);
    }
    Ok((merged, header))
}

fn print_entry(entry: &ScheduleEntry) {
    let marker = if entry.is_current { ">" } else { " " };
    let mut line = format!("{marker} {:<16} {}", entry.time_range, entry.class_name());

    let details: Vec<&str> = [entry.teacher(), entry.room()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    if !details.is_empty() {
        line.push_str(&format!(" ({})", details.join(", ")));
    }
    if entry.is_current {
        if let Some(progress) = entry.progress {
            line.push_str(&format!(" [{:.0}%]", progress * 100.0));
        }
    }
    println!("{line}");
}

fn print_entries(entries: &[ScheduleEntry], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(entries)?);
    } else if entries.is_empty() {
        println!("No schedule today.");
    } else {
        entries.iter().for_each(print_entry);
    }
    Ok(())
}

pub fn run_day(
    config_path: Option<&Path>,
    args: DayArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let moment = args.moment.moment()?;
    let (entries, header) = display_sequence(&config, &args, &moment)?;
    if !args.json {
        if let Some(header) = header {
            println!("{header}");
        }
    }
    print_entries(&entries, args.json)
}

pub fn run_compact(
    config_path: Option<&Path>,
    args: DayArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let moment = args.moment.moment()?;
    let (entries, _) = display_sequence(&config, &args, &moment)?;
    let now = moment.now;
    let selected = select_for_compact_view(&entries, now.to_seconds());
    if !args.json && !selected.is_empty() {
        println!("{}", now.format(config.display.show_seconds));
    }
    print_entries(&selected, args.json)
}
