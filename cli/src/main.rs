mod display;
mod tui;

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::debug;
use weekplan_core::{
    parse_day, ActivityDraft, FileScheduleRepository, ScheduleError, ScheduleService,
};

use crate::display::{print_conflict, print_day, print_free_slots, print_week, today};

#[derive(Parser)]
#[command(name = "weekplan")]
#[command(
    about = "A weekly schedule planner with conflict checks and free-slot search",
    long_about = None
)]
struct Cli {
    /// Schedule file to use instead of ~/.weekplan/schedule.txt
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Print debug logs to stderr (override with WEEKPLAN_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Add an activity (usage: add "Math" -d mon -s 08:00 -e 09:30 -l "Room A")
    Add {
        /// Activity name
        name: String,
        /// Day as 1-7 (1 = Monday) or a weekday name
        #[arg(short, long)]
        day: String,
        /// Start time, HH:MM
        #[arg(short, long)]
        start: String,
        /// End time, HH:MM
        #[arg(short, long)]
        end: String,
        /// Where it takes place
        #[arg(short, long, default_value = "")]
        location: String,
    },
    /// Remove the first activity with this exact name
    Remove { name: String },
    /// Show the whole week
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show the activities of one day (defaults to today)
    Day {
        day: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Show free slots between 08:00 and 22:00 (defaults to today)
    Free {
        day: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Rename the schedule
    Rename { name: String },
    /// Write the schedule to another file
    Export { path: PathBuf },
    /// Replace the schedule with the contents of another file
    Import { path: PathBuf },
    /// Open the Terminal User Interface
    Tui,
}

fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "warn" };

    let filter = tracing_subscriber::EnvFilter::try_from_env("WEEKPLAN_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn open_repository(file: Option<PathBuf>) -> Result<FileScheduleRepository> {
    match file {
        Some(path) => Ok(FileScheduleRepository::with_path(path)),
        None => FileScheduleRepository::new(None).context("could not prepare ~/.weekplan"),
    }
}

fn resolve_day(day: Option<String>) -> Result<u8, ScheduleError> {
    match day {
        Some(d) => parse_day(&d),
        None => Ok(today()),
    }
}

/// Prints errors the user can fix by retrying. Anything else is returned.
fn report(err: ScheduleError) -> Result<()> {
    match err {
        ScheduleError::Conflict { candidate, existing } => {
            print_conflict(&candidate, &existing);
            Ok(())
        }
        err @ (ScheduleError::InvalidDay(_)
        | ScheduleError::NotFound(_)
        | ScheduleError::InvalidInput(_)) => {
            println!("Error: {}", err);
            Ok(())
        }
        other => Err(other.into()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);

    // the TUI owns the terminal, so it runs without a log subscriber
    if !matches!(command, Commands::Tui) {
        init_tracing(cli.verbose)?;
    }

    let repo = open_repository(cli.file)?;
    let store = repo.path().display().to_string();
    let mut service = ScheduleService::open(repo)
        .with_context(|| format!("failed to load schedule from {}", store))?;
    debug!(store = %store, activities = service.schedule().len(), "schedule opened");

    match command {
        Commands::Add { name, day, start, end, location } => {
            let draft = ActivityDraft { name, day, start, end, location };
            let activity = match draft.validate() {
                Ok(activity) => activity,
                Err(e) => return report(e),
            };
            let label = display::describe_activity(&activity);
            match service.add_activity(activity) {
                Ok(()) => {
                    service.save()?;
                    println!("Activity added: {}", label);
                }
                Err(e) => return report(e),
            }
        }
        Commands::Remove { name } => match service.remove_activity(&name) {
            Ok(()) => {
                service.save()?;
                println!("Activity '{}' removed.", name);
            }
            Err(e) => return report(e),
        },
        Commands::List { json } => {
            let week = service.week();
            if json {
                println!("{}", serde_json::to_string_pretty(&week)?);
            } else {
                print_week(&week);
            }
        }
        Commands::Day { day, json } => {
            let result = resolve_day(day).and_then(|d| service.activities_for_day(d));
            match result {
                Ok(view) if json => println!("{}", serde_json::to_string_pretty(&view)?),
                Ok(view) => print_day(&view),
                Err(e) => return report(e),
            }
        }
        Commands::Free { day, json } => {
            let result = resolve_day(day)
                .and_then(|d| service.free_slots_for_day(d).map(|slots| (d, slots)));
            match result {
                Ok((_, slots)) if json => println!("{}", serde_json::to_string_pretty(&slots)?),
                Ok((d, slots)) => print_free_slots(d, &slots),
                Err(e) => return report(e),
            }
        }
        Commands::Rename { name } => match service.rename(&name) {
            Ok(()) => {
                service.save()?;
                println!("Schedule renamed to: {}", service.schedule().name());
            }
            Err(e) => return report(e),
        },
        Commands::Export { path } => {
            let target = FileScheduleRepository::with_path(&path);
            service.export_to(&target)?;
            println!("Schedule saved to '{}'.", path.display());
        }
        Commands::Import { path } => {
            let source = FileScheduleRepository::with_path(&path);
            service.import_from(&source)?;
            service.save()?;
            println!(
                "Schedule '{}' loaded from '{}' ({} activities).",
                service.schedule().name(),
                path.display(),
                service.schedule().len()
            );
        }
        Commands::Tui => {
            tui::run(service)?;
        }
    }
    Ok(())
}
