//! Splits CLI Tool
//!
//! Command-line driver for splits timeline files. Timestamps on the
//! command line are milliseconds; the built-in M:SS.mmm timecode formatter
//! plays the role of the host-supplied duration formatter.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use splits_core::{container, sequence, ColumnSet, ComboOutcome, SectionManager, TimeSection, Timestamp};
use splits_render::{collect_measured_times, TimeTableBuilder};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "splits")]
#[command(about = "Splits - time-section stopwatch timelines")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new empty timeline file
    New {
        /// Timeline file path
        file: PathBuf,
    },

    /// Insert a section directly
    Add {
        /// Timeline file path
        file: PathBuf,

        /// Section start in milliseconds
        start: Timestamp,

        /// Section end in milliseconds; omitted = open-ended
        #[arg(short, long)]
        end: Option<Timestamp>,

        /// Section name
        #[arg(short, long, default_value = "")]
        name: String,

        /// Section tag
        #[arg(short, long, default_value = "")]
        tag: String,
    },

    /// Start/stop combo at a time
    Mark {
        /// Timeline file path
        file: PathBuf,

        /// Time in milliseconds
        time: Timestamp,
    },

    /// Split combo at a time
    Split {
        /// Timeline file path
        file: PathBuf,

        /// Time in milliseconds
        time: Timestamp,
    },

    /// Remove the section at an index
    Remove {
        /// Timeline file path
        file: PathBuf,

        /// Section index, starting at 0
        index: usize,
    },

    /// Remove every section
    Clear {
        /// Timeline file path
        file: PathBuf,
    },

    /// Render the time table as of a time
    Show {
        /// Timeline file path
        file: PathBuf,

        /// Query time in milliseconds
        time: Timestamp,

        /// Override the stored column selection, e.g. "Name;Duration"
        #[arg(long)]
        columns: Option<String>,
    },

    /// Print the timeline contents
    Info {
        /// Timeline file path
        file: PathBuf,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Export measured times of closed sections as JSON
    Export {
        /// Timeline file path
        file: PathBuf,
    },

    /// Set the visible columns
    Columns {
        /// Timeline file path
        file: PathBuf,

        /// ";"-delimited column list, e.g. "Name;Duration;Cumul;Tag"
        columns: String,
    },

    /// Lock (or unlock) the combo commands
    Lock {
        /// Timeline file path
        file: PathBuf,

        /// Unlock instead
        #[arg(long)]
        off: bool,
    },

    /// Rewrite all timestamps through t * num / den + offset
    Remap {
        /// Timeline file path
        file: PathBuf,

        /// Mapping numerator
        #[arg(long, default_value = "1")]
        num: i64,

        /// Mapping denominator
        #[arg(long, default_value = "1")]
        den: i64,

        /// Mapping offset in milliseconds
        #[arg(long, default_value = "0")]
        offset: i64,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::New { file } => {
            save(&file, &SectionManager::new())?;
            println!("Created {}", file.display());
        }

        Commands::Add {
            file,
            start,
            end,
            name,
            tag,
        } => {
            let mut manager = load(&file)?;
            let section = match end {
                Some(end) => TimeSection::new(start, end),
                None => TimeSection::open(start),
            };
            manager.insert(section.with_name(name).with_tag(tag));
            save(&file, &manager)?;
            println!("{} sections", manager.len());
        }

        Commands::Mark { file, time } => {
            let mut manager = load(&file)?;
            let outcome = sequence::start_stop(&mut manager, time);
            save(&file, &manager)?;
            report_outcome(outcome, time);
        }

        Commands::Split { file, time } => {
            let mut manager = load(&file)?;
            let outcome = sequence::split(&mut manager, time);
            save(&file, &manager)?;
            report_outcome(outcome, time);
        }

        Commands::Remove { file, index } => {
            let mut manager = load(&file)?;
            if index >= manager.len() {
                bail!("No section at index {} ({} sections)", index, manager.len());
            }
            let removed = manager.remove(index);
            save(&file, &manager)?;
            println!(
                "Removed section {} ({} - {})",
                index + 1,
                format_timecode(removed.start),
                if removed.is_open() {
                    "open".to_string()
                } else {
                    format_timecode(removed.end)
                }
            );
        }

        Commands::Clear { file } => {
            let mut manager = load(&file)?;
            manager.clear();
            save(&file, &manager)?;
            println!("Cleared");
        }

        Commands::Show {
            file,
            time,
            columns,
        } => {
            let manager = load(&file)?;
            let columns = match columns {
                Some(list) => ColumnSet::parse_delimited(&list),
                None => manager.visible_columns(),
            };
            let builder = TimeTableBuilder::new(manager.sections(), format_timecode);
            println!("{}", builder.build(time, columns));
        }

        Commands::Info { file, json } => {
            let manager = load(&file)?;
            if json {
                println!("{}", serde_json::to_string_pretty(manager.sections())?);
            } else {
                print_info(&manager);
            }
        }

        Commands::Export { file } => {
            let manager = load(&file)?;
            let times = collect_measured_times(&manager);
            println!("{}", serde_json::to_string_pretty(&times)?);
        }

        Commands::Columns { file, columns } => {
            let mut manager = load(&file)?;
            manager.set_visible_columns(ColumnSet::parse_delimited(&columns));
            save(&file, &manager)?;
            println!("Columns: {}", manager.visible_columns().to_delimited());
        }

        Commands::Lock { file, off } => {
            let mut manager = load(&file)?;
            manager.set_locked(!off);
            save(&file, &manager)?;
            println!("{}", if off { "Unlocked" } else { "Locked" });
        }

        Commands::Remap {
            file,
            num,
            den,
            offset,
        } => {
            if den == 0 {
                bail!("Mapping denominator must not be zero");
            }
            // Run the stored bytes back through the read-side mapper.
            let reader = BufReader::new(File::open(&file).context("Failed to open timeline file")?);
            let manager = container::read_from(reader, |t| t * num / den + offset)
                .context("Failed to read timeline file")?;
            save(&file, &manager)?;
            println!("Remapped {} sections", manager.len());
        }
    }

    Ok(())
}

fn load(path: &Path) -> Result<SectionManager> {
    let reader = BufReader::new(File::open(path).context("Failed to open timeline file")?);
    container::read_from(reader, |t| t).context("Failed to read timeline file")
}

fn save(path: &Path, manager: &SectionManager) -> Result<()> {
    let writer = BufWriter::new(File::create(path).context("Failed to create timeline file")?);
    container::write_to(manager, writer).context("Failed to write timeline file")
}

fn report_outcome(outcome: ComboOutcome, time: Timestamp) {
    match outcome {
        ComboOutcome::Started => println!("Started section at {}", format_timecode(time)),
        ComboOutcome::Stopped => println!("Stopped section at {}", format_timecode(time)),
        ComboOutcome::Split => println!("Split section at {}", format_timecode(time)),
        ComboOutcome::NoChange => println!("No change"),
    }
}

fn print_info(manager: &SectionManager) {
    println!("Sections: {}", manager.len());
    println!("Locked: {}", manager.locked());
    println!("Columns: {}", manager.visible_columns().to_delimited());

    for (i, section) in manager.sections().iter().enumerate() {
        let name = if section.name.is_empty() {
            (i + 1).to_string()
        } else {
            section.name.clone()
        };
        let end = if section.is_open() {
            "open".to_string()
        } else {
            format_timecode(section.end)
        };
        let tag = if section.tag.is_empty() {
            String::new()
        } else {
            format!(" [{}]", section.tag)
        };
        println!(
            "  {}: {} - {} {}{}",
            name,
            format_timecode(section.start),
            end,
            if section.is_open() {
                String::new()
            } else {
                format_timecode(section.end - section.start)
            },
            tag
        );
    }
}

/// Formats milliseconds as M:SS.mmm timecode.
fn format_timecode(ms: Timestamp) -> String {
    let sign = if ms < 0 { "-" } else { "" };
    let ms = ms.unsigned_abs();
    let minutes = ms / 60_000;
    let seconds = (ms / 1_000) % 60;
    let millis = ms % 1_000;
    format!("{}{}:{:02}.{:03}", sign, minutes, seconds, millis)
}
