// Day Timeline
// Command line entry point: lays out a day's events and resolves press positions

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;

use day_timeline::models::event::EventDescriptor;
use day_timeline::models::layout::{Frame, LayoutAttributes};
use day_timeline::models::settings::TimelineSettings;
use day_timeline::models::timeline::LayoutStrategy;
use day_timeline::services::layout::OverlapLayoutEngine;
use day_timeline::services::settings::SettingsService;
use day_timeline::services::time_axis::TimeAxisMapper;

/// Lay out a day's events on a 24-hour timeline
#[derive(Parser, Debug)]
#[command(name = "day-timeline")]
#[command(version)]
#[command(about = "Lay out a day's events on a 24-hour timeline")]
struct Args {
    /// Path to the settings file (defaults to the per-user config dir)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the frame of every event as JSON
    Layout {
        /// JSON array of events
        #[arg(long)]
        events: PathBuf,

        /// Day being displayed (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,

        /// Container width in pixels
        #[arg(long)]
        width: f32,

        /// Override the configured layout strategy (reference or packed)
        #[arg(long)]
        strategy: Option<LayoutStrategy>,
    },
    /// Print the time under a vertical position as HH:MM
    Press {
        /// Y coordinate in the timeline container
        #[arg(long, allow_negative_numbers = true)]
        y: f32,
    },
    /// Write a settings file with default values
    InitSettings {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Serialize)]
struct PlacedEvent {
    id: String,
    title: String,
    column: usize,
    columns: usize,
    frame: Frame,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let service = match &args.settings {
        Some(path) => SettingsService::new(path),
        None => SettingsService::with_default_path(),
    };

    match args.command {
        Command::Layout {
            events,
            date,
            width,
            strategy,
        } => {
            let mut settings = service.load()?;
            if let Some(strategy) = strategy {
                settings.strategy = strategy;
            }
            let placed = run_layout(&events, date, width, &settings)?;
            println!("{}", serde_json::to_string_pretty(&placed)?);
        }
        Command::Press { y } => {
            let settings = service.load()?;
            let mapper = TimeAxisMapper::new(NaiveDate::default(), settings.to_config(0.0));
            let (hour, minute) = mapper.y_to_time(y);
            println!("{:02}:{:02}", hour, minute);
        }
        Command::InitSettings { force } => {
            if service.path().exists() && !force {
                bail!(
                    "Settings file {} already exists (use --force to overwrite)",
                    service.path().display()
                );
            }
            service.reset()?;
            log::info!("Wrote default settings to {}", service.path().display());
        }
    }

    Ok(())
}

fn run_layout(
    path: &Path,
    date: NaiveDate,
    width: f32,
    settings: &TimelineSettings,
) -> Result<Vec<PlacedEvent>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read events from {}", path.display()))?;
    let descriptors: Vec<EventDescriptor> = serde_json::from_str(&data)
        .with_context(|| format!("failed to parse events from {}", path.display()))?;

    log::info!("Laying out {} events for {}", descriptors.len(), date);
    for descriptor in &descriptors {
        // Invalid events are still drawn; the layout degrades instead of failing.
        if let Err(reason) = descriptor.validate() {
            log::warn!("{}", reason);
        }
    }

    let config = settings.to_config(width);
    let engine = OverlapLayoutEngine::for_config(&config);
    let mut attributes: Vec<LayoutAttributes> = descriptors.into_iter().map(Into::into).collect();
    engine.layout(&mut attributes, date, config);
    let slots = engine.column_slots(&attributes);

    Ok(attributes
        .iter()
        .zip(slots)
        .map(|(attrs, slot)| PlacedEvent {
            id: attrs.descriptor.id.clone(),
            title: attrs.descriptor.payload.title.clone(),
            column: slot.column,
            columns: slot.columns,
            frame: attrs.frame,
        })
        .collect())
}
