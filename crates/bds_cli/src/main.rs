//! BDS CLI
//!
//! Replay scripted host events against a headless carousel and inspect the
//! resulting layout and state.

use anyhow::Result;
use bds_carousel::{Carousel, CarouselLayout, CarouselSnapshot, SnapType};
use bds_core::{IntersectionEntry, Key, ManualClock, PointerEvent, WheelEvent};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;

use config::{KeyTarget, SimulationFile, Step};

#[derive(Parser)]
#[command(name = "bds")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "BDS headless component CLI", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a simulation file against a carousel
    Simulate {
        /// Simulation file (.toml or .json)
        file: PathBuf,

        /// Override the item count from the file
        #[arg(short, long)]
        items: Option<usize>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Include the final render model in the report
        #[arg(long)]
        view: bool,
    },

    /// Compute the layout for a container width
    Layout {
        /// Container clientWidth in px
        #[arg(short, long)]
        width: f32,

        /// Number of items
        #[arg(short, long, default_value = "10")]
        items: usize,

        /// Item width in px
        #[arg(long, default_value = "300")]
        item_width: f32,

        /// Stretch items to the container width
        #[arg(long)]
        full_width: bool,

        /// Snap behaviour
        #[arg(long, value_enum, default_value = "page")]
        snap: SnapArg,

        /// Print the layout as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SnapArg {
    Item,
    Page,
}

impl From<SnapArg> for SnapType {
    fn from(snap: SnapArg) -> Self {
        match snap {
            SnapArg::Item => SnapType::Item,
            SnapArg::Page => SnapType::Page,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Simulate {
            file,
            items,
            json,
            view,
        } => cmd_simulate(&file, items, json, view),

        Commands::Layout {
            width,
            items,
            item_width,
            full_width,
            snap,
            json,
        } => cmd_layout(width, items, item_width, full_width, snap.into(), json),
    }
}

// =============================================================================
// simulate
// =============================================================================

#[derive(Serialize)]
struct StepReport {
    step: usize,
    action: &'static str,
    /// Autoplay advanced the carousel while this step ran
    autoplay_fired: bool,
    state: CarouselSnapshot,
}

#[derive(Serialize)]
struct SimulationReport {
    initial: CarouselSnapshot,
    steps: Vec<StepReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    view: Option<bds_carousel::CarouselView>,
}

fn cmd_simulate(file: &Path, items: Option<usize>, json: bool, with_view: bool) -> Result<()> {
    let simulation = SimulationFile::load(file)?;
    let total_items = items.unwrap_or(simulation.items);

    info!(
        "Simulating {} ({} items, {} steps)",
        simulation.carousel.id,
        total_items,
        simulation.steps.len()
    );

    let clock = ManualClock::new();
    let mut carousel = Carousel::with_clock(simulation.carousel, total_items, clock.clone())?;
    carousel.resize(simulation.container_width);
    carousel.transition_end();

    let initial = carousel.snapshot();
    let mut steps = Vec::with_capacity(simulation.steps.len());

    for (index, step) in simulation.steps.iter().enumerate() {
        debug!(step = index, action = step.name(), "applying step");
        let autoplay_fired = apply_step(&mut carousel, &clock, step);
        // Transitions complete instantly in a headless replay
        carousel.transition_end();

        let state = carousel.snapshot();
        if !json {
            info!(
                "#{:<3} {:<16} page {}/{}  target {:<3} translateX {:>8.1}  autoplay {:?}{}",
                index,
                step.name(),
                state.current_page + 1,
                state.total_pages,
                state.target_index,
                state.translate_x,
                state.autoplay,
                if autoplay_fired { "  (advanced)" } else { "" }
            );
        }
        steps.push(StepReport {
            step: index,
            action: step.name(),
            autoplay_fired,
            state,
        });
    }

    let report = SimulationReport {
        initial,
        steps,
        view: if with_view { carousel.view() } else { None },
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if let Some(view) = &report.view {
        println!("{}", serde_json::to_string_pretty(view)?);
    }

    Ok(())
}

/// Apply one step, then run deferred work. Returns true when autoplay
/// advanced the carousel.
fn apply_step(carousel: &mut Carousel<ManualClock>, clock: &ManualClock, step: &Step) -> bool {
    match step {
        Step::Advance { ms } => {
            // Advance in interval-sized slices so every firing is observed
            let mut fired = false;
            let mut remaining = Duration::from_millis(*ms);
            let slice = carousel.config().interval();
            while remaining > Duration::ZERO {
                let delta = remaining.min(slice);
                clock.advance(delta);
                remaining -= delta;
                fired |= carousel.tick();
            }
            return fired;
        }
        Step::Resize { width } => carousel.resize(*width),
        Step::TrackResize { width } => carousel.set_track_width(*width),
        Step::Items { count } => carousel.set_total_items(*count),
        Step::Next => carousel.next_click(),
        Step::Prev => carousel.prev_click(),
        Step::Indicator { page } => carousel.indicator_click(*page),
        Step::Drag { from, to } => {
            if carousel.list_pointer_down(&PointerEvent::mouse_down(*from)) {
                carousel.document_pointer(&PointerEvent::mouse_move(*to));
                carousel.document_pointer(&PointerEvent::mouse_up(*to));
            } else {
                warn!("drag ignored: list cannot be dragged");
            }
        }
        Step::Thumb { from, to } => {
            if carousel.thumb_pointer_down(&PointerEvent::mouse_down(*from)) {
                carousel.document_pointer(&PointerEvent::mouse_move(*to));
                carousel.document_pointer(&PointerEvent::mouse_up(*to));
            } else {
                warn!("thumb drag ignored: no scrollbar");
            }
        }
        Step::Track { x } => {
            if carousel.track_pointer_down(&PointerEvent::mouse_down(*x)) {
                carousel.document_pointer(&PointerEvent::mouse_up(*x));
            }
        }
        Step::Focus { target, index } => match target {
            KeyTarget::Items => carousel.focus_item(*index),
            KeyTarget::Indicators => carousel.focus_indicator(*index),
            KeyTarget::Scrollbar => {}
        },
        Step::Blur => carousel.blur_indicators(),
        Step::Key { target, key } => {
            let parsed = key.parse::<Key>().unwrap_or(Key::Other);
            let handled = match target {
                KeyTarget::Items => carousel.item_key_down(parsed),
                KeyTarget::Indicators => carousel.indicator_key_down(parsed).is_some(),
                KeyTarget::Scrollbar => carousel.scrollbar_key_down(parsed),
            };
            if !handled {
                warn!("key {:?} not handled by {:?}", key, target);
            }
        }
        Step::Wheel { delta_x } => {
            carousel.wheel(&WheelEvent::horizontal(*delta_x));
        }
        Step::Hover { inside } => {
            if *inside {
                carousel.mouse_enter();
            } else {
                carousel.mouse_leave();
            }
        }
        Step::Visibility { ratio } => {
            let container_id = carousel.config().container_id();
            carousel.intersect(&IntersectionEntry::new(container_id, *ratio));
        }
        Step::AutoplayToggle => carousel.autoplay_button_click(),
        Step::HeaderButton => carousel.header_button_click(),
    }
    carousel.tick()
}

// =============================================================================
// layout
// =============================================================================

fn cmd_layout(
    width: f32,
    items: usize,
    item_width: f32,
    full_width: bool,
    snap: SnapType,
    json: bool,
) -> Result<()> {
    if !(item_width.is_finite() && item_width > 0.0) {
        anyhow::bail!("Invalid item width {}", item_width);
    }

    let layout = CarouselLayout::compute("carousel", items, item_width, full_width, snap, width);

    if json {
        println!("{}", serde_json::to_string_pretty(&layout)?);
        return Ok(());
    }

    info!(
        "{} items in {}px: {} per page, {} pages, max translateX {}",
        items, width, layout.items_per_page, layout.total_pages, layout.max_translate_x
    );
    for (index, item) in layout.coordinates.iter().enumerate() {
        println!("{:>4}  {:>9.1}  {:>9.1}", index, item.left, item.right);
    }
    Ok(())
}
