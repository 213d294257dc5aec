//! Simulation file handling
//!
//! A simulation file describes one carousel and a script of host events to
//! replay against it:
//!
//! ```toml
//! items = 20
//! container_width = 948
//!
//! [carousel]
//! id = "picks"
//! autoplay = true
//!
//! [carousel.labels]
//! next_button = "Next"
//! # ...
//!
//! [[steps]]
//! action = "advance"
//! ms = 5000
//!
//! [[steps]]
//! action = "drag"
//! from = 600
//! to = 200
//! ```

use anyhow::{Context, Result};
use bds_carousel::CarouselConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// =============================================================================
// Simulation
// =============================================================================

#[derive(Debug, Deserialize, Serialize)]
pub struct SimulationFile {
    pub carousel: CarouselConfig,
    #[serde(default = "default_items")]
    pub items: usize,
    /// Initial container `clientWidth`
    #[serde(default = "default_container_width")]
    pub container_width: f32,
    #[serde(default)]
    pub steps: Vec<Step>,
}

fn default_items() -> usize {
    10
}

fn default_container_width() -> f32 {
    948.0
}

impl SimulationFile {
    /// Load a simulation from a TOML or JSON file, picked by extension
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let simulation: Self = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?,
            _ => toml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?,
        };

        simulation
            .carousel
            .validate()
            .with_context(|| format!("Invalid carousel in {}", path.display()))?;
        Ok(simulation)
    }
}

// =============================================================================
// Steps
// =============================================================================

/// Which focusable region receives a key press
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyTarget {
    #[default]
    Items,
    Indicators,
    Scrollbar,
}

/// One scripted host event
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Step {
    /// Let time pass
    Advance { ms: u64 },
    /// Container resized
    Resize { width: f32 },
    /// Scrollbar track resized
    TrackResize { width: f32 },
    /// Item count changed
    Items { count: usize },
    Next,
    Prev,
    /// Click on a page indicator
    Indicator { page: usize },
    /// Drag the list from `from` to `to` (client x)
    Drag { from: f32, to: f32 },
    /// Drag the scrollbar thumb
    Thumb { from: f32, to: f32 },
    /// Press the scrollbar track at `x`, relative to the track
    Track { x: f32 },
    /// Focus an item or indicator
    Focus {
        #[serde(default)]
        target: KeyTarget,
        index: usize,
    },
    /// Focus left the pagination
    Blur,
    /// Key press; `key` is a DOM key name
    Key {
        #[serde(default)]
        target: KeyTarget,
        key: String,
    },
    Wheel { delta_x: f32 },
    /// Pointer entered or left the list
    Hover { inside: bool },
    /// Visible fraction of the container
    Visibility { ratio: f32 },
    /// Footer play/pause button
    AutoplayToggle,
    HeaderButton,
}

impl Step {
    /// Short name used in logs and reports
    pub fn name(&self) -> &'static str {
        match self {
            Step::Advance { .. } => "advance",
            Step::Resize { .. } => "resize",
            Step::TrackResize { .. } => "track-resize",
            Step::Items { .. } => "items",
            Step::Next => "next",
            Step::Prev => "prev",
            Step::Indicator { .. } => "indicator",
            Step::Drag { .. } => "drag",
            Step::Thumb { .. } => "thumb",
            Step::Track { .. } => "track",
            Step::Focus { .. } => "focus",
            Step::Blur => "blur",
            Step::Key { .. } => "key",
            Step::Wheel { .. } => "wheel",
            Step::Hover { .. } => "hover",
            Step::Visibility { .. } => "visibility",
            Step::AutoplayToggle => "autoplay-toggle",
            Step::HeaderButton => "header-button",
        }
    }
}
