//! Carousel configuration
//!
//! [`CarouselConfig`] mirrors the props a host passes to the carousel. It
//! deserializes from TOML/JSON with the same defaults the builder uses, and
//! [`CarouselConfig::validate`] rejects configurations the engine cannot
//! run with.
//!
//! ```toml
//! id = "featured"
//! item_width = 300
//! snap_type = "page"
//! pagination_type = "indicator"
//! nav_button_placement = "body"
//! autoplay = true
//!
//! [labels]
//! next_button = "Next"
//! prev_button = "Previous"
//! pause_button = "Pause autoplay"
//! resume_button = "Resume autoplay"
//! pagination = "Pagination for featured carousel"
//! pagination_indicator = "Page %s of %s in featured carousel"
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_AUTOPLAY_INTERVAL_MS, DEFAULT_ITEM_HEIGHT, DEFAULT_ITEM_WIDTH};
use crate::error::{CarouselError, Result};

// =============================================================================
// Variants
// =============================================================================

/// What a navigation step snaps to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SnapType {
    /// Every item is a stop
    Item,
    /// Only the first item of each page is a stop
    #[default]
    Page,
}

/// Footer pagination control
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaginationType {
    #[default]
    Indicator,
    Scrollbar,
    None,
}

/// Where the prev/next arrow buttons are rendered
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavButtonPlacement {
    Header,
    #[default]
    Body,
    BodyPrimary,
    Footer,
    None,
}

// =============================================================================
// Labels
// =============================================================================

/// Accessible labels the carousel cannot render without
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselLabels {
    /// e.g. `Next`
    pub next_button: String,
    /// e.g. `Previous`
    pub prev_button: String,
    /// e.g. `Pause autoplay`
    pub pause_button: String,
    /// e.g. `Resume autoplay`
    pub resume_button: String,
    /// e.g. `Pagination for Featured carousel`
    pub pagination: String,
    /// Template with two `%s` slots, e.g. `Page %s of %s in Featured carousel`
    pub pagination_indicator: String,
}

impl CarouselLabels {
    /// Name of the first empty label, if any
    pub fn first_missing(&self) -> Option<&'static str> {
        [
            ("next_button", &self.next_button),
            ("prev_button", &self.prev_button),
            ("pause_button", &self.pause_button),
            ("resume_button", &self.resume_button),
            ("pagination", &self.pagination),
            ("pagination_indicator", &self.pagination_indicator),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }
}

// =============================================================================
// Config
// =============================================================================

/// Full carousel configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Element id; item and list ids are derived from it
    pub id: String,
    #[serde(default = "default_item_height")]
    pub item_height: f32,
    /// Ignored when `is_full_width` is set
    #[serde(default = "default_item_width")]
    pub item_width: f32,
    #[serde(default)]
    pub is_full_width: bool,
    #[serde(default)]
    pub snap_type: SnapType,
    #[serde(default)]
    pub pagination_type: PaginationType,
    #[serde(default)]
    pub nav_button_placement: NavButtonPlacement,
    /// Only takes effect with indicator pagination
    #[serde(default)]
    pub autoplay: bool,
    #[serde(default = "default_autoplay_interval_ms")]
    pub autoplay_interval_ms: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub header_button_label: Option<String>,
    pub labels: CarouselLabels,
}

fn default_item_height() -> f32 {
    DEFAULT_ITEM_HEIGHT
}

fn default_item_width() -> f32 {
    DEFAULT_ITEM_WIDTH
}

fn default_autoplay_interval_ms() -> u64 {
    DEFAULT_AUTOPLAY_INTERVAL_MS
}

impl CarouselConfig {
    pub fn new(id: impl Into<String>, labels: CarouselLabels) -> Self {
        Self {
            id: id.into(),
            item_height: DEFAULT_ITEM_HEIGHT,
            item_width: DEFAULT_ITEM_WIDTH,
            is_full_width: false,
            snap_type: SnapType::default(),
            pagination_type: PaginationType::default(),
            nav_button_placement: NavButtonPlacement::default(),
            autoplay: false,
            autoplay_interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
            title: None,
            subtitle: None,
            header_button_label: None,
            labels,
        }
    }

    pub fn item_width(mut self, width: f32) -> Self {
        self.item_width = width;
        self
    }

    pub fn item_height(mut self, height: f32) -> Self {
        self.item_height = height;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.is_full_width = full_width;
        self
    }

    pub fn snap_type(mut self, snap_type: SnapType) -> Self {
        self.snap_type = snap_type;
        self
    }

    pub fn pagination_type(mut self, pagination_type: PaginationType) -> Self {
        self.pagination_type = pagination_type;
        self
    }

    pub fn nav_button_placement(mut self, placement: NavButtonPlacement) -> Self {
        self.nav_button_placement = placement;
        self
    }

    pub fn autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn autoplay_interval(mut self, interval: Duration) -> Self {
        self.autoplay_interval_ms = interval.as_millis() as u64;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn header_button_label(mut self, label: impl Into<String>) -> Self {
        self.header_button_label = Some(label.into());
        self
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    /// Autoplay only runs alongside indicator pagination
    pub fn has_effective_autoplay(&self) -> bool {
        self.autoplay && self.pagination_type == PaginationType::Indicator
    }

    /// Id of the item list, referenced by `aria-controls`
    pub fn list_id(&self) -> String {
        format!("{}__list", self.id)
    }

    /// Id of the list container, the element resize and intersection
    /// observers watch
    pub fn container_id(&self) -> String {
        format!("{}__container", self.id)
    }

    /// Id of the scrollbar track
    pub fn track_id(&self) -> String {
        format!("{}__scrollbar-track", self.id)
    }

    pub fn item_id(&self, index: usize) -> String {
        item_id(&self.id, index)
    }

    /// Check everything the engine relies on
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(CarouselError::InvalidConfig("id must not be empty".into()));
        }
        if let Some(name) = self.labels.first_missing() {
            return Err(CarouselError::InvalidConfig(format!(
                "label `{}` must not be empty",
                name
            )));
        }
        if !(self.item_width.is_finite() && self.item_width > 0.0) {
            return Err(CarouselError::InvalidConfig(format!(
                "item_width must be positive, got {}",
                self.item_width
            )));
        }
        if !(self.item_height.is_finite() && self.item_height > 0.0) {
            return Err(CarouselError::InvalidConfig(format!(
                "item_height must be positive, got {}",
                self.item_height
            )));
        }
        if self.autoplay_interval_ms == 0 {
            return Err(CarouselError::InvalidConfig(
                "autoplay_interval_ms must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

/// `"{carousel_id}__list-item-{index}"`
pub fn item_id(carousel_id: &str, index: usize) -> String {
    format!("{}__list-item-{}", carousel_id, index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> CarouselLabels {
        CarouselLabels {
            next_button: "Next".into(),
            prev_button: "Previous".into(),
            pause_button: "Pause autoplay".into(),
            resume_button: "Resume autoplay".into(),
            pagination: "Pagination".into(),
            pagination_indicator: "Page %s of %s".into(),
        }
    }

    #[test]
    fn test_defaults() {
        let config = CarouselConfig::new("featured", labels());
        assert_eq!(config.item_width, 300.0);
        assert_eq!(config.item_height, 200.0);
        assert_eq!(config.snap_type, SnapType::Page);
        assert_eq!(config.pagination_type, PaginationType::Indicator);
        assert_eq!(config.nav_button_placement, NavButtonPlacement::Body);
        assert_eq!(config.interval(), Duration::from_millis(5000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_derived_ids() {
        let config = CarouselConfig::new("featured", labels());
        assert_eq!(config.list_id(), "featured__list");
        assert_eq!(config.item_id(3), "featured__list-item-3");
    }

    #[test]
    fn test_effective_autoplay_requires_indicator() {
        let config = CarouselConfig::new("c", labels()).autoplay(true);
        assert!(config.has_effective_autoplay());

        let config = config.pagination_type(PaginationType::Scrollbar);
        assert!(!config.has_effective_autoplay());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut missing_label = labels();
        missing_label.pagination_indicator.clear();
        let err = CarouselConfig::new("c", missing_label).validate().unwrap_err();
        assert!(matches!(err, CarouselError::InvalidConfig(msg) if msg.contains("pagination_indicator")));

        assert!(CarouselConfig::new(" ", labels()).validate().is_err());
        assert!(CarouselConfig::new("c", labels())
            .item_width(0.0)
            .validate()
            .is_err());
        assert!(CarouselConfig::new("c", labels())
            .item_height(f32::NAN)
            .validate()
            .is_err());
        assert!(CarouselConfig::new("c", labels())
            .autoplay_interval(Duration::ZERO)
            .validate()
            .is_err());
    }

    #[test]
    fn test_parse_toml_with_defaults() {
        let config: CarouselConfig = toml::from_str(
            r#"
            id = "featured"
            snap_type = "item"
            nav_button_placement = "body-primary"
            autoplay = true

            [labels]
            next_button = "Next"
            prev_button = "Previous"
            pause_button = "Pause"
            resume_button = "Resume"
            pagination = "Pagination"
            pagination_indicator = "Page %s of %s"
            "#,
        )
        .unwrap();

        assert_eq!(config.snap_type, SnapType::Item);
        assert_eq!(config.nav_button_placement, NavButtonPlacement::BodyPrimary);
        assert_eq!(config.item_width, 300.0);
        assert_eq!(config.autoplay_interval_ms, 5000);
        assert!(config.has_effective_autoplay());
    }
}
