//! Button descriptors
//!
//! BDS buttons are presentational; composite widgets only decide *which*
//! buttons to show and with what props. These types are that contract: a
//! renderer turns a [`ButtonProps`] or [`ButtonCircularProps`] into its own
//! element tree.
//!
//! # Example
//!
//! ```rust
//! use bds_core::button::{ButtonCircularProps, ButtonCircularSize, ButtonCircularVariant};
//!
//! let next = ButtonCircularProps::new("Next")
//!     .variant(ButtonCircularVariant::Primary)
//!     .size(ButtonCircularSize::Large)
//!     .controls("carousel__list");
//!
//! assert!(!next.disabled);
//! assert_eq!(next.controls.as_deref(), Some("carousel__list"));
//! ```

use serde::Serialize;

/// Text button visual variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    PrimaryReversed,
    SecondaryReversed,
    /// No background, text only
    Text,
}

/// Text button sizes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonSize {
    Small,
    #[default]
    Regular,
    Medium,
    Large,
}

/// Props for a text button
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ButtonProps {
    pub label: String,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub disabled: bool,
    /// Drop horizontal padding (inline text buttons)
    pub remove_side_spacing: bool,
}

impl ButtonProps {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn remove_side_spacing(mut self, remove: bool) -> Self {
        self.remove_side_spacing = remove;
        self
    }
}

/// Icon-only circular button variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonCircularVariant {
    #[default]
    Basic,
    /// Filled surface with shadow
    Contained,
    Primary,
}

/// Circular button sizes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonCircularSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Props for an icon-only circular button
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ButtonCircularProps {
    /// Accessible label (the button has no visible text)
    pub label: String,
    pub variant: ButtonCircularVariant,
    pub size: ButtonCircularSize,
    pub disabled: bool,
    /// Id of the element this button controls (`aria-controls`)
    pub controls: Option<String>,
}

impl ButtonCircularProps {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn variant(mut self, variant: ButtonCircularVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonCircularSize) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn controls(mut self, id: impl Into<String>) -> Self {
        self.controls = Some(id.into());
        self
    }
}
