//! Shared control, overlay, and data-display primitives.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

mod controls;
mod data_display;
mod overlays;

pub use controls::{Button, CheckboxField, ProgressBar, TextField};
pub use data_display::{Badge, DataTable, EmptyState, Surface};
pub use overlays::{Modal, Toast, ToastRegion};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Semantic surface variants for structural primitives.
pub enum SurfaceVariant {
    /// Primary surface.
    #[default]
    Standard,
    /// Inset surface, used for drop targets.
    Inset,
}

impl SurfaceVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Inset => "inset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Standard action button.
    #[default]
    Standard,
    /// Primary emphasized action button.
    Primary,
    /// Quiet style button.
    Quiet,
    /// Danger/destructive button.
    Danger,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Quiet => "quiet",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    #[default]
    Md,
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared input-field variants.
pub enum FieldVariant {
    /// Standard input.
    #[default]
    Standard,
    /// Inset input, used inside toolbars.
    Inset,
}

impl FieldVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Inset => "inset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared text tone, also used for badges and toasts.
pub enum TextTone {
    /// Primary text.
    Primary,
    /// Secondary text.
    #[default]
    Secondary,
    /// Informational tone.
    Info,
    /// Success/status tone.
    Success,
    /// Warning tone.
    Warning,
    /// Danger tone.
    Danger,
}

impl TextTone {
    /// Stable token rendered into `data-ui-tone`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared progress variants.
pub enum ProgressVariant {
    /// Standard progress indicator.
    #[default]
    Standard,
    /// Nearing capacity.
    Warning,
    /// At or over capacity.
    Danger,
}

impl ProgressVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_class_is_appended_only_when_present() {
        assert_eq!(merge_layout_class("ui-button", None), "ui-button");
        assert_eq!(merge_layout_class("ui-button", Some("")), "ui-button");
        assert_eq!(
            merge_layout_class("ui-checkbox", Some("file-checkbox")),
            "ui-checkbox file-checkbox"
        );
    }

    #[test]
    fn tone_tokens_match_dom_contract() {
        assert_eq!(TextTone::default().token(), "secondary");
        assert_eq!(TextTone::Danger.token(), "danger");
        assert_eq!(ProgressVariant::Warning.token(), "warning");
        assert_eq!(bool_token(true), "true");
        assert_eq!(SurfaceVariant::default().token(), "standard");
        assert_eq!(SurfaceVariant::Inset.token(), "inset");
    }
}
