//! Layout mode derived from the viewport width.
//!
//! Computed once by the app on resize and handed to every consumer,
//! rather than each component measuring the window itself.

use serde::Serialize;

/// Widths below this are treated as phones.
pub const MOBILE_BREAKPOINT: u32 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Bottom sheet panel, collapsible legend, lower default zoom.
    Mobile,
    /// Side sheet panel, fixed legend.
    Desktop,
}

impl LayoutMode {
    pub fn from_width(width: u32) -> Self {
        if width < MOBILE_BREAKPOINT {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == LayoutMode::Mobile
    }
}

/// Primary input device; touch suppresses hover tooltips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    Pointer,
    Touch,
}
