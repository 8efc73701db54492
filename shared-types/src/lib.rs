//! Shared types for the desktop window UI
//!
//! These types describe:
//! - window configuration (size, colors, flags, initial position)
//! - drag positions reported back to hosting pages
//! - viewport breakpoints used to pick a window layout
//!
//! Serializable with serde so window presets can be loaded from JSON.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ============================================================================
// Constants
// ============================================================================

/// Background used when a window is given no color (or an empty one).
pub const DEFAULT_BACKGROUND: &str = "#a8a9ae";

/// Default declared width, in pixels.
pub const DEFAULT_WINDOW_WIDTH: f64 = 1024.0;

/// Default declared height, as a CSS size.
pub const DEFAULT_WINDOW_HEIGHT: &str = "90%";

/// Stacking value of every window that is not focused.
pub const BASE_Z_INDEX: u32 = 0;

/// Stacking value of the focused window.
pub const FOCUSED_Z_INDEX: u32 = 50;

// ============================================================================
// Identity
// ============================================================================

/// Unique identifier for a mounted window instance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[ts(export, export_to = "../../desktop-ui/src/types/generated.ts")]
pub struct WindowId(pub String);

impl WindowId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for WindowId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// Offset of a window from its default placement, in logical pixels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default, TS)]
#[ts(export, export_to = "../../desktop-ui/src/types/generated.ts")]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset by a pointer delta.
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// A declared window size: plain pixels or any CSS length
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(untagged)]
#[ts(export, export_to = "../../desktop-ui/src/types/generated.ts")]
pub enum Dimension {
    Px(f64),
    Css(String),
}

impl Dimension {
    /// CSS value for this size. Pixel sizes get a `px` suffix, CSS strings
    /// pass through verbatim.
    pub fn to_css(&self) -> String {
        match self {
            Dimension::Px(px) => format!("{px}px"),
            Dimension::Css(css) => css.clone(),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl From<f64> for Dimension {
    fn from(px: f64) -> Self {
        Dimension::Px(px)
    }
}

impl From<u32> for Dimension {
    fn from(px: u32) -> Self {
        Dimension::Px(px as f64)
    }
}

impl From<i32> for Dimension {
    fn from(px: i32) -> Self {
        Dimension::Px(px as f64)
    }
}

impl From<&str> for Dimension {
    fn from(css: &str) -> Self {
        Dimension::Css(css.to_string())
    }
}

impl From<String> for Dimension {
    fn from(css: String) -> Self {
        Dimension::Css(css)
    }
}

// ============================================================================
// Viewport
// ============================================================================

/// Viewport widths (logical pixels) that switch window behavior
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(default)]
#[ts(export, export_to = "../../desktop-ui/src/types/generated.ts")]
pub struct Breakpoints {
    /// Dragging needs a viewport strictly wider than this.
    pub drag_min_width: u32,
    /// First width of the tablet layout; anything narrower is a phone.
    pub tablet: u32,
    /// First width of the laptop layout.
    pub laptop: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            drag_min_width: 768,
            tablet: 768,
            laptop: 1024,
        }
    }
}

// ============================================================================
// Window configuration
// ============================================================================

/// Configuration of one window instance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(default)]
#[ts(export, export_to = "../../desktop-ui/src/types/generated.ts")]
pub struct WindowConfig {
    pub title: Option<String>,
    pub width: Dimension,
    pub height: Dimension,
    pub background: Option<String>,
    pub full_screen: bool,
    pub only_full_screen: bool,
    pub scrollable: bool,
    pub hide_wallet_address: bool,
    pub pos_x: f64,
    pub pos_y: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: None,
            width: Dimension::Px(DEFAULT_WINDOW_WIDTH),
            height: Dimension::Css(DEFAULT_WINDOW_HEIGHT.to_string()),
            background: None,
            full_screen: false,
            only_full_screen: false,
            scrollable: false,
            hide_wallet_address: false,
            pos_x: 0.0,
            pos_y: 0.0,
        }
    }
}

impl WindowConfig {
    /// Load a window preset from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn background(&self) -> &str {
        resolve_background(self.background.as_deref())
    }

    pub fn initial_position(&self) -> Position {
        Position::new(self.pos_x, self.pos_y)
    }
}

/// Background color to paint: the given value unless it is missing or empty.
pub fn resolve_background(background: Option<&str>) -> &str {
    match background {
        Some(color) if !color.is_empty() => color,
        _ => DEFAULT_BACKGROUND,
    }
}

// ============================================================================
// Tests
// ============================================================================
