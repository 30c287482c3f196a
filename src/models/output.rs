//! Per-output configuration: visual settings, layouts, and tags.

use crate::backend::{Color, Font};
use serde::{Deserialize, Serialize};

/// Identity of a window-arrangement algorithm.
///
/// The resolver only references layouts by identity; the arrangement
/// code itself lives with the window-management engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutId {
    /// Master area on the left, stack on the right.
    Tile,
    /// Master area on the right, stack on the left.
    TileLeft,
    /// Focused window fills the output.
    Max,
    /// No automatic arrangement.
    Floating,
}

/// One slot in an output's ordered layout list.
///
/// A slot whose declared title failed layout lookup keeps its place in
/// the list with both fields absent, so list length always equals the
/// declared count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutEntry {
    /// Short display label shown in the status bar, absent when the
    /// declared title did not resolve.
    pub symbol: Option<String>,
    /// The arrangement algorithm, absent when the declared title did
    /// not resolve.
    pub algorithm: Option<LayoutId>,
}

/// A virtual-desktop grouping of windows.
///
/// Exactly one tag per output is selected after resolution: the first
/// in declared order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tag {
    /// Tag name as declared.
    pub name: String,
    /// Whether this tag is currently shown.
    pub selected: bool,
    /// Whether this tag was shown before the last view change.
    pub was_selected: bool,
    /// Index into the owning output's layout list.
    pub layout: usize,
    /// Fraction of the output occupied by the master area. Expected in
    /// (0, 1) but not validated.
    pub master_factor: f64,
    /// Number of windows in the master area.
    pub masters: u32,
    /// Number of stack columns.
    pub columns: u32,
}

/// Status bar placement on an output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusbarPosition {
    /// Along the top edge.
    #[default]
    Top,
    /// Along the bottom edge.
    Bottom,
    /// Along the left edge.
    Left,
    /// Along the right edge.
    Right,
    /// No status bar.
    Off,
}

impl StatusbarPosition {
    /// Parses a declared position, falling back to the top for anything
    /// unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "off" => Self::Off,
            "bottom" => Self::Bottom,
            "left" => Self::Left,
            "right" => Self::Right,
            _ => Self::Top,
        }
    }
}

/// Border, background, and foreground colors for one window state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorScheme {
    /// Window border color.
    pub border: Color,
    /// Background color.
    pub background: Color,
    /// Foreground (text) color.
    pub foreground: Color,
}

/// Reserved space at the edges of an output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Padding {
    /// Inset from the top edge, in pixels.
    pub top: i32,
    /// Inset from the bottom edge, in pixels.
    pub bottom: i32,
    /// Inset from the left edge, in pixels.
    pub left: i32,
    /// Inset from the right edge, in pixels.
    pub right: i32,
}

/// Fully resolved settings for one display output.
///
/// Created once per output during resolution and immutable afterwards;
/// a reload produces a fresh value rather than mutating this one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputConfig {
    /// Window border width in pixels.
    pub border_width: u32,
    /// Edge-snap distance in pixels for floating moves.
    pub snap: u32,
    /// Whether to honor client resize hints.
    pub resize_hints: bool,
    /// Opacity percentage applied to unfocused windows.
    pub opacity_unfocused: u32,
    /// Whether focus follows the pointer onto a window.
    pub focus_follows_pointer: bool,
    /// Whether floating windows may be lowered below tiled ones.
    pub allow_lower_floats: bool,
    /// Font used for this output's status bar and titles.
    pub font: Font,
    /// Colors for unfocused windows.
    pub normal_colors: ColorScheme,
    /// Colors for the focused window.
    pub focus_colors: ColorScheme,
    /// Status bar placement.
    pub statusbar: StatusbarPosition,
    /// Ordered layout list, one entry per declared layout.
    pub layouts: Vec<LayoutEntry>,
    /// Ordered tag list, one entry per declared tag.
    pub tags: Vec<Tag>,
    /// Reserved edge space.
    pub padding: Padding,
}
