//! Input bindings: modifier masks, command identities, and the binding
//! node types.

use crate::backend::{Button, Keysym};
use serde::{Deserialize, Serialize};
use std::ops::{BitOr, BitOrAssign};

/// Bitmask of modifier keys.
///
/// Bit positions follow the eight conventional modifier slots; the bits
/// themselves are opaque to everything except the input subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ModMask(pub u32);

impl ModMask {
    /// No modifiers.
    pub const NONE: Self = Self(0);
    /// Shift.
    pub const SHIFT: Self = Self(1 << 0);
    /// Caps Lock.
    pub const LOCK: Self = Self(1 << 1);
    /// Control.
    pub const CONTROL: Self = Self(1 << 2);
    /// Mod1, usually Alt.
    pub const MOD1: Self = Self(1 << 3);
    /// Mod2, usually Num Lock.
    pub const MOD2: Self = Self(1 << 4);
    /// Mod3.
    pub const MOD3: Self = Self(1 << 5);
    /// Mod4, usually the Super key.
    pub const MOD4: Self = Self(1 << 6);
    /// Mod5.
    pub const MOD5: Self = Self(1 << 7);

    /// Mask bit for the given modifier slot, `NONE` when out of range.
    #[must_use]
    pub const fn from_slot(slot: usize) -> Self {
        if slot < 8 {
            Self(1 << slot)
        } else {
            Self::NONE
        }
    }

    /// Returns true if every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns true if no bits are set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for ModMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ModMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Identity of a runtime command.
///
/// This is every action the window manager can dispatch from a binding.
/// The resolver only records which command a binding names; execution
/// is the window-management engine's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Exit the window manager.
    Quit,
    /// Re-execute the window manager in place.
    Restart,
    /// Run a program in the background.
    Spawn,
    /// Replace the window manager process with a program.
    Exec,
    /// Close the focused window.
    KillClient,
    /// Move/resize the focused floating window by a geometry argument.
    MoveResize,
    /// Set the focused window's transparency.
    SetTransparency,
    /// Set the border width.
    SetBorder,
    /// Toggle the status bar.
    ToggleBar,
    /// Focus the next window.
    FocusNext,
    /// Focus the previous window.
    FocusPrev,
    /// Toggle fullscreen maximization of the focused window.
    ToggleMax,
    /// Toggle vertical maximization.
    ToggleVerticalMax,
    /// Toggle horizontal maximization.
    ToggleHorizontalMax,
    /// Swap the focused window with the master.
    Zoom,
    /// Toggle floating state of the focused window.
    ToggleFloating,
    /// Switch the selected tag's layout.
    SetLayout,
    /// Move the focused window to a tag.
    TagClient,
    /// Toggle a tag on the focused window.
    ToggleTagClient,
    /// View a tag.
    View,
    /// Toggle viewing of a tag.
    ToggleView,
    /// Return to the previously viewed tags.
    ViewPrevTags,
    /// View the next tag in order.
    ViewNext,
    /// View the previous tag in order.
    ViewPrev,
    /// Adjust the master area fraction.
    SetMasterFactor,
    /// Adjust the master window count.
    SetMasters,
    /// Adjust the stack column count.
    SetColumns,
    /// Drag-move a window with the pointer.
    MoveMouse,
    /// Drag-resize a window with the pointer.
    ResizeMouse,
}

/// One input binding, generic over its trigger.
///
/// An unresolved trigger or command leaves the binding in place but
/// inert; the node still occupies its declared position in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Binding<T> {
    /// Modifier combination that must be held.
    pub modifiers: ModMask,
    /// What fires the binding, absent when the declared name did not
    /// resolve.
    pub trigger: T,
    /// Command to dispatch, absent when the declared name did not
    /// resolve.
    pub command: Option<Command>,
    /// Free-form argument passed to the command. Forced absent for
    /// binding kinds that do not carry arguments.
    pub argument: Option<String>,
}

/// A keyboard binding.
pub type KeyBinding = Binding<Option<Keysym>>;

/// A pointer-button binding.
pub type ButtonBinding = Binding<Option<Button>>;

/// The five pointer-binding lists, keyed by the UI region they act on.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PointerBindings {
    /// Clicks on a tag name in the status bar. Not argument-bearing.
    pub tag: Vec<ButtonBinding>,
    /// Clicks on the layout symbol in the status bar.
    pub layout: Vec<ButtonBinding>,
    /// Clicks on the title area of the status bar.
    pub title: Vec<ButtonBinding>,
    /// Clicks on the root window.
    pub root: Vec<ButtonBinding>,
    /// Clicks on client windows.
    pub client: Vec<ButtonBinding>,
}
