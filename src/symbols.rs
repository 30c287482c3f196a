//! Name tables mapping configuration strings to runtime symbols.
//!
//! Four independent tables: modifier names, pointer-button names,
//! layout names, and command names. All are fixed at compile time and
//! read-only, so repeated resolution passes (reloads) share them
//! without synchronization. Lookups are case-sensitive exact matches
//! returning `None` on a miss; callers decide how severe a miss is.

use crate::backend::{Button, ModifierMapping, WindowSystem};
use crate::models::{Command, LayoutId, ModMask};

/// Modifier names and their mask bits, one per modifier slot.
const MODIFIER_NAMES: [(&str, ModMask); 8] = [
    ("Shift", ModMask::SHIFT),
    ("Lock", ModMask::LOCK),
    ("Control", ModMask::CONTROL),
    ("Mod1", ModMask::MOD1),
    ("Mod2", ModMask::MOD2),
    ("Mod3", ModMask::MOD3),
    ("Mod4", ModMask::MOD4),
    ("Mod5", ModMask::MOD5),
];

/// Pointer-button names as written in configuration.
const BUTTON_NAMES: [(&str, Button); 5] = [
    ("1", Button::Left),
    ("2", Button::Middle),
    ("3", Button::Right),
    ("4", Button::ScrollUp),
    ("5", Button::ScrollDown),
];

/// Layout-algorithm names.
const LAYOUT_NAMES: [(&str, LayoutId); 4] = [
    ("tile", LayoutId::Tile),
    ("tileleft", LayoutId::TileLeft),
    ("max", LayoutId::Max),
    ("floating", LayoutId::Floating),
];

/// Command names as written in binding sections.
const COMMAND_NAMES: [(&str, Command); 29] = [
    ("quit", Command::Quit),
    ("restart", Command::Restart),
    ("spawn", Command::Spawn),
    ("exec", Command::Exec),
    ("killclient", Command::KillClient),
    ("moveresize", Command::MoveResize),
    ("settrans", Command::SetTransparency),
    ("setborder", Command::SetBorder),
    ("togglebar", Command::ToggleBar),
    ("focusnext", Command::FocusNext),
    ("focusprev", Command::FocusPrev),
    ("togglemax", Command::ToggleMax),
    ("togglevmax", Command::ToggleVerticalMax),
    ("togglehmax", Command::ToggleHorizontalMax),
    ("zoom", Command::Zoom),
    ("togglefloating", Command::ToggleFloating),
    ("setlayout", Command::SetLayout),
    ("tag", Command::TagClient),
    ("toggletag", Command::ToggleTagClient),
    ("view", Command::View),
    ("toggleview", Command::ToggleView),
    ("viewprevtags", Command::ViewPrevTags),
    ("viewnext", Command::ViewNext),
    ("viewprev", Command::ViewPrev),
    ("setmasterfactor", Command::SetMasterFactor),
    ("setmasters", Command::SetMasters),
    ("setcolumns", Command::SetColumns),
    ("movemouse", Command::MoveMouse),
    ("resizemouse", Command::ResizeMouse),
];

/// Looks up a modifier name, e.g. `"Control"` or `"Mod4"`.
#[must_use]
pub fn lookup_modifier(name: &str) -> Option<ModMask> {
    MODIFIER_NAMES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, mask)| mask)
}

/// Looks up a pointer-button name, `"1"` through `"5"`.
#[must_use]
pub fn lookup_button(name: &str) -> Option<Button> {
    BUTTON_NAMES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, button)| button)
}

/// Looks up a layout-algorithm name.
#[must_use]
pub fn lookup_layout(name: &str) -> Option<LayoutId> {
    LAYOUT_NAMES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, id)| id)
}

/// Looks up a command name.
#[must_use]
pub fn lookup_command(name: &str) -> Option<Command> {
    COMMAND_NAMES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, command)| command)
}

/// Folds a list of modifier names into a single mask.
///
/// Unresolved names contribute nothing, silently; an empty list yields
/// the empty mask. The result is independent of the input order.
#[must_use]
pub fn compose_mask<'a, I>(names: I) -> ModMask
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .filter_map(lookup_modifier)
        .fold(ModMask::NONE, |mask, bit| mask | bit)
}

/// Detects which modifier slot carries Num Lock.
///
/// Scans the window system's modifier-to-keycode mapping once for the
/// keycode producing the Num Lock keysym and returns that slot's mask
/// bit, or the empty mask when no slot carries it. The input subsystem
/// later combines this with declared binding masks so bindings keep
/// firing regardless of the Num Lock toggle state.
#[must_use]
pub fn detect_numlock_mask(ws: &dyn WindowSystem) -> ModMask {
    let Some(numlock) = ws.keysym_to_keycode(crate::backend::Keysym::NUM_LOCK) else {
        return ModMask::NONE;
    };

    let mapping = ws.modifier_mapping();
    let mut mask = ModMask::NONE;
    for slot in 0..ModifierMapping::SLOT_COUNT {
        if mapping.slot(slot).contains(&numlock) {
            mask = ModMask::from_slot(slot);
        }
    }
    mask
}
