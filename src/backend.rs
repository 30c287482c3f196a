//! Window-system collaborator boundary.
//!
//! The resolver never talks to a display server directly. Everything it
//! needs from one is behind the [`WindowSystem`] trait: output
//! enumeration, the live modifier-to-keycode mapping, keysym name
//! translation, and color/font allocation. [`StaticWindowSystem`] is a
//! self-contained implementation used by the checker binary and tests.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// A key symbol, the display server's identity for a named key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Keysym(pub u32);

impl Keysym {
    /// The Num Lock key symbol.
    pub const NUM_LOCK: Self = Self(0xff7f);
}

/// A hardware key code as reported by the input subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keycode(pub u8);

/// Pointer button identity.
///
/// Configuration names buttons `"1"` through `"5"`; see
/// [`crate::symbols::lookup_button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Button {
    /// Button 1, usually the left button.
    Left,
    /// Button 2, usually the middle button or wheel press.
    Middle,
    /// Button 3, usually the right button.
    Right,
    /// Button 4, wheel scroll up.
    ScrollUp,
    /// Button 5, wheel scroll down.
    ScrollDown,
}

/// An allocated color, reduced to the pixel value the display server
/// hands back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Display-server pixel value.
    pub pixel: u32,
}

/// An opened font handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Font {
    /// The name the font was opened under.
    pub name: String,
}

/// Snapshot of the modifier-to-keycode mapping.
///
/// Eight modifier slots (Shift, Lock, Control, Mod1 through Mod5), each
/// holding the keycodes currently bound to that slot. Which slot carries
/// Num Lock is a hardware/session detail, which is why
/// [`crate::symbols::detect_numlock_mask`] has to scan this at startup
/// instead of reading it from configuration.
#[derive(Debug, Clone, Default)]
pub struct ModifierMapping {
    slots: Vec<Vec<Keycode>>,
}

impl ModifierMapping {
    /// Number of modifier slots in a mapping.
    pub const SLOT_COUNT: usize = 8;

    /// Creates a mapping from per-slot keycode lists.
    ///
    /// Missing slots are treated as empty; extra slots are dropped.
    #[must_use]
    pub fn new(mut slots: Vec<Vec<Keycode>>) -> Self {
        slots.resize_with(Self::SLOT_COUNT, Vec::new);
        Self { slots }
    }

    /// Keycodes bound to the given slot, empty for out-of-range slots.
    #[must_use]
    pub fn slot(&self, index: usize) -> &[Keycode] {
        self.slots.get(index).map_or(&[], Vec::as_slice)
    }
}

/// Everything the resolver consumes from the display server.
///
/// All calls are synchronous; the resolver queries outputs and the
/// modifier mapping once per resolution pass. Color and font allocation
/// failures are unrecoverable startup errors, so both return `Result`.
pub trait WindowSystem {
    /// Number of managed display outputs.
    fn output_count(&self) -> usize;

    /// Current modifier-to-keycode mapping.
    fn modifier_mapping(&self) -> ModifierMapping;

    /// Translates a key name from the configuration into a keysym.
    fn keysym_from_name(&self, name: &str) -> Option<Keysym>;

    /// Keycode currently producing the given keysym, if any.
    fn keysym_to_keycode(&self, keysym: Keysym) -> Option<Keycode>;

    /// Allocates a color on the given output.
    fn alloc_color(&self, output: usize, spec: &str) -> Result<Color>;

    /// Opens a font by name on the given output.
    fn open_font(&self, output: usize, name: &str) -> Result<Font>;
}

/// Keysym names understood by [`StaticWindowSystem`].
///
/// Single printable ASCII characters resolve to their codepoint and do
/// not need a table entry.
const KEYSYM_NAMES: &[(&str, u32)] = &[
    ("Return", 0xff0d),
    ("space", 0x0020),
    ("Tab", 0xff09),
    ("Escape", 0xff1b),
    ("BackSpace", 0xff08),
    ("Delete", 0xffff),
    ("Home", 0xff50),
    ("End", 0xff57),
    ("Left", 0xff51),
    ("Up", 0xff52),
    ("Right", 0xff53),
    ("Down", 0xff54),
    ("Prior", 0xff55),
    ("Next", 0xff56),
    ("F1", 0xffbe),
    ("F2", 0xffbf),
    ("F3", 0xffc0),
    ("F4", 0xffc1),
    ("F5", 0xffc2),
    ("F6", 0xffc3),
    ("F7", 0xffc4),
    ("F8", 0xffc5),
    ("F9", 0xffc6),
    ("F10", 0xffc7),
    ("F11", 0xffc8),
    ("F12", 0xffc9),
    ("Num_Lock", 0xff7f),
];

/// Keycode the simulated hardware produces for Num Lock.
const NUMLOCK_KEYCODE: Keycode = Keycode(77);

/// Modifier slot Num Lock sits on by default (Mod2, as on most X11
/// keymaps).
const NUMLOCK_SLOT: usize = 4;

/// Simulated window system.
///
/// Stands in for a live display server when checking a configuration
/// offline: a fixed output count, a modifier map with Num Lock on Mod2,
/// hex color allocation, and fonts that always open. Tests reconfigure
/// the Num Lock placement through [`Self::with_numlock_slot`].
#[derive(Debug, Clone)]
pub struct StaticWindowSystem {
    outputs: usize,
    modifiers: ModifierMapping,
}

impl StaticWindowSystem {
    /// Creates a simulated window system with the given output count.
    #[must_use]
    pub fn new(outputs: usize) -> Self {
        let mut slots = vec![Vec::new(); ModifierMapping::SLOT_COUNT];
        slots[NUMLOCK_SLOT] = vec![NUMLOCK_KEYCODE];
        Self {
            outputs,
            modifiers: ModifierMapping::new(slots),
        }
    }

    /// Moves Num Lock to the given modifier slot, or removes it from the
    /// mapping entirely.
    #[must_use]
    pub fn with_numlock_slot(mut self, slot: Option<usize>) -> Self {
        let mut slots = vec![Vec::new(); ModifierMapping::SLOT_COUNT];
        if let Some(slot) = slot {
            slots[slot] = vec![NUMLOCK_KEYCODE];
        }
        self.modifiers = ModifierMapping::new(slots);
        self
    }

    /// Parses a `#RRGGBB` (or bare `RRGGBB`) color specification.
    fn parse_hex_color(spec: &str) -> Option<u32> {
        let hex = spec.strip_prefix('#').unwrap_or(spec);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(hex, 16).ok()
    }
}

impl WindowSystem for StaticWindowSystem {
    fn output_count(&self) -> usize {
        self.outputs
    }

    fn modifier_mapping(&self) -> ModifierMapping {
        self.modifiers.clone()
    }

    fn keysym_from_name(&self, name: &str) -> Option<Keysym> {
        if let Some(&(_, code)) = KEYSYM_NAMES.iter().find(|(n, _)| *n == name) {
            return Some(Keysym(code));
        }
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_graphic() => Some(Keysym(c as u32)),
            _ => None,
        }
    }

    fn keysym_to_keycode(&self, keysym: Keysym) -> Option<Keycode> {
        (keysym == Keysym::NUM_LOCK).then_some(NUMLOCK_KEYCODE)
    }

    fn alloc_color(&self, output: usize, spec: &str) -> Result<Color> {
        match Self::parse_hex_color(spec) {
            Some(pixel) => Ok(Color { pixel }),
            None => bail!("cannot allocate color '{}' on output {}", spec, output),
        }
    }

    fn open_font(&self, _output: usize, name: &str) -> Result<Font> {
        Ok(Font {
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        let ws = StaticWindowSystem::new(1);
        assert_eq!(ws.alloc_color(0, "#6666ff").unwrap().pixel, 0x0066_66ff);
        assert_eq!(ws.alloc_color(0, "111111").unwrap().pixel, 0x0011_1111);
    }

    #[test]
    fn test_invalid_color_is_an_error() {
        let ws = StaticWindowSystem::new(1);
        assert!(ws.alloc_color(0, "cornflower").is_err());
        assert!(ws.alloc_color(0, "#12345").is_err());
        assert!(ws.alloc_color(0, "").is_err());
    }

    #[test]
    fn test_keysym_from_name_table_entries() {
        let ws = StaticWindowSystem::new(1);
        assert_eq!(ws.keysym_from_name("Return"), Some(Keysym(0xff0d)));
        assert_eq!(ws.keysym_from_name("F10"), Some(Keysym(0xffc7)));
        assert_eq!(ws.keysym_from_name("None"), None);
    }

    #[test]
    fn test_keysym_from_single_character() {
        let ws = StaticWindowSystem::new(1);
        assert_eq!(ws.keysym_from_name("j"), Some(Keysym(u32::from(b'j'))));
        assert_eq!(ws.keysym_from_name("1"), Some(Keysym(u32::from(b'1'))));
        assert_eq!(ws.keysym_from_name(""), None);
    }

    #[test]
    fn test_default_modifier_mapping_has_numlock_on_mod2() {
        let ws = StaticWindowSystem::new(1);
        let mapping = ws.modifier_mapping();
        assert_eq!(mapping.slot(4), &[Keycode(77)]);
        assert!(mapping.slot(0).is_empty());
    }

    #[test]
    fn test_modifier_mapping_out_of_range_slot_is_empty() {
        let mapping = ModifierMapping::new(vec![vec![Keycode(50)]]);
        assert_eq!(mapping.slot(0), &[Keycode(50)]);
        assert!(mapping.slot(7).is_empty());
        assert!(mapping.slot(12).is_empty());
    }
}
