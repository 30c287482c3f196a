//! Shared fixtures for integration tests.
#![allow(dead_code)] // Not every test file uses every fixture

use perch_config::backend::StaticWindowSystem;
use perch_config::diag::Diagnostics;
use perch_config::document::Document;
use perch_config::resolver::{self, RuntimeConfig};

/// A two-output document exercising every top-level section.
pub const FULL_DOCUMENT: &str = r##"
[[output]]
title = "0"

[output.general]
border = 2
snap = 12
font = "mono-11"

[output.statusbar]
position = "bottom"

[output.colors]
normal_border = "#202020"
focus_border = "#88cc22"

[output.padding]
top = 18

[[output.layouts.layout]]
title = "tile"
symbol = "[]="

[[output.layouts.layout]]
title = "max"
symbol = "[M]"

[[output.tags.tag]]
title = "term"

[[output.tags.tag]]
title = "web"
layout = "max"
master_factor = 0.7

[[output]]

[[output.layouts.layout]]
title = "floating"
symbol = "><>"

[[output.tags.tag]]
title = "misc"

[[rules.rule]]
name = "Firefox"
tags = "web"

[[rules.rule]]
name = "Gimp"
float = true
output = 1

[[rules.rule]]
name = "mpv"
float = true
output = 99

[[keys.key]]
key = "Return"
command = "zoom"

[[keys.key]]
modifiers = ["Mod4", "Shift"]
key = "Return"
command = "spawn"
arg = "uxterm"

[[keys.key]]
modifiers = ["Mod4"]
key = "x"
command = "nonexistent-command"

[[mouse.tag]]
button = "1"
command = "view"

[[mouse.client]]
modifiers = ["Mod4"]
button = "1"
command = "movemouse"
"##;

/// Parses and resolves `text` against a simulated window system with
/// `outputs` outputs.
pub fn resolve_text(
    text: &str,
    outputs: usize,
) -> (anyhow::Result<RuntimeConfig>, Diagnostics) {
    let doc = Document::parse(text).expect("fixture document should parse");
    let ws = StaticWindowSystem::new(outputs);
    let mut diags = Diagnostics::new();
    let result = resolver::resolve(&doc, &ws, &mut diags);
    (result, diags)
}
