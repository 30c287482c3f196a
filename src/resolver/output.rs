//! Resolution of one output's section into an [`OutputConfig`].

use crate::backend::WindowSystem;
use crate::diag::{Diagnostics, WarningKind};
use crate::document::Section;
use crate::models::{
    ColorScheme, LayoutEntry, OutputConfig, Padding, StatusbarPosition, Tag,
};
use crate::symbols;
use anyhow::{bail, Result};

/// Documented defaults for the `colors` sub-section, border/bg/fg.
const NORMAL_COLORS: [&str; 3] = ["#111111", "#111111", "#eeeeee"];
const FOCUS_COLORS: [&str; 3] = ["#6666ff", "#6666ff", "#ffffff"];

/// Resolves the section selected for output `index`.
///
/// Sub-sections are fetched by fixed name; a missing one resolves as an
/// empty section, so every field falls back to its documented default.
/// Color and font allocation failures, zero declared layouts, and zero
/// declared tags are fatal.
pub fn resolve_output(
    section: &Section,
    index: usize,
    ws: &dyn WindowSystem,
    diags: &mut Diagnostics,
) -> Result<OutputConfig> {
    let general = section.child_or_empty("general");
    let statusbar = section.child_or_empty("statusbar");
    let colors = section.child_or_empty("colors");
    let padding = section.child_or_empty("padding");

    let layouts = resolve_layouts(section.child_or_empty("layouts"), index, diags)?;
    let tags = resolve_tags(section.child_or_empty("tags"), &layouts, index)?;

    Ok(OutputConfig {
        border_width: general.int_or("border", 1).max(0) as u32,
        snap: general.int_or("snap", 8).max(0) as u32,
        resize_hints: general.bool_or("resize_hints", false),
        opacity_unfocused: general.int_or("opacity_unfocused", 100).max(0) as u32,
        focus_follows_pointer: general.bool_or("focus_follows_pointer", false),
        allow_lower_floats: general.bool_or("allow_lower_floats", false),
        font: ws.open_font(index, general.str_or("font", "mono-12"))?,
        normal_colors: resolve_scheme(colors, "normal", NORMAL_COLORS, index, ws)?,
        focus_colors: resolve_scheme(colors, "focus", FOCUS_COLORS, index, ws)?,
        statusbar: StatusbarPosition::from_name(statusbar.str_or("position", "top")),
        layouts,
        tags,
        padding: resolve_padding(padding),
    })
}

/// Builds the ordered layout list, one entry per declared `layout`
/// sub-section.
///
/// An unresolvable title keeps its slot with absent symbol and
/// algorithm, so list length always equals the declared count. Zero
/// declared layouts is fatal: a window manager cannot operate with no
/// arrangement strategy.
fn resolve_layouts(
    section: &Section,
    output: usize,
    diags: &mut Diagnostics,
) -> Result<Vec<LayoutEntry>> {
    let declared = section.children("layout");
    if declared.is_empty() {
        bail!("output {}: no layouts declared", output);
    }

    let mut layouts = Vec::with_capacity(declared.len());
    for sub in declared {
        let title = sub.title().unwrap_or("");
        match symbols::lookup_layout(title) {
            Some(algorithm) => layouts.push(LayoutEntry {
                symbol: Some(sub.str_or("symbol", "???").to_string()),
                algorithm: Some(algorithm),
            }),
            None => {
                diags.warn(
                    WarningKind::UnknownLayout,
                    format!("output {}: unknown layout '{}'", output, title),
                );
                layouts.push(LayoutEntry {
                    symbol: None,
                    algorithm: None,
                });
            }
        }
    }
    Ok(layouts)
}

/// Builds the ordered tag list, one entry per declared `tag`
/// sub-section, and selects the first tag.
///
/// A tag's declared layout name is resolved once and matched by
/// identity against the already-resolved algorithms in `layouts`; the
/// first match wins, and anything unresolved binds to index 0. Zero
/// declared tags is fatal.
fn resolve_tags(section: &Section, layouts: &[LayoutEntry], output: usize) -> Result<Vec<Tag>> {
    let declared = section.children("tag");
    if declared.is_empty() {
        bail!("output {}: no tags declared", output);
    }

    let mut tags = Vec::with_capacity(declared.len());
    for sub in declared {
        let requested = symbols::lookup_layout(sub.str_or("layout", "tile"));
        let layout = requested
            .and_then(|id| layouts.iter().position(|entry| entry.algorithm == Some(id)))
            .unwrap_or(0);
        tags.push(Tag {
            name: sub.title().unwrap_or("").to_string(),
            selected: false,
            was_selected: false,
            layout,
            master_factor: sub.float_or("master_factor", 0.5),
            masters: sub.int_or("masters", 1).max(0) as u32,
            columns: sub.int_or("columns", 1).max(0) as u32,
        });
    }

    // The first declared tag starts out selected. There is no mechanism
    // to start on a different tag.
    if let Some(first) = tags.first_mut() {
        first.selected = true;
        first.was_selected = true;
    }
    Ok(tags)
}

fn resolve_scheme(
    colors: &Section,
    prefix: &str,
    defaults: [&str; 3],
    output: usize,
    ws: &dyn WindowSystem,
) -> Result<ColorScheme> {
    Ok(ColorScheme {
        border: ws.alloc_color(output, colors.str_or(&format!("{prefix}_border"), defaults[0]))?,
        background: ws.alloc_color(output, colors.str_or(&format!("{prefix}_bg"), defaults[1]))?,
        foreground: ws.alloc_color(output, colors.str_or(&format!("{prefix}_fg"), defaults[2]))?,
    })
}

fn resolve_padding(section: &Section) -> Padding {
    Padding {
        top: section.int_or("top", 0) as i32,
        bottom: section.int_or("bottom", 0) as i32,
        left: section.int_or("left", 0) as i32,
        right: section.int_or("right", 0) as i32,
    }
}
