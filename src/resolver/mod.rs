//! Configuration resolution: document in, runtime structures out.
//!
//! A single synchronous pass over the parsed document. Each display
//! output is resolved independently (section selection, layouts, tags,
//! colors), then the global rule, keyboard, and pointer sections are
//! resolved once. The pass is fail-fast: fatal conditions abort with an
//! error and leave nothing half-built, so on reload the caller keeps
//! the previous [`RuntimeConfig`] until a new pass fully succeeds.
//!
//! Rule pattern compilation is the matching engine's concern; hand
//! [`RuntimeConfig::rules`] to [`crate::models::compile_rules`] after
//! resolution.

pub mod bindings;
pub mod output;
pub mod rules;

use crate::backend::WindowSystem;
use crate::diag::{Diagnostics, WarningKind};
use crate::document::{Document, Section};
use crate::models::{KeyBinding, ModMask, OutputConfig, PointerBindings, Rule};
use crate::symbols;
use anyhow::{Context, Result};
use serde::Serialize;

/// The built-in configuration document.
///
/// Parsed in place of the user's document when that is unreadable, and
/// consulted for its output section when the user's document declares
/// none.
pub const DEFAULT_DOCUMENT: &str = include_str!("default_config.toml");

/// Everything the window manager needs at runtime, fully resolved.
#[derive(Debug, Serialize)]
pub struct RuntimeConfig {
    /// One configuration per display output, in output order.
    pub outputs: Vec<OutputConfig>,
    /// Window-placement rules, in declaration order.
    pub rules: Vec<Rule>,
    /// Keyboard bindings, in declaration order.
    pub keys: Vec<KeyBinding>,
    /// Pointer bindings, per UI region.
    pub pointer: PointerBindings,
    /// Mask bit of the modifier slot carrying Num Lock, detected from
    /// the live modifier mapping.
    pub numlock_mask: ModMask,
}

/// Resolves a parsed document against the live window system.
///
/// Runs once at startup and again on reload. Recoverable problems land
/// in `diags` and degrade the affected structure; fatal conditions
/// (unusable default document, zero layouts or tags on an output,
/// color/font allocation failure) return an error.
pub fn resolve(
    doc: &Document,
    ws: &dyn WindowSystem,
    diags: &mut Diagnostics,
) -> Result<RuntimeConfig> {
    let root = doc.root();
    let output_count = ws.output_count();

    let mut fallback: Option<Document> = None;
    let mut outputs = Vec::with_capacity(output_count);
    for index in 0..output_count {
        let section = select_output_section(root, index, &mut fallback, diags)?;
        outputs.push(output::resolve_output(section, index, ws, diags)?);
    }

    let rules = rules::resolve_rules(root.child_or_empty("rules"), output_count);
    let pointer = bindings::resolve_pointer_bindings(root.child_or_empty("mouse"), diags);
    let numlock_mask = symbols::detect_numlock_mask(ws);
    let keys = bindings::resolve_key_bindings(root.child_or_empty("keys"), ws, diags);

    Ok(RuntimeConfig {
        outputs,
        rules,
        keys,
        pointer,
        numlock_mask,
    })
}

/// Selects the most specific output section available for `index`.
///
/// In order: a section titled with the output's decimal index, then a
/// shared untitled section, then the built-in default document's
/// output section (with a warning). Only the last step failing is
/// fatal.
fn select_output_section<'a>(
    root: &'a Section,
    index: usize,
    fallback: &'a mut Option<Document>,
    diags: &mut Diagnostics,
) -> Result<&'a Section> {
    if let Some(section) = root.child_titled("output", &index.to_string()) {
        return Ok(section);
    }
    if let Some(section) = root.child_untitled("output") {
        return Ok(section);
    }

    diags.warn(
        WarningKind::MissingOutputSection,
        format!("no output section for output {index}; using built-in defaults"),
    );
    if fallback.is_none() {
        *fallback = Some(
            Document::parse(DEFAULT_DOCUMENT)
                .context("built-in default configuration is invalid")?,
        );
    }
    let doc = fallback
        .as_ref()
        .context("built-in default configuration unavailable")?;
    doc.root()
        .child_untitled("output")
        .context("built-in default configuration declares no output section")
}
