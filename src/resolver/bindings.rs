//! Construction of the keyboard and pointer binding lists.
//!
//! One generic algorithm builds all six lists. The lists differ only in
//! how a trigger is resolved (keysym for keys, button identity for
//! pointers), in their default modifiers, and in whether the binding
//! kind carries a free-form argument.

use crate::backend::WindowSystem;
use crate::diag::{Diagnostics, WarningKind};
use crate::document::Section;
use crate::models::{Binding, ButtonBinding, KeyBinding, PointerBindings};
use crate::symbols;

/// Modifiers substituted when a key binding declares none.
const DEFAULT_KEY_MODIFIERS: &[&str] = &["Mod4"];

/// Builds the keyboard binding list from the `keys` section.
pub fn resolve_key_bindings(
    section: &Section,
    ws: &dyn WindowSystem,
    diags: &mut Diagnostics,
) -> Vec<KeyBinding> {
    build_bindings(
        section.children("key"),
        DEFAULT_KEY_MODIFIERS,
        true,
        |sub| ws.keysym_from_name(sub.str_or("key", "None")),
        diags,
    )
}

/// Builds the five pointer binding lists from the `mouse` section.
///
/// The `tag` kind is the only one that is not argument-bearing: clicks
/// on a tag already identify their target, so a declared `arg` is
/// forced absent there.
pub fn resolve_pointer_bindings(section: &Section, diags: &mut Diagnostics) -> PointerBindings {
    PointerBindings {
        tag: resolve_button_list(section, "tag", false, diags),
        layout: resolve_button_list(section, "layout", true, diags),
        title: resolve_button_list(section, "title", true, diags),
        root: resolve_button_list(section, "root", true, diags),
        client: resolve_button_list(section, "client", true, diags),
    }
}

fn resolve_button_list(
    section: &Section,
    kind: &str,
    takes_argument: bool,
    diags: &mut Diagnostics,
) -> Vec<ButtonBinding> {
    build_bindings(
        section.children(kind),
        &[],
        takes_argument,
        |sub| symbols::lookup_button(sub.str_or("button", "None")),
        diags,
    )
}

/// Resolves `sections` into binding nodes, in declaration order.
///
/// Every declared section yields exactly one node, even when its
/// trigger or command fails to resolve; an unresolved command is a
/// warning and leaves the node inert. Zero declared sections yield an
/// empty list.
fn build_bindings<T>(
    sections: &[Section],
    default_modifiers: &[&str],
    takes_argument: bool,
    mut resolve_trigger: impl FnMut(&Section) -> Option<T>,
    diags: &mut Diagnostics,
) -> Vec<Binding<Option<T>>> {
    let mut bindings = Vec::with_capacity(sections.len());
    for sub in sections {
        let modifiers = match sub.str_list("modifiers") {
            Some(names) => symbols::compose_mask(names.iter().map(String::as_str)),
            None => symbols::compose_mask(default_modifiers.iter().copied()),
        };

        let command_name = sub.str_or("command", "");
        let command = symbols::lookup_command(command_name);
        if command.is_none() {
            diags.warn(
                WarningKind::UnknownCommand,
                format!("unknown command '{}'", command_name),
            );
        }

        bindings.push(Binding {
            modifiers,
            trigger: resolve_trigger(sub),
            command,
            argument: if takes_argument {
                sub.opt_str("arg").map(String::from)
            } else {
                None
            },
        });
    }
    bindings
}
