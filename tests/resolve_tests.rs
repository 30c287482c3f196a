//! End-to-end resolution tests over complete documents.

mod fixtures;
use fixtures::{resolve_text, FULL_DOCUMENT};

use perch_config::diag::WarningKind;
use perch_config::models::{Command, LayoutId, ModMask, StatusbarPosition};

#[test]
fn test_full_document_resolves_both_outputs() {
    let (result, diags) = resolve_text(FULL_DOCUMENT, 2);
    let config = result.unwrap();

    assert_eq!(config.outputs.len(), 2);

    let first = &config.outputs[0];
    assert_eq!(first.border_width, 2);
    assert_eq!(first.snap, 12);
    assert_eq!(first.font.name, "mono-11");
    assert_eq!(first.statusbar, StatusbarPosition::Bottom);
    assert_eq!(first.padding.top, 18);
    assert_eq!(first.normal_colors.border.pixel, 0x0020_2020);
    // Undeclared colors keep their documented defaults.
    assert_eq!(first.normal_colors.foreground.pixel, 0x00ee_eeee);

    // The second output has no titled section and takes the untitled one.
    let second = &config.outputs[1];
    assert_eq!(second.border_width, 1);
    assert_eq!(second.layouts[0].algorithm, Some(LayoutId::Floating));
    assert_eq!(second.tags[0].name, "misc");

    // The only warning is the deliberately unknown key command.
    assert_eq!(diags.len(), 1);
    assert_eq!(diags.warnings()[0].kind, WarningKind::UnknownCommand);
}

#[test]
fn test_every_output_has_exactly_one_selected_tag() {
    let (result, _) = resolve_text(FULL_DOCUMENT, 2);
    let config = result.unwrap();

    for output in &config.outputs {
        let selected: Vec<_> = output.tags.iter().filter(|tag| tag.selected).collect();
        assert_eq!(selected.len(), 1);
        assert!(std::ptr::eq(selected[0], &output.tags[0]));
        assert!(output.tags[0].was_selected);
    }
}

#[test]
fn test_tag_layout_cross_reference() {
    let (result, _) = resolve_text(FULL_DOCUMENT, 2);
    let config = result.unwrap();

    let first = &config.outputs[0];
    // "term" declares no layout and defaults to "tile", slot 0; "web"
    // declares "max" and binds to slot 1.
    assert_eq!(first.tags[0].layout, 0);
    assert_eq!(first.tags[1].layout, 1);
    let web_layout = &first.layouts[first.tags[1].layout];
    assert_eq!(web_layout.algorithm, Some(LayoutId::Max));
    assert_eq!(web_layout.symbol.as_deref(), Some("[M]"));
}

#[test]
fn test_rule_output_validation_against_live_count() {
    let (result, _) = resolve_text(FULL_DOCUMENT, 2);
    let config = result.unwrap();

    assert_eq!(config.rules.len(), 3);
    // In-range indices preserved exactly, out-of-range clamped to 0.
    assert_eq!(config.rules[0].output, 0);
    assert_eq!(config.rules[1].output, 1);
    assert_eq!(config.rules[2].output, 0);
    assert_eq!(config.rules[0].tag_pattern.as_deref(), Some("web"));
    assert!(config.rules[2].floating);
}

#[test]
fn test_binding_lists_match_declared_counts() {
    let (result, _) = resolve_text(FULL_DOCUMENT, 2);
    let config = result.unwrap();

    assert_eq!(config.keys.len(), 3);
    assert_eq!(config.keys[0].command, Some(Command::Zoom));
    assert_eq!(config.keys[0].modifiers, ModMask::MOD4);
    assert_eq!(config.keys[1].argument.as_deref(), Some("uxterm"));
    // The unknown command still occupies its declared slot, inert.
    assert_eq!(config.keys[2].command, None);

    assert_eq!(config.pointer.tag.len(), 1);
    assert_eq!(config.pointer.client.len(), 1);
    assert!(config.pointer.layout.is_empty());
    assert!(config.pointer.title.is_empty());
    assert!(config.pointer.root.is_empty());
}

#[test]
fn test_numlock_mask_detected_from_window_system() {
    let (result, _) = resolve_text(FULL_DOCUMENT, 1);
    assert_eq!(result.unwrap().numlock_mask, ModMask::MOD2);
}

#[test]
fn test_empty_document_falls_back_to_builtin_defaults() {
    let (result, diags) = resolve_text("", 1);
    let config = result.unwrap();

    assert_eq!(config.outputs.len(), 1);
    assert_eq!(config.outputs[0].layouts.len(), 4);
    assert_eq!(config.outputs[0].tags.len(), 9);
    assert!(diags
        .warnings()
        .iter()
        .any(|w| w.kind == WarningKind::MissingOutputSection));
}

#[test]
fn test_failed_resolution_leaves_previous_config_usable() {
    let (result, _) = resolve_text(FULL_DOCUMENT, 2);
    let previous = result.unwrap();

    // A reload candidate with an output declaring no tags fails fatally.
    let broken = r#"
        [[output]]

        [[output.layouts.layout]]
        title = "tile"
    "#;
    let (reload, _) = resolve_text(broken, 2);
    assert!(reload.is_err());

    // The previously resolved configuration is untouched.
    assert_eq!(previous.outputs.len(), 2);
    assert!(previous.outputs[0].tags[0].selected);
}

#[test]
fn test_resolved_config_serializes_to_json() {
    let (result, _) = resolve_text(FULL_DOCUMENT, 2);
    let config = result.unwrap();

    let value = serde_json::to_value(&config).expect("config should serialize");
    assert_eq!(value["outputs"][0]["layouts"][0]["symbol"], "[]=");
    assert_eq!(value["rules"][1]["output"], 1);
    // ModMask is a newtype, so it serializes as its raw bits (Mod2).
    assert_eq!(value["numlock_mask"], 16);
}
