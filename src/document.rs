//! Typed configuration section tree.
//!
//! This is the boundary to the text parser: the resolver only ever sees
//! [`Section`] values, never the underlying TOML. A section exposes
//! named scalar fields, named string-list fields, and named repeatable
//! sub-sections addressable by index or by title, with every accessor
//! substituting a caller-supplied default on a missing or mistyped
//! field. That keeps "missing sub-section" equivalent to "empty
//! sub-section" all the way down, so absent configuration never needs a
//! special case in the resolver.
//!
//! # Document format
//!
//! Repeatable sections are TOML arrays of tables; a section's title is
//! its `title` key:
//!
//! ```toml
//! [[output]]
//! title = "0"
//!
//! [output.general]
//! border = 2
//!
//! [[output.layouts.layout]]
//! title = "tile"
//! symbol = "[]="
//! ```

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::sync::OnceLock;

/// A typed scalar field value.
#[derive(Debug, Clone, PartialEq)]
enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

/// One node of the configuration tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Section {
    title: Option<String>,
    values: HashMap<String, Scalar>,
    lists: HashMap<String, Vec<String>>,
    children: HashMap<String, Vec<Section>>,
}

impl Section {
    /// A shared empty section, substituted for missing sub-sections so
    /// field accessors fall through to their defaults.
    #[must_use]
    pub fn empty() -> &'static Self {
        static EMPTY: OnceLock<Section> = OnceLock::new();
        EMPTY.get_or_init(Self::default)
    }

    /// The section's title, if it was declared with one.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// All sub-sections declared under `name`, in declaration order.
    #[must_use]
    pub fn children(&self, name: &str) -> &[Self] {
        self.children.get(name).map_or(&[], Vec::as_slice)
    }

    /// First sub-section declared under `name`.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children(name).first()
    }

    /// First sub-section under `name` carrying the given title.
    #[must_use]
    pub fn child_titled(&self, name: &str, title: &str) -> Option<&Self> {
        self.children(name)
            .iter()
            .find(|section| section.title() == Some(title))
    }

    /// First sub-section under `name` declared without a title.
    #[must_use]
    pub fn child_untitled(&self, name: &str) -> Option<&Self> {
        self.children(name)
            .iter()
            .find(|section| section.title().is_none())
    }

    /// Sub-section under `name`, or the shared empty section when the
    /// sub-section is absent.
    #[must_use]
    pub fn child_or_empty(&self, name: &str) -> &Self {
        self.child(name).unwrap_or_else(|| Self::empty())
    }

    /// String field, or `default` when absent or not a string.
    #[must_use]
    pub fn str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        match self.values.get(key) {
            Some(Scalar::Str(s)) => s,
            _ => default,
        }
    }

    /// String field, absent when undeclared.
    #[must_use]
    pub fn opt_str(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(Scalar::Str(s)) => Some(s),
            _ => None,
        }
    }

    /// Integer field, or `default` when absent or not an integer.
    #[must_use]
    pub fn int_or(&self, key: &str, default: i64) -> i64 {
        match self.values.get(key) {
            Some(Scalar::Int(v)) => *v,
            _ => default,
        }
    }

    /// Float field, or `default` when absent. Integer values coerce.
    #[must_use]
    pub fn float_or(&self, key: &str, default: f64) -> f64 {
        match self.values.get(key) {
            Some(Scalar::Float(v)) => *v,
            #[allow(clippy::cast_precision_loss)]
            Some(Scalar::Int(v)) => *v as f64,
            _ => default,
        }
    }

    /// Boolean field, or `default` when absent or not a boolean.
    #[must_use]
    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        match self.values.get(key) {
            Some(Scalar::Bool(v)) => *v,
            _ => default,
        }
    }

    /// String-list field, absent when undeclared.
    #[must_use]
    pub fn str_list(&self, key: &str) -> Option<&[String]> {
        self.lists.get(key).map(Vec::as_slice)
    }

    fn from_table(table: &toml::Table) -> Self {
        let title = table
            .get("title")
            .and_then(toml::Value::as_str)
            .map(String::from);
        let mut section = Self {
            title,
            ..Self::default()
        };

        for (key, value) in table {
            match value {
                toml::Value::String(_) if key == "title" => {}
                toml::Value::String(s) => {
                    section.values.insert(key.clone(), Scalar::Str(s.clone()));
                }
                toml::Value::Integer(v) => {
                    section.values.insert(key.clone(), Scalar::Int(*v));
                }
                toml::Value::Float(v) => {
                    section.values.insert(key.clone(), Scalar::Float(*v));
                }
                toml::Value::Boolean(v) => {
                    section.values.insert(key.clone(), Scalar::Bool(*v));
                }
                toml::Value::Table(child) => {
                    section
                        .children
                        .entry(key.clone())
                        .or_default()
                        .push(Self::from_table(child));
                }
                toml::Value::Array(items)
                    if !items.is_empty() && items.iter().all(toml::Value::is_table) =>
                {
                    let slot = section.children.entry(key.clone()).or_default();
                    for item in items {
                        if let toml::Value::Table(child) = item {
                            slot.push(Self::from_table(child));
                        }
                    }
                }
                toml::Value::Array(items) => {
                    let strings = items
                        .iter()
                        .filter_map(|item| item.as_str().map(String::from))
                        .collect();
                    section.lists.insert(key.clone(), strings);
                }
                toml::Value::Datetime(_) => {}
            }
        }

        section
    }
}

/// A parsed configuration document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Section,
}

impl Document {
    /// Parses a document from configuration text.
    pub fn parse(text: &str) -> Result<Self> {
        let table: toml::Table =
            toml::from_str(text).context("cannot parse configuration document")?;
        Ok(Self {
            root: Section::from_table(&table),
        })
    }

    /// The document's top-level section.
    #[must_use]
    pub fn root(&self) -> &Section {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Document {
        Document::parse(text).expect("document should parse")
    }

    #[test]
    fn test_scalar_fields_with_defaults() {
        let doc = parse(
            r#"
            [general]
            border = 2
            font = "mono-10"
            resize_hints = true
            factor = 0.65
            "#,
        );
        let general = doc.root().child("general").unwrap();

        assert_eq!(general.int_or("border", 1), 2);
        assert_eq!(general.str_or("font", "mono-12"), "mono-10");
        assert!(general.bool_or("resize_hints", false));
        assert!((general.float_or("factor", 0.5) - 0.65).abs() < f64::EPSILON);

        assert_eq!(general.int_or("snap", 8), 8);
        assert_eq!(general.str_or("missing", "fallback"), "fallback");
        assert_eq!(general.opt_str("missing"), None);
    }

    #[test]
    fn test_mistyped_field_falls_back_to_default() {
        let doc = parse(
            r#"
            [general]
            border = "wide"
            "#,
        );
        let general = doc.root().child("general").unwrap();
        assert_eq!(general.int_or("border", 1), 1);
    }

    #[test]
    fn test_integer_coerces_to_float() {
        let doc = parse("[tag]\nmaster_factor = 1\n");
        let tag = doc.root().child("tag").unwrap();
        assert!((tag.float_or("master_factor", 0.5) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_repeated_sections_keep_declaration_order() {
        let doc = parse(
            r#"
            [[keys.key]]
            key = "Return"

            [[keys.key]]
            key = "j"

            [[keys.key]]
            key = "k"
            "#,
        );
        let keys: Vec<_> = doc
            .root()
            .child_or_empty("keys")
            .children("key")
            .iter()
            .map(|section| section.str_or("key", "None").to_string())
            .collect();
        assert_eq!(keys, ["Return", "j", "k"]);
    }

    #[test]
    fn test_titles_select_sections() {
        let doc = parse(
            r#"
            [[output]]
            title = "0"

            [[output]]

            [[output]]
            title = "1"
            "#,
        );
        let root = doc.root();

        assert!(root.child_titled("output", "0").is_some());
        assert!(root.child_titled("output", "1").is_some());
        assert!(root.child_titled("output", "2").is_none());
        assert!(root.child_untitled("output").is_some());
        assert_eq!(root.children("output").len(), 3);
    }

    #[test]
    fn test_title_is_not_a_scalar_field() {
        let doc = parse("[[output]]\ntitle = \"0\"\n");
        let output = &doc.root().children("output")[0];
        assert_eq!(output.title(), Some("0"));
        assert_eq!(output.opt_str("title"), None);
    }

    #[test]
    fn test_string_lists() {
        let doc = parse(
            r#"
            [[keys.key]]
            modifiers = ["Mod4", "Shift"]

            [[keys.key]]
            modifiers = []
            "#,
        );
        let keys = doc.root().child_or_empty("keys").children("key");

        assert_eq!(
            keys[0].str_list("modifiers"),
            Some(&["Mod4".to_string(), "Shift".to_string()][..])
        );
        assert_eq!(keys[1].str_list("modifiers"), Some(&[][..]));
        assert_eq!(keys[0].str_list("missing"), None);
    }

    #[test]
    fn test_missing_subsection_is_empty() {
        let doc = parse("border = 1\n");
        let general = doc.root().child_or_empty("general");
        assert_eq!(general.int_or("border", 1), 1);
        assert!(general.children("anything").is_empty());
    }

    #[test]
    fn test_syntax_error_is_reported() {
        let result = Document::parse("[general\nborder = 1");
        assert!(result.is_err());
    }
}
