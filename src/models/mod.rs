//! Resolved runtime data structures.
//!
//! These are the resolver's products: plain data, independent of the
//! configuration document they came from and of the window-management
//! logic that consumes them.

pub mod binding;
pub mod output;
pub mod rule;

// Re-export all model types
pub use binding::{Binding, ButtonBinding, Command, KeyBinding, ModMask, PointerBindings};
pub use output::{ColorScheme, LayoutEntry, LayoutId, OutputConfig, Padding, StatusbarPosition, Tag};
pub use rule::{compile_rules, Rule, RuleMatcher};
