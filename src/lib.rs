//! Perch configuration resolver.
//!
//! This library compiles the Perch window manager's declarative
//! configuration document into the resolved runtime structures the
//! window manager dispatches on: per-output settings, ordered layout
//! and tag lists, window-placement rules, and keyboard/pointer binding
//! tables.

// Module declarations
pub mod backend;
pub mod constants;
pub mod diag;
pub mod document;
pub mod models;
pub mod resolver;
pub mod symbols;
