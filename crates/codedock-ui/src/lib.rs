//! CodeDock UI - egui Widgets and Panels
//!
//! This crate provides the user interface layer for the code viewer,
//! including:
//! - Component list panel with per-row pin triggers
//! - Pin trigger widget (open a component in the side workspace)
//! - Localization (Fluent bundles)
//! - Icon management and theming

#![warn(missing_docs)]

// Categorized modules
#[allow(missing_docs)]
pub mod core;
#[allow(missing_docs)]
pub mod panels;
#[allow(missing_docs)]
pub mod widgets;

// Re-export categorized modules to keep a flat public API
pub use crate::core::*;
pub use crate::panels::*;
pub use crate::widgets::*;
