//! CodeDock Core - Domain Model
//!
//! This crate contains the core domain model for CodeDock, including:
//! - Component references and identifier resolution
//! - The workspace host seam used by the UI layer
//!
//! It carries no UI dependencies; rendering lives in `codedock-ui`.

#![warn(missing_docs)]

pub mod component;
pub mod workspace;

pub use component::{ComponentId, ComponentKind, ComponentRef};
pub use workspace::{OpenRequest, WorkspaceHost};
