//! Workspace Host Seam
//!
//! The side workspace that displays pinned components lives outside this
//! crate. [`WorkspaceHost`] is the capability the UI calls into; it is always
//! passed in explicitly so callers can substitute it in tests instead of
//! reaching for a shared global.

use serde::{Deserialize, Serialize};

use crate::component::ComponentId;

/// Request handed to the workspace host on activation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenRequest {
    /// Resolved component identifier.
    ///
    /// `None` when the originating reference carried no identifier at all;
    /// the host decides how to surface an unresolvable open.
    pub id: Option<ComponentId>,
}

/// Capability for displaying a component in the side workspace.
///
/// Calls are fire-and-forget: there is no return value and callers make no
/// assumption about synchronous or deferred completion. Implementations own
/// their concurrency and state.
pub trait WorkspaceHost {
    /// Show the referenced component in the workspace
    fn open_component(&mut self, request: OpenRequest);
}
