//! Pin Trigger
//!
//! Link-styled control that sends a component to the side workspace. The
//! click is consumed by the widget itself; no navigation command ever
//! reaches the rendering host.

use codedock_core::component::ComponentRef;
use codedock_core::workspace::{OpenRequest, WorkspaceHost};
use egui::{Response, RichText, Ui};

use crate::core::i18n::LocaleManager;
use crate::widgets::icons::{AppIcon, IconManager};

/// Tooltip lookup key
const TOOLTIP_KEY: &str = "component-viewer-open-in-workspace";

/// Glyph fallback when no icon textures are loaded
const PIN_GLYPH: &str = "📌";

/// Control that opens a component in the workspace when clicked
pub struct PinTrigger<'a> {
    component: &'a ComponentRef,
}

impl<'a> PinTrigger<'a> {
    /// Trigger for one component reference
    pub fn new(component: &'a ComponentRef) -> Self {
        Self { component }
    }

    /// Render the trigger and fire [`Self::activate`] on click
    pub fn show(
        &self,
        ui: &mut Ui,
        locale: &LocaleManager,
        icons: Option<&IconManager>,
        workspace: &mut dyn WorkspaceHost,
    ) -> Response {
        let button = match icons.and_then(|manager| manager.image(AppIcon::Pin, 16.0)) {
            Some(image) => egui::Button::image(image).frame(false),
            None => egui::Button::new(
                RichText::new(PIN_GLYPH).color(ui.visuals().hyperlink_color),
            )
            .frame(false),
        };

        let response = ui.add(button).on_hover_text(locale.t(TOOLTIP_KEY));
        if response.clicked() {
            self.activate(workspace);
        }
        response
    }

    /// Resolve the component identifier and hand it to the workspace host.
    ///
    /// Every activation produces exactly one `open_component` call. An
    /// unresolvable reference is forwarded with `id: None`; what that means
    /// is the host's decision.
    pub fn activate(&self, workspace: &mut dyn WorkspaceHost) {
        let id = self.component.resolved_id().cloned();
        match &id {
            Some(id) => tracing::debug!("opening component {} in workspace", id),
            None => tracing::warn!("component {} carries no identifier", self.component.name),
        }
        workspace.open_component(OpenRequest { id });
    }
}
