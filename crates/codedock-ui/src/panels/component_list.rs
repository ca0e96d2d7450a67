//! Component List Panel
//!
//! Browsable list of the components of an analyzed project. Each row shows
//! the entity kind, a selectable name and a pin trigger that sends the
//! component to the side workspace.

use codedock_core::component::{ComponentId, ComponentKind, ComponentRef};
use codedock_core::workspace::WorkspaceHost;
use egui::Ui;
use fluent::FluentArgs;

use crate::core::i18n::LocaleManager;
use crate::widgets::icons::{AppIcon, IconManager};
use crate::widgets::pin_trigger::PinTrigger;

/// Actions emitted by the component list
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentListAction {
    /// A component name was clicked; the caller decides how to navigate
    Select(ComponentId),
}

fn kind_icon(kind: ComponentKind) -> AppIcon {
    match kind {
        ComponentKind::Project => AppIcon::Project,
        ComponentKind::Module => AppIcon::Project,
        ComponentKind::Directory => AppIcon::Folder,
        ComponentKind::File => AppIcon::File,
        ComponentKind::UnitTest => AppIcon::File,
    }
}

fn kind_label(kind: ComponentKind, locale: &LocaleManager) -> String {
    match kind {
        ComponentKind::Project => locale.t("component-kind-project"),
        ComponentKind::Module => locale.t("component-kind-module"),
        ComponentKind::Directory => locale.t("component-kind-directory"),
        ComponentKind::File => locale.t("component-kind-file"),
        ComponentKind::UnitTest => locale.t("component-kind-unit-test"),
    }
}

/// Component browser with selection state
#[derive(Default)]
pub struct ComponentListPanel {
    selected: Option<ComponentId>,
}

impl ComponentListPanel {
    /// Create a new panel
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected component id
    pub fn selected(&self) -> Option<&ComponentId> {
        self.selected.as_ref()
    }

    /// Render the component list.
    ///
    /// Name clicks select the row and return an action for the caller; pin
    /// clicks go straight to the injected workspace host.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        components: &[ComponentRef],
        locale: &LocaleManager,
        icons: Option<&IconManager>,
        workspace: &mut dyn WorkspaceHost,
    ) -> Option<ComponentListAction> {
        let mut action = None;

        ui.vertical(|ui| {
            ui.heading(locale.t("panel-components"));
            let mut args = FluentArgs::new();
            args.set("count", components.len());
            ui.label(locale.t_args("component-list-count", &args));
            ui.separator();

            for component in components {
                ui.horizontal(|ui| {
                    if let Some(image) =
                        icons.and_then(|manager| manager.image(kind_icon(component.kind), 14.0))
                    {
                        ui.add(image)
                            .on_hover_text(kind_label(component.kind, locale));
                    }

                    let is_selected = component.resolved_id().is_some()
                        && component.resolved_id() == self.selected.as_ref();
                    if ui.selectable_label(is_selected, &component.name).clicked() {
                        if let Some(id) = component.resolved_id() {
                            self.selected = Some(id.clone());
                            action = Some(ComponentListAction::Select(id.clone()));
                        }
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        PinTrigger::new(component).show(ui, locale, icons, workspace);
                    });
                });
            }
        });

        action
    }
}
