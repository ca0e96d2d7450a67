use codedock_core::component::{ComponentKind, ComponentRef};
use codedock_core::workspace::{OpenRequest, WorkspaceHost};
use codedock_ui::core::i18n::LocaleManager;
use codedock_ui::panels::component_list::ComponentListPanel;

#[derive(Default)]
struct RecordingWorkspace {
    requests: Vec<OpenRequest>,
}

impl WorkspaceHost for RecordingWorkspace {
    fn open_component(&mut self, request: OpenRequest) {
        self.requests.push(request);
    }
}

#[test]
fn test_render_pass_has_no_side_effects() {
    let ctx = egui::Context::default();
    let locale = LocaleManager::new("en");
    let components = vec![
        ComponentRef {
            uuid: Some("AX1".to_string()),
            legacy_id: None,
            name: "src".to_string(),
            kind: ComponentKind::Directory,
        },
        ComponentRef {
            uuid: None,
            legacy_id: Some("4807".to_string()),
            name: "src/main.rs".to_string(),
            kind: ComponentKind::File,
        },
    ];
    let mut panel = ComponentListPanel::new();
    let mut workspace = RecordingWorkspace::default();

    let mut action = None;
    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            action = panel.show(ui, &components, &locale, None, &mut workspace);
        });
    });

    assert!(action.is_none());
    assert!(workspace.requests.is_empty());
    assert!(panel.selected().is_none());
}
