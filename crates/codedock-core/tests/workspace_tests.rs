use codedock_core::workspace::{OpenRequest, WorkspaceHost};

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
fn test_requests_arrive_in_order() {
    let mut workspace = RecordingWorkspace::default();

    for id in ["A1", "B2", "C3"] {
        workspace.open_component(OpenRequest {
            id: Some(id.to_string()),
        });
    }

    let ids: Vec<_> = workspace.requests.iter().map(|r| r.id.clone()).collect();
    assert_eq!(
        ids,
        vec![
            Some("A1".to_string()),
            Some("B2".to_string()),
            Some("C3".to_string())
        ]
    );
}

#[test]
fn test_unresolved_request_passes_through() {
    let mut workspace = RecordingWorkspace::default();

    workspace.open_component(OpenRequest { id: None });

    assert_eq!(workspace.requests, vec![OpenRequest { id: None }]);
}
