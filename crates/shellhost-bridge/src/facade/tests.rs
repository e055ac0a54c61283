use std::sync::{Arc, Mutex};

use serde_json::json;
use shellhost_common::Bounds;
use tokio::sync::mpsc;

use super::*;
use crate::commands::builtin_dispatcher;
use crate::host::{HostClient, HostState};
use crate::registry::testing::{MockFactory, MockSurface};
use crate::surface::{Surface, SurfaceFactory, SurfaceHandle, SurfaceSpec};

type SharedHost = Arc<Mutex<HostState<MockSurface>>>;

fn client() -> (BridgeClient<LocalTransport>, SharedHost) {
    let mut factory = MockFactory::default();
    let spec = SurfaceSpec::primary("http://127.0.0.1:1010/", 800, 600, None, false);
    let primary = factory.create(SurfaceId::Primary, &spec).unwrap();
    let mut state = HostState::new();
    state.install_primary(primary, spec.url);
    let host = Arc::new(Mutex::new(state));

    let (tx, mut rx) = mpsc::unbounded_channel();
    let served = Arc::clone(&host);
    tokio::spawn(async move {
        while let Some(request) = rx.recv().await {
            served.lock().unwrap().serve(request, &mut factory);
        }
    });

    let dir = std::env::temp_dir().join("shellhost-facade-tests");
    let dispatcher = Arc::new(builtin_dispatcher(HostClient::from_channel(tx), dir));
    let transport = LocalTransport::new(dispatcher, SurfaceId::Primary);
    (BridgeClient::new(transport), host)
}

/// Replies with a fixed envelope whatever the command.
struct Canned(CommandEnvelope);

#[async_trait]
impl Transport for Canned {
    async fn invoke(&self, _command: &str, _args: Vec<Value>) -> Result<CommandEnvelope, TransportError> {
        Ok(self.0.clone())
    }
}

struct Down;

#[async_trait]
impl Transport for Down {
    async fn invoke(&self, _command: &str, _args: Vec<Value>) -> Result<CommandEnvelope, TransportError> {
        Err(TransportError("connection closed".into()))
    }
}

#[tokio::test]
async fn open_window_round_trip() {
    let (client, host) = client();
    let reply = client
        .open_window("https://a.test/", Some(640), Some(480), Some(10), Some(10))
        .await
        .unwrap();
    let handle: SurfaceHandle = serde_json::from_value(reply.clone()).unwrap();

    let bounds = host.lock().unwrap().registry().get(handle).map(|s| s.bounds());
    assert_eq!(bounds, Some(Bounds::new(10, 10, 640, 480)));

    client.close_window(reply.clone()).await.unwrap();
    let err = client.close_window(reply).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("Failed to execute close-window: Unknown window handle {handle}")
    );
}

#[tokio::test]
async fn open_window_defaults() {
    let (client, host) = client();
    let reply = client
        .open_window("https://a.test/", None, None, None, None)
        .await
        .unwrap();
    let handle: SurfaceHandle = serde_json::from_value(reply).unwrap();
    let bounds = host.lock().unwrap().registry().get(handle).map(|s| s.bounds());
    assert_eq!(bounds, Some(Bounds::new(100, 100, 500, 400)));
}

#[tokio::test]
async fn resize_with_text_width_rejects() {
    let (client, host) = client();
    let err = client.resize("abc", 600).await.unwrap_err();
    let BridgeError::Command { command, message } = err else {
        panic!("expected command failure");
    };
    assert_eq!(command, "resize");
    assert!(message.starts_with("Invalid argument 'width'"));
    assert_eq!(
        host.lock().unwrap().primary().unwrap().surface.bounds(),
        Bounds::new(0, 0, 800, 600)
    );
}

#[tokio::test]
async fn success_without_reply_returns_envelope() {
    let (client, _host) = client();
    assert_eq!(client.toggle_fullscreen().await.unwrap(), json!({ "success": true }));
}

#[tokio::test]
async fn falsy_reply_is_returned_as_is() {
    let client = BridgeClient::new(Canned(CommandEnvelope::success(Some(json!(0)))));
    assert_eq!(client.close_window(1).await.unwrap(), json!(0));
}

#[tokio::test]
async fn unknown_command_is_rejected_not_thrown() {
    let (client, _host) = client();
    let err = client.call("eval", vec![json!("1+1")]).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to execute eval: No handler registered for 'eval'"
    );
}

#[tokio::test]
async fn transport_failure_names_the_command() {
    let client = BridgeClient::new(Down);
    let err = client.close_app().await.unwrap_err();
    assert_eq!(
        err,
        BridgeError::Transport {
            command: "close-app".into(),
            source: TransportError("connection closed".into()),
        }
    );
    assert_eq!(err.to_string(), "Failed to execute close-app: connection closed");
}

#[tokio::test]
async fn user_close_then_command_close_is_a_clean_failure() {
    let (client, host) = client();
    let reply = client
        .open_window("https://a.test/", None, None, None, None)
        .await
        .unwrap();
    let handle: SurfaceHandle = serde_json::from_value(reply.clone()).unwrap();

    host.lock()
        .unwrap()
        .surface_closed(SurfaceId::Secondary(handle));
    assert!(client.close_window(reply).await.is_err());
    assert!(host.lock().unwrap().registry().is_empty());
}

#[tokio::test]
async fn close_app_marks_quit() {
    let (client, host) = client();
    client.close_app().await.unwrap();
    assert!(host.lock().unwrap().quit_requested());
}
