use std::sync::atomic::Ordering;

use shellhost_common::Bounds;
use tokio::sync::mpsc;

use super::*;
use crate::registry::testing::{MockFactory, MockSurface};

fn host_with_primary(factory: &mut MockFactory, fullscreen: bool) -> HostState<MockSurface> {
    let spec = SurfaceSpec::primary("http://127.0.0.1:1010/", 800, 600, Some((0, 0)), fullscreen);
    let surface = factory.create(SurfaceId::Primary, &spec).unwrap();
    let mut host = HostState::new();
    host.install_primary(surface, spec.url);
    host
}

fn secondary() -> SurfaceSpec {
    SurfaceSpec::secondary("https://a.test/", Bounds::new(100, 100, 500, 400))
}

#[test]
fn commands_without_primary_fail_cleanly() {
    let mut factory = MockFactory::default();
    let mut host: HostState<MockSurface> = HostState::new();
    assert_eq!(host.toggle_fullscreen(), Err(CommandError::PrimaryUnavailable));
    assert_eq!(host.resize(10, 10), Err(CommandError::PrimaryUnavailable));
    assert_eq!(host.capture_primary(), Err(CommandError::PrimaryUnavailable));
    assert_eq!(
        host.open_window(&mut factory, &secondary()),
        Err(CommandError::PrimaryUnavailable)
    );
}

#[test]
fn toggle_flips_and_reports_state() {
    let mut factory = MockFactory::default();
    let mut host = host_with_primary(&mut factory, true);
    assert_eq!(host.toggle_fullscreen(), Ok(false));
    assert_eq!(host.toggle_fullscreen(), Ok(true));
}

#[test]
fn resize_leaves_fullscreen_and_keeps_origin() {
    let mut factory = MockFactory::default();
    let mut host = host_with_primary(&mut factory, true);
    host.resize(1024, 768).unwrap();
    let surface = &host.primary().unwrap().surface;
    assert!(!surface.is_fullscreen());
    assert_eq!(surface.bounds(), Bounds::new(0, 0, 1024, 768));
}

#[test]
fn capture_failure_is_generic() {
    let mut factory = MockFactory {
        fail_capture: true,
        ..Default::default()
    };
    let host = host_with_primary(&mut factory, false);
    assert_eq!(host.capture_primary(), Err(CommandError::Screenshot));
}

#[test]
fn creation_failure_is_generic() {
    let mut factory = MockFactory::default();
    let mut host = host_with_primary(&mut factory, false);
    factory.fail_next = true;
    assert_eq!(
        host.open_window(&mut factory, &secondary()),
        Err(CommandError::OpenWindow)
    );
    assert!(host.registry().is_empty());
}

#[test]
fn closing_primary_closes_children() {
    let mut factory = MockFactory::default();
    let mut host = host_with_primary(&mut factory, false);
    host.open_window(&mut factory, &secondary()).unwrap();
    host.open_window(&mut factory, &secondary()).unwrap();
    assert_eq!(host.surface_count(), 3);

    assert!(host.surface_closed(SurfaceId::Primary));
    assert!(!host.has_primary());
    assert!(host.registry().is_empty());
    assert_eq!(factory.closes.load(Ordering::SeqCst), 2);
}

#[test]
fn closing_secondary_keeps_host_alive() {
    let mut factory = MockFactory::default();
    let mut host = host_with_primary(&mut factory, false);
    let h = host.open_window(&mut factory, &secondary()).unwrap();
    assert!(!host.surface_closed(SurfaceId::Secondary(h)));
    assert!(!host.surface_closed(SurfaceId::Secondary(h)));
    assert_eq!(host.surface_count(), 1);
}

#[test]
fn teardown_releases_everything() {
    let mut factory = MockFactory::default();
    let mut host = host_with_primary(&mut factory, false);
    host.open_window(&mut factory, &secondary()).unwrap();
    host.teardown();
    assert_eq!(host.surface_count(), 0);
    assert_eq!(factory.closes.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn client_round_trips_through_served_channel() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let client = HostClient::from_channel(tx);

    let server = tokio::spawn(async move {
        let mut factory = MockFactory::default();
        let mut host = host_with_primary(&mut factory, true);
        while let Some(request) = rx.recv().await {
            host.serve(request, &mut factory);
            if host.quit_requested() {
                break;
            }
        }
        host
    });

    assert_eq!(client.toggle_fullscreen().await, Ok(false));
    let h = client.open_window(secondary()).await.unwrap();
    client.close_window(h).await.unwrap();
    assert_eq!(
        client.close_window(h).await,
        Err(CommandError::UnknownWindowHandle(h.to_string()))
    );
    client.quit().await.unwrap();

    let host = server.await.unwrap();
    assert!(host.quit_requested());
    assert_eq!(client.toggle_fullscreen().await, Err(CommandError::HostUnavailable));
}

#[tokio::test]
async fn dropped_responder_is_host_unavailable() {
    let client = HostClient::new(|request| {
        drop(request);
        true
    });
    assert_eq!(client.resize(1, 1).await, Err(CommandError::HostUnavailable));
}
