//! Internal types and constants for the app state module.

use std::time::Duration;

use shellhost_bridge::{CommandEnvelope, HostRequest, SurfaceId};

/// Events delivered to the winit loop through its proxy.
#[derive(Debug)]
pub enum ShellEvent {
    /// A command handler needs host state.
    Host(HostRequest),
    /// A command finished; settle request `id` of document `doc` in `surface`.
    Reply {
        surface: SurfaceId,
        doc: String,
        id: u64,
        envelope: CommandEnvelope,
    },
    /// The reachability probe for a load attempt completed.
    ProbeFinished {
        attempt: u32,
        outcome: Result<(), String>,
    },
}

/// How often to poll webview events (approx 60 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Upper bound on waiting for in-flight handlers at shutdown.
pub(super) const RUNTIME_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);
