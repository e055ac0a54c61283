//! Host orchestration and command bridge.
//!
//! Toolkit-agnostic core of the shell host:
//! - [`envelope`]: the two-shape result record every command returns
//! - [`dispatcher`]: named command handlers, panic and error containment
//! - [`commands`]: the fixed command set
//! - [`registry`]: secondary surfaces keyed by opaque handle
//! - [`host`]: `HostState`, owned by the event-loop thread, and the
//!   `HostClient` handlers use to reach it
//! - [`loader`]: the retry-forever content loading state machine
//! - [`facade`] and [`ipc`]: the content-side stub (Rust client and the
//!   injected JavaScript) plus the wire request format

pub mod args;
pub mod commands;
pub mod dispatcher;
pub mod envelope;
pub mod error;
pub mod facade;
pub mod host;
pub mod ipc;
pub mod loader;
pub mod registry;
pub mod surface;

pub use commands::{builtin_dispatcher, BUILTIN_COMMANDS};
pub use dispatcher::{CommandDispatcher, Invocation, InvocationContext};
pub use envelope::{CommandEnvelope, UNKNOWN_ERROR_MESSAGE};
pub use error::CommandError;
pub use facade::{BridgeClient, BridgeError, LocalTransport, Transport, TransportError};
pub use host::{HostClient, HostRequest, HostState};
pub use ipc::BridgeRequest;
pub use loader::{LoadAttempt, LoadState, RetryLoader, BLANK_PAGE};
pub use registry::{SecondarySurface, SurfaceRegistry};
pub use surface::{
    SecurityPosture, Surface, SurfaceError, SurfaceFactory, SurfaceHandle, SurfaceId, SurfaceSpec,
};
