//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. The event loop thread owns `HostState` and every surface;
//! command handlers run on the tokio runtime and reach it through
//! `ShellEvent::Host` requests.

mod core;
mod dispatch;
mod event_handler;
mod factory;
mod lifecycle;
mod loading;
mod polling;
mod shutdown;
mod surface;
mod types;

pub use core::ShellApp;
pub use types::ShellEvent;
