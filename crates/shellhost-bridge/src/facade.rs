//! Client-side stub: one method per command, envelope unwrapped.
//!
//! [`BridgeClient`] is the Rust twin of the injected `window.shellhost`
//! object. It sends a command through a [`Transport`], then turns the
//! envelope into a plain value or a [`BridgeError`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::commands::{CLOSE_APP, CLOSE_WINDOW, OPEN_WINDOW, RESIZE, TAKE_SCREENSHOT, TOGGLE_FULLSCREEN};
use crate::dispatcher::{CommandDispatcher, InvocationContext};
use crate::envelope::CommandEnvelope;
use crate::surface::SurfaceId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    #[error("Failed to execute {command}: {message}")]
    Command { command: String, message: String },

    #[error("Failed to execute {command}: {source}")]
    Transport {
        command: String,
        #[source]
        source: TransportError,
    },
}

/// Carries one command to a dispatcher and brings back its envelope.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn invoke(&self, command: &str, args: Vec<Value>) -> Result<CommandEnvelope, TransportError>;
}

/// In-process transport straight into a [`CommandDispatcher`].
pub struct LocalTransport {
    dispatcher: Arc<CommandDispatcher>,
    source: SurfaceId,
    next_id: AtomicU64,
}

impl LocalTransport {
    pub fn new(dispatcher: Arc<CommandDispatcher>, source: SurfaceId) -> Self {
        Self {
            dispatcher,
            source,
            next_id: AtomicU64::new(1),
        }
    }
}

#[async_trait]
impl Transport for LocalTransport {
    async fn invoke(&self, command: &str, args: Vec<Value>) -> Result<CommandEnvelope, TransportError> {
        let request_id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let context = InvocationContext::new(self.source, request_id);
        Ok(self.dispatcher.invoke(command, context, args).await)
    }
}

fn optional<T: Into<Value>>(value: Option<T>) -> Value {
    value.map_or(Value::Null, Into::into)
}

pub struct BridgeClient<T> {
    transport: T,
}

impl<T: Transport> BridgeClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Invoke `command` and unwrap its envelope.
    ///
    /// Success yields `reply`; a success with no reply yields the whole
    /// envelope as JSON.
    pub async fn call(&self, command: &str, args: Vec<Value>) -> Result<Value, BridgeError> {
        let envelope = self
            .transport
            .invoke(command, args)
            .await
            .map_err(|source| BridgeError::Transport {
                command: command.to_string(),
                source,
            })?;
        match envelope {
            CommandEnvelope::Success { reply: Some(reply) } if !reply.is_null() => Ok(reply),
            envelope @ CommandEnvelope::Success { .. } => Ok(envelope.to_value()),
            CommandEnvelope::Failure { message } => Err(BridgeError::Command {
                command: command.to_string(),
                message,
            }),
        }
    }

    pub async fn close_app(&self) -> Result<Value, BridgeError> {
        self.call(CLOSE_APP, Vec::new()).await
    }

    pub async fn toggle_fullscreen(&self) -> Result<Value, BridgeError> {
        self.call(TOGGLE_FULLSCREEN, Vec::new()).await
    }

    /// Dimensions are passed through as given; the host coerces them.
    pub async fn resize(
        &self,
        width: impl Into<Value>,
        height: impl Into<Value>,
    ) -> Result<Value, BridgeError> {
        self.call(RESIZE, vec![width.into(), height.into()]).await
    }

    pub async fn take_screenshot(&self, filename: Option<&str>) -> Result<Value, BridgeError> {
        let args = filename.map(|f| vec![Value::from(f)]).unwrap_or_default();
        self.call(TAKE_SCREENSHOT, args).await
    }

    pub async fn open_window(
        &self,
        url: &str,
        width: Option<u32>,
        height: Option<u32>,
        x: Option<i32>,
        y: Option<i32>,
    ) -> Result<Value, BridgeError> {
        let args = vec![
            Value::from(url),
            optional(width),
            optional(height),
            optional(x),
            optional(y),
        ];
        self.call(OPEN_WINDOW, args).await
    }

    pub async fn close_window(&self, handle: impl Into<Value>) -> Result<Value, BridgeError> {
        self.call(CLOSE_WINDOW, vec![handle.into()]).await
    }
}

#[cfg(test)]
mod tests;
