//! Named command handlers and the boundary that envelopes their outcomes.
//!
//! Every handler runs as its own tokio task. Whatever happens inside it,
//! error or panic, the caller of [`CommandDispatcher::invoke`] only ever sees
//! a [`CommandEnvelope`].

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use serde_json::Value;

use crate::envelope::CommandEnvelope;
use crate::error::CommandError;
use crate::surface::SurfaceId;

// =============================================================================
// INVOCATION
// =============================================================================

/// Who asked, and which request this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvocationContext {
    pub source: SurfaceId,
    pub request_id: u64,
}

impl InvocationContext {
    pub fn new(source: SurfaceId, request_id: u64) -> Self {
        Self { source, request_id }
    }

    pub fn primary(request_id: u64) -> Self {
        Self::new(SurfaceId::Primary, request_id)
    }
}

/// A single call: context plus positional arguments.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub context: InvocationContext,
    pub args: Vec<Value>,
}

pub type HandlerResult = Result<Option<Value>, CommandError>;

type Handler = Arc<dyn Fn(Invocation) -> BoxFuture<'static, HandlerResult> + Send + Sync>;

// =============================================================================
// DISPATCHER
// =============================================================================

/// Command name to handler table.
///
/// Populated at startup, then shared read-only behind an `Arc`.
/// Registering a name twice replaces the earlier handler.
#[derive(Default)]
pub struct CommandDispatcher {
    handlers: HashMap<String, Handler>,
}

impl CommandDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `handler`.
    pub fn register<F, Fut>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(Invocation) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        let name = name.into();
        let handler: Handler = Arc::new(move |invocation| handler(invocation).boxed());
        if self.handlers.insert(name.clone(), handler).is_some() {
            tracing::warn!(command = %name, "Command re-registered, previous handler replaced");
        }
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Registered command names, sorted.
    pub fn commands(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Run the handler bound to `name` and envelope its outcome.
    ///
    /// Never fails: unknown names, handler errors and handler panics all
    /// come back as failure envelopes.
    pub async fn invoke(
        &self,
        name: &str,
        context: InvocationContext,
        args: Vec<Value>,
    ) -> CommandEnvelope {
        let Some(handler) = self.handlers.get(name).cloned() else {
            tracing::warn!(command = name, source = %context.source, "Unknown command");
            return CommandEnvelope::from_outcome::<CommandError>(Err(CommandError::NotFound(
                name.to_string(),
            )));
        };

        tracing::debug!(
            command = name,
            source = %context.source,
            request_id = context.request_id,
            args = args.len(),
            "Invoking command"
        );

        let task = tokio::spawn(handler(Invocation { context, args }));
        match task.await {
            Ok(Ok(reply)) => CommandEnvelope::success(reply),
            Ok(Err(e)) => {
                tracing::warn!(
                    command = name,
                    source = %context.source,
                    error = ?e,
                    "Command failed"
                );
                CommandEnvelope::from_outcome::<CommandError>(Err(e))
            }
            Err(join_error) => {
                tracing::error!(
                    command = name,
                    source = %context.source,
                    panicked = join_error.is_panic(),
                    "Command handler did not complete"
                );
                CommandEnvelope::unknown()
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
