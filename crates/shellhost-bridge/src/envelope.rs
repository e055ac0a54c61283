//! The result record every command invocation returns.
//!
//! On the wire an envelope is exactly one of
//! `{"success": true, "reply": <value>}` (reply omitted when absent) or
//! `{"success": false, "message": "<text>"}`. Failures carry nothing but a
//! string.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Substituted whenever a failure has no usable message.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "WireEnvelope", from = "WireEnvelope")]
pub enum CommandEnvelope {
    Success { reply: Option<Value> },
    Failure { message: String },
}

#[derive(Serialize, Deserialize)]
struct WireEnvelope {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reply: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl From<CommandEnvelope> for WireEnvelope {
    fn from(envelope: CommandEnvelope) -> Self {
        match envelope {
            CommandEnvelope::Success { reply } => Self {
                success: true,
                reply: reply.filter(|v| !v.is_null()),
                message: None,
            },
            CommandEnvelope::Failure { message } => Self {
                success: false,
                reply: None,
                message: Some(message),
            },
        }
    }
}

impl From<WireEnvelope> for CommandEnvelope {
    fn from(wire: WireEnvelope) -> Self {
        if wire.success {
            Self::Success {
                reply: wire.reply.filter(|v| !v.is_null()),
            }
        } else {
            Self::failure(wire.message.unwrap_or_default())
        }
    }
}

impl CommandEnvelope {
    pub fn success(reply: Option<Value>) -> Self {
        Self::Success { reply }
    }

    /// A failure envelope. Blank messages become [`UNKNOWN_ERROR_MESSAGE`].
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::unknown()
        } else {
            Self::Failure { message }
        }
    }

    /// The failure shape used when nothing about the error can be said.
    pub fn unknown() -> Self {
        Self::Failure {
            message: UNKNOWN_ERROR_MESSAGE.to_string(),
        }
    }

    /// Envelope a handler outcome.
    pub fn from_outcome<E: Display>(outcome: Result<Option<Value>, E>) -> Self {
        match outcome {
            Ok(reply) => Self::success(reply),
            Err(e) => Self::failure(describe(&e)),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { message } => Some(message),
        }
    }

    /// The wire form as a JSON value.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| {
            serde_json::json!({ "success": false, "message": UNKNOWN_ERROR_MESSAGE })
        })
    }
}

/// Human-readable message for an error, or the generic message when the
/// error renders as blank.
pub fn describe<E: Display + ?Sized>(error: &E) -> String {
    let text = error.to_string();
    if text.trim().is_empty() {
        UNKNOWN_ERROR_MESSAGE.to_string()
    } else {
        text
    }
}
