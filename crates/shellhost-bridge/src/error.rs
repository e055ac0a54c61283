/// Failure of a bridge command.
///
/// The `Display` text is exactly what crosses the isolation boundary as
/// the envelope's `message`, so variants never carry host paths, I/O
/// details or other internals.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("No handler registered for '{0}'")]
    NotFound(String),

    #[error("Missing required argument '{0}'")]
    MissingArgument(&'static str),

    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("Unknown window handle {0}")]
    UnknownWindowHandle(String),

    #[error("Unable to create screenshot")]
    Screenshot,

    #[error("Unable to open window")]
    OpenWindow,

    #[error("Unable to resize window")]
    Resize,

    #[error("Primary surface is not available")]
    PrimaryUnavailable,

    #[error("Host is not accepting commands")]
    HostUnavailable,
}

impl CommandError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_identifier() {
        assert_eq!(
            CommandError::NotFound("eval".into()).to_string(),
            "No handler registered for 'eval'"
        );
        assert_eq!(
            CommandError::UnknownWindowHandle("42".into()).to_string(),
            "Unknown window handle 42"
        );
        assert_eq!(
            CommandError::invalid("width", "expected an integer, got \"abc\"").to_string(),
            "Invalid argument 'width': expected an integer, got \"abc\""
        );
    }

    #[test]
    fn io_failures_stay_generic() {
        assert_eq!(
            CommandError::Screenshot.to_string(),
            "Unable to create screenshot"
        );
        assert_eq!(CommandError::OpenWindow.to_string(), "Unable to open window");
    }
}
