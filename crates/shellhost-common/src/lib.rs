pub mod errors;
pub mod types;

pub use errors::{ConfigError, PlatformError, ShellError};
pub use types::Bounds;

pub type Result<T> = std::result::Result<T, ShellError>;
