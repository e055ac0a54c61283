//! tracing subscriber setup.
//!
//! The subscriber is installed before the config file is read so loader
//! diagnostics are not lost. The config's `[logging] level` is applied
//! afterwards through a reload handle unless `--log-level` was given.

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{reload, EnvFilter, Registry};

pub const DEFAULT_DIRECTIVE: &str = "shellhost=info";

/// Swaps the active filter directive after startup.
pub struct LogHandle(reload::Handle<EnvFilter, Registry>);

impl LogHandle {
    pub fn set_directive(&self, directive: &str) {
        if let Err(e) = self.0.reload(filter_for(directive)) {
            tracing::warn!("Failed to apply log level {directive:?}: {e}");
        }
    }
}

/// Install the global subscriber filtered by `RUST_LOG` plus `directive`.
pub fn init(directive: &str) -> LogHandle {
    let (filter, handle) = reload::Layer::new(filter_for(directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    LogHandle(handle)
}

fn filter_for(directive: &str) -> EnvFilter {
    EnvFilter::from_default_env().add_directive(parse_directive(directive))
}

pub(crate) fn parse_directive(directive: &str) -> Directive {
    directive.parse().unwrap_or_else(|_| {
        eprintln!("invalid log directive {directive:?}, using info");
        LevelFilter::INFO.into()
    })
}
