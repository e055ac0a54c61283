//! Graceful shutdown.

use tokio::runtime::Runtime;

use super::core::ShellApp;
use super::types::RUNTIME_SHUTDOWN_TIMEOUT;

impl ShellApp {
    /// Close every surface and stop the runtime. Safe to call twice.
    pub(super) fn shutdown(&mut self) {
        if self.should_exit {
            return;
        }
        tracing::info!("Initiating graceful shutdown");
        self.should_exit = true;

        self.loader = None;
        self.host.teardown();
        self.windows.clear();
        let _ = self.webviews.drain_events();

        stop_runtime(self.tokio_runtime.take());
        tracing::info!("Graceful shutdown complete");
    }
}

/// Stop `runtime`, giving in-flight handlers a bounded grace period.
pub(super) fn stop_runtime(runtime: Option<Runtime>) {
    if let Some(rt) = runtime {
        rt.shutdown_timeout(RUNTIME_SHUTDOWN_TIMEOUT);
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;

    #[test]
    fn stop_runtime_bounds_stuck_tasks() {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap();
        rt.spawn(async {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        });

        let started = Instant::now();
        stop_runtime(Some(rt));
        assert!(started.elapsed() <= RUNTIME_SHUTDOWN_TIMEOUT + Duration::from_secs(1));
    }

    #[test]
    fn stop_runtime_without_runtime_is_noop() {
        stop_runtime(None);
    }
}
