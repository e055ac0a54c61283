//! Probe-driven retry loading of the primary surface.
//!
//! wry does not report a failed load for an unreachable target, so each
//! attempt first probes the target on the runtime. A reachable target is
//! loaded into the primary surface and the attempt succeeds on the
//! page-load notification; an unreachable one fails the attempt and the
//! loader schedules the next.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use shellhost_bridge::{LoadAttempt, RetryLoader, Surface};
use shellhost_webview::{is_error_page, target_url};

use super::core::ShellApp;
use super::types::ShellEvent;

impl ShellApp {
    pub(super) fn start_loading(&mut self, target: String) {
        let mut loader = RetryLoader::new(target, self.config.loader.retry_interval());
        let first = loader.start();
        self.loader = Some(loader);
        if let Some(attempt) = first {
            self.run_attempt(attempt);
        }
    }

    fn run_attempt(&self, attempt: LoadAttempt) {
        let Some(rt) = &self.tokio_runtime else {
            return;
        };
        let client = self.http.clone();
        let proxy = self.proxy.clone();
        let timeout = self.config.loader.probe_timeout();

        rt.spawn(async move {
            let outcome = probe(&client, &attempt.target, timeout).await;
            let event = ShellEvent::ProbeFinished {
                attempt: attempt.attempt,
                outcome,
            };
            if proxy.send_event(event).is_err() {
                tracing::debug!(attempt = attempt.attempt, "Event loop closed before probe finished");
            }
        });
    }

    pub(super) fn on_probe_finished(&mut self, attempt: u32, outcome: Result<(), String>) {
        let Some(loader) = self.loader.as_mut() else {
            return;
        };
        let now = Instant::now();

        if let Err(reason) = &outcome {
            tracing::warn!(url = %loader.target(), attempt, reason = %reason, "Content not reachable");
        }
        if !loader.probe_finished(attempt, outcome.is_ok(), now) {
            return;
        }
        let load = match self.host.primary_mut() {
            Some(primary) => primary.surface.load(loader.target()),
            None => return,
        };
        if let Err(e) = load {
            tracing::warn!(attempt, error = %e, "Primary load request failed");
            loader.attempt_failed(attempt, now);
        }
    }

    /// The primary surface finished loading `url`.
    pub(super) fn on_primary_page_load(&mut self, url: &str) {
        let next = self
            .loader
            .as_mut()
            .and_then(|l| l.page_finished(url, is_error_page(url), Instant::now()));
        if let Some(attempt) = next {
            self.run_attempt(attempt);
        }
    }

    pub(super) fn poll_loader(&mut self, now: Instant) {
        if let Some(attempt) = self.loader.as_mut().and_then(|l| l.poll(now)) {
            self.run_attempt(attempt);
        }
    }

    pub(super) fn next_load_deadline(&self) -> Option<Instant> {
        self.loader.as_ref().and_then(RetryLoader::next_deadline)
    }
}

/// Check that `target` can be displayed right now.
///
/// Any HTTP response counts as reachable; only transport failures do not.
pub(super) async fn probe(client: &reqwest::Client, target: &str, timeout: Duration) -> Result<(), String> {
    let url = target_url(target);
    let lower = url.to_ascii_lowercase();

    if lower.starts_with("http://") || lower.starts_with("https://") {
        let response = client
            .get(&url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        tracing::debug!(url = %url, status = %response.status(), "Probe answered");
        Ok(())
    } else if lower.starts_with("file://") {
        let path = local_path(&url);
        tokio::fs::metadata(&path)
            .await
            .map(|_| ())
            .map_err(|e| format!("{}: {e}", path.display()))
    } else {
        Ok(())
    }
}

/// Filesystem path of a `file://` URL.
pub(super) fn local_path(file_url: &str) -> PathBuf {
    let rest = file_url.get("file://".len()..).unwrap_or_default();
    let rest = rest.strip_prefix("localhost").unwrap_or(rest);
    let rest = rest.split(['?', '#']).next().unwrap_or(rest);
    let decoded = rest.replace("%20", " ");
    // `/C:/dir` on Windows
    match decoded.as_bytes() {
        [b'/', drive, b':', ..] if drive.is_ascii_alphabetic() => PathBuf::from(&decoded[1..]),
        _ => PathBuf::from(decoded),
    }
}
