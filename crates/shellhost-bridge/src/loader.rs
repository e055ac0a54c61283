//! Retry-forever loading of the primary surface's content.
//!
//! `RetryLoader` is a plain state machine with no timers of its own:
//!
//! ```text
//! Idle ──start──▶ Loading(n) ──succeeded──▶ Loaded
//!                   │    ▲                    │
//!            failed │    │ poll ≥ retry_at    │ main-frame load failure
//!                   ▼    │                    │
//!           RetryScheduled(n) ◀───────────────┘ (via a fresh Loading)
//! ```
//!
//! The caller performs each [`LoadAttempt`], reports back, and polls with
//! the current time. There is no retry limit and no backoff.

use std::time::{Duration, Instant};

/// Page every surface shows before its target is loaded.
pub const BLANK_PAGE: &str = "about:blank";

/// What to load and which attempt this is (1-based).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadAttempt {
    pub target: String,
    pub attempt: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading { attempt: u32 },
    RetryScheduled { attempt: u32, retry_at: Instant },
    Loaded,
}

#[derive(Debug, Clone)]
pub struct RetryLoader {
    target: String,
    interval: Duration,
    state: LoadState,
    attempts: u32,
}

impl RetryLoader {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(5000);

    pub fn new(target: impl Into<String>, interval: Duration) -> Self {
        Self {
            target: target.into(),
            interval,
            state: LoadState::Idle,
            attempts: 0,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Attempts begun so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn is_loaded(&self) -> bool {
        self.state == LoadState::Loaded
    }

    fn begin(&mut self) -> LoadAttempt {
        self.attempts += 1;
        self.state = LoadState::Loading {
            attempt: self.attempts,
        };
        tracing::debug!(url = %self.target, attempt = self.attempts, "Load attempt started");
        LoadAttempt {
            target: self.target.clone(),
            attempt: self.attempts,
        }
    }

    /// First attempt. Only valid from `Idle`.
    pub fn start(&mut self) -> Option<LoadAttempt> {
        match self.state {
            LoadState::Idle => Some(self.begin()),
            _ => None,
        }
    }

    /// Begin the scheduled retry once its time has come.
    pub fn poll(&mut self, now: Instant) -> Option<LoadAttempt> {
        match self.state {
            LoadState::RetryScheduled { retry_at, .. } if now >= retry_at => Some(self.begin()),
            _ => None,
        }
    }

    /// When the caller should next [`poll`](Self::poll).
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.state {
            LoadState::RetryScheduled { retry_at, .. } => Some(retry_at),
            _ => None,
        }
    }

    /// Report that `attempt` displayed the target. Stale reports are
    /// ignored; returns whether the state changed.
    pub fn attempt_succeeded(&mut self, attempt: u32) -> bool {
        match self.state {
            LoadState::Loading { attempt: current } if current == attempt => {
                tracing::info!(url = %self.target, attempt, "Content loaded");
                self.state = LoadState::Loaded;
                true
            }
            _ => false,
        }
    }

    /// Report that `attempt` failed; schedules the next one an interval
    /// after `now`. Stale reports are ignored.
    pub fn attempt_failed(&mut self, attempt: u32, now: Instant) -> bool {
        match self.state {
            LoadState::Loading { attempt: current } if current == attempt => {
                tracing::warn!(
                    url = %self.target,
                    attempt,
                    retry_in_ms = self.interval.as_millis() as u64,
                    "Load failed, retrying"
                );
                self.state = LoadState::RetryScheduled {
                    attempt,
                    retry_at: now + self.interval,
                };
                true
            }
            _ => false,
        }
    }

    /// The surface itself reported a load failure.
    ///
    /// Sub-frame failures are ignored. A main-frame failure while loading
    /// fails the current attempt; after a successful load it starts a new
    /// attempt right away (returned to the caller); with a retry already
    /// pending it changes nothing.
    pub fn load_failed_notification(&mut self, main_frame: bool, now: Instant) -> Option<LoadAttempt> {
        if !main_frame {
            return None;
        }
        match self.state {
            LoadState::Loading { attempt } => {
                self.attempt_failed(attempt, now);
                None
            }
            LoadState::Loaded => {
                tracing::warn!(url = %self.target, "Loaded content failed, reloading");
                Some(self.begin())
            }
            LoadState::Idle | LoadState::RetryScheduled { .. } => None,
        }
    }

    /// The reachability check for `attempt` finished. Returns `true` when
    /// the target should now be loaded into the surface; the attempt then
    /// completes on [`page_finished`](Self::page_finished).
    pub fn probe_finished(&mut self, attempt: u32, reachable: bool, now: Instant) -> bool {
        if !reachable {
            self.attempt_failed(attempt, now);
            return false;
        }
        self.state == LoadState::Loading { attempt }
    }

    /// The surface finished a main-frame navigation to `url`.
    ///
    /// A browser error page is a main-frame load failure and may start a
    /// new attempt, returned to the caller. The blank start page is
    /// ignored. Anything else completes the attempt in flight.
    pub fn page_finished(&mut self, url: &str, error_page: bool, now: Instant) -> Option<LoadAttempt> {
        if error_page {
            return self.load_failed_notification(true, now);
        }
        if url != BLANK_PAGE {
            if let LoadState::Loading { attempt } = self.state {
                self.attempt_succeeded(attempt);
            }
        }
        None
    }
}
