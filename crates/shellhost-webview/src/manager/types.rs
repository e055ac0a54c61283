use shellhost_bridge::SecurityPosture;

use super::handlers::{target_url, NavigationScope};

/// Configuration for creating a new WebView instance.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Loaded at creation. `None` starts on `about:blank` and waits for an
    /// explicit load.
    pub initial_url: Option<String>,
    /// Where page content may navigate.
    pub scope: NavigationScope,
    pub posture: SecurityPosture,
    pub user_agent: String,
}

impl WebViewConfig {
    /// Config for a surface that will display `target`, loaded immediately
    /// when `load_now` is set.
    pub fn for_target(target: &str, load_now: bool) -> Self {
        Self {
            initial_url: load_now.then(|| target_url(target)),
            scope: NavigationScope::for_target(target),
            posture: SecurityPosture::HARDENED,
            user_agent: format!("shellhost/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deferred_load_starts_blank() {
        let config = WebViewConfig::for_target("http://127.0.0.1:1010/", false);
        assert!(config.initial_url.is_none());
        assert!(config.scope.allows("http://127.0.0.1:1010/app"));
        assert!(!config.posture.devtools);
    }

    #[test]
    fn immediate_load_uses_target() {
        let config = WebViewConfig::for_target("https://a.test/", true);
        assert_eq!(config.initial_url.as_deref(), Some("https://a.test/"));
        assert!(config.user_agent.starts_with("shellhost/"));
    }
}
