//! Commented default config written on first run.

use crate::schema::DEFAULT_START_URL;

pub(super) fn default_config_toml() -> String {
    format!(
        r#"# Shell host configuration.
# Every value is optional; command-line flags override this file.

[startup]
# URL or local path shown in the primary surface.
url = "{DEFAULT_START_URL}"
# Leaving all four of width/height/x/y unset starts fullscreen.
# width = 1280
# height = 800
# x = 0
# y = 0

[loader]
# Delay between failed load attempts. Retries never give up.
retry_interval_ms = 5000
# Timeout for one reachability probe of the load target.
probe_timeout_ms = 3000

[screenshots]
# Defaults to the user's pictures directory.
# directory = "/tmp/shots"

[logging]
level = "shellhost=info"
"#
    )
}
