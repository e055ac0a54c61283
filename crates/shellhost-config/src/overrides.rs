//! Command-line overrides layered on top of the config file.

use crate::schema::ShellConfig;

/// Startup values supplied on the command line. `None` keeps the file value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupOverrides {
    pub url: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub x: Option<i32>,
    pub y: Option<i32>,
}

impl StartupOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge into `config`. Fullscreen is derived afterwards from the merged
    /// geometry, so a flag on either layer turns it off.
    pub fn apply(self, config: &mut ShellConfig) {
        let startup = &mut config.startup;
        if let Some(url) = self.url {
            startup.url = url;
        }
        startup.width = self.width.or(startup.width);
        startup.height = self.height.or(startup.height);
        startup.x = self.x.or(startup.x);
        startup.y = self.y.or(startup.y);
    }
}
