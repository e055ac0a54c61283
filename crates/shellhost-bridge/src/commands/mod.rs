//! The fixed command set.
//!
//! | command             | args                          | reply            |
//! |---------------------|-------------------------------|------------------|
//! | `toggle-fullscreen` |                               | none             |
//! | `resize`            | width, height                 | none             |
//! | `take-screenshot`   | filename?                     | `"<name>.png"`   |
//! | `open-window`       | url, width?, height?, x?, y?  | handle           |
//! | `close-window`      | handle                        | none             |
//! | `close-app`         |                               | none             |

mod screenshot;
mod window;

use std::path::PathBuf;
use std::sync::Arc;

use shellhost_common::Bounds;

use crate::dispatcher::CommandDispatcher;
use crate::host::HostClient;

pub use screenshot::{screenshot_name, write_screenshot};

pub const TOGGLE_FULLSCREEN: &str = "toggle-fullscreen";
pub const RESIZE: &str = "resize";
pub const TAKE_SCREENSHOT: &str = "take-screenshot";
pub const OPEN_WINDOW: &str = "open-window";
pub const CLOSE_WINDOW: &str = "close-window";
pub const CLOSE_APP: &str = "close-app";

pub const BUILTIN_COMMANDS: [&str; 6] = [
    TOGGLE_FULLSCREEN,
    RESIZE,
    TAKE_SCREENSHOT,
    OPEN_WINDOW,
    CLOSE_WINDOW,
    CLOSE_APP,
];

/// Placement of a secondary surface when the caller gives none.
pub const DEFAULT_WINDOW_BOUNDS: Bounds = Bounds::new(100, 100, 500, 400);

/// Dispatcher with every builtin command bound to `host`.
pub fn builtin_dispatcher(host: HostClient, screenshot_dir: PathBuf) -> CommandDispatcher {
    let mut dispatcher = CommandDispatcher::new();
    let screenshot_dir = Arc::new(screenshot_dir);

    let h = host.clone();
    dispatcher.register(TOGGLE_FULLSCREEN, move |inv| window::toggle_fullscreen(h.clone(), inv));

    let h = host.clone();
    dispatcher.register(RESIZE, move |inv| window::resize(h.clone(), inv));

    let h = host.clone();
    dispatcher.register(TAKE_SCREENSHOT, move |inv| {
        screenshot::take_screenshot(h.clone(), Arc::clone(&screenshot_dir), inv)
    });

    let h = host.clone();
    dispatcher.register(OPEN_WINDOW, move |inv| window::open_window(h.clone(), inv));

    let h = host.clone();
    dispatcher.register(CLOSE_WINDOW, move |inv| window::close_window(h.clone(), inv));

    dispatcher.register(CLOSE_APP, move |inv| window::close_app(host.clone(), inv));

    dispatcher
}
