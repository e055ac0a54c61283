//! wry integration for shell host surfaces.
//!
//! Wraps the `wry` crate to provide:
//! - Webviews built with the hardened posture and the bridge stub injected
//! - IPC from page content into a shared event queue
//! - Page-load and title tracking
//! - Navigation restricted to the surface's own content

pub mod events;
pub mod manager;

pub use events::{PageLoadState, WebViewEvent};
pub use manager::handlers::{is_error_page, navigation_permitted, origin_of, target_url, NavigationScope};
pub use manager::{bounds_to_wry, WebViewConfig, WebViewHandle, WebViewManager};
