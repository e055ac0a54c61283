mod report;

pub use report::{install_panic_hook, write_crash_report};
