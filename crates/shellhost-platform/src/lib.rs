pub mod capture;
pub mod crash_report;
pub mod paths;

pub use capture::{capture_region, encode_png, RgbaSnapshot};
pub use paths::{
    config_dir, crash_report_dir, data_dir, ensure_dirs, log_dir, pictures_dir, resolve_screenshot_dir,
};
