use std::backtrace::Backtrace;
use std::panic::PanicHookInfo;
use std::path::{Path, PathBuf};

use crate::paths::crash_report_dir;

/// Writes a crash report to disk when a panic occurs.
///
/// Returns the path to the written report, or `None` if writing failed.
/// Runs inside a panic hook, so every error is swallowed.
pub fn write_crash_report(info: &PanicHookInfo) -> Option<PathBuf> {
    let dir = crash_report_dir().ok()?;
    write_report_to(&dir, &panic_message(info), info.location().map(|l| {
        serde_json::json!({
            "file": l.file(),
            "line": l.line(),
            "column": l.column(),
        })
    }))
}

/// Chain a crash-report writer in front of the default panic hook.
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let path = write_crash_report(info);

        eprintln!("\n--- shellhost crashed ---");
        if let Some(p) = &path {
            eprintln!("Crash report written to: {}", p.display());
        }
        eprintln!("-------------------------\n");

        default_hook(info);
    }));
}

fn panic_message(info: &PanicHookInfo) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

fn write_report_to(
    dir: &Path,
    message: &str,
    location: Option<serde_json::Value>,
) -> Option<PathBuf> {
    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S").to_string();
    let path = dir.join(format!("crash_{timestamp}.json"));

    let report = serde_json::json!({
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "os": std::env::consts::OS,
        "arch": std::env::consts::ARCH,
        "panic_message": message,
        "location": location,
        "backtrace": Backtrace::force_capture().to_string(),
    });

    std::fs::create_dir_all(dir).ok()?;
    std::fs::write(&path, serde_json::to_string_pretty(&report).ok()?).ok()?;

    // Owner-only: the backtrace can include load targets and local paths.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600));
    }

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_contains_message_and_location() {
        let dir = tempfile::tempdir().unwrap();
        let location = serde_json::json!({ "file": "src/main.rs", "line": 7, "column": 3 });
        let path = write_report_to(dir.path(), "boom", Some(location)).unwrap();

        let report: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(report["panic_message"], "boom");
        assert_eq!(report["location"]["line"], 7);
        assert_eq!(report["os"], std::env::consts::OS);
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("crash_"));
    }

    #[cfg(unix)]
    #[test]
    fn report_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = write_report_to(dir.path(), "boom", None).unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
