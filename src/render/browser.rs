use std::path::Path;
use std::process::Command;

use log::warn;

/// Opens the report with the platform's web browser.
#[cfg(target_os = "linux")]
pub fn open_with_web_browser(path: &Path) {
    let fullpath = path.to_string_lossy().to_string();
    for browser in ["xdg-open", "firefox", "chromium"] {
        if Command::new(browser).arg(&fullpath).spawn().is_ok() {
            return;
        }
    }
    warn!("no web browser found, open {} manually", fullpath);
}

/// Opens the report with the platform's web browser.
#[cfg(target_os = "macos")]
pub fn open_with_web_browser(path: &Path) {
    let fullpath = path.to_string_lossy().to_string();
    if Command::new("open").arg(&fullpath).spawn().is_err() {
        warn!("failed to open {} automatically", fullpath);
    }
}

/// Opens the report with the platform's web browser.
#[cfg(target_os = "windows")]
pub fn open_with_web_browser(path: &Path) {
    let fullpath = path.to_string_lossy().to_string();
    if Command::new("cmd")
        .arg("/C")
        .arg(format!(r#"start {}"#, fullpath))
        .spawn()
        .is_err()
    {
        warn!("failed to open {} automatically", fullpath);
    }
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
pub fn open_with_web_browser(path: &Path) {
    warn!("cannot launch a browser on this platform, open {} manually", path.display());
}
