//! Main window and application lifecycle
//!
//! The host owns exactly one window. Its content is served by the UI dev
//! server and talks to the host only through registered commands.

use crate::config::{MAIN_WINDOW_HEIGHT, MAIN_WINDOW_LABEL, MAIN_WINDOW_TITLE, MAIN_WINDOW_WIDTH};
use tauri::{AppHandle, Manager, Runtime, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

/// Creates the main window, or returns the existing one.
///
/// `WebviewUrl::App` resolves to the configured dev URL in development, so the
/// content keeps local-origin IPC access to the app's commands.
pub fn create_main_window<R: Runtime>(app: &AppHandle<R>) -> tauri::Result<WebviewWindow<R>> {
    if let Some(window) = app.get_webview_window(MAIN_WINDOW_LABEL) {
        return Ok(window);
    }

    WebviewWindowBuilder::new(app, MAIN_WINDOW_LABEL, WebviewUrl::default())
        .title(MAIN_WINDOW_TITLE)
        .inner_size(MAIN_WINDOW_WIDTH, MAIN_WINDOW_HEIGHT)
        .build()
}

/// Brings the main window to the front, recreating it if it was closed.
pub fn focus_main_window<R: Runtime>(app: &AppHandle<R>) {
    match create_main_window(app) {
        Ok(window) => {
            let _ = window.unminimize();
            let _ = window.show();
            let _ = window.set_focus();
        }
        Err(e) => log::error!("[main] Failed to restore main window: {}", e),
    }
}

/// Whether the process should exit once its last window is closed.
///
/// macOS apps conventionally stay running without windows.
pub fn exit_when_windows_closed(target_os: &str) -> bool {
    target_os != "macos"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quits_on_last_window_except_macos() {
        assert!(exit_when_windows_closed("linux"));
        assert!(exit_when_windows_closed("windows"));
        assert!(!exit_when_windows_closed("macos"));
    }
}
