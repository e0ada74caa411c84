use tauri::{AppHandle, Manager};

use crate::{shell_lifecycle::ActivateOutcome, tauri_host::TauriHost, ShellState, MAIN_WINDOW_LABEL};

pub fn focus_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        log("focus_main_window skipped: main window not found");
        return;
    };

    if let Err(error) = window.unminimize() {
        log(&format!("failed to unminimize main window: {error}"));
    }
    if let Err(error) = window.show() {
        log(&format!("failed to show main window: {error}"));
    }
    if let Err(error) = window.set_focus() {
        log(&format!("failed to focus main window: {error}"));
    }
}

/// Recreates the main window when none is open, then brings it to the front.
pub fn activate_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str) + Copy,
{
    let Some(state) = app_handle.try_state::<ShellState>() else {
        log("activate_main_window skipped: shell state not initialized");
        return;
    };

    let mut host = TauriHost::new(app_handle);
    match state.with_lifecycle(|lifecycle| lifecycle.on_activate(&mut host, log)) {
        Ok(Ok(ActivateOutcome::NotReady)) => {}
        Ok(Ok(ActivateOutcome::Created | ActivateOutcome::AlreadyOpen)) => {
            focus_main_window(app_handle, log)
        }
        Ok(Err(error)) | Err(error) => {
            log(&format!("failed to activate main window: {error}"));
        }
    }
}
