use tauri::{AppHandle, ExitRequestApi, Manager};

use crate::{
    append_desktop_log, shell_lifecycle::AllWindowsClosedOutcome, tauri_host::TauriHost,
    ShellState,
};

/// Runs when the last window has closed. Explicit exits carry a code and are left alone.
pub fn handle_exit_requested(app_handle: &AppHandle, code: Option<i32>, api: &ExitRequestApi) {
    if code.is_some() {
        append_desktop_log(&format!("exit requested with code {code:?}"));
        return;
    }

    let Some(state) = app_handle.try_state::<ShellState>() else {
        return;
    };

    let mut host = TauriHost::new(app_handle);
    match state.with_lifecycle(|lifecycle| {
        lifecycle.on_all_windows_closed(&mut host, append_desktop_log)
    }) {
        Ok(AllWindowsClosedOutcome::StayResident) => api.prevent_exit(),
        Ok(AllWindowsClosedOutcome::Quit) => {}
        Err(error) => append_desktop_log(&format!(
            "failed to apply all-windows-closed rule: {error}"
        )),
    }
}

pub fn handle_main_window_destroyed(app_handle: &AppHandle) {
    let Some(state) = app_handle.try_state::<ShellState>() else {
        return;
    };

    if let Err(error) =
        state.with_lifecycle(|lifecycle| lifecycle.on_window_closed(append_desktop_log))
    {
        append_desktop_log(&format!("failed to release main window handle: {error}"));
    }
}
