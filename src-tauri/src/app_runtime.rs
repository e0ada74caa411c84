use tauri::{Manager, RunEvent, WindowEvent};

use crate::{
    append_desktop_log, append_startup_log, exit_events, main_window, platform::Platform,
    tauri_host::TauriHost, window_actions, ShellState, DESKTOP_LOG_FILE, MAIN_WINDOW_LABEL,
};

pub(crate) fn run() {
    append_startup_log("desktop process starting");
    append_startup_log(&format!(
        "desktop log path: {}",
        crate::logging::resolve_desktop_log_path(home::home_dir(), DESKTOP_LOG_FILE).display()
    ));

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app_handle, _args, _cwd| {
            append_desktop_log("second instance launched, activating main window");
            window_actions::activate_main_window(app_handle, append_desktop_log);
        }))
        .on_window_event(|window, event| {
            if window.label() != MAIN_WINDOW_LABEL {
                return;
            }

            if let WindowEvent::Destroyed = event {
                exit_events::handle_main_window_destroyed(window.app_handle());
            }
        })
        .setup(|app| {
            let app_handle = app.handle().clone();
            let resource_dir = app_handle.path().resource_dir()?;
            let app_dir = main_window::resolve_app_dir(&resource_dir);
            let spec = main_window::MainWindowSpec::for_app_dir(&app_dir)?;
            match serde_json::to_string(&spec) {
                Ok(serialized) => append_startup_log(&format!("main window spec: {serialized}")),
                Err(error) => {
                    append_startup_log(&format!("failed to serialize main window spec: {error}"))
                }
            }

            let shell_state: ShellState = ShellState::new(spec, Platform::current());
            app_handle.manage(shell_state);
            let state = app_handle.state::<ShellState>();
            let mut host = TauriHost::new(&app_handle);
            state.with_lifecycle(|lifecycle| lifecycle.on_ready(&mut host, append_startup_log))??;
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| match event {
            RunEvent::ExitRequested { code, api, .. } => {
                exit_events::handle_exit_requested(app_handle, code, &api);
            }
            #[cfg(target_os = "macos")]
            RunEvent::Reopen { .. } => {
                window_actions::activate_main_window(app_handle, append_desktop_log);
            }
            _ => {}
        });
}
