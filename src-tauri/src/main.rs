#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_runtime;
mod app_types;
mod exit_events;
mod external_links;
mod logging;
mod main_window;
mod platform;
mod shell_lifecycle;
mod tauri_host;
mod window_actions;

pub(crate) use app_constants::*;
pub(crate) use app_types::ShellState;
pub(crate) use logging::{append_desktop_log, append_startup_log};

fn main() {
    app_runtime::run();
}
