use std::sync::Mutex;

use tauri::WebviewWindow;

use crate::{main_window::MainWindowSpec, platform::Platform, shell_lifecycle::ShellLifecycle};

/// Managed state holding the lifecycle controller and, through it, the main window handle.
#[derive(Debug)]
pub(crate) struct ShellState<W = WebviewWindow> {
    lifecycle: Mutex<ShellLifecycle<W>>,
}

impl<W> ShellState<W> {
    pub(crate) fn new(spec: MainWindowSpec, platform: Platform) -> Self {
        Self {
            lifecycle: Mutex::new(ShellLifecycle::new(spec, platform)),
        }
    }

    pub(crate) fn with_lifecycle<T, F>(&self, f: F) -> Result<T, String>
    where
        F: FnOnce(&mut ShellLifecycle<W>) -> T,
    {
        let mut guard = self
            .lifecycle
            .lock()
            .map_err(|_| "shell lifecycle state lock poisoned".to_string())?;
        Ok(f(&mut guard))
    }
}
