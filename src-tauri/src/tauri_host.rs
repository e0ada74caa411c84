use tauri::{
    image::Image,
    webview::{NewWindowFeatures, NewWindowResponse},
    AppHandle, WebviewUrl, WebviewWindow, WebviewWindowBuilder, Wry,
};
use url::Url;

use crate::{
    append_desktop_log, external_links, main_window::MainWindowSpec, shell_lifecycle,
    shell_lifecycle::{InAppNavigation, ShellHost},
};

const BLANK_PAGE_URL: &str = "about:blank";

/// `ShellHost` backed by the running Tauri application.
pub struct TauriHost<'a> {
    app_handle: &'a AppHandle,
}

impl<'a> TauriHost<'a> {
    pub fn new(app_handle: &'a AppHandle) -> Self {
        Self { app_handle }
    }
}

fn handle_new_window_request(app_handle: &AppHandle, url: Url) -> NewWindowResponse<Wry> {
    let mut host = TauriHost::new(app_handle);
    match shell_lifecycle::redirect_new_window(&mut host, url.as_str(), append_desktop_log) {
        InAppNavigation::Cancel => NewWindowResponse::Deny,
    }
}

impl ShellHost for TauriHost<'_> {
    type Window = WebviewWindow;

    fn create_main_window(&mut self, spec: &MainWindowSpec) -> Result<WebviewWindow, String> {
        let blank_url = Url::parse(BLANK_PAGE_URL)
            .map_err(|error| format!("Invalid initial webview URL: {error}"))?;
        let redirect_app_handle = self.app_handle.clone();

        let mut builder =
            WebviewWindowBuilder::new(self.app_handle, spec.label, WebviewUrl::External(blank_url))
                .title(spec.title)
                .inner_size(spec.width, spec.height)
                .on_new_window(move |url, _features: NewWindowFeatures| {
                    handle_new_window_request(&redirect_app_handle, url)
                });

        match Image::from_path(&spec.icon_path) {
            Ok(icon) => {
                builder = builder.icon(icon).map_err(|error| {
                    format!(
                        "Failed to apply window icon {}: {error}",
                        spec.icon_path.display()
                    )
                })?;
            }
            Err(error) => append_desktop_log(&format!(
                "window icon {} unavailable, continuing without it: {error}",
                spec.icon_path.display()
            )),
        }

        builder
            .build()
            .map_err(|error| format!("Failed to create main window: {error}"))
    }

    fn load_document(&mut self, window: &WebviewWindow, url: &Url) -> Result<(), String> {
        window
            .navigate(url.clone())
            .map_err(|error| format!("Failed to load {url}: {error}"))?;

        #[cfg(debug_assertions)]
        if crate::main_window::devtools_requested() {
            window.open_devtools();
        }

        Ok(())
    }

    fn open_external_url(&mut self, url: &Url) -> Result<(), String> {
        external_links::open_with_default_handler(url)
    }

    fn quit(&mut self) {
        self.app_handle.exit(0);
    }
}
