//! Lifecycle controller for the single main window.
//!
//! `ShellLifecycle` owns the optional main-window handle and reacts to the
//! host's lifecycle signals (ready, window closed, all windows closed,
//! activate). Everything it needs from the windowing runtime goes through
//! [`ShellHost`], so the transitions can be driven directly in tests.

use url::Url;

use crate::{external_links, main_window::MainWindowSpec, platform::Platform};

/// Capabilities the shell needs from the windowing runtime.
pub trait ShellHost {
    type Window;

    fn create_main_window(&mut self, spec: &MainWindowSpec) -> Result<Self::Window, String>;

    fn load_document(&mut self, window: &Self::Window, url: &Url) -> Result<(), String>;

    fn open_external_url(&mut self, url: &Url) -> Result<(), String>;

    fn quit(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllWindowsClosedOutcome {
    Quit,
    StayResident,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivateOutcome {
    Created,
    AlreadyOpen,
    NotReady,
}

/// What the webview does with a page's new-window request. The shell never hosts a second window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InAppNavigation {
    Cancel,
}

#[derive(Debug)]
pub struct ShellLifecycle<W> {
    spec: MainWindowSpec,
    platform: Platform,
    ready: bool,
    main_window: Option<W>,
}

impl<W> ShellLifecycle<W> {
    pub fn new(spec: MainWindowSpec, platform: Platform) -> Self {
        Self {
            spec,
            platform,
            ready: false,
            main_window: None,
        }
    }

    pub fn has_main_window(&self) -> bool {
        self.main_window.is_some()
    }

    pub fn on_ready<H, F>(&mut self, host: &mut H, log: F) -> Result<(), String>
    where
        H: ShellHost<Window = W>,
        F: Fn(&str),
    {
        self.ready = true;
        if self.has_main_window() {
            log("ready signal ignored: main window already open");
            return Ok(());
        }

        self.open_main_window(host, log)
    }

    pub fn on_activate<H, F>(&mut self, host: &mut H, log: F) -> Result<ActivateOutcome, String>
    where
        H: ShellHost<Window = W>,
        F: Fn(&str),
    {
        if !self.ready {
            log("activate ignored: host not ready yet");
            return Ok(ActivateOutcome::NotReady);
        }
        if self.has_main_window() {
            return Ok(ActivateOutcome::AlreadyOpen);
        }

        log("activate with no main window, recreating it");
        self.open_main_window(host, log)?;
        Ok(ActivateOutcome::Created)
    }

    /// Drops the handle to the closed main window. Returns whether a handle was held.
    pub fn on_window_closed<F>(&mut self, log: F) -> bool
    where
        F: Fn(&str),
    {
        let had_window = self.main_window.take().is_some();
        if had_window {
            log("main window closed, handle released");
        }
        had_window
    }

    pub fn on_all_windows_closed<H, F>(&mut self, host: &mut H, log: F) -> AllWindowsClosedOutcome
    where
        H: ShellHost<Window = W>,
        F: Fn(&str),
    {
        if self.platform.stays_resident_without_windows() {
            log("all windows closed, staying resident until explicit quit");
            return AllWindowsClosedOutcome::StayResident;
        }

        log("all windows closed, quitting");
        host.quit();
        AllWindowsClosedOutcome::Quit
    }

    fn open_main_window<H, F>(&mut self, host: &mut H, log: F) -> Result<(), String>
    where
        H: ShellHost<Window = W>,
        F: Fn(&str),
    {
        let window = host.create_main_window(&self.spec)?;
        log(&format!(
            "main window created: {}x{}",
            self.spec.width, self.spec.height
        ));
        let window = self.main_window.insert(window);
        host.load_document(window, &self.spec.document_url)?;
        log(&format!("main window document loaded: {}", self.spec.document_url));
        Ok(())
    }
}

/// Cancels a new-window request from the page and hands the target to the OS opener.
pub fn redirect_new_window<H, F>(host: &mut H, raw_url: &str, log: F) -> InAppNavigation
where
    H: ShellHost,
    F: Fn(&str),
{
    let url = match external_links::parse_redirect_target(raw_url) {
        Ok(url) => url,
        Err(error) => {
            log(&format!("new-window request dropped: {error}"));
            return InAppNavigation::Cancel;
        }
    };

    match host.open_external_url(&url) {
        Ok(()) => log(&format!("new-window request opened externally: {url}")),
        Err(error) => log(&format!("failed to open external url {url}: {error}")),
    }
    InAppNavigation::Cancel
}
