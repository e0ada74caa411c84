use std::process::{Command, Stdio};

use url::Url;

/// Parses the target of a redirected new-window request. Any absolute URL is accepted.
pub fn parse_redirect_target(raw_url: &str) -> Result<Url, String> {
    let trimmed = raw_url.trim();
    if trimmed.is_empty() {
        return Err("new-window request carried no URL".to_string());
    }

    Url::parse(trimmed)
        .map_err(|error| format!("new-window target '{trimmed}' is not a URL: {error}"))
}

#[cfg(target_os = "macos")]
fn default_handler_command(url: &Url) -> Command {
    let mut command = Command::new("open");
    command.arg(url.as_str());
    command
}

#[cfg(target_os = "windows")]
fn default_handler_command(url: &Url) -> Command {
    let mut command = Command::new("rundll32");
    command.args(["url.dll,FileProtocolHandler", url.as_str()]);
    command
}

#[cfg(all(unix, not(target_os = "macos")))]
fn default_handler_command(url: &Url) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url.as_str());
    command
}

/// Hands `url` to the OS default handler without waiting for it.
#[cfg(any(target_os = "macos", target_os = "windows", unix))]
pub fn open_with_default_handler(url: &Url) -> Result<(), String> {
    let mut command = default_handler_command(url);
    let program = command.get_program().to_string_lossy().into_owned();
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|error| format!("redirect of {url} via '{program}' failed: {error}"))
}

#[cfg(not(any(target_os = "macos", target_os = "windows", unix)))]
pub fn open_with_default_handler(url: &Url) -> Result<(), String> {
    Err(format!("no default handler available to redirect {url} on this platform"))
}
