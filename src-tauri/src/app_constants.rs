pub const MAIN_WINDOW_LABEL: &str = "main";
pub const MAIN_WINDOW_TITLE: &str = "Quickstart Shell";
pub const MAIN_WINDOW_WIDTH: f64 = 840.0;
pub const MAIN_WINDOW_HEIGHT: f64 = 760.0;

pub const APP_RESOURCE_DIR: &str = "app";
pub const INDEX_DOCUMENT: &str = "index.html";
pub const WINDOW_ICON_PATH: &str = "images/icon.png";

pub const APP_DIR_ENV: &str = "QUICKSTART_SHELL_APP_DIR";
pub const DEVTOOLS_ENV: &str = "QUICKSTART_SHELL_DEVTOOLS";
pub const LOG_DIR_ENV: &str = "QUICKSTART_SHELL_LOG_DIR";

pub const DESKTOP_LOG_DIR_NAME: &str = ".quickstart-shell";
pub const DESKTOP_LOG_FILE: &str = "desktop.log";
