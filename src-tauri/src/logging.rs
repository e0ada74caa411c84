use std::{
    env,
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::Local;

use crate::{DESKTOP_LOG_DIR_NAME, DESKTOP_LOG_FILE, LOG_DIR_ENV};

pub fn resolve_desktop_log_dir(home_dir: Option<PathBuf>) -> PathBuf {
    if let Ok(raw) = env::var(LOG_DIR_ENV) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    home_dir
        .map(|home| home.join(DESKTOP_LOG_DIR_NAME).join("logs"))
        .unwrap_or_else(|| env::temp_dir().join(DESKTOP_LOG_DIR_NAME))
}

pub fn resolve_desktop_log_path(home_dir: Option<PathBuf>, file_name: &str) -> PathBuf {
    resolve_desktop_log_dir(home_dir).join(file_name)
}

fn format_log_line(scope: &str, message: &str) -> String {
    format!(
        "[{}] [{}] {}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        scope,
        message
    )
}

fn append_line(path: &Path, line: &str) -> Result<(), String> {
    if let Some(parent_dir) = path.parent() {
        fs::create_dir_all(parent_dir).map_err(|error| {
            format!(
                "Failed to create log directory {}: {}",
                parent_dir.display(),
                error
            )
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|error| format!("Failed to open log file {}: {}", path.display(), error))?;
    file.write_all(line.as_bytes())
        .map_err(|error| format!("Failed to write log file {}: {}", path.display(), error))
}

fn append_scoped_log(scope: &str, message: &str) {
    let line = format_log_line(scope, message);
    if cfg!(debug_assertions) {
        eprint!("{line}");
    }

    let path = resolve_desktop_log_path(home::home_dir(), DESKTOP_LOG_FILE);
    if let Err(error) = append_line(&path, &line) {
        eprintln!("{error}");
    }
}

pub fn append_desktop_log(message: &str) {
    append_scoped_log("desktop", message);
}

pub fn append_startup_log(message: &str) {
    append_scoped_log("startup", message);
}
