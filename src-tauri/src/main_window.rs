use std::{
    env,
    path::{Path, PathBuf},
};

use serde::Serialize;
use url::Url;

use crate::{
    APP_DIR_ENV, APP_RESOURCE_DIR, DEVTOOLS_ENV, INDEX_DOCUMENT, MAIN_WINDOW_HEIGHT,
    MAIN_WINDOW_LABEL, MAIN_WINDOW_TITLE, MAIN_WINDOW_WIDTH, WINDOW_ICON_PATH,
};

/// Fixed creation parameters of the single main window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MainWindowSpec {
    pub label: &'static str,
    pub title: &'static str,
    pub width: f64,
    pub height: f64,
    pub icon_path: PathBuf,
    pub document_url: Url,
}

impl MainWindowSpec {
    pub fn for_app_dir(app_dir: &Path) -> Result<Self, String> {
        Ok(Self {
            label: MAIN_WINDOW_LABEL,
            title: MAIN_WINDOW_TITLE,
            width: MAIN_WINDOW_WIDTH,
            height: MAIN_WINDOW_HEIGHT,
            icon_path: app_dir.join(WINDOW_ICON_PATH),
            document_url: document_url_for_app_dir(app_dir)?,
        })
    }
}

pub fn document_url_for_app_dir(app_dir: &Path) -> Result<Url, String> {
    let base = Url::from_directory_path(app_dir).map_err(|_| {
        format!(
            "Application directory must be an absolute path: {}",
            app_dir.display()
        )
    })?;
    base.join(INDEX_DOCUMENT)
        .map_err(|error| format!("Failed to build document URL: {error}"))
}

/// Picks the directory holding `index.html`: the env override when set, else the bundled `app/` resource.
pub fn resolve_app_dir(resource_dir: &Path) -> PathBuf {
    resolve_app_dir_with_override(env::var(APP_DIR_ENV).ok().as_deref(), resource_dir)
}

fn resolve_app_dir_with_override(override_dir: Option<&str>, resource_dir: &Path) -> PathBuf {
    if let Some(raw) = override_dir {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    resource_dir.join(APP_RESOURCE_DIR)
}

pub fn devtools_requested() -> bool {
    is_truthy_flag(env::var(DEVTOOLS_ENV).ok().as_deref())
}

fn is_truthy_flag(raw: Option<&str>) -> bool {
    raw.map(|value| {
        let value = value.trim();
        value == "1" || value.eq_ignore_ascii_case("true")
    })
    .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn absolute_app_dir() -> PathBuf {
        env::temp_dir().join("quickstart shell").join("app")
    }

    #[test]
    fn for_app_dir_uses_fixed_window_parameters() {
        let app_dir = absolute_app_dir();
        let spec = MainWindowSpec::for_app_dir(&app_dir).expect("spec should resolve");

        assert_eq!(spec.label, "main");
        assert_eq!(spec.width, 840.0);
        assert_eq!(spec.height, 760.0);
        assert_eq!(spec.icon_path, app_dir.join("images").join("icon.png"));
    }

    #[test]
    fn document_url_points_at_index_inside_app_dir() {
        let app_dir = absolute_app_dir();
        let url = document_url_for_app_dir(&app_dir).expect("url should resolve");

        assert_eq!(url.scheme(), "file");
        assert!(url.path().ends_with("/quickstart%20shell/app/index.html"));
        assert_eq!(
            url.to_file_path().expect("file url converts back"),
            app_dir.join("index.html")
        );
    }

    #[test]
    fn document_url_rejects_relative_app_dir() {
        assert!(document_url_for_app_dir(Path::new("relative/app")).is_err());
    }

    #[test]
    fn resolve_app_dir_prefers_non_empty_override() {
        let resource_dir = Path::new("/opt/quickstart");
        assert_eq!(
            resolve_app_dir_with_override(Some(" /srv/site "), resource_dir),
            PathBuf::from("/srv/site")
        );
        assert_eq!(
            resolve_app_dir_with_override(Some("   "), resource_dir),
            resource_dir.join("app")
        );
        assert_eq!(
            resolve_app_dir_with_override(None, resource_dir),
            resource_dir.join("app")
        );
    }

    #[test]
    fn is_truthy_flag_accepts_one_and_true() {
        assert!(is_truthy_flag(Some("1")));
        assert!(is_truthy_flag(Some("TRUE")));
        assert!(!is_truthy_flag(Some("0")));
        assert!(!is_truthy_flag(None));
    }
}
