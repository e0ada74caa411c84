/// Platform conventions that change how the shell reacts to its last window closing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Apps keep running with no windows open until the user quits explicitly.
    MacOs,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Other
        }
    }

    pub fn stays_resident_without_windows(self) -> bool {
        matches!(self, Self::MacOs)
    }
}
