//! The boot-message script.

/// Messages printed by the standard boot sequence. Empty entries are blank
/// rows that the typing driver skips without typing anything.
pub const BOOT_MESSAGES: [&str; 14] = [
    "Flash BIOS 2.0 Release 25.0",
    "Copyright 2001-2025 Select Electronic Consulting LLC",
    "All Rights Reserved",
    "",
    "CPU = Zilog(tm) Z80 2.5 MHz",
    "Memory Test: 64000K OK",
    "",
    "Initializing Kernel v1.0...",
    "Loading drivers... [OK]",
    "Checking file system... [OK]",
    "Mounting virtual drives... [OK]",
    "",
    "POST Completed with [0] errors",
    "Starting graphical interface...",
];

/// Immutable, ordered list of lines revealed by the typing driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootScript {
    lines: Vec<String>,
}

impl Default for BootScript {
    fn default() -> Self {
        Self::standard()
    }
}

impl BootScript {
    /// Build a script from arbitrary lines.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// The fixed 14-line BIOS script.
    pub fn standard() -> Self {
        Self::new(BOOT_MESSAGES)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Length of line `index` in characters, or 0 past the end.
    pub fn char_len(&self, index: usize) -> usize {
        self.line(index).map_or(0, |line| line.chars().count())
    }
}
