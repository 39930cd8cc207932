//! Per-platform script conventions.

/// Platform the scripts are written for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOs,
    Windows,
}

impl Platform {
    /// The platform this binary runs on (other Unixes count as Linux)
    pub const fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }

    /// Name shown in the status line
    pub fn name(self) -> &'static str {
        match self {
            Platform::Linux => "Linux",
            Platform::MacOs => "macOS",
            Platform::Windows => "Windows",
        }
    }

    /// First line of every script file
    pub fn header(self) -> &'static str {
        match self {
            Platform::Windows => "@echo off",
            Platform::Linux | Platform::MacOs => "#!/bin/bash",
        }
    }

    /// Extension appended to new scripts (with the dot)
    pub fn default_extension(self) -> &'static str {
        match self {
            Platform::Windows => ".bat",
            Platform::Linux | Platform::MacOs => ".sh",
        }
    }

    /// Extensions that need no appending
    pub fn script_extensions(self) -> &'static [&'static str] {
        match self {
            Platform::Windows => &[".bat", ".cmd"],
            Platform::Linux | Platform::MacOs => &[".sh"],
        }
    }

    /// File name of the temporary runner
    pub fn runner_file_name(self) -> &'static str {
        match self {
            Platform::Windows => "kort_exec.bat",
            Platform::Linux | Platform::MacOs => "kort_exec.sh",
        }
    }
}
