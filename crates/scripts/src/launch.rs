//! Launching scripts in a separate terminal window.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use anyhow::{anyhow, Context, Result};

use crate::store::make_executable;
use crate::Platform;

/// Terminal emulators tried in order on Linux, with the flag that takes the
/// command to run.
const LINUX_TERMINALS: &[(&str, &str)] = &[
    ("x-terminal-emulator", "-e"),
    ("gnome-terminal", "--"),
    ("xterm", "-e"),
    ("konsole", "-e"),
];

const LINUX_FILE_MANAGERS: &[&str] = &["xdg-open", "nautilus", "dolphin"];

/// Wrapper that runs `body` and waits for a key before the window closes.
pub fn runner_script(body: &str, platform: Platform) -> String {
    match platform {
        Platform::Windows => format!(
            "@echo off\n{}\necho.\necho Press any key to close...\npause > nul\n",
            body
        ),
        Platform::Linux | Platform::MacOs => format!(
            "#!/bin/bash\n{}\necho\nread -p 'Press Enter to close...'\n",
            body
        ),
    }
}

/// Run the script at `path` in a new terminal window.
///
/// The script body is copied into a runner in the temp directory so the
/// window stays open after the script finishes. The returned child must be
/// handed to [`reap_finished`] until it exits.
pub fn run_in_terminal(path: &Path) -> Result<Child> {
    let platform = Platform::current();
    let content = fs::read(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    let body = crate::strip_header(&String::from_utf8_lossy(&content), platform);

    let runner = write_runner(&body, platform)?;
    log::info!("Launching {} via {}", path.display(), runner.display());
    spawn_terminal(&runner, platform)
}

/// Open `dir` in the system file manager.
pub fn open_folder(dir: &Path) -> Result<Child> {
    match Platform::current() {
        Platform::Windows => spawn_detached(Command::new("explorer").arg(dir)),
        Platform::MacOs => spawn_detached(Command::new("open").arg(dir)),
        Platform::Linux => {
            for manager in LINUX_FILE_MANAGERS {
                if let Ok(child) = spawn_detached(Command::new(manager).arg(dir)) {
                    return Ok(child);
                }
            }
            Err(anyhow!("No file manager found"))
        }
    }
}

fn write_runner(body: &str, platform: Platform) -> Result<PathBuf> {
    let runner = std::env::temp_dir().join(platform.runner_file_name());
    fs::write(&runner, runner_script(body, platform))
        .with_context(|| format!("Failed to write runner {}", runner.display()))?;
    make_executable(&runner)?;
    Ok(runner)
}

fn spawn_terminal(runner: &Path, platform: Platform) -> Result<Child> {
    match platform {
        Platform::Windows => spawn_detached(
            Command::new("cmd")
                .args(["/C", "start", "", "cmd", "/C"])
                .arg(runner),
        ),
        Platform::MacOs => spawn_detached(
            Command::new("open")
                .args(["-a", "Terminal"])
                .arg(runner),
        ),
        Platform::Linux => {
            for (terminal, flag) in LINUX_TERMINALS {
                match spawn_detached(Command::new(terminal).arg(flag).arg(runner)) {
                    Ok(child) => return Ok(child),
                    Err(e) => log::debug!("{} unavailable: {}", terminal, e),
                }
            }
            Err(anyhow!("No terminal emulator found"))
        }
    }
}

fn spawn_detached(command: &mut Command) -> Result<Child> {
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to start {:?}", command.get_program()))
}

/// Wait for launched processes that have exited, dropping them from
/// `children`. Returns how many were reaped.
pub fn reap_finished(children: &mut Vec<Child>) -> usize {
    let before = children.len();
    children.retain_mut(|child| match child.try_wait() {
        Ok(Some(status)) => {
            log::debug!("Launched process {} exited: {}", child.id(), status);
            false
        }
        Ok(None) => true,
        Err(e) => {
            log::warn!("Cannot wait for process {}: {}", child.id(), e);
            false
        }
    });
    before - children.len()
}
