//! External tool detection and installation.
//!
//! The downloader needs `yt-dlp` and `ffmpeg` on the system. This module
//! probes for them and can install missing ones by shelling out to the
//! first available OS package manager (apt / yum / pacman on Linux, brew
//! on macOS, choco on Windows).

use std::path::PathBuf;
use std::process::Stdio;

use tokio::process::Command;

use crate::config::Config;
use crate::error::{Error, Result};

/// A required external tool.
#[derive(Debug, Clone)]
pub struct Tool {
    /// Human-readable name.
    pub name: &'static str,

    /// Program to invoke (config override or PATH lookup).
    pub program: PathBuf,

    /// Argument that makes the tool print its version and exit zero.
    pub probe_arg: &'static str,

    /// Package name understood by the OS package managers.
    pub package: &'static str,
}

/// The tools this application depends on.
pub fn required_tools(config: &Config) -> Vec<Tool> {
    vec![
        Tool {
            name: "yt-dlp",
            program: config.tools.yt_dlp_program(),
            probe_arg: "--version",
            package: "yt-dlp",
        },
        Tool {
            name: "ffmpeg",
            program: config.tools.ffmpeg_program(),
            probe_arg: "-version",
            package: "ffmpeg",
        },
    ]
}

/// Check whether a tool runs.
pub async fn is_available(tool: &Tool) -> bool {
    Command::new(&tool.program)
        .arg(tool.probe_arg)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map(|status| status.success())
        .unwrap_or(false)
}

/// Return the required tools that are not installed.
pub async fn missing_tools(config: &Config) -> Vec<Tool> {
    let mut missing = Vec::new();
    for tool in required_tools(config) {
        if is_available(&tool).await {
            tracing::debug!("{} is already installed.", tool.name);
        } else {
            missing.push(tool);
        }
    }
    missing
}

/// Install every missing tool via the OS package manager.
pub async fn install_missing(config: &Config) -> Result<()> {
    if !is_elevated() {
        tracing::warn!(
            "Not running as root; package installation may prompt for a password or fail."
        );
    }

    let missing = missing_tools(config).await;
    if missing.is_empty() {
        tracing::info!("All dependencies are already installed.");
        return Ok(());
    }

    let mut failures = 0;
    for tool in &missing {
        tracing::info!("Attempting to install {}...", tool.name);
        match install_package(tool.package).await {
            Ok(manager) => {
                tracing::info!("{} has been installed successfully via {}.", tool.name, manager);
            }
            Err(e) => {
                tracing::error!("Failed to install {}: {}", tool.name, e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(Error::Install(format!(
            "{} tool(s) could not be installed",
            failures
        )));
    }

    Ok(())
}

/// Install one package. Returns the package manager that was used.
async fn install_package(package: &str) -> Result<&'static str> {
    let (manager, program, args) = package_manager_command(package).ok_or_else(|| {
        Error::Install(format!(
            "no supported package manager found; please install {} manually",
            package
        ))
    })?;

    let status = Command::new(&program)
        .args(&args)
        .status()
        .await
        .map_err(|e| Error::Install(format!("Failed to run {}: {}", program, e)))?;

    if !status.success() {
        return Err(Error::Install(format!(
            "{} exited with status: {}",
            program, status
        )));
    }

    Ok(manager)
}

/// Pick the install command for the first available package manager.
fn package_manager_command(package: &str) -> Option<(&'static str, String, Vec<String>)> {
    let own = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    match std::env::consts::OS {
        "linux" => {
            if has_command("apt") {
                Some(("apt", "sudo".to_string(), own(&["apt", "install", "-y", package])))
            } else if has_command("yum") {
                Some(("yum", "sudo".to_string(), own(&["yum", "install", "-y", package])))
            } else if has_command("pacman") {
                Some((
                    "pacman",
                    "sudo".to_string(),
                    own(&["pacman", "-S", "--noconfirm", package]),
                ))
            } else {
                None
            }
        }
        "macos" => has_command("brew")
            .then(|| ("brew", "brew".to_string(), own(&["install", package]))),
        "windows" => has_command("choco")
            .then(|| ("choco", "choco".to_string(), own(&["install", "-y", package]))),
        _ => None,
    }
}

/// Look an executable up on PATH.
pub fn has_command(name: &str) -> bool {
    let Some(paths) = std::env::var_os("PATH") else {
        return false;
    };

    std::env::split_paths(&paths).any(|dir| {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return true;
        }
        cfg!(windows) && dir.join(format!("{}.exe", name)).is_file()
    })
}

/// Whether the process runs with privileges for system-wide installs.
#[cfg(unix)]
fn is_elevated() -> bool {
    std::process::Command::new("whoami")
        .output()
        .map(|out| String::from_utf8_lossy(&out.stdout).trim() == "root")
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_elevated() -> bool {
    // Windows elevation is checked by the package manager itself
    true
}
