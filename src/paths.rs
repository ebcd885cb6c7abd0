use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config;

/// Canonical, symlink-free path of the running launcher. The bundle search
/// depends on the physical directory layout, so a symlinked entry point must
/// resolve to the real file before anything else happens.
pub fn launcher_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("current_exe")?;
    fs::canonicalize(&exe).with_context(|| format!("canonicalize {}", exe.display()))
}

/// The real binary the launcher exists to run: same directory, same name,
/// plus [`config::DELEGATE_SUFFIX`].
pub fn delegate_path(launcher: &Path) -> Result<PathBuf> {
    let name = launcher
        .file_name()
        .with_context(|| format!("launcher path has no file name: {}", launcher.display()))?;
    let mut real = name.to_os_string();
    real.push(config::DELEGATE_SUFFIX);
    Ok(launcher.with_file_name(real))
}
