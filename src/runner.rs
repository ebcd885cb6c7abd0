use anyhow::{bail, Context, Result};
use std::{
    env,
    ffi::{OsStr, OsString},
    path::Path,
    process::Command,
};

use crate::{config, paths, platform::Arch};

/// Hands the process over to the delegate binary. Does not return on success.
pub fn run(launcher: &Path, root: &Path, arch: Arch) -> Result<()> {
    let argv: Vec<OsString> = env::args_os().collect();
    run_with_executor(launcher, root, arch, &argv, exec_replace)
}

/// Same as [`run`] but with an injectable final step, so tests can inspect
/// the fully prepared command without replacing the test process.
pub fn run_with_executor(
    launcher: &Path,
    root: &Path,
    arch: Arch,
    argv: &[OsString],
    exec: impl FnOnce(&mut Command) -> Result<()>,
) -> Result<()> {
    let delegate = paths::delegate_path(launcher)?;
    if !delegate.is_file() {
        bail!("delegate binary not found at {}", delegate.display());
    }

    let inherited = env::var_os(config::LIBRARY_PATH_VAR);
    let search_path = library_search_path(root, arch, inherited.as_deref())?;

    let mut cmd = Command::new(&delegate);
    cmd.env(config::LIBRARY_PATH_VAR, &search_path);
    cmd.args(argv.iter().skip(1));
    // The delegate owns argv[0] semantics; pass through whatever the caller
    // invoked us as, not the delegate's own path.
    #[cfg(unix)]
    if let Some(arg0) = argv.first() {
        use std::os::unix::process::CommandExt;
        cmd.arg0(arg0);
    }

    exec(&mut cmd)
}

/// Loader search path for the delegate: arch-specific directory first,
/// arch-agnostic second, inherited entries last and untouched.
pub fn library_search_path(root: &Path, arch: Arch, inherited: Option<&OsStr>) -> Result<OsString> {
    let lib = root.join(config::LIB_SUBDIR);
    let mut entries = Vec::new();
    if let Some(subdir) = arch.lib_subdir() {
        entries.push(lib.join(subdir));
    }
    entries.push(lib);
    if let Some(existing) = inherited {
        entries.extend(env::split_paths(existing));
    }
    env::join_paths(entries).context("compose library search path")
}

#[cfg(unix)]
fn exec_replace(cmd: &mut Command) -> Result<()> {
    use std::os::unix::process::CommandExt;
    // exec only returns on failure.
    let err = cmd.exec();
    Err(err).with_context(|| format!("exec {}", cmd.get_program().to_string_lossy()))
}

/// Portable fallback where image replacement is unavailable: run the delegate
/// to completion and make its exit code our own.
#[cfg(not(unix))]
fn exec_replace(cmd: &mut Command) -> Result<()> {
    let status = cmd
        .status()
        .with_context(|| format!("spawn {}", cmd.get_program().to_string_lossy()))?;
    std::process::exit(status.code().unwrap_or(1));
}
