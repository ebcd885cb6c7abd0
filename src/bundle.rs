use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};

use crate::config;

/// Locates the bundle root for a launcher at `launcher`: the closest ancestor
/// of its parent directory that carries the bundle signature. Honors the
/// [`config::ROOT_OVERRIDE_VAR`] development override before searching.
pub fn find_root(launcher: &Path) -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(config::ROOT_OVERRIDE_VAR) {
        return Ok(PathBuf::from(dir));
    }
    let start = launcher
        .parent()
        .with_context(|| format!("launcher path has no parent: {}", launcher.display()))?;
    find_root_with(start, has_bundle_signature)
}

/// Ancestor walk with an injectable predicate. Candidates are visited from
/// `start` itself up to the filesystem root; the first match wins, so nested
/// bundles resolve to the innermost one. The walk never mutates anything.
pub fn find_root_with(start: &Path, is_root: impl Fn(&Path) -> bool) -> Result<PathBuf> {
    start
        .ancestors()
        .find(|dir| is_root(dir))
        .map(Path::to_path_buf)
        .ok_or_else(|| anyhow!("bundle root not found above {}", start.display()))
}

/// Signature: both subdirectories present as direct children.
pub fn has_bundle_signature(dir: &Path) -> bool {
    dir.join(config::BIN_SUBDIR).is_dir() && dir.join(config::LIB_SUBDIR).is_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn make_bundle(root: &Path) {
        fs::create_dir_all(root.join(config::BIN_SUBDIR)).unwrap();
        fs::create_dir_all(root.join(config::LIB_SUBDIR)).unwrap();
    }

    #[test]
    fn signature_requires_both_subdirs() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(!has_bundle_signature(tmp.path()));

        fs::create_dir_all(tmp.path().join(config::BIN_SUBDIR)).unwrap();
        assert!(!has_bundle_signature(tmp.path()));

        fs::create_dir_all(tmp.path().join(config::LIB_SUBDIR)).unwrap();
        assert!(has_bundle_signature(tmp.path()));
    }

    #[test]
    fn root_found_regardless_of_depth() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("App");
        make_bundle(&root);

        for start in [
            root.join("usr/bin"),
            root.join("usr/bin/a"),
            root.join("usr/bin/a/b/c/d"),
        ] {
            fs::create_dir_all(&start).unwrap();
            let found = find_root_with(&start, has_bundle_signature).unwrap();
            assert_eq!(found, root);
        }
    }

    #[test]
    fn innermost_bundle_wins() {
        let tmp = tempfile::tempdir().unwrap();
        let outer = tmp.path().join("Outer");
        let inner = outer.join("embedded").join("Inner");
        make_bundle(&outer);
        make_bundle(&inner);

        let start = inner.join("usr/bin");
        let found = find_root_with(&start, has_bundle_signature).unwrap();
        assert_eq!(found, inner);
    }

    #[test]
    fn search_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("App");
        make_bundle(&root);

        let start = root.join("usr/bin");
        fs::create_dir_all(&start).unwrap();
        let first = find_root_with(&start, has_bundle_signature).unwrap();
        let second = find_root_with(&start, has_bundle_signature).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn exhausted_walk_names_searched_path() {
        let err = find_root_with(Path::new("/nowhere/at/all"), |_| false).unwrap_err();
        assert!(err.to_string().contains("/nowhere/at/all"));
    }
}
