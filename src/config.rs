//! Compile-time layout conventions for the bundle this launcher lives in.

/// Subdirectories whose joint presence marks a directory as the bundle root.
pub const BIN_SUBDIR: &str = "usr/bin";
pub const LIB_SUBDIR: &str = "usr/lib";

/// The real binary sits next to the launcher under this suffix:
/// a wrapper at `usr/bin/tool` delegates to `usr/bin/tool.real`.
pub const DELEGATE_SUFFIX: &str = ".real";

/// Dynamic loader search path consumed by the delegate.
pub const LIBRARY_PATH_VAR: &str = "LD_LIBRARY_PATH";

/// Development override: skips the ancestor walk entirely when set.
pub const ROOT_OVERRIDE_VAR: &str = "BUNDLE_LAUNCHER_ROOT";
