/// Host CPU family, as reported by the OS at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arch {
    X86_64,
    Aarch64,
    Unknown,
}

impl Arch {
    pub fn from_machine(machine: &str) -> Self {
        match machine {
            "x86_64" => Arch::X86_64,
            "aarch64" => Arch::Aarch64,
            _ => Arch::Unknown,
        }
    }

    /// Multiarch directory under the bundle's library directory. Unknown
    /// architectures get no entry so the launcher still works on hardware
    /// this table predates; the arch-agnostic directory remains in the path.
    pub fn lib_subdir(self) -> Option<&'static str> {
        match self {
            Arch::X86_64 => Some("x86_64-linux-gnu"),
            Arch::Aarch64 => Some("aarch64-linux-gnu"),
            Arch::Unknown => None,
        }
    }
}

pub fn detect() -> Arch {
    match machine() {
        Some(machine) => Arch::from_machine(&machine),
        None => Arch::Unknown,
    }
}

/// Machine identifier from `uname(2)`.
#[cfg(unix)]
fn machine() -> Option<String> {
    let mut info: libc::utsname = unsafe { std::mem::zeroed() };
    if unsafe { libc::uname(&mut info) } != 0 {
        return None;
    }
    let machine = unsafe { std::ffi::CStr::from_ptr(info.machine.as_ptr()) };
    machine.to_str().ok().map(str::to_owned)
}

#[cfg(not(unix))]
fn machine() -> Option<String> {
    Some(std::env::consts::ARCH.to_string())
}
