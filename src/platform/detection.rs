use crate::models::{Architecture, OperatingSystem};
#[cfg(target_os = "linux")]
use std::path::Path;

#[cfg(target_os = "linux")]
const ALPINE_RELEASE_FILE: &str = "/etc/alpine-release";

/// Operating system and architecture of the machine discocli runs on.
///
/// Either field is `None` when the target is not one the catalog knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostPlatform {
    pub operating_system: Option<OperatingSystem>,
    pub architecture: Option<Architecture>,
}

impl HostPlatform {
    pub fn new(operating_system: Option<OperatingSystem>, architecture: Option<Architecture>) -> Self {
        Self {
            operating_system,
            architecture,
        }
    }

    pub fn detect() -> Self {
        let platform = Self::new(current_os(), current_architecture());
        log::debug!("Detected host platform: {platform:?}");
        platform
    }
}

fn current_os() -> Option<OperatingSystem> {
    #[cfg(all(target_os = "linux", target_env = "musl"))]
    return Some(OperatingSystem::AlpineLinux);

    #[cfg(all(target_os = "linux", not(target_env = "musl")))]
    return Some(if Path::new(ALPINE_RELEASE_FILE).exists() {
        OperatingSystem::AlpineLinux
    } else {
        OperatingSystem::Linux
    });

    #[cfg(target_os = "windows")]
    return Some(OperatingSystem::Windows);

    #[cfg(target_os = "macos")]
    return Some(OperatingSystem::MacOS);

    #[cfg(target_os = "aix")]
    return Some(OperatingSystem::Aix);

    #[cfg(target_os = "solaris")]
    return Some(OperatingSystem::Solaris);

    #[cfg(target_os = "nto")]
    return Some(OperatingSystem::Qnx);

    #[cfg(not(any(
        target_os = "linux",
        target_os = "windows",
        target_os = "macos",
        target_os = "aix",
        target_os = "solaris",
        target_os = "nto"
    )))]
    return None;
}

fn current_architecture() -> Option<Architecture> {
    #[cfg(target_arch = "x86_64")]
    return Some(Architecture::X64);

    #[cfg(target_arch = "x86")]
    return Some(Architecture::X86);

    #[cfg(target_arch = "aarch64")]
    return Some(Architecture::Aarch64);

    #[cfg(target_arch = "arm")]
    return Some(Architecture::Arm);

    #[cfg(target_arch = "powerpc64")]
    {
        #[cfg(target_endian = "little")]
        return Some(Architecture::Ppc64le);
        #[cfg(target_endian = "big")]
        return Some(Architecture::Ppc64);
    }

    #[cfg(target_arch = "s390x")]
    return Some(Architecture::S390x);

    #[cfg(target_arch = "riscv64")]
    return Some(Architecture::Riscv64);

    #[cfg(not(any(
        target_arch = "x86_64",
        target_arch = "x86",
        target_arch = "aarch64",
        target_arch = "arm",
        target_arch = "powerpc64",
        target_arch = "s390x",
        target_arch = "riscv64"
    )))]
    return None;
}
