// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::models::package::ArchiveType;
use crate::models::registry::{CanonicalValue, FieldKind, display_as_api_string};

// Variants are declared in api-string order so the derived `Ord` sorts
// search results alphabetically.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OperatingSystem {
    Aix,
    AlpineLinux,
    Linux,
    LinuxMusl,
    MacOS,
    Qnx,
    Solaris,
    Windows,
}

impl OperatingSystem {
    /// The C library builds for this operating system link against.
    pub fn lib_c_type(self) -> LibCType {
        match self {
            OperatingSystem::Linux => LibCType::Glibc,
            OperatingSystem::AlpineLinux | OperatingSystem::LinuxMusl => LibCType::Musl,
            OperatingSystem::Windows => LibCType::CStdLib,
            OperatingSystem::MacOS
            | OperatingSystem::Aix
            | OperatingSystem::Qnx
            | OperatingSystem::Solaris => LibCType::Libc,
        }
    }

    /// Archive format used when the user does not ask for one.
    pub fn default_archive_type(self) -> ArchiveType {
        match self {
            OperatingSystem::Windows => ArchiveType::Zip,
            _ => ArchiveType::TarGz,
        }
    }
}

impl CanonicalValue for OperatingSystem {
    const KIND: FieldKind = FieldKind::OperatingSystem;

    fn variants() -> &'static [Self] {
        &[
            OperatingSystem::Aix,
            OperatingSystem::AlpineLinux,
            OperatingSystem::Linux,
            OperatingSystem::LinuxMusl,
            OperatingSystem::MacOS,
            OperatingSystem::Qnx,
            OperatingSystem::Solaris,
            OperatingSystem::Windows,
        ]
    }

    fn api_string(self) -> &'static str {
        match self {
            OperatingSystem::Aix => "aix",
            OperatingSystem::AlpineLinux => "alpine_linux",
            OperatingSystem::Linux => "linux",
            OperatingSystem::LinuxMusl => "linux_musl",
            OperatingSystem::MacOS => "macos",
            OperatingSystem::Qnx => "qnx",
            OperatingSystem::Solaris => "solaris",
            OperatingSystem::Windows => "windows",
        }
    }

    fn label(self) -> &'static str {
        match self {
            OperatingSystem::Aix => "AIX",
            OperatingSystem::AlpineLinux => "Alpine Linux",
            OperatingSystem::Linux => "Linux",
            OperatingSystem::LinuxMusl => "Linux Musl",
            OperatingSystem::MacOS => "Mac OS",
            OperatingSystem::Qnx => "QNX",
            OperatingSystem::Solaris => "Solaris",
            OperatingSystem::Windows => "Windows",
        }
    }

    fn synonyms(self) -> &'static [&'static str] {
        match self {
            OperatingSystem::Aix => &["aix", "AIX", "Aix"],
            OperatingSystem::AlpineLinux => &[
                "alpine_linux",
                "ALPINE_LINUX",
                "alpine-linux",
                "ALPINE-LINUX",
                "alpine linux",
                "Alpine Linux",
                "alpine",
                "ALPINE",
                "Alpine",
            ],
            OperatingSystem::Linux => &["linux", "LINUX", "Linux"],
            OperatingSystem::LinuxMusl => &["linux_musl", "LINUX_MUSL", "linux-musl", "LINUX-MUSL"],
            OperatingSystem::MacOS => &[
                "macos", "MACOS", "MacOS", "Mac OS", "mac_os", "MAC_OS", "mac", "MAC", "Mac",
                "darwin", "DARWIN", "Darwin", "osx", "OSX", "macosx", "MACOSX", "MacOSX",
            ],
            OperatingSystem::Qnx => &["qnx", "QNX", "Qnx"],
            OperatingSystem::Solaris => &["solaris", "SOLARIS", "Solaris", "sunos", "SunOS"],
            OperatingSystem::Windows => &[
                "windows", "WINDOWS", "Windows", "win", "WIN", "Win", "win32", "win64",
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Architecture {
    Aarch32,
    Aarch64,
    Arm,
    Mips,
    Ppc,
    Ppc64,
    Ppc64le,
    Riscv64,
    S390x,
    Sparc,
    Sparcv9,
    X64,
    X86,
}

impl Architecture {
    pub const DEFAULT: Architecture = Architecture::X64;
}

impl CanonicalValue for Architecture {
    const KIND: FieldKind = FieldKind::Architecture;

    fn variants() -> &'static [Self] {
        &[
            Architecture::Aarch32,
            Architecture::Aarch64,
            Architecture::Arm,
            Architecture::Mips,
            Architecture::Ppc,
            Architecture::Ppc64,
            Architecture::Ppc64le,
            Architecture::Riscv64,
            Architecture::S390x,
            Architecture::Sparc,
            Architecture::Sparcv9,
            Architecture::X64,
            Architecture::X86,
        ]
    }

    fn api_string(self) -> &'static str {
        match self {
            Architecture::Aarch32 => "aarch32",
            Architecture::Aarch64 => "aarch64",
            Architecture::Arm => "arm",
            Architecture::Mips => "mips",
            Architecture::Ppc => "ppc",
            Architecture::Ppc64 => "ppc64",
            Architecture::Ppc64le => "ppc64le",
            Architecture::Riscv64 => "riscv64",
            Architecture::S390x => "s390x",
            Architecture::Sparc => "sparc",
            Architecture::Sparcv9 => "sparcv9",
            Architecture::X64 => "x64",
            Architecture::X86 => "x86",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Architecture::Aarch32 => "AARCH32",
            Architecture::Aarch64 => "AARCH64",
            Architecture::Arm => "ARM",
            Architecture::Mips => "MIPS",
            Architecture::Ppc => "PPC",
            Architecture::Ppc64 => "PPC64",
            Architecture::Ppc64le => "PPC64LE",
            Architecture::Riscv64 => "RISCV64",
            Architecture::S390x => "S390X",
            Architecture::Sparc => "SPARC",
            Architecture::Sparcv9 => "SPARCV9",
            Architecture::X64 => "X64",
            Architecture::X86 => "X86",
        }
    }

    fn synonyms(self) -> &'static [&'static str] {
        match self {
            Architecture::Aarch32 => &["aarch32", "AARCH32", "arm32", "ARM32"],
            Architecture::Aarch64 => &["aarch64", "AARCH64", "arm64", "ARM64"],
            Architecture::Arm => &["arm", "ARM", "armv7", "ARMv7", "armhf"],
            Architecture::Mips => &["mips", "MIPS"],
            Architecture::Ppc => &["ppc", "PPC", "powerpc", "POWERPC"],
            Architecture::Ppc64 => &["ppc64", "PPC64"],
            Architecture::Ppc64le => &["ppc64le", "PPC64LE"],
            Architecture::Riscv64 => &["riscv64", "RISCV64", "riscv", "RISCV"],
            Architecture::S390x => &["s390x", "S390X"],
            Architecture::Sparc => &["sparc", "SPARC"],
            Architecture::Sparcv9 => &["sparcv9", "SPARCV9"],
            Architecture::X64 => &[
                "x64", "X64", "amd64", "AMD64", "x86_64", "X86_64", "x86-64", "X86-64", "x86lx64",
            ],
            Architecture::X86 => &[
                "x86", "X86", "x32", "X32", "i386", "I386", "i586", "I586", "i686", "I686",
                "x86lx32",
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LibCType {
    CStdLib,
    Glibc,
    Libc,
    Musl,
}

impl CanonicalValue for LibCType {
    const KIND: FieldKind = FieldKind::LibCType;

    fn variants() -> &'static [Self] {
        &[
            LibCType::CStdLib,
            LibCType::Glibc,
            LibCType::Libc,
            LibCType::Musl,
        ]
    }

    fn api_string(self) -> &'static str {
        match self {
            LibCType::CStdLib => "c_std_lib",
            LibCType::Glibc => "glibc",
            LibCType::Libc => "libc",
            LibCType::Musl => "musl",
        }
    }

    fn label(self) -> &'static str {
        match self {
            LibCType::CStdLib => "C Std Lib",
            LibCType::Glibc => "GLIBC",
            LibCType::Libc => "LIBC",
            LibCType::Musl => "MUSL",
        }
    }

    fn synonyms(self) -> &'static [&'static str] {
        match self {
            LibCType::CStdLib => &["c_std_lib", "C_STD_LIB", "c-std-lib", "C-STD-LIB", "cstdlib"],
            LibCType::Glibc => &["glibc", "GLIBC", "Glibc"],
            LibCType::Libc => &["libc", "LIBC", "Libc"],
            LibCType::Musl => &["musl", "MUSL", "Musl"],
        }
    }
}

display_as_api_string!(OperatingSystem, Architecture, LibCType);
