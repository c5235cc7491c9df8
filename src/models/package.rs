use crate::models::registry::{CanonicalValue, FieldKind, display_as_api_string};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PackageType {
    Jdk,
    Jre,
}

impl PackageType {
    pub const DEFAULT: PackageType = PackageType::Jdk;
}

impl CanonicalValue for PackageType {
    const KIND: FieldKind = FieldKind::PackageType;

    fn variants() -> &'static [Self] {
        &[PackageType::Jdk, PackageType::Jre]
    }

    fn api_string(self) -> &'static str {
        match self {
            PackageType::Jdk => "jdk",
            PackageType::Jre => "jre",
        }
    }

    fn label(self) -> &'static str {
        match self {
            PackageType::Jdk => "JDK",
            PackageType::Jre => "JRE",
        }
    }

    fn synonyms(self) -> &'static [&'static str] {
        match self {
            PackageType::Jdk => &["jdk", "JDK", "Jdk"],
            PackageType::Jre => &["jre", "JRE", "Jre"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ArchiveType {
    Apk,
    Cab,
    Deb,
    Dmg,
    Exe,
    Msi,
    Pkg,
    Rpm,
    SrcTar,
    Tar,
    TarGz,
    TarZ,
    Tgz,
    Zip,
}

impl ArchiveType {
    /// Extension as it appears at the end of a package file name.
    pub fn file_extension(self) -> &'static str {
        match self {
            ArchiveType::SrcTar => "src.tar.gz",
            other => other.api_string(),
        }
    }
}

impl CanonicalValue for ArchiveType {
    const KIND: FieldKind = FieldKind::ArchiveType;

    fn variants() -> &'static [Self] {
        &[
            ArchiveType::Apk,
            ArchiveType::Cab,
            ArchiveType::Deb,
            ArchiveType::Dmg,
            ArchiveType::Exe,
            ArchiveType::Msi,
            ArchiveType::Pkg,
            ArchiveType::Rpm,
            ArchiveType::SrcTar,
            ArchiveType::Tar,
            ArchiveType::TarGz,
            ArchiveType::TarZ,
            ArchiveType::Tgz,
            ArchiveType::Zip,
        ]
    }

    fn api_string(self) -> &'static str {
        match self {
            ArchiveType::Apk => "apk",
            ArchiveType::Cab => "cab",
            ArchiveType::Deb => "deb",
            ArchiveType::Dmg => "dmg",
            ArchiveType::Exe => "exe",
            ArchiveType::Msi => "msi",
            ArchiveType::Pkg => "pkg",
            ArchiveType::Rpm => "rpm",
            ArchiveType::SrcTar => "src_tar",
            ArchiveType::Tar => "tar",
            ArchiveType::TarGz => "tar.gz",
            ArchiveType::TarZ => "tar.Z",
            ArchiveType::Tgz => "tgz",
            ArchiveType::Zip => "zip",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ArchiveType::Apk => "APK",
            ArchiveType::Cab => "CAB",
            ArchiveType::Deb => "DEB",
            ArchiveType::Dmg => "DMG",
            ArchiveType::Exe => "EXE",
            ArchiveType::Msi => "MSI",
            ArchiveType::Pkg => "PKG",
            ArchiveType::Rpm => "RPM",
            ArchiveType::SrcTar => "SRC_TAR",
            ArchiveType::Tar => "TAR",
            ArchiveType::TarGz => "TAR.GZ",
            ArchiveType::TarZ => "TAR.Z",
            ArchiveType::Tgz => "TGZ",
            ArchiveType::Zip => "ZIP",
        }
    }

    fn synonyms(self) -> &'static [&'static str] {
        match self {
            ArchiveType::Apk => &["apk", "APK", ".apk"],
            ArchiveType::Cab => &["cab", "CAB", ".cab"],
            ArchiveType::Deb => &["deb", "DEB", ".deb"],
            ArchiveType::Dmg => &["dmg", "DMG", ".dmg"],
            ArchiveType::Exe => &["exe", "EXE", ".exe"],
            ArchiveType::Msi => &["msi", "MSI", ".msi"],
            ArchiveType::Pkg => &["pkg", "PKG", ".pkg"],
            ArchiveType::Rpm => &["rpm", "RPM", ".rpm"],
            ArchiveType::SrcTar => &["src_tar", "SRC_TAR", "src.tar.gz", ".src.tar.gz"],
            ArchiveType::Tar => &["tar", "TAR", ".tar"],
            ArchiveType::TarGz => &["tar.gz", "TAR.GZ", ".tar.gz", "tar_gz", "TAR_GZ"],
            ArchiveType::TarZ => &["tar.Z", "TAR.Z", ".tar.Z", "tar_z", "TAR_Z"],
            ArchiveType::Tgz => &["tgz", "TGZ", ".tgz"],
            ArchiveType::Zip => &["zip", "ZIP", ".zip"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReleaseStatus {
    /// Early access. Sorts before general availability of the same version.
    Ea,
    Ga,
}

impl CanonicalValue for ReleaseStatus {
    const KIND: FieldKind = FieldKind::ReleaseStatus;

    fn variants() -> &'static [Self] {
        &[ReleaseStatus::Ea, ReleaseStatus::Ga]
    }

    fn api_string(self) -> &'static str {
        match self {
            ReleaseStatus::Ea => "ea",
            ReleaseStatus::Ga => "ga",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ReleaseStatus::Ea => "Early Access",
            ReleaseStatus::Ga => "General Availability",
        }
    }

    fn synonyms(self) -> &'static [&'static str] {
        match self {
            ReleaseStatus::Ea => &["ea", "EA", "early_access", "EARLY_ACCESS", "-ea"],
            ReleaseStatus::Ga => &["ga", "GA", "general_availability", "GENERAL_AVAILABILITY"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TermOfSupport {
    Lts,
    Mts,
    Sts,
}

impl TermOfSupport {
    /// Derives the support term of a feature release.
    ///
    /// Releases up to 8 are long term, followed by 11, 17 and every fourth
    /// release after 17. Odd non-LTS releases from 13 on are medium term,
    /// everything else is short term.
    ///
    /// This follows the published two-year LTS cadence (21, 25, ...). The
    /// older `(feature - 11) % 6 == 0` rule would make 23 LTS and 21 MTS.
    pub fn for_feature_version(feature: u32) -> Self {
        let lts = feature <= 8 || feature == 11 || (feature >= 17 && (feature - 17) % 4 == 0);
        if lts {
            TermOfSupport::Lts
        } else if feature >= 13 && feature % 2 == 1 {
            TermOfSupport::Mts
        } else {
            TermOfSupport::Sts
        }
    }
}

impl CanonicalValue for TermOfSupport {
    const KIND: FieldKind = FieldKind::TermOfSupport;

    fn variants() -> &'static [Self] {
        &[TermOfSupport::Lts, TermOfSupport::Mts, TermOfSupport::Sts]
    }

    fn api_string(self) -> &'static str {
        match self {
            TermOfSupport::Lts => "lts",
            TermOfSupport::Mts => "mts",
            TermOfSupport::Sts => "sts",
        }
    }

    fn label(self) -> &'static str {
        match self {
            TermOfSupport::Lts => "LTS",
            TermOfSupport::Mts => "MTS",
            TermOfSupport::Sts => "STS",
        }
    }

    fn synonyms(self) -> &'static [&'static str] {
        match self {
            TermOfSupport::Lts => &["lts", "LTS", "long_term_stable", "LONG_TERM_STABLE"],
            TermOfSupport::Mts => &["mts", "MTS", "mid_term_stable", "MID_TERM_STABLE"],
            TermOfSupport::Sts => &["sts", "STS", "short_term_stable", "SHORT_TERM_STABLE"],
        }
    }
}

display_as_api_string!(PackageType, ArchiveType, ReleaseStatus, TermOfSupport);
