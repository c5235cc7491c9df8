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

use crate::api::models::Package;
use crate::error::{DiscoError, Result};
use crate::models::registry::lenient;
use crate::models::{
    Architecture, ArchiveType, LibCType, OperatingSystem, PackageType, ReleaseStatus,
    TermOfSupport,
};
use crate::version::VersionNumber;
use std::hash::{Hash, Hasher};

/// One catalog entry.
///
/// Two entries describe the same package when their semantic fields agree;
/// the catalog `id` is ignored by `PartialEq` and `Hash`.
#[derive(Debug, Clone)]
pub struct Pkg {
    pub id: String,
    pub ephemeral_id: String,
    pub distribution: String,
    pub major_version: u32,
    pub java_version: VersionNumber,
    pub distribution_version: String,
    pub architecture: Option<Architecture>,
    pub fpu: String,
    pub operating_system: Option<OperatingSystem>,
    pub lib_c_type: Option<LibCType>,
    pub package_type: Option<PackageType>,
    pub release_status: ReleaseStatus,
    pub archive_type: Option<ArchiveType>,
    pub term_of_support: TermOfSupport,
    pub javafx_bundled: bool,
    pub latest_build_available: bool,
    pub directly_downloadable: bool,
    pub file_name: String,
    /// Size in bytes, `-1` when the catalog does not know it.
    pub size: i64,
    pub free_use_in_production: bool,
    pub tck_tested: String,
    pub tck_cert_uri: String,
    pub aqavit_certified: String,
    pub aqavit_cert_uri: String,
}

impl Pkg {
    /// Command line that downloads exactly this package.
    pub fn to_cli_string(&self) -> String {
        let mut cli = format!(
            "discocli -d {} -v {}",
            self.distribution,
            self.java_version.to_query_string()
        );

        if let Some(os) = self.operating_system {
            cli.push_str(&format!(" --os {os}"));
        }
        if let Some(lib_c_type) = self.lib_c_type {
            cli.push_str(&format!(" --lc {lib_c_type}"));
        }
        if let Some(architecture) = self.architecture {
            cli.push_str(&format!(" --arc {architecture}"));
        }
        if let Some(archive_type) = self.archive_type {
            cli.push_str(&format!(" --at {archive_type}"));
        }
        if let Some(package_type) = self.package_type {
            cli.push_str(&format!(" --pt {package_type}"));
        }
        if self.javafx_bundled {
            cli.push_str(" --fx");
        }
        if self.release_status == ReleaseStatus::Ea {
            cli.push_str(" --ea");
        }

        cli
    }

    /// Expected download size, if the catalog reported a positive one.
    pub fn expected_size(&self) -> Option<u64> {
        u64::try_from(self.size).ok().filter(|size| *size > 0)
    }

    fn semantic_key(
        &self,
    ) -> (
        &str,
        &VersionNumber,
        Option<Architecture>,
        Option<OperatingSystem>,
        Option<PackageType>,
        ReleaseStatus,
        Option<ArchiveType>,
        TermOfSupport,
        bool,
        &str,
        bool,
    ) {
        (
            &self.distribution,
            &self.java_version,
            self.architecture,
            self.operating_system,
            self.package_type,
            self.release_status,
            self.archive_type,
            self.term_of_support,
            self.javafx_bundled,
            &self.ephemeral_id,
            self.latest_build_available,
        )
    }
}

impl PartialEq for Pkg {
    fn eq(&self, other: &Self) -> bool {
        self.semantic_key() == other.semantic_key()
    }
}

impl Eq for Pkg {}

impl Hash for Pkg {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.semantic_key().hash(state);
    }
}

impl TryFrom<Package> for Pkg {
    type Error = DiscoError;

    fn try_from(package: Package) -> Result<Self> {
        let java_version: VersionNumber = package.java_version.parse()?;

        let release_status = lenient(non_empty(&package.release_status))
            .unwrap_or(java_version.release_status);

        let major_version = if package.major_version > 0 {
            package.major_version
        } else {
            java_version.feature
        };

        let term_of_support = lenient(non_empty(&package.term_of_support))
            .unwrap_or_else(|| TermOfSupport::for_feature_version(major_version));

        Ok(Pkg {
            id: package.id,
            ephemeral_id: package.ephemeral_id,
            distribution: package.distribution,
            major_version,
            java_version,
            distribution_version: package.distribution_version,
            architecture: lenient(non_empty(&package.architecture)),
            fpu: package.fpu,
            operating_system: lenient(non_empty(&package.operating_system)),
            lib_c_type: lenient(non_empty(&package.lib_c_type)),
            package_type: lenient(non_empty(&package.package_type)),
            release_status,
            archive_type: lenient(non_empty(&package.archive_type)),
            term_of_support,
            javafx_bundled: package.javafx_bundled,
            latest_build_available: package.latest_build_available,
            directly_downloadable: package.directly_downloadable,
            file_name: package.filename,
            size: package.size,
            free_use_in_production: package.free_use_in_production,
            tck_tested: package.tck_tested,
            tck_cert_uri: package.tck_cert_uri,
            aqavit_certified: package.aqavit_certified,
            aqavit_cert_uri: package.aqavit_cert_uri,
        })
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Builds a GA zulu JDK for linux x64 with the given id and version.
    pub fn pkg(id: &str, java_version: &str) -> Pkg {
        let java_version: VersionNumber = java_version.parse().unwrap();
        Pkg {
            id: id.to_string(),
            ephemeral_id: String::new(),
            distribution: "zulu".to_string(),
            major_version: java_version.feature,
            java_version,
            distribution_version: String::new(),
            architecture: Some(Architecture::X64),
            fpu: "unknown".to_string(),
            operating_system: Some(OperatingSystem::Linux),
            lib_c_type: Some(LibCType::Glibc),
            package_type: Some(PackageType::Jdk),
            release_status: java_version.release_status,
            archive_type: Some(ArchiveType::TarGz),
            term_of_support: TermOfSupport::for_feature_version(java_version.feature),
            javafx_bundled: false,
            latest_build_available: false,
            directly_downloadable: true,
            file_name: format!("zulu{java_version}-linux_x64.tar.gz"),
            size: 1024,
            free_use_in_production: true,
            tck_tested: "yes".to_string(),
            tck_cert_uri: String::new(),
            aqavit_certified: "unknown".to_string(),
            aqavit_cert_uri: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::pkg;
    use super::*;
    use std::collections::HashSet;

    fn api_package() -> Package {
        serde_json::from_str(
            r#"{
                "id": "4a5b6c",
                "archive_type": "tar.gz",
                "distribution": "zulu",
                "major_version": 17,
                "java_version": "17.0.2+8",
                "distribution_version": "17.32.13",
                "latest_build_available": true,
                "release_status": "ga",
                "term_of_support": "lts",
                "operating_system": "linux",
                "lib_c_type": "glibc",
                "architecture": "x64",
                "fpu": "unknown",
                "package_type": "jdk",
                "javafx_bundled": false,
                "directly_downloadable": true,
                "filename": "zulu17.32.13-ca-jdk17.0.2-linux_x64.tar.gz",
                "ephemeral_id": "ZXBoZW1lcmFs",
                "free_use_in_production": true,
                "tck_tested": "unknown",
                "size": 190453210
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_conversion_from_api_package() {
        let pkg = Pkg::try_from(api_package()).unwrap();

        assert_eq!(pkg.distribution, "zulu");
        assert_eq!(pkg.java_version, "17.0.2+8".parse().unwrap());
        assert_eq!(pkg.operating_system, Some(OperatingSystem::Linux));
        assert_eq!(pkg.archive_type, Some(ArchiveType::TarGz));
        assert_eq!(pkg.term_of_support, TermOfSupport::Lts);
        assert_eq!(pkg.expected_size(), Some(190453210));
    }

    #[test]
    fn test_conversion_keeps_unknown_tokens_as_none() {
        let mut package = api_package();
        package.architecture = "z80".to_string();
        package.term_of_support = String::new();
        package.release_status = String::new();
        package.size = -1;

        let pkg = Pkg::try_from(package).unwrap();
        assert_eq!(pkg.architecture, None);
        assert_eq!(pkg.term_of_support, TermOfSupport::Lts);
        assert_eq!(pkg.release_status, ReleaseStatus::Ga);
        assert_eq!(pkg.expected_size(), None);
    }

    #[test]
    fn test_conversion_rejects_unparseable_version() {
        let mut package = api_package();
        package.java_version = "latest".to_string();

        assert!(Pkg::try_from(package).is_err());
    }

    #[test]
    fn test_equality_ignores_id() {
        let a = pkg("a", "17.0.2+8");
        let b = pkg("b", "17.0.2+8");
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(!set.insert(b));
    }

    #[test]
    fn test_equality_uses_semantic_fields() {
        let a = pkg("a", "17.0.2+8");

        let mut b = pkg("a", "17.0.2+8");
        b.javafx_bundled = true;
        assert_ne!(a, b);

        let mut c = pkg("a", "17.0.2+8");
        c.ephemeral_id = "other".to_string();
        assert_ne!(a, c);

        // file name and size are not part of the identity
        let mut d = pkg("a", "17.0.2+8");
        d.file_name = "renamed.tar.gz".to_string();
        d.size = 1;
        assert_eq!(a, d);
    }

    #[test]
    fn test_cli_string() {
        let pkg = Pkg::try_from(api_package()).unwrap();
        assert_eq!(
            pkg.to_cli_string(),
            "discocli -d zulu -v 17.0.2 --os linux --lc glibc --arc x64 --at tar.gz --pt jdk"
        );

        let mut ea = pkg.clone();
        ea.java_version = "21-ea+5".parse().unwrap();
        ea.release_status = ReleaseStatus::Ea;
        ea.javafx_bundled = true;
        assert!(ea.to_cli_string().ends_with("--pt jdk --fx --ea"));
        assert!(ea.to_cli_string().contains("-v 21-ea"));
    }
}
