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

//! Interpretation of `java -version` output together with the files found
//! in the installation directory.

use crate::error::{DiscoError, Result};
use crate::version::VersionNumber;
use log::{debug, trace};
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Feature tags looked for in the VM line, in priority order.
pub const FEATURES: &[&str] = &[
    "loom",
    "panama",
    "metropolis",
    "valhalla",
    "lanai",
    "kona_fiber",
    "crac",
];

/// `IMPLEMENTOR` values of the `release` file and their catalog tokens.
const IMPLEMENTORS: &[(&str, &str)] = &[
    ("AdoptOpenJDK", "aoj"),
    ("Alibaba", "dragonwell"),
    ("Amazon.com Inc.", "corretto"),
    ("Azul Systems, Inc.", "zulu"),
    ("mandrel", "mandrel"),
    ("Microsoft", "microsoft"),
    ("ojdkbuild", "ojdk_build"),
    ("Oracle Corporation", "oracle_openjdk"),
    ("Red Hat, Inc.", "redhat"),
    ("SAP SE", "sap_machine"),
    ("OpenLogic", "openlogic"),
    ("JetBrains s.r.o.", "jetbrains"),
    ("Eclipse Foundation", "temurin"),
    ("Tencent", "kona"),
    ("Bisheng", "bisheng"),
    ("Debian", "debian"),
];

fn zulu_build_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"\((build\s)(.*)\)").ok())
        .as_ref()
}

fn graalvm_version_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"(.*graalvm\s)(.*)(\s\(.*)").ok())
        .as_ref()
}

/// What one probe revealed about an installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInstallation {
    /// Catalog token, empty when the vendor could not be identified.
    pub distribution: String,
    pub version: VersionNumber,
    /// Raw `OS_ARCH` value, if the release file had one.
    pub architecture: Option<String>,
    pub javafx_bundled: bool,
    pub feature: Option<String>,
}

/// Key/value pairs of a JDK `release` file with surrounding quotes removed.
pub fn read_release_file(home: &Path) -> HashMap<String, String> {
    let path = home.join("release");
    let Ok(content) = fs::read_to_string(&path) else {
        trace!("No release file at {}", path.display());
        return HashMap::new();
    };

    content
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().replace('"', "")))
        .collect()
}

/// Parses the merged output lines of `java -version` for the installation
/// rooted at `home`.
pub fn parse_installation(lines: &[String], home: &Path) -> Result<ParsedInstallation> {
    let line1 = lines
        .first()
        .ok_or_else(|| DiscoError::Detection(format!("no version output for {}", home.display())))?;
    let line2 = lines.get(1).map(String::as_str).unwrap_or_default();
    let line3 = lines.get(2).map(|line| line.to_lowercase());

    let mut distribution = String::new();
    let mut build_version = None;

    if line1.starts_with("java version") {
        distribution = "oracle".to_string();
    }

    if line2.contains("Zulu") {
        distribution = "zulu".to_string();
        build_version = zulu_build_pattern()
            .and_then(|pattern| pattern.captures(line2))
            .and_then(|caps| caps.get(2))
            .and_then(|m| m.as_str().parse::<VersionNumber>().ok());
    } else if line2.contains("Semeru") {
        distribution = if line2.contains("Certified") {
            "semeru_certified".to_string()
        } else {
            "semeru".to_string()
        };
    } else if line2.contains("Tencent") {
        distribution = "kona".to_string();
    } else if line2.contains("Bisheng") {
        distribution = "bisheng".to_string();
    }

    let reported = quoted_version(line1)
        .ok_or_else(|| DiscoError::Detection(format!("unrecognized version line '{line1}'")))?;
    let mut version = build_version.unwrap_or(reported);

    let release = read_release_file(home);
    let mut javafx_bundled = has_javafx_files(home);

    if distribution.is_empty()
        && let Some(implementor) = release.get("IMPLEMENTOR")
        && let Some((_, token)) = IMPLEMENTORS.iter().find(|(name, _)| *name == implementor.as_str())
    {
        distribution = token.to_string();
    }

    let architecture = release.get("OS_ARCH").map(|arch| arch.to_lowercase());

    if distribution == "aoj"
        && let Some(variant) = release.get("JVM_VARIANT")
    {
        match variant.to_lowercase().as_str() {
            "dcevm" => distribution = "trava".to_string(),
            "openj9" => distribution = "aoj_openj9".to_string(),
            _ => {}
        }
    }

    if !javafx_bundled {
        javafx_bundled = release
            .get("MODULES")
            .is_some_and(|modules| modules.contains("javafx"));
    }

    let feature = line3.as_deref().and_then(|line| {
        FEATURES
            .iter()
            .find(|feature| line.contains(*feature))
            .map(|feature| feature.to_string())
    });

    if distribution.is_empty()
        && let Some(line3) = line3.as_deref()
    {
        if let Some(readme) = read_readme(home) {
            if readme.contains("liberica native image kit") {
                distribution = "liberica_native".to_string();
                version = graalvm_version(line3).unwrap_or(version);
            } else if readme.contains("liberica") {
                distribution = "liberica".to_string();
            }
        } else if line3.contains("graalvm") {
            // The edition is named after the Java feature release it is built on
            if reported.feature >= 8 {
                distribution = format!("graalvm_ce{}", reported.feature);
            }
            if release
                .get("VENDOR")
                .is_some_and(|vendor| vendor.eq_ignore_ascii_case("gluon"))
            {
                distribution = "gluon_graalvm".to_string();
            }
            version = graalvm_version(line3).unwrap_or(version);
        } else if line3.contains("microsoft") {
            distribution = "microsoft".to_string();
        } else if line3.contains("corretto") {
            distribution = "corretto".to_string();
        } else if line3.contains("temurin") {
            distribution = "temurin".to_string();
        }
    }

    debug!("Parsed {} as '{distribution}' {version}", home.display());

    Ok(ParsedInstallation {
        distribution,
        version,
        architecture,
        javafx_bundled,
        feature,
    })
}

/// Text between the first and the last double quote.
fn quoted_version(line: &str) -> Option<VersionNumber> {
    let start = line.find('"')?;
    let end = line.rfind('"')?;
    if end <= start {
        return None;
    }
    line[start + 1..end].parse().ok()
}

/// Version of a GraalVM build, e.g. `22.3.0` from
/// `openjdk 64-bit server vm graalvm ce 22.3.0 (build ...)`.
fn graalvm_version(line3: &str) -> Option<VersionNumber> {
    let captured = graalvm_version_pattern()?.captures(line3)?.get(2)?.as_str();
    captured
        .split_whitespace()
        .find(|token| token.starts_with(|c: char| c.is_ascii_digit()))
        .and_then(|token| token.parse().ok())
}

fn read_readme(home: &Path) -> Option<String> {
    fs::read_to_string(home.join("readme.txt"))
        .ok()
        .map(|content| content.to_lowercase())
}

fn has_javafx_files(home: &Path) -> bool {
    let jfxrt = home.join("jre").join("lib").join("ext");
    if let Ok(entries) = fs::read_dir(&jfxrt)
        && entries
            .flatten()
            .any(|entry| is_file(&entry) && entry.file_name().eq_ignore_ascii_case("jfxrt.jar"))
    {
        return true;
    }

    fs::read_dir(home.join("jmods")).is_ok_and(|entries| {
        entries
            .flatten()
            .any(|entry| is_file(&entry) && entry.file_name().to_string_lossy().starts_with("javafx"))
    })
}

fn is_file(entry: &fs::DirEntry) -> bool {
    entry.file_type().is_ok_and(|file_type| file_type.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn lines(text: &[&str]) -> Vec<String> {
        text.iter().map(|line| line.to_string()).collect()
    }

    fn write(dir: &Path, relative: &str, content: &str) {
        let path = dir.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_zulu_uses_build_version() {
        let home = TempDir::new().unwrap();
        let output = lines(&[
            r#"openjdk version "17.0.2" 2022-01-18 LTS"#,
            "OpenJDK Runtime Environment Zulu17.32+13-CA (build 17.0.2+8-LTS)",
            "OpenJDK 64-Bit Server VM Zulu17.32+13-CA (build 17.0.2+8-LTS, mixed mode, sharing)",
        ]);

        let parsed = parse_installation(&output, home.path()).unwrap();
        assert_eq!(parsed.distribution, "zulu");
        assert_eq!(parsed.version.to_string(), "17.0.2+8");
        assert!(!parsed.javafx_bundled);
        assert_eq!(parsed.feature, None);
    }

    #[test]
    fn test_java_version_line_means_oracle() {
        let home = TempDir::new().unwrap();
        let output = lines(&[
            r#"java version "1.8.0_311""#,
            "Java(TM) SE Runtime Environment (build 1.8.0_311-b11)",
        ]);

        let parsed = parse_installation(&output, home.path()).unwrap();
        assert_eq!(parsed.distribution, "oracle");
        assert_eq!(parsed.version.feature, 8);
        assert_eq!(parsed.version.update, 311);
    }

    #[test]
    fn test_semeru_markers() {
        let home = TempDir::new().unwrap();
        let certified = lines(&[
            r#"openjdk version "17.0.3" 2022-04-19"#,
            "IBM Semeru Runtime Certified Edition 17.0.3.0 (build 17.0.3+7)",
        ]);
        let open = lines(&[
            r#"openjdk version "17.0.3" 2022-04-19"#,
            "IBM Semeru Runtime Open Edition 17.0.3.0 (build 17.0.3+7)",
        ]);

        assert_eq!(
            parse_installation(&certified, home.path()).unwrap().distribution,
            "semeru_certified"
        );
        assert_eq!(parse_installation(&open, home.path()).unwrap().distribution, "semeru");
    }

    #[test]
    fn test_release_file_implementor_and_arch() {
        let home = TempDir::new().unwrap();
        write(
            home.path(),
            "release",
            "IMPLEMENTOR=\"Eclipse Foundation\"\nOS_ARCH=\"AARCH64\"\nMODULES=\"java.base javafx.base\"\n",
        );
        let output = lines(&[
            r#"openjdk version "21.0.1" 2023-10-17 LTS"#,
            "OpenJDK Runtime Environment Temurin-21.0.1+12 (build 21.0.1+12-LTS)",
        ]);

        let parsed = parse_installation(&output, home.path()).unwrap();
        assert_eq!(parsed.distribution, "temurin");
        assert_eq!(parsed.architecture.as_deref(), Some("aarch64"));
        assert!(parsed.javafx_bundled);
    }

    #[test]
    fn test_unknown_implementor_is_ignored() {
        let home = TempDir::new().unwrap();
        write(home.path(), "release", "IMPLEMENTOR=\"N/A\"\n");
        let output = lines(&[r#"openjdk version "11.0.2" 2019-01-15"#, "OpenJDK Runtime Environment"]);

        let parsed = parse_installation(&output, home.path()).unwrap();
        assert_eq!(parsed.distribution, "");
    }

    #[test]
    fn test_adopt_jvm_variants() {
        let home = TempDir::new().unwrap();
        write(
            home.path(),
            "release",
            "IMPLEMENTOR=\"AdoptOpenJDK\"\nJVM_VARIANT=\"Openj9\"\n",
        );
        let output = lines(&[r#"openjdk version "11.0.9" 2020-10-20"#, "OpenJDK Runtime Environment"]);

        let parsed = parse_installation(&output, home.path()).unwrap();
        assert_eq!(parsed.distribution, "aoj_openj9");
    }

    #[test]
    fn test_javafx_from_jmods() {
        let home = TempDir::new().unwrap();
        write(home.path(), "jmods/javafx.base.jmod", "");
        let output = lines(&[r#"openjdk version "17.0.2" 2022-01-18"#]);

        assert!(parse_installation(&output, home.path()).unwrap().javafx_bundled);
    }

    #[test]
    fn test_javafx_from_legacy_jfxrt() {
        let home = TempDir::new().unwrap();
        write(home.path(), "jre/lib/ext/jfxrt.jar", "");
        let output = lines(&[r#"openjdk version "1.8.0_312""#]);

        assert!(parse_installation(&output, home.path()).unwrap().javafx_bundled);
    }

    #[test]
    fn test_feature_tag_from_vm_line() {
        let home = TempDir::new().unwrap();
        let output = lines(&[
            r#"openjdk version "19-loom" 2022-09-20"#,
            "OpenJDK Runtime Environment (build 19-loom+6-625)",
            "OpenJDK 64-Bit Server VM (build 19-loom+6-625, mixed mode, Loom)",
        ]);

        let parsed = parse_installation(&output, home.path()).unwrap();
        assert_eq!(parsed.feature.as_deref(), Some("loom"));
    }

    #[test]
    fn test_graalvm_from_vm_line() {
        let home = TempDir::new().unwrap();
        let output = lines(&[
            r#"openjdk version "17.0.5" 2022-10-18"#,
            "OpenJDK Runtime Environment GraalVM CE 22.3.0 (build 17.0.5+8-jvmci-22.3-b08)",
            "OpenJDK 64-Bit Server VM GraalVM CE 22.3.0 (build 17.0.5+8-jvmci-22.3-b08, mixed mode, sharing)",
        ]);

        let parsed = parse_installation(&output, home.path()).unwrap();
        assert_eq!(parsed.distribution, "graalvm_ce17");
        assert_eq!(parsed.version.to_string(), "22.3");
    }

    #[test]
    fn test_gluon_graalvm_vendor() {
        let home = TempDir::new().unwrap();
        write(home.path(), "release", "VENDOR=\"Gluon\"\n");
        let output = lines(&[
            r#"openjdk version "17.0.5" 2022-10-18"#,
            "OpenJDK Runtime Environment GraalVM CE 22.3.0 (build 17.0.5+8-jvmci-22.3-b08)",
            "OpenJDK 64-Bit Server VM GraalVM CE 22.3.0 (build 17.0.5+8, mixed mode)",
        ]);

        assert_eq!(
            parse_installation(&output, home.path()).unwrap().distribution,
            "gluon_graalvm"
        );
    }

    #[test]
    fn test_liberica_readme() {
        let home = TempDir::new().unwrap();
        write(home.path(), "readme.txt", "Liberica JDK is a build of OpenJDK\n");
        let output = lines(&[
            r#"openjdk version "17.0.2" 2022-01-18 LTS"#,
            "OpenJDK Runtime Environment (build 17.0.2+9-LTS)",
            "OpenJDK 64-Bit Server VM (build 17.0.2+9-LTS, mixed mode)",
        ]);

        assert_eq!(
            parse_installation(&output, home.path()).unwrap().distribution,
            "liberica"
        );
    }

    #[test]
    fn test_vendor_from_vm_line() {
        let home = TempDir::new().unwrap();
        let output = lines(&[
            r#"openjdk version "17.0.6" 2023-01-17 LTS"#,
            "OpenJDK Runtime Environment Corretto-17.0.6.10.1 (build 17.0.6+10-LTS)",
            "OpenJDK 64-Bit Server VM Corretto-17.0.6.10.1 (build 17.0.6+10-LTS, mixed mode, sharing)",
        ]);

        assert_eq!(
            parse_installation(&output, home.path()).unwrap().distribution,
            "corretto"
        );
    }

    #[test]
    fn test_empty_output_is_detection_error() {
        let home = TempDir::new().unwrap();
        let err = parse_installation(&[], home.path()).unwrap_err();
        assert!(matches!(err, DiscoError::Detection(_)));
    }

    #[test]
    fn test_release_file_skips_comments() {
        let home = TempDir::new().unwrap();
        write(home.path(), "release", "# comment\nJAVA_VERSION=\"17.0.2\"\n");

        let release = read_release_file(home.path());
        assert_eq!(release.len(), 1);
        assert_eq!(release.get("JAVA_VERSION").map(String::as_str), Some("17.0.2"));
    }
}
