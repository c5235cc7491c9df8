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

use crate::api::Catalog;
use crate::download::plain_file_name;
use crate::error::{DiscoError, Result};
use crate::models::Pkg;
use crate::search::builder::major_version_query;
use crate::search::criteria::Criteria;
use colored::Colorize;
use log::{debug, warn};
use std::cmp::Ordering;
use std::collections::HashSet;

/// A package together with the link it is downloaded from.
#[derive(Debug, Clone)]
pub struct ResolvedDownload {
    pub pkg: Pkg,
    pub uri: String,
    pub filename: String,
}

/// Drops packages equal to an earlier one, keeping catalog order.
pub fn dedupe(pkgs: Vec<Pkg>) -> Vec<Pkg> {
    let mut seen = HashSet::with_capacity(pkgs.len());
    let mut unique = Vec::with_capacity(pkgs.len());
    for pkg in pkgs {
        if !seen.contains(&pkg) {
            seen.insert(pkg.clone());
            unique.push(pkg);
        }
    }
    unique
}

/// Picks the package with the highest java version.
///
/// Only the version is compared. Download queries already pin the
/// platform fields, so packages with the same version keep catalog order
/// and the first one wins.
pub fn select_for_download(candidates: Vec<Pkg>, criteria: &Criteria) -> Result<Pkg> {
    let mut pkgs = dedupe(candidates);
    if pkgs.is_empty() {
        return Err(DiscoError::NoPackageFound(criteria.to_string()));
    }

    pkgs.sort_by(by_version_desc);
    let selected = pkgs.swap_remove(0);
    debug!(
        "Selected package {} ({} {})",
        selected.id, selected.distribution, selected.java_version
    );
    Ok(selected)
}

/// Orders packages for listing: operating system, then newest version
/// first, then architecture, archive type and package type.
pub fn rank_for_find(candidates: Vec<Pkg>, criteria: &Criteria) -> Result<Vec<Pkg>> {
    let mut pkgs = dedupe(candidates);
    if pkgs.is_empty() {
        return Err(DiscoError::NoPackageFound(criteria.to_string()));
    }

    pkgs.sort_by(|a, b| {
        a.operating_system
            .cmp(&b.operating_system)
            .then_with(|| b.java_version.cmp(&a.java_version))
            .then_with(|| a.architecture.cmp(&b.architecture))
            .then_with(|| a.archive_type.cmp(&b.archive_type))
            .then_with(|| a.package_type.cmp(&b.package_type))
    });
    Ok(pkgs)
}

/// Looks up the direct download link of the selected package.
pub fn resolve_download(catalog: &Catalog, pkg: Pkg) -> Result<ResolvedDownload> {
    let info = catalog.package_info(&pkg.id)?;

    if info.direct_download_uri.is_empty() {
        return Err(DiscoError::MissingDownloadInfo(pkg.id.clone()));
    }

    let filename = if info.filename.is_empty() {
        pkg.file_name.clone()
    } else {
        info.filename
    };
    if plain_file_name(&filename).is_none() {
        warn!("Package {} has an unusable file name '{filename}'", pkg.id);
        return Err(DiscoError::MissingDownloadInfo(pkg.id.clone()));
    }

    Ok(ResolvedDownload {
        pkg,
        uri: info.direct_download_uri,
        filename,
    })
}

/// Lists every build of the requested major version, newest first.
///
/// Shown after a search came back empty so the user sees what exists.
/// Returns an empty list when no version was requested.
pub fn available_instead(catalog: &Catalog, criteria: &Criteria) -> Result<Vec<Pkg>> {
    let Some(version) = criteria.version else {
        return Ok(Vec::new());
    };

    let query = major_version_query(criteria, version.feature);
    let mut pkgs = dedupe(catalog.search_packages(&query)?);
    pkgs.sort_by(by_version_desc);
    Ok(pkgs)
}

/// Prints what the catalog has for the requested major version after a
/// search came back empty. Failures here only get logged; the empty search
/// is what gets reported.
pub fn show_available_instead(catalog: &Catalog, criteria: &Criteria) {
    let Some(version) = criteria.version else {
        return;
    };

    match available_instead(catalog, criteria) {
        Ok(pkgs) if pkgs.is_empty() => {}
        Ok(pkgs) => {
            println!(
                "{} {}:",
                "Available for major version".cyan().bold(),
                version.feature
            );
            for pkg in &pkgs {
                println!("  {}", pkg.to_cli_string());
            }
        }
        Err(e) => warn!("Could not list alternatives: {e}"),
    }
}

fn by_version_desc(a: &Pkg, b: &Pkg) -> Ordering {
    b.java_version.cmp(&a.java_version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::catalog::test_support::{MockTransport, package_json, packages_body};
    use crate::api::CatalogResponse;
    use crate::models::pkg::test_support::pkg;
    use crate::models::{
        Architecture, ArchiveType, Distribution, OperatingSystem, PackageType, TermOfSupport,
    };
    use crate::platform::HostPlatform;
    use crate::search::criteria::{Defaults, Mode, RawCriteria};
    use mockall::predicate::{always, eq};

    fn criteria(version: Option<&str>) -> Criteria {
        let raw = RawCriteria {
            version: version.map(str::to_string),
            ..Default::default()
        };
        let defaults = Defaults::new(
            Distribution::Zulu,
            HostPlatform::new(Some(OperatingSystem::Linux), Some(Architecture::X64)),
        );
        raw.resolve(Mode::Download, &defaults).unwrap()
    }

    fn versions(pkgs: &[Pkg]) -> Vec<String> {
        pkgs.iter().map(|p| p.java_version.to_string()).collect()
    }

    #[test]
    fn test_dedupe_keeps_first_occurrence() {
        let pkgs = vec![
            pkg("a", "17.0.1"),
            pkg("b", "17.0.2"),
            pkg("c", "17.0.2"),
            pkg("d", "17.0.1"),
        ];

        let unique = dedupe(pkgs);
        let ids: Vec<&str> = unique.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_dedupe_is_idempotent() {
        let mut fx = pkg("e", "11.0.14.1+1");
        fx.javafx_bundled = true;
        let pkgs = vec![
            pkg("a", "17.0.1"),
            pkg("b", "17.0.2"),
            pkg("c", "17.0.2"),
            fx.clone(),
            fx,
        ];

        let once = dedupe(pkgs);
        let twice = dedupe(once.clone());
        assert_eq!(once, twice);
        assert_eq!(once.len(), 3);
    }

    #[test]
    fn test_select_for_download_picks_highest_version() {
        let pkgs = vec![pkg("a", "17.0.1"), pkg("b", "17.0.2"), pkg("c", "17.0.2")];

        assert_eq!(dedupe(pkgs.clone()).len(), 2);
        let selected = select_for_download(pkgs, &criteria(Some("17"))).unwrap();
        assert_eq!(selected.java_version.to_string(), "17.0.2");
        assert_eq!(selected.id, "b");
    }

    #[test]
    fn test_select_for_download_ties_keep_catalog_order() {
        // Same version, different term of support: the version is the only
        // sort key, so the catalog's first entry is selected.
        let mut sts = pkg("sts", "17.0.2");
        sts.term_of_support = TermOfSupport::Sts;
        let lts = pkg("lts", "17.0.2");
        let older = pkg("older", "17.0.1");

        let selected =
            select_for_download(vec![older.clone(), sts.clone(), lts.clone()], &criteria(None))
                .unwrap();
        assert_eq!(selected.id, "sts");

        let selected = select_for_download(vec![lts, sts, older], &criteria(None)).unwrap();
        assert_eq!(selected.id, "lts");
    }

    #[test]
    fn test_select_for_download_empty() {
        let err = select_for_download(Vec::new(), &criteria(Some("17"))).unwrap_err();
        assert!(matches!(err, DiscoError::NoPackageFound(msg) if msg.starts_with("zulu 17")));
    }

    #[test]
    fn test_rank_for_find_groups_by_operating_system() {
        let mut win_old = pkg("w1", "17.0.1");
        win_old.operating_system = Some(OperatingSystem::Windows);
        let mut win_new = pkg("w2", "17.0.3");
        win_new.operating_system = Some(OperatingSystem::Windows);
        let linux_old = pkg("l1", "17.0.1");
        let linux_new = pkg("l2", "17.0.2");
        let mut mac = pkg("m1", "17.0.2");
        mac.operating_system = Some(OperatingSystem::MacOS);

        let ranked = rank_for_find(
            vec![win_old, linux_old, mac, win_new, linux_new],
            &criteria(Some("17")),
        )
        .unwrap();

        let oses: Vec<_> = ranked.iter().map(|p| p.operating_system).collect();
        assert_eq!(
            oses,
            vec![
                Some(OperatingSystem::Linux),
                Some(OperatingSystem::Linux),
                Some(OperatingSystem::MacOS),
                Some(OperatingSystem::Windows),
                Some(OperatingSystem::Windows),
            ]
        );
        assert_eq!(
            versions(&ranked),
            vec!["17.0.2", "17.0.1", "17.0.2", "17.0.3", "17.0.1"]
        );
    }

    #[test]
    fn test_rank_for_find_secondary_keys() {
        let mut zip = pkg("zip", "21.0.1");
        zip.archive_type = Some(ArchiveType::Zip);
        let mut jre = pkg("jre", "21.0.1");
        jre.package_type = Some(PackageType::Jre);
        let mut arm = pkg("arm", "21.0.1");
        arm.architecture = Some(Architecture::Aarch64);
        let jdk = pkg("jdk", "21.0.1");

        let ranked = rank_for_find(vec![zip, jre, jdk, arm], &criteria(Some("21"))).unwrap();
        let ids: Vec<&str> = ranked.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["arm", "jdk", "jre", "zip"]);
    }

    #[test]
    fn test_rank_for_find_empty() {
        let err = rank_for_find(Vec::new(), &criteria(Some("17"))).unwrap_err();
        assert!(matches!(err, DiscoError::NoPackageFound(_)));
    }

    #[test]
    fn test_resolve_download_uses_detail_filename() {
        let mut transport = MockTransport::new();
        transport
            .expect_get()
            .with(eq("ids/b"), always())
            .times(1)
            .returning(|_, _| {
                Ok(CatalogResponse::new(
                    200,
                    r#"{"result":[{"filename":"canonical.tar.gz","direct_download_uri":"https://example.com/canonical.tar.gz"}]}"#,
                ))
            });

        let resolved = resolve_download(&Catalog::new(&transport), pkg("b", "17.0.2")).unwrap();
        assert_eq!(resolved.filename, "canonical.tar.gz");
        assert_eq!(resolved.uri, "https://example.com/canonical.tar.gz");
        assert_eq!(resolved.pkg.id, "b");
    }

    #[test]
    fn test_resolve_download_falls_back_to_package_filename() {
        let mut transport = MockTransport::new();
        transport.expect_get().returning(|_, _| {
            Ok(CatalogResponse::new(
                200,
                r#"{"result":[{"direct_download_uri":"https://example.com/x.tar.gz"}]}"#,
            ))
        });

        let pkg = pkg("b", "17.0.2");
        let expected = pkg.file_name.clone();
        let resolved = resolve_download(&Catalog::new(&transport), pkg).unwrap();
        assert_eq!(resolved.filename, expected);
    }

    #[test]
    fn test_resolve_download_without_direct_uri() {
        let mut transport = MockTransport::new();
        transport.expect_get().returning(|_, _| {
            Ok(CatalogResponse::new(
                200,
                r#"{"result":[{"filename":"x.tar.gz","direct_download_uri":""}]}"#,
            ))
        });

        let err = resolve_download(&Catalog::new(&transport), pkg("b", "17.0.2")).unwrap_err();
        assert!(matches!(err, DiscoError::MissingDownloadInfo(_)));
    }

    #[test]
    fn test_resolve_download_rejects_paths_as_file_names() {
        for filename in ["/tmp/planted.sh", "../escaped.tar.gz", "a/b.tar.gz"] {
            let body = format!(
                r#"{{"result":[{{"filename":"{filename}","direct_download_uri":"https://example.com/x.tar.gz"}}]}}"#
            );
            let mut transport = MockTransport::new();
            transport
                .expect_get()
                .returning(move |_, _| Ok(CatalogResponse::new(200, body.clone())));

            let err = resolve_download(&Catalog::new(&transport), pkg("b", "17.0.2")).unwrap_err();
            assert!(
                matches!(err, DiscoError::MissingDownloadInfo(ref id) if id == "b"),
                "{filename} was accepted"
            );
        }
    }

    #[test]
    fn test_resolve_download_without_any_file_name() {
        let mut transport = MockTransport::new();
        transport.expect_get().returning(|_, _| {
            Ok(CatalogResponse::new(
                200,
                r#"{"result":[{"filename":"","direct_download_uri":"https://example.com/x.tar.gz"}]}"#,
            ))
        });

        let mut nameless = pkg("b", "17.0.2");
        nameless.file_name = String::new();
        let err = resolve_download(&Catalog::new(&transport), nameless).unwrap_err();
        assert!(matches!(err, DiscoError::MissingDownloadInfo(_)));
    }

    #[test]
    fn test_available_instead_lists_major_version_newest_first() {
        let mut transport = MockTransport::new();
        transport
            .expect_get()
            .withf(|endpoint, query| {
                endpoint == "packages"
                    && query.get("version") == Some("17")
                    && query.get("latest") == Some("all_of_version")
            })
            .times(1)
            .returning(|_, _| {
                Ok(CatalogResponse::new(
                    200,
                    packages_body(&[
                        package_json("a", "17.0.1+12"),
                        package_json("b", "17.0.9+9"),
                        package_json("c", "17.0.5+8"),
                    ]),
                ))
            });

        let pkgs =
            available_instead(&Catalog::new(&transport), &criteria(Some("17.0.42"))).unwrap();
        assert_eq!(versions(&pkgs), vec!["17.0.9+9", "17.0.5+8", "17.0.1+12"]);
    }

    #[test]
    fn test_available_instead_without_version() {
        let mut transport = MockTransport::new();
        transport.expect_get().times(0);

        let pkgs = available_instead(&Catalog::new(&transport), &criteria(None)).unwrap();
        assert!(pkgs.is_empty());
    }
}
