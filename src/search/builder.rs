use crate::api::PackageQuery;
use crate::models::ReleaseStatus;
use crate::search::criteria::{Criteria, Mode};

const LATEST_AVAILABLE: &str = "available";
const LATEST_PER_VERSION: &str = "per_version";
const LATEST_ALL_OF_VERSION: &str = "all_of_version";

/// Turns resolved criteria into catalog search parameters.
///
/// Parameter order is fixed so equal criteria always produce equal
/// queries. Open fields are left out. Update checks are routed to
/// [`major_version_query`].
pub fn build(criteria: &Criteria) -> PackageQuery {
    if criteria.mode == Mode::UpdateCheck {
        let major = criteria.version.map_or(0, |v| v.feature);
        return major_version_query(criteria, major);
    }

    let mut query = PackageQuery::new()
        .param_opt("distro", criteria.distribution)
        .param_opt("operating_system", criteria.operating_system)
        .param_opt("lib_c_type", criteria.lib_c_type)
        .param_opt("architecture", criteria.architecture);

    query = match (criteria.mode, criteria.version) {
        (Mode::Find, Some(version)) if version.is_major_only() => {
            query
                .param("version", version.feature.to_string())
                .param("latest", LATEST_ALL_OF_VERSION)
        }
        (_, Some(version)) => {
            let query = query.param("version", version.to_query_string());
            if criteria.latest_for_version {
                query.param("latest", LATEST_PER_VERSION)
            } else {
                query
            }
        }
        (Mode::Find, None) => query,
        (_, None) => query.param("latest", LATEST_AVAILABLE),
    };

    query = query
        .param_opt("archive_type", criteria.archive_type)
        .flag("javafx_bundled", criteria.javafx_bundled)
        .param_opt("package_type", criteria.package_type)
        .flag("directlyDownloadable", true);

    let query = with_release_status(query, criteria.wants_early_access());
    log::debug!("Built {:?} query: {query}", criteria.mode);
    query
}

/// Query for every build of one major version.
///
/// Used for update checks and for the "available instead" listing after a
/// failed search. Minor version parts and the javafx flag are not sent; the
/// libc type is only sent together with an operating system.
pub fn major_version_query(criteria: &Criteria, major: u32) -> PackageQuery {
    let mut query = PackageQuery::new()
        .param_opt("distro", criteria.distribution)
        .param("version", major.to_string());

    if let Some(os) = criteria.operating_system {
        query = query
            .param("operating_system", os.to_string())
            .param("lib_c_type", criteria.lib_c_type.unwrap_or(os.lib_c_type()).to_string());
    }

    query = query
        .param_opt("architecture", criteria.architecture)
        .param_opt("package_type", criteria.package_type)
        .param_opt("archive_type", criteria.archive_type);

    with_release_status(query, criteria.wants_early_access())
        .param("latest", LATEST_ALL_OF_VERSION)
}

fn with_release_status(query: PackageQuery, include_ea: bool) -> PackageQuery {
    let query = if include_ea {
        query.param("release_status", ReleaseStatus::Ea.to_string())
    } else {
        query
    };
    query.param("release_status", ReleaseStatus::Ga.to_string())
}
