//! Update checks for an installed JDK.
//!
//! An installation is described either by the detector or by a descriptor
//! string `distro,version,os,arch,packageType[,fx]`. Candidates come from
//! the "all builds of this major version" catalog query.

use crate::detector::DetectedInstallation;
use crate::error::{DiscoError, Result};
use crate::models::{
    Architecture, CanonicalValue, Distribution, OperatingSystem, PackageType, Pkg,
};
use crate::search::RawCriteria;
use crate::version::VersionNumber;
use log::debug;
use std::path::PathBuf;

const FX_MARKER: &str = "fx";

/// Candidates strictly newer than `installed`, in input order.
///
/// The javafx flag has to match. An early-access install compares the full
/// version including the build number; a GA install compares versions
/// without build metadata, so a rebuild of the same release is not an update.
pub fn find_updates(installed: &DetectedInstallation, candidates: &[Pkg]) -> Vec<Pkg> {
    let current = installed.version;

    let updates: Vec<Pkg> = candidates
        .iter()
        .filter(|pkg| pkg.javafx_bundled == installed.javafx_bundled)
        .filter(|pkg| {
            if current.is_early_access() {
                pkg.java_version > current
            } else {
                pkg.java_version.reduced() > current.reduced()
            }
        })
        .cloned()
        .collect();

    debug!(
        "{} of {} candidates are newer than {current}",
        updates.len(),
        candidates.len()
    );
    updates
}

/// Parses `distro,version,os,arch,packageType[,fx]`.
pub fn parse_descriptor(descriptor: &str) -> Result<DetectedInstallation> {
    let fields: Vec<&str> = descriptor.split(',').map(str::trim).collect();
    if !(5..=6).contains(&fields.len()) {
        return Err(DiscoError::InvalidDescriptor(format!(
            "'{descriptor}' must look like distro,version,os,arch,packageType[,fx]"
        )));
    }

    let javafx_bundled = match fields.get(5) {
        None => false,
        Some(&FX_MARKER) => true,
        Some(other) => {
            return Err(DiscoError::InvalidDescriptor(format!(
                "unexpected '{other}' in '{descriptor}', only 'fx' may follow the package type"
            )));
        }
    };

    let distribution: Distribution = required(fields[0])?;
    let version: VersionNumber = fields[1].parse()?;
    let operating_system: OperatingSystem = required(fields[2])?;
    let architecture: Architecture = required(fields[3])?;
    let package_type: PackageType = required(fields[4])?;

    Ok(DetectedInstallation {
        distribution: distribution.api_string().to_string(),
        version,
        operating_system: Some(operating_system),
        architecture: architecture.api_string().to_string(),
        package_type: Some(package_type),
        javafx_bundled,
        feature: None,
        in_use: false,
        path: PathBuf::new(),
    })
}

/// Search criteria that select every build of the installed major version.
pub fn criteria_for(installed: &DetectedInstallation) -> RawCriteria {
    RawCriteria {
        distribution: Some(installed.distribution.clone()),
        operating_system: installed.operating_system.map(|os| os.api_string().to_string()),
        architecture: Some(installed.architecture.clone()).filter(|arch| !arch.is_empty()),
        package_type: installed.package_type.map(|pt| pt.api_string().to_string()),
        version: Some(installed.version.to_string()),
        include_ea: installed.version.is_early_access(),
        javafx_bundled: installed.javafx_bundled,
        ..Default::default()
    }
}

fn required<T: CanonicalValue>(field: &str) -> Result<T> {
    T::from_text(field).ok_or_else(|| DiscoError::FieldNotFound {
        kind: T::KIND,
        input: field.to_string(),
    })
}
