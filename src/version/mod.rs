use crate::error::{DiscoError, Result};
use crate::models::ReleaseStatus;
use std::fmt;
use std::str::FromStr;

/// A JDK version in JEP 223 terms: `$FEATURE.$INTERIM.$UPDATE.$PATCH`,
/// an optional `-ea` marker and an optional `+$BUILD` number.
///
/// Field order matters: the derived ordering compares the four numeric
/// components first, then release status (early access sorts before GA),
/// then the build number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionNumber {
    pub feature: u32,
    pub interim: u32,
    pub update: u32,
    pub patch: u32,
    pub release_status: ReleaseStatus,
    pub build: Option<u32>,
}

impl VersionNumber {
    pub fn new(feature: u32, interim: u32, update: u32, patch: u32) -> Self {
        Self {
            feature,
            interim,
            update,
            patch,
            release_status: ReleaseStatus::Ga,
            build: None,
        }
    }

    pub fn major(feature: u32) -> Self {
        Self::new(feature, 0, 0, 0)
    }

    pub fn with_build(mut self, build: u32) -> Self {
        self.build = Some(build);
        self
    }

    pub fn with_release_status(mut self, release_status: ReleaseStatus) -> Self {
        self.release_status = release_status;
        self
    }

    /// Copy without build metadata.
    pub fn reduced(&self) -> Self {
        Self {
            build: None,
            ..*self
        }
    }

    /// True when only the feature component is set, e.g. `17`.
    pub fn is_major_only(&self) -> bool {
        self.interim == 0 && self.update == 0 && self.patch == 0
    }

    pub fn is_early_access(&self) -> bool {
        self.release_status == ReleaseStatus::Ea
    }

    /// Form sent as the `version` query parameter: no build number.
    pub fn to_query_string(&self) -> String {
        self.reduced().to_string()
    }

    fn numeric_part(&self) -> String {
        let components = [self.feature, self.interim, self.update, self.patch];
        let significant = components
            .iter()
            .rposition(|c| *c != 0)
            .map_or(1, |last| last + 1);

        components[..significant]
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl FromStr for VersionNumber {
    type Err = DiscoError;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        let invalid = || DiscoError::InvalidVersionFormat(s.to_string());

        if text.is_empty() {
            return Err(invalid());
        }

        let (main, build_part) = match text.split_once('+') {
            Some((main, build)) => (main, Some(build)),
            None => (text, None),
        };

        // Build suffixes such as "12-LTS" only contribute their leading number
        let mut build = build_part.and_then(leading_number);

        let (numbers, qualifier) = match main.split_once('-') {
            Some((numbers, qualifier)) => (numbers, Some(qualifier.to_ascii_lowercase())),
            None => (main, None),
        };

        let mut release_status = ReleaseStatus::Ga;
        if let Some(qualifier) = qualifier {
            if qualifier.starts_with("ea") {
                release_status = ReleaseStatus::Ea;
            } else if let Some(legacy_build) = qualifier.strip_prefix('b') {
                // 1.8.0_312-b07
                build = build.or_else(|| leading_number(legacy_build));
            }
        }

        // 1.8.0_312 carries the update after an underscore
        let (numbers, legacy_update) = match numbers.split_once('_') {
            Some((numbers, update)) => (numbers, Some(update.parse::<u32>().map_err(|_| invalid())?)),
            None => (numbers, None),
        };

        let mut components = numbers
            .split('.')
            .map(|part| part.parse::<u32>().map_err(|_| invalid()))
            .collect::<Result<Vec<u32>>>()?;

        if components.len() >= 2 && components[0] == 1 && components[1] <= 8 {
            components.remove(0);
        }

        let component = |index: usize| components.get(index).copied().unwrap_or(0);
        let mut version = VersionNumber {
            feature: component(0),
            interim: component(1),
            update: component(2),
            patch: component(3),
            release_status,
            build,
        };

        if let Some(update) = legacy_update {
            version.update = update;
        }

        Ok(version)
    }
}

fn leading_number(text: &str) -> Option<u32> {
    let digits: String = text.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.numeric_part())?;

        if self.is_early_access() {
            write!(f, "-ea")?;
        }

        if let Some(build) = self.build {
            write!(f, "+{build}")?;
        }

        Ok(())
    }
}
