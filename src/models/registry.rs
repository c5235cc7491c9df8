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

//! Normalization of free-text user input into the closed value sets the
//! catalog understands.
//!
//! Every canonical type publishes a static table of accepted spellings.
//! Matching is exact and case-sensitive: `"Zulu"` is accepted only because
//! the table lists it, not because of any case folding.

use crate::error::{DiscoError, Result};
use std::fmt;

/// The kind of field a canonical value belongs to, used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Distribution,
    OperatingSystem,
    Architecture,
    ArchiveType,
    PackageType,
    LibCType,
    ReleaseStatus,
    TermOfSupport,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Distribution => "distribution",
            FieldKind::OperatingSystem => "operating system",
            FieldKind::Architecture => "architecture",
            FieldKind::ArchiveType => "archive type",
            FieldKind::PackageType => "package type",
            FieldKind::LibCType => "libc type",
            FieldKind::ReleaseStatus => "release status",
            FieldKind::TermOfSupport => "term of support",
        };
        f.write_str(name)
    }
}

pub trait CanonicalValue: Copy + Eq + 'static {
    const KIND: FieldKind;

    /// All variants in declaration order.
    fn variants() -> &'static [Self];

    /// Token used in catalog queries and responses.
    fn api_string(self) -> &'static str;

    /// Human readable name.
    fn label(self) -> &'static str;

    /// Every spelling accepted for this variant, including the api string.
    fn synonyms(self) -> &'static [&'static str];

    fn from_text(text: &str) -> Option<Self> {
        Self::variants()
            .iter()
            .copied()
            .find(|variant| variant.synonyms().contains(&text))
    }
}

/// Normalizes optional user input.
///
/// `None` means the user did not ask for anything, `Some(value)` is a
/// recognized value, and unrecognized text is reported as
/// [`DiscoError::FieldNotFound`].
pub fn normalize<T: CanonicalValue>(raw: Option<&str>) -> Result<Option<T>> {
    match raw {
        None => Ok(None),
        Some(text) => match T::from_text(text) {
            Some(value) => Ok(Some(value)),
            None => Err(DiscoError::FieldNotFound {
                kind: T::KIND,
                input: text.to_string(),
            }),
        },
    }
}

/// Same as [`normalize`] for catalog data: unknown tokens become `None`
/// instead of an error, since the catalog may know values this build does not.
pub fn lenient<T: CanonicalValue>(raw: Option<&str>) -> Option<T> {
    raw.and_then(T::from_text)
}

/// Implements `Display` by writing the api string.
macro_rules! display_as_api_string {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ::std::fmt::Display for $ty {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    f.write_str($crate::models::registry::CanonicalValue::api_string(*self))
                }
            }
        )*
    };
}

pub(crate) use display_as_api_string;

#[cfg(test)]
pub(crate) fn assert_table_is_consistent<T: CanonicalValue + fmt::Debug>() {
    for variant in T::variants() {
        assert!(
            variant.synonyms().contains(&variant.api_string()),
            "{variant:?} does not accept its own api string"
        );
        for synonym in variant.synonyms() {
            assert_eq!(
                T::from_text(synonym),
                Some(*variant),
                "synonym '{synonym}' resolves to another {}",
                T::KIND
            );
        }
    }
}
