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

use crate::error::DiscoError;
use std::fmt;

pub struct ErrorContext<'a> {
    pub error: &'a DiscoError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a DiscoError) -> Self {
        let (suggestion, details) = match error {
            DiscoError::FieldNotFound { kind, input } => {
                let suggestion = Some(
                    "Run 'discocli --info' to list the supported values. Spelling is matched \
                     exactly, including case."
                        .to_string(),
                );
                let details = if input.is_empty() {
                    Some(format!("The {kind} of this machine is not one the catalog knows."))
                } else {
                    Some(format!("'{input}' is not a known {kind} name or synonym."))
                };
                (suggestion, details)
            }
            DiscoError::InvalidModeCombination(_) => {
                let suggestion = Some(
                    "Use --latest only together with --version, and give both --distribution \
                     and --version when searching with --find."
                        .to_string(),
                );
                (suggestion, None)
            }
            DiscoError::InvalidVersionFormat(msg) => {
                let suggestion = Some(
                    "Version format should look like '17', '17.0.2', '17.0.2+8' or '21-ea+5'."
                        .to_string(),
                );
                let details = Some(format!("Invalid format: {msg}"));
                (suggestion, details)
            }
            DiscoError::InvalidDescriptor(_) => {
                let suggestion = Some(
                    "Describe the installation as 'distro,version,os,arch,packageType[,fx]', \
                     e.g. 'zulu,17.0.2,linux,x64,jdk'."
                        .to_string(),
                );
                (suggestion, None)
            }
            DiscoError::Transport(_) | DiscoError::Http(_) => {
                let suggestion = Some(
                    "Check your internet connection and proxy settings (HTTP_PROXY / \
                     HTTPS_PROXY), then try again."
                        .to_string(),
                );
                (suggestion, None)
            }
            DiscoError::NoPackageFound(_) => {
                let suggestion = Some(
                    "Relax the criteria (e.g. drop --version details or --archive-type) or try \
                     'discocli --find' to see what is available."
                        .to_string(),
                );
                (suggestion, None)
            }
            DiscoError::MissingDownloadInfo(id) => {
                let suggestion = Some(
                    "The catalog does not offer a direct link for this package. Pick another \
                     distribution or archive type."
                        .to_string(),
                );
                let details = Some(format!("Package id: {id}"));
                (suggestion, details)
            }
            DiscoError::DownloadFailed { filename, .. } => {
                let suggestion = Some(format!(
                    "The partially written file '{filename}' was left on disk. Delete it before \
                     retrying, otherwise the download is skipped as already present."
                ));
                (suggestion, None)
            }
            DiscoError::Config(_) => {
                let suggestion = Some(
                    "Check the DISCOCLI_* environment variables, e.g. \
                     DISCOCLI_API__TIMEOUT_SECS must be a number."
                        .to_string(),
                );
                (suggestion, None)
            }
            _ => (None, None),
        };

        ErrorContext {
            error,
            suggestion,
            details,
        }
    }
}

impl<'a> fmt::Display for ErrorContext<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\n\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}
