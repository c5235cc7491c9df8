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

mod context;
mod exit_codes;
mod format;

pub use context::ErrorContext;
pub use exit_codes::{
    EXIT_ALREADY_EXISTS, EXIT_FAILURE, EXIT_SUCCESS, get_exit_code, normalize_exit_code,
};
pub use format::{format_error_chain, format_error_with_color};

use crate::models::FieldKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscoError {
    /// `input` is empty when no value was given and no default applies.
    #[error("{}", field_not_found_message(*kind, input))]
    FieldNotFound { kind: FieldKind, input: String },

    #[error("Invalid combination of options: {0}")]
    InvalidModeCombination(String),

    #[error("Invalid version format: {0}")]
    InvalidVersionFormat(String),

    #[error("Invalid installation descriptor: {0}")]
    InvalidDescriptor(String),

    #[error("Failed to retrieve data from the package catalog: {0}")]
    Transport(String),

    #[error("No package found for {0}")]
    NoPackageFound(String),

    #[error("Package '{0}' has no direct download link")]
    MissingDownloadInfo(String),

    #[error("Failed to download '{filename}' from {uri}: {reason}")]
    DownloadFailed {
        filename: String,
        uri: String,
        reason: String,
    },

    #[error("Invalid response from the package catalog: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to detect installed distributions: {0}")]
    Detection(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Http(#[from] attohttpc::Error),
}

impl From<config::ConfigError> for DiscoError {
    fn from(error: config::ConfigError) -> Self {
        DiscoError::Config(error.to_string())
    }
}

fn field_not_found_message(kind: FieldKind, input: &str) -> String {
    if input.is_empty() {
        format!("Could not determine the {kind}; please specify it")
    } else {
        format!("Unknown {kind} '{input}'")
    }
}

pub type Result<T> = std::result::Result<T, DiscoError>;
