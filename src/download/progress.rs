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

use super::ProgressReporter;
use crate::indicator::{ProgressConfig, ProgressFactory, ProgressIndicator};

/// Feeds downloader events into a progress indicator.
///
/// Positions only ever move forward; a report lower than the last one is
/// dropped.
pub struct DownloadProgressAdapter {
    indicator: Box<dyn ProgressIndicator>,
    operation: String,
    context: String,
    position: u64,
}

impl DownloadProgressAdapter {
    pub fn new(indicator: Box<dyn ProgressIndicator>, operation: String, context: String) -> Self {
        Self {
            indicator,
            operation,
            context,
            position: 0,
        }
    }

    pub fn for_package_download(no_progress: bool, filename: &str) -> Self {
        Self::new(
            ProgressFactory::create(no_progress),
            "Downloading".to_string(),
            filename.to_string(),
        )
    }
}

impl ProgressReporter for DownloadProgressAdapter {
    fn on_start(&mut self, total_bytes: u64) {
        self.position = 0;
        let config = ProgressConfig::new(&self.operation, &self.context);
        let config = if total_bytes > 0 {
            config.with_total(total_bytes)
        } else {
            config
        };
        self.indicator.start(config);
    }

    fn on_progress(&mut self, bytes_downloaded: u64) {
        if bytes_downloaded <= self.position {
            return;
        }
        self.position = bytes_downloaded;
        self.indicator.update(bytes_downloaded);
    }

    fn on_complete(&mut self) {
        self.indicator.complete(Some("Download complete".to_string()));
    }

    fn on_error(&mut self, message: &str) {
        self.indicator.error(message.to_string());
    }
}
