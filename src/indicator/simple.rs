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

use crate::indicator::{ProgressConfig, ProgressIndicator};
use std::io::{self, Write};

/// Prints one dot for every percent of progress, then a newline when done.
///
/// Nothing is printed while the total is unknown.
pub struct SimpleProgress {
    writer: Box<dyn Write + Send + Sync>,
    total: Option<u64>,
    dots: u64,
}

impl SimpleProgress {
    pub fn new() -> Self {
        Self::with_writer(Box::new(io::stdout()))
    }

    pub fn with_writer(writer: Box<dyn Write + Send + Sync>) -> Self {
        Self {
            writer,
            total: None,
            dots: 0,
        }
    }

    fn finish_line(&mut self) {
        if self.dots > 0 {
            let _ = writeln!(self.writer);
            let _ = self.writer.flush();
            self.dots = 0;
        }
    }
}

impl Default for SimpleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressIndicator for SimpleProgress {
    fn start(&mut self, config: ProgressConfig) {
        self.total = config.total.filter(|total| *total > 0);
        self.dots = 0;
    }

    fn update(&mut self, current: u64) {
        let Some(total) = self.total else {
            return;
        };

        let percent = (current.min(total) * 100) / total;
        if percent > self.dots {
            let dots = ".".repeat((percent - self.dots) as usize);
            let _ = self.writer.write_all(dots.as_bytes());
            let _ = self.writer.flush();
            self.dots = percent;
        }
    }

    fn complete(&mut self, _message: Option<String>) {
        self.finish_line();
    }

    fn error(&mut self, _message: String) {
        self.finish_line();
    }
}
