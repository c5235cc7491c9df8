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

use crate::indicator::{
    IndicatifProgress, ProgressIndicator, ProgressRendererKind, SilentProgress, SimpleProgress,
};
use std::env;
use std::io::IsTerminal;

pub struct ProgressFactory;

impl ProgressFactory {
    pub fn create(no_progress: bool) -> Box<dyn ProgressIndicator> {
        match Self::renderer_kind(no_progress) {
            ProgressRendererKind::Silent => Box::new(SilentProgress),
            ProgressRendererKind::NonTty => Box::new(SimpleProgress::new()),
            ProgressRendererKind::Tty => Box::new(IndicatifProgress::new()),
        }
    }

    /// Which renderer [`ProgressFactory::create`] picks in this environment.
    pub fn renderer_kind(no_progress: bool) -> ProgressRendererKind {
        if no_progress {
            ProgressRendererKind::Silent
        } else if Self::should_use_simple_progress() {
            // Non-terminal or CI environment
            ProgressRendererKind::NonTty
        } else {
            ProgressRendererKind::Tty
        }
    }

    fn should_use_simple_progress() -> bool {
        // Pipe, redirect, etc.
        if !std::io::stderr().is_terminal() {
            return true;
        }

        // GitHub Actions, Jenkins, etc.
        if env::var("CI").is_ok() {
            return true;
        }

        if let Ok(term) = env::var("TERM")
            && term == "dumb"
        {
            return true;
        }

        // https://no-color.org/
        if env::var("NO_COLOR").is_ok() {
            return true;
        }

        false
    }
}
