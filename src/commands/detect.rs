use crate::detector::{DetectedInstallation, Detector};
use crate::error::Result;
use crate::platform::{HostPlatform, default_search_paths};
use colored::Colorize;
use log::debug;
use std::path::PathBuf;

pub struct DetectCommand {
    detector: Detector,
}

impl DetectCommand {
    /// Scans `search_paths`, or the platform's usual install locations when
    /// none are given.
    pub fn new(search_paths: Vec<PathBuf>) -> Result<Self> {
        let search_paths = if search_paths.is_empty() {
            default_search_paths()
        } else {
            search_paths
        };
        debug!("Detect search paths: {search_paths:?}");

        Ok(Self {
            detector: Detector::new(search_paths, HostPlatform::detect()),
        })
    }

    pub fn with_detector(mut self, detector: Detector) -> Self {
        self.detector = detector;
        self
    }

    pub fn execute(&self) -> Result<()> {
        let installations = self.detector.detect();
        print!("{}", render(&installations));
        Ok(())
    }
}

fn render(installations: &[DetectedInstallation]) -> String {
    let mut out = format!("{}\n", "Distributions found".cyan());
    if installations.is_empty() {
        out.push_str("No Java installations found\n");
    }
    for installation in installations {
        out.push_str(&format!("{installation}\n"));
    }
    out
}
