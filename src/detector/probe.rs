use log::{debug, warn};
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Upper bound for one `java -version` run.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of `java -version` output.
pub trait JavaProbe {
    /// Non-empty output lines, or `None` when the executable could not be
    /// run, timed out or printed nothing.
    fn version_output(&self, java: &Path) -> Option<Vec<String>>;
}

/// Runs the executable as a child process.
pub struct ProcessProbe {
    timeout: Duration,
}

impl ProcessProbe {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for ProcessProbe {
    fn default() -> Self {
        Self::new(PROBE_TIMEOUT)
    }
}

impl JavaProbe for ProcessProbe {
    fn version_output(&self, java: &Path) -> Option<Vec<String>> {
        let mut child = match Command::new(java)
            .arg("-version")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
        {
            Ok(child) => child,
            Err(e) => {
                debug!("Could not run {}: {e}", java.display());
                return None;
            }
        };

        let stderr = child.stderr.take();
        let stdout = child.stdout.take();
        let (sender, receiver) = mpsc::channel();

        // The version banner goes to stderr; stdout is merged after it.
        // Both pipes drain at once so a full stdout cannot stall the child.
        thread::spawn(move || {
            let stdout_reader = thread::spawn(move || {
                let mut text = String::new();
                if let Some(mut stdout) = stdout {
                    let _ = stdout.read_to_string(&mut text);
                }
                text
            });

            let mut text = String::new();
            if let Some(mut stderr) = stderr {
                let _ = stderr.read_to_string(&mut text);
            }
            if let Ok(stdout_text) = stdout_reader.join() {
                text.push_str(&stdout_text);
            }
            let _ = sender.send(text);
        });

        let text = match receiver.recv_timeout(self.timeout) {
            Ok(text) => {
                let _ = child.wait();
                text
            }
            Err(_) => {
                warn!(
                    "{} -version did not finish within {}s, skipping",
                    java.display(),
                    self.timeout.as_secs()
                );
                let _ = child.kill();
                let _ = child.wait();
                return None;
            }
        };

        let lines: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        if lines.is_empty() { None } else { Some(lines) }
    }
}
