use crate::download::client::{AttohttpcClient, HttpClient, HttpResponse};
use crate::error::{DiscoError, Result};
use log::{debug, info};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

const DOWNLOAD_CHUNK_SIZE: usize = 8192;

pub trait ProgressReporter: Send + Sync {
    fn on_start(&mut self, total_bytes: u64);

    fn on_progress(&mut self, bytes_downloaded: u64);

    fn on_complete(&mut self);

    fn on_error(&mut self, message: &str);
}

/// What a successful call to [`PackageDownloader::download`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Downloaded { path: PathBuf, bytes: u64 },
    /// The target was already present and has not been touched.
    AlreadyExists { path: PathBuf },
}

pub struct PackageDownloader {
    pub(crate) http_client: Box<dyn HttpClient>,
    progress_reporter: Option<Box<dyn ProgressReporter>>,
}

impl Default for PackageDownloader {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageDownloader {
    pub fn new() -> Self {
        Self::with_client(Box::new(AttohttpcClient::new()))
    }

    pub fn with_client(http_client: Box<dyn HttpClient>) -> Self {
        Self {
            http_client,
            progress_reporter: None,
        }
    }

    pub fn with_progress_reporter(mut self, reporter: Box<dyn ProgressReporter>) -> Self {
        self.progress_reporter = Some(reporter);
        self
    }

    /// Streams `uri` into `target`.
    ///
    /// An existing target is never overwritten. `expected_size` is the size
    /// the catalog reported; without it the Content-Length header is used
    /// for progress. On failure whatever was written so far stays on disk.
    pub fn download(
        &mut self,
        uri: &str,
        target: &Path,
        expected_size: Option<u64>,
    ) -> Result<DownloadOutcome> {
        let filename = target
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let failed = |reason: String| DiscoError::DownloadFailed {
            filename: filename.clone(),
            uri: uri.to_string(),
            reason,
        };

        if target.is_dir() {
            return Err(failed(format!("{} is a directory", target.display())));
        }
        if target.exists() {
            info!("{} already exists, skipping download", target.display());
            return Ok(DownloadOutcome::AlreadyExists {
                path: target.to_path_buf(),
            });
        }

        debug!("Downloading {uri} to {}", target.display());
        let response = self.http_client.get(uri).map_err(|e| failed(e.to_string()))?;

        let status = response.status();
        if !(200..300).contains(&status) {
            return Err(failed(format!("server responded with status {status}")));
        }

        let file = match OpenOptions::new().write(true).create_new(true).open(target) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Ok(DownloadOutcome::AlreadyExists {
                    path: target.to_path_buf(),
                });
            }
            Err(e) => return Err(failed(e.to_string())),
        };

        let total_size = expected_size
            .filter(|size| *size > 0)
            .or_else(|| content_length(response.as_ref()))
            .unwrap_or(0);

        if let Some(reporter) = &mut self.progress_reporter {
            reporter.on_start(total_size);
        }

        match self.download_to_file(response, file) {
            Ok(bytes) => {
                if let Some(reporter) = &mut self.progress_reporter {
                    reporter.on_complete();
                }
                debug!("Wrote {bytes} bytes to {}", target.display());
                Ok(DownloadOutcome::Downloaded {
                    path: target.to_path_buf(),
                    bytes,
                })
            }
            Err(e) => {
                if let Some(reporter) = &mut self.progress_reporter {
                    reporter.on_error(&e.to_string());
                }
                Err(failed(e.to_string()))
            }
        }
    }

    fn download_to_file(&mut self, mut response: Box<dyn HttpResponse>, file: File) -> io::Result<u64> {
        let mut writer = BufWriter::new(file);
        let mut downloaded = 0u64;
        let mut buffer = vec![0; DOWNLOAD_CHUNK_SIZE];

        loop {
            match response.read(&mut buffer) {
                Ok(0) => break, // EOF
                Ok(n) => {
                    writer.write_all(&buffer[..n])?;
                    downloaded += n as u64;

                    if let Some(reporter) = &mut self.progress_reporter {
                        reporter.on_progress(downloaded);
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        writer.flush()?;
        writer.get_ref().sync_all()?;
        Ok(downloaded)
    }
}

fn content_length(response: &dyn HttpResponse) -> Option<u64> {
    response
        .header("Content-Length")?
        .parse::<u64>()
        .ok()
        .filter(|length| *length > 0)
}

/// Returns `filename` when it is a single normal path component.
///
/// Catalog data decides the name, so anything absolute, empty or containing
/// a separator or `..` is refused.
pub fn plain_file_name(filename: &str) -> Option<&str> {
    let name = Path::new(filename).file_name()?.to_str()?;
    (name == filename).then_some(name)
}

/// Joins the output directory and the package file name, or `None` when
/// the name would resolve outside `output_dir`.
pub fn target_path(output_dir: &Path, filename: &str) -> Option<PathBuf> {
    plain_file_name(filename).map(|name| output_dir.join(name))
}

/// Ensures the output directory exists before a download starts.
pub fn prepare_output_dir(output_dir: &Path) -> Result<()> {
    if !output_dir.as_os_str().is_empty() {
        fs::create_dir_all(output_dir)?;
    }
    Ok(())
}
