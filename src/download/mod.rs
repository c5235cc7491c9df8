/// Download of catalog packages to local disk
///
/// This module provides:
/// - Streaming in 8 KiB chunks with progress reporting
/// - Never overwriting an existing file
/// - Configurable read timeout
mod client;
mod downloader;
mod progress;

pub use client::{CONNECT_TIMEOUT, DEFAULT_TIMEOUT, HttpClient, HttpResponse};
pub use downloader::{
    DownloadOutcome, PackageDownloader, ProgressReporter, plain_file_name, prepare_output_dir,
    target_path,
};
pub use progress::DownloadProgressAdapter;

use crate::error::{DiscoError, Result};
use crate::search::ResolvedDownload;
use std::path::Path;
use std::time::Duration;

/// Downloads a resolved package into `output_dir`.
///
/// # Arguments
/// * `resolved` - Package with its direct download link and file name
/// * `output_dir` - Directory the archive is written to
/// * `timeout` - Read timeout for the transfer
/// * `no_progress` - Disable progress reporting
pub fn download_package(
    resolved: &ResolvedDownload,
    output_dir: &Path,
    timeout: Duration,
    no_progress: bool,
) -> Result<DownloadOutcome> {
    let target = target_path(output_dir, &resolved.filename)
        .ok_or_else(|| DiscoError::MissingDownloadInfo(resolved.pkg.id.clone()))?;
    prepare_output_dir(output_dir)?;

    let mut downloader = PackageDownloader::new();
    downloader.http_client.set_timeout(timeout);
    let mut downloader = downloader.with_progress_reporter(Box::new(
        DownloadProgressAdapter::for_package_download(no_progress, &resolved.filename),
    ));

    downloader.download(&resolved.uri, &target, resolved.pkg.expected_size())
}
