//! The Fetcher: one external yt-dlp invocation per request.

use std::process::Stdio;

use std::path::PathBuf;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;

use crate::error::{Error, Result};
use crate::fetch::events::{parse_progress_line, ProgressConsumer};
use crate::fetch::options::{DownloadOptions, DownloadRequest};
use crate::fetch::report::FetchReport;

/// Drives the external download tool and dispatches its progress events.
///
/// Single-threaded and blocking throughout: one yt-dlp process per fetch,
/// events handled serially, each consumer call completing before the next
/// stdout line is read.
pub struct Fetcher<C: ProgressConsumer> {
    program: PathBuf,
    consumer: C,
}

impl<C: ProgressConsumer> Fetcher<C> {
    /// Create a fetcher around a yt-dlp binary and an event consumer.
    pub fn new(program: PathBuf, consumer: C) -> Self {
        Self { program, consumer }
    }

    /// Borrow the injected consumer.
    pub fn consumer(&self) -> &C {
        &self.consumer
    }

    /// Download one item or collection.
    ///
    /// Best effort: a whole-batch failure from the external tool is caught
    /// here, logged, and reflected in the report rather than returned as an
    /// error. Per-item failures are already absorbed by the ignore-errors
    /// flag in [`DownloadOptions`].
    pub async fn fetch(&mut self, request: &DownloadRequest) -> FetchReport {
        let mut report = FetchReport::default();

        if let Err(e) = self.run(request, &mut report).await {
            tracing::error!("Error downloading {}: {}", request.source, e);
            report.batch_failed = true;
        }

        report
    }

    async fn run(&mut self, request: &DownloadRequest, report: &mut FetchReport) -> Result<()> {
        tracing::debug!("Starting download for: {}", request.source);

        // Idempotent destination creation
        tokio::fs::create_dir_all(&request.destination).await?;

        let options = DownloadOptions::for_request(request);
        tracing::debug!("yt-dlp format selector: {}", options.format());

        let mut child = Command::new(&self.program)
            .args(options.to_args())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::YtDlpNotFound
                } else {
                    Error::Download(format!("Failed to run yt-dlp: {}", e))
                }
            })?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| Error::Download("Failed to capture yt-dlp output".into()))?;

        let mut lines = BufReader::new(stdout).lines();
        while let Some(line) = lines.next_line().await? {
            if let Some(event) = parse_progress_line(&line) {
                if event.is_finished() {
                    report.completed += 1;
                }
                self.consumer.on_event(event).await;
            }
        }

        let status = child.wait().await?;
        if !status.success() {
            return Err(Error::Download(format!(
                "yt-dlp exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::events::ProgressEvent;
    use async_trait::async_trait;

    /// Consumer that records every event it receives.
    #[derive(Default)]
    struct RecordingConsumer {
        events: Vec<ProgressEvent>,
    }

    #[async_trait]
    impl ProgressConsumer for RecordingConsumer {
        async fn on_event(&mut self, event: ProgressEvent) {
            self.events.push(event);
        }
    }

    fn make_request(dir: &std::path::Path) -> DownloadRequest {
        DownloadRequest {
            source: "https://www.youtube.com/watch?v=abc".to_string(),
            destination: dir.to_path_buf(),
            audio_only: false,
            is_collection: false,
        }
    }

    #[tokio::test]
    async fn test_missing_tool_is_absorbed() {
        let dir = tempfile::tempdir().unwrap();
        let mut fetcher = Fetcher::new(
            PathBuf::from("/nonexistent/yt-dlp"),
            RecordingConsumer::default(),
        );

        let report = fetcher.fetch(&make_request(dir.path())).await;

        assert!(report.batch_failed);
        assert_eq!(report.completed, 0);
        assert!(fetcher.consumer().events.is_empty());
    }

    #[tokio::test]
    async fn test_destination_created_before_invocation() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("nested").join("out");
        let mut fetcher = Fetcher::new(
            PathBuf::from("/nonexistent/yt-dlp"),
            RecordingConsumer::default(),
        );

        let request = DownloadRequest {
            destination: destination.clone(),
            ..make_request(dir.path())
        };
        fetcher.fetch(&request).await;

        assert!(destination.is_dir());
    }

    #[cfg(unix)]
    mod unix {
        use super::*;
        use std::io::Write;
        use std::os::unix::fs::PermissionsExt;

        /// Write a fake yt-dlp that prints the given lines on stdout and
        /// exits with the given code.
        fn fake_downloader(dir: &std::path::Path, stdout: &str, exit: i32) -> PathBuf {
            let path = dir.join("fake-yt-dlp");
            let mut file = std::fs::File::create(&path).unwrap();
            writeln!(file, "#!/bin/sh").unwrap();
            for line in stdout.lines() {
                writeln!(file, "echo '{}'", line).unwrap();
            }
            writeln!(file, "exit {}", exit).unwrap();
            drop(file);
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        #[tokio::test]
        async fn test_events_dispatched_per_item() {
            let dir = tempfile::tempdir().unwrap();
            let program = fake_downloader(
                dir.path(),
                "[youtube] abc: Downloading webpage\n\
                 YTDL|downloading|/tmp/1 - One.webm\n\
                 YTDL|finished|/tmp/1 - One.webm\n\
                 YTDL|finished|/tmp/2 - Two.webm\n",
                0,
            );

            let mut fetcher = Fetcher::new(program, RecordingConsumer::default());
            let report = fetcher.fetch(&make_request(dir.path())).await;

            assert!(!report.batch_failed);
            assert_eq!(report.completed, 2);
            // Intermediate event dispatched too; informational line ignored
            assert_eq!(fetcher.consumer().events.len(), 3);
        }

        #[tokio::test]
        async fn test_nonzero_exit_keeps_completed_items() {
            // One item in the collection fails after another finished:
            // yt-dlp exits non-zero but the finished item stays counted.
            let dir = tempfile::tempdir().unwrap();
            let program = fake_downloader(
                dir.path(),
                "YTDL|finished|/tmp/1 - One.webm\n\
                 ERROR: unavailable video\n",
                1,
            );

            let mut fetcher = Fetcher::new(program, RecordingConsumer::default());
            let report = fetcher.fetch(&make_request(dir.path())).await;

            assert!(report.batch_failed);
            assert_eq!(report.completed, 1);
            assert_eq!(fetcher.consumer().events.len(), 1);
        }
    }
}
