//! Post-download transcoding driven by progress events.
//!
//! The [`PostProcessor`] is the production [`ProgressConsumer`]: invoked
//! once per finished item, it optionally converts the produced file to MP3
//! with an external ffmpeg process and deletes the original on success.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{Error, Result};
use crate::fetch::{FetchReport, ProgressConsumer, ProgressEvent};
use crate::fs::naming::with_audio_extension;

/// Audio sample rate passed to ffmpeg (44.1 kHz).
pub const SAMPLE_RATE: &str = "44100";

/// Channel count passed to ffmpeg (stereo).
pub const CHANNELS: &str = "2";

/// Audio bitrate passed to ffmpeg.
pub const BITRATE: &str = "320k";

/// Output container format passed to ffmpeg.
pub const AUDIO_FORMAT: &str = "mp3";

/// Build the fixed ffmpeg argument list for one conversion.
///
/// Deterministic: derived only from the input and output paths. Strips the
/// video stream, resamples to 44.1 kHz, forces stereo and 320 kbps.
pub fn transcode_args(input: &Path, output: &Path) -> Vec<OsString> {
    vec![
        OsString::from("-y"),
        OsString::from("-i"),
        input.as_os_str().to_os_string(),
        OsString::from("-vn"),
        OsString::from("-ar"),
        OsString::from(SAMPLE_RATE),
        OsString::from("-ac"),
        OsString::from(CHANNELS),
        OsString::from("-b:a"),
        OsString::from(BITRATE),
        OsString::from("-f"),
        OsString::from(AUDIO_FORMAT),
        output.as_os_str().to_os_string(),
    ]
}

/// Progress-event consumer that transcodes finished downloads.
///
/// Per item: pending -> finished -> [transcoding -> done | transcoding
/// failed, original retained]. Failures never propagate past this boundary
/// so the batch continues with the remaining items.
pub struct PostProcessor {
    program: PathBuf,
    audio_only: bool,
    show_downloads: bool,
    transcoded: u64,
    failed: u64,
}

impl PostProcessor {
    /// Create a post-processor around an ffmpeg binary.
    ///
    /// `audio_only` applies to the whole batch: when false the processor
    /// only logs finished items and never invokes the transcoder.
    pub fn new(program: PathBuf, audio_only: bool) -> Self {
        Self {
            program,
            audio_only,
            show_downloads: true,
            transcoded: 0,
            failed: 0,
        }
    }

    /// Toggle per-item "Downloaded file" output.
    pub fn with_show_downloads(mut self, show: bool) -> Self {
        self.show_downloads = show;
        self
    }

    /// Copy this processor's conversion counters into a report.
    pub fn apply_stats(&self, report: &mut FetchReport) {
        report.transcoded = self.transcoded;
        report.transcode_failed = self.failed;
    }

    async fn transcode(&self, input: &Path) -> Result<PathBuf> {
        let output = with_audio_extension(input);

        let status = Command::new(&self.program)
            .args(transcode_args(input, &output))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::FFmpegNotFound
                } else {
                    Error::FFmpeg(format!("Failed to run ffmpeg: {}", e))
                }
            })?;

        if !status.success() {
            return Err(Error::FFmpeg(format!(
                "ffmpeg exited with status: {}",
                status
            )));
        }

        Ok(output)
    }
}

#[async_trait]
impl ProgressConsumer for PostProcessor {
    async fn on_event(&mut self, event: ProgressEvent) {
        if !event.is_finished() {
            return;
        }

        if self.show_downloads {
            tracing::info!("Downloaded file: {}", event.filename.display());
        }

        if !self.audio_only {
            return;
        }

        tracing::debug!("Converting {} to MP3...", event.filename.display());
        match self.transcode(&event.filename).await {
            Ok(output) => {
                self.transcoded += 1;
                tracing::info!(
                    "Converted {} to MP3: {}",
                    event.filename.display(),
                    output.display()
                );

                match tokio::fs::remove_file(&event.filename).await {
                    Ok(()) => {
                        tracing::debug!("Deleted original file: {}", event.filename.display());
                    }
                    Err(e) => {
                        tracing::warn!(
                            "Could not delete original file {}: {}",
                            event.filename.display(),
                            e
                        );
                    }
                }
            }
            Err(e) => {
                self.failed += 1;
                tracing::error!("Error converting {} to MP3: {}", event.filename.display(), e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::ProgressStatus;

    fn finished_event(path: &Path) -> ProgressEvent {
        ProgressEvent {
            status: ProgressStatus::Finished,
            filename: path.to_path_buf(),
        }
    }

    #[test]
    fn test_transcode_args_deterministic() {
        let args = transcode_args(
            Path::new("./out/1 - Title.webm"),
            Path::new("./out/1 - Title.mp3"),
        );
        let expected: Vec<OsString> = [
            "-y",
            "-i",
            "./out/1 - Title.webm",
            "-vn",
            "-ar",
            "44100",
            "-ac",
            "2",
            "-b:a",
            "320k",
            "-f",
            "mp3",
            "./out/1 - Title.mp3",
        ]
        .iter()
        .map(OsString::from)
        .collect();
        assert_eq!(args, expected);
    }

    #[tokio::test]
    async fn test_intermediate_event_is_noop() {
        // A missing transcoder would fail loudly if it were ever invoked
        let mut post = PostProcessor::new(PathBuf::from("/nonexistent/ffmpeg"), true);
        post.on_event(ProgressEvent {
            status: ProgressStatus::Downloading,
            filename: PathBuf::from("/tmp/partial.webm"),
        })
        .await;

        let mut report = FetchReport::default();
        post.apply_stats(&mut report);
        assert_eq!((report.transcoded, report.transcode_failed), (0, 0));
    }

    #[tokio::test]
    async fn test_video_mode_never_invokes_transcoder() {
        let dir = tempfile::tempdir().unwrap();
        let original = dir.path().join("clip.webm");
        std::fs::write(&original, b"video").unwrap();

        let mut post = PostProcessor::new(PathBuf::from("/nonexistent/ffmpeg"), false);
        post.on_event(finished_event(&original)).await;

        let mut report = FetchReport::default();
        post.apply_stats(&mut report);
        assert_eq!((report.transcoded, report.transcode_failed), (0, 0));
        assert!(original.exists());
        assert!(!with_audio_extension(&original).exists());
    }

    #[cfg(unix)]
    mod unix {
        use super::*;
        use std::io::Write;
        use std::os::unix::fs::PermissionsExt;

        /// Fake ffmpeg: creates its last argument (the output file) and
        /// exits 0, or exits 1 touching nothing.
        fn fake_transcoder(dir: &Path, succeed: bool) -> PathBuf {
            let path = dir.join("fake-ffmpeg");
            let mut file = std::fs::File::create(&path).unwrap();
            writeln!(file, "#!/bin/sh").unwrap();
            if succeed {
                writeln!(file, "for last; do :; done").unwrap();
                writeln!(file, "touch \"$last\"").unwrap();
                writeln!(file, "exit 0").unwrap();
            } else {
                writeln!(file, "exit 1").unwrap();
            }
            drop(file);
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        #[tokio::test]
        async fn test_successful_transcode_replaces_original() {
            let dir = tempfile::tempdir().unwrap();
            let original = dir.path().join("1 - Title.webm");
            std::fs::write(&original, b"audio").unwrap();

            let mut post = PostProcessor::new(fake_transcoder(dir.path(), true), true);
            post.on_event(finished_event(&original)).await;

            assert!(!original.exists());
            assert!(dir.path().join("1 - Title.mp3").exists());

            let mut report = FetchReport::default();
            post.apply_stats(&mut report);
            assert_eq!((report.transcoded, report.transcode_failed), (1, 0));
        }

        #[tokio::test]
        async fn test_failed_transcode_keeps_original() {
            let dir = tempfile::tempdir().unwrap();
            let original = dir.path().join("1 - Title.webm");
            std::fs::write(&original, b"audio").unwrap();

            let mut post = PostProcessor::new(fake_transcoder(dir.path(), false), true);
            post.on_event(finished_event(&original)).await;

            assert!(original.exists());
            assert!(!dir.path().join("1 - Title.mp3").exists());

            let mut report = FetchReport::default();
            post.apply_stats(&mut report);
            assert_eq!((report.transcoded, report.transcode_failed), (0, 1));
        }

        #[tokio::test]
        async fn test_failure_does_not_stop_later_items() {
            let dir = tempfile::tempdir().unwrap();
            let broken = dir.path().join("1 - Broken.webm");
            std::fs::write(&broken, b"audio").unwrap();

            // First item fails against a failing transcoder
            let mut post = PostProcessor::new(fake_transcoder(dir.path(), false), true);
            post.on_event(finished_event(&broken)).await;

            // Replace the transcoder to let the second item succeed
            let good = dir.path().join("2 - Good.webm");
            std::fs::write(&good, b"audio").unwrap();
            post.program = fake_transcoder(dir.path(), true);
            post.on_event(finished_event(&good)).await;

            let mut report = FetchReport::default();
            post.apply_stats(&mut report);
            assert_eq!((report.transcoded, report.transcode_failed), (1, 1));
            assert!(broken.exists());
            assert!(!good.exists());
        }
    }
}
