//! YouTube Downloader - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use youtube_downloader::{
    cli::Args,
    config::{validate_source, validate_spotify_credentials, Config},
    deps,
    error::{exit_codes, Error, Result},
    fetch::{DownloadRequest, FetchReport, Fetcher},
    output::{
        create_spinner, print_banner, print_config_summary, print_error, print_info, print_report,
        print_success, print_warning,
    },
    spotify::{download_spotify_playlist, SpotifyApi},
    transcode::PostProcessor,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::MissingConfig(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Spotify(_) | Error::Authentication(_) | Error::PlaylistNotFound(_) => {
                    ExitCode::from(exit_codes::SPOTIFY_ERROR as u8)
                }
                Error::Download(_) | Error::YtDlpNotFound => {
                    ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8)
                }
                Error::Install(_) | Error::FFmpeg(_) | Error::FFmpegNotFound => {
                    ExitCode::from(exit_codes::DEPENDENCY_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Print banner
    print_banner();

    // Load configuration
    let mut config = if args.config.exists() {
        Config::load(&args.config)?
    } else {
        print_info("No configuration file found, using defaults with CLI arguments");
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Install mode: handle dependencies and exit
    if args.install_deps {
        print_info("Checking dependencies...");
        deps::install_missing(&config).await?;
        print_success("All dependencies are installed.");
        return Ok(());
    }

    // Preflight: warn about missing tools, the batch itself stays best-effort
    for tool in deps::missing_tools(&config).await {
        print_warning(&format!(
            "{} was not found; run with --install-deps to install it",
            tool.name
        ));
    }

    let report = if let Some(playlist) = &args.spotify_playlist {
        run_spotify(&config, playlist).await?
    } else if let Some(url) = &args.url {
        run_download(&config, url).await?
    } else {
        return Err(Error::Config(
            "Provide --url or --spotify-playlist (see --help)".into(),
        ));
    };

    print_report(&report);

    if report.batch_failed {
        return Err(Error::Download(
            "at least one download batch failed; see the log above".into(),
        ));
    }

    Ok(())
}

/// Download a YouTube URL or search query.
async fn run_download(config: &Config, url: &str) -> Result<FetchReport> {
    validate_source(url)?;

    let kind = config.options.kind;
    let audio_only = config.options.audio_only;
    let destination = config.download_directory();

    print_config_summary(
        url,
        &kind.to_string(),
        &destination.display().to_string(),
        audio_only,
    );

    let post = PostProcessor::new(config.tools.ffmpeg_program(), audio_only)
        .with_show_downloads(config.options.show_downloads);
    let mut fetcher = Fetcher::new(config.tools.yt_dlp_program(), post);

    let request = DownloadRequest {
        source: url.to_string(),
        destination,
        audio_only,
        is_collection: kind.is_collection(),
    };

    tracing::debug!("Downloading {} from URL: {}", kind, url);
    let mut report = fetcher.fetch(&request).await;
    fetcher.consumer().apply_stats(&mut report);

    Ok(report)
}

/// Resolve a Spotify playlist and download each track from YouTube.
async fn run_spotify(config: &Config, playlist: &str) -> Result<FetchReport> {
    let (client_id, client_secret) = validate_spotify_credentials(&config.spotify)?;
    let destination = config.download_directory();

    print_config_summary(
        playlist,
        "spotify playlist",
        &destination.display().to_string(),
        true,
    );

    let spinner = create_spinner("Connecting to Spotify...");
    let api = SpotifyApi::new(&client_id, &client_secret).await?;
    spinner.finish_and_clear();

    // Spotify tracks are always fetched audio-only
    let post = PostProcessor::new(config.tools.ffmpeg_program(), true)
        .with_show_downloads(config.options.show_downloads);
    let mut fetcher = Fetcher::new(config.tools.yt_dlp_program(), post);

    let mut report = download_spotify_playlist(&api, &mut fetcher, playlist, &destination).await?;
    fetcher.consumer().apply_stats(&mut report);

    Ok(report)
}
