use crate::config::{Config, LoggerKind};
use clap::{Parser, Subcommand};
use device_camera::impl_fake::DeviceCameraFake;
use device_camera::interface::DeviceCamera;
use device_display::impl_console::DeviceDisplayConsole;
use image_classifier::fallback::{FallbackPolicy, FixedFallback, RandomFallback};
use image_classifier::gateway::ClassificationGateway;
use image_classifier::impl_fake::ImageClassifierFake;
use image_classifier::impl_http::ImageClassifierHttp;
use image_classifier::interface::ImageClassifier;
use image_input::impl_file::read_image_file;
use library::logger::impl_console::LoggerConsole;
use library::logger::impl_tracing::LoggerTracing;
use library::logger::interface::Logger;
use recycling_plant::main::RecyclingPlant;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod config;
mod device_camera;
mod device_display;
mod image_classifier;
mod image_input;
mod library;
mod recycling_plant;
mod relay;
mod waste_category;

#[derive(Debug, Parser)]
#[command(name = "eco-sort", version, about = "Sorts photographed waste into bins on a simulated conveyor belt")]
struct Cli {
    /// Configuration file (defaults to ./eco_sort.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Put image files on the belt and wait until every one is in a bin
    Sort {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Use the built-in fake classifier instead of the classification service
        #[arg(long)]
        offline: bool,
    },
    /// Capture frames from the camera and put each on the belt
    Camera {
        #[arg(long, default_value_t = 3)]
        frames: u32,
        #[arg(long, default_value_t = 1500)]
        interval_ms: u64,
        #[arg(long)]
        offline: bool,
    },
    /// Run the same-origin relay in front of the classification backend
    Relay,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let logger = build_logger(&config);

    match cli.command {
        Command::Sort { paths, offline } => {
            let plant = build_plant(&config, logger.clone(), offline);
            sort_files(plant, logger, paths).await
        }
        Command::Camera {
            frames,
            interval_ms,
            offline,
        } => {
            let plant = build_plant(&config, logger.clone(), offline);
            sort_camera_frames(plant, logger, frames, Duration::from_millis(interval_ms)).await
        }
        Command::Relay => relay::serve(&config, logger).await,
    }
}

fn build_logger(config: &Config) -> Arc<dyn Logger + Send + Sync> {
    match config.logger {
        LoggerKind::Tracing => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                )
                .init();
            Arc::new(LoggerTracing::new())
        }
        LoggerKind::Console => Arc::new(LoggerConsole::new(config.logger_timezone())),
    }
}

fn build_plant(config: &Config, logger: Arc<dyn Logger + Send + Sync>, offline: bool) -> RecyclingPlant {
    let image_classifier: Arc<dyn ImageClassifier + Send + Sync> = if offline {
        Arc::new(ImageClassifierFake::new(logger.clone()))
    } else {
        Arc::new(ImageClassifierHttp::new(
            reqwest::Client::new(),
            config.classify_url.clone(),
            logger.clone(),
        ))
    };

    let fallback: Arc<dyn FallbackPolicy + Send + Sync> = match config.fallback_category {
        Some(category) => Arc::new(FixedFallback(category)),
        None => Arc::new(RandomFallback),
    };

    let gateway = Arc::new(ClassificationGateway::new(
        image_classifier,
        fallback,
        logger.clone(),
    ));
    let device_display = Arc::new(Mutex::new(DeviceDisplayConsole::new(config.display_width)));

    RecyclingPlant::new(config.clone(), logger, gateway, device_display)
}

fn start(plant: &RecyclingPlant) {
    let plant = plant.clone();
    tokio::spawn(async move {
        if let Err(e) = plant.run().await {
            let _ = plant.logger.error(&format!("Plant stopped: {}", e));
        }
    });
}

async fn sort_files(
    plant: RecyclingPlant,
    logger: Arc<dyn Logger + Send + Sync>,
    paths: Vec<PathBuf>,
) -> anyhow::Result<()> {
    start(&plant);

    let mut submitted = 0;
    for path in paths {
        match read_image_file(&path) {
            Ok(Some(image)) => {
                let id = plant.submit(image);
                let _ = logger.info(&format!("{} -> item {}", path.display(), id));
                submitted += 1;
            }
            Ok(None) => {
                let _ = logger.info(&format!("Skipping {}: not an image", path.display()));
            }
            Err(e) => {
                let _ = logger.warn(&format!("Skipping {}: {}", path.display(), e));
            }
        }
    }

    finish(&plant, logger, submitted).await
}

async fn sort_camera_frames(
    plant: RecyclingPlant,
    logger: Arc<dyn Logger + Send + Sync>,
    frames: u32,
    interval: Duration,
) -> anyhow::Result<()> {
    start(&plant);

    let camera = DeviceCameraFake::new(logger.clone());
    camera
        .start()
        .map_err(|e| anyhow::anyhow!("camera failed to start: {}", e))?;

    let mut submitted = 0;
    for index in 0..frames {
        match camera.capture_frame() {
            Ok(image) => {
                plant.submit(image);
                submitted += 1;
            }
            Err(e) => {
                let _ = logger.warn(&format!("Frame {} not captured: {}", index, e));
            }
        }
        if index + 1 < frames {
            tokio::time::sleep(interval).await;
        }
    }

    if let Err(e) = camera.stop() {
        let _ = logger.warn(&format!("Camera did not stop cleanly: {}", e));
    }

    finish(&plant, logger, submitted).await
}

async fn finish(
    plant: &RecyclingPlant,
    logger: Arc<dyn Logger + Send + Sync>,
    submitted: u64,
) -> anyhow::Result<()> {
    if submitted == 0 {
        let _ = logger.info("Nothing to sort");
        return Ok(());
    }

    let model = plant.wait_for_sorted(submitted).await?;
    println!("{}", model.counters);
    Ok(())
}
