// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Entry point: parse arguments, acquire the source image, run the picker.

mod app;
mod config;
mod constant;
mod domain;
mod i18n;
mod ui;

use std::path::PathBuf;

use clap::Parser;

use crate::app::AppModel;
use crate::config::AppConfig;
use crate::domain::capture::{self, CaptureSource};

/// Mark two points on a captured window and export the region between them.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Args {
    /// Use an image file instead of capturing the screen.
    #[arg(long, value_name = "PATH", conflicts_with_all = ["window", "monitor"])]
    pub image: Option<PathBuf>,

    /// Capture the first visible window whose title contains TITLE.
    #[arg(long, value_name = "TITLE", conflicts_with = "monitor")]
    pub window: Option<String>,

    /// Capture this monitor instead of the primary one.
    #[arg(long, value_name = "INDEX")]
    pub monitor: Option<usize>,

    /// Wait before capturing, in milliseconds.
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Width of the downscaled display.
    #[arg(long, value_name = "PX")]
    pub display_width: Option<u32>,

    /// Height of the downscaled display.
    #[arg(long, value_name = "PX")]
    pub display_height: Option<u32>,

    /// Directory exported regions are written to.
    #[arg(long, value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Magnifier radius in source pixels.
    #[arg(long, value_name = "PX")]
    pub zoom_radius: Option<u32>,

    /// Magnifier upscale factor.
    #[arg(long, value_name = "FACTOR")]
    pub zoom_scale: Option<u32>,

    /// Window icon (defaults to icon.png next to the executable).
    #[arg(long, value_name = "PATH")]
    pub icon: Option<PathBuf>,
}

impl Args {
    /// Where the source image should come from.
    pub fn capture_source(&self) -> CaptureSource {
        if let Some(path) = &self.image {
            CaptureSource::File(path.clone())
        } else if let Some(title) = &self.window {
            CaptureSource::Window(title.clone())
        } else {
            CaptureSource::Monitor(self.monitor)
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();
    i18n::init(&requested_languages);

    let args = Args::parse();
    let config = AppConfig::from_args(&args)?;

    let source = capture::acquire(&args.capture_source(), config.capture_delay)?;
    let model = AppModel::new(source, &config);

    ui::app::run(model, &config)
}
