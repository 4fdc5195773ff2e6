// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Global configuration for the application, merged from defaults and CLI flags.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::ensure;

use crate::Args;
use crate::constant::{
    APP_DIR, CAPTURE_DELAY_MS, DISPLAY_HEIGHT, DISPLAY_WIDTH, EXPORT_DIR, ICON_FILE, ZOOM_RADIUS,
    ZOOM_SCALE,
};

/// Global configuration for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Width of the downscaled display frame.
    pub display_width: u32,
    /// Height of the downscaled display frame.
    pub display_height: u32,
    /// Directory exported regions are written to (created on demand).
    pub export_dir: PathBuf,
    /// Magnifier radius around the dragged point, in source pixels.
    pub zoom_radius: u32,
    /// Magnifier upscale factor.
    pub zoom_scale: u32,
    /// Wait before a live capture.
    pub capture_delay: Duration,
    /// Window icon; a missing or unreadable file only logs a warning.
    pub icon_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            display_width: DISPLAY_WIDTH,
            display_height: DISPLAY_HEIGHT,
            export_dir: default_export_dir(),
            zoom_radius: ZOOM_RADIUS,
            zoom_scale: ZOOM_SCALE,
            capture_delay: Duration::from_millis(CAPTURE_DELAY_MS),
            icon_path: default_icon_path(),
        }
    }
}

impl AppConfig {
    /// Apply command line overrides on top of the defaults and validate the result.
    pub fn from_args(args: &Args) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(width) = args.display_width {
            config.display_width = width;
        }
        if let Some(height) = args.display_height {
            config.display_height = height;
        }
        if let Some(dir) = &args.export_dir {
            config.export_dir.clone_from(dir);
        }
        if let Some(radius) = args.zoom_radius {
            config.zoom_radius = radius;
        }
        if let Some(scale) = args.zoom_scale {
            config.zoom_scale = scale;
        }
        if let Some(delay) = args.delay_ms {
            config.capture_delay = Duration::from_millis(delay);
        }
        if let Some(icon) = &args.icon {
            config.icon_path = Some(icon.clone());
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.display_width > 0 && self.display_height > 0,
            "display size must be non-zero, got {}x{}",
            self.display_width,
            self.display_height
        );
        ensure!(self.zoom_radius >= 1, "zoom radius must be at least 1");
        ensure!(self.zoom_scale >= 1, "zoom scale must be at least 1");
        Ok(())
    }
}

fn default_export_dir() -> PathBuf {
    dirs::picture_dir()
        .or_else(dirs::home_dir)
        .map(|base| base.join(APP_DIR).join(EXPORT_DIR))
        .unwrap_or_else(|| PathBuf::from(EXPORT_DIR))
}

fn default_icon_path() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .map(|exe| exe.with_file_name(ICON_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_match_constants() {
        let config = AppConfig::default();
        assert_eq!((config.display_width, config.display_height), (1200, 675));
        assert_eq!((config.zoom_radius, config.zoom_scale), (30, 3));
        assert!(config.export_dir.ends_with(EXPORT_DIR));
        assert!(config.icon_path.is_some_and(|p| p.ends_with(ICON_FILE)));
    }

    #[test]
    fn args_override_defaults() {
        let args = Args::parse_from([
            "regionpick",
            "--image",
            "shot.png",
            "--display-width",
            "640",
            "--zoom-scale",
            "5",
            "--export-dir",
            "/tmp/regions",
            "--icon",
            "/tmp/icon.png",
        ]);
        let config = AppConfig::from_args(&args).expect("valid config");
        assert_eq!(config.display_width, 640);
        assert_eq!(config.display_height, DISPLAY_HEIGHT);
        assert_eq!(config.zoom_scale, 5);
        assert_eq!(config.export_dir, PathBuf::from("/tmp/regions"));
        assert_eq!(config.icon_path, Some(PathBuf::from("/tmp/icon.png")));
    }

    #[test]
    fn zero_sizes_are_rejected() {
        let args = Args::parse_from(["regionpick", "--display-height", "0"]);
        assert!(AppConfig::from_args(&args).is_err());

        let args = Args::parse_from(["regionpick", "--zoom-radius", "0"]);
        assert!(AppConfig::from_args(&args).is_err());
    }
}
