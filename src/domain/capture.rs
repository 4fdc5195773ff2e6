// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/capture.rs
//
// Source image acquisition: image files, monitors and application windows.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use chrono::{DateTime, Local, NaiveDate};
use image::{DynamicImage, GenericImageView, ImageReader};

/// Where the source image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureSource {
    /// Decode an image file from disk.
    File(PathBuf),
    /// Capture a monitor; `None` picks the primary one.
    Monitor(Option<usize>),
    /// Capture the first visible window whose title contains this text.
    Window(String),
}

/// Full-resolution still image the whole session works on. Never mutated.
pub struct SourceImage {
    image: DynamicImage,
    captured_on: NaiveDate,
    origin: String,
}

impl SourceImage {
    pub fn new(image: DynamicImage, captured_on: NaiveDate, origin: impl Into<String>) -> Self {
        Self {
            image,
            captured_on,
            origin: origin.into(),
        }
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// Native pixel dimensions (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Local date of the capture, used in export file names.
    pub fn captured_on(&self) -> NaiveDate {
        self.captured_on
    }

    /// Human readable description of where the image came from.
    pub fn origin(&self) -> &str {
        &self.origin
    }
}

impl std::fmt::Debug for SourceImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (width, height) = self.dimensions();
        f.debug_struct("SourceImage")
            .field("width", &width)
            .field("height", &height)
            .field("captured_on", &self.captured_on)
            .field("origin", &self.origin)
            .finish()
    }
}

/// Acquire the source image. Live captures wait `delay` first so the
/// target window can come to the front.
pub fn acquire(source: &CaptureSource, delay: Duration) -> anyhow::Result<SourceImage> {
    let image = match source {
        CaptureSource::File(path) => open_file(path)?,
        CaptureSource::Monitor(index) => {
            std::thread::sleep(delay);
            live::capture_monitor(*index)?
        }
        CaptureSource::Window(title) => {
            std::thread::sleep(delay);
            live::capture_window(title)?
        }
    };

    let (width, height) = image.dimensions();
    log::info!("Captured {} ({width}x{height})", image.origin());
    Ok(image)
}

fn open_file(path: &Path) -> anyhow::Result<SourceImage> {
    let image = ImageReader::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?
        .decode()
        .with_context(|| format!("failed to decode {}", path.display()))?;

    let captured_on = std::fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map(|modified| DateTime::<Local>::from(modified).date_naive())
        .unwrap_or_else(|e| {
            log::warn!("No modification time for {}: {e}", path.display());
            Local::now().date_naive()
        });

    Ok(SourceImage::new(image, captured_on, path.display().to_string()))
}

#[cfg(feature = "capture")]
mod live {
    use anyhow::{Context, anyhow};
    use chrono::Local;
    use image::DynamicImage;
    use xcap::{Monitor, Window};

    use super::SourceImage;

    pub fn capture_monitor(index: Option<usize>) -> anyhow::Result<SourceImage> {
        let monitors = Monitor::all().context("failed to enumerate monitors")?;

        let (position, monitor) = match index {
            Some(i) => monitors
                .into_iter()
                .enumerate()
                .nth(i)
                .ok_or_else(|| anyhow!("no monitor with index {i}"))?,
            None => {
                let primary = monitors
                    .iter()
                    .position(|m| m.is_primary().unwrap_or(false))
                    .unwrap_or(0);
                monitors
                    .into_iter()
                    .enumerate()
                    .nth(primary)
                    .ok_or_else(|| anyhow!("no monitor found"))?
            }
        };

        let image = monitor
            .capture_image()
            .with_context(|| format!("failed to capture monitor {position}"))?;

        Ok(SourceImage::new(
            DynamicImage::ImageRgba8(image),
            Local::now().date_naive(),
            format!("monitor {position}"),
        ))
    }

    pub fn capture_window(title: &str) -> anyhow::Result<SourceImage> {
        let needle = title.to_lowercase();
        let windows = Window::all().context("failed to enumerate windows")?;

        let (window, window_title) = windows
            .into_iter()
            .filter(|w| !w.is_minimized().unwrap_or(true))
            .find_map(|w| {
                let window_title = w.title().ok()?;
                window_title
                    .to_lowercase()
                    .contains(&needle)
                    .then_some((w, window_title))
            })
            .ok_or_else(|| anyhow!("no visible window titled like \"{title}\""))?;

        let image = window
            .capture_image()
            .with_context(|| format!("failed to capture window \"{window_title}\""))?;

        Ok(SourceImage::new(
            DynamicImage::ImageRgba8(image),
            Local::now().date_naive(),
            format!("window \"{window_title}\""),
        ))
    }
}

#[cfg(not(feature = "capture"))]
mod live {
    use super::SourceImage;

    pub fn capture_monitor(_index: Option<usize>) -> anyhow::Result<SourceImage> {
        anyhow::bail!("built without the `capture` feature, use --image")
    }

    pub fn capture_window(_title: &str) -> anyhow::Result<SourceImage> {
        anyhow::bail!("built without the `capture` feature, use --image")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    #[test]
    fn file_source_keeps_resolution() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shot.png");
        RgbaImage::from_pixel(64, 36, image::Rgba([1, 2, 3, 255]))
            .save(&path)
            .unwrap();

        let source = acquire(&CaptureSource::File(path.clone()), Duration::ZERO).unwrap();
        assert_eq!(source.dimensions(), (64, 36));
        assert_eq!(source.captured_on(), Local::now().date_naive());
        assert_eq!(source.origin(), path.display().to_string());
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = acquire(
            &CaptureSource::File(PathBuf::from("/definitely/not/here.png")),
            Duration::ZERO,
        );
        assert!(result.is_err());
    }
}
