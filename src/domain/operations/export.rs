// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/operations/export.rs
//
// Write the selected source region to the export directory as PNG.

use std::path::{Path, PathBuf};

use anyhow::Context;
use image::ImageFormat;

use super::crop::BoundingBox;
use crate::domain::capture::SourceImage;
use crate::domain::geometry::SourcePoint;

/// Result of an export attempt that had both points available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The region was written to this path.
    Written(PathBuf),
    /// The box had no area, nothing was written.
    Empty,
}

impl ExportOutcome {
    /// File name of a written export.
    pub fn file_name(&self) -> Option<String> {
        match self {
            Self::Written(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned()),
            Self::Empty => None,
        }
    }
}

/// Crops the source image to the selected box and persists it.
#[derive(Debug, Clone)]
pub struct RegionExporter {
    dir: PathBuf,
}

impl RegionExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Export the region spanned by both points.
    ///
    /// Returns `Ok(None)` without touching the disk when a point is missing.
    /// Existing files with the same name are overwritten.
    pub fn export(
        &self,
        source: &SourceImage,
        points: [Option<SourcePoint>; 2],
    ) -> anyhow::Result<Option<ExportOutcome>> {
        let [Some(first), Some(second)] = points else {
            return Ok(None);
        };

        let bbox = BoundingBox::normalize(first, second);
        let (width, height) = source.dimensions();
        let crop = bbox.clipped_to(width, height);
        if crop.is_empty() {
            log::warn!("Skipping export of empty region {bbox:?}");
            return Ok(Some(ExportOutcome::Empty));
        }

        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create {}", self.dir.display()))?;

        let path = self.dir.join(bbox.file_name(source.captured_on()));

        source
            .image()
            .crop_imm(crop.left, crop.top, crop.width(), crop.height())
            .save_with_format(&path, ImageFormat::Png)
            .with_context(|| format!("failed to write {}", path.display()))?;

        log::info!(
            "Exported {}x{} region to {}",
            crop.width(),
            crop.height(),
            path.display()
        );
        Ok(Some(ExportOutcome::Written(path)))
    }
}
