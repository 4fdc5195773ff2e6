// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/model.rs
//
// Session state: source image, coordinate mapping, selection and overlays.

use image::{RgbaImage, imageops::FilterType};

use crate::app::view::pick::{Magnifier, MagnifierView, PickSelection, PointSlot};
use crate::config::AppConfig;
use crate::constant::POINT_RADIUS;
use crate::domain::capture::SourceImage;
use crate::domain::geometry::{CoordinateMapper, SourcePoint};
use crate::fl;

// =============================================================================
// Enums
// =============================================================================

/// Text shown in the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Idle,
    PlaceFirst,
    PlaceSecond,
    Adjust,
    Copied,
    CopyFailed,
    Exported(String),
    ExportFailed(String),
    RegionEmpty,
}

impl Status {
    pub fn text(&self) -> String {
        match self {
            Self::Idle => fl!("status-idle"),
            Self::PlaceFirst => fl!("status-place-first"),
            Self::PlaceSecond => fl!("status-place-second"),
            Self::Adjust => fl!("status-adjust"),
            Self::Copied => fl!("status-copied"),
            Self::CopyFailed => fl!("status-copy-failed"),
            Self::Exported(filename) => fl!("status-exported", filename = filename.as_str()),
            Self::ExportFailed(reason) => fl!("status-export-failed", reason = reason.as_str()),
            Self::RegionEmpty => fl!("status-region-empty"),
        }
    }
}

/// Pointer shape requested from the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    Crosshair,
    Hand,
    Grabbing,
}

// =============================================================================
// Model
// =============================================================================

pub struct AppModel {
    // Images.
    pub source: SourceImage,
    pub display_frame: RgbaImage,
    pub mapper: CoordinateMapper,

    // Selection.
    pub selection: PickSelection,
    pub magnifier: Option<MagnifierView>,
    magnifier_renderer: Magnifier,

    // UI state.
    pub status: Status,
    /// Copy/export controls, revealed once both points exist.
    pub actions_visible: bool,
    pub hovering_point: bool,
}

impl AppModel {
    pub fn new(source: SourceImage, config: &AppConfig) -> Self {
        let display = (config.display_width, config.display_height);
        let mapper = CoordinateMapper::new(display, source.dimensions());
        let (source_w, source_h) = mapper.source_size();
        log::info!(
            "Source {source_w}x{source_h} shown at {}x{}, scale {}",
            display.0,
            display.1,
            mapper.scale()
        );

        let display_frame = source
            .image()
            .resize_exact(display.0, display.1, FilterType::Triangle)
            .to_rgba8();

        Self {
            source,
            display_frame,
            mapper,
            selection: PickSelection::new(POINT_RADIUS),
            magnifier: None,
            magnifier_renderer: Magnifier::new(config.zoom_radius, config.zoom_scale),
            status: Status::Idle,
            actions_visible: false,
            hovering_point: false,
        }
    }

    pub fn magnifier_renderer(&self) -> &Magnifier {
        &self.magnifier_renderer
    }

    /// Bring the magnifier in line with the drag session: rendered at the
    /// active point while a moved drag is in progress, absent otherwise.
    pub fn refresh_magnifier(&mut self) {
        self.magnifier = match self.selection.active_point() {
            Some(point) if self.selection.magnifier_visible() => {
                self.magnifier_renderer
                    .render(&self.source, &self.mapper, point)
            }
            _ => None,
        };
    }

    pub fn cursor(&self) -> CursorHint {
        if self.selection.drag().is_some() {
            CursorHint::Grabbing
        } else if self.hovering_point {
            CursorHint::Hand
        } else {
            CursorHint::Crosshair
        }
    }

    fn source_point(&self, slot: PointSlot) -> Option<SourcePoint> {
        self.selection.point(slot).map(|p| self.mapper.to_source(p))
    }

    /// `Point1: (x1, y1) | Point2: (x2, y2)`, `-` for missing points.
    pub fn coords_label(&self) -> String {
        let show = |slot| {
            self.source_point(slot)
                .map_or_else(|| "-".to_string(), |p| p.to_string())
        };
        format!(
            "Point1: {} | Point2: {}",
            show(PointSlot::First),
            show(PointSlot::Second)
        )
    }

    /// Source-space size of the selection, from the display-space deltas.
    pub fn size_label(&self) -> String {
        let (Some(a), Some(b)) = (
            self.selection.point(PointSlot::First),
            self.selection.point(PointSlot::Second),
        ) else {
            return fl!("label-size-unknown");
        };

        let (width, height) = self
            .mapper
            .distance_to_source(a.x.abs_diff(b.x), a.y.abs_diff(b.y));
        fl!("label-size", width = width, height = height)
    }

    /// Clipboard payload; only available with both points placed.
    pub fn clipboard_text(&self) -> Option<String> {
        let (Some(first), Some(second)) = (
            self.source_point(PointSlot::First),
            self.source_point(PointSlot::Second),
        ) else {
            return None;
        };
        Some(format!("Point1: {first} | Point2: {second}"))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::geometry::DisplayPoint;
    use chrono::NaiveDate;
    use image::{DynamicImage, Rgba};

    /// 1920x1080 source shown at 1200x675 (scale 0.625).
    pub(crate) fn model() -> AppModel {
        let image = RgbaImage::from_pixel(1920, 1080, Rgba([40, 80, 120, 255]));
        let source = SourceImage::new(
            DynamicImage::ImageRgba8(image),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            "test",
        );
        AppModel::new(source, &AppConfig::default())
    }

    #[test]
    fn display_frame_has_display_size() {
        let model = model();
        assert_eq!(model.display_frame.dimensions(), (1200, 675));
        assert_eq!(model.mapper.source_size(), (1920, 1080));
    }

    #[test]
    fn labels_follow_points() {
        let mut model = model();
        assert_eq!(model.coords_label(), "Point1: - | Point2: -");
        assert_eq!(model.clipboard_text(), None);

        model.selection.reset();
        model
            .selection
            .place_point(DisplayPoint::new(100, 100), &model.mapper);
        assert_eq!(model.coords_label(), "Point1: (160, 160) | Point2: -");
        assert_eq!(model.clipboard_text(), None);

        model
            .selection
            .place_point(DisplayPoint::new(200, 200), &model.mapper);
        assert_eq!(
            model.clipboard_text().as_deref(),
            Some("Point1: (160, 160) | Point2: (320, 320)")
        );
        assert_eq!(model.coords_label(), "Point1: (160, 160) | Point2: (320, 320)");
        assert!(model.size_label().contains("160 x 160"));
    }

    #[test]
    fn magnifier_tracks_drag_lifecycle() {
        let mut model = model();
        model.selection.reset();
        model
            .selection
            .place_point(DisplayPoint::new(100, 100), &model.mapper);
        model
            .selection
            .place_point(DisplayPoint::new(200, 200), &model.mapper);

        model.selection.start_drag(PointSlot::First);
        model.refresh_magnifier();
        assert!(model.magnifier.is_none());
        assert_eq!(model.cursor(), CursorHint::Grabbing);

        model
            .selection
            .update_drag(DisplayPoint::new(120, 110), &model.mapper);
        model.refresh_magnifier();
        let view = model.magnifier.as_ref().unwrap();
        assert_eq!(view.anchor, DisplayPoint::new(120, 110));
        assert_eq!(view.caption, "(192, 176)");

        model.selection.end_drag();
        model.refresh_magnifier();
        assert!(model.magnifier.is_none());
        assert_eq!(model.cursor(), CursorHint::Crosshair);
    }
}
