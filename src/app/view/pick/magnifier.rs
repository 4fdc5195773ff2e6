// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/pick/magnifier.rs
//
// Zoomed, cross-haired preview of the source image around the dragged point.

use image::{Rgba, RgbaImage, imageops, imageops::FilterType};

use crate::constant::{ZOOM_CROSSHAIR, ZOOM_MARKER, ZOOM_MARKER_RADIUS, ZOOM_OFFSET};
use crate::domain::capture::SourceImage;
use crate::domain::geometry::{CoordinateMapper, DisplayPoint, SourcePoint};
use crate::domain::operations::BoundingBox;

/// Rendered magnifier, ready to be composited next to the pointer.
#[derive(Debug, Clone)]
pub struct MagnifierView {
    /// Upscaled crop with crosshair and centre marker.
    pub image: RgbaImage,
    /// Source coordinate under the point, drawn below the image.
    pub caption: String,
    /// Display position the view was rendered for.
    pub anchor: DisplayPoint,
}

/// Renders magnifier views with a fixed source radius and zoom factor.
#[derive(Debug, Clone, Copy)]
pub struct Magnifier {
    radius: u32,
    zoom: u32,
}

impl Magnifier {
    pub fn new(radius: u32, zoom: u32) -> Self {
        Self {
            radius: radius.max(1),
            zoom: zoom.max(1),
        }
    }

    /// Square `[x-R, x+R] x [y-R, y+R]` clipped to the image; smaller near edges.
    pub fn crop_bounds(&self, center: SourcePoint, (width, height): (u32, u32)) -> BoundingBox {
        BoundingBox {
            left: center.x.saturating_sub(self.radius).min(width),
            top: center.y.saturating_sub(self.radius).min(height),
            right: center.x.saturating_add(self.radius).min(width),
            bottom: center.y.saturating_add(self.radius).min(height),
        }
    }

    /// Render the view for a display-space position.
    pub fn render(
        &self,
        source: &SourceImage,
        mapper: &CoordinateMapper,
        anchor: DisplayPoint,
    ) -> Option<MagnifierView> {
        let center = mapper.to_source(anchor);
        let crop = self.crop_bounds(center, source.dimensions());
        if crop.is_empty() {
            return None;
        }

        let region = source
            .image()
            .crop_imm(crop.left, crop.top, crop.width(), crop.height())
            .to_rgba8();
        let mut image = imageops::resize(
            &region,
            crop.width() * self.zoom,
            crop.height() * self.zoom,
            FilterType::Nearest,
        );
        draw_crosshair(&mut image);

        Some(MagnifierView {
            image,
            caption: center.to_string(),
            anchor,
        })
    }

    /// Top-left display position for a view of `size` next to `anchor`.
    /// `size` covers everything drawn for the view, caption included.
    ///
    /// Sits right of the pointer, flips to the left when it would leave the
    /// frame, and is vertically centred on the pointer where possible.
    pub fn placement(
        &self,
        anchor: DisplayPoint,
        (width, height): (u32, u32),
        (frame_width, frame_height): (u32, u32),
    ) -> DisplayPoint {
        let (width, height) = (to_i32(width), to_i32(height));
        let (frame_width, frame_height) = (to_i32(frame_width), to_i32(frame_height));

        let mut x = anchor.x + ZOOM_OFFSET;
        if x + width > frame_width {
            x = anchor.x - ZOOM_OFFSET - width;
        }
        let x = x.clamp(0, (frame_width - width).max(0));
        let y = (anchor.y - height / 2).clamp(0, (frame_height - height).max(0));

        DisplayPoint::new(x, y)
    }
}

fn to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// One vertical and one horizontal line through the centre, plus a dot.
fn draw_crosshair(image: &mut RgbaImage) {
    let (width, height) = image.dimensions();
    let (cx, cy) = (width / 2, height / 2);

    for y in 0..height {
        image.put_pixel(cx.min(width - 1), y, Rgba(ZOOM_CROSSHAIR));
    }
    for x in 0..width {
        image.put_pixel(x, cy.min(height - 1), Rgba(ZOOM_CROSSHAIR));
    }

    let r = ZOOM_MARKER_RADIUS;
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy > r * r {
                continue;
            }
            let x = i64::from(cx) + i64::from(dx);
            let y = i64::from(cy) + i64::from(dy);
            if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y))
                && x < width
                && y < height
            {
                image.put_pixel(x, y, Rgba(ZOOM_MARKER));
            }
        }
    }
}
