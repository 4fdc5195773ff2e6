// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/pick/overlay.rs
//
// Picking overlay: selection rectangle, point markers and the magnifier.

use crate::app::AppModel;
use crate::app::view::canvas::{Frame, GLYPH_SIZE, text_width};
use crate::constant::{
    CAPTION_COLOR, CAPTION_PADDING, POINT_COLOR_1, POINT_COLOR_2, POINT_OUTLINE, POINT_RADIUS,
    RECT_COLOR, RECT_WIDTH, ZOOM_BORDER,
};
use crate::domain::geometry::{DisplayPoint, DisplayRect};

use super::{MagnifierView, PointSlot};

/// Height of the caption strip under the magnified image.
const CAPTION_HEIGHT: i32 = GLYPH_SIZE + 2 * CAPTION_PADDING;

/// Draw the overlay for the current session into `frame`.
pub fn pick_overlay(frame: &mut Frame, model: &AppModel) {
    if let Some(rect) = model.selection.rectangle() {
        draw_border(frame, rect);
    }

    for (slot, color) in [
        (PointSlot::First, POINT_COLOR_1),
        (PointSlot::Second, POINT_COLOR_2),
    ] {
        if let Some(point) = model.selection.point(slot) {
            draw_marker(frame, point, color);
        }
    }

    if let Some(view) = &model.magnifier {
        draw_magnifier(frame, model, view);
    }
}

/// Zoomed image with its coordinate caption underneath, framed by a 1 px border.
fn draw_magnifier(frame: &mut Frame, model: &AppModel, view: &MagnifierView) {
    let (image_w, image_h) = view.image.dimensions();
    let w = i32::try_from(image_w).unwrap_or(i32::MAX);
    let h = i32::try_from(image_h).unwrap_or(i32::MAX);
    let total = (
        image_w,
        image_h.saturating_add(CAPTION_HEIGHT.unsigned_abs()),
    );
    let at = model
        .magnifier_renderer()
        .placement(view.anchor, total, frame.size());

    frame.fill_rect(at.x - 1, at.y - 1, w + 2, h + CAPTION_HEIGHT + 2, ZOOM_BORDER);
    frame.blit(&view.image, at);

    let text_x = at.x + ((w - text_width(&view.caption)) / 2).max(CAPTION_PADDING);
    frame.draw_text(
        &view.caption,
        DisplayPoint::new(text_x, at.y + h + CAPTION_PADDING),
        CAPTION_COLOR,
    );
}

fn draw_border(frame: &mut Frame, rect: DisplayRect) {
    let w = rect.right - rect.left + 1;
    let h = rect.bottom - rect.top + 1;

    // Top
    frame.fill_rect(rect.left, rect.top, w, RECT_WIDTH, RECT_COLOR);
    // Bottom
    frame.fill_rect(rect.left, rect.bottom - RECT_WIDTH + 1, w, RECT_WIDTH, RECT_COLOR);
    // Left
    frame.fill_rect(rect.left, rect.top, RECT_WIDTH, h, RECT_COLOR);
    // Right
    frame.fill_rect(rect.right - RECT_WIDTH + 1, rect.top, RECT_WIDTH, h, RECT_COLOR);
}

fn draw_marker(frame: &mut Frame, center: DisplayPoint, color: u32) {
    frame.fill_circle(center, POINT_RADIUS, POINT_OUTLINE);
    frame.fill_circle(center, POINT_RADIUS - 1, color);
}
