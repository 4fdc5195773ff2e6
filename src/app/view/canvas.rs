// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/canvas.rs
//
// Compose the window framebuffer: display frame plus the picking overlay.

use font8x8::{BASIC_FONTS, UnicodeFonts};
use image::RgbaImage;

use super::pick::pick_overlay;
use crate::app::AppModel;
use crate::domain::geometry::DisplayPoint;

/// 0RGB framebuffer, one `u32` per pixel, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pixels: Vec<u32>,
    width: usize,
    height: usize,
}

impl Frame {
    pub fn from_rgba(image: &RgbaImage) -> Self {
        let pixels = image
            .pixels()
            .map(|p| pack_rgb(p.0[0], p.0[1], p.0[2]))
            .collect();
        Self {
            pixels,
            width: image.width() as usize,
            height: image.height() as usize,
        }
    }

    #[cfg(test)]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn size(&self) -> (u32, u32) {
        (
            u32::try_from(self.width).unwrap_or(u32::MAX),
            u32::try_from(self.height).unwrap_or(u32::MAX),
        )
    }

    #[cfg(test)]
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok().filter(|x| *x < self.width)?;
        let y = usize::try_from(y).ok().filter(|y| *y < self.height)?;
        Some(y * self.width + x)
    }

    fn put(&mut self, x: i32, y: i32, color: u32) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Fill `w x h` pixels at (x, y); parts outside the frame are dropped.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u32) {
        for row in y..y.saturating_add(h) {
            for col in x..x.saturating_add(w) {
                self.put(col, row, color);
            }
        }
    }

    pub fn fill_circle(&mut self, center: DisplayPoint, radius: i32, color: u32) {
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= radius * radius {
                    self.put(center.x + dx, center.y + dy, color);
                }
            }
        }
    }

    /// Copy an image with its top-left corner at `at`, ignoring alpha.
    pub fn blit(&mut self, image: &RgbaImage, at: DisplayPoint) {
        for (x, y, p) in image.enumerate_pixels() {
            let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) else {
                continue;
            };
            self.put(at.x + x, at.y + y, pack_rgb(p.0[0], p.0[1], p.0[2]));
        }
    }

    /// Draw `text` in the 8x8 bitmap font with its top-left corner at `at`.
    /// Characters without a glyph advance the pen but draw nothing.
    pub fn draw_text(&mut self, text: &str, at: DisplayPoint, color: u32) {
        let mut pen = at.x;
        for ch in text.chars() {
            if let Some(glyph) = BASIC_FONTS.get(ch) {
                for (row, bits) in (0..).zip(glyph) {
                    for col in 0..8 {
                        if (bits >> col) & 1 == 1 {
                            self.put(pen + col, at.y + row, color);
                        }
                    }
                }
            }
            pen += GLYPH_SIZE;
        }
    }

    /// Copy into a `width x height` presentation buffer, top-left aligned.
    /// Parts of the frame that do not fit are dropped; the rest is black.
    pub fn copy_into(&self, buffer: &mut [u32], width: usize, height: usize) {
        buffer.fill(0);
        let cols = self.width.min(width);
        for row in 0..self.height.min(height) {
            let src = row * self.width;
            let dst = row * width;
            if let (Some(from), Some(to)) = (
                self.pixels.get(src..src + cols),
                buffer.get_mut(dst..dst + cols),
            ) {
                to.copy_from_slice(from);
            }
        }
    }
}

/// Width and height of one bitmap glyph.
pub const GLYPH_SIZE: i32 = 8;

/// Pixel width of `text` when drawn with [`Frame::draw_text`].
pub fn text_width(text: &str) -> i32 {
    i32::try_from(text.chars().count())
        .unwrap_or(i32::MAX)
        .saturating_mul(GLYPH_SIZE)
}

pub fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}

/// Render the current session on top of the pre-converted display frame.
pub fn view(model: &AppModel, base: &Frame) -> Frame {
    let mut frame = base.clone();
    pick_overlay(&mut frame, model);
    frame
}
