// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/geometry.rs
//
// Display/source coordinate spaces and the fixed-ratio mapping between them.

use std::fmt;

/// Integer position in the downscaled display frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayPoint {
    pub x: i32,
    pub y: i32,
}

impl DisplayPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Same point moved by the given offset.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

/// Integer position in the full-resolution source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourcePoint {
    pub x: u32,
    pub y: u32,
}

impl SourcePoint {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for SourcePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned rectangle in display space, corners inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl DisplayRect {
    /// Bounding box of two display points.
    pub fn spanning(a: DisplayPoint, b: DisplayPoint) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            right: a.x.max(b.x),
            bottom: a.y.max(b.y),
        }
    }
}

/// Ratio of display size to source size, per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactor {
    pub sx: f64,
    pub sy: f64,
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} x {:.4}", self.sx, self.sy)
    }
}

/// Fixed conversion between display space and source space.
///
/// Conversion is done with integer arithmetic, `x * source / display`,
/// which is exactly `floor(x / sx)` for in-bounds points without the
/// rounding drift of dividing by a float ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateMapper {
    display: (u32, u32),
    source: (u32, u32),
}

impl CoordinateMapper {
    /// Both sizes must be non-zero; zero sizes are bumped to 1.
    pub fn new(display: (u32, u32), source: (u32, u32)) -> Self {
        Self {
            display: (display.0.max(1), display.1.max(1)),
            source: (source.0.max(1), source.1.max(1)),
        }
    }

    pub fn source_size(&self) -> (u32, u32) {
        self.source
    }

    pub fn scale(&self) -> ScaleFactor {
        ScaleFactor {
            sx: f64::from(self.display.0) / f64::from(self.source.0),
            sy: f64::from(self.display.1) / f64::from(self.source.1),
        }
    }

    /// Clip a raw position to `[0, width] x [0, height]` of the display frame.
    pub fn clamp(&self, point: DisplayPoint) -> DisplayPoint {
        DisplayPoint::new(
            point.x.clamp(0, to_i32(self.display.0)),
            point.y.clamp(0, to_i32(self.display.1)),
        )
    }

    /// Convert a display position to source space, truncating toward zero.
    ///
    /// The point is clamped first, so the result never leaves
    /// `[0, source_width] x [0, source_height]`.
    pub fn to_source(&self, point: DisplayPoint) -> SourcePoint {
        let point = self.clamp(point);
        SourcePoint::new(
            scale_axis(point.x, self.source.0, self.display.0),
            scale_axis(point.y, self.source.1, self.display.1),
        )
    }

    /// Convert a display distance to a source distance, truncating toward zero.
    pub fn distance_to_source(&self, dx: u32, dy: u32) -> (u32, u32) {
        (
            scale_len(dx, self.source.0, self.display.0),
            scale_len(dy, self.source.1, self.display.1),
        )
    }
}

fn to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[allow(clippy::cast_sign_loss)]
fn scale_axis(value: i32, numerator: u32, denominator: u32) -> u32 {
    // `value` is clamped to be non-negative before this is called.
    scale_len(value.max(0) as u32, numerator, denominator)
}

fn scale_len(value: u32, numerator: u32, denominator: u32) -> u32 {
    let scaled = u64::from(value) * u64::from(numerator) / u64::from(denominator);
    u32::try_from(scaled).unwrap_or(u32::MAX)
}
