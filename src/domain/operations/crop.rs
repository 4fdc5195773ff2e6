// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/operations/crop.rs
//
// Crop region domain model.

use chrono::NaiveDate;

use crate::constant::EXPORT_DATE_FORMAT;
use crate::domain::geometry::SourcePoint;

/// Normalized box in source space: `left <= right`, `top <= bottom`.
///
/// Pure domain model, no UI concerns. `right`/`bottom` are exclusive
/// when the box is used to crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    /// Box spanned by two points, independent of their order.
    pub fn normalize(a: SourcePoint, b: SourcePoint) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            right: a.x.max(b.x),
            bottom: a.y.max(b.y),
        }
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// A box with no area cannot be cropped.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Clip the box to an image of the given size.
    #[must_use]
    pub fn clipped_to(&self, width: u32, height: u32) -> Self {
        Self {
            left: self.left.min(width),
            top: self.top.min(height),
            right: self.right.min(width),
            bottom: self.bottom.min(height),
        }
    }

    /// Export file name: `DD.MM.YY_left.top_right.bottom.png`.
    pub fn file_name(&self, date: NaiveDate) -> String {
        format!(
            "{}_{}.{}_{}.{}.png",
            date.format(EXPORT_DATE_FORMAT),
            self.left,
            self.top,
            self.right,
            self.bottom
        )
    }
}
