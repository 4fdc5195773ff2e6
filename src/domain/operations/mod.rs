// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/operations/mod.rs
//
// Operations on the source image.

pub mod crop;
pub mod export;

pub use crop::BoundingBox;
pub use export::{ExportOutcome, RegionExporter};
