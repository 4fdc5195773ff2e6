// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// Domain layer: coordinate spaces, the captured source image and operations on it.

pub mod capture;
pub mod geometry;
pub mod operations;
