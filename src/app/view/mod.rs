// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/mod.rs
//
// View layer: framebuffer composition and status text.

pub mod canvas;
pub mod footer;
pub mod pick;
