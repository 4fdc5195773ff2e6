// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/mod.rs
//
// Window shell around the application layer.

pub mod app;
pub mod input;
