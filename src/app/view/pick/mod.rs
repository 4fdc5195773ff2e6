// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/pick/mod.rs
//
// Point picking: selection state, magnifier and overlay drawing.

mod magnifier;
mod overlay;
mod selection;

pub use magnifier::{Magnifier, MagnifierView};
pub use overlay::pick_overlay;
pub use selection::{Direction, PickSelection, PickState, PointSlot};
