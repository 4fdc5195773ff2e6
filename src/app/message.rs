// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/message.rs
//
// Application messages: pointer events, key actions and control activations.

use crate::app::view::pick::Direction;
use crate::domain::geometry::DisplayPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMessage {
    // Controls.
    StartPicking,
    CopyCoordinates,
    ExportRegion,

    // Point placement (secondary button).
    PlacePoint(DisplayPoint),

    // Dragging (primary button).
    PointerPressed(DisplayPoint),
    PointerMoved(DisplayPoint),
    PointerReleased,

    // Fine adjustment of the dragged point.
    Nudge(Direction),
}
