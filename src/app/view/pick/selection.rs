// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/pick/selection.rs
//
// Two-point selection state, drag session and keyboard nudging.

use crate::domain::geometry::{CoordinateMapper, DisplayPoint, DisplayRect, SourcePoint};

/// Phase of the picking workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickState {
    #[default]
    Idle,
    AwaitingFirstPoint,
    AwaitingSecondPoint,
    Ready,
}

/// Stable identifier of a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointSlot {
    First,
    Second,
}

impl PointSlot {
    fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

/// Arrow direction for 1 px nudges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// The point currently targeted by pointer drags and arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub target: PointSlot,
    /// Set by the first pointer move after the press.
    pub moved: bool,
}

#[derive(Debug, Clone)]
pub struct PickSelection {
    state: PickState,
    points: [Option<DisplayPoint>; 2],
    drag: Option<DragSession>,
    marker_radius: i32,
}

impl PickSelection {
    pub fn new(marker_radius: i32) -> Self {
        Self {
            state: PickState::Idle,
            points: [None, None],
            drag: None,
            marker_radius,
        }
    }

    pub fn state(&self) -> PickState {
        self.state
    }

    pub fn point(&self, slot: PointSlot) -> Option<DisplayPoint> {
        self.points[slot.index()]
    }

    pub fn drag(&self) -> Option<DragSession> {
        self.drag
    }

    /// Both points in source space.
    pub fn source_points(&self, mapper: &CoordinateMapper) -> [Option<SourcePoint>; 2] {
        self.points.map(|p| p.map(|p| mapper.to_source(p)))
    }

    /// Bounding box of the two points; present only when both exist.
    pub fn rectangle(&self) -> Option<DisplayRect> {
        match self.points {
            [Some(a), Some(b)] => Some(DisplayRect::spanning(a, b)),
            _ => None,
        }
    }

    /// The magnifier is shown only once the active drag has moved.
    pub fn magnifier_visible(&self) -> bool {
        self.drag.is_some_and(|d| d.moved)
    }

    /// Position of the active drag target, if any.
    pub fn active_point(&self) -> Option<DisplayPoint> {
        self.drag.and_then(|d| self.point(d.target))
    }

    /// Drop both points and any drag, and wait for the first point.
    pub fn reset(&mut self) {
        self.points = [None, None];
        self.drag = None;
        self.state = PickState::AwaitingFirstPoint;
        log::debug!("Selection reset, awaiting first point");
    }

    /// Place the next point. Returns the slot that was filled; `None` when
    /// placement is not accepted in the current state.
    pub fn place_point(&mut self, raw: DisplayPoint, mapper: &CoordinateMapper) -> Option<PointSlot> {
        let slot = match self.state {
            PickState::AwaitingFirstPoint => {
                self.state = PickState::AwaitingSecondPoint;
                PointSlot::First
            }
            PickState::AwaitingSecondPoint => {
                self.state = PickState::Ready;
                PointSlot::Second
            }
            PickState::Idle | PickState::Ready => return None,
        };

        let point = mapper.clamp(raw);
        self.points[slot.index()] = Some(point);
        log::debug!("Placed {slot:?} at {point:?}, now {:?}", self.state);
        Some(slot)
    }

    /// Point whose marker contains `raw`. The second point is drawn on top,
    /// so it wins when both markers overlap.
    pub fn hit_test(&self, raw: DisplayPoint) -> Option<PointSlot> {
        let radius_sq = i64::from(self.marker_radius).pow(2);
        [PointSlot::Second, PointSlot::First]
            .into_iter()
            .find(|slot| {
                self.point(*slot).is_some_and(|p| {
                    let dx = i64::from(raw.x) - i64::from(p.x);
                    let dy = i64::from(raw.y) - i64::from(p.y);
                    dx * dx + dy * dy <= radius_sq
                })
            })
    }

    /// Begin dragging `slot`. Only accepted once both points exist.
    pub fn start_drag(&mut self, slot: PointSlot) -> bool {
        if self.state != PickState::Ready || self.point(slot).is_none() {
            return false;
        }
        self.drag = Some(DragSession {
            target: slot,
            moved: false,
        });
        log::debug!("Dragging {slot:?}");
        true
    }

    /// Move the drag target to the clamped pointer position.
    pub fn update_drag(&mut self, raw: DisplayPoint, mapper: &CoordinateMapper) -> Option<DisplayPoint> {
        let drag = self.drag.as_mut()?;
        drag.moved = true;
        let target = drag.target;

        let point = mapper.clamp(raw);
        self.points[target.index()] = Some(point);
        Some(point)
    }

    pub fn end_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            log::debug!("Released {:?}", drag.target);
        }
    }

    /// Move the drag target by one display pixel, clamped to the frame.
    pub fn nudge(&mut self, direction: Direction, mapper: &CoordinateMapper) -> Option<DisplayPoint> {
        let target = self.drag?.target;
        let current = self.point(target)?;

        let (dx, dy) = direction.delta();
        let point = mapper.clamp(current.offset(dx, dy));
        self.points[target.index()] = Some(point);
        Some(point)
    }
}
