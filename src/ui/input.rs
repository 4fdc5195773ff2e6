// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/input.rs
//
// Turn window events into discrete input events, and input events into messages.

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::app::AppMessage;
use crate::app::view::pick::Direction;
use crate::domain::geometry::DisplayPoint;

/// A discrete input event, in the order it is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PointerMoved(DisplayPoint),
    PrimaryPressed(DisplayPoint),
    SecondaryPressed(DisplayPoint),
    PrimaryReleased,
    KeyPressed(KeyCode),
}

/// Translates window events one by one, as they are delivered.
///
/// Button events carry no position, so the last pointer position is kept
/// and attached to presses.
#[derive(Debug, Default)]
pub struct InputTracker {
    pointer: Option<DisplayPoint>,
}

impl InputTracker {
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => self.cursor_moved(*position),
            WindowEvent::MouseInput { state, button, .. } => self.mouse_input(*state, *button),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => Some(InputEvent::KeyPressed(*code)),
            _ => None,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) -> Option<InputEvent> {
        let pos = DisplayPoint::new(position.x.floor() as i32, position.y.floor() as i32);
        if self.pointer == Some(pos) {
            return None;
        }
        self.pointer = Some(pos);
        Some(InputEvent::PointerMoved(pos))
    }

    pub fn mouse_input(&mut self, state: ElementState, button: MouseButton) -> Option<InputEvent> {
        match (button, state) {
            (MouseButton::Left, ElementState::Pressed) => self.pointer.map(InputEvent::PrimaryPressed),
            (MouseButton::Right, ElementState::Pressed) => {
                self.pointer.map(InputEvent::SecondaryPressed)
            }
            (MouseButton::Left, ElementState::Released) => Some(InputEvent::PrimaryReleased),
            _ => None,
        }
    }
}

/// Key bindings by physical key, so they work on any layout.
/// `Escape` is handled by the window loop.
pub const KEY_BINDINGS: &[(KeyCode, AppMessage)] = &[
    (KeyCode::KeyP, AppMessage::StartPicking),
    (KeyCode::KeyC, AppMessage::CopyCoordinates),
    (KeyCode::KeyE, AppMessage::ExportRegion),
    (KeyCode::ArrowUp, AppMessage::Nudge(Direction::Up)),
    (KeyCode::ArrowDown, AppMessage::Nudge(Direction::Down)),
    (KeyCode::ArrowLeft, AppMessage::Nudge(Direction::Left)),
    (KeyCode::ArrowRight, AppMessage::Nudge(Direction::Right)),
];

/// Map an input event to the message it triggers.
pub fn dispatch(event: InputEvent) -> Option<AppMessage> {
    match event {
        InputEvent::PointerMoved(pos) => Some(AppMessage::PointerMoved(pos)),
        InputEvent::PrimaryPressed(pos) => Some(AppMessage::PointerPressed(pos)),
        InputEvent::SecondaryPressed(pos) => Some(AppMessage::PlacePoint(pos)),
        InputEvent::PrimaryReleased => Some(AppMessage::PointerReleased),
        InputEvent::KeyPressed(key) => KEY_BINDINGS
            .iter()
            .find(|(bound, _)| *bound == key)
            .map(|(_, message)| *message),
    }
}
