//! Pointer and keyboard input

use glam::Vec2;

use crate::sim::{PointerState, TickInput};

/// Input event types the game understands
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Button pressed at canvas coordinates (x, y)
    PointerDown { x: f32, y: f32 },
    /// Button released at canvas coordinates (x, y)
    PointerUp { x: f32, y: f32 },
    /// Cursor moved to canvas coordinates (x, y)
    PointerMove { x: f32, y: f32 },
    /// A key was pressed
    KeyDown { key: char },
}

impl PointerState {
    /// Fold a pointer event into the state
    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerDown { x, y } => {
                self.position = Vec2::new(x, y);
                self.pressed = true;
            }
            InputEvent::PointerUp { x, y } => {
                self.position = Vec2::new(x, y);
                self.pressed = false;
            }
            InputEvent::PointerMove { x, y } => {
                self.position = Vec2::new(x, y);
            }
            InputEvent::KeyDown { .. } => {}
        }
    }
}

/// Key that flips the collision-circle view
pub const DEBUG_KEY: char = 'd';

/// Single-slot input state shared between event handlers and the frame loop
#[derive(Debug, Clone)]
pub struct InputCell {
    pointer: PointerState,
    toggle_debug: bool,
}

impl InputCell {
    pub fn new(initial: PointerState) -> Self {
        Self {
            pointer: initial,
            toggle_debug: false,
        }
    }

    /// Record an event (called from DOM handlers)
    pub fn push(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown { key } if key.eq_ignore_ascii_case(&DEBUG_KEY) => {
                self.toggle_debug = !self.toggle_debug;
            }
            _ => self.pointer.apply(&event),
        }
    }

    /// Latest pointer state
    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Input for the next frame; one-shot requests are cleared
    pub fn snapshot(&mut self) -> TickInput {
        TickInput {
            pointer: self.pointer,
            toggle_debug: std::mem::take(&mut self.toggle_debug),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell() -> InputCell {
        InputCell::new(PointerState::at(Vec2::new(640.0, 360.0)))
    }

    #[test]
    fn test_last_event_wins() {
        let mut input = cell();
        input.push(InputEvent::PointerMove { x: 1.0, y: 2.0 });
        input.push(InputEvent::PointerMove { x: 30.0, y: 40.0 });
        assert_eq!(input.snapshot().pointer.position, Vec2::new(30.0, 40.0));
    }

    #[test]
    fn test_press_and_release() {
        let mut input = cell();
        input.push(InputEvent::PointerDown { x: 5.0, y: 6.0 });
        assert!(input.pointer().pressed);

        // Moving keeps the button state
        input.push(InputEvent::PointerMove { x: 7.0, y: 8.0 });
        assert!(input.pointer().pressed);
        assert_eq!(input.pointer().position, Vec2::new(7.0, 8.0));

        input.push(InputEvent::PointerUp { x: 9.0, y: 10.0 });
        let state = input.pointer();
        assert!(!state.pressed);
        assert_eq!(state.position, Vec2::new(9.0, 10.0));
    }

    #[test]
    fn test_debug_toggle_is_one_shot() {
        let mut input = cell();
        input.push(InputEvent::KeyDown { key: 'D' });
        assert!(input.snapshot().toggle_debug);
        assert!(!input.snapshot().toggle_debug);
    }

    #[test]
    fn test_double_press_cancels_out() {
        let mut input = cell();
        input.push(InputEvent::KeyDown { key: 'd' });
        input.push(InputEvent::KeyDown { key: 'd' });
        assert!(!input.snapshot().toggle_debug);
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut input = cell();
        input.push(InputEvent::KeyDown { key: 'x' });
        let tick_input = input.snapshot();
        assert!(!tick_input.toggle_debug);
        assert_eq!(tick_input.pointer, PointerState::at(Vec2::new(640.0, 360.0)));
    }
}
