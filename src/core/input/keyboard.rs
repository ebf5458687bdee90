//! Keyboard device router.

use crate::core::engine::{Engine, EngineHandle};
use crate::core::input::{KeyEvent, KeyState};
use crate::util::logging;

/// Keyboard state for the seat: pressed keys and repeat configuration.
#[derive(Debug, Clone)]
pub struct KeyboardDevice {
    /// Set of currently pressed scancodes
    pressed_keys: Vec<u32>,
    /// Key repeat configuration
    pub repeat_rate: i32,
    pub repeat_delay: i32,
}

impl Default for KeyboardDevice {
    fn default() -> Self {
        Self {
            pressed_keys: Vec::new(),
            repeat_rate: 33,
            repeat_delay: 500,
        }
    }
}

impl KeyboardDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repeat(repeat_rate: i32, repeat_delay: i32) -> Self {
        Self {
            repeat_rate,
            repeat_delay,
            ..Default::default()
        }
    }

    /// Route one key event to the engine.
    ///
    /// Keycode 0 is the platform's "unknown key" and is never consumed.
    pub fn handle_key(
        &mut self,
        event: &KeyEvent,
        engine: &mut dyn Engine,
        handle: EngineHandle,
    ) -> bool {
        if event.keycode == 0 {
            return false;
        }

        match event.state {
            KeyState::Pressed => {
                if !self.pressed_keys.contains(&event.keycode) {
                    self.pressed_keys.push(event.keycode);
                }
            }
            KeyState::Released => {
                self.pressed_keys.retain(|k| *k != event.keycode);
            }
        }

        engine.key(handle, event.keycode, event.state, event.time_ms);
        true
    }

    /// Whether the given scancode is currently held.
    pub fn is_pressed(&self, keycode: u32) -> bool {
        self.pressed_keys.contains(&keycode)
    }

    /// Currently pressed scancodes.
    pub fn pressed_keys(&self) -> &[u32] {
        &self.pressed_keys
    }

    /// Drop all key state.
    pub fn destroy(&mut self) {
        crate::mlog!(
            logging::SEAT,
            "Keyboard destroyed ({} keys released)",
            self.pressed_keys.len()
        );
        self.pressed_keys.clear();
    }
}
