//! Pointer device router.

use crate::core::engine::{Engine, EngineHandle};
use crate::core::input::{ButtonState, MotionAction, MotionEvent};
use crate::core::output::Output;
use crate::util::logging;

/// Linux evdev code for the primary button; plain Down/Up actions map here.
const BTN_LEFT: u32 = 0x110;

/// Pointer state for the seat: last-known absolute position and pressed
/// button count.
///
/// Consumes mouse-class motion events scoped to one output. Coordinates
/// are clamped to the output's bounds before they reach the engine, so
/// the engine never sees the pointer leave the display.
#[derive(Debug, Clone, Default)]
pub struct PointerDevice {
    /// Absolute pointer position in output coordinates
    pub x: f64,
    pub y: f64,
    /// Number of buttons currently pressed (for implicit grab tracking)
    pub button_count: u32,
}

impl PointerDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route one mouse-class motion event to the engine.
    ///
    /// Returns whether the event was consumed. Malformed events
    /// (non-finite coordinates, missing contact) are dropped with a
    /// `false` return; they never abort the caller's event loop.
    pub fn handle_motion(
        &mut self,
        event: &MotionEvent,
        output: &Output,
        engine: &mut dyn Engine,
        handle: EngineHandle,
    ) -> bool {
        match event.action {
            MotionAction::Move => {
                let Some((x, y)) = Self::position(event, output) else {
                    return false;
                };
                let (dx, dy) = (x - self.x, y - self.y);
                self.x = x;
                self.y = y;
                crate::mtrace!(
                    logging::INPUT,
                    "pointer motion to ({x:.1}, {y:.1}), delta ({dx:.1}, {dy:.1})"
                );
                engine.pointer_motion(handle, x, y, event.time_ms);
                true
            }
            MotionAction::Down { .. } => {
                // A mouse-class Down is a primary-button press at the
                // event's position.
                let Some((x, y)) = Self::position(event, output) else {
                    return false;
                };
                self.x = x;
                self.y = y;
                self.update_button(true);
                engine.pointer_motion(handle, x, y, event.time_ms);
                engine.pointer_button(handle, BTN_LEFT, ButtonState::Pressed, event.time_ms);
                true
            }
            MotionAction::Up { .. } => {
                let Some((x, y)) = Self::position(event, output) else {
                    return false;
                };
                self.x = x;
                self.y = y;
                self.update_button(false);
                engine.pointer_button(handle, BTN_LEFT, ButtonState::Released, event.time_ms);
                true
            }
            MotionAction::Button { button, state } => {
                self.update_button(state == ButtonState::Pressed);
                engine.pointer_button(handle, button, state, event.time_ms);
                true
            }
            MotionAction::Scroll {
                horizontal,
                vertical,
            } => {
                if !horizontal.is_finite() || !vertical.is_finite() {
                    return false;
                }
                engine.pointer_axis(handle, horizontal, vertical, event.time_ms);
                true
            }
            MotionAction::Cancel => {
                self.button_count = 0;
                true
            }
        }
    }

    /// Track button press/release for implicit grab
    pub fn update_button(&mut self, pressed: bool) {
        if pressed {
            self.button_count = self.button_count.saturating_add(1);
        } else {
            self.button_count = self.button_count.saturating_sub(1);
        }
    }

    /// Whether the pointer has an implicit grab (buttons pressed)
    pub fn has_implicit_grab(&self) -> bool {
        self.button_count > 0
    }

    /// Reset all pointer state.
    pub fn destroy(&mut self) {
        crate::mlog!(logging::SEAT, "Pointer destroyed");
        *self = Self::default();
    }

    fn position(event: &MotionEvent, output: &Output) -> Option<(f64, f64)> {
        let contact = event.primary_contact()?;
        if !contact.x.is_finite() || !contact.y.is_finite() {
            return None;
        }
        Some(output.clamp(contact.x, contact.y))
    }
}
