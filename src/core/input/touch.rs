//! Touch device router.

use crate::core::engine::{Engine, EngineHandle};
use crate::core::input::{Contact, MotionAction, MotionEvent};
use crate::core::output::Output;
use crate::prelude::HashMap;
use crate::util::logging;

/// One active touch contact.
#[derive(Debug, Clone, Copy)]
pub struct TouchPoint {
    pub id: i32,
    pub x: f64,
    pub y: f64,
    /// Position where the contact went down
    pub start_x: f64,
    pub start_y: f64,
    pub down_at_ms: u32,
}

/// Touch state for the seat: the set of active contacts keyed by the
/// platform's contact identifier.
///
/// Consumes touch-class motion events scoped to one output. A contact
/// lives from its Down to the matching Up (or a Cancel); events for
/// identifiers outside that window are malformed and not consumed.
#[derive(Debug, Clone, Default)]
pub struct TouchDevice {
    active: HashMap<i32, TouchPoint>,
}

impl TouchDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route one touch-class motion event to the engine.
    ///
    /// Every consumed sequence step is followed by a frame notification
    /// so the engine can process the contact set atomically.
    pub fn handle_motion(
        &mut self,
        event: &MotionEvent,
        output: &Output,
        engine: &mut dyn Engine,
        handle: EngineHandle,
    ) -> bool {
        match event.action {
            MotionAction::Down { contact } => {
                if self.active.contains_key(&contact) {
                    tracing::warn!("touch down for already active contact {contact}");
                    return false;
                }
                let Some((x, y)) = Self::position(event, contact, output) else {
                    return false;
                };
                self.active.insert(
                    contact,
                    TouchPoint {
                        id: contact,
                        x,
                        y,
                        start_x: x,
                        start_y: y,
                        down_at_ms: event.time_ms,
                    },
                );
                engine.touch_down(handle, contact, x, y, event.time_ms);
                engine.touch_frame(handle);
                true
            }
            MotionAction::Move => {
                let mut moved = 0;
                for Contact { id, x, y } in &event.contacts {
                    if !x.is_finite() || !y.is_finite() {
                        continue;
                    }
                    let Some(point) = self.active.get_mut(id) else {
                        continue;
                    };
                    let (x, y) = output.clamp(*x, *y);
                    point.x = x;
                    point.y = y;
                    engine.touch_motion(handle, *id, x, y, event.time_ms);
                    moved += 1;
                }
                if moved == 0 {
                    return false;
                }
                engine.touch_frame(handle);
                true
            }
            MotionAction::Up { contact } => {
                let Some(point) = self.active.remove(&contact) else {
                    tracing::warn!("touch up for unknown contact {contact}");
                    return false;
                };
                crate::mtrace!(
                    logging::INPUT,
                    "contact {contact} up after {} ms",
                    event.time_ms.saturating_sub(point.down_at_ms)
                );
                engine.touch_up(handle, contact, event.time_ms);
                engine.touch_frame(handle);
                true
            }
            MotionAction::Cancel => {
                self.active.clear();
                engine.touch_cancel(handle);
                true
            }
            // Button and scroll actions are mouse-class; a touchscreen
            // event carrying them is malformed.
            MotionAction::Button { .. } | MotionAction::Scroll { .. } => false,
        }
    }

    /// Number of currently active contacts.
    pub fn active_contacts(&self) -> usize {
        self.active.len()
    }

    /// State of one active contact.
    pub fn contact(&self, id: i32) -> Option<&TouchPoint> {
        self.active.get(&id)
    }

    /// Drop all contact state.
    pub fn destroy(&mut self) {
        crate::mlog!(logging::SEAT, "Touch destroyed ({} contacts dropped)", self.active.len());
        self.active.clear();
    }

    fn position(event: &MotionEvent, id: i32, output: &Output) -> Option<(f64, f64)> {
        let contact = event.contact(id)?;
        if !contact.x.is_finite() || !contact.y.is_finite() {
            return None;
        }
        Some(output.clamp(contact.x, contact.y))
    }
}
