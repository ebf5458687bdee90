//! Platform input event model and device routers.
//!
//! Platform adapters translate their native event shapes into
//! `MotionEvent` / `KeyEvent` values and hand them to the compositor's
//! dispatch calls. The routers in the submodules turn those values into
//! engine-level notifications for one seat.

pub mod keyboard;
pub mod pointer;
pub mod touch;

pub use keyboard::KeyboardDevice;
pub use pointer::PointerDevice;
pub use touch::TouchDevice;

/// Button/Key state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Released = 0,
    Pressed = 1,
}

pub type ButtonState = KeyState;

/// Source-device classification of a motion event.
///
/// Mouse-class sources route to the pointer, touch-class sources to the
/// touch device. Every other class is reported back to the host as
/// unhandled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Mouse,
    Touchscreen,
    Trackball,
    Stylus,
    Unknown,
}

/// One contact position carried by a motion event.
///
/// Mouse events carry a single contact; touch events carry the positions
/// of all currently active contacts, each tagged with the platform's
/// stable contact identifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub id: i32,
    pub x: f64,
    pub y: f64,
}

/// What a motion event reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionAction {
    /// A contact (or the primary mouse button) went down.
    Down { contact: i32 },
    /// One or more contacts moved.
    Move,
    /// A contact (or the primary mouse button) was lifted.
    Up { contact: i32 },
    /// The platform aborted the current gesture.
    Cancel,
    /// An explicit (non-primary) button change, mouse-class only.
    Button { button: u32, state: ButtonState },
    /// Scroll wheel / axis motion, mouse-class only.
    Scroll { horizontal: f64, vertical: f64 },
}

/// Raw motion event as delivered by the platform.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionEvent {
    pub source: InputSource,
    pub action: MotionAction,
    pub contacts: Vec<Contact>,
    pub time_ms: u32,
}

impl MotionEvent {
    /// Mouse movement to an absolute position.
    pub fn mouse_move(x: f64, y: f64, time_ms: u32) -> Self {
        Self {
            source: InputSource::Mouse,
            action: MotionAction::Move,
            contacts: vec![Contact { id: 0, x, y }],
            time_ms,
        }
    }

    /// Mouse button change at the pointer's current position.
    pub fn mouse_button(button: u32, state: ButtonState, time_ms: u32) -> Self {
        Self {
            source: InputSource::Mouse,
            action: MotionAction::Button { button, state },
            contacts: Vec::new(),
            time_ms,
        }
    }

    /// Touch contact going down.
    pub fn touch_down(id: i32, x: f64, y: f64, time_ms: u32) -> Self {
        Self {
            source: InputSource::Touchscreen,
            action: MotionAction::Down { contact: id },
            contacts: vec![Contact { id, x, y }],
            time_ms,
        }
    }

    /// Movement of the given active contacts.
    pub fn touch_move(contacts: Vec<Contact>, time_ms: u32) -> Self {
        Self {
            source: InputSource::Touchscreen,
            action: MotionAction::Move,
            contacts,
            time_ms,
        }
    }

    /// Touch contact lifted.
    pub fn touch_up(id: i32, time_ms: u32) -> Self {
        Self {
            source: InputSource::Touchscreen,
            action: MotionAction::Up { contact: id },
            contacts: Vec::new(),
            time_ms,
        }
    }

    /// The first contact position, if any.
    pub fn primary_contact(&self) -> Option<&Contact> {
        self.contacts.first()
    }

    /// The position reported for a specific contact identifier.
    pub fn contact(&self, id: i32) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }
}

/// Raw key event as delivered by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub keycode: u32,
    pub state: KeyState,
    pub time_ms: u32,
}

impl KeyEvent {
    pub fn new(keycode: u32, state: KeyState, time_ms: u32) -> Self {
        Self {
            keycode,
            state,
            time_ms,
        }
    }
}
