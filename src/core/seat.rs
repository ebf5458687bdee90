//! Seat: the unified input endpoint.
//!
//! A seat groups the pointer, touch and keyboard routers into one
//! addressable endpoint and owns the capability flags advertised to the
//! engine. The compositor owns exactly one seat; the routers live and
//! die with it.

use bitflags::bitflags;

use crate::core::engine::{Engine, EngineHandle};
use crate::core::input::{KeyboardDevice, PointerDevice, TouchDevice};
use crate::util::logging;

bitflags! {
    /// Which input device classes the seat currently offers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SeatCapabilities: u32 {
        const POINTER = 1;
        const KEYBOARD = 2;
        const TOUCH = 4;
    }
}

/// One logical seat and its three device routers.
#[derive(Debug)]
pub struct Seat {
    /// Seat name
    pub name: String,
    capabilities: SeatCapabilities,
    /// Pointer sub-state (position, buttons)
    pub pointer: PointerDevice,
    /// Touch sub-state (active contacts)
    pub touch: TouchDevice,
    /// Keyboard sub-state (pressed keys, repeat config)
    pub keyboard: KeyboardDevice,
}

impl Seat {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            capabilities: SeatCapabilities::empty(),
            pointer: PointerDevice::new(),
            touch: TouchDevice::new(),
            keyboard: KeyboardDevice::new(),
        }
    }

    /// Currently advertised capabilities.
    pub fn capabilities(&self) -> SeatCapabilities {
        self.capabilities
    }

    pub fn has_pointer(&self) -> bool {
        self.capabilities.contains(SeatCapabilities::POINTER)
    }

    pub fn has_keyboard(&self) -> bool {
        self.capabilities.contains(SeatCapabilities::KEYBOARD)
    }

    pub fn has_touch(&self) -> bool {
        self.capabilities.contains(SeatCapabilities::TOUCH)
    }

    /// Replace the capability set, forwarding each changed flag to the
    /// engine.
    pub fn set_capabilities(
        &mut self,
        caps: SeatCapabilities,
        engine: &mut dyn Engine,
        handle: EngineHandle,
    ) {
        let changed = self.capabilities ^ caps;
        if changed.contains(SeatCapabilities::POINTER) {
            engine.set_has_pointer(handle, caps.contains(SeatCapabilities::POINTER));
        }
        if changed.contains(SeatCapabilities::KEYBOARD) {
            engine.set_has_keyboard(handle, caps.contains(SeatCapabilities::KEYBOARD));
        }
        if changed.contains(SeatCapabilities::TOUCH) {
            engine.set_has_touch(handle, caps.contains(SeatCapabilities::TOUCH));
        }
        if !changed.is_empty() {
            crate::mlog!(logging::SEAT, "Capabilities now {:?}", caps);
        }
        self.capabilities = caps;
    }

    /// Tear down the routers in fixed order (touch, pointer, keyboard),
    /// then the seat's own state. Called from the compositor's destroy
    /// path only.
    pub(crate) fn destroy(&mut self) {
        self.touch.destroy();
        self.pointer.destroy();
        self.keyboard.destroy();
        self.capabilities = SeatCapabilities::empty();
        crate::mlog!(logging::SEAT, "Seat '{}' destroyed", self.name);
    }
}
