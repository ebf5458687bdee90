//! Opaque engine boundary.
//!
//! The engine performs all actual Wayland protocol work: client sockets,
//! surfaces, buffers, rendering. This core never looks inside it. It
//! allocates a handle at compositor construction, forwards lifecycle and
//! input notifications through the `Engine` trait, and releases the handle
//! exactly once at destroy.

use crate::core::errors::Result;
use crate::core::input::{ButtonState, KeyState};

/// Opaque token identifying one live engine-side compositor instance.
///
/// A handle is only meaningful to the engine that issued it. The
/// compositor tracks liveness itself (`Option<EngineHandle>`); a handle
/// value is never reused after release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EngineHandle(u64);

impl EngineHandle {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Interface the core requires from the protocol engine.
///
/// These calls are the only points where the core crosses into the engine.
/// Lifecycle calls may fail; input notifications are fire-and-forget, any
/// asynchronous completion is the engine's concern.
pub trait Engine: Send {
    // -- Lifecycle --

    /// Allocate a new engine-side compositor instance.
    fn create(&mut self) -> Result<EngineHandle>;

    /// Release an instance. The handle is invalid afterwards.
    fn destroy(&mut self, handle: EngineHandle);

    /// Spawn a client process under the compositor.
    fn launch_client(&mut self, handle: EngineHandle, command: &[u8], run_as_root: bool)
        -> Result<()>;

    /// Bind the instance to the calling thread's event loop.
    fn attach_loop(&mut self, handle: EngineHandle) -> Result<()>;

    /// Unbind the instance from its event loop.
    fn detach_loop(&mut self, handle: EngineHandle);

    // -- Seat capabilities --

    fn set_has_keyboard(&mut self, handle: EngineHandle, present: bool);
    fn set_has_touch(&mut self, handle: EngineHandle, present: bool);
    fn set_has_pointer(&mut self, handle: EngineHandle, present: bool);

    // -- Input notifications --

    fn pointer_motion(&mut self, handle: EngineHandle, x: f64, y: f64, time_ms: u32);
    fn pointer_button(
        &mut self,
        handle: EngineHandle,
        button: u32,
        state: ButtonState,
        time_ms: u32,
    );
    fn pointer_axis(&mut self, handle: EngineHandle, horizontal: f64, vertical: f64, time_ms: u32);

    fn touch_down(&mut self, handle: EngineHandle, id: i32, x: f64, y: f64, time_ms: u32);
    fn touch_motion(&mut self, handle: EngineHandle, id: i32, x: f64, y: f64, time_ms: u32);
    fn touch_up(&mut self, handle: EngineHandle, id: i32, time_ms: u32);
    fn touch_frame(&mut self, handle: EngineHandle);
    fn touch_cancel(&mut self, handle: EngineHandle);

    fn key(&mut self, handle: EngineHandle, keycode: u32, state: KeyState, time_ms: u32);
}

/// No-op engine for headless runs and testing.
///
/// Hands out sequential handles and logs every notification at trace
/// level. Real deployments provide an engine backed by the native
/// protocol library.
pub struct StubEngine {
    next_handle: u64,
}

impl StubEngine {
    pub fn new() -> Self {
        Self { next_handle: 1 }
    }
}

impl Default for StubEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for StubEngine {
    fn create(&mut self) -> Result<EngineHandle> {
        let handle = EngineHandle::new(self.next_handle);
        self.next_handle += 1;
        tracing::info!("StubEngine: created instance {}", handle.raw());
        Ok(handle)
    }

    fn destroy(&mut self, handle: EngineHandle) {
        tracing::info!("StubEngine: destroyed instance {}", handle.raw());
    }

    fn launch_client(
        &mut self,
        handle: EngineHandle,
        command: &[u8],
        run_as_root: bool,
    ) -> Result<()> {
        tracing::info!(
            "StubEngine: launch on {}: {} (root: {})",
            handle.raw(),
            String::from_utf8_lossy(command),
            run_as_root
        );
        Ok(())
    }

    fn attach_loop(&mut self, handle: EngineHandle) -> Result<()> {
        tracing::info!("StubEngine: attached {} to event loop", handle.raw());
        Ok(())
    }

    fn detach_loop(&mut self, handle: EngineHandle) {
        tracing::info!("StubEngine: detached {} from event loop", handle.raw());
    }

    fn set_has_keyboard(&mut self, _handle: EngineHandle, present: bool) {
        tracing::debug!("StubEngine: keyboard present: {}", present);
    }

    fn set_has_touch(&mut self, _handle: EngineHandle, present: bool) {
        tracing::debug!("StubEngine: touch present: {}", present);
    }

    fn set_has_pointer(&mut self, _handle: EngineHandle, present: bool) {
        tracing::debug!("StubEngine: pointer present: {}", present);
    }

    fn pointer_motion(&mut self, _handle: EngineHandle, x: f64, y: f64, time_ms: u32) {
        tracing::trace!("StubEngine: pointer motion ({x}, {y}) at {time_ms}");
    }

    fn pointer_button(
        &mut self,
        _handle: EngineHandle,
        button: u32,
        state: ButtonState,
        time_ms: u32,
    ) {
        tracing::trace!("StubEngine: pointer button {button:#x} {state:?} at {time_ms}");
    }

    fn pointer_axis(&mut self, _handle: EngineHandle, horizontal: f64, vertical: f64, time_ms: u32) {
        tracing::trace!("StubEngine: pointer axis ({horizontal}, {vertical}) at {time_ms}");
    }

    fn touch_down(&mut self, _handle: EngineHandle, id: i32, x: f64, y: f64, time_ms: u32) {
        tracing::trace!("StubEngine: touch down {id} at ({x}, {y}) {time_ms}");
    }

    fn touch_motion(&mut self, _handle: EngineHandle, id: i32, x: f64, y: f64, time_ms: u32) {
        tracing::trace!("StubEngine: touch motion {id} at ({x}, {y}) {time_ms}");
    }

    fn touch_up(&mut self, _handle: EngineHandle, id: i32, time_ms: u32) {
        tracing::trace!("StubEngine: touch up {id} at {time_ms}");
    }

    fn touch_frame(&mut self, _handle: EngineHandle) {
        tracing::trace!("StubEngine: touch frame");
    }

    fn touch_cancel(&mut self, _handle: EngineHandle) {
        tracing::trace!("StubEngine: touch cancel");
    }

    fn key(&mut self, _handle: EngineHandle, keycode: u32, state: KeyState, time_ms: u32) {
        tracing::trace!("StubEngine: key {keycode} {state:?} at {time_ms}");
    }
}
