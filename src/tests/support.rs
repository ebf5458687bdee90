//! Test support: an engine that records every call it receives.

use std::sync::{Arc, Mutex};

use crate::core::engine::{Engine, EngineHandle};
use crate::core::errors::{CoreError, Result};
use crate::core::input::{ButtonState, KeyState};

/// One recorded engine call.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    Create,
    Destroy,
    LaunchClient { command: Vec<u8>, run_as_root: bool },
    AttachLoop,
    DetachLoop,
    SetHasKeyboard(bool),
    SetHasTouch(bool),
    SetHasPointer(bool),
    PointerMotion { x: f64, y: f64 },
    PointerButton { button: u32, pressed: bool },
    PointerAxis { horizontal: f64, vertical: f64 },
    TouchDown { id: i32, x: f64, y: f64 },
    TouchMotion { id: i32, x: f64, y: f64 },
    TouchUp { id: i32 },
    TouchFrame,
    TouchCancel,
    Key { keycode: u32, pressed: bool },
}

/// Shared view of a `RecordingEngine`'s call log.
pub type CallLog = Arc<Mutex<Vec<EngineCall>>>;

/// Engine double that appends every call to a shared log.
pub struct RecordingEngine {
    calls: CallLog,
    fail_create: bool,
    fail_launch: bool,
}

impl RecordingEngine {
    /// Build an engine plus the log handle the test keeps.
    pub fn new() -> (Self, CallLog) {
        let calls: CallLog = Arc::default();
        (
            Self {
                calls: calls.clone(),
                fail_create: false,
                fail_launch: false,
            },
            calls,
        )
    }

    pub fn failing_create() -> Self {
        let (mut engine, _) = Self::new();
        engine.fail_create = true;
        engine
    }

    pub fn failing_launch() -> (Self, CallLog) {
        let (mut engine, calls) = Self::new();
        engine.fail_launch = true;
        (engine, calls)
    }

    fn record(&self, call: EngineCall) {
        self.calls.lock().unwrap().push(call);
    }
}

/// Calls recorded after the log was last inspected.
pub fn drain(log: &CallLog) -> Vec<EngineCall> {
    std::mem::take(&mut *log.lock().unwrap())
}

/// Input-notification calls only (lifecycle calls filtered out).
pub fn input_calls(log: &CallLog) -> Vec<EngineCall> {
    log.lock()
        .unwrap()
        .iter()
        .filter(|call| {
            !matches!(
                call,
                EngineCall::Create
                    | EngineCall::Destroy
                    | EngineCall::LaunchClient { .. }
                    | EngineCall::AttachLoop
                    | EngineCall::DetachLoop
                    | EngineCall::SetHasKeyboard(_)
                    | EngineCall::SetHasTouch(_)
                    | EngineCall::SetHasPointer(_)
            )
        })
        .cloned()
        .collect()
}

impl Engine for RecordingEngine {
    fn create(&mut self) -> Result<EngineHandle> {
        if self.fail_create {
            return Err(CoreError::engine_error("allocation failed"));
        }
        self.record(EngineCall::Create);
        Ok(EngineHandle::new(7))
    }

    fn destroy(&mut self, _handle: EngineHandle) {
        self.record(EngineCall::Destroy);
    }

    fn launch_client(
        &mut self,
        _handle: EngineHandle,
        command: &[u8],
        run_as_root: bool,
    ) -> Result<()> {
        if self.fail_launch {
            return Err(CoreError::engine_error("fork failed"));
        }
        self.record(EngineCall::LaunchClient {
            command: command.to_vec(),
            run_as_root,
        });
        Ok(())
    }

    fn attach_loop(&mut self, _handle: EngineHandle) -> Result<()> {
        self.record(EngineCall::AttachLoop);
        Ok(())
    }

    fn detach_loop(&mut self, _handle: EngineHandle) {
        self.record(EngineCall::DetachLoop);
    }

    fn set_has_keyboard(&mut self, _handle: EngineHandle, present: bool) {
        self.record(EngineCall::SetHasKeyboard(present));
    }

    fn set_has_touch(&mut self, _handle: EngineHandle, present: bool) {
        self.record(EngineCall::SetHasTouch(present));
    }

    fn set_has_pointer(&mut self, _handle: EngineHandle, present: bool) {
        self.record(EngineCall::SetHasPointer(present));
    }

    fn pointer_motion(&mut self, _handle: EngineHandle, x: f64, y: f64, _time_ms: u32) {
        self.record(EngineCall::PointerMotion { x, y });
    }

    fn pointer_button(
        &mut self,
        _handle: EngineHandle,
        button: u32,
        state: ButtonState,
        _time_ms: u32,
    ) {
        self.record(EngineCall::PointerButton {
            button,
            pressed: state == ButtonState::Pressed,
        });
    }

    fn pointer_axis(
        &mut self,
        _handle: EngineHandle,
        horizontal: f64,
        vertical: f64,
        _time_ms: u32,
    ) {
        self.record(EngineCall::PointerAxis {
            horizontal,
            vertical,
        });
    }

    fn touch_down(&mut self, _handle: EngineHandle, id: i32, x: f64, y: f64, _time_ms: u32) {
        self.record(EngineCall::TouchDown { id, x, y });
    }

    fn touch_motion(&mut self, _handle: EngineHandle, id: i32, x: f64, y: f64, _time_ms: u32) {
        self.record(EngineCall::TouchMotion { id, x, y });
    }

    fn touch_up(&mut self, _handle: EngineHandle, id: i32, _time_ms: u32) {
        self.record(EngineCall::TouchUp { id });
    }

    fn touch_frame(&mut self, _handle: EngineHandle) {
        self.record(EngineCall::TouchFrame);
    }

    fn touch_cancel(&mut self, _handle: EngineHandle) {
        self.record(EngineCall::TouchCancel);
    }

    fn key(&mut self, _handle: EngineHandle, keycode: u32, state: KeyState, _time_ms: u32) {
        self.record(EngineCall::Key {
            keycode,
            pressed: state == KeyState::Pressed,
        });
    }
}
