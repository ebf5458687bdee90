//! Central compositor lifecycle and dispatch root.
//!
//! The `Compositor` struct is the heart of Mariposa. It manages:
//! - The opaque engine handle (allocated at construction, released once)
//! - Event-loop attachment and the thread-affinity invariant
//! - Client process launches
//! - Routing of raw input events to the seat's device routers
//!
//! All gated operations take `&mut self`, so a dispatch or launch call
//! can never overlap `destroy`; a host that shares the compositor across
//! threads must serialize access itself, and the affinity check below
//! still rejects calls arriving from the wrong thread through such a
//! wrapper.

use std::thread::{self, ThreadId};

use crate::config::Client;
use crate::core::engine::{Engine, EngineHandle};
use crate::core::errors::{CoreError, Result};
use crate::core::input::{InputSource, KeyEvent, MotionEvent};
use crate::core::output::Output;
use crate::core::seat::{Seat, SeatCapabilities};
use crate::platform::PlatformContext;
use crate::util::logging;

/// One running compositor instance.
///
/// Lifecycle: `Created (unattached) → Attached → Detached → Attached → …
/// → Destroyed`. `Destroyed` is terminal; every operation except
/// `destroy` itself fails on a destroyed compositor.
pub struct Compositor {
    engine: Box<dyn Engine>,
    /// Live engine instance; `None` once released. `Option::take` in
    /// `destroy` is the live→released one-shot transition.
    handle: Option<EngineHandle>,

    output: Output,
    seat: Seat,

    /// Thread the compositor is bound to while attached to an event loop.
    assigned_thread: Option<ThreadId>,
}

impl Compositor {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Allocate an engine instance and build the seat and primary output.
    ///
    /// Fails only if the engine allocation fails; that error is fatal and
    /// propagates unchanged.
    pub fn new(context: &dyn PlatformContext, mut engine: Box<dyn Engine>) -> Result<Self> {
        let handle = engine.create()?;
        let output = Output::new(context.display_metrics());

        crate::mlog!(
            logging::COMPOSITOR,
            "Created compositor (engine instance {}, output {}x{}@{:.1})",
            handle.raw(),
            output.width(),
            output.height(),
            output.scale()
        );

        Ok(Self {
            engine,
            handle: Some(handle),
            output,
            seat: Seat::new("seat0"),
            assigned_thread: None,
        })
    }

    /// As `new`, then immediately launch the given client.
    pub fn with_client(
        context: &dyn PlatformContext,
        engine: Box<dyn Engine>,
        client: &Client,
    ) -> Result<Self> {
        let mut compositor = Self::new(context, engine)?;
        compositor.launch_client(client)?;
        Ok(compositor)
    }

    // =========================================================================
    // Event loop binding
    // =========================================================================

    /// Bind the compositor to the calling thread's event loop.
    ///
    /// Once attached, every gated operation must come from this thread
    /// until `detach_from_event_loop`. Attaching an already attached
    /// compositor fails, even from the same thread.
    pub fn attach_to_event_loop(&mut self) -> Result<()> {
        let handle = self.ensure_live()?;

        if self.assigned_thread.is_some() {
            return Err(CoreError::AlreadyAttached);
        }

        self.engine.attach_loop(handle)?;
        self.assigned_thread = Some(thread::current().id());

        crate::mlog!(logging::COMPOSITOR, "Attached to event loop");
        Ok(())
    }

    /// Unbind from the current event loop.
    ///
    /// A no-op when not attached. When attached, only the assigned
    /// thread may detach; anything else is an affinity violation.
    pub fn detach_from_event_loop(&mut self) -> Result<()> {
        let handle = self.ensure_live()?;

        if self.assigned_thread.is_none() {
            return Ok(());
        }
        self.ensure_correct_thread()?;

        self.engine.detach_loop(handle);
        self.assigned_thread = None;

        crate::mlog!(logging::COMPOSITOR, "Detached from event loop");
        Ok(())
    }

    /// Whether the compositor is currently bound to an event loop.
    pub fn is_attached(&self) -> bool {
        self.assigned_thread.is_some()
    }

    // =========================================================================
    // Client launch
    // =========================================================================

    /// Spawn a client process under this compositor.
    ///
    /// May be called any number of times over the compositor's life.
    /// Launch failures come back from the engine unmasked.
    pub fn launch_client(&mut self, client: &Client) -> Result<()> {
        let handle = self.ensure_live()?;
        self.ensure_correct_thread()?;

        crate::mlog!(
            logging::LAUNCH,
            "Launching client: {} (root: {})",
            client.command_lossy(),
            client.run_as_root()
        );
        self.engine
            .launch_client(handle, client.command(), client.run_as_root())
    }

    // =========================================================================
    // Input dispatch
    // =========================================================================

    /// Route a motion event to the device router matching its source.
    ///
    /// Mouse-class sources go to the pointer, touch-class sources to the
    /// touch device; every other source is unhandled (`Ok(false)`), never
    /// an error. Returns whether the event was consumed.
    pub fn dispatch_motion(&mut self, event: &MotionEvent) -> Result<bool> {
        let handle = self.ensure_live()?;
        self.ensure_correct_thread()?;

        match event.source {
            InputSource::Mouse => Ok(self.seat.pointer.handle_motion(
                event,
                &self.output,
                self.engine.as_mut(),
                handle,
            )),
            InputSource::Touchscreen => Ok(self.seat.touch.handle_motion(
                event,
                &self.output,
                self.engine.as_mut(),
                handle,
            )),
            // Unsupported source classes are handed back to the host
            _ => Ok(false),
        }
    }

    /// Route a key event to the keyboard.
    pub fn dispatch_key(&mut self, event: &KeyEvent) -> Result<bool> {
        let handle = self.ensure_live()?;
        self.ensure_correct_thread()?;

        Ok(self
            .seat
            .keyboard
            .handle_key(event, self.engine.as_mut(), handle))
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The single output this compositor drives.
    pub fn primary_output(&self) -> Result<&Output> {
        self.ensure_live()?;
        self.ensure_correct_thread()?;

        Ok(&self.output)
    }

    /// Read-only view of the seat and its routers.
    pub fn seat(&self) -> &Seat {
        &self.seat
    }

    /// Capabilities currently advertised for the seat.
    pub fn seat_capabilities(&self) -> SeatCapabilities {
        self.seat.capabilities()
    }

    /// Replace the seat's capability set; changed flags are forwarded to
    /// the engine.
    pub fn set_seat_capabilities(&mut self, caps: SeatCapabilities) -> Result<()> {
        let handle = self.ensure_live()?;
        self.ensure_correct_thread()?;

        self.seat
            .set_capabilities(caps, self.engine.as_mut(), handle);
        Ok(())
    }

    pub fn is_destroyed(&self) -> bool {
        self.handle.is_none()
    }

    // =========================================================================
    // Teardown
    // =========================================================================

    /// Tear the compositor down: touch, pointer, keyboard, seat, output,
    /// then release the engine instance.
    ///
    /// Idempotent — a second call finds the handle already released and
    /// performs no sub-destroys and no engine calls. Callable from any
    /// thread and in any attachment state.
    pub fn destroy(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };

        self.seat.destroy();
        crate::mlog!(logging::OUTPUT, "Primary output released");

        self.engine.destroy(handle);
        self.assigned_thread = None;

        crate::mlog!(logging::COMPOSITOR, "Compositor destroyed");
    }

    // =========================================================================
    // Invariant guards
    // =========================================================================

    /// Ensures that the compositor is not assigned to some other
    /// thread's event loop.
    fn ensure_correct_thread(&self) -> Result<()> {
        match self.assigned_thread {
            Some(owner) if owner != thread::current().id() => Err(CoreError::WrongThread),
            _ => Ok(()),
        }
    }

    /// Fail fast on any operation against a destroyed compositor.
    fn ensure_live(&self) -> Result<EngineHandle> {
        self.handle.ok_or(CoreError::Destroyed)
    }
}

impl Drop for Compositor {
    fn drop(&mut self) {
        self.destroy();
    }
}
