// Mariposa Compositor Core
// Copyright (c) 2026
//
// Lifecycle and input-dispatch core for an embedded Wayland compositor.
// All protocol and rendering work lives behind the opaque engine boundary
// (core/engine.rs); platform adapters deliver raw input events and
// lifecycle calls through core::Compositor.

pub mod config;
pub mod core;
pub mod platform;
pub mod prelude;
pub mod util;

// Re-export the primary API at crate root
pub use crate::config::Client;
pub use crate::core::compositor::Compositor;
pub use crate::core::engine::{Engine, EngineHandle, StubEngine};
pub use crate::core::errors::CoreError;
pub use crate::core::input::{
    ButtonState, Contact, InputSource, KeyEvent, KeyState, MotionAction, MotionEvent,
};
pub use crate::core::output::Output;
pub use crate::core::seat::{Seat, SeatCapabilities};
pub use crate::platform::{DisplayMetrics, HeadlessContext, PlatformContext};

#[cfg(test)]
mod tests;
