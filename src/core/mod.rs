pub mod compositor;
pub mod engine;
pub mod errors;
pub mod input;
pub mod output;
pub mod seat;

// Re-export key types
pub use compositor::Compositor;
pub use engine::{Engine, EngineHandle, StubEngine};
pub use errors::CoreError;
pub use output::Output;
pub use seat::{Seat, SeatCapabilities};
