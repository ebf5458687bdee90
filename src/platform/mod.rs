pub mod api;

pub use api::{DisplayMetrics, HeadlessContext, PlatformContext};
