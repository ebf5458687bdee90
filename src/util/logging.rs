//! Standardized logging utility for Mariposa
//!
//! This module provides the `mlog!` macro which ensures all Rust logs
//! follow the `YYYY-MM-DD HH:MM:SS [MODULE] Message` format.



#[macro_export]
macro_rules! mlog {
    ($module:expr, $($arg:tt)*) => {{
        let now = chrono::Local::now();
        eprintln!("{} [{}] {}",
            now.format("%Y-%m-%d %H:%M:%S"),
            $module,
            format!($($arg)*)
        );
    }};
}

/// Trace-level sibling of `mlog!`. Silent unless MARIPOSA_TRACE is set.
#[macro_export]
macro_rules! mtrace {
    ($module:expr, $($arg:tt)*) => {{
        if std::env::var_os("MARIPOSA_TRACE").is_some() {
            let now = chrono::Local::now();
            eprintln!("{} [{}] {}",
                now.format("%Y-%m-%d %H:%M:%S%.3f"),
                $module,
                format!($($arg)*)
            );
        }
    }};
}

/// Standardized module identifiers
pub const MAIN: &str = "MAIN";
pub const CORE: &str = "CORE";
pub const COMPOSITOR: &str = "COMPOSITOR";
pub const ENGINE: &str = "ENGINE";
pub const SEAT: &str = "SEAT";
pub const INPUT: &str = "INPUT";
pub const OUTPUT: &str = "OUTPUT";
pub const LAUNCH: &str = "LAUNCH";
