//! Chainable console logger.
//!
//! A [`Logger`] forwards messages to the console's `log`, `warn`, `error`,
//! `group` and `groupEnd` channels, optionally followed by a timestamp such as
//! `10/17/2026 | 9:30:00 AM (+00:00 UTC)`.

pub mod arg;
pub mod channel;
pub mod config;
pub mod console;
pub mod error;
pub mod logger;
pub mod shared;
pub mod timestamp;

pub use arg::{Arg, ErrorArg, NonFinite};
pub use channel::Channel;
pub use config::{DatePolicy, LoggerConfig, TimestampStyle};
pub use console::{Call, Console, RecordingConsole, StdConsole};
pub use error::ConfigError;
pub use logger::Logger;
pub use timestamp::{Clock, FixedClock, SystemClock, TimestampFormatter};
