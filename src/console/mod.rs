//! The console the logger writes through.
//!
//! `StdConsole` talks to the process streams; `RecordingConsole` keeps every
//! call in memory so hosts and tests can inspect what was sent.

mod recording;
pub mod render;

pub use recording::{Call, RecordingConsole};
pub use render::{indent, render_arg, render_args};

use crate::arg::Arg;
use crate::channel::Channel;

pub trait Console {
    /// Invokes `channel` with the assembled argument list.
    fn dispatch(&mut self, channel: Channel, args: Vec<Arg>);
}

impl<C: Console + ?Sized> Console for &mut C {
    fn dispatch(&mut self, channel: Channel, args: Vec<Arg>) {
        (**self).dispatch(channel, args)
    }
}

impl<C: Console + ?Sized> Console for Box<C> {
    fn dispatch(&mut self, channel: Channel, args: Vec<Arg>) {
        (**self).dispatch(channel, args)
    }
}

/// Writes `log` and group labels to stdout, `warn` and `error` to stderr.
///
/// Write failures are not caught: the print macros panic if a stream is gone.
#[derive(Debug, Default)]
pub struct StdConsole {
    depth: usize,
}

impl StdConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of groups currently open.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Console for StdConsole {
    fn dispatch(&mut self, channel: Channel, args: Vec<Arg>) {
        match channel {
            Channel::Log => println!("{}", indent(&render_args(&args), self.depth)),
            Channel::Warn | Channel::Error => {
                eprintln!("{}", indent(&render_args(&args), self.depth))
            }
            Channel::Group => {
                if !args.is_empty() {
                    println!("{}", indent(&render_args(&args), self.depth));
                }
                self.depth += 1;
            }
            Channel::GroupEnd => self.depth = self.depth.saturating_sub(1),
        }
    }
}
