// src/console/recording.rs
use super::render::{indent, render_args};
use super::Console;
use crate::arg::Arg;
use crate::channel::Channel;

/// One console invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub channel: Channel,
    pub args: Vec<Arg>,
}

/// Keeps every dispatched call in order instead of printing it.
#[derive(Debug, Default, Clone)]
pub struct RecordingConsole {
    calls: Vec<Call>,
    depth: usize,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn clear(&mut self) {
        self.calls.clear();
        self.depth = 0;
    }

    /// The text a `StdConsole` would have printed, one entry per visible line,
    /// tagged with the channel it went to.
    pub fn transcript(&self) -> Vec<(Channel, String)> {
        let mut depth = 0usize;
        let mut lines = Vec::new();
        for call in &self.calls {
            match call.channel {
                Channel::GroupEnd => depth = depth.saturating_sub(1),
                Channel::Group => {
                    if !call.args.is_empty() {
                        lines.push((call.channel, indent(&render_args(&call.args), depth)));
                    }
                    depth += 1;
                }
                _ => lines.push((call.channel, indent(&render_args(&call.args), depth))),
            }
        }
        lines
    }
}

impl Console for RecordingConsole {
    fn dispatch(&mut self, channel: Channel, args: Vec<Arg>) {
        match channel {
            Channel::Group => self.depth += 1,
            Channel::GroupEnd => self.depth = self.depth.saturating_sub(1),
            _ => {}
        }
        self.calls.push(Call { channel, args });
    }
}
