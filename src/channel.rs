// src/channel.rs
use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// The console operations a `Logger` can reach.
///
/// This is a closed set: the logger never indexes the console by an arbitrary
/// method name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Log,
    Warn,
    Error,
    Group,
    GroupEnd,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Log => "log",
            Channel::Warn => "warn",
            Channel::Error => "error",
            Channel::Group => "group",
            Channel::GroupEnd => "groupEnd",
        }
    }

    /// `group` and `groupEnd` manage nesting rather than carry a message.
    pub fn is_grouping(&self) -> bool {
        matches!(self, Channel::Group | Channel::GroupEnd)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "log" => Ok(Channel::Log),
            "warn" => Ok(Channel::Warn),
            "error" => Ok(Channel::Error),
            "group" => Ok(Channel::Group),
            "groupEnd" | "group-end" | "group_end" => Ok(Channel::GroupEnd),
            other => Err(ConfigError::UnknownChannel(other.to_string())),
        }
    }
}
