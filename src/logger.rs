// src/logger.rs
use crate::arg::Arg;
use crate::channel::Channel;
use crate::config::{DatePolicy, LoggerConfig};
use crate::console::{Console, StdConsole};
use crate::error::ConfigError;
use crate::timestamp::{Clock, SystemClock, TimestampFormatter};

/// Chainable console logger.
///
/// Every method returns `&mut Self`, so calls can be strung together:
///
/// ```no_run
/// use chainlog::Logger;
///
/// let mut logger = Logger::new(false);
/// logger.group("Group name").log("Hello").log("world").group_end();
/// ```
///
/// A `Logger` is not synchronized. Share one across threads behind a lock
/// (see [`crate::shared::logger`]) or give each thread its own.
pub struct Logger<C: Console = StdConsole, K: Clock = SystemClock> {
    console: C,
    clock: K,
    formatter: TimestampFormatter,
    policy: DatePolicy,
    include_timestamp: bool,
}

impl Logger {
    /// A stdout/stderr logger using the default timestamp format.
    pub fn new(include_timestamp: bool) -> Self {
        let config = LoggerConfig::new(include_timestamp);
        Self::assemble(
            StdConsole::new(),
            SystemClock::new(),
            TimestampFormatter::lenient(&config),
            &config,
        )
    }

    pub fn from_config(config: &LoggerConfig) -> Result<Self, ConfigError> {
        Self::with_parts(StdConsole::new(), SystemClock::new(), config)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(true)
    }
}

impl<C: Console, K: Clock> Logger<C, K> {
    pub fn with_parts(console: C, clock: K, config: &LoggerConfig) -> Result<Self, ConfigError> {
        let formatter = TimestampFormatter::from_config(config)?;
        Ok(Self::assemble(console, clock, formatter, config))
    }

    fn assemble(console: C, clock: K, formatter: TimestampFormatter, config: &LoggerConfig) -> Self {
        Self {
            console,
            clock,
            formatter,
            policy: config.policy,
            include_timestamp: config.include_timestamp,
        }
    }

    pub fn log(&mut self, message: impl Into<Arg>) -> &mut Self {
        let flag = self.include_timestamp;
        self.handler(Channel::Log, Some(message.into()), flag)
    }

    pub fn warn(&mut self, message: impl Into<Arg>) -> &mut Self {
        let flag = self.include_timestamp;
        self.handler(Channel::Warn, Some(message.into()), flag)
    }

    pub fn error(&mut self, message: impl Into<Arg>) -> &mut Self {
        let flag = self.include_timestamp;
        self.handler(Channel::Error, Some(message.into()), flag)
    }

    /// Like [`Logger::log`], with the timestamp decided for this call only.
    pub fn log_dated(&mut self, message: impl Into<Arg>, include_timestamp: bool) -> &mut Self {
        self.handler(Channel::Log, Some(message.into()), include_timestamp)
    }

    pub fn warn_dated(&mut self, message: impl Into<Arg>, include_timestamp: bool) -> &mut Self {
        self.handler(Channel::Warn, Some(message.into()), include_timestamp)
    }

    pub fn error_dated(&mut self, message: impl Into<Arg>, include_timestamp: bool) -> &mut Self {
        self.handler(Channel::Error, Some(message.into()), include_timestamp)
    }

    /// Opens a group labelled `name`. Group labels are never timestamped.
    pub fn group(&mut self, name: impl Into<Arg>) -> &mut Self {
        self.handler(Channel::Group, Some(name.into()), false)
    }

    pub fn group_end(&mut self) -> &mut Self {
        self.handler(Channel::GroupEnd, None, false)
    }

    pub fn with_date(&mut self) -> &mut Self {
        self.include_timestamp = true;
        self
    }

    pub fn without_date(&mut self) -> &mut Self {
        self.include_timestamp = false;
        self
    }

    pub fn policy(&self) -> DatePolicy {
        self.policy
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    fn handler(&mut self, channel: Channel, message: Option<Arg>, include_timestamp: bool) -> &mut Self {
        let mut args: Vec<Arg> = message.into_iter().collect();
        if include_timestamp {
            args.push(Arg::from(self.formatter.format(&self.clock)));
        }
        self.console.dispatch(channel, args);

        if self.policy == DatePolicy::AutoReset && !channel.is_grouping() {
            self.include_timestamp = false;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimestampStyle;
    use crate::console::RecordingConsole;
    use crate::timestamp::FixedClock;
    use chrono::{FixedOffset, TimeZone};

    const STAMP: &str = "10/17/2026 | 9:30:00 AM (+00:00 UTC)";

    fn recorder(config: LoggerConfig) -> Logger<RecordingConsole, FixedClock> {
        let instant = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2026, 10, 17, 9, 30, 0)
            .unwrap();
        let config = LoggerConfig {
            locale: Some("en_US".to_string()),
            ..config
        };
        Logger::with_parts(RecordingConsole::new(), FixedClock::new(instant, "UTC"), &config).unwrap()
    }

    fn args_of(logger: &Logger<RecordingConsole, FixedClock>) -> Vec<Vec<Arg>> {
        logger.console().calls().iter().map(|c| c.args.clone()).collect()
    }

    #[test]
    fn appends_timestamp_when_enabled() {
        let mut logger = recorder(LoggerConfig::new(true));
        logger.log("Hello world");
        assert_eq!(args_of(&logger), vec![vec![Arg::from("Hello world"), Arg::from(STAMP)]]);
    }

    #[test]
    fn forwards_message_alone_when_disabled() {
        let mut logger = recorder(LoggerConfig::new(false));
        logger.warn("Warning text");
        let call = &logger.console().calls()[0];
        assert_eq!(call.channel, Channel::Warn);
        assert_eq!(call.args, vec![Arg::from("Warning text")]);
    }

    #[test]
    fn per_call_override_does_not_stick() {
        let mut logger = recorder(LoggerConfig::new(true));
        logger.log_dated("quiet", false).error("loud");
        let args = args_of(&logger);
        assert_eq!(args[0].len(), 1);
        assert_eq!(args[1].len(), 2);
    }

    #[test]
    fn sticky_toggle_under_per_call_default() {
        let mut logger = recorder(LoggerConfig::new(false));
        logger.with_date().log("x").log("y").without_date().log("z");
        let lens: Vec<usize> = args_of(&logger).iter().map(Vec::len).collect();
        assert_eq!(lens, vec![2, 2, 1]);
    }

    #[test]
    fn auto_reset_consumes_toggle() {
        let mut logger = recorder(LoggerConfig {
            policy: DatePolicy::AutoReset,
            ..LoggerConfig::new(false)
        });
        logger.with_date().log("x").log("y");
        let args = args_of(&logger);
        assert_eq!(args[0], vec![Arg::from("x"), Arg::from(STAMP)]);
        assert_eq!(args[1], vec![Arg::from("y")]);
    }

    #[test]
    fn auto_reset_survives_groups() {
        let mut logger = recorder(LoggerConfig {
            policy: DatePolicy::AutoReset,
            ..LoggerConfig::new(true)
        });
        logger.group("G").with_date().group("H").log("a").log("b").group_end();
        let args = args_of(&logger);
        assert_eq!(args[2], vec![Arg::from("a"), Arg::from(STAMP)]);
        assert_eq!(args[3], vec![Arg::from("b")]);
    }

    #[test]
    fn auto_reset_drops_initial_flag_after_first_message() {
        let mut logger = recorder(LoggerConfig {
            policy: DatePolicy::AutoReset,
            ..LoggerConfig::default()
        });
        logger.log("first").log("second").with_date().warn("third");
        let lens: Vec<usize> = args_of(&logger).iter().map(Vec::len).collect();
        assert_eq!(lens, vec![2, 1, 2]);
    }

    #[test]
    fn short_style_timestamp() {
        let mut logger = recorder(LoggerConfig {
            style: TimestampStyle::Short,
            ..LoggerConfig::new(true)
        });
        logger.error(Arg::Undefined);
        assert_eq!(
            args_of(&logger),
            vec![vec![Arg::Undefined, Arg::from("10/17/2026 | 9:30:00 AM")]]
        );
    }

    #[test]
    fn groups_are_never_dated() {
        let mut logger = recorder(LoggerConfig::new(true));
        logger.group("G").group_end();
        let calls = logger.console().calls();
        assert_eq!(calls[0].args, vec![Arg::from("G")]);
        assert!(calls[1].args.is_empty());
        assert_eq!(logger.into_console().depth(), 0);
    }
}
