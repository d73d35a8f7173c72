// src/timestamp.rs
use crate::config::{LoggerConfig, TimestampStyle};
use crate::error::ConfigError;
use chrono::{DateTime, FixedOffset, Local, Locale};
use std::env;
use std::fs;

const FALLBACK_LOCALE: &str = "en_US";
const FALLBACK_ZONE: &str = "UTC";

/// Source of the current local time and the name of the zone it is in.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
    fn zone_name(&self) -> &str;
}

impl<K: Clock + ?Sized> Clock for &K {
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }

    fn zone_name(&self) -> &str {
        (**self).zone_name()
    }
}

/// The host wall clock. The zone name is resolved once, at construction.
#[derive(Debug, Clone)]
pub struct SystemClock {
    zone: String,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            zone: resolve_zone_name(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }

    fn zone_name(&self) -> &str {
        &self.zone
    }
}

/// A clock pinned to one instant.
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: DateTime<FixedOffset>,
    zone: String,
}

impl FixedClock {
    pub fn new(instant: DateTime<FixedOffset>, zone: impl Into<String>) -> Self {
        Self {
            instant,
            zone: zone.into(),
        }
    }

    pub fn set(&mut self, instant: DateTime<FixedOffset>) {
        self.instant = instant;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.instant
    }

    fn zone_name(&self) -> &str {
        &self.zone
    }
}

/// Builds the timestamp string appended to logged messages.
#[derive(Debug, Clone)]
pub struct TimestampFormatter {
    style: TimestampStyle,
    locale: Locale,
    date_format: String,
    time_format: String,
}

impl TimestampFormatter {
    pub fn from_config(config: &LoggerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::lenient(config))
    }

    /// Skips validation; an unknown locale falls back to the host's.
    pub(crate) fn lenient(config: &LoggerConfig) -> Self {
        let locale = config
            .locale
            .as_deref()
            .and_then(|name| parse_locale(name).ok())
            .unwrap_or_else(|| parse_locale(&host_locale()).unwrap_or(Locale::en_US));
        Self {
            style: config.style,
            locale,
            date_format: config.date_format.clone(),
            time_format: config.time_format.clone(),
        }
    }

    pub fn style(&self) -> TimestampStyle {
        self.style
    }

    pub fn format<K: Clock + ?Sized>(&self, clock: &K) -> String {
        let now = clock.now();
        let date = now.format_localized(&self.date_format, self.locale);
        let time = now.format_localized(&self.time_format, self.locale);
        match self.style {
            TimestampStyle::Short => format!("{} | {}", date, time),
            TimestampStyle::Full => format!(
                "{} | {} ({} {})",
                date,
                time,
                format_offset(now.offset().local_minus_utc()),
                clock.zone_name()
            ),
        }
    }
}

/// Formats an offset east of UTC as `+HH:MM` / `-HH:MM`.
///
/// UTC itself renders as `+00:00`.
pub fn format_offset(seconds_east: i32) -> String {
    let sign = if seconds_east < 0 { '-' } else { '+' };
    let seconds = seconds_east.unsigned_abs();
    format!("{}{:02}:{:02}", sign, seconds / 3600, (seconds % 3600) / 60)
}

/// Accepts `en_US` as well as `en-US`.
pub fn parse_locale(name: &str) -> Result<Locale, ConfigError> {
    let normalized = name.trim().replace('-', "_");
    Locale::try_from(normalized.as_str()).map_err(|_| ConfigError::UnknownLocale(name.to_string()))
}

/// The host's time locale from `LC_ALL`, `LC_TIME` or `LANG`.
pub fn host_locale() -> String {
    for var in ["LC_ALL", "LC_TIME", "LANG"] {
        if let Ok(value) = env::var(var) {
            let name = strip_encoding(&value);
            if name.is_empty() || name == "C" || name == "POSIX" {
                continue;
            }
            if parse_locale(name).is_ok() {
                log::debug!("locale {} taken from {}", name, var);
                return name.to_string();
            }
            log::debug!("ignoring unknown locale {:?} in {}", value, var);
        }
    }
    FALLBACK_LOCALE.to_string()
}

fn strip_encoding(value: &str) -> &str {
    let value = value.split('.').next().unwrap_or("");
    value.split('@').next().unwrap_or("").trim()
}

/// Resolves the host's IANA zone name from `TZ`, `/etc/localtime` or
/// `/etc/timezone`.
pub fn resolve_zone_name() -> String {
    if let Ok(tz) = env::var("TZ") {
        if let Some(name) = zone_from_tz(&tz) {
            log::debug!("time zone {} taken from TZ", name);
            return name;
        }
    }
    if let Ok(target) = fs::read_link("/etc/localtime") {
        if let Some(name) = zone_from_path(&target.to_string_lossy()) {
            log::debug!("time zone {} taken from /etc/localtime", name);
            return name;
        }
    }
    if let Ok(contents) = fs::read_to_string("/etc/timezone") {
        let name = contents.trim();
        if is_zone_name(name) {
            log::debug!("time zone {} taken from /etc/timezone", name);
            return name.to_string();
        }
    }
    log::debug!("time zone unknown, using {}", FALLBACK_ZONE);
    FALLBACK_ZONE.to_string()
}

fn zone_from_tz(tz: &str) -> Option<String> {
    let tz = tz.trim();
    let tz = tz.strip_prefix(':').unwrap_or(tz);
    if tz.is_empty() {
        return None;
    }
    if tz.starts_with('/') {
        return zone_from_path(tz);
    }
    Some(tz.to_string()).filter(|name| is_zone_name(name))
}

fn zone_from_path(path: &str) -> Option<String> {
    let (_, name) = path.split_once("zoneinfo/")?;
    let name = name.trim_matches('/');
    let name = name
        .strip_prefix("posix/")
        .or_else(|| name.strip_prefix("right/"))
        .unwrap_or(name);
    Some(name.to_string()).filter(|name| is_zone_name(name))
}

/// IANA names look like `UTC` or `Area/Location`. POSIX rules such as
/// `EST5EDT` or `UTC0` are rejected.
fn is_zone_name(name: &str) -> bool {
    if name == "UTC" {
        return true;
    }
    name.contains('/')
        && name.starts_with(|c: char| c.is_ascii_uppercase())
        && name.split('/').all(|part| !part.is_empty())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '+' | '/'))
}
