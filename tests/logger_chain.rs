use chainlog::console::render_arg;
use chainlog::{
    Arg, Channel, DatePolicy, FixedClock, Logger, LoggerConfig, RecordingConsole, TimestampStyle,
};
use chrono::{FixedOffset, TimeZone};
use serde_json::json;

fn clock(offset_hours: i32, zone: &str) -> FixedClock {
    let offset = FixedOffset::east_opt(offset_hours * 3600).unwrap();
    FixedClock::new(offset.with_ymd_and_hms(2026, 1, 5, 18, 0, 7).unwrap(), zone)
}

fn logger_with(config: LoggerConfig, clock: FixedClock) -> Logger<RecordingConsole, FixedClock> {
    let config = LoggerConfig {
        locale: Some("en_US".to_string()),
        ..config
    };
    Logger::with_parts(RecordingConsole::new(), clock, &config).expect("valid config")
}

#[test]
fn forwards_any_value_unchanged() {
    let mut logger = logger_with(LoggerConfig::new(false), clock(0, "UTC"));
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "Error text");
    let values = vec![
        Arg::Undefined,
        Arg::from(None::<String>),
        Arg::from(666),
        Arg::from(f64::NAN),
        Arg::from(f64::INFINITY),
        Arg::from(f64::NEG_INFINITY),
        Arg::from(false),
        Arg::from(vec!["a", "b"]),
        Arg::from(json!({"id": 124, "name": "Вася"})),
        Arg::error(&io),
    ];
    for value in &values {
        logger.log(value.clone()).warn(value.clone()).error(value.clone());
    }

    let calls = logger.console().calls();
    assert_eq!(calls.len(), values.len() * 3);
    for (i, value) in values.iter().enumerate() {
        let chunk = &calls[i * 3..i * 3 + 3];
        assert_eq!(chunk[0].channel, Channel::Log);
        assert_eq!(chunk[1].channel, Channel::Warn);
        assert_eq!(chunk[2].channel, Channel::Error);
        for call in chunk {
            assert_eq!(call.args, vec![value.clone()]);
        }
    }

    let rendered: Vec<String> = calls[9..18]
        .iter()
        .step_by(3)
        .map(|call| render_arg(&call.args[0]))
        .collect();
    assert_eq!(rendered, vec!["NaN", "Infinity", "-Infinity"]);
}

#[test]
fn chained_group_issues_calls_in_order() {
    let mut logger = logger_with(LoggerConfig::new(false), clock(0, "UTC"));
    logger.group("G").log("a").log("b").group_end();

    let calls: Vec<(Channel, Vec<Arg>)> = logger
        .console()
        .calls()
        .iter()
        .map(|c| (c.channel, c.args.clone()))
        .collect();
    assert_eq!(
        calls,
        vec![
            (Channel::Group, vec![Arg::from("G")]),
            (Channel::Log, vec![Arg::from("a")]),
            (Channel::Log, vec![Arg::from("b")]),
            (Channel::GroupEnd, vec![]),
        ]
    );
    assert_eq!(
        logger.console().transcript(),
        vec![
            (Channel::Group, "G".to_string()),
            (Channel::Log, "  a".to_string()),
            (Channel::Log, "  b".to_string()),
        ]
    );
}

#[test]
fn hello_world_with_timestamp() {
    let mut logger = logger_with(LoggerConfig::new(true), clock(0, "UTC"));
    logger.log("Hello world");
    assert_eq!(
        logger.console().calls()[0].args,
        vec![
            Arg::from("Hello world"),
            Arg::from("1/5/2026 | 6:00:07 PM (+00:00 UTC)")
        ]
    );
}

#[test]
fn negative_offsets_keep_their_sign() {
    let mut logger = logger_with(LoggerConfig::new(true), clock(-3, "America/Sao_Paulo"));
    logger.error("x");
    let stamp = logger.console().calls()[0].args[1].as_str().unwrap().to_string();
    assert!(stamp.ends_with("(-03:00 America/Sao_Paulo)"), "{}", stamp);
}

#[test]
fn warning_without_timestamp_has_one_argument() {
    let mut logger = logger_with(LoggerConfig::new(false), clock(0, "UTC"));
    logger.warn("Warning text");
    let call = &logger.console().calls()[0];
    assert_eq!(call.channel, Channel::Warn);
    assert_eq!(call.args, vec![Arg::from("Warning text")]);
}

#[test]
fn with_date_applies_once_under_auto_reset() {
    let config = LoggerConfig {
        policy: DatePolicy::AutoReset,
        style: TimestampStyle::Short,
        ..LoggerConfig::new(false)
    };
    let mut logger = logger_with(config, clock(0, "UTC"));
    logger.with_date().log("x").log("y");

    let calls = logger.console().calls();
    assert_eq!(calls[0].args, vec![Arg::from("x"), Arg::from("1/5/2026 | 6:00:07 PM")]);
    assert_eq!(calls[1].args, vec![Arg::from("y")]);
}

#[test]
fn timestamps_within_a_second_match() {
    let mut logger = logger_with(LoggerConfig::new(true), clock(2, "Europe/Helsinki"));
    logger.log("first").log("second");
    let calls = logger.console().calls();
    assert_eq!(calls[0].args[1], calls[1].args[1]);
}

#[test]
fn rejects_invalid_config() {
    let config = LoggerConfig {
        time_format: "%Q".to_string(),
        ..LoggerConfig::default()
    };
    assert!(Logger::with_parts(RecordingConsole::new(), clock(0, "UTC"), &config).is_err());
}

#[test]
fn with_date_applies_once_on_default_auto_reset_logger() {
    let config = LoggerConfig {
        policy: DatePolicy::AutoReset,
        ..LoggerConfig::default()
    };
    let mut logger = logger_with(config, clock(0, "UTC"));
    logger.with_date().log("x").log("y");

    let calls = logger.console().calls();
    assert_eq!(
        calls[0].args,
        vec![
            Arg::from("x"),
            Arg::from("1/5/2026 | 6:00:07 PM (+00:00 UTC)")
        ]
    );
    assert_eq!(calls[1].args, vec![Arg::from("y")]);
}
