// src/main.rs
use anyhow::Context as _;
use chainlog::{Arg, Channel, Clock, Console, LoggerConfig, Logger};
use clap::{Arg as CliArg, ArgAction, Command};
use serde::Serialize;
use std::io::BufRead;

#[derive(Serialize)]
struct DemoUser {
    id: u32,
    name: &'static str,
}

fn main() -> anyhow::Result<()> {
    let matches = Command::new("chainlog")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Write messages to the console with optional timestamps.")
        .arg(
            CliArg::new("MESSAGE")
                .help("Messages to write; read from STDIN, one per line, when omitted")
                .num_args(0..)
                .index(1),
        )
        .arg(
            CliArg::new("channel")
                .short('c')
                .long("channel")
                .help("Console channel to write to")
                .value_name("CHANNEL")
                .value_parser(["log", "warn", "error"])
                .default_value("log"),
        )
        .arg(
            CliArg::new("group")
                .short('g')
                .long("group")
                .help("Wrap the messages in a group with this label")
                .value_name("NAME"),
        )
        .arg(
            CliArg::new("date")
                .long("date")
                .help("Append a timestamp to every message")
                .action(ArgAction::SetTrue)
                .conflicts_with("no-date"),
        )
        .arg(
            CliArg::new("no-date")
                .long("no-date")
                .help("Do not append timestamps")
                .action(ArgAction::SetTrue),
        )
        .arg(
            CliArg::new("policy")
                .long("policy")
                .help("What happens to the timestamp flag after a message")
                .value_name("POLICY")
                .value_parser(["per-call-default", "auto-reset"]),
        )
        .arg(
            CliArg::new("style")
                .long("style")
                .help("Timestamp layout")
                .value_name("STYLE")
                .value_parser(["full", "short"]),
        )
        .arg(
            CliArg::new("locale")
                .long("locale")
                .help("Locale for timestamps, e.g. en_US or ru_RU")
                .value_name("LOCALE"),
        )
        .arg(
            CliArg::new("config")
                .long("config")
                .help("YAML or JSON logger config")
                .value_name("FILE"),
        )
        .arg(
            CliArg::new("json")
                .long("json")
                .help("Parse each message as a JSON value")
                .action(ArgAction::SetTrue),
        )
        .arg(
            CliArg::new("demo")
                .long("demo")
                .help("Write a sample of every kind of value and channel")
                .action(ArgAction::SetTrue),
        )
        .arg(
            CliArg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable diagnostic output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_diagnostics(matches.get_flag("verbose"));

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => LoggerConfig::load(path)?,
        None => LoggerConfig::default(),
    };
    if matches.get_flag("date") {
        config.include_timestamp = true;
    }
    if matches.get_flag("no-date") {
        config.include_timestamp = false;
    }
    if let Some(policy) = matches.get_one::<String>("policy") {
        config.policy = policy.parse()?;
    }
    if let Some(style) = matches.get_one::<String>("style") {
        config.style = style.parse()?;
    }
    if let Some(locale) = matches.get_one::<String>("locale") {
        config.locale = Some(locale.clone());
    }

    let mut logger = Logger::from_config(&config)?;
    log::debug!("logger ready: {:?}", config);

    if matches.get_flag("demo") {
        return run_demo(&mut logger);
    }

    let channel: Channel = matches
        .get_one::<String>("channel")
        .map(|s| s.as_str())
        .unwrap_or("log")
        .parse()?;
    let as_json = matches.get_flag("json");

    let messages: Vec<String> = match matches.get_many::<String>("MESSAGE") {
        Some(values) => values.cloned().collect(),
        None => std::io::stdin()
            .lock()
            .lines()
            .collect::<Result<Vec<String>, _>>()
            .context("Error reading messages from STDIN")?,
    };

    let args = messages
        .iter()
        .map(|message| -> anyhow::Result<Arg> {
            if as_json {
                let value = serde_json::from_str::<serde_json::Value>(message)
                    .with_context(|| format!("Error parsing JSON message: {}", message))?;
                Ok(Arg::from(value))
            } else {
                Ok(Arg::from(message))
            }
        })
        .collect::<anyhow::Result<Vec<Arg>>>()?;

    let group = matches.get_one::<String>("group");
    if let Some(name) = group {
        logger.group(name);
    }
    for arg in args {
        match channel {
            Channel::Warn => logger.warn(arg),
            Channel::Error => logger.error(arg),
            _ => logger.log(arg),
        };
    }
    if group.is_some() {
        logger.group_end();
    }
    Ok(())
}

fn init_diagnostics(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    } else if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(log::LevelFilter::Warn);
    }
    builder.init();
}

fn run_demo<C: Console, K: Clock>(logger: &mut Logger<C, K>) -> anyhow::Result<()> {
    logger
        .log("Hello world")
        .log(666)
        .log(true)
        .log(())
        .log(None::<i32>)
        .log(vec![1, 2, 3])
        .log(Arg::json(&DemoUser { id: 124, name: "Вася" })?);

    logger
        .group("Group name")
        .log("Hello world 1")
        .log("Hello world 2")
        .group_end();

    logger.with_date().log("Hello world");
    logger.warn("Warning text");
    logger.error(anyhow::anyhow!("Error text"));
    Ok(())
}
