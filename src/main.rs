#![warn(clippy::all, rust_2018_idioms)]

use std::path::PathBuf;

use anyhow::{Context as _, Result, anyhow};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use lotto::terminal;
use lotto_engine::{DrawingEngine, PickSet, RngSource, Sampling};
use lotto_session::{AppConfig, PlaySession, StopHandle};
use strum::IntoEnumIterator as _;

fn cli() -> Command {
    Command::new("lotto")
        .version("0.1.0")
        .about("Draw lottery numbers until your picks hit the jackpot")
        .arg(
            Arg::new("picks")
                .long("picks")
                .short('p')
                .value_name("NUMBERS")
                .conflicts_with("quick-pick")
                .help("Your six numbers, e.g. \"7,14,21,28,35,42\""),
        )
        .arg(
            Arg::new("quick-pick")
                .long("quick-pick")
                .short('q')
                .action(ArgAction::SetTrue)
                .help("Let the engine choose your numbers (default)"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_parser(value_parser!(u64))
                .help("Seed for a repeatable run"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_parser(value_parser!(PathBuf))
                .help("TOML config file, defaults to $LOTTO_CONFIG"),
        )
        .arg(
            Arg::new("sampling")
                .long("sampling")
                .help("Number sampling: rejection or shuffle"),
        )
        .arg(
            Arg::new("pace-ms")
                .long("pace-ms")
                .value_parser(value_parser!(u64))
                .help("Pause between drawings in milliseconds"),
        )
        .arg(
            Arg::new("max-drawings")
                .long("max-drawings")
                .short('n')
                .value_parser(value_parser!(u64))
                .help("Stop after this many drawings"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print every drawing as a JSON line"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
                .help("Set verbose output level"),
        )
}

/// Merge command line overrides into the loaded config
fn load_config(matches: &ArgMatches) -> Result<AppConfig> {
    let explicit = matches.get_one::<PathBuf>("config").map(PathBuf::as_path);
    let mut config = AppConfig::discover(explicit)?;

    if let Some(sampling) = matches.get_one::<String>("sampling") {
        config.rules.sampling = sampling.parse::<Sampling>().map_err(|_e| {
            anyhow!(
                "Invalid sampling '{sampling}', valid values are: {:?}",
                Sampling::iter().map(|s| s.to_string()).collect::<Vec<_>>()
            )
        })?;
    }
    if let Some(&pace_ms) = matches.get_one::<u64>("pace-ms") {
        config.session.pace_ms = pace_ms;
    }
    if let Some(&limit) = matches.get_one::<u64>("max-drawings") {
        config.session.max_drawings = Some(limit);
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli().get_matches();

    let log_level = match matches.get_count("verbose") {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    lotto_session::setup(Some(log_level));

    let config = load_config(&matches)?;
    let source = match matches.get_one::<u64>("seed") {
        Some(&seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };
    let mut engine = DrawingEngine::with_rules(config.rules, source)?;

    if let Some(input) = matches.get_one::<String>("picks") {
        let picks = PickSet::parse(input).context("Invalid --picks")?;
        picks
            .validate(engine.rules())
            .context("Invalid --picks")?;
        engine.set_picks(picks.as_slice())?;
    } else {
        engine.generate_quick_pick();
    }

    let json = matches.get_flag("json");
    if !json {
        println!(
            "{}",
            terminal::render_picks("Your picks", &PickSet::from(engine.picks().to_vec()))
        );
    }

    let stop = StopHandle::new();
    let ctrl_c = stop.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                log::info!("Received Ctrl-C, stopping");
                ctrl_c.stop();
            }
            Err(e) => log::error!("Failed to listen for Ctrl-C: {e}"),
        }
    });

    let session = PlaySession::new(engine, config.session);
    let report = session
        .run(&stop, |snapshot| {
            if json {
                match terminal::render_json(snapshot) {
                    Ok(line) => println!("{line}"),
                    Err(e) => log::error!("Failed to serialize drawing: {e}"),
                }
            } else {
                println!("{}", terminal::render_draw(snapshot));
            }
        })
        .await;

    if !json {
        println!();
        println!(
            "{}",
            terminal::render_summary(report.reason, report.last.as_ref())
        );
    }

    Ok(())
}
