use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use scical::AngleModeArg;
use scical::core::config::{self, CliOverrides, Notices, ResolvedConfig, ScicalConfig};
use scical::core::engine::{Engine, NullSink};
use scical::core::script;
use scical::tui;

#[derive(Parser)]
#[command(name = "scical", about = "Scientific calculator for the terminal")]
struct Args {
    /// Angle unit for sin, cos and tan at start-up
    #[arg(short, long, value_enum)]
    angle_mode: Option<AngleModeArg>,

    /// Run a whitespace-separated key script instead of the keypad, e.g. "2 + 3 ="
    #[arg(short, long)]
    eval: Option<String>,

    /// With --eval, print the final display state as JSON
    #[arg(long, requires = "eval")]
    json: bool,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(config: &ResolvedConfig) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}

fn eval(config: &ResolvedConfig, source: &str, json: bool) -> ExitCode {
    let mut engine = Engine::with_angle_mode(NullSink, config.angle_mode);
    if let Err(e) = script::run(&mut engine, source) {
        log::warn!("Script rejected: {}", e);
        eprintln!("scical: {e}");
        return ExitCode::from(2);
    }

    let snapshot = engine.snapshot();
    if json {
        match serde_json::to_string(&snapshot) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("scical: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{}", snapshot.current_operand);
    }
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    let args = Args::parse();

    // The logger's level and path come from the config, so config
    // diagnostics are held until it exists.
    let mut notices = Notices::default();
    let file_config = config::load_config(&mut notices).unwrap_or_else(|e| {
        eprintln!("scical: {e}, using defaults");
        notices.warn(format!("{e}, using defaults"));
        ScicalConfig::default()
    });
    let cli = CliOverrides {
        angle_mode: args.angle_mode.map(Into::into),
        log_file: args.log_file,
    };
    let resolved = config::resolve(&file_config, &cli, &mut notices);

    init_logging(&resolved);
    notices.flush();
    log::info!("scical starting up, angle mode {}", resolved.angle_mode);

    if let Some(source) = args.eval.as_deref() {
        return eval(&resolved, source, args.json);
    }

    match tui::run(&resolved) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("scical: {e}");
            ExitCode::FAILURE
        }
    }
}
