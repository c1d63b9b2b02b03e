mod cli;
mod replay;

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process::ExitCode;

use keychord_common::{KeychordError, Rect};
use keychord_config::schema::KeychordConfig;
use keychord_platform::{HitTest, Recorder, Shortcut, ShortcutRegistry};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

/// Filter directive from `--log-level`, falling back to the config level.
/// A bare level applies to the keychord crates only.
fn log_directive(arg: Option<&str>, config: &KeychordConfig) -> String {
    match arg {
        Some(level) if level.contains('=') => level.to_string(),
        Some(level) => format!("keychord={level}"),
        None => format!("keychord={}", config.logging.level.as_directive()),
    }
}

fn init_logging(args: &cli::Args, config: &KeychordConfig) {
    let directive = log_directive(args.log_level.as_deref(), config);
    let filter = match directive.parse::<Directive>() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(e) => {
            eprintln!("keychord: ignoring log level '{directive}': {e}");
            EnvFilter::from_default_env()
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(args: &cli::Args) -> Result<KeychordConfig, KeychordError> {
    match &args.config {
        Some(path) => Ok(keychord_config::load_config_from(path)?),
        None => Ok(keychord_config::load_config().unwrap_or_else(|e| {
            eprintln!("keychord: config load failed, using defaults: {e}");
            KeychordConfig::default()
        })),
    }
}

fn run(args: cli::Args) -> Result<(), KeychordError> {
    if args.print_default_config {
        print!("{}", keychord_config::toml_loader::default_config_toml());
        return Ok(());
    }

    let config = load_config(&args)?;
    init_logging(&args, &config);
    tracing::info!("keychord v{} starting", env!("CARGO_PKG_VERSION"));

    let registry = ShortcutRegistry::from_config(&config);
    let hit_test = HitTest::new(Rect::new(0.0, 0.0, args.width, args.height))
        .with_margin(config.recorder.click_margin);
    let bound = args.bound.as_deref().and_then(Shortcut::load_persisted);
    let mut recorder = Recorder::new(hit_test).with_shortcut(bound);
    recorder.focus();

    let mut prompt = replay::LogPrompt::new(args.force_system_override);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let handled = match &args.events {
        Some(path) => {
            let file = File::open(path)?;
            replay::run(&mut recorder, &registry, &mut prompt, BufReader::new(file), &mut out)?
        }
        None => replay::run(&mut recorder, &registry, &mut prompt, io::stdin().lock(), &mut out)?,
    };
    replay::write_bound(&mut out, &recorder)?;
    out.flush()?;

    tracing::info!(handled, "replay complete");
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("keychord: {e}");
            ExitCode::FAILURE
        }
    }
}
