use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use color_eyre::eyre::{Result, WrapErr};
use tokio::sync::mpsc;

use lettercycle::app::action::Action;
use lettercycle::app::effect_runner::EffectRunner;
use lettercycle::app::ports::ConfigStore;
use lettercycle::app::run_loop::run;
use lettercycle::app::settings::SettingsOverrides;
use lettercycle::app::state::AppState;
use lettercycle::domain::{InvalidLetterPolicy, Letter, SurfaceId};
use lettercycle::error;
use lettercycle::infra::adapters::TomlConfigStore;
use lettercycle::infra::logging::{self, default_log_path};
use lettercycle::ui::adapters::TuiAdapter;
use lettercycle::ui::tui::TuiRunner;

/// Cycles one letter through the alphabet on a terminal display.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file [default: <config dir>/lettercycle/config.toml]
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Milliseconds between ticks
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    interval_ms: Option<u64>,

    /// Display surface to cycle
    #[arg(long, value_name = "ID")]
    surface: Option<SurfaceId>,

    /// Letter shown before the first tick
    #[arg(long, value_name = "LETTER")]
    start: Option<Letter>,

    /// What to do when the surface does not hold a letter: reject or reset
    #[arg(long, value_name = "POLICY")]
    on_invalid: Option<InvalidLetterPolicy>,

    /// Log file [default: <cache dir>/lettercycle/lettercycle.log]
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

impl Args {
    fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            surface: self.surface.clone(),
            interval: self.interval_ms.map(Duration::from_millis),
            start: self.start,
            on_invalid: self.on_invalid,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    error::install_hooks()?;

    let args = Args::parse();

    if let Some(log_path) = args.log_file.clone().or_else(default_log_path) {
        let level = args
            .verbosity
            .is_present()
            .then(|| args.verbosity.tracing_level_filter());
        logging::setup(&log_path, level)?;
    }

    let store = match &args.config {
        Some(path) => TomlConfigStore::with_file(path.clone()),
        None => TomlConfigStore::new()?,
    };
    let settings = store
        .load()
        .wrap_err_with(|| format!("Failed to load {}", store.storage_path().display()))?
        .unwrap_or_default()
        .with_overrides(args.overrides());

    let mut state =
        AppState::new(&settings, Instant::now()).wrap_err("Could not start the letter cycler")?;

    let (action_tx, mut action_rx) = mpsc::channel::<Action>(64);

    let mut tui = TuiRunner::new()?;
    tui.enter(action_tx)?;

    let mut runner = EffectRunner::new();
    let result = run(
        &mut state,
        &mut runner,
        &mut TuiAdapter::new(&mut tui),
        &mut action_rx,
    )
    .await;

    tui.exit()?;
    result
}
