mod render;


pub use render::{Console, OutputMode, default_output_mode, format_alert, format_stats};

use crate::cli::conf::print_config_error;
use crate::conf::{ConfigError, WatchConfig, read_config, validate_config};
use crate::playback::replay;
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct PlayArgs {
    /// CSV access log to replay
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// HCL config file; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seconds between top sections reports [default: 10]
    #[arg(long = "stats", value_name = "SECS")]
    pub stats_interval: Option<u64>,

    /// Length of the high traffic alert window in seconds [default: 120]
    #[arg(long = "alert", value_name = "SECS")]
    pub alert_window: Option<usize>,

    /// Average hits per second over the window that raises an alert [default: 10]
    #[arg(long = "rps", value_name = "HITS")]
    pub alert_rate: Option<u64>,

    /// Sections listed per stats report [default: 10]
    #[arg(long = "top", value_name = "K")]
    pub top_k: Option<usize>,

    /// Records held back to restore timestamp order [default: 50]
    #[arg(long, value_name = "RECORDS")]
    pub reorder_depth: Option<usize>,

    /// Decoded records buffered ahead of playback [default: 50]
    #[arg(long, value_name = "RECORDS")]
    pub queue_capacity: Option<usize>,

    /// Report format [default: pretty on a terminal, plain otherwise]
    #[arg(long, value_enum)]
    pub output: Option<OutputMode>,
}

impl PlayArgs {
    /// Config file values (or defaults) with command line overrides applied. Not validated.
    pub fn resolve(&self) -> Result<WatchConfig, ConfigError> {
        let mut cfg = match &self.config {
            Some(path) => read_config(path)?,
            None => WatchConfig::default(),
        };
        self.apply(&mut cfg);
        Ok(cfg)
    }

    fn apply(&self, cfg: &mut WatchConfig) {
        if let Some(input) = &self.input {
            cfg.input = Some(input.clone());
        }
        if let Some(v) = self.stats_interval {
            cfg.stats.interval_secs = v;
        }
        if let Some(v) = self.top_k {
            cfg.stats.top_k = v;
        }
        if let Some(v) = self.alert_window {
            cfg.alert.window_secs = v;
        }
        if let Some(v) = self.alert_rate {
            cfg.alert.rate = v;
        }
        if let Some(v) = self.reorder_depth {
            cfg.reader.reorder_depth = v;
        }
        if let Some(v) = self.queue_capacity {
            cfg.reader.queue_capacity = v;
        }
    }
}

pub fn run_play(args: PlayArgs) -> anyhow::Result<()> {
    let cfg = match args.resolve() {
        Ok(cfg) => cfg,
        Err(err) => {
            print_config_error(&err, false);
            std::process::exit(1);
        }
    };

    // No input is a usage problem, not a failure: explain and leave without replaying.
    let Some(input) = cfg.input.clone() else {
        print_config_error(&ConfigError::MissingInput, false);
        return Ok(());
    };

    if let Err(err) = validate_config(&cfg) {
        print_config_error(&err, false);
        std::process::exit(1);
    }

    let console = Console::new(args.output.unwrap_or_else(default_output_mode));

    tracing::info!(
        input = %input.display(),
        stats_interval = cfg.stats.interval_secs,
        alert_window = cfg.alert.window_secs,
        alert_threshold = cfg.alert.threshold(),
        reorder_depth = cfg.reader.reorder_depth,
        "replaying access log"
    );

    replay(&input, &cfg, console, console)
        .with_context(|| format!("failed to replay {}", input.display()))?;

    Ok(())
}
