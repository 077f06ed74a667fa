use crate::conf::{ConfigError, load_config};
use std::path::PathBuf;

pub fn check(path: PathBuf, plain: bool) -> anyhow::Result<()> {
    match load_config(&path) {
        Ok(cfg) => {
            println!("✔ Config loaded successfully");
            match &cfg.input {
                Some(input) => println!("✔ input: {}", input.display()),
                None => println!("✔ input: <none, pass --input>"),
            }
            println!(
                "✔ stats every {}s, top {} sections",
                cfg.stats.interval_secs, cfg.stats.top_k
            );
            println!(
                "✔ alert at {} hits over {}s ({} hits/s)",
                cfg.alert.threshold(),
                cfg.alert.window_secs,
                cfg.alert.rate
            );
            println!(
                "✔ reorder depth {}, queue capacity {}",
                cfg.reader.reorder_depth, cfg.reader.queue_capacity
            );
            Ok(())
        }
        Err(err) => {
            print_config_error(&err, plain);
            std::process::exit(1);
        }
    }
}

pub fn print_config_error(err: &ConfigError, plain: bool) {
    eprintln!("{}", err);
    if plain {
        return;
    }
    if let Some(hint) = config_error_hint(err) {
        eprintln!();
        eprintln!("{}", hint);
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::MissingInput => Some(
            "An access log to replay is required.\n\
             \n\
             Pass it on the command line:\n\
             \n\
             logwatch --input access.csv\n\
             \n\
             or set it in the config file:\n\
             \n\
             input = \"access.csv\"",
        ),

        ConfigError::Invalid { .. } => Some(
            "Intervals, windows, rates, top_k and queue capacity must all be greater than zero.\n\
             \n\
             Example:\n\
             \n\
             stats {\n\
             \x20 interval_secs = 10\n\
             }",
        ),

        ConfigError::Parse { .. } => Some(
            "Config files are HCL with `stats`, `alert` and `reader` blocks.\n\
             \n\
             Run `logwatch config init` to write a commented example.",
        ),

        ConfigError::AlreadyExists { .. } => Some("Pass --force to overwrite it."),

        _ => None,
    }
}
