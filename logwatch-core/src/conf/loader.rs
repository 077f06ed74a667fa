use crate::conf::{ConfigError, WatchConfig, validate_config};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_HCL: &str = r#"# logwatch configuration
#
# Command line flags override any value set here.

# CSV access log to replay.
# input = "access.csv"

stats {
  # Seconds between top sections reports.
  interval_secs = 10

  # Sections listed per report. Sections tied on hits are always listed together.
  top_k = 10
}

alert {
  # Sliding window, in seconds, over which traffic is summed.
  window_secs = 120

  # Average hits per second over the window that raises an alert.
  rate = 10
}

reader {
  # Records held back to restore timestamp order. 0 disables reordering.
  reorder_depth = 50

  # Decoded records buffered ahead of playback.
  queue_capacity = 50
}
"#;

/// Reads, parses and validates an HCL config file.
pub fn load_config(path: &Path) -> Result<WatchConfig, ConfigError> {
    let cfg = read_config(path)?;
    validate_config(&cfg)?;
    Ok(cfg)
}

/// Reads and parses an HCL config file, leaving validation to the caller.
pub fn read_config(path: &Path) -> Result<WatchConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    parse_config(path, &raw)
}

/// Parses HCL without validating it. `path` is only used for error reporting.
pub fn parse_config(path: &Path, raw: &str) -> Result<WatchConfig, ConfigError> {
    hcl::from_str(raw).map_err(|e| ConfigError::parse(path, e))
}

pub fn write_default_config(path: &Path, force: bool) -> Result<(), ConfigError> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }

    fs::write(path, DEFAULT_CONFIG_HCL).map_err(|e| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })
}
