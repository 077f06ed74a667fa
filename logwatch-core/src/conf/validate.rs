use crate::conf::{ConfigError, WatchConfig};

/// Checks value ranges, reporting every violation at once.
///
/// A missing input is not checked here: callers decide whether that is an error or a
/// request for usage guidance.
pub fn validate_config(cfg: &WatchConfig) -> Result<(), ConfigError> {
    let mut issues = Vec::new();

    if cfg.stats.interval_secs == 0 {
        issues.push("stats.interval_secs must be greater than zero".to_string());
    }
    if cfg.stats.top_k == 0 {
        issues.push("stats.top_k must be greater than zero".to_string());
    }
    if cfg.alert.window_secs == 0 {
        issues.push("alert.window_secs must be greater than zero".to_string());
    }
    if cfg.alert.rate == 0 {
        issues.push("alert.rate must be greater than zero".to_string());
    }
    if cfg.reader.queue_capacity == 0 {
        issues.push("reader.queue_capacity must be greater than zero".to_string());
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Invalid { issues })
    }
}
