use log::*;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use time::UtcOffset;

pub fn parse_level(level: &str) -> LevelFilter {
  match level.to_lowercase().as_str() {
    "off" => LevelFilter::Off,
    "trace" => LevelFilter::Trace,
    "debug" => LevelFilter::Debug,
    "info" => LevelFilter::Info,
    "warn" => LevelFilter::Warn,
    "error" => LevelFilter::Error,
    _ => LevelFilter::Info,
  }
}

/// Logs to stderr so stdout only carries the report. Safe to call more than once.
pub fn init_logger() {
  let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
  let log_level = parse_level(&log_level);

  let mut cfg = ConfigBuilder::new();
  cfg.set_time_offset(UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC));
  let cfg = cfg.build();

  if TermLogger::init(log_level, cfg, TerminalMode::Stderr, ColorChoice::Auto).is_err() {
    debug!("Logger already initialized");
  }
}
