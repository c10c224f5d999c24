use std::error::Error;
use std::path::PathBuf;
use chrono::Utc;
use log::{info, error, debug};
use env_logger::{Builder, Target};

/// Environment variable selecting the log level
pub const LOG_LEVEL_VAR: &str = "CODONIZE_LOG_LEVEL";

/// Directory holding the log files, `~/.codonize/logs`
pub fn log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".codonize")
        .join("logs")
}

/// Initialize file logging; returns the path of the new log file
pub fn init_logging() -> Result<PathBuf, Box<dyn Error>> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let log_file = log_dir.join(format!("codonize_{}.log", Utc::now().format("%Y%m%d_%H%M%S")));

    Builder::from_default_env()
        .target(Target::Pipe(Box::new(std::fs::File::create(&log_file)?)))
        .format(|buf, record| {
            use std::io::Write;
            writeln!(buf,
                "{} [{}] [{}:{}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
                record.level(),
                record.module_path().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .try_init()?;

    info!("Logging system initialized");
    info!("Log file: {log_file:?}");
    debug!("Log directory: {log_dir:?}");

    Ok(log_file)
}

/// Map a user-facing level name onto an env_logger filter
pub fn level_filter(level: &str) -> Option<&'static str> {
    match level.trim().to_lowercase().as_str() {
        "trace" => Some("trace"),
        "debug" => Some("debug"),
        "info" => Some("info"),
        "warn" => Some("warn"),
        "error" => Some("error"),
        "off" => Some("off"),
        _ => None,
    }
}

/// Set RUST_LOG from CODONIZE_LOG_LEVEL, defaulting to info
pub fn set_log_level() {
    let level = std::env::var(LOG_LEVEL_VAR).unwrap_or_else(|_| "info".to_string());

    let env_filter = level_filter(&level).unwrap_or_else(|| {
        eprintln!("Invalid log level '{level}', defaulting to 'info'");
        "info"
    });

    std::env::set_var("RUST_LOG", format!("codonize={env_filter}"));
}

pub fn log_system_info() {
    info!("=== Codonize Starting ===");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Build target: {}", std::env::consts::ARCH);
    info!("Operating system: {}", std::env::consts::OS);
    info!("Current working directory: {:?}", std::env::current_dir().unwrap_or_default());
    info!("Available CPU cores: {}", num_cpus::get());

    for (key, value) in std::env::vars() {
        if key.starts_with("CODONIZE_") || key == "RUST_LOG" {
            debug!("  {key}: {value}");
        }
    }
}

pub fn log_shutdown() {
    info!("=== Codonize Shutting Down ===");
    info!("Terminated at {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
}

/// Log an error that ends the run, also echoing it to stderr
pub fn log_critical_error(error: &str, context: Option<&str>) {
    match context {
        Some(ctx) => {
            error!("CRITICAL ERROR [{ctx}]: {error}");
            eprintln!("[{}] CRITICAL ERROR [{ctx}]: {error}",
                     Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
        }
        None => {
            error!("CRITICAL ERROR: {error}");
            eprintln!("[{}] CRITICAL ERROR: {error}",
                     Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_logging_initialization() {
        let temp_dir = tempdir().unwrap();
        std::env::set_var("HOME", temp_dir.path());

        let result = init_logging();
        assert!(result.is_ok());

        let log_file = result.unwrap();
        assert!(log_file.exists());
        assert!(log_file.starts_with(temp_dir.path()));
    }

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter("DEBUG"), Some("debug"));
        assert_eq!(level_filter(" warn "), Some("warn"));
        assert_eq!(level_filter("verbose"), None);
    }
}
