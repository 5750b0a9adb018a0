use marca_error::{AppResult, MarcaError};
use std::str::FromStr;
use tracing::{subscriber::set_global_default, Level};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self},
    layer::SubscriberExt,
    Layer, Registry,
};

/// Console + daily-rolling-file logger.
pub struct Logger {
    level: Level,
    _file_guard: Option<WorkerGuard>,
}

impl Logger {
    pub fn new(level: Option<Level>) -> Self {
        Logger {
            level: level.unwrap_or(Level::INFO),
            _file_guard: None,
        }
    }

    /// Build a logger from a textual level ("trace".."error"); unknown
    /// values fall back to INFO.
    pub fn from_level_str(level: &str) -> Self {
        Self::new(Level::from_str(level).ok())
    }

    /// Install the global subscriber: one console layer, one non-blocking
    /// daily rolling file layer, both filtered by the configured level.
    pub fn initialize(&mut self, dir: &str, file_name: &str) -> AppResult<()> {
        let file_appender = rolling::daily(dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        self._file_guard = Some(guard);

        let console_layer = fmt::layer()
            .with_writer(std::io::stdout)
            .with_filter(LevelFilter::from_level(self.level));

        let file_layer = fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_filter(LevelFilter::from_level(self.level));

        let subscriber = Registry::default().with(console_layer).with(file_layer);

        set_global_default(subscriber).map_err(|_| MarcaError::from("Failed to set logger"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parsing_falls_back_to_info() {
        assert_eq!(Logger::from_level_str("debug").level, Level::DEBUG);
        assert_eq!(Logger::from_level_str("ERROR").level, Level::ERROR);
        assert_eq!(Logger::from_level_str("noisy").level, Level::INFO);
    }
}
