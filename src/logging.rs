//! Log configuration
//!
//! Logging is an explicit value handed to the installer, never a process-wide
//! switch: [`LogConfig::dispatch`] builds a `tracing` dispatcher that each
//! lifecycle operation runs under.

use tracing::Dispatch;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "MAMBA_GITHOOK_LOG";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    pub verbose: bool,
    /// Overrides the level chosen by `verbose`
    pub filter: Option<String>,
}

impl LogConfig {
    /// `--verbose` plus the `MAMBA_GITHOOK_LOG` override, if any.
    pub fn from_env(verbose: bool) -> Self {
        Self {
            verbose,
            filter: std::env::var(LOG_ENV).ok().filter(|f| !f.trim().is_empty()),
        }
    }

    pub fn directive(&self) -> String {
        match &self.filter {
            Some(filter) => filter.clone(),
            None if self.verbose => "debug".to_string(),
            None => "info".to_string(),
        }
    }

    /// Dispatcher writing compact lines to stderr.
    pub fn dispatch(&self) -> Dispatch {
        let filter = EnvFilter::try_new(self.directive()).unwrap_or_else(|_| {
            EnvFilter::new(if self.verbose { "debug" } else { "info" })
        });

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .finish();
        Dispatch::new(subscriber)
    }

    /// Dispatcher that drops everything.
    #[cfg(test)]
    pub fn silent() -> Dispatch {
        Dispatch::none()
    }
}
