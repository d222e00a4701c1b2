//! Tracing setup for the command-line binary.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::Config;

static INIT: Once = Once::new();

/// Subscriber options derived from `-v` and the loaded run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Used when `TYPOFIX_LOG` is unset or invalid.
    pub default_directive: &'static str,
    pub ansi: bool,
}

impl LogSettings {
    pub fn new(verbosity: u8, config: &Config) -> Self {
        let default_directive = match verbosity {
            0 => "typofix=warn",
            1 => "typofix=debug",
            _ => "typofix=trace",
        };

        Self {
            default_directive,
            ansi: config.colors,
        }
    }
}

/// Install the global subscriber, writing to stderr.
///
/// `TYPOFIX_LOG` takes precedence over the verbosity default
/// (e.g. `TYPOFIX_LOG=typofix::walker=trace`). Safe to call more than once.
pub fn init(settings: &LogSettings) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("TYPOFIX_LOG")
            .unwrap_or_else(|_| EnvFilter::new(settings.default_directive));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(settings.ansi)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
