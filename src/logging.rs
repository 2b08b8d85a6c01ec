//! Logging System
//!
//! Diagnostics go through `tracing`. A [`Logger`] is built once from the `--debug`
//! flag and handed to whatever needs to log: with debug off every event is
//! discarded, with debug on events are written to stderr with RFC 3339 UTC
//! timestamps. No global subscriber is installed; the logger is made the default
//! dispatcher only inside [`Logger::scope`] or while an [`Logger::install`] guard lives.

use std::io::IsTerminal;
use tracing::dispatcher::{self, DefaultGuard};
use tracing::Dispatch;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Environment variable holding an `EnvFilter` directive for the debug sink.
pub const LOG_ENV_VAR: &str = "BOARDKIT_LOG";

const DEFAULT_DIRECTIVE: &str = "debug";

/// Diagnostic sink for one run
#[derive(Clone)]
pub struct Logger {
    dispatch: Dispatch,
    enabled: bool,
}

impl Logger {
    /// Discarding logger unless `debug` is set, stderr logger otherwise.
    pub fn new(debug: bool) -> Self {
        if debug {
            Self::stderr()
        } else {
            Self::discard()
        }
    }

    pub fn discard() -> Self {
        Self {
            dispatch: Dispatch::none(),
            enabled: false,
        }
    }

    /// Log to stderr, colored only when stderr is a terminal.
    pub fn stderr() -> Self {
        let ansi = std::io::stderr().is_terminal();
        Self::with_writer(std::io::stderr, ansi)
    }

    /// Log to an arbitrary writer.
    pub fn with_writer<W>(writer: W, ansi: bool) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let subscriber = Registry::default().with(build_env_filter()).with(
            fmt::layer()
                .with_target(true)
                .with_timer(ChronoUtc::rfc_3339())
                .with_ansi(ansi)
                .with_writer(writer),
        );
        Self {
            dispatch: Dispatch::new(subscriber),
            enabled: true,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Run `f` with this logger as the default dispatcher.
    pub fn scope<T>(&self, f: impl FnOnce() -> T) -> T {
        dispatcher::with_default(&self.dispatch, f)
    }

    /// Make this logger the default for the current thread until the guard drops.
    pub fn install(&self) -> DefaultGuard {
        dispatcher::set_default(&self.dispatch)
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger").field("enabled", &self.enabled).finish()
    }
}

/// Filter from `BOARDKIT_LOG`, falling back to everything at debug level and above.
fn build_env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}
