//! Diagnostic logging for exitcheck
//!
//! Structured `tracing` output is always routed to stderr. Stdout is reserved
//! for the fixed-format `[DEBUG]` and `[RESULT]` lines that log scrapers
//! consume, so nothing here may write to it.

use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Colored output only when stderr is a terminal and NO_COLOR is unset.
fn use_color() -> bool {
    std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

/// Default filter directive when `RUST_LOG` is not set.
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "exitcheck=debug,exitcheck_reporter=debug,exitcheck_results=debug,exitcheck_config=debug,exitcheck_utils=debug,warn"
    } else {
        "warn"
    }
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins over the `verbose` default. Verbose mode adds targets to
/// each event.
pub fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(verbose)))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(use_color())
                .with_target(verbose)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_line_number(false)
                .with_file(false)
                .compact(),
        )
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_quiet() {
        assert_eq!(default_directive(false), "warn");
    }

    #[test]
    fn test_default_directive_verbose_covers_workspace() {
        let directive = default_directive(true);
        assert!(directive.contains("exitcheck_reporter=debug"));
        assert!(EnvFilter::try_new(directive).is_ok());
    }

    #[test]
    fn test_init_tracing_twice_reports_error() {
        // Only one global subscriber can be installed per process.
        let _ = init_tracing(false);
        assert!(init_tracing(true).is_err());
    }
}
