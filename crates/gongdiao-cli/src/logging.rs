//! Tracing subscriber setup for the CLI.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `gongdiao_theory=debug`.
pub const LOG_ENV: &str = "GONGDIAO_LOG";

/// Default filter directive.
///
/// `verbose` raises both gongdiao crates to `debug`, which logs every
/// selection step of a derivation.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "warn,gongdiao_theory=debug,gongdiao_cli=debug"
    } else {
        "warn"
    }
}

/// Installs the global subscriber, writing to stderr.
///
/// `GONGDIAO_LOG` takes precedence over the default directive. Calling this
/// more than once is harmless.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .try_init();
}
