//! Logging setup for the `bmi` shell.
//!
//! Events go to stderr so the result lines and tables on stdout stay
//! clean. RUST_LOG always wins over the level picked here.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Level used by the CLI when neither RUST_LOG nor `--verbose` is given
pub const CLI_DEFAULT_LEVEL: &str = "warn";

/// Level used by the CLI under `--verbose`
pub const CLI_VERBOSE_LEVEL: &str = "debug";

/// Pick the CLI's default filter directive
pub fn cli_level(verbose: bool) -> &'static str {
    if verbose {
        CLI_VERBOSE_LEVEL
    } else {
        CLI_DEFAULT_LEVEL
    }
}

/// Initialize logging for the CLI
pub fn init_cli(verbose: bool) {
    init_with_level(cli_level(verbose))
}

/// Initialize logging with a specific default level
///
/// Uses the compact formatter without targets; store paths and BMI values
/// are already in the messages.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Initialize logging for testing (captures logs for test output)
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_level() {
        assert_eq!(cli_level(false), "warn");
        assert_eq!(cli_level(true), "debug");
    }
}
