//! Tracing subscriber setup for the binary
//!
//! Logs are written to stderr so that stdout stays reserved for command output.
//! `RUST_LOG` takes precedence over the level picked from the `--debug` flag.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_LEVEL: &str = "error";
const DEBUG_LEVEL: &str = "debug";

pub fn init_tracing(debug: bool) -> anyhow::Result<()> {
    let level = if debug { DEBUG_LEVEL } else { DEFAULT_LEVEL };
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(debug),
        )
        .try_init()?;

    Ok(())
}
