use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Installs the global tracing subscriber. `RUST_LOG` takes precedence over
/// the default `info` level; `LOG_FORMAT=json` switches to JSON lines.
pub fn init() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| Error::Config(format!("Invalid log filter: {}", e)))?;

    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
    result.map_err(|e| Error::Config(format!("Failed to install tracing subscriber: {}", e)))
}
