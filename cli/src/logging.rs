use std::sync::OnceLock;

use tracing::Level;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LogLevel;

static INIT: OnceLock<()> = OnceLock::new();

/// Installs the stderr subscriber once. `RUST_LOG` overrides `level`.
pub fn init(level: LogLevel) {
    INIT.get_or_init(|| {
        let Some(tracing_level) = level.as_tracing_level() else {
            return;
        };

        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_timer(UtcTime::rfc_3339())
            .with_ansi(true)
            .with_target(true);

        tracing_subscriber::registry()
            .with(build_env_filter(tracing_level))
            .with(stderr_layer)
            .init();
    });
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy()
}
