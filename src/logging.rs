// logging.rs
use env_logger::{Builder, Env};

#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// Filter directives such as `"vertpos=trace"`. Wins over `RUST_LOG`.
    pub filter: Option<String>,
}

/// Installs the `env_logger` backend. Returns false when a logger was
/// already installed, in which case the existing one keeps running.
pub fn init_logging(config: LoggingConfig) -> bool {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    if let Some(filter) = &config.filter {
        builder.parse_filters(filter);
    }
    builder.format_timestamp_millis();

    let installed = builder.try_init().is_ok();
    if installed {
        log::debug!("logger installed ({:?})", config.filter);
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_is_refused() {
        init_logging(LoggingConfig {
            filter: Some("vertpos=debug".into()),
        });
        assert!(!init_logging(LoggingConfig::default()));
        log::debug!("first logger still in place");
    }
}
