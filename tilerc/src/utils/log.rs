use tracing::{metadata::LevelFilter, Subscriber};
use tracing_subscriber::{filter::ParseError, layer::SubscriberExt, EnvFilter};

#[cfg(feature = "journald-log")]
mod journald;

/// Build the subscriber for `level_regex`. An unparsable filter falls back to
/// `info` and the parse error is handed back to be reported once logging is up.
#[must_use]
pub fn parse_log_level(level_regex: &str) -> (impl Subscriber + Send + Sync, Option<ParseError>) {
    let mut parse_err = None;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse(level_regex)
        .unwrap_or_else(|err| {
            parse_err = Some(err);
            EnvFilter::new("info")
        });
    (get_subscribers(filter), parse_err)
}

#[allow(clippy::let_and_return)]
pub fn get_subscribers(filter: EnvFilter) -> impl Subscriber + Send + Sync {
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    #[cfg(feature = "journald-log")]
    let subscriber = journald::add_layer(subscriber);

    subscriber
}

/// Install the global subscriber. Called once, at the start of a binary.
pub fn setup_logging(level_regex: &str) {
    let (subscriber, parse_err) = parse_log_level(level_regex);
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Couldn't setup global subscriber (logger): {err}");
        return;
    }
    if let Some(err) = parse_err {
        tracing::warn!("Invalid log level `{level_regex}`, using `info`: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_level_is_reported() {
        let (_, err) = parse_log_level("info,tilerc=loud");
        assert!(err.is_some());
        let (_, err) = parse_log_level("warn,tilerc=debug");
        assert!(err.is_none());
    }
}
