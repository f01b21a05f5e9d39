use crate::config::LogEnv;
use tracing_subscriber::{
    fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

fn env_filter(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives))
}

fn default_directives(env: LogEnv, verbose: bool) -> &'static str {
    match (env, verbose) {
        (_, true) | (LogEnv::Local, _) | (LogEnv::Dev, _) => "inn_checker=debug,tower_http=debug,info",
        (LogEnv::Prod, false) => "inn_checker=info,info",
    }
}

/// JSON subscriber used by `dev` and `prod`. Each event carries the list of
/// enclosing spans, so request fields such as `request_id` travel with it.
pub fn json_subscriber<W>(filter: EnvFilter, writer: W) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_writer(writer)
            .json()
            .with_current_span(true)
            .with_span_list(true),
    )
}

/// Installs the global subscriber for the given environment.
///
/// `local` prints compact human-readable lines at debug level, `dev` emits JSON at
/// debug level and `prod` emits JSON at info level. `RUST_LOG` wins over all of them.
pub fn init_logger(env: LogEnv, verbose: bool) {
    let filter = env_filter(default_directives(env, verbose));

    match env {
        LogEnv::Local => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_thread_ids(false)
                        .with_file(false)
                        .with_line_number(false)
                        .compact(),
                )
                .init();
        }
        LogEnv::Dev | LogEnv::Prod => json_subscriber(filter, std::io::stdout).init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(default_directives(LogEnv::Prod, false), "inn_checker=info,info");
        assert!(default_directives(LogEnv::Prod, true).contains("inn_checker=debug"));
        assert!(default_directives(LogEnv::Local, false).contains("inn_checker=debug"));
        assert!(default_directives(LogEnv::Dev, false).contains("tower_http=debug"));
    }
}
