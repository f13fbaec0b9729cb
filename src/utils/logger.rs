use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` 優先；未設定時依 verbose 決定本 crate 的層級
fn env_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose {
        "trello_pressure=debug,info"
    } else {
        "trello_pressure=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

/// 以 JSON 格式輸出日誌，適合長時間輪詢時交給日誌收集器
pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .flatten_event(true),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_filter_enables_debug() {
        std::env::remove_var("RUST_LOG");

        assert_eq!(env_filter(false).to_string(), "trello_pressure=info");
        assert!(env_filter(true).to_string().contains("trello_pressure=debug"));
    }
}
