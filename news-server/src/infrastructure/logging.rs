use tracing_subscriber::{EnvFilter, fmt};

/// Structured json logs by default; `LOG_FORMAT=plain` switches to a
/// human-readable form for local runs.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,news_server=debug"));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_timer(fmt::time::ChronoUtc::rfc_3339());

    if std::env::var("LOG_FORMAT").is_ok_and(|v| v == "plain") {
        let _ = tracing::subscriber::set_global_default(builder.finish());
    } else {
        let _ = tracing::subscriber::set_global_default(builder.json().finish());
    }
}
