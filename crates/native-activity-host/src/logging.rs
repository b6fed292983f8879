/*!
Logging setup for the host.

All host code logs through `tracing`. Where the events end up depends on
the platform:

- Android: no `tracing` subscriber is installed, so the `log` feature of
  `tracing` forwards every event to the `log` facade, which `android_logger`
  writes to logcat under the application's tag.
- Desktop: a `tracing-subscriber` fmt layer filtered by `RUST_LOG`.
*/

/// Initialize logcat output. Safe to call more than once.
#[cfg(target_os = "android")]
pub fn setup_logging(app_name: &str) {
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(level)
            .with_tag(app_name),
    );

    unsafe {
        // Safe: single-threaded at startup
        std::env::set_var("RUST_BACKTRACE", "full");
    }
}

/// Initialize logging with sensible defaults.
///
/// If RUST_LOG is not set, debug builds log at DEBUG and release builds at INFO.
#[cfg(not(target_os = "android"))]
pub fn setup_logging(app_name: &str) {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    if std::env::var("RUST_LOG").is_err() {
        // Safety: single-threaded at startup
        unsafe {
            if cfg!(debug_assertions) {
                std::env::set_var("RUST_LOG", "debug");
            } else {
                std::env::set_var("RUST_LOG", "info");
            }
        }
    }

    let fmt_layer = fmt::layer().with_filter(EnvFilter::from_default_env());
    if tracing_subscriber::registry().with(fmt_layer).try_init().is_err() {
        tracing::debug!("Global tracing subscriber already set, keeping it");
    }

    tracing::info!("Logging initialized for {app_name}");
}
