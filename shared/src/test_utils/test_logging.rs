use env_logger::Builder;
use log::LevelFilter;
use std::str::FromStr;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize test logging
///
/// Logs stay at Error unless LOG_LEVEL is set (error, warn, info, debug, trace).
/// Safe to call from every test; only the first call installs the logger.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let level_filter = std::env::var("LOG_LEVEL")
            .ok()
            .and_then(|level| LevelFilter::from_str(&level).ok())
            .unwrap_or(LevelFilter::Error);

        // try_init: another test harness may already have installed a logger
        let _ = Builder::new()
            .filter_level(level_filter)
            .is_test(true)
            .try_init();
    });
}
