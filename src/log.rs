#[cfg(not(target_arch = "wasm32"))]
use log::LevelFilter;

/// Environment variable that switches the CLI to debug logging.
pub const DEBUG_ENV_VAR: &str = "WORDPLAY_DEBUG";

/// Whether debug logging was requested through [`DEBUG_ENV_VAR`].
#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn debug_requested() -> bool {
    std::env::var_os(DEBUG_ENV_VAR).is_some()
}

/// Initialize logging for both the CLI and the browser build.
///
/// # Behavior
/// - **Native (CLI):** `Debug` or `Info` per `debug_enabled`; `RUST_LOG`, when
///   set, overrides the filter.
/// - **WASM:** logs to the browser console at `Debug` if `debug_enabled`,
///   otherwise `Info`.
///
/// Calling this twice is harmless: the second logger install fails and is
/// reported, not propagated.
pub fn init_logger(debug_enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let level = if debug_enabled { log::Level::Debug } else { log::Level::Info };

        match console_log::init_with_level(level) {
            Ok(()) => log::info!("WASM logger initialized at {level:?} level"),
            Err(e) => {
                let msg = format!("Failed to initialize console_log: {e}. Logging will be unavailable.");
                web_sys::console::error_1(&msg.into());
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let level = if debug_enabled { LevelFilter::Debug } else { LevelFilter::Info };

        let mut builder = env_logger::Builder::new();
        builder
            .filter(None, level)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false);

        if let Ok(spec) = std::env::var("RUST_LOG") {
            builder.parse_filters(&spec);
        }

        if let Err(e) = builder.try_init() {
            eprintln!("logger already initialized: {e}");
            return;
        }
        log::debug!("native logger initialized at {level:?} level");
    }
}
