//! Bootstrap shell and lifecycle bridge for `NativeActivity` renderers
//!
//! This crate hosts a natively rendered, continuously running application on
//! Android. It does not render anything itself. It prepares the process for
//! an external renderer module and tears the process down afterwards:
//!
//! 1. [`loader`]: load the renderer module once per process, before any lifecycle callback.
//! 2. [`display`]: keep the screen on, before the base lifecycle initialization.
//! 3. [`permission`]: redirect to the "all files access" settings page if needed.
//! 4. [`terminator`]: kill the whole process when the activity is destroyed.
//!
//! [`host::ActivityHost`] drives these steps as a small state machine
//! ([`state::HostState`]). The OS is reached only through the
//! [`platform::ActivityPlatform`] and [`terminator::ProcessControl`] seams.
//!
//! # Usage
//!
//! In your application's `lib.rs`, use the `native_host_app!` macro to define all entry points:
//!
//! ```ignore
//! native_activity_host::native_host_app!("My Renderer", "renderer");
//! ```
//!
//! This generates:
//! - Android: the `android_main` entry point (build the crate as a `cdylib`)
//! - Desktop: `run_native()`, a simulated launch to call from `main.rs`

pub mod cli;
pub mod config;
pub mod display;
pub mod glue;
pub mod host;
pub mod loader;
pub mod logging;
pub mod permission;
pub mod platform;
pub mod state;
pub mod terminator;

mod error;
mod metadata;

#[cfg(target_os = "android")]
pub mod android;
#[cfg(not(target_os = "android"))]
pub mod simulated;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use config::HostConfig;
pub use error::{HostError, Result};
pub use host::ActivityHost;
pub use metadata::{log_version_info, short_version_info};
pub use state::{HostState, PermissionOutcome};

/// Define the platform entry points for a renderer host.
///
/// # Arguments
///
/// * `$app_name` - A string literal with the application name (used for logging and the logcat tag)
/// * `$module_name` - The renderer's native module name, e.g. `"renderer"` for `librenderer.so`
///
/// # Generated Code
///
/// For **Android** targets, generates:
/// ```ignore
/// #[no_mangle]
/// pub fn android_main(app: android_activity::AndroidApp) { ... }
/// ```
///
/// For **all other targets**, generates:
/// ```ignore
/// pub fn run_native() { ... }  // Call this from main.rs
/// ```
#[macro_export]
macro_rules! native_host_app {
    ($app_name:expr, $module_name:expr) => {
        /// Static configuration of this host.
        pub const HOST_CONFIG: $crate::HostConfig = $crate::HostConfig::new($app_name, $module_name);

        // ==========================================
        // Android entry point
        // ==========================================
        #[cfg(target_os = "android")]
        #[unsafe(no_mangle)] // SAFETY: there is no other global function of this name
        pub fn android_main(app: $crate::android::AndroidApp) {
            $crate::android_main_impl(HOST_CONFIG, app);
        }

        // ==========================================
        // Desktop entry point (called from main.rs)
        // ==========================================
        /// Simulate one launch of the host on the desktop.
        ///
        /// Call this from your `main.rs`:
        /// ```ignore
        /// fn main() {
        ///     my_app::run_native();
        /// }
        /// ```
        #[cfg(not(target_os = "android"))]
        pub fn run_native() {
            $crate::native_main_impl(HOST_CONFIG);
        }
    };
}

/// Internal implementation for Android entry point.
/// Use the `native_host_app!` macro instead of calling this directly.
#[cfg(target_os = "android")]
#[doc(hidden)]
pub fn android_main_impl(config: HostConfig, app: android::AndroidApp) {
    logging::setup_logging(config.app_name);
    log_version_info(config.app_name);

    if let Err(err) = android::run(app, &config) {
        terminator::fatal(&err);
    }
}

/// Internal implementation for the desktop entry point.
/// Use the `native_host_app!` macro instead of calling this directly.
#[cfg(not(target_os = "android"))]
#[doc(hidden)]
pub fn native_main_impl(config: HostConfig) {
    logging::setup_logging(config.app_name);
    log_version_info(config.app_name);

    let args = match cli::parse_args::<cli::SimulationArgs>() {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    if let Err(err) = simulated::run(&config, &args) {
        terminator::fatal(&err);
    }
}
