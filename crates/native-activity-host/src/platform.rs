//! The seam between the host core and the operating system.
//!
//! The core only talks to the OS through [`ActivityPlatform`] (per activity)
//! and [`crate::terminator::ProcessControl`] (per process). Android implements
//! them with JNI and `android-activity`; the desktop simulation and the tests
//! provide their own implementations.

use crate::Result;
use crate::display::WindowFlags;
use crate::permission::NavigationRequest;

pub trait ActivityPlatform {
    /// Whether broad storage access ("all files access") is currently granted.
    fn is_external_storage_manager(&mut self) -> Result<bool>;

    /// The application's package identity, e.g. `dev.moon.littlerenderer`.
    fn package_name(&mut self) -> Result<String>;

    /// Dispatch a foreground navigation. Returns as soon as the request is
    /// handed to the OS; there is no result channel.
    fn start_activity(&mut self, request: &NavigationRequest) -> Result<()>;

    /// Add flags to the window's layout parameters. Flags are never removed by the host.
    fn add_window_flags(&mut self, flags: WindowFlags);

    /// Base lifecycle initialization. Hands control to the renderer's native callbacks.
    fn super_on_create(&mut self, saved_state: Option<&[u8]>) -> Result<()>;

    /// Base destruction step, run before the process is killed.
    fn super_on_destroy(&mut self);
}
