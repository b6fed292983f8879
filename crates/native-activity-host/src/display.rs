use bitflags::bitflags;

use crate::platform::ActivityPlatform;

bitflags! {
    /// Subset of Android's `WindowManager.LayoutParams` flags used by the host.
    ///
    /// Values match the platform constants so they can be passed through unchanged.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct WindowFlags: u32 {
        const KEEP_SCREEN_ON = 0x0000_0080;
    }
}

/// Keep the display awake for as long as the activity's window is visible.
///
/// Must run before [`ActivityPlatform::super_on_create`] so the first composited
/// frame already carries the flag. The OS drops it together with the window.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn keep_screen_on<P: ActivityPlatform>(platform: &mut P) {
    platform.add_window_flags(WindowFlags::KEEP_SCREEN_ON);
    tracing::debug!("Window flag KEEP_SCREEN_ON applied");
}
