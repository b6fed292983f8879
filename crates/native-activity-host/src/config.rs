/// Static description of the application hosted by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    /// Human-readable name, used for logging (and as the logcat tag).
    pub app_name: &'static str,
    /// Name of the renderer's native module, without `lib` prefix or extension.
    pub module_name: &'static str,
}

impl HostConfig {
    pub const fn new(app_name: &'static str, module_name: &'static str) -> Self {
        Self {
            app_name,
            module_name,
        }
    }
}
