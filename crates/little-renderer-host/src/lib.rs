//! Little Renderer - Android host
//!
//! The library built as `liblittle_renderer_host.so` is what `NativeActivity`
//! loads. It brings in the renderer module (`librenderer.so`), keeps the
//! screen on, asks for all-files access and kills the process when the
//! activity goes away. See `native-activity-host` for the details.

// Define all platform entry points using the unified macro
native_activity_host::native_host_app!("Little Renderer", "renderer");
