//! Lifecycle surface of the renderer module.
//!
//! The renderer exports plain C functions. They are resolved once, right
//! after the module is loaded, and only the platform adapter's event
//! dispatch calls them. The host core never does.

use std::ffi::c_void;
use std::ptr;

use crate::Result;
use crate::loader::NativeModule;

type LifecycleFn = unsafe extern "C" fn();
type SurfaceChangedFn = unsafe extern "C" fn(window: *mut c_void, width: i32, height: i32);

pub const ON_START: &str = "renderer_on_start";
pub const ON_SURFACE_CHANGED: &str = "renderer_on_surface_changed";
pub const ON_PAUSE: &str = "renderer_on_pause";
pub const ON_RESUME: &str = "renderer_on_resume";
pub const ON_DESTROY: &str = "renderer_on_destroy";

#[derive(Debug, Clone, Copy)]
pub struct RendererCallbacks {
    on_start: LifecycleFn,
    on_surface_changed: SurfaceChangedFn,
    on_pause: LifecycleFn,
    on_resume: LifecycleFn,
    on_destroy: LifecycleFn,
}

impl RendererCallbacks {
    /// Resolve every lifecycle entry point. A missing one is a load failure.
    ///
    /// Takes a `'static` module so the function pointers can never outlive it.
    pub fn resolve(module: &'static NativeModule) -> Result<Self> {
        // SAFETY: the signatures above are the renderer's exported ABI.
        unsafe {
            Ok(Self {
                on_start: module.symbol(ON_START)?,
                on_surface_changed: module.symbol(ON_SURFACE_CHANGED)?,
                on_pause: module.symbol(ON_PAUSE)?,
                on_resume: module.symbol(ON_RESUME)?,
                on_destroy: module.symbol(ON_DESTROY)?,
            })
        }
    }

    pub fn start(&self) {
        tracing::debug!("-> {ON_START}");
        unsafe { (self.on_start)() }
    }

    /// `window` is an `ANativeWindow*`, null when the surface went away.
    pub fn surface_changed(&self, window: *mut c_void, width: i32, height: i32) {
        tracing::debug!("-> {ON_SURFACE_CHANGED}({window:?}, {width}x{height})");
        unsafe { (self.on_surface_changed)(window, width, height) }
    }

    pub fn surface_lost(&self) {
        self.surface_changed(ptr::null_mut(), 0, 0);
    }

    pub fn pause(&self) {
        tracing::debug!("-> {ON_PAUSE}");
        unsafe { (self.on_pause)() }
    }

    pub fn resume(&self) {
        tracing::debug!("-> {ON_RESUME}");
        unsafe { (self.on_resume)() }
    }

    pub fn destroy(&self) {
        tracing::debug!("-> {ON_DESTROY}");
        unsafe { (self.on_destroy)() }
    }
}
