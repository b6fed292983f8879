//! Native module loader.
//!
//! The renderer module is loaded into a process-wide [`ModuleSlot`] before
//! any lifecycle handler runs, and stays loaded until the process dies. It is
//! never unloaded explicitly.

use std::ffi::{OsStr, OsString};

use once_cell::sync::OnceCell;

use crate::{HostError, Result};

/// Something that can bring a module into the process by name.
pub trait ModuleBinder {
    type Module;

    fn bind(&self, name: &str) -> Result<Self::Module>;
}

/// One-time-initialized holder for a process-scoped module.
pub struct ModuleSlot<M> {
    cell: OnceCell<M>,
}

impl<M> ModuleSlot<M> {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    pub fn get(&self) -> Option<&M> {
        self.cell.get()
    }

    /// Load the module through `binder` unless this slot already holds one.
    ///
    /// A repeated call is a no-op that returns the module loaded first; the
    /// binder is not consulted again. A failed load leaves the slot empty.
    pub fn load_once<B>(&self, binder: &B, name: &str) -> Result<&M>
    where
        B: ModuleBinder<Module = M>,
    {
        if let Some(module) = self.cell.get() {
            tracing::warn!("Native module already loaded, ignoring repeated load of `{name}`");
            return Ok(module);
        }

        self.cell.get_or_try_init(|| {
            tracing::info!("Loading native module `{name}`");
            binder.bind(name)
        })
    }
}

impl<M> Default for ModuleSlot<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// The renderer module of this process.
pub static RENDERER_MODULE: ModuleSlot<NativeModule> = ModuleSlot::new();

/// A dynamically loaded native module.
pub struct NativeModule {
    name: String,
    library: libloading::Library,
}

impl NativeModule {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolve an exported symbol.
    ///
    /// # Safety
    ///
    /// `T` must match the actual type of the exported item (usually an
    /// `extern "C"` function pointer).
    pub unsafe fn symbol<T: Copy>(&self, symbol: &'static str) -> Result<T> {
        let resolved = unsafe { self.library.get::<T>(symbol.as_bytes()) };
        resolved
            .map(|sym| *sym)
            .map_err(|source| HostError::MissingSymbol {
                module: self.name.clone(),
                symbol,
                source: Box::new(source),
            })
    }
}

impl std::fmt::Debug for NativeModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeModule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Loads modules with the OS dynamic loader.
///
/// A bare name such as `renderer` is mapped to the platform file name
/// (`librenderer.so`) and looked up on the library search path, which on
/// Android includes the APK's native library directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct DynamicLibraryBinder;

impl DynamicLibraryBinder {
    pub fn file_name(name: &str) -> OsString {
        if name.contains(['/', '.']) {
            OsString::from(name)
        } else {
            libloading::library_filename(name)
        }
    }
}

impl ModuleBinder for DynamicLibraryBinder {
    type Module = NativeModule;

    fn bind(&self, name: &str) -> Result<NativeModule> {
        let file = Self::file_name(name);
        // SAFETY: running the module's initializers is the point of loading it.
        let library = unsafe { open(&file) }.map_err(|source| HostError::ModuleLoad {
            name: name.to_string(),
            source: Box::new(source),
        })?;
        tracing::info!("Native module `{name}` loaded from {}", file.to_string_lossy());

        Ok(NativeModule {
            name: name.to_string(),
            library,
        })
    }
}

// Symbols go into the global namespace so the renderer's own dependencies can resolve against them.
#[cfg(unix)]
unsafe fn open(file: &OsStr) -> std::result::Result<libloading::Library, libloading::Error> {
    use libloading::os::unix::{Library, RTLD_GLOBAL, RTLD_NOW};

    unsafe { Library::open(Some(file), RTLD_NOW | RTLD_GLOBAL) }.map(Into::into)
}

#[cfg(not(unix))]
unsafe fn open(file: &OsStr) -> std::result::Result<libloading::Library, libloading::Error> {
    unsafe { libloading::Library::new(file) }
}
