//! Desktop stand-in for the Android platform.
//!
//! Runs the real bootstrap sequence (module load, keep-awake, permission
//! gate, process kill) against a platform that only logs what Android would
//! do. With `--load-module` the renderer module is really loaded and its
//! lifecycle entry points are driven, which is handy to smoke-test a renderer
//! build off-device.

use std::time::Duration;

use crate::cli::SimulationArgs;
use crate::config::HostConfig;
use crate::display::WindowFlags;
use crate::glue::RendererCallbacks;
use crate::host::ActivityHost;
use crate::loader::{DynamicLibraryBinder, ModuleBinder, ModuleSlot, RENDERER_MODULE};
use crate::permission::NavigationRequest;
use crate::platform::ActivityPlatform;
use crate::terminator::OsProcess;
use crate::Result;

/// Marker for a module whose load was only simulated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedModule {
    pub name: String,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedBinder;

impl ModuleBinder for SimulatedBinder {
    type Module = SimulatedModule;

    fn bind(&self, name: &str) -> Result<SimulatedModule> {
        tracing::info!(
            "[simulated] System.loadLibrary({name:?}) -> {}",
            DynamicLibraryBinder::file_name(name).to_string_lossy()
        );
        Ok(SimulatedModule {
            name: name.to_string(),
        })
    }
}

static SIMULATED_MODULE: ModuleSlot<SimulatedModule> = ModuleSlot::new();

#[derive(Debug)]
pub struct SimulatedPlatform {
    package: String,
    granted: bool,
    flags: WindowFlags,
    navigations: Vec<NavigationRequest>,
    renderer: Option<RendererCallbacks>,
}

impl SimulatedPlatform {
    pub fn new(package: impl Into<String>, granted: bool) -> Self {
        Self {
            package: package.into(),
            granted,
            flags: WindowFlags::empty(),
            navigations: Vec::new(),
            renderer: None,
        }
    }

    pub fn with_renderer(mut self, renderer: RendererCallbacks) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn window_flags(&self) -> WindowFlags {
        self.flags
    }

    pub fn navigations(&self) -> &[NavigationRequest] {
        &self.navigations
    }
}

impl ActivityPlatform for SimulatedPlatform {
    fn is_external_storage_manager(&mut self) -> Result<bool> {
        tracing::info!("[simulated] Environment.isExternalStorageManager() -> {}", self.granted);
        Ok(self.granted)
    }

    fn package_name(&mut self) -> Result<String> {
        Ok(self.package.clone())
    }

    fn start_activity(&mut self, request: &NavigationRequest) -> Result<()> {
        tracing::info!(
            "[simulated] startActivity(Intent {{ act={} dat={} }})",
            request.action,
            request.data
        );
        self.navigations.push(request.clone());
        Ok(())
    }

    fn add_window_flags(&mut self, flags: WindowFlags) {
        self.flags |= flags;
        tracing::info!("[simulated] Window.addFlags({:#x})", flags.bits());
    }

    fn super_on_create(&mut self, _saved_state: Option<&[u8]>) -> Result<()> {
        tracing::info!("[simulated] NativeActivity.onCreate (window flags {:#x})", self.flags.bits());
        if let Some(renderer) = &self.renderer {
            renderer.start();
        }
        Ok(())
    }

    fn super_on_destroy(&mut self) {
        tracing::info!("[simulated] NativeActivity.onDestroy");
        if let Some(renderer) = &self.renderer {
            renderer.destroy();
        }
    }
}

/// Run one simulated launch from process attach to process kill.
pub fn run(config: &HostConfig, args: &SimulationArgs) -> Result<()> {
    let module_name = args.module_name(config.module_name);
    let mut platform = SimulatedPlatform::new(args.package.clone(), args.granted);

    let mut host = if args.load_module {
        let (host, module) =
            ActivityHost::bootstrap(&RENDERER_MODULE, &DynamicLibraryBinder, &module_name)?;
        platform = platform.with_renderer(RendererCallbacks::resolve(module)?);
        host
    } else {
        let (host, _) = ActivityHost::bootstrap(&SIMULATED_MODULE, &SimulatedBinder, &module_name)?;
        host
    };

    host.on_create(&mut platform, None)?;

    if args.run_millis > 0 {
        tracing::info!("Running for {} ms", args.run_millis);
        std::thread::sleep(Duration::from_millis(args.run_millis));
    }

    host.on_destroy(&mut platform, &mut OsProcess)
}
