//! Android platform adapter.
//!
//! `android-activity` provides the `NativeActivity` glue and runs
//! `android_main` on a dedicated native thread. This module implements the
//! host's platform seam on top of it (JNI calls into the Java `Activity`) and
//! forwards lifecycle events to the renderer module.

use android_activity::{MainEvent, PollEvent, WindowManagerFlags};
use jni::objects::{JObject, JString, JValue};
use jni::{JNIEnv, JavaVM};

pub use android_activity::AndroidApp;

use crate::config::HostConfig;
use crate::display::WindowFlags;
use crate::glue::RendererCallbacks;
use crate::host::ActivityHost;
use crate::loader::{DynamicLibraryBinder, RENDERER_MODULE};
use crate::permission::{NavigationRequest, PackageUri};
use crate::platform::ActivityPlatform;
use crate::terminator::OsProcess;
use crate::{HostError, Result};

pub struct AndroidPlatform {
    app: AndroidApp,
    vm: JavaVM,
    renderer: RendererCallbacks,
}

impl AndroidPlatform {
    pub fn new(app: AndroidApp, renderer: RendererCallbacks) -> Result<Self> {
        // SAFETY: android-activity hands out the process' JavaVM, valid for the process lifetime.
        let vm = unsafe { JavaVM::from_raw(app.vm_as_ptr().cast()) }?;
        tracing::debug!("Obtained JavaVM");
        Ok(Self { app, vm, renderer })
    }

    /// Run `f` with an attached JNI env and the `Activity` inside a fresh local frame.
    ///
    /// A Java exception thrown by `f` is printed to logcat before it is turned
    /// into a [`HostError::Jni`].
    fn with_activity<T>(
        &self,
        f: impl FnOnce(&mut JNIEnv, &JObject) -> jni::errors::Result<T>,
    ) -> Result<T> {
        let mut env = self.vm.attach_current_thread()?;
        // SAFETY: a global reference owned by android-activity. It must not be deleted,
        // so it is never wrapped in an AutoLocal or GlobalRef.
        let activity = unsafe { JObject::from_raw(self.app.activity_as_ptr().cast()) };

        env.with_local_frame(16, |env| f(env, &activity))
            .map_err(|err| {
                if env.exception_check().unwrap_or(false) {
                    let _ = env.exception_describe();
                    let _ = env.exception_clear();
                }
                HostError::Jni(err)
            })
    }
}

impl ActivityPlatform for AndroidPlatform {
    fn is_external_storage_manager(&mut self) -> Result<bool> {
        self.with_activity(|env, _| {
            env.call_static_method(
                "android/os/Environment",
                "isExternalStorageManager",
                "()Z",
                &[],
            )?
            .z()
        })
    }

    fn package_name(&mut self) -> Result<String> {
        self.with_activity(|env, activity| {
            let name = env
                .call_method(activity, "getPackageName", "()Ljava/lang/String;", &[])?
                .l()?;
            let name = JString::from(name);
            let name: String = env.get_string(&name)?.into();
            Ok(name)
        })
    }

    fn start_activity(&mut self, request: &NavigationRequest) -> Result<()> {
        self.with_activity(|env, activity| {
            let action = env.new_string(request.action)?;
            let intent = env.new_object(
                "android/content/Intent",
                "(Ljava/lang/String;)V",
                &[JValue::Object(&action)],
            )?;

            let scheme = env.new_string(PackageUri::SCHEME)?;
            let package = env.new_string(request.data.package())?;
            let uri = env
                .call_static_method(
                    "android/net/Uri",
                    "fromParts",
                    "(Ljava/lang/String;Ljava/lang/String;Ljava/lang/String;)Landroid/net/Uri;",
                    &[
                        JValue::Object(&scheme),
                        JValue::Object(&package),
                        JValue::Object(&JObject::null()),
                    ],
                )?
                .l()?;
            env.call_method(
                &intent,
                "setData",
                "(Landroid/net/Uri;)Landroid/content/Intent;",
                &[JValue::Object(&uri)],
            )?;

            env.call_method(
                activity,
                "startActivity",
                "(Landroid/content/Intent;)V",
                &[JValue::Object(&intent)],
            )?;
            Ok(())
        })?;
        tracing::debug!("startActivity dispatched");
        Ok(())
    }

    fn add_window_flags(&mut self, flags: WindowFlags) {
        self.app.set_window_flags(
            WindowManagerFlags::from_bits_truncate(flags.bits()),
            WindowManagerFlags::empty(),
        );
    }

    fn super_on_create(&mut self, _saved_state: Option<&[u8]>) -> Result<()> {
        self.renderer.start();
        Ok(())
    }

    fn super_on_destroy(&mut self) {
        self.renderer.destroy();
    }
}

/// Bootstrap the host and forward lifecycle events until the activity is destroyed.
///
/// Returns only on error; a clean destruction kills the process.
pub fn run(app: AndroidApp, config: &HostConfig) -> Result<()> {
    let (mut host, module) =
        ActivityHost::bootstrap(&RENDERER_MODULE, &DynamicLibraryBinder, config.module_name)?;
    let renderer = RendererCallbacks::resolve(module)?;
    let mut platform = AndroidPlatform::new(app.clone(), renderer)?;

    // NativeActivity only passes saved state to the native thread on resume.
    host.on_create(&mut platform, None)?;

    let mut destroyed = false;
    while !destroyed {
        app.poll_events(None, |event| {
            let PollEvent::Main(event) = event else {
                return;
            };
            match event {
                MainEvent::InitWindow { .. } | MainEvent::WindowResized { .. } => {
                    // The renderer must acquire the window itself if it keeps it.
                    if let Some(window) = app.native_window() {
                        renderer.surface_changed(
                            window.ptr().as_ptr().cast(),
                            window.width(),
                            window.height(),
                        );
                    }
                }
                MainEvent::TerminateWindow { .. } => renderer.surface_lost(),
                MainEvent::Pause => renderer.pause(),
                MainEvent::Resume { .. } => renderer.resume(),
                MainEvent::Destroy => destroyed = true,
                _ => {}
            }
        });
    }

    host.on_destroy(&mut platform, &mut OsProcess)
}
