//! The host activity: lifecycle handlers wiring the bootstrap steps together.
//!
//! The OS is the scheduler. Each handler performs one transition of the
//! [`HostState`] machine and returns; there is no host-owned main loop.

use crate::display;
use crate::loader::{ModuleBinder, ModuleSlot};
use crate::permission;
use crate::platform::ActivityPlatform;
use crate::state::{HostState, PermissionOutcome, Transition};
use crate::terminator::{self, ProcessControl};
use crate::Result;

#[derive(Debug, Default)]
pub struct ActivityHost {
    state: HostState,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl ActivityHost {
    /// Process attach: load the renderer module into `slot` and create the host.
    ///
    /// Must run before any lifecycle callback is dispatched.
    pub fn bootstrap<'s, B: ModuleBinder>(
        slot: &'s ModuleSlot<B::Module>,
        binder: &B,
        module_name: &str,
    ) -> Result<(Self, &'s B::Module)> {
        let module = slot.load_once(binder, module_name)?;
        let mut host = Self::default();
        host.advance(Transition::LoadModule)?;
        Ok((host, module))
    }

    pub fn state(&self) -> HostState {
        self.state
    }

    /// "onCreate": keep the screen on, run the base initialization, then check
    /// the storage permission.
    ///
    /// The saved instance state is handed to the base step untouched and
    /// otherwise ignored; the host keeps no state of its own. A pending grant
    /// does not hold the host back from `Running`.
    pub fn on_create<P: ActivityPlatform>(
        &mut self,
        platform: &mut P,
        saved_state: Option<&[u8]>,
    ) -> Result<PermissionOutcome> {
        let configured = self.state.apply(Transition::ConfigureDisplay)?;
        display::keep_screen_on(platform);
        self.state = configured;

        platform.super_on_create(saved_state)?;

        let outcome = permission::check_and_redirect(platform)?;
        self.advance(Transition::CheckPermission(outcome))?;
        self.advance(Transition::Run)?;
        tracing::info!("Host running (storage permission: {outcome:?})");

        Ok(outcome)
    }

    /// "onDestroy": run the base destruction step, then kill the process.
    ///
    /// With a real [`ProcessControl`] this does not return.
    pub fn on_destroy<P: ActivityPlatform, C: ProcessControl>(
        &mut self,
        platform: &mut P,
        process: &mut C,
    ) -> Result<()> {
        let terminated = self.state.apply(Transition::Terminate)?;
        platform.super_on_destroy();
        self.state = terminated;
        terminator::terminate(process);
        Ok(())
    }

    fn advance(&mut self, transition: Transition) -> Result<()> {
        let next = self.state.apply(transition)?;
        tracing::debug!("Host state {:?} -> {:?}", self.state, next);
        self.state = next;
        Ok(())
    }
}
