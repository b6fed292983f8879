//! Lifecycle state machine of the host.
//!
//! ```text
//! Uninitialized -> ModuleLoaded -> DisplayConfigured
//!     -> PermissionChecked(PendingGrant | Granted) -> Running -> Terminated
//! ```
//!
//! `Terminated` is absorbing. It can be entered from any state after the
//! module is loaded, since the OS may destroy the activity at any point.

use crate::{HostError, Result};

/// Outcome of the storage permission check for one activity creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionOutcome {
    /// The settings screen was dispatched; the grant (if any) is observed on a later check.
    PendingGrant,
    Granted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HostState {
    #[default]
    Uninitialized,
    ModuleLoaded,
    DisplayConfigured,
    PermissionChecked(PermissionOutcome),
    Running,
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    LoadModule,
    ConfigureDisplay,
    CheckPermission(PermissionOutcome),
    Run,
    Terminate,
}

impl HostState {
    /// Apply `transition`, returning the next state or an
    /// [`HostError::InvalidTransition`] if it is not allowed from `self`.
    pub fn apply(self, transition: Transition) -> Result<HostState> {
        use HostState as S;
        use Transition as T;

        let next = match (self, transition) {
            (S::Uninitialized, T::LoadModule) => S::ModuleLoaded,
            (S::ModuleLoaded, T::ConfigureDisplay) => S::DisplayConfigured,
            (S::DisplayConfigured, T::CheckPermission(outcome)) => S::PermissionChecked(outcome),
            // A pending grant never blocks the renderer.
            (S::PermissionChecked(_), T::Run) => S::Running,
            (
                S::ModuleLoaded | S::DisplayConfigured | S::PermissionChecked(_) | S::Running,
                T::Terminate,
            ) => S::Terminated,
            (from, transition) => return Err(HostError::InvalidTransition { from, transition }),
        };
        Ok(next)
    }

    pub fn is_terminal(self) -> bool {
        self == HostState::Terminated
    }
}
