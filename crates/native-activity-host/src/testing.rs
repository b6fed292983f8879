//! Recording fakes for the platform and process seams.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::display::WindowFlags;
use crate::loader::ModuleBinder;
use crate::permission::NavigationRequest;
use crate::platform::ActivityPlatform;
use crate::terminator::{Pid, ProcessControl};
use crate::{HostError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    IsExternalStorageManager,
    PackageName,
    StartActivity(NavigationRequest),
    AddWindowFlags(WindowFlags),
    /// Base init, with the window flags that were set at that moment.
    SuperOnCreate { flags: WindowFlags },
    SuperOnDestroy,
    Kill(Pid),
}

/// Shared, ordered log of every call made through the fakes.
pub type Journal = Rc<RefCell<Vec<Call>>>;

pub struct RecordingPlatform {
    journal: Journal,
    package: String,
    granted: bool,
    flags: WindowFlags,
    pub fail_navigation: bool,
}

impl RecordingPlatform {
    pub fn new(package: &str, granted: bool) -> Self {
        Self::with_journal(Journal::default(), package, granted)
    }

    pub fn with_journal(journal: Journal, package: &str, granted: bool) -> Self {
        Self {
            journal,
            package: package.to_string(),
            granted,
            flags: WindowFlags::empty(),
            fail_navigation: false,
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.journal.borrow().clone()
    }

    pub fn navigations(&self) -> Vec<NavigationRequest> {
        self.journal
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::StartActivity(request) => Some(request.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.journal.borrow_mut().push(call);
    }
}

impl ActivityPlatform for RecordingPlatform {
    fn is_external_storage_manager(&mut self) -> Result<bool> {
        self.record(Call::IsExternalStorageManager);
        Ok(self.granted)
    }

    fn package_name(&mut self) -> Result<String> {
        self.record(Call::PackageName);
        Ok(self.package.clone())
    }

    fn start_activity(&mut self, request: &NavigationRequest) -> Result<()> {
        if self.fail_navigation {
            return Err(HostError::Platform(format!(
                "No Activity found to handle Intent {{ act={} }}",
                request.action
            )));
        }
        self.record(Call::StartActivity(request.clone()));
        Ok(())
    }

    fn add_window_flags(&mut self, flags: WindowFlags) {
        self.flags |= flags;
        self.record(Call::AddWindowFlags(flags));
    }

    fn super_on_create(&mut self, _saved_state: Option<&[u8]>) -> Result<()> {
        self.record(Call::SuperOnCreate { flags: self.flags });
        Ok(())
    }

    fn super_on_destroy(&mut self) {
        self.record(Call::SuperOnDestroy);
    }
}

pub struct RecordingProcess {
    journal: Journal,
    pub pid: Pid,
}

impl RecordingProcess {
    pub fn new(journal: Journal, pid: i32) -> Self {
        Self {
            journal,
            pid: Pid(pid),
        }
    }
}

impl ProcessControl for RecordingProcess {
    fn my_pid(&self) -> Pid {
        self.pid
    }

    fn kill_process(&mut self, pid: Pid) {
        self.journal.borrow_mut().push(Call::Kill(pid));
    }
}

/// Binder that hands out its module name and counts how often it was asked.
#[derive(Default)]
pub struct CountingBinder {
    pub binds: Cell<usize>,
    pub fail: bool,
}

impl ModuleBinder for CountingBinder {
    type Module = String;

    fn bind(&self, name: &str) -> Result<String> {
        self.binds.set(self.binds.get() + 1);
        if self.fail {
            return Err(HostError::ModuleLoad {
                name: name.to_string(),
                source: format!("dlopen failed: library \"lib{name}.so\" not found").into(),
            });
        }
        Ok(name.to_string())
    }
}
