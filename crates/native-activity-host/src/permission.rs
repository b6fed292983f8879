//! Storage permission gate.
//!
//! Broad storage access cannot be requested with an in-app prompt; the user
//! has to flip it in the system settings. The gate only checks the current
//! state and, when it is missing, sends the user to the settings page of this
//! package. It never waits for the answer.

use std::fmt;

use crate::Result;
use crate::platform::ActivityPlatform;
use crate::state::PermissionOutcome;

/// `Settings.ACTION_MANAGE_APP_ALL_FILES_ACCESS_PERMISSION`
pub const ACTION_MANAGE_APP_ALL_FILES_ACCESS_PERMISSION: &str =
    "android.settings.MANAGE_APP_ALL_FILES_ACCESS_PERMISSION";

/// An opaque `package:<id>` URI, as built by `Uri.fromParts("package", id, null)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageUri {
    package: String,
}

impl PackageUri {
    pub const SCHEME: &'static str = "package";

    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
        }
    }

    /// Scheme-specific part, i.e. the package identity.
    pub fn package(&self) -> &str {
        &self.package
    }
}

impl fmt::Display for PackageUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", Self::SCHEME, self.package)
    }
}

/// A foreground navigation into another activity (an `Intent` with action and data).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub action: &'static str,
    pub data: PackageUri,
}

impl NavigationRequest {
    /// The settings page granting all-files access to `package`.
    pub fn manage_all_files_access(package: impl Into<String>) -> Self {
        Self {
            action: ACTION_MANAGE_APP_ALL_FILES_ACCESS_PERMISSION,
            data: PackageUri::new(package),
        }
    }
}

/// Check broad storage access and redirect to the settings screen if it is missing.
///
/// The redirect is fire-and-forget: the activity may be paused while the
/// settings screen is shown, but the outcome is only ever observed by a later
/// check (in practice, on the next launch). Dispatch failures are returned
/// unchanged; the caller treats them as fatal.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn check_and_redirect<P: ActivityPlatform>(platform: &mut P) -> Result<PermissionOutcome> {
    if platform.is_external_storage_manager()? {
        tracing::info!("All-files access already granted");
        return Ok(PermissionOutcome::Granted);
    }

    let request = NavigationRequest::manage_all_files_access(platform.package_name()?);
    tracing::info!(
        "All-files access not granted, opening settings ({} {})",
        request.action,
        request.data
    );
    platform.start_activity(&request)?;

    Ok(PermissionOutcome::PendingGrant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, RecordingPlatform};

    #[test]
    fn test_package_uri_format() {
        let uri = PackageUri::new("dev.moon.littlerenderer");
        assert_eq!(uri.to_string(), "package:dev.moon.littlerenderer");
        assert_eq!(uri.package(), "dev.moon.littlerenderer");
    }

    #[test]
    fn test_redirects_when_not_granted() {
        let mut platform = RecordingPlatform::new("com.example.app", false);

        let outcome = check_and_redirect(&mut platform).unwrap();

        assert_eq!(outcome, PermissionOutcome::PendingGrant);
        let navigations = platform.navigations();
        assert_eq!(navigations.len(), 1);
        assert_eq!(
            navigations[0].action,
            "android.settings.MANAGE_APP_ALL_FILES_ACCESS_PERMISSION"
        );
        assert_eq!(navigations[0].data.to_string(), "package:com.example.app");
    }

    #[test]
    fn test_no_redirect_when_granted() {
        let mut platform = RecordingPlatform::new("com.example.app", true);

        let outcome = check_and_redirect(&mut platform).unwrap();

        assert_eq!(outcome, PermissionOutcome::Granted);
        assert!(platform.navigations().is_empty());
        assert!(!platform.calls().contains(&Call::PackageName));
    }

    #[test]
    fn test_dispatch_failure_propagates() {
        let mut platform = RecordingPlatform::new("com.example.app", false);
        platform.fail_navigation = true;

        assert!(check_and_redirect(&mut platform).is_err());
    }
}
