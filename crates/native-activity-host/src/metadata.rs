use shadow_rs::shadow;

shadow!(build);

/// Log which build of the host is starting, before the renderer module is loaded.
#[allow(dead_code)] // Allow auto-generated code containing unused build metadata
pub fn log_version_info(app_name: &str) {
    tracing::info!("Starting {app_name} ({})", short_version_info());
    tracing::info!(
        "Host built {} with {} ({})",
        build::BUILD_TIME_2822,
        build::RUST_VERSION,
        build::BUILD_RUST_CHANNEL
    );
}

#[allow(dead_code)] // Allow auto-generated code containing unused build metadata
pub fn short_version_info() -> String {
    format!(
        "{} {} ({}@{}{})",
        build::PROJECT_NAME,
        build::PKG_VERSION,
        build::BRANCH,
        build::SHORT_COMMIT,
        if build::GIT_CLEAN { "" } else { "+dirty" }
    )
}
