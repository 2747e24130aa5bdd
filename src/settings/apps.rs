//! Installed application filtering.

use crate::config::AppsConfig;

/// Drops entries that contain any disabled marker (case-insensitive) or
/// that exactly match a removed entry. Order of the rest is preserved.
pub fn resolve_installed_components(
    base: &[String],
    disabled_markers: &[String],
    removed: &[String],
) -> Vec<String> {
    let markers: Vec<String> = disabled_markers.iter().map(|m| m.to_lowercase()).collect();

    base.iter()
        .filter(|app| {
            let lower = app.to_lowercase();
            !markers.iter().any(|m| lower.contains(m.as_str()))
        })
        .filter(|app| !removed.contains(app))
        .cloned()
        .collect()
}

/// Applies [`resolve_installed_components`] with the lists from the profile.
pub fn resolve_configured_apps(config: &AppsConfig) -> Vec<String> {
    resolve_installed_components(&config.base, &config.disabled_markers, &config.removed)
}
