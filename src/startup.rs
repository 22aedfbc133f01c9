// Startup module - boot sequence shown in the log panel
//
// The TUI owns the screen from the first frame, so the banner and module
// status go through tracing and land in the System Logs panel.

use crate::config::{Config, VERSION};

/// Module loading result for display
pub struct ModuleStatus {
    pub name: &'static str,
    pub enabled: bool,
    pub description: &'static str,
}

fn get_module_status(config: &Config) -> Vec<ModuleStatus> {
    let session = &config.session;
    vec![
        ModuleStatus {
            name: "session",
            enabled: true,
            description: "Gate, tabs and collections",
        },
        ModuleStatus {
            name: "tui",
            enabled: true,
            description: "Terminal interface",
        },
        ModuleStatus {
            name: "log-panel",
            enabled: config.show_logs,
            description: "System logs at startup",
        },
        ModuleStatus {
            name: "file-logs",
            enabled: config.logging.file_enabled,
            description: "JSON log files",
        },
        ModuleStatus {
            name: "seeded-rng",
            enabled: session.seed.is_some(),
            description: "Reproducible simulations",
        },
        ModuleStatus {
            name: "gps",
            enabled: session.gps_enabled,
            description: "Simulated device location",
        },
    ]
}

/// Print the boot sequence to the log panel
pub fn log_startup(config: &Config) {
    tracing::info!("═══════════════════════════════════");
    tracing::info!("  🌳 ECOGUARD v{}", VERSION);
    tracing::info!("═══════════════════════════════════");

    match Config::config_path() {
        Some(path) if path.exists() => tracing::info!("Config: {}", path.display()),
        _ => tracing::info!("Config: (using defaults)"),
    }

    tracing::info!("Loading modules...");
    for module in get_module_status(config) {
        let icon = if module.enabled { "✓" } else { "○" };
        tracing::info!("  {} {} - {}", icon, module.name, module.description);
    }

    tracing::info!(
        user = %config.session.user_name,
        role = config.session.role.as_str(),
        "Ready. Sign in to begin"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_modules_follow_config() {
        let mut config = Config::default();
        config.session.seed = Some(3);
        config.session.gps_enabled = false;

        let modules = get_module_status(&config);
        let enabled = |name: &str| modules.iter().any(|m| m.name == name && m.enabled);
        assert!(enabled("session"));
        assert!(enabled("seeded-rng"));
        assert!(!enabled("gps"));
        assert!(!enabled("file-logs"));
    }
}
