use shared_types::{AppConfig, WorkflowSettings};
use std::sync::OnceLock;

static SETTINGS: OnceLock<WorkflowSettings> = OnceLock::new();

/// Default config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Environment variable overriding [`CONFIG_PATH`].
const CONFIG_PATH_VAR: &str = "WORKFLOW_CONFIG";

/// Parse settings from a TOML document. Unparseable input yields defaults.
pub fn parse_settings(contents: &str) -> WorkflowSettings {
    match toml::from_str::<AppConfig>(contents) {
        Ok(config) => config.workflow,
        Err(e) => {
            tracing::warn!(error = %e, "failed to parse workflow config, using defaults");
            WorkflowSettings::default()
        }
    }
}

/// Read the config file once and store the settings in the global
/// `OnceLock`. Only the first call has effect.
///
/// A `.env` file is honoured so `WORKFLOW_CONFIG` can be set per checkout.
/// If the file is missing or unparseable, every setting takes its default.
pub fn load_settings() -> &'static WorkflowSettings {
    SETTINGS.get_or_init(|| {
        dotenvy::dotenv().ok();
        let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| CONFIG_PATH.to_string());
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                let settings = parse_settings(&contents);
                tracing::info!(
                    path = %path,
                    investigation_term_days = settings.investigation_term_days,
                    due_soon_hours = settings.due_soon_hours,
                    "workflow settings loaded"
                );
                settings
            }
            Err(e) => {
                tracing::info!(path = %path, error = %e, "workflow config not found, using defaults");
                WorkflowSettings::default()
            }
        }
    })
}
