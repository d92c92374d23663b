use serde::{Deserialize, Serialize};

/// Tunables for the investigation workflow and the record list.
///
/// Loaded from `config.toml`. Every field has a default so that a
/// missing or incomplete config file still yields a working setup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkflowSettings {
    /// Days allowed for an investigation, counted from the appointing order.
    #[serde(default = "default_investigation_term_days")]
    pub investigation_term_days: i64,
    /// Look-ahead window for the due-soon list.
    #[serde(default = "default_due_soon_hours")]
    pub due_soon_hours: i64,
}

fn default_investigation_term_days() -> i64 {
    15
}

fn default_due_soon_hours() -> i64 {
    24
}

impl Default for WorkflowSettings {
    fn default() -> Self {
        Self {
            investigation_term_days: default_investigation_term_days(),
            due_soon_hours: default_due_soon_hours(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub workflow: WorkflowSettings,
}
