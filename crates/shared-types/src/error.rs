use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::investigation::{InvestigationStage, ServiceActionKind};
use crate::record::RecordKind;

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    ValidationError,
    Conflict,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::Conflict => write!(f, "Conflict"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured error handed to whatever surface sits above the workflow core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::NotFound,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::BadRequest,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Conflict,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InternalError,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

// ---------------------------------------------------------------------------
// Workflow failures
// ---------------------------------------------------------------------------

/// Typed failure of a stage transition. A failed transition never writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WorkflowError {
    /// The action is not permitted from the record's current stage.
    InvalidTransition {
        stage: InvestigationStage,
        action: ServiceActionKind,
    },
    /// A field the transition requires is empty.
    MissingRequiredField {
        field: String,
        stage: InvestigationStage,
    },
    /// A penalty entry names an officer that is not tagged on the record.
    OfficerNotTagged { officer_id: String },
    /// Stage actions only apply to service investigations.
    NotAnInvestigation { kind: RecordKind },
}

impl WorkflowError {
    pub fn missing(field: &str, stage: InvestigationStage) -> Self {
        WorkflowError::MissingRequiredField {
            field: field.to_string(),
            stage,
        }
    }
}

impl fmt::Display for WorkflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkflowError::InvalidTransition { stage, action } => write!(
                f,
                "action {} is not available in stage {}",
                action.as_str(),
                stage.as_str()
            ),
            WorkflowError::MissingRequiredField { field, stage } => {
                write!(f, "field '{}' is required in stage {}", field, stage.as_str())
            }
            WorkflowError::OfficerNotTagged { officer_id } => {
                write!(f, "officer {} is not tagged on this record", officer_id)
            }
            WorkflowError::NotAnInvestigation { kind } => {
                write!(f, "{} records have no investigation process", kind.as_str())
            }
        }
    }
}

impl std::error::Error for WorkflowError {}

impl From<WorkflowError> for AppError {
    fn from(err: WorkflowError) -> Self {
        match &err {
            WorkflowError::MissingRequiredField { field, .. } => {
                let mut fields = HashMap::new();
                fields.insert(field.clone(), "Обов'язкове поле".to_string());
                AppError::validation(err.to_string(), fields)
            }
            WorkflowError::OfficerNotTagged { officer_id } => {
                let mut fields = HashMap::new();
                fields.insert(
                    "penalties".to_string(),
                    format!("Поліцейський {officer_id} не доданий до картки"),
                );
                AppError::validation(err.to_string(), fields)
            }
            WorkflowError::InvalidTransition { .. } | WorkflowError::NotAnInvestigation { .. } => {
                AppError::bad_request(err.to_string())
            }
        }
    }
}
