//! Progress events returned to the host orchestrator

use crate::context::CallbackContext;
use crate::model::ResourceModel;
use serde::{Deserialize, Serialize};

/// Delay hint for re-polling a resource that is still transitioning
pub const STABILIZATION_DELAY_SECONDS: u64 = 30;

/// Delay hint for re-invoking after a retryable remote failure
pub const RETRY_DELAY_SECONDS: u64 = 5;

/// Stable error kinds surfaced to the host on terminal failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandlerErrorCode {
    InvalidRequest,
    NotFound,
    ResourceConflict,
    ServiceInternalError,
    NotStabilized,
    ServiceLimitExceeded,
    AccessDenied,
    GeneralServiceError,
}

impl std::fmt::Display for HandlerErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HandlerErrorCode::InvalidRequest => write!(f, "InvalidRequest"),
            HandlerErrorCode::NotFound => write!(f, "NotFound"),
            HandlerErrorCode::ResourceConflict => write!(f, "ResourceConflict"),
            HandlerErrorCode::ServiceInternalError => write!(f, "ServiceInternalError"),
            HandlerErrorCode::NotStabilized => write!(f, "NotStabilized"),
            HandlerErrorCode::ServiceLimitExceeded => write!(f, "ServiceLimitExceeded"),
            HandlerErrorCode::AccessDenied => write!(f, "AccessDenied"),
            HandlerErrorCode::GeneralServiceError => write!(f, "GeneralServiceError"),
        }
    }
}

/// Outcome of one handler invocation
///
/// Every invocation returns exactly one of these. `InProgress` hands
/// control back to the host scheduler, which re-invokes the handler with
/// the carried context after roughly `delay_seconds`; the handler itself
/// never sleeps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase", tag = "status")]
pub enum ProgressEvent {
    /// Terminal success. Delete returns no model, matching "the resource
    /// no longer exists".
    Success { model: Option<ResourceModel> },

    /// Terminal success for List: lightweight stubs plus the next page token
    SuccessList {
        models: Vec<ResourceModel>,
        next_token: Option<String>,
    },

    /// Not done yet; re-invoke with this context after the delay
    InProgress {
        context: CallbackContext,
        delay_seconds: u64,
    },

    /// Terminal failure with a stable error kind
    Failed {
        code: HandlerErrorCode,
        message: String,
    },
}

impl ProgressEvent {
    pub fn success(model: ResourceModel) -> Self {
        ProgressEvent::Success { model: Some(model) }
    }

    pub fn in_progress(context: CallbackContext, delay_seconds: u64) -> Self {
        ProgressEvent::InProgress {
            context,
            delay_seconds,
        }
    }

    pub fn failed(code: HandlerErrorCode, message: impl Into<String>) -> Self {
        ProgressEvent::Failed {
            code,
            message: message.into(),
        }
    }

    /// Whether the operation has finished, successfully or not
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ProgressEvent::InProgress { .. })
    }
}
