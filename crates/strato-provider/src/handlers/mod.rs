//! Per-verb operation handlers
//!
//! Each verb is a fixed pipeline over the control-plane client. Every
//! invocation runs to completion synchronously and returns one progress
//! event; all waiting is expressed by returning
//! [`ProgressEvent::InProgress`] and letting the host re-invoke us.

mod create;
mod delete;
mod list;
mod read;
mod update;

use crate::context::CallbackContext;
use crate::model::HandlerRequest;
use crate::progress::{ProgressEvent, RETRY_DELAY_SECONDS};
use crate::retry::{self, RetryDecision};
use crate::translate::{translate_error, Operation};
use serde::{Deserialize, Serialize};
use strato_api::{ApiError, ApiResult, Application, ControlPlane, LifecyclePhase};
use tracing::{debug, warn};

/// The five lifecycle operations a host can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
    List,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Create => write!(f, "create"),
            Action::Read => write!(f, "read"),
            Action::Update => write!(f, "update"),
            Action::Delete => write!(f, "delete"),
            Action::List => write!(f, "list"),
        }
    }
}

/// Entry point invoked by the host once per scheduling step
///
/// A `None` context means this is the first invocation of a fresh logical
/// operation and defaults to a full retry budget with no partial progress.
pub async fn handle(
    action: Action,
    request: &HandlerRequest,
    context: Option<CallbackContext>,
    client: &dyn ControlPlane,
) -> ProgressEvent {
    let context = context.unwrap_or_default();
    debug!(%action, retry_attempts = context.retry_attempts, "handler invoked");

    match action {
        Action::Create => create::handle_create(request, context, client).await,
        Action::Read => read::handle_read(request, context, client).await,
        Action::Update => update::handle_update(request, context, client).await,
        Action::Delete => delete::handle_delete(request, context, client).await,
        Action::List => list::handle_list(request, context, client).await,
    }
}

/// Fetch an application and require it to be active
///
/// An application in an inactive phase is reported as not found, which is
/// what read, update and delete pre-checks all want.
pub(crate) async fn read_active_application(
    client: &dyn ControlPlane,
    application_id: &str,
) -> ApiResult<Application> {
    debug!(application_id, "fetching application");
    let application = client.get_application(application_id).await?;
    if application.state.phase() == LifecyclePhase::Inactive {
        return Err(ApiError::NotFound(format!(
            "application {} is not active, state: {}",
            application_id, application.state
        )));
    }
    Ok(application)
}

/// Shared failure path: consult the retry policy, then either schedule a
/// re-invocation or translate into a terminal failure
pub(crate) fn handle_error(
    error: &ApiError,
    operation: Operation,
    application_id: &str,
    context: &CallbackContext,
) -> ProgressEvent {
    warn!(%operation, %error, "remote call failed");
    match retry::decide(error, context) {
        RetryDecision::Retry { context } => {
            debug!(
                remaining = context.retry_attempts,
                "scheduling retry of failed operation"
            );
            ProgressEvent::in_progress(context, RETRY_DELAY_SECONDS)
        }
        RetryDecision::Fail => {
            let (code, message) =
                translate_error(error, operation, application_id, context.stabilization_failed);
            ProgressEvent::failed(code, message)
        }
    }
}
