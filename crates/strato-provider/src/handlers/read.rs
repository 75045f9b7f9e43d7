//! Read handler

use crate::context::CallbackContext;
use crate::handlers::{handle_error, read_active_application};
use crate::model::{HandlerRequest, ResourceModel};
use crate::progress::{HandlerErrorCode, ProgressEvent};
use crate::translate::Operation;
use strato_api::ControlPlane;
use tracing::info;

/// Look up the application and translate it to the public model
///
/// An empty identifier never reaches the control plane: it is a fatal
/// not-found, since the host may legitimately probe resources that were
/// never created.
pub(crate) async fn handle_read(
    request: &HandlerRequest,
    context: CallbackContext,
    client: &dyn ControlPlane,
) -> ProgressEvent {
    let application_id = request
        .desired_state
        .application_id
        .clone()
        .unwrap_or_default();
    if application_id.is_empty() {
        return ProgressEvent::failed(HandlerErrorCode::NotFound, "ApplicationId was not provided");
    }

    match read_active_application(client, &application_id).await {
        Ok(application) => {
            info!(application_id, "application read");
            ProgressEvent::success(ResourceModel::from_application(&application))
        }
        Err(error) => handle_error(&error, Operation::GetApplication, &application_id, &context),
    }
}
