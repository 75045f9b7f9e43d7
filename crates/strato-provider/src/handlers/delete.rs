//! Delete handler
//!
//! Pre-checks that the application is still active (deleting something
//! that is already gone is a not-found failure), issues the delete call
//! once, then polls until the lookup itself reports not-found.

use crate::context::CallbackContext;
use crate::handlers::{handle_error, read_active_application};
use crate::model::HandlerRequest;
use crate::progress::{ProgressEvent, STABILIZATION_DELAY_SECONDS};
use crate::translate::Operation;
use strato_api::{ApiError, ControlPlane};
use tracing::{debug, info};

pub(crate) async fn handle_delete(
    request: &HandlerRequest,
    mut context: CallbackContext,
    client: &dyn ControlPlane,
) -> ProgressEvent {
    let application_id = request
        .desired_state
        .application_id
        .clone()
        .unwrap_or_default();

    if !context.delete_requested {
        // Pre-deletion check runs only before the delete call: afterwards
        // the application is inactive by design and would look not-found.
        if let Err(error) = read_active_application(client, &application_id).await {
            return handle_error(&error, Operation::GetApplication, &application_id, &context);
        }

        info!(application_id, "deleting application");
        match client.delete_application(&application_id).await {
            Ok(()) => context.delete_requested = true,
            Err(error) => {
                return handle_error(
                    &error,
                    Operation::DeleteApplication,
                    &application_id,
                    &context,
                );
            }
        }
    }

    // Deletion has stabilized once the active lookup reports not-found.
    match read_active_application(client, &application_id).await {
        Err(ApiError::NotFound(_)) => {
            info!(application_id, "application deleted");
            ProgressEvent::Success { model: None }
        }
        Ok(application) => {
            debug!(application_id, state = %application.state, "application still deleting");
            ProgressEvent::in_progress(context, STABILIZATION_DELAY_SECONDS)
        }
        Err(error) => handle_error(&error, Operation::GetApplication, &application_id, &context),
    }
}
