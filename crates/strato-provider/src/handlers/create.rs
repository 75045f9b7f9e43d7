//! Create handler
//!
//! Issues the create call once, then polls the application state one
//! lookup per invocation until it reaches a stable end state, and finally
//! re-runs the read pipeline to produce the observed model.

use crate::context::CallbackContext;
use crate::handlers::{handle_error, read, read_active_application};
use crate::model::HandlerRequest;
use crate::progress::{ProgressEvent, STABILIZATION_DELAY_SECONDS};
use crate::translate::Operation;
use strato_api::{ApiError, ControlPlane, LifecyclePhase};
use tracing::{debug, info};

pub(crate) async fn handle_create(
    request: &HandlerRequest,
    mut context: CallbackContext,
    client: &dyn ControlPlane,
) -> ProgressEvent {
    // The create call happens exactly once per logical operation;
    // re-entries resume at the stabilization poll below.
    let application_id = match context.application_id.clone() {
        Some(application_id) => application_id,
        None => {
            info!(token = %request.client_request_token, "creating application");
            match client.create_application(request.to_create_request()).await {
                Ok(response) => {
                    info!(application_id = %response.application_id, "application created");
                    context.application_id = Some(response.application_id.clone());
                    context.application_arn = Some(response.arn.clone());
                    response.application_id
                }
                Err(error) => {
                    return handle_error(&error, Operation::CreateApplication, "", &context);
                }
            }
        }
    };

    // One stabilization poll per invocation, no sleeping here.
    match read_active_application(client, &application_id).await {
        Ok(application) if application.state.phase() == LifecyclePhase::Settled => {
            debug!(application_id, state = %application.state, "application stabilized");
            let mut read_request = request.clone();
            read_request.desired_state.application_id = Some(application_id);
            read::handle_read(&read_request, context, client).await
        }
        Ok(application) => {
            debug!(application_id, state = %application.state, "application still transitioning");
            ProgressEvent::in_progress(context, STABILIZATION_DELAY_SECONDS)
        }
        // A create whose resource vanished is escalated, not retried past
        // budget: latch stabilization failure so the internal error below
        // surfaces as NotStabilized.
        Err(ApiError::NotFound(_)) => {
            context.stabilization_failed = true;
            let error = ApiError::InternalServer(format!(
                "application {application_id} disappeared before reaching a stable state"
            ));
            handle_error(&error, Operation::GetApplication, &application_id, &context)
        }
        Err(error) => handle_error(&error, Operation::GetApplication, &application_id, &context),
    }
}
