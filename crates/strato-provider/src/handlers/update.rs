//! Update handler
//!
//! Pipeline: validate the identifier, confirm the application is active,
//! apply the configuration update, re-fetch to learn the current tag
//! state and ARN, then reconcile tags (removals strictly before
//! additions) and finish with a read.
//!
//! The tag delta is computed exactly once and parked in the callback
//! context; recomputing it on a later entry against a partially retagged
//! application would corrupt the delta.

use crate::context::CallbackContext;
use crate::handlers::{handle_error, read, read_active_application};
use crate::model::HandlerRequest;
use crate::progress::{HandlerErrorCode, ProgressEvent};
use crate::tags::TagDelta;
use crate::translate::Operation;
use strato_api::ControlPlane;
use tracing::{debug, info};

pub(crate) async fn handle_update(
    request: &HandlerRequest,
    mut context: CallbackContext,
    client: &dyn ControlPlane,
) -> ProgressEvent {
    let application_id = request
        .desired_state
        .application_id
        .clone()
        .unwrap_or_default();
    if application_id.is_empty() {
        return ProgressEvent::failed(HandlerErrorCode::NotFound, "ApplicationId must be provided");
    }

    // A present delta marks the pre-check, update call and re-fetch as
    // already done; re-entries drop straight into tag reconciliation.
    if context.tag_delta.is_none() {
        if let Err(error) = read_active_application(client, &application_id).await {
            return handle_error(&error, Operation::GetApplication, &application_id, &context);
        }

        info!(application_id, "updating application");
        if let Err(error) = client
            .update_application(request.to_update_request(&application_id))
            .await
        {
            return handle_error(&error, Operation::UpdateApplication, &application_id, &context);
        }

        // Tagging keys on ARN, and the delta must reflect the tag state
        // as of this fetch, before any tag call has run.
        match read_active_application(client, &application_id).await {
            Ok(application) => {
                context.application_arn = Some(application.arn.clone());
                let delta = TagDelta::diff(&application.tags, &request.desired_tags);
                debug!(
                    to_add = delta.to_add.len(),
                    to_remove = delta.to_remove.len(),
                    "computed tag delta"
                );
                context.tag_delta = Some(delta);
            }
            Err(error) => {
                return handle_error(&error, Operation::GetApplication, &application_id, &context);
            }
        }
    }

    let (arn, delta) = match (context.application_arn.clone(), context.tag_delta.clone()) {
        (Some(arn), Some(delta)) => (arn, delta),
        _ => {
            return ProgressEvent::failed(
                HandlerErrorCode::ServiceInternalError,
                "callback context is missing the computed tag delta",
            );
        }
    };

    // Removals first, and each half is cleared in the context once its
    // call succeeds so a later re-entry never replays it. An empty half
    // issues no call at all.
    if !delta.to_remove.is_empty() {
        match client.untag_resource(&arn, &delta.to_remove).await {
            Ok(()) => {
                info!(application_id, removed = delta.to_remove.len(), "tags removed");
                if let Some(delta) = context.tag_delta.as_mut() {
                    delta.to_remove.clear();
                }
            }
            Err(error) => {
                return handle_error(&error, Operation::UntagResource, &application_id, &context);
            }
        }
    }

    if !delta.to_add.is_empty() {
        match client.tag_resource(&arn, &delta.to_add).await {
            Ok(()) => {
                info!(application_id, added = delta.to_add.len(), "tags added");
                if let Some(delta) = context.tag_delta.as_mut() {
                    delta.to_add.clear();
                }
            }
            Err(error) => {
                return handle_error(&error, Operation::TagResource, &application_id, &context);
            }
        }
    }

    read::handle_read(request, context, client).await
}
