//! List handler

use crate::context::CallbackContext;
use crate::handlers::handle_error;
use crate::model::{HandlerRequest, ResourceModel};
use crate::progress::ProgressEvent;
use crate::translate::Operation;
use strato_api::{ApplicationState, ControlPlane, ListApplicationsRequest};
use tracing::info;

/// List applications in the general active set, one page per invocation
pub(crate) async fn handle_list(
    request: &HandlerRequest,
    context: CallbackContext,
    client: &dyn ControlPlane,
) -> ProgressEvent {
    let list_request = ListApplicationsRequest {
        states: ApplicationState::active_states().to_vec(),
        next_token: request.next_token.clone(),
        max_results: None,
    };

    match client.list_applications(list_request).await {
        Ok(response) => {
            info!(count = response.applications.len(), "applications listed");
            ProgressEvent::SuccessList {
                models: response
                    .applications
                    .iter()
                    .map(ResourceModel::from_summary)
                    .collect(),
                next_token: response.next_token,
            }
        }
        Err(error) => handle_error(&error, Operation::ListApplications, "", &context),
    }
}
