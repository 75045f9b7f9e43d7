//! Error taxonomy translation
//!
//! Maps control-plane failures to the stable error kinds the host acts on.
//! The match order is load-bearing: an internal error is checked against
//! the stabilization latch before it is generically classified, and the
//! access-denied string match only applies after every structured variant
//! has been exhausted.

use crate::model::TYPE_NAME;
use crate::progress::HandlerErrorCode;
use strato_api::ApiError;

/// Wire code the control plane uses for authorization failures
pub const ACCESS_DENIED_ERROR_CODE: &str = "AccessDeniedException";

/// Remote operation a failure is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GetApplication,
    CreateApplication,
    UpdateApplication,
    DeleteApplication,
    ListApplications,
    TagResource,
    UntagResource,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::GetApplication => write!(f, "GetApplication"),
            Operation::CreateApplication => write!(f, "CreateApplication"),
            Operation::UpdateApplication => write!(f, "UpdateApplication"),
            Operation::DeleteApplication => write!(f, "DeleteApplication"),
            Operation::ListApplications => write!(f, "ListApplications"),
            Operation::TagResource => write!(f, "TagResource"),
            Operation::UntagResource => write!(f, "UntagResource"),
        }
    }
}

/// Translate a control-plane error into a caller-facing error kind and
/// message. First match wins.
pub fn translate_error(
    error: &ApiError,
    operation: Operation,
    application_id: &str,
    stabilization_failed: bool,
) -> (HandlerErrorCode, String) {
    match error {
        ApiError::Validation(message) => (HandlerErrorCode::InvalidRequest, message.clone()),
        ApiError::NotFound(message) => {
            let message = if application_id.is_empty() {
                message.clone()
            } else {
                format!("{TYPE_NAME} with id {application_id} was not found")
            };
            (HandlerErrorCode::NotFound, message)
        }
        // The latch distinguishes "the API is flaky" from "we polled and
        // the resource settled in the wrong state".
        ApiError::InternalServer(_) if stabilization_failed => (
            HandlerErrorCode::NotStabilized,
            format!("{TYPE_NAME} with id {application_id} did not stabilize"),
        ),
        ApiError::InternalServer(message) => (
            HandlerErrorCode::ServiceInternalError,
            format!("{operation} failed: {message}"),
        ),
        ApiError::QuotaExceeded(message) => (
            HandlerErrorCode::ServiceLimitExceeded,
            format!("limit exceeded for {TYPE_NAME}: {message}"),
        ),
        ApiError::Conflict(message) => {
            let message = if application_id.is_empty() {
                message.clone()
            } else {
                format!("conflict updating {TYPE_NAME} with id {application_id}: {message}")
            };
            (HandlerErrorCode::ResourceConflict, message)
        }
        ApiError::Service { .. } if error.code() == ACCESS_DENIED_ERROR_CODE => (
            HandlerErrorCode::AccessDenied,
            format!("access denied for {TYPE_NAME}: {}", error.message()),
        ),
        _ => (
            HandlerErrorCode::GeneralServiceError,
            format!("{operation} failed: {}", error.message()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_invalid_request() {
        let (code, message) = translate_error(
            &ApiError::Validation("releaseLabel is required".to_string()),
            Operation::CreateApplication,
            "",
            false,
        );
        assert_eq!(code, HandlerErrorCode::InvalidRequest);
        assert_eq!(message, "releaseLabel is required");
    }

    #[test]
    fn not_found_message_includes_the_id_when_present() {
        let error = ApiError::NotFound("gone".to_string());
        let (code, message) =
            translate_error(&error, Operation::GetApplication, "app-1", false);
        assert_eq!(code, HandlerErrorCode::NotFound);
        assert!(message.contains("app-1"));

        let (_, anonymous) = translate_error(&error, Operation::GetApplication, "", false);
        assert_eq!(anonymous, "gone");
    }

    #[test]
    fn latched_internal_error_overrides_generic_classification() {
        let error = ApiError::InternalServer("boom".to_string());
        let (latched, _) = translate_error(&error, Operation::GetApplication, "app-1", true);
        assert_eq!(latched, HandlerErrorCode::NotStabilized);

        let (unlatched, _) = translate_error(&error, Operation::GetApplication, "app-1", false);
        assert_eq!(unlatched, HandlerErrorCode::ServiceInternalError);
    }

    #[test]
    fn quota_and_conflict_map_to_their_kinds() {
        let (quota, _) = translate_error(
            &ApiError::QuotaExceeded("too many applications".to_string()),
            Operation::CreateApplication,
            "",
            false,
        );
        assert_eq!(quota, HandlerErrorCode::ServiceLimitExceeded);

        let (conflict, _) = translate_error(
            &ApiError::Conflict("update in progress".to_string()),
            Operation::UpdateApplication,
            "app-1",
            false,
        );
        assert_eq!(conflict, HandlerErrorCode::ResourceConflict);
    }

    #[test]
    fn access_denied_is_detected_from_code_then_message() {
        let structured = ApiError::Service {
            code: ACCESS_DENIED_ERROR_CODE.to_string(),
            message: "not allowed".to_string(),
        };
        let (code, _) = translate_error(&structured, Operation::TagResource, "app-1", false);
        assert_eq!(code, HandlerErrorCode::AccessDenied);

        let unstructured = ApiError::Service {
            code: String::new(),
            message: ACCESS_DENIED_ERROR_CODE.to_string(),
        };
        let (code, _) = translate_error(&unstructured, Operation::TagResource, "app-1", false);
        assert_eq!(code, HandlerErrorCode::AccessDenied);
    }

    #[test]
    fn anything_else_is_a_general_service_error() {
        let error = ApiError::Service {
            code: "ThrottlingException".to_string(),
            message: "slow down".to_string(),
        };
        let (code, message) =
            translate_error(&error, Operation::ListApplications, "", false);
        assert_eq!(code, HandlerErrorCode::GeneralServiceError);
        assert!(message.contains("ListApplications"));
    }
}
