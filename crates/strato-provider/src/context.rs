//! Resumable callback context
//!
//! The host persists this context verbatim between invocations of one
//! logical operation and hands it back on re-entry. Nothing else survives
//! an invocation, so every piece of partial progress a handler needs to
//! resume from lives here.

use crate::tags::TagDelta;
use serde::{Deserialize, Serialize};

/// Retry budget granted to each logical operation
pub const DEFAULT_RETRY_ATTEMPTS: u32 = 5;

/// State threaded across re-invocations of one logical operation
///
/// Handlers never mutate a context they were given; they clone, amend and
/// return the new value inside an in-progress event. The host treats the
/// serialized form as opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CallbackContext {
    /// Remaining budget for retrying Conflict/InternalServer failures.
    /// Never reset mid-operation.
    pub retry_attempts: u32,

    /// Latched once a stabilization poll observes a terminal-but-wrong
    /// phase. Once set, retries are disabled even with budget remaining.
    pub stabilization_failed: bool,

    /// Identifier captured from the create call, so re-entry resumes at
    /// the stabilization poll instead of re-issuing the create.
    pub application_id: Option<String>,

    /// ARN captured by Update's re-fetch; tagging operations key on ARN,
    /// not on the application id.
    pub application_arn: Option<String>,

    /// Tag delta computed exactly once per update. `None` means not yet
    /// computed; a consumed half is cleared so re-entry never replays it.
    pub tag_delta: Option<TagDelta>,

    /// Set once Delete has issued its delete call, so re-entry skips the
    /// pre-check (which would now see an inactive resource) and polls.
    pub delete_requested: bool,
}

impl Default for CallbackContext {
    fn default() -> Self {
        Self {
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
            stabilization_failed: false,
            application_id: None,
            application_arn: None,
            tag_delta: None,
            delete_requested: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, BTreeSet};

    #[test]
    fn fresh_context_has_full_budget_and_no_latches() {
        let context = CallbackContext::default();
        assert_eq!(context.retry_attempts, DEFAULT_RETRY_ATTEMPTS);
        assert!(!context.stabilization_failed);
        assert!(context.tag_delta.is_none());
        assert!(!context.delete_requested);
    }

    #[test]
    fn context_round_trips_through_host_persistence() {
        let context = CallbackContext {
            retry_attempts: 2,
            stabilization_failed: true,
            application_id: Some("app-1".to_string()),
            application_arn: Some("arn:strato:compute:eu-1:1:application/app-1".to_string()),
            tag_delta: Some(TagDelta {
                to_add: BTreeMap::from([("a".to_string(), "1".to_string())]),
                to_remove: BTreeSet::from(["b".to_string()]),
            }),
            delete_requested: false,
        };

        let json = serde_json::to_string(&context).unwrap();
        let back: CallbackContext = serde_json::from_str(&json).unwrap();
        assert_eq!(context, back);
    }

    #[test]
    fn unknown_fields_from_older_hosts_are_tolerated() {
        let context: CallbackContext =
            serde_json::from_str(r#"{"retryAttempts":4,"futureField":true}"#).unwrap();
        assert_eq!(context.retry_attempts, 4);
        assert!(context.application_id.is_none());
    }
}
