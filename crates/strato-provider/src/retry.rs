//! Retry policy for failed remote calls
//!
//! Only conflicts and internal service errors are ever retried, and only
//! while budget remains and stabilization has not permanently failed. The
//! decision is a value, never control flow: callers translate a `Fail`
//! into a terminal failure themselves.

use crate::context::CallbackContext;
use strato_api::ApiError;

/// Outcome of consulting the retry policy
#[derive(Debug, Clone, PartialEq)]
pub enum RetryDecision {
    /// Re-invoke later with this context (budget already decremented)
    Retry { context: CallbackContext },
    /// Surface the failure now
    Fail,
}

/// Whether this error class is ever worth retrying
pub fn is_retryable(error: &ApiError) -> bool {
    matches!(error, ApiError::Conflict(_) | ApiError::InternalServer(_))
}

/// Decide whether the current operation retries or fails permanently
///
/// Budget is checked before it is decremented, so exhaustion flips to
/// `Fail` deterministically on the attempt where the budget reads zero:
/// with an initial budget of N, a persistently failing call is attempted
/// exactly N + 1 times.
pub fn decide(error: &ApiError, context: &CallbackContext) -> RetryDecision {
    if !is_retryable(error) || context.stabilization_failed || context.retry_attempts == 0 {
        return RetryDecision::Fail;
    }
    let mut next = context.clone();
    next.retry_attempts -= 1;
    RetryDecision::Retry { context: next }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_conflict_and_internal_errors_are_retryable() {
        assert!(is_retryable(&ApiError::Conflict("busy".into())));
        assert!(is_retryable(&ApiError::InternalServer("boom".into())));
        assert!(!is_retryable(&ApiError::Validation("bad".into())));
        assert!(!is_retryable(&ApiError::NotFound("gone".into())));
        assert!(!is_retryable(&ApiError::QuotaExceeded("full".into())));
        assert!(!is_retryable(&ApiError::Service {
            code: "AccessDeniedException".into(),
            message: "no".into(),
        }));
    }

    #[test]
    fn retry_decrements_the_budget() {
        let context = CallbackContext::default();
        match decide(&ApiError::Conflict("busy".into()), &context) {
            RetryDecision::Retry { context: next } => {
                assert_eq!(next.retry_attempts, context.retry_attempts - 1);
            }
            RetryDecision::Fail => panic!("expected a retry"),
        }
    }

    #[test]
    fn exhausted_budget_fails_on_the_zero_attempt() {
        let mut context = CallbackContext::default();
        let error = ApiError::InternalServer("boom".into());

        let mut retries = 0;
        loop {
            match decide(&error, &context) {
                RetryDecision::Retry { context: next } => {
                    retries += 1;
                    context = next;
                }
                RetryDecision::Fail => break,
            }
        }
        // Initial budget of retries, then the final attempt fails.
        assert_eq!(retries, crate::context::DEFAULT_RETRY_ATTEMPTS);
        assert_eq!(context.retry_attempts, 0);
    }

    #[test]
    fn stabilization_latch_disables_retries_even_with_budget() {
        let context = CallbackContext {
            stabilization_failed: true,
            ..CallbackContext::default()
        };
        assert_eq!(
            decide(&ApiError::InternalServer("boom".into()), &context),
            RetryDecision::Fail
        );
    }

    #[test]
    fn non_retryable_errors_fail_immediately() {
        let context = CallbackContext::default();
        assert_eq!(
            decide(&ApiError::Validation("bad".into()), &context),
            RetryDecision::Fail
        );
    }
}
