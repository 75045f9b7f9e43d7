//! Strato application resource provider
//!
//! A CloudFormation-style resource provider for `Strato::Compute::Application`.
//! The host orchestrator invokes [`handle`] once per scheduling step with the
//! requested action, the desired state, the callback context persisted from
//! the previous step and a [`ControlPlane`](strato_api::ControlPlane) client;
//! the handler returns a single [`ProgressEvent`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              Host orchestrator                   │
//! │   (schedules re-invocations, persists context)   │
//! └─────────────────┬───────────────────────────────┘
//!                   │ handle(action, request, context)
//! ┌─────────────────▼───────────────────────────────┐
//! │              strato-provider                     │
//! │  ┌────────────┐ ┌─────────────┐ ┌────────────┐  │
//! │  │  handlers  │ │ retry/error │ │ tag delta  │  │
//! │  │ (per verb) │ │ translation │ │ reconciler │  │
//! │  └────────────┘ └─────────────┘ └────────────┘  │
//! └─────────────────┬───────────────────────────────┘
//!                   │ trait ControlPlane
//! ┌─────────────────▼───────────────────────────────┐
//! │          remote control-plane API                │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! Waiting is always expressed as [`ProgressEvent::InProgress`]: one remote
//! poll per invocation, never a sleep inside the handler. The bundled
//! [`driver`] module provides a local scheduler loop for embedding and tests.

pub mod context;
pub mod driver;
pub mod handlers;
pub mod model;
pub mod progress;
pub mod retry;
pub mod tags;
pub mod translate;

// Re-exports
pub use context::{CallbackContext, DEFAULT_RETRY_ATTEMPTS};
pub use driver::{drive, DriveError, DriverConfig};
pub use handlers::{handle, Action};
pub use model::{HandlerRequest, ResourceModel, TYPE_NAME};
pub use progress::{
    HandlerErrorCode, ProgressEvent, RETRY_DELAY_SECONDS, STABILIZATION_DELAY_SECONDS,
};
pub use retry::{decide, is_retryable, RetryDecision};
pub use tags::TagDelta;
pub use translate::{translate_error, Operation, ACCESS_DENIED_ERROR_CODE};
