//! Local driver loop
//!
//! A stand-in for the host scheduler: re-invokes the handler while it
//! reports in-progress, honoring (a capped version of) each event's delay
//! hint. The handler itself never sleeps; all waiting happens here.

use crate::handlers::{handle, Action};
use crate::model::HandlerRequest;
use crate::progress::ProgressEvent;
use std::time::Duration;
use strato_api::ControlPlane;
use thiserror::Error;
use tokio::time::sleep;
use tracing::debug;

/// Limits for one driven operation
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Maximum handler invocations before giving up
    pub max_invocations: u32,

    /// Upper bound applied to the handler's delay hints
    pub delay_cap: Duration,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            max_invocations: 60,
            delay_cap: Duration::from_secs(30),
        }
    }
}

#[derive(Error, Debug)]
pub enum DriveError {
    #[error("operation did not reach a terminal state after {invocations} invocations")]
    Timeout { invocations: u32 },
}

/// Step one logical operation to a terminal progress event
pub async fn drive(
    action: Action,
    request: &HandlerRequest,
    client: &dyn ControlPlane,
    config: &DriverConfig,
) -> Result<ProgressEvent, DriveError> {
    let mut context = None;
    for invocation in 0..config.max_invocations {
        match handle(action, request, context.take(), client).await {
            ProgressEvent::InProgress {
                context: next,
                delay_seconds,
            } => {
                debug!(invocation, delay_seconds, "operation in progress");
                context = Some(next);
                sleep(Duration::from_secs(delay_seconds).min(config.delay_cap)).await;
            }
            terminal => return Ok(terminal),
        }
    }
    Err(DriveError::Timeout {
        invocations: config.max_invocations,
    })
}
