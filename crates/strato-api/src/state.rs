//! Application lifecycle states and phase classification

use serde::{Deserialize, Serialize};

/// Lifecycle state of an application as reported by the control plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationState {
    /// Application is being provisioned
    Creating,
    /// Application has been provisioned and is idle
    Created,
    /// Application capacity is starting up
    Starting,
    /// Application is running
    Started,
    /// Application capacity is shutting down
    Stopping,
    /// Application is stopped
    Stopped,
    /// Application has been deleted
    Terminated,
    /// Wire value this client does not recognize
    #[serde(other)]
    Unknown,
}

impl Default for ApplicationState {
    fn default() -> Self {
        ApplicationState::Unknown
    }
}

impl std::fmt::Display for ApplicationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicationState::Creating => write!(f, "CREATING"),
            ApplicationState::Created => write!(f, "CREATED"),
            ApplicationState::Starting => write!(f, "STARTING"),
            ApplicationState::Started => write!(f, "STARTED"),
            ApplicationState::Stopping => write!(f, "STOPPING"),
            ApplicationState::Stopped => write!(f, "STOPPED"),
            ApplicationState::Terminated => write!(f, "TERMINATED"),
            ApplicationState::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Phase of the application lifecycle, derived from [`ApplicationState`]
///
/// Mutating handlers only care about three buckets: the strict set of stable
/// end states a create waits for, the in-flight states, and everything that
/// must be treated as "does not exist".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// A stable end state; no further transition happens without user action
    Settled,
    /// An operation is in flight and the application is moving toward a target
    Transitional,
    /// Gone, or in a state read/update/delete must treat as not found
    Inactive,
}

impl ApplicationState {
    /// Classify this state into its lifecycle phase
    pub fn phase(self) -> LifecyclePhase {
        match self {
            ApplicationState::Created | ApplicationState::Started | ApplicationState::Stopped => {
                LifecyclePhase::Settled
            }
            ApplicationState::Creating
            | ApplicationState::Starting
            | ApplicationState::Stopping => LifecyclePhase::Transitional,
            ApplicationState::Terminated | ApplicationState::Unknown => LifecyclePhase::Inactive,
        }
    }

    /// Whether the application can still be read, updated or deleted
    pub fn is_active(self) -> bool {
        self.phase() != LifecyclePhase::Inactive
    }

    /// The general active set used by read/update pre-checks and list filters
    pub fn active_states() -> [ApplicationState; 6] {
        [
            ApplicationState::Creating,
            ApplicationState::Created,
            ApplicationState::Starting,
            ApplicationState::Started,
            ApplicationState::Stopping,
            ApplicationState::Stopped,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settled_states_are_the_strict_create_end_set() {
        assert_eq!(ApplicationState::Created.phase(), LifecyclePhase::Settled);
        assert_eq!(ApplicationState::Started.phase(), LifecyclePhase::Settled);
        assert_eq!(ApplicationState::Stopped.phase(), LifecyclePhase::Settled);
        assert_eq!(ApplicationState::Creating.phase(), LifecyclePhase::Transitional);
        assert_eq!(ApplicationState::Starting.phase(), LifecyclePhase::Transitional);
        assert_eq!(ApplicationState::Stopping.phase(), LifecyclePhase::Transitional);
    }

    #[test]
    fn terminated_and_unknown_are_inactive() {
        assert_eq!(ApplicationState::Terminated.phase(), LifecyclePhase::Inactive);
        assert_eq!(ApplicationState::Unknown.phase(), LifecyclePhase::Inactive);
        assert!(!ApplicationState::Terminated.is_active());
    }

    #[test]
    fn absent_state_defaults_to_unknown_and_classifies_inactive() {
        // Documents with no state field deserialize through Default.
        let state = ApplicationState::default();
        assert_eq!(state, ApplicationState::Unknown);
        assert_eq!(state.phase(), LifecyclePhase::Inactive);
    }

    #[test]
    fn active_states_exclude_terminated() {
        let active = ApplicationState::active_states();
        assert_eq!(active.len(), 6);
        assert!(!active.contains(&ApplicationState::Terminated));
        assert!(active.iter().all(|s| s.is_active()));
    }

    #[test]
    fn unrecognized_wire_value_deserializes_to_unknown() {
        let state: ApplicationState = serde_json::from_str("\"HIBERNATING\"").unwrap();
        assert_eq!(state, ApplicationState::Unknown);
    }
}
