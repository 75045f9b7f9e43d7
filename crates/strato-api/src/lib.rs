//! Strato control-plane API boundary
//!
//! This crate defines everything the application provider needs to talk to
//! the remote control plane: the wire model, the lifecycle state machine's
//! vocabulary, the closed error taxonomy and the [`ControlPlane`] client
//! trait. It deliberately contains no provisioning logic; that lives in
//! `strato-provider`.

pub mod client;
pub mod error;
pub mod model;
pub mod state;

// Re-exports
pub use client::{
    ControlPlane, CreateApplicationRequest, CreateApplicationResponse, ListApplicationsRequest,
    ListApplicationsResponse, UpdateApplicationRequest,
};
pub use error::{ApiError, ApiResult};
pub use model::{
    Application, ApplicationSummary, Architecture, AutoStartConfig, AutoStopConfig,
    ConfigurationObject, ImageConfiguration, InitialCapacityConfig, InteractiveConfiguration,
    LogStreamMonitoringConfig, ManagedPersistenceConfig, MaximumAllowedResources,
    MonitoringConfiguration, NetworkConfiguration, ObjectStoreMonitoringConfig,
    SchedulerConfiguration, WorkerConfiguration, WorkerTypeSpecification,
};
pub use state::{ApplicationState, LifecyclePhase};
