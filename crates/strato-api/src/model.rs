//! Wire model for Strato applications
//!
//! These types mirror the control-plane API documents exactly. The
//! provider-facing resource model lives in `strato-provider`; translation
//! between the two is mechanical.

use crate::state::ApplicationState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// CPU architecture an application runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Architecture {
    #[serde(rename = "X86_64")]
    X86_64,
    #[serde(rename = "ARM64")]
    Arm64,
}

/// Per-worker resource sizing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerConfiguration {
    pub cpu: String,
    pub memory: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_type: Option<String>,
}

/// Pre-initialized capacity for one worker pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialCapacityConfig {
    pub worker_count: i64,
    pub worker_configuration: WorkerConfiguration,
}

/// Upper bound on the aggregate resources an application may consume
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaximumAllowedResources {
    pub cpu: String,
    pub memory: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk: Option<String>,
}

/// Policy for starting the application when work arrives
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoStartConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Policy for stopping the application after a period of inactivity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoStopConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idle_timeout_minutes: Option<i32>,
}

/// Network placement for workers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfiguration {
    #[serde(default)]
    pub subnet_ids: Vec<String>,
    #[serde(default)]
    pub security_group_ids: Vec<String>,
}

/// Custom image the application boots from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfiguration {
    pub image_uri: String,
}

/// Image override for a single worker type, taking precedence over the
/// application-level image
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerTypeSpecification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_configuration: Option<ImageConfiguration>,
}

/// Interactive endpoints the application exposes for notebook and
/// session-based workloads
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractiveConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub studio_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_endpoint_enabled: Option<bool>,
}

/// Log delivery to an object store bucket
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectStoreMonitoringConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_key_arn: Option<String>,
}

/// Service-managed log persistence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedPersistenceConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_key_arn: Option<String>,
}

/// Log delivery to a log-stream service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogStreamMonitoringConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_stream_name_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_key_arn: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub log_types: BTreeMap<String, Vec<String>>,
}

/// Where application and worker logs are shipped
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_store_monitoring_configuration: Option<ObjectStoreMonitoringConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed_persistence_monitoring_configuration: Option<ManagedPersistenceConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_stream_monitoring_configuration: Option<LogStreamMonitoringConfig>,
}

/// Job-queueing policy for the application scheduler
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue_timeout_minutes: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_concurrent_runs: Option<i32>,
}

/// One classification block of runtime configuration, possibly nested
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationObject {
    pub classification: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub configurations: Vec<ConfigurationObject>,
}

/// A Strato compute application as returned by `GetApplication`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Identifier assigned by the control plane at creation
    pub application_id: String,

    /// Fully qualified resource name, the key for tagging operations
    pub arn: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Application runtime type, immutable after creation
    #[serde(rename = "type")]
    pub application_type: String,

    /// Release line of the runtime, immutable after creation
    pub release_label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture: Option<Architecture>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_configuration: Option<ImageConfiguration>,

    /// Per-worker-type image overrides, keyed by worker type
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub worker_type_specifications: BTreeMap<String, WorkerTypeSpecification>,

    /// Worker pools started ahead of demand, keyed by worker type
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub initial_capacity: BTreeMap<String, InitialCapacityConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_capacity: Option<MaximumAllowedResources>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_start_configuration: Option<AutoStartConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_stop_configuration: Option<AutoStopConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_configuration: Option<NetworkConfiguration>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitoring_configuration: Option<MonitoringConfiguration>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub runtime_configuration: Vec<ConfigurationObject>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduler_configuration: Option<SchedulerConfiguration>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interactive_configuration: Option<InteractiveConfiguration>,

    /// Tags currently attached to the application, keys unique
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,

    #[serde(default)]
    pub state: ApplicationState,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_details: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Lightweight application record returned by `ListApplications`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSummary {
    pub application_id: String,
    pub arn: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub application_type: String,
    pub release_label: String,
    #[serde(default)]
    pub state: ApplicationState,
}
