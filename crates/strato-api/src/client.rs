//! Control-plane client trait and request/response shapes

use crate::error::ApiResult;
use crate::model::{
    Application, ApplicationSummary, Architecture, AutoStartConfig, AutoStopConfig,
    ConfigurationObject, ImageConfiguration, InitialCapacityConfig, InteractiveConfiguration,
    MaximumAllowedResources, MonitoringConfiguration, NetworkConfiguration,
    SchedulerConfiguration, WorkerTypeSpecification,
};
use crate::state::ApplicationState;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Request to create an application
///
/// `client_token` is the caller-supplied idempotency token: the control
/// plane guarantees at most one application per token, so a retried create
/// has no duplicate side effect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationRequest {
    pub client_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub application_type: String,
    pub release_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture: Option<Architecture>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_configuration: Option<ImageConfiguration>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub worker_type_specifications: BTreeMap<String, WorkerTypeSpecification>,
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
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
}

/// Identity assigned to a newly created application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationResponse {
    pub application_id: String,
    pub arn: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Request to update the mutable configuration of an application
///
/// Identity and creation-time properties (type, release label) are absent
/// on purpose: the control plane rejects attempts to change them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApplicationRequest {
    pub application_id: String,
    pub client_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture: Option<Architecture>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_configuration: Option<ImageConfiguration>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub worker_type_specifications: BTreeMap<String, WorkerTypeSpecification>,
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
}

/// Request to list applications, filtered by state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListApplicationsRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub states: Vec<ApplicationState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

/// One page of application summaries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListApplicationsResponse {
    #[serde(default)]
    pub applications: Vec<ApplicationSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Control-plane API for Strato applications
///
/// All seven operations are synchronous point-to-point calls; the provider
/// never holds a connection across invocations. Implementations are expected
/// to surface every service failure as an [`ApiError`](crate::ApiError)
/// variant rather than panicking.
#[async_trait]
pub trait ControlPlane: Send + Sync {
    /// Fetch one application by id
    async fn get_application(&self, application_id: &str) -> ApiResult<Application>;

    /// Create an application and return its assigned identity
    async fn create_application(
        &self,
        request: CreateApplicationRequest,
    ) -> ApiResult<CreateApplicationResponse>;

    /// Update mutable configuration and return the resulting application
    async fn update_application(&self, request: UpdateApplicationRequest)
    -> ApiResult<Application>;

    /// Begin deleting an application
    async fn delete_application(&self, application_id: &str) -> ApiResult<()>;

    /// List applications matching the state filter, one page at a time
    async fn list_applications(
        &self,
        request: ListApplicationsRequest,
    ) -> ApiResult<ListApplicationsResponse>;

    /// Attach tags to the resource identified by `arn`
    async fn tag_resource(&self, arn: &str, tags: &BTreeMap<String, String>) -> ApiResult<()>;

    /// Remove the given tag keys from the resource identified by `arn`
    async fn untag_resource(&self, arn: &str, tag_keys: &BTreeSet<String>) -> ApiResult<()>;
}
