//! Provider-facing resource model and request envelope
//!
//! The resource model is the document CloudFormation-style hosts hand us:
//! every field optional until the control plane fills it in. Translation to
//! and from the wire model is mechanical field mapping.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strato_api::{
    Application, ApplicationSummary, Architecture, AutoStartConfig, AutoStopConfig,
    ConfigurationObject, CreateApplicationRequest, ImageConfiguration, InitialCapacityConfig,
    InteractiveConfiguration, MaximumAllowedResources, MonitoringConfiguration,
    NetworkConfiguration, SchedulerConfiguration, UpdateApplicationRequest,
    WorkerTypeSpecification,
};

/// Registered type name of this resource
pub const TYPE_NAME: &str = "Strato::Compute::Application";

/// Desired or observed state of one managed application
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResourceModel {
    /// Identity, immutable once assigned by the control plane
    pub application_id: Option<String>,
    pub arn: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub application_type: Option<String>,
    pub release_label: Option<String>,
    pub architecture: Option<Architecture>,
    pub image_configuration: Option<ImageConfiguration>,
    pub worker_type_specifications: BTreeMap<String, WorkerTypeSpecification>,
    pub initial_capacity: BTreeMap<String, InitialCapacityConfig>,
    pub maximum_capacity: Option<MaximumAllowedResources>,
    pub auto_start_configuration: Option<AutoStartConfig>,
    pub auto_stop_configuration: Option<AutoStopConfig>,
    pub network_configuration: Option<NetworkConfiguration>,
    pub monitoring_configuration: Option<MonitoringConfiguration>,
    pub runtime_configuration: Vec<ConfigurationObject>,
    pub scheduler_configuration: Option<SchedulerConfiguration>,
    pub interactive_configuration: Option<InteractiveConfiguration>,
    pub tags: BTreeMap<String, String>,
}

impl ResourceModel {
    /// Observed model built from a full application document
    pub fn from_application(application: &Application) -> Self {
        ResourceModel {
            application_id: Some(application.application_id.clone()),
            arn: Some(application.arn.clone()),
            name: application.name.clone(),
            application_type: Some(application.application_type.clone()),
            release_label: Some(application.release_label.clone()),
            architecture: application.architecture,
            image_configuration: application.image_configuration.clone(),
            worker_type_specifications: application.worker_type_specifications.clone(),
            initial_capacity: application.initial_capacity.clone(),
            maximum_capacity: application.maximum_capacity.clone(),
            auto_start_configuration: application.auto_start_configuration.clone(),
            auto_stop_configuration: application.auto_stop_configuration.clone(),
            network_configuration: application.network_configuration.clone(),
            monitoring_configuration: application.monitoring_configuration.clone(),
            runtime_configuration: application.runtime_configuration.clone(),
            scheduler_configuration: application.scheduler_configuration.clone(),
            interactive_configuration: application.interactive_configuration.clone(),
            tags: application.tags.clone(),
        }
    }

    /// Lightweight stub for list results: identity and creation-time
    /// properties only
    pub fn from_summary(summary: &ApplicationSummary) -> Self {
        ResourceModel {
            application_id: Some(summary.application_id.clone()),
            arn: Some(summary.arn.clone()),
            name: summary.name.clone(),
            application_type: Some(summary.application_type.clone()),
            release_label: Some(summary.release_label.clone()),
            ..ResourceModel::default()
        }
    }
}

/// One handler invocation as delivered by the host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HandlerRequest {
    /// Idempotency token, stable across retries of the same logical
    /// operation
    pub client_request_token: String,

    /// The operator's desired state
    pub desired_state: ResourceModel,

    /// Desired tags after the host merges stack-level tags over the
    /// model's own tag set
    pub desired_tags: BTreeMap<String, String>,

    /// Pagination token forwarded by List
    pub next_token: Option<String>,
}

impl HandlerRequest {
    /// Tags a create call sends: the model's tags with host-merged desired
    /// tags layered on top
    pub fn effective_tags(&self) -> BTreeMap<String, String> {
        let mut tags = self.desired_state.tags.clone();
        tags.extend(
            self.desired_tags
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        tags
    }

    pub(crate) fn to_create_request(&self) -> CreateApplicationRequest {
        let model = &self.desired_state;
        CreateApplicationRequest {
            client_token: self.client_request_token.clone(),
            name: model.name.clone(),
            application_type: model.application_type.clone().unwrap_or_default(),
            release_label: model.release_label.clone().unwrap_or_default(),
            architecture: model.architecture,
            image_configuration: model.image_configuration.clone(),
            worker_type_specifications: model.worker_type_specifications.clone(),
            initial_capacity: model.initial_capacity.clone(),
            maximum_capacity: model.maximum_capacity.clone(),
            auto_start_configuration: model.auto_start_configuration.clone(),
            auto_stop_configuration: model.auto_stop_configuration.clone(),
            network_configuration: model.network_configuration.clone(),
            monitoring_configuration: model.monitoring_configuration.clone(),
            runtime_configuration: model.runtime_configuration.clone(),
            scheduler_configuration: model.scheduler_configuration.clone(),
            interactive_configuration: model.interactive_configuration.clone(),
            tags: self.effective_tags(),
        }
    }

    pub(crate) fn to_update_request(&self, application_id: &str) -> UpdateApplicationRequest {
        let model = &self.desired_state;
        UpdateApplicationRequest {
            application_id: application_id.to_string(),
            client_token: self.client_request_token.clone(),
            architecture: model.architecture,
            image_configuration: model.image_configuration.clone(),
            worker_type_specifications: model.worker_type_specifications.clone(),
            initial_capacity: model.initial_capacity.clone(),
            maximum_capacity: model.maximum_capacity.clone(),
            auto_start_configuration: model.auto_start_configuration.clone(),
            auto_stop_configuration: model.auto_stop_configuration.clone(),
            network_configuration: model.network_configuration.clone(),
            monitoring_configuration: model.monitoring_configuration.clone(),
            runtime_configuration: model.runtime_configuration.clone(),
            scheduler_configuration: model.scheduler_configuration.clone(),
            interactive_configuration: model.interactive_configuration.clone(),
        }
    }
}
