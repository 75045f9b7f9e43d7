use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::sync::Mutex;
use strato_api::{
    ApiResult, Application, ApplicationState, ApplicationSummary, ControlPlane,
    CreateApplicationRequest, CreateApplicationResponse, ListApplicationsRequest,
    ListApplicationsResponse, UpdateApplicationRequest,
};

pub const APP_ID: &str = "app-0123456789";
pub const APP_ARN: &str = "arn:strato:compute:eu-1:123456789012:application/app-0123456789";

/// One recorded remote call, in invocation order
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum Call {
    Get(String),
    Create(String),
    Update(String),
    Delete(String),
    List(ListApplicationsRequest),
    Tag(String, BTreeMap<String, String>),
    Untag(String, BTreeSet<String>),
}

/// Scripted in-memory control plane
///
/// Each operation consumes responses from its own queue in order; calling
/// an operation with an empty queue fails the test. Every call is recorded
/// so tests can assert on exact call sequences.
#[derive(Default)]
pub struct FakeControlPlane {
    get_responses: Mutex<VecDeque<ApiResult<Application>>>,
    create_responses: Mutex<VecDeque<ApiResult<CreateApplicationResponse>>>,
    update_responses: Mutex<VecDeque<ApiResult<Application>>>,
    delete_responses: Mutex<VecDeque<ApiResult<()>>>,
    list_responses: Mutex<VecDeque<ApiResult<ListApplicationsResponse>>>,
    tag_responses: Mutex<VecDeque<ApiResult<()>>>,
    untag_responses: Mutex<VecDeque<ApiResult<()>>>,
    calls: Mutex<Vec<Call>>,
}

#[allow(dead_code)]
impl FakeControlPlane {
    pub fn new() -> Self {
        // Failing tests print the handler's tracing output.
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        Self::default()
    }

    pub fn script_get(&self, response: ApiResult<Application>) {
        self.get_responses.lock().unwrap().push_back(response);
    }

    pub fn script_create(&self, response: ApiResult<CreateApplicationResponse>) {
        self.create_responses.lock().unwrap().push_back(response);
    }

    pub fn script_update(&self, response: ApiResult<Application>) {
        self.update_responses.lock().unwrap().push_back(response);
    }

    pub fn script_delete(&self, response: ApiResult<()>) {
        self.delete_responses.lock().unwrap().push_back(response);
    }

    pub fn script_list(&self, response: ApiResult<ListApplicationsResponse>) {
        self.list_responses.lock().unwrap().push_back(response);
    }

    pub fn script_tag(&self, response: ApiResult<()>) {
        self.tag_responses.lock().unwrap().push_back(response);
    }

    pub fn script_untag(&self, response: ApiResult<()>) {
        self.untag_responses.lock().unwrap().push_back(response);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count_calls(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| matches(c)).count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn next<T>(queue: &Mutex<VecDeque<ApiResult<T>>>, operation: &str) -> ApiResult<T> {
        queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unscripted {operation} call"))
    }
}

#[async_trait]
impl ControlPlane for FakeControlPlane {
    async fn get_application(&self, application_id: &str) -> ApiResult<Application> {
        self.record(Call::Get(application_id.to_string()));
        Self::next(&self.get_responses, "get_application")
    }

    async fn create_application(
        &self,
        request: CreateApplicationRequest,
    ) -> ApiResult<CreateApplicationResponse> {
        self.record(Call::Create(request.client_token.clone()));
        Self::next(&self.create_responses, "create_application")
    }

    async fn update_application(
        &self,
        request: UpdateApplicationRequest,
    ) -> ApiResult<Application> {
        self.record(Call::Update(request.application_id.clone()));
        Self::next(&self.update_responses, "update_application")
    }

    async fn delete_application(&self, application_id: &str) -> ApiResult<()> {
        self.record(Call::Delete(application_id.to_string()));
        Self::next(&self.delete_responses, "delete_application")
    }

    async fn list_applications(
        &self,
        request: ListApplicationsRequest,
    ) -> ApiResult<ListApplicationsResponse> {
        self.record(Call::List(request));
        Self::next(&self.list_responses, "list_applications")
    }

    async fn tag_resource(&self, arn: &str, tags: &BTreeMap<String, String>) -> ApiResult<()> {
        self.record(Call::Tag(arn.to_string(), tags.clone()));
        Self::next(&self.tag_responses, "tag_resource")
    }

    async fn untag_resource(&self, arn: &str, tag_keys: &BTreeSet<String>) -> ApiResult<()> {
        self.record(Call::Untag(arn.to_string(), tag_keys.clone()));
        Self::next(&self.untag_responses, "untag_resource")
    }
}

/// Minimal application document in the given state
#[allow(dead_code)]
pub fn application(state: ApplicationState) -> Application {
    application_with_tags(state, BTreeMap::new())
}

#[allow(dead_code)]
pub fn application_with_tags(
    state: ApplicationState,
    tags: BTreeMap<String, String>,
) -> Application {
    Application {
        application_id: APP_ID.to_string(),
        arn: APP_ARN.to_string(),
        name: Some("etl-nightly".to_string()),
        application_type: "BATCH".to_string(),
        release_label: "strato-7.2".to_string(),
        architecture: None,
        image_configuration: None,
        worker_type_specifications: BTreeMap::new(),
        initial_capacity: BTreeMap::new(),
        maximum_capacity: None,
        auto_start_configuration: None,
        auto_stop_configuration: None,
        network_configuration: None,
        monitoring_configuration: None,
        runtime_configuration: Vec::new(),
        scheduler_configuration: None,
        interactive_configuration: None,
        tags,
        state,
        state_details: None,
        created_at: Utc.with_ymd_and_hms(2026, 1, 10, 8, 30, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2026, 1, 12, 9, 0, 0).unwrap(),
    }
}

#[allow(dead_code)]
pub fn summary(application_id: &str, state: ApplicationState) -> ApplicationSummary {
    ApplicationSummary {
        application_id: application_id.to_string(),
        arn: format!("arn:strato:compute:eu-1:123456789012:application/{application_id}"),
        name: Some(application_id.to_string()),
        application_type: "BATCH".to_string(),
        release_label: "strato-7.2".to_string(),
        state,
    }
}

#[allow(dead_code)]
pub fn tags(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
