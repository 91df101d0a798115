use super::AtsClient;
use crate::ats::ActivityListOptions;
use crate::common;
use crate::error::Error;
use crate::models::ats::{Activity, ActivityRequest};
use crate::models::{EndpointRequest, ModelResponse, Paginated};
use crate::options::{RetrieveOptions, WriteOptions};

impl AtsClient<'_> {
    /// Lists activities.
    pub fn list_activities(
        &self,
        options: &ActivityListOptions,
    ) -> Result<Paginated<Activity>, Error> {
        let url = self.build_url(&["activities"])?;
        let mut req = self.client.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.client.send(req)?;
        self.client.expect_ok_json(resp)
    }

    /// Logs an activity; `remote_user_id` on the request is required by most integrations.
    pub fn create_activity(
        &self,
        request: &EndpointRequest<ActivityRequest>,
        options: &WriteOptions,
    ) -> Result<ModelResponse<Activity>, Error> {
        let url = self.build_url(&["activities"])?;
        let mut req = self.client.http.post(url).json(request);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.client.send(req)?;
        self.client.expect_ok_json(resp)
    }

    /// Retrieves a single activity.
    pub fn retrieve_activity(
        &self,
        id: &str,
        options: &RetrieveOptions,
    ) -> Result<Activity, Error> {
        let url = self.build_url(&["activities", id])?;
        let mut req = self.client.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.client.send(req)?;
        self.client.expect_ok_json(resp)
    }
}
