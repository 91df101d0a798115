use super::AtsClient;
use crate::ats::ApplicationListOptions;
use crate::common;
use crate::error::Error;
use crate::models::ats::{Application, ApplicationRequest};
use crate::models::{EndpointRequest, MetaResponse, ModelResponse, Paginated};
use crate::options::{RetrieveOptions, WriteOptions};

impl AtsClient<'_> {
    /// Lists applications.
    pub fn list_applications(
        &self,
        options: &ApplicationListOptions,
    ) -> Result<Paginated<Application>, Error> {
        let url = self.build_url(&["applications"])?;
        let mut req = self.client.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.client.send(req)?;
        self.client.expect_ok_json(resp)
    }

    /// Creates an application linking a candidate to a job.
    pub fn create_application(
        &self,
        request: &EndpointRequest<ApplicationRequest>,
        options: &WriteOptions,
    ) -> Result<ModelResponse<Application>, Error> {
        let url = self.build_url(&["applications"])?;
        let mut req = self.client.http.post(url).json(request);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.client.send(req)?;
        self.client.expect_ok_json(resp)
    }

    /// Retrieves a single application.
    pub fn retrieve_application(
        &self,
        id: &str,
        options: &RetrieveOptions,
    ) -> Result<Application, Error> {
        let url = self.build_url(&["applications", id])?;
        let mut req = self.client.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.client.send(req)?;
        self.client.expect_ok_json(resp)
    }

    /// Returns the request schema for creating an application.
    pub fn applications_meta_post(&self) -> Result<MetaResponse, Error> {
        let url = self.build_url(&["applications", "meta", "post"])?;
        let resp = self.client.send(self.client.http.get(url))?;
        self.client.expect_ok_json(resp)
    }
}
