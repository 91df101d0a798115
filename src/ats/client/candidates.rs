use super::AtsClient;
use crate::ats::CandidateListOptions;
use crate::common;
use crate::error::Error;
use crate::models::ats::{Candidate, CandidateRequest};
use crate::models::{
    EndpointRequest, IgnoreCommonModelRequest, MetaResponse, ModelResponse, Paginated,
};
use crate::options::{RetrieveOptions, WriteOptions};

impl AtsClient<'_> {
    /// Lists candidates.
    pub fn list_candidates(
        &self,
        options: &CandidateListOptions,
    ) -> Result<Paginated<Candidate>, Error> {
        let url = self.build_url(&["candidates"])?;
        let mut req = self.client.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.client.send(req)?;
        self.client.expect_ok_json(resp)
    }

    /// Creates a candidate in the linked ATS.
    pub fn create_candidate(
        &self,
        request: &EndpointRequest<CandidateRequest>,
        options: &WriteOptions,
    ) -> Result<ModelResponse<Candidate>, Error> {
        let url = self.build_url(&["candidates"])?;
        let mut req = self.client.http.post(url).json(request);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.client.send(req)?;
        self.client.expect_ok_json(resp)
    }

    /// Retrieves a single candidate.
    pub fn retrieve_candidate(
        &self,
        id: &str,
        options: &RetrieveOptions,
    ) -> Result<Candidate, Error> {
        let url = self.build_url(&["candidates", id])?;
        let mut req = self.client.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.client.send(req)?;
        self.client.expect_ok_json(resp)
    }

    /// Updates only the fields set on the request model.
    pub fn partial_update_candidate(
        &self,
        id: &str,
        request: &EndpointRequest<CandidateRequest>,
        options: &WriteOptions,
    ) -> Result<ModelResponse<Candidate>, Error> {
        let url = self.build_url(&["candidates", id])?;
        let mut req = self.client.http.patch(url).json(request);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.client.send(req)?;
        self.client.expect_ok_json(resp)
    }

    /// Excludes a candidate from future syncs.
    pub fn ignore_candidate(
        &self,
        model_id: &str,
        request: &IgnoreCommonModelRequest,
    ) -> Result<(), Error> {
        let url = self.build_url(&["candidates", "ignore", model_id])?;
        let req = self.client.http.post(url).json(request);
        let resp = self.client.send(req)?;
        self.client.expect_success(resp)
    }

    /// Returns the request schema for creating a candidate.
    pub fn candidates_meta_post(&self) -> Result<MetaResponse, Error> {
        let url = self.build_url(&["candidates", "meta", "post"])?;
        let resp = self.client.send(self.client.http.get(url))?;
        self.client.expect_ok_json(resp)
    }

    /// Returns the request schema for updating the given candidate.
    pub fn candidates_meta_patch(&self, id: &str) -> Result<MetaResponse, Error> {
        let url = self.build_url(&["candidates", "meta", "patch", id])?;
        let resp = self.client.send(self.client.http.get(url))?;
        self.client.expect_ok_json(resp)
    }
}
