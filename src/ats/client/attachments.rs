use super::AtsClient;
use crate::ats::CandidateScopedListOptions;
use crate::common;
use crate::error::Error;
use crate::models::ats::{Attachment, AttachmentRequest};
use crate::models::{EndpointRequest, ModelResponse, Paginated};
use crate::options::{RetrieveOptions, WriteOptions};

impl AtsClient<'_> {
    /// Lists candidate attachments.
    pub fn list_attachments(
        &self,
        options: &CandidateScopedListOptions,
    ) -> Result<Paginated<Attachment>, Error> {
        let url = self.build_url(&["attachments"])?;
        let mut req = self.client.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.client.send(req)?;
        self.client.expect_ok_json(resp)
    }

    /// Uploads an attachment by URL.
    pub fn create_attachment(
        &self,
        request: &EndpointRequest<AttachmentRequest>,
        options: &WriteOptions,
    ) -> Result<ModelResponse<Attachment>, Error> {
        let url = self.build_url(&["attachments"])?;
        let mut req = self.client.http.post(url).json(request);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.client.send(req)?;
        self.client.expect_ok_json(resp)
    }

    /// Retrieves a single attachment.
    pub fn retrieve_attachment(
        &self,
        id: &str,
        options: &RetrieveOptions,
    ) -> Result<Attachment, Error> {
        let url = self.build_url(&["attachments", id])?;
        let mut req = self.client.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.client.send(req)?;
        self.client.expect_ok_json(resp)
    }
}
