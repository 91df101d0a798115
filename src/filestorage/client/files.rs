use super::FileStorageClient;
use crate::common;
use crate::error::Error;
use crate::filestorage::FileListOptions;
use crate::models::filestorage::{File, FileRequest};
use crate::models::{EndpointRequest, MetaResponse, ModelResponse, Paginated};
use crate::options::{RetrieveOptions, WriteOptions};

impl FileStorageClient<'_> {
    /// Lists files.
    pub fn list_files(&self, options: &FileListOptions) -> Result<Paginated<File>, Error> {
        let url = self.build_url(&["files"])?;
        let mut req = self.client.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.client.send(req)?;
        self.client.expect_ok_json(resp)
    }

    /// Creates a file record.
    pub fn create_file(
        &self,
        request: &EndpointRequest<FileRequest>,
        options: &WriteOptions,
    ) -> Result<ModelResponse<File>, Error> {
        let url = self.build_url(&["files"])?;
        let mut req = self.client.http.post(url).json(request);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.client.send(req)?;
        self.client.expect_ok_json(resp)
    }

    /// Retrieves file metadata.
    pub fn retrieve_file(&self, id: &str, options: &RetrieveOptions) -> Result<File, Error> {
        let url = self.build_url(&["files", id])?;
        let mut req = self.client.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.client.send(req)?;
        self.client.expect_ok_json(resp)
    }

    /// Downloads file content, optionally exported as `mime_type`.
    pub fn download_file(&self, id: &str, mime_type: Option<&str>) -> Result<Vec<u8>, Error> {
        let url = self.build_url(&["files", id, "download"])?;
        let mut req = self.client.http.get(url);
        if let Some(mime_type) = mime_type {
            req = req.query(&[("mime_type", mime_type)]);
        }
        let resp = self.client.send(req)?;
        self.client.expect_bytes(resp)
    }

    /// Returns the request schema for creating a file.
    pub fn files_meta_post(&self) -> Result<MetaResponse, Error> {
        let url = self.build_url(&["files", "meta", "post"])?;
        let resp = self.client.send(self.client.http.get(url))?;
        self.client.expect_ok_json(resp)
    }
}
