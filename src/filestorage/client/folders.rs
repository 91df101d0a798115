use super::FileStorageClient;
use crate::common;
use crate::error::Error;
use crate::filestorage::FolderListOptions;
use crate::models::filestorage::{Folder, FolderRequest};
use crate::models::{EndpointRequest, MetaResponse, ModelResponse, Paginated};
use crate::options::{RetrieveOptions, WriteOptions};

impl FileStorageClient<'_> {
    /// Lists folders.
    pub fn list_folders(&self, options: &FolderListOptions) -> Result<Paginated<Folder>, Error> {
        let url = self.build_url(&["folders"])?;
        let mut req = self.client.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.client.send(req)?;
        self.client.expect_ok_json(resp)
    }

    /// Creates a folder.
    pub fn create_folder(
        &self,
        request: &EndpointRequest<FolderRequest>,
        options: &WriteOptions,
    ) -> Result<ModelResponse<Folder>, Error> {
        let url = self.build_url(&["folders"])?;
        let mut req = self.client.http.post(url).json(request);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.client.send(req)?;
        self.client.expect_ok_json(resp)
    }

    /// Retrieves a single folder.
    pub fn retrieve_folder(&self, id: &str, options: &RetrieveOptions) -> Result<Folder, Error> {
        let url = self.build_url(&["folders", id])?;
        let mut req = self.client.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.client.send(req)?;
        self.client.expect_ok_json(resp)
    }

    /// Returns the request schema for creating a folder.
    pub fn folders_meta_post(&self) -> Result<MetaResponse, Error> {
        let url = self.build_url(&["folders", "meta", "post"])?;
        let resp = self.client.send(self.client.http.get(url))?;
        self.client.expect_ok_json(resp)
    }
}
