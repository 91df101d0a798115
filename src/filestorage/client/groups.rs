use super::FileStorageClient;
use crate::common;
use crate::error::Error;
use crate::models::filestorage::Group;
use crate::models::Paginated;
use crate::options::{ListOptions, RetrieveOptions};

impl FileStorageClient<'_> {
    /// Lists groups.
    pub fn list_groups(&self, options: &ListOptions) -> Result<Paginated<Group>, Error> {
        let url = self.build_url(&["groups"])?;
        let mut req = self.client.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.client.send(req)?;
        self.client.expect_ok_json(resp)
    }

    /// Retrieves a single group.
    pub fn retrieve_group(&self, id: &str, options: &RetrieveOptions) -> Result<Group, Error> {
        let url = self.build_url(&["groups", id])?;
        let mut req = self.client.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.client.send(req)?;
        self.client.expect_ok_json(resp)
    }
}
