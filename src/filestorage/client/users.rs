use super::FileStorageClient;
use crate::common;
use crate::error::Error;
use crate::models::filestorage::User;
use crate::models::Paginated;
use crate::options::{ListOptions, RetrieveOptions};

impl FileStorageClient<'_> {
    /// Lists users of the storage provider.
    pub fn list_users(&self, options: &ListOptions) -> Result<Paginated<User>, Error> {
        let url = self.build_url(&["users"])?;
        let mut req = self.client.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.client.send(req)?;
        self.client.expect_ok_json(resp)
    }

    /// Retrieves a single user.
    pub fn retrieve_user(&self, id: &str, options: &RetrieveOptions) -> Result<User, Error> {
        let url = self.build_url(&["users", id])?;
        let mut req = self.client.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.client.send(req)?;
        self.client.expect_ok_json(resp)
    }
}
