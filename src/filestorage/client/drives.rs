use super::FileStorageClient;
use crate::common;
use crate::error::Error;
use crate::filestorage::DriveListOptions;
use crate::models::filestorage::Drive;
use crate::models::Paginated;
use crate::options::RetrieveOptions;

impl FileStorageClient<'_> {
    /// Lists drives.
    pub fn list_drives(&self, options: &DriveListOptions) -> Result<Paginated<Drive>, Error> {
        let url = self.build_url(&["drives"])?;
        let mut req = self.client.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.client.send(req)?;
        self.client.expect_ok_json(resp)
    }

    /// Retrieves a single drive.
    pub fn retrieve_drive(&self, id: &str, options: &RetrieveOptions) -> Result<Drive, Error> {
        let url = self.build_url(&["drives", id])?;
        let mut req = self.client.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.client.send(req)?;
        self.client.expect_ok_json(resp)
    }
}
