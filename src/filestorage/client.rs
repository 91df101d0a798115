use crate::client::Client;
use crate::error::Error;
use url::Url;

mod drives;
mod files;
mod folders;
mod groups;
mod users;

const API_ROOT: [&str; 2] = ["filestorage", "v1"];

/// File storage endpoints, borrowed from a [`Client`].
pub struct FileStorageClient<'a> {
    client: &'a Client,
}

impl<'a> FileStorageClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn build_url(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut path = API_ROOT.to_vec();
        path.extend_from_slice(segments);
        self.client.build_url(&path)
    }
}
