use crate::client::Client;
use crate::error::Error;
use url::Url;

mod activities;
mod applications;
mod attachments;
mod candidates;
mod eeocs;
mod jobs;
mod offers;
mod users;

const API_ROOT: [&str; 2] = ["ats", "v1"];

/// Applicant tracking endpoints, borrowed from a [`Client`].
pub struct AtsClient<'a> {
    client: &'a Client,
}

impl<'a> AtsClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn build_url(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut path = API_ROOT.to_vec();
        path.extend_from_slice(segments);
        self.client.build_url(&path)
    }
}
