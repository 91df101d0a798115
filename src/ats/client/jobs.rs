use super::AtsClient;
use crate::ats::JobListOptions;
use crate::common;
use crate::error::Error;
use crate::models::ats::Job;
use crate::models::Paginated;
use crate::options::RetrieveOptions;

impl AtsClient<'_> {
    /// Lists jobs.
    pub fn list_jobs(&self, options: &JobListOptions) -> Result<Paginated<Job>, Error> {
        let url = self.build_url(&["jobs"])?;
        let mut req = self.client.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.client.send(req)?;
        self.client.expect_ok_json(resp)
    }

    /// Retrieves a single job.
    pub fn retrieve_job(&self, id: &str, options: &RetrieveOptions) -> Result<Job, Error> {
        let url = self.build_url(&["jobs", id])?;
        let mut req = self.client.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.client.send(req)?;
        self.client.expect_ok_json(resp)
    }
}
