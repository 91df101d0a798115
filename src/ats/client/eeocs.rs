use super::AtsClient;
use crate::ats::CandidateScopedListOptions;
use crate::common;
use crate::error::Error;
use crate::models::ats::Eeoc;
use crate::models::Paginated;
use crate::options::RetrieveOptions;

impl AtsClient<'_> {
    /// Lists EEOC answers.
    pub fn list_eeocs(
        &self,
        options: &CandidateScopedListOptions,
    ) -> Result<Paginated<Eeoc>, Error> {
        let url = self.build_url(&["eeocs"])?;
        let mut req = self.client.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.client.send(req)?;
        self.client.expect_ok_json(resp)
    }

    /// Retrieves a single set of EEOC answers.
    pub fn retrieve_eeoc(&self, id: &str, options: &RetrieveOptions) -> Result<Eeoc, Error> {
        let url = self.build_url(&["eeocs", id])?;
        let mut req = self.client.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.client.send(req)?;
        self.client.expect_ok_json(resp)
    }
}
