use super::AtsClient;
use crate::ats::UserListOptions;
use crate::common;
use crate::error::Error;
use crate::models::ats::RemoteUser;
use crate::models::Paginated;
use crate::options::RetrieveOptions;

impl AtsClient<'_> {
    /// Lists users of the third-party ATS.
    pub fn list_users(&self, options: &UserListOptions) -> Result<Paginated<RemoteUser>, Error> {
        let url = self.build_url(&["users"])?;
        let mut req = self.client.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.client.send(req)?;
        self.client.expect_ok_json(resp)
    }

    /// Retrieves a single ATS user.
    pub fn retrieve_user(&self, id: &str, options: &RetrieveOptions) -> Result<RemoteUser, Error> {
        let url = self.build_url(&["users", id])?;
        let mut req = self.client.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.client.send(req)?;
        self.client.expect_ok_json(resp)
    }
}
