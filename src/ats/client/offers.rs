use super::AtsClient;
use crate::ats::OfferListOptions;
use crate::common;
use crate::error::Error;
use crate::models::ats::Offer;
use crate::models::Paginated;
use crate::options::RetrieveOptions;

impl AtsClient<'_> {
    /// Lists offers.
    pub fn list_offers(&self, options: &OfferListOptions) -> Result<Paginated<Offer>, Error> {
        let url = self.build_url(&["offers"])?;
        let mut req = self.client.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.client.send(req)?;
        self.client.expect_ok_json(resp)
    }

    /// Retrieves a single offer.
    pub fn retrieve_offer(&self, id: &str, options: &RetrieveOptions) -> Result<Offer, Error> {
        let url = self.build_url(&["offers", id])?;
        let mut req = self.client.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.client.send(req)?;
        self.client.expect_ok_json(resp)
    }
}
