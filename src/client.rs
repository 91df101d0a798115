use crate::ats::AtsClient;
use crate::client_defaults::{DEFAULT_TIMEOUT, USER_AGENT};
use crate::common;
use crate::environment::Environment;
use crate::error::{
    read_body_with_limit, Error, CONFIG_ERROR_REDIRECT_WITH_AUTH, MAX_ERROR_BODY_BYTES,
};
use crate::filestorage::FileStorageClient;
use reqwest::blocking::{Client as HttpClient, RequestBuilder, Response};
use reqwest::Certificate;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

pub struct ClientBuilder {
    base_url: Url,
    timeout: Option<Duration>,
    disable_redirect: bool,
    ca_certs: Vec<Certificate>,
    api_key: Option<String>,
    account_token: Option<String>,
}

impl ClientBuilder {
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, Error> {
        Ok(Self {
            base_url: Url::parse(base_url.as_ref())?,
            timeout: Some(DEFAULT_TIMEOUT),
            disable_redirect: true,
            ca_certs: Vec::new(),
            api_key: None,
            account_token: None,
        })
    }

    pub fn from_environment(environment: Environment) -> Result<Self, Error> {
        Self::new(environment.base_url())
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Removes the request timeout entirely.
    pub fn no_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    pub fn disable_redirect(mut self, disable: bool) -> Self {
        self.disable_redirect = disable;
        self
    }

    pub fn add_ca_cert_pem(mut self, ca_pem: &[u8]) -> Result<Self, Error> {
        self.ca_certs.push(Certificate::from_pem(ca_pem)?);
        Ok(self)
    }

    /// Production API key, sent as a bearer token.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Token identifying the end user's linked account.
    pub fn account_token(mut self, account_token: impl Into<String>) -> Self {
        self.account_token = Some(account_token.into());
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let auth = match (self.api_key, self.account_token) {
            (Some(api_key), account_token) => {
                Some(common::AuthProvider::new(api_key, account_token))
            }
            (None, Some(_)) => {
                return Err(Error::Config(
                    "config error: an account token requires an api key".to_string(),
                ))
            }
            (None, None) => None,
        };
        if auth.is_some() && !self.disable_redirect {
            return Err(Error::Config(CONFIG_ERROR_REDIRECT_WITH_AUTH.to_string()));
        }
        let mut builder = HttpClient::builder().user_agent(USER_AGENT);
        builder = builder.timeout(self.timeout);
        if self.disable_redirect {
            builder = builder.redirect(reqwest::redirect::Policy::none());
        }
        for cert in self.ca_certs {
            builder = builder.add_root_certificate(cert);
        }
        let http = builder.build()?;
        Ok(Client {
            base_url: self.base_url,
            http,
            auth,
        })
    }
}

/// Blocking client shared by the ATS and File Storage facades.
pub struct Client {
    base_url: Url,
    pub(crate) http: HttpClient,
    auth: Option<common::AuthProvider>,
}

impl Client {
    pub fn builder(base_url: impl AsRef<str>) -> Result<ClientBuilder, Error> {
        ClientBuilder::new(base_url)
    }

    pub fn ats(&self) -> AtsClient<'_> {
        AtsClient::new(self)
    }

    pub fn filestorage(&self) -> FileStorageClient<'_> {
        FileStorageClient::new(self)
    }

    pub(crate) fn build_url(&self, segments: &[&str]) -> Result<Url, Error> {
        common::build_url(&self.base_url, segments, common::BuildUrlOptions::REQUEST)
    }

    /// Applies credentials and sends the request.
    pub(crate) fn send(&self, req: RequestBuilder) -> Result<Response, Error> {
        let request = common::apply_auth(req, &self.auth).build()?;
        log::debug!("{} {}", request.method(), request.url());
        Ok(self.http.execute(request)?)
    }

    pub(crate) fn expect_ok_json<T: DeserializeOwned>(&self, resp: Response) -> Result<T, Error> {
        if resp.status().is_success() {
            resp.json::<T>().map_err(Error::from)
        } else {
            self.parse_error(resp)
        }
    }

    pub(crate) fn expect_success(&self, resp: Response) -> Result<(), Error> {
        if resp.status().is_success() {
            Ok(())
        } else {
            self.parse_error(resp)
        }
    }

    pub(crate) fn expect_bytes(&self, resp: Response) -> Result<Vec<u8>, Error> {
        if resp.status().is_success() {
            Ok(resp.bytes()?.to_vec())
        } else {
            self.parse_error(resp)
        }
    }

    fn parse_error<T>(&self, mut resp: Response) -> Result<T, Error> {
        let status = resp.status();
        let body = read_body_with_limit(&mut resp, MAX_ERROR_BODY_BYTES)?;
        Err(common::parse_error_from_body(status, &body))
    }
}
