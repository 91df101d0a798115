use crate::error::{fallback_message, Error, ResourceError};
use reqwest::blocking::RequestBuilder;
use reqwest::StatusCode;
use url::Url;

pub(crate) use crate::build_url::BuildUrlOptions;

pub(crate) const ACCOUNT_TOKEN_HEADER: &str = "X-Account-Token";

pub(crate) enum AuthProvider {
    ApiKey {
        api_key: String,
    },
    LinkedAccount {
        api_key: String,
        account_token: String,
    },
}

impl AuthProvider {
    pub(crate) fn new(api_key: String, account_token: Option<String>) -> Self {
        match account_token {
            Some(account_token) => AuthProvider::LinkedAccount {
                api_key,
                account_token,
            },
            None => AuthProvider::ApiKey { api_key },
        }
    }
}

pub(crate) fn apply_auth(req: RequestBuilder, auth: &Option<AuthProvider>) -> RequestBuilder {
    let Some(auth) = auth else {
        return req;
    };
    match auth {
        AuthProvider::ApiKey { api_key } => req.bearer_auth(api_key),
        AuthProvider::LinkedAccount {
            api_key,
            account_token,
        } => req
            .bearer_auth(api_key)
            .header(ACCOUNT_TOKEN_HEADER, account_token),
    }
}

pub(crate) fn build_url(
    base_url: &Url,
    segments: &[&str],
    options: BuildUrlOptions,
) -> Result<Url, Error> {
    let mut url = base_url.clone();
    if options.clear_query {
        url.set_query(None);
    }
    if options.clear_fragment {
        url.set_fragment(None);
    }
    {
        let mut path_segments = url
            .path_segments_mut()
            .map_err(|_| Error::InvalidBaseUrl(base_url.to_string()))?;
        if options.pop_if_empty {
            path_segments.pop_if_empty();
        }
        for segment in segments {
            path_segments.push(segment);
        }
    }
    Ok(url)
}

pub(crate) fn apply_query_params(
    req: RequestBuilder,
    params: Vec<(&'static str, String)>,
) -> RequestBuilder {
    if params.is_empty() {
        req
    } else {
        req.query(&params)
    }
}

pub(crate) fn parse_error_from_body(status: StatusCode, body: &[u8]) -> Error {
    let mut err = match serde_json::from_slice::<ResourceError>(body) {
        Ok(err) => err,
        Err(parse_err) => {
            if !body.is_empty() {
                log::warn!("unparseable error body for status {status}: {parse_err}");
            }
            ResourceError {
                detail: fallback_message(status, body),
                ..ResourceError::default()
            }
        }
    };
    err.status = status.as_u16();
    if err.detail.is_empty() {
        err.detail = fallback_message(status, &[]);
    }
    Error::Api(err)
}

#[cfg(test)]
mod tests {
    use super::{build_url, parse_error_from_body, BuildUrlOptions};
    use crate::error::Error;
    use reqwest::StatusCode;
    use url::Url;

    #[test]
    fn build_url_escapes_segments_and_drops_query() {
        let base = Url::parse("https://api.example.com/api/?stale=1#frag").expect("url");
        let url = build_url(&base, &["ats", "v1", "candidates", "a/b"], BuildUrlOptions::REQUEST)
            .expect("url");
        assert_eq!(url.as_str(), "https://api.example.com/api/ats/v1/candidates/a%2Fb");
    }

    #[test]
    fn cannot_be_a_base_urls_are_rejected() {
        let base = Url::parse("mailto:someone@example.com").expect("url");
        let err = build_url(&base, &["ats"], BuildUrlOptions::REQUEST).expect_err("base");
        assert!(matches!(err, Error::InvalidBaseUrl(_)));
    }

    #[test]
    fn error_body_is_parsed_with_status() {
        let body = br#"{"errors":[{"title":"Missing Required Field","detail":"first_name is required","problem_type":"MISSING_REQUIRED_FIELD"}]}"#;
        match parse_error_from_body(StatusCode::BAD_REQUEST, body) {
            Error::Api(err) => {
                assert_eq!(err.status, 400);
                assert_eq!(err.detail, "Bad Request");
                assert_eq!(err.errors[0].problem_type, "MISSING_REQUIRED_FIELD");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_json_error_body_falls_back_to_text() {
        match parse_error_from_body(StatusCode::BAD_GATEWAY, b"upstream timeout") {
            Error::Api(err) => {
                assert_eq!(err.status, 502);
                assert_eq!(err.detail, "upstream timeout");
                assert!(err.errors.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
