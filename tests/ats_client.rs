use serde_json::json;
use unified_api_rs::ats::{
    ApplicationListOptions, CandidateListOptions, CandidateRequest, EmailAddress,
    EmailAddressType, OfferStatus,
};
use unified_api_rs::{
    Client, EndpointRequest, EnumValue, Error, Field, IgnoreCommonModelRequest, IgnoreReason,
    ListOptions, OneOf, RetrieveOptions, WriteOptions,
};

mod common;
use common::{empty_response, json_response, serve_once};

fn client(base_url: &str) -> Client {
    Client::builder(base_url)
        .expect("builder")
        .api_key("test-key")
        .account_token("account-token")
        .build()
        .expect("build")
}

#[test]
fn list_candidates_sends_filters_and_parses_page() {
    let body = r#"{
        "next": "cD0yMDIx",
        "previous": null,
        "results": [
            {"id": "c1", "first_name": "Ada", "applications": ["a1"], "tags": null},
            {"id": "c2", "email_addresses": [{"value": "b@example.com", "email_address_type": "WORK"}]}
        ]
    }"#;
    let server = serve_once(json_response("200 OK", body));
    let client = client(&server.base_url);

    let options = CandidateListOptions {
        list: ListOptions {
            page_size: Some(2),
            include_remote_data: Some(false),
            expand: vec!["applications".to_string(), "attachments".to_string()],
            ..ListOptions::default()
        },
        last_name: Some("Lovelace".to_string()),
        ..CandidateListOptions::default()
    };
    let page = client.ats().list_candidates(&options).expect("list");
    assert_eq!(page.next_cursor(), Some("cD0yMDIx"));
    assert!(page.previous.is_null());
    let results = page.results();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].application_ids(), vec!["a1"]);
    assert!(results[0].tags.is_null());

    let req = server.finish();
    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/api/ats/v1/candidates");
    assert_eq!(req.query_value("page_size"), Some("2"));
    assert_eq!(req.query_value("include_remote_data"), Some("false"));
    assert_eq!(req.query_value("expand"), Some("applications,attachments"));
    assert_eq!(req.query_value("last_name"), Some("Lovelace"));
    assert_eq!(req.header_value("Authorization"), Some("Bearer test-key"));
    assert_eq!(req.header_value("X-Account-Token"), Some("account-token"));
}

#[test]
fn create_candidate_omits_unset_fields_from_body() {
    let body = r#"{
        "model": {"id": "c9", "first_name": "Ada"},
        "warnings": [],
        "errors": [],
        "logs": null
    }"#;
    let server = serve_once(json_response("201 Created", body));
    let client = client(&server.base_url);

    let candidate = CandidateRequest {
        first_name: "Ada".to_string().into(),
        company: Field::null(),
        email_addresses: Field::Value(vec![EmailAddress {
            value: "ada@example.com".to_string().into(),
            email_address_type: Field::Value(EmailAddressType::Personal.into()),
            ..EmailAddress::default()
        }]),
        ..CandidateRequest::default()
    };
    let request = EndpointRequest::new(candidate).remote_user_id("u1");
    let options = WriteOptions {
        is_debug_mode: Some(true),
        run_async: None,
    };
    let created = client
        .ats()
        .create_candidate(&request, &options)
        .expect("create");
    assert_eq!(created.model.id, Field::Value("c9".to_string()));
    assert!(created.warnings().is_empty());
    assert!(created.logs.is_null());

    let req = server.finish();
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/api/ats/v1/candidates");
    assert_eq!(req.query_value("is_debug_mode"), Some("true"));
    assert_eq!(req.query_value("run_async"), None);
    assert_eq!(
        req.json_body(),
        json!({
            "model": {
                "first_name": "Ada",
                "company": null,
                "email_addresses": [{"value": "ada@example.com", "email_address_type": "PERSONAL"}]
            },
            "remote_user_id": "u1"
        })
    );
}

#[test]
fn partial_update_uses_patch() {
    let server = serve_once(json_response("200 OK", r#"{"model": {"id": "c1"}}"#));
    let client = client(&server.base_url);

    let request = EndpointRequest::new(CandidateRequest {
        title: "CTO".to_string().into(),
        ..CandidateRequest::default()
    });
    client
        .ats()
        .partial_update_candidate("c1", &request, &WriteOptions::default())
        .expect("update");

    let req = server.finish();
    assert_eq!(req.method, "PATCH");
    assert_eq!(req.path, "/api/ats/v1/candidates/c1");
    assert_eq!(req.json_body(), json!({"model": {"title": "CTO"}}));
}

#[test]
fn ignore_candidate_posts_reason() {
    let server = serve_once(empty_response("200 OK"));
    let client = client(&server.base_url);

    let request = IgnoreCommonModelRequest::new(IgnoreReason::GeneralCustomerRequest);
    client.ats().ignore_candidate("c1", &request).expect("ignore");

    let req = server.finish();
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/api/ats/v1/candidates/ignore/c1");
    assert_eq!(req.json_body(), json!({"reason": "GENERAL_CUSTOMER_REQUEST"}));
}

#[test]
fn candidates_meta_post_parses_schema_description() {
    let body = r#"{
        "request_schema": {"type": "object"},
        "has_conditional_params": true,
        "has_required_linked_account_params": false
    }"#;
    let server = serve_once(json_response("200 OK", body));
    let client = client(&server.base_url);

    let meta = client.ats().candidates_meta_post().expect("meta");
    assert!(meta.has_conditional_params);
    assert!(meta.status.is_unset());

    let req = server.finish();
    assert_eq!(req.path, "/api/ats/v1/candidates/meta/post");
}

#[test]
fn retrieve_application_expands_nested_records() {
    let body = r#"{
        "id": "a1",
        "candidate": {"id": "c1", "first_name": "Ada"},
        "job": "j1",
        "offers": [{"id": "o1", "status": "APPROVAL-SENT"}]
    }"#;
    let server = serve_once(json_response("200 OK", body));
    let client = client(&server.base_url);

    let options = RetrieveOptions {
        expand: vec!["candidate".to_string(), "offers".to_string()],
        include_remote_data: None,
    };
    let application = client
        .ats()
        .retrieve_application("a1", &options)
        .expect("retrieve");
    assert!(application
        .candidate
        .value()
        .and_then(OneOf::expanded)
        .is_some());
    assert_eq!(application.job.value().and_then(OneOf::id), Some("j1"));
    let offers = application.offers.value().expect("offers");
    let offer = offers[0].expanded().expect("offer");
    assert_eq!(
        offer.status,
        Field::Value(EnumValue::Known(OfferStatus::ApprovalSent))
    );

    let req = server.finish();
    assert_eq!(req.path, "/api/ats/v1/applications/a1");
    assert_eq!(req.query_value("expand"), Some("candidate,offers"));
}

#[test]
fn api_errors_carry_status_and_problems() {
    let body = r#"{
        "errors": [{
            "source": {"pointer": "model/first_name"},
            "title": "Missing Required Field",
            "detail": "first_name is a required field",
            "problem_type": "MISSING_REQUIRED_FIELD"
        }],
        "warnings": []
    }"#;
    let server = serve_once(json_response("400 Bad Request", body));
    let client = client(&server.base_url);

    let err = client
        .ats()
        .list_applications(&ApplicationListOptions::default())
        .expect_err("error");
    match err {
        Error::Api(err) => {
            assert_eq!(err.status, 400);
            assert_eq!(err.errors.len(), 1);
            assert_eq!(err.errors[0].problem_type, "MISSING_REQUIRED_FIELD");
            assert_eq!(
                err.errors[0].source.value().map(|source| source.pointer.as_str()),
                Some("model/first_name")
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
    server.finish();
}

#[test]
fn plain_text_errors_fall_back_to_body() {
    let response = common::response_with_body(
        "401 Unauthorized",
        &[("Content-Type", "text/plain")],
        "Invalid API key",
    );
    let server = serve_once(response);
    let client = client(&server.base_url);

    let err = client
        .ats()
        .retrieve_job("j1", &RetrieveOptions::default())
        .expect_err("error");
    match err {
        Error::Api(err) => {
            assert_eq!(err.status, 401);
            assert_eq!(err.detail, "Invalid API key");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    server.finish();
}
