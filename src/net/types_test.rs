use super::*;
use serde_json::json;

// =============================================================
// ApiEnvelope
// =============================================================

#[test]
fn envelope_success_yields_data() {
    let env: ApiEnvelope<i64> = ApiEnvelope::from_value(json!({ "code": 200, "message": "ok", "data": 5 })).unwrap();
    assert_eq!(env.into_data().unwrap(), Some(5));
}

#[test]
fn envelope_without_data_is_none() {
    let env: ApiEnvelope<Value> = ApiEnvelope::from_value(json!({ "code": 200, "data": null })).unwrap();
    assert_eq!(env.into_data().unwrap(), None);
}

#[test]
fn envelope_failure_carries_message() {
    let env: ApiEnvelope<Value> =
        ApiEnvelope::from_value(json!({ "code": 500, "message": "username taken", "data": null })).unwrap();
    let err = env.into_data().unwrap_err();
    match err {
        ClientError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "username taken");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn envelope_rejects_wrong_shape() {
    let err = ApiEnvelope::<i64>::from_value(json!([1])).unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

// =============================================================
// Auth payloads
// =============================================================

#[test]
fn login_response_decodes_camel_case() {
    let resp: LoginResponse = serde_json::from_value(json!({
        "token": "jwt",
        "userId": 3,
        "username": "alice",
        "realName": "Alice",
        "roles": [{ "roleCode": "TEACHER", "roleName": "Teacher" }]
    }))
    .unwrap();
    assert_eq!(resp.user_id, 3);
    assert_eq!(resp.real_name.as_deref(), Some("Alice"));
    assert_eq!(resp.roles[0].role_code, "TEACHER");
}

#[test]
fn login_response_roles_default_empty() {
    let resp: LoginResponse = serde_json::from_value(json!({ "token": "t", "userId": 1, "username": "u" })).unwrap();
    assert!(resp.roles.is_empty());
}

#[test]
fn page_result_decodes() {
    let page: PageResult<Value> = serde_json::from_value(json!({
        "records": [{ "id": 1 }],
        "total": 11,
        "currentPage": 2,
        "pageSize": 10,
        "totalPages": 2
    }))
    .unwrap();
    assert_eq!(page.records.len(), 1);
    assert_eq!(page.total_pages, 2);
}

#[test]
fn register_request_skips_absent_optionals() {
    let req = RegisterRequest {
        username: "bob".into(),
        password: "secret1".into(),
        real_name: "Bob".into(),
        ..RegisterRequest::default()
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value, json!({ "username": "bob", "password": "secret1", "realName": "Bob" }));
}

// =============================================================
// RegisterRequest::validate
// =============================================================

fn valid_register() -> RegisterRequest {
    RegisterRequest {
        username: "carol".into(),
        password: "hunter22".into(),
        real_name: "Carol".into(),
        email: Some("carol@example.test".into()),
        ..RegisterRequest::default()
    }
}

#[test]
fn validate_accepts_well_formed() {
    assert!(valid_register().validate().is_ok());
}

#[test]
fn validate_rejects_short_username() {
    let req = RegisterRequest { username: "ab".into(), ..valid_register() };
    assert!(req.validate().unwrap_err().to_string().contains("username"));
}

#[test]
fn validate_rejects_short_password() {
    let req = RegisterRequest { password: "12345".into(), ..valid_register() };
    assert!(req.validate().unwrap_err().to_string().contains("password"));
}

#[test]
fn validate_rejects_blank_real_name() {
    let req = RegisterRequest { real_name: "  ".into(), ..valid_register() };
    assert!(req.validate().is_err());
}

#[test]
fn validate_rejects_malformed_email() {
    let req = RegisterRequest { email: Some("nope".into()), ..valid_register() };
    assert!(req.validate().unwrap_err().to_string().contains("email"));
}
