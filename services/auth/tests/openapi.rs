//! The generated OpenAPI document is served to clients and dumped by the
//! `openapi` binary; pin the surface it advertises.

use horizon_auth::horizon::openapi;

#[test]
fn test_openapi_documents_auth_surface() {
    let doc = serde_json::to_value(openapi()).unwrap();

    let paths = doc.get("paths").expect("paths section");
    for path in ["/health", "/api/auth/register", "/api/auth/login"] {
        assert!(paths.get(path).is_some(), "missing path: {path}");
    }

    assert!(paths["/api/auth/register"].get("post").is_some());
    assert!(paths["/api/auth/login"].get("post").is_some());
    assert!(paths["/health"].get("get").is_some());
}

#[test]
fn test_openapi_register_response_has_no_password_field() {
    let doc = serde_json::to_value(openapi()).unwrap();

    let schema = &doc["components"]["schemas"]["RegisteredUser"]["properties"];
    assert!(schema.get("id").is_some());
    assert!(schema.get("name").is_some());
    assert!(schema.get("email").is_some());
    assert!(schema.get("password").is_none());
}

#[test]
fn test_openapi_session_schema_carries_user() {
    let doc = serde_json::to_value(openapi()).unwrap();

    let schemas = &doc["components"]["schemas"];
    assert!(schemas.get("Session").is_some());
    assert!(schemas.get("SessionUser").is_some());
    assert!(schemas["Session"]["properties"].get("token").is_some());
    assert!(schemas["SessionUser"]["properties"].get("id").is_some());
}
