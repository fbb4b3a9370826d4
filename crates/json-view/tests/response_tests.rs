use axum::body::to_bytes;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use json_view::hal::Entity;
use json_view::{JsonModel, Variable};
use serde_json::{Value, json};

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}

fn content_type(response: &Response) -> &str {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

#[tokio::test]
async fn test_json_response() {
    let mut model = JsonModel::new();
    model.set_variable("payload", Entity::new(json!({"id": 1})));

    let response = model.into_response();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "application/json");
    assert_eq!(body_text(response).await, r#"{"id":1}"#);
}

#[tokio::test]
async fn test_jsonp_response() {
    let mut model = JsonModel::new();
    model.set_variable("x", json!(1)).set_jsonp_callback("cb");

    let response = model.into_response();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "application/javascript");
    assert_eq!(body_text(response).await, r#"cb({"x":1});"#);
}

#[tokio::test]
async fn test_encoding_failure_response() {
    let mut model = JsonModel::new();
    model
        .set_variable("payload", Variable::from(f64::NAN))
        .set_jsonp_callback("cb");

    let response = model.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(content_type(&response), "application/json");

    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"]["code"], json!("ENCODING_ERROR"));
}
