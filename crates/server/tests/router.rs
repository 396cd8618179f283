use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use configs::AppConfig;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use server::startup::{build_app, build_state};

async fn app() -> anyhow::Result<axum::Router> {
    let mut cfg = AppConfig::default();
    cfg.storage.data_file = std::env::temp_dir()
        .join(format!("router_{}.json", Uuid::new_v4()))
        .to_string_lossy()
        .into_owned();
    Ok(build_app(build_state(&cfg).await?))
}

async fn body_json(res: axum::response::Response) -> anyhow::Result<Value> {
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn json_request(method: Method, uri: &str, body: Value) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body)?))?)
}

#[tokio::test]
async fn openapi_document_is_served() -> anyhow::Result<()> {
    let res = app().await?
        .oneshot(Request::builder().uri("/api-docs/openapi.json").body(Body::empty())?)
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let doc = body_json(res).await?;
    assert!(doc["paths"]["/convidados/{code}"].is_object());
    Ok(())
}

#[tokio::test]
async fn create_and_fetch_with_dependents() -> anyhow::Result<()> {
    let app = app().await?;
    let entry = json!({
        "code": "D1",
        "host": {"name": "Davi", "confirmed": true},
        "conjuge": null,
        "dependentes": [{"name": "Duda", "confirmed": true}, {"name": "Dani", "confirmed": false}]
    });
    let res = app.clone().oneshot(json_request(Method::POST, "/convidados", entry.clone())?).await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app
        .oneshot(Request::builder().uri("/convidados/D1").body(Body::empty())?)
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await?, entry);
    Ok(())
}

#[tokio::test]
async fn missing_content_type_is_client_error() -> anyhow::Result<()> {
    let res = app().await?
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/convidados")
                .body(Body::from(r#"{"code":"Z","host":{"name":"Z","confirmed":false}}"#))?,
        )
        .await?;
    assert_eq!(res.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(body_json(res).await?["detail"].is_string());
    Ok(())
}

#[tokio::test]
async fn cors_preflight_is_allowed() -> anyhow::Result<()> {
    let res = app().await?
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/convidados")
                .header(header::ORIGIN, "https://example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
                .body(Body::empty())?,
        )
        .await?;
    assert!(res.status().is_success());
    assert!(res.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    Ok(())
}
