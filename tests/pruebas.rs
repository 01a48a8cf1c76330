use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use http_body_util::BodyExt;
use players::{create_root_app, middleware::REQUEST_ID_HEADER, routes::pruebas::PRUEBA_RESPONSE};
use tower::ServiceExt;
use uuid::Uuid;

async fn send(app: Router, method: Method, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

#[tokio::test]
async fn get_pruebas_returns_fixed_text() {
    let response = send(create_root_app(), Method::GET, "/pruebas").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/plain; charset=utf-8"
    );
    assert_eq!(body_bytes(response).await, b"PRUEBA DE CONTROLADOR");
}

#[tokio::test]
async fn query_string_is_ignored() {
    let response = send(create_root_app(), Method::GET, "/pruebas?foo=bar").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, PRUEBA_RESPONSE.as_bytes());
}

#[tokio::test]
async fn repeated_requests_are_identical() {
    let app = create_root_app();

    let first = send(app.clone(), Method::GET, "/pruebas").await;
    let second = send(app, Method::GET, "/pruebas").await;

    assert_eq!(first.status(), second.status());
    assert_eq!(
        first.headers().get(header::CONTENT_TYPE),
        second.headers().get(header::CONTENT_TYPE)
    );
    assert_eq!(body_bytes(first).await, body_bytes(second).await);
}

#[tokio::test]
async fn post_pruebas_is_not_allowed() {
    let response = send(create_root_app(), Method::POST, "/pruebas").await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_ne!(body_bytes(response).await, PRUEBA_RESPONSE.as_bytes());
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let response = send(create_root_app(), Method::GET, "/pruebas/otra").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(create_root_app(), Method::GET, "/").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn every_response_carries_a_distinct_request_id() {
    let app = create_root_app();

    let first = send(app.clone(), Method::GET, "/pruebas").await;
    let second = send(app.clone(), Method::GET, "/pruebas").await;
    let missing = send(app, Method::GET, "/missing").await;

    let id = |response: &Response| {
        let value = response.headers().get(REQUEST_ID_HEADER).unwrap();
        Uuid::parse_str(value.to_str().unwrap()).unwrap()
    };

    assert_ne!(id(&first), id(&second));
    assert_eq!(id(&first).get_version_num(), 7);
    let _ = id(&missing);
}
