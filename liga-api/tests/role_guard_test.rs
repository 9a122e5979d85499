/// Role-guard integration tests
///
/// The resolution group must reject requests without a valid secretario
/// token before touching the database at all. The test context's pool is
/// lazy and points at a closed port, so any handler that slipped past the
/// guard and reached storage would fail loudly — a 401/403 here proves
/// the rejection happened first.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use common::{body_json, body_text, expired_token, token_for, TestContext};
use liga_shared::models::staff::StaffRole;

fn resolutions_request(auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("GET")
        .uri("/resolucion/resoluciones");

    if let Some(token) = auth {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn liveness_returns_greeting_text() {
    let ctx = TestContext::new();

    let response = ctx
        .send(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_text(response).await,
        "Backend liga santandereana de patinaje"
    );
}

#[tokio::test]
async fn missing_token_is_401() {
    let ctx = TestContext::new();

    let response = ctx.send(resolutions_request(None)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Acceso denegado. No se proporcionó token.");
}

#[tokio::test]
async fn garbage_token_is_401() {
    let ctx = TestContext::new();

    let response = ctx.send(resolutions_request(Some("no-es-un-token"))).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Token inválido.");
}

#[tokio::test]
async fn expired_token_is_401() {
    let ctx = TestContext::new();
    let token = expired_token(StaffRole::Secretario);

    let response = ctx.send(resolutions_request(Some(&token))).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn wrong_role_is_403() {
    let ctx = TestContext::new();
    let token = token_for(StaffRole::Entrenador);

    let response = ctx.send(resolutions_request(Some(&token))).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Acceso denegado. Rol no autorizado.");
}

#[tokio::test]
async fn valid_secretario_token_passes_the_guard() {
    let ctx = TestContext::new();
    let token = token_for(StaffRole::Secretario);

    let response = ctx.send(resolutions_request(Some(&token))).await;

    // The lazy pool cannot reach a database, so the handler itself fails;
    // what matters is that the guard let the request through.
    assert_ne!(response.status(), StatusCode::UNAUTHORIZED);
    assert_ne!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn query_parameter_token_fallback_is_accepted() {
    let ctx = TestContext::new();
    let token = token_for(StaffRole::Secretario);

    let request = Request::builder()
        .method("GET")
        .uri(format!("/resolucion/resoluciones?token={}", token))
        .body(Body::empty())
        .unwrap();

    let response = ctx.send(request).await;

    assert_ne!(response.status(), StatusCode::UNAUTHORIZED);
    assert_ne!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn every_resolution_route_is_guarded() {
    let ctx = TestContext::new();

    let cases = [
        ("GET", "/resolucion/resoluciones"),
        ("POST", "/resolucion/resoluciones"),
        ("GET", "/resolucion/resoluciones/Copa"),
        ("PUT", "/resolucion/resoluciones/Copa"),
        ("DELETE", "/resolucion/resoluciones/Copa"),
    ];

    for (method, uri) in cases {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        let response = ctx.send(request).await;
        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "{} {} should be rejected without a token",
            method,
            uri
        );
    }
}
