use crate::fixtures::fatal;
use axum::body::Body;
use axum::handler::Handler;
use axum::http::response::Parts;
use axum::http::{Method, Request};
use bytes::Bytes;
use tokio_util::sync::CancellationToken;

/// Runs `handler` against `GET url` in the caller's task and returns the
/// recorded response head and body.
///
/// `token` is stored in the request extensions, so handlers can take it with
/// `Extension<CancellationToken>`. A panic inside the handler reaches the caller.
pub async fn do_get_request<H, T>(token: CancellationToken, url: &str, handler: H) -> (Parts, Bytes)
where
    H: Handler<T, ()>,
    T: 'static,
{
    let request = Request::builder()
        .method(Method::GET)
        .uri(url)
        .extension(token)
        .body(Body::empty())
        .unwrap_or_else(|e| fatal("build GET request", e));

    let response = handler.call(request, ()).await;
    let (parts, body) = response.into_parts();

    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_else(|e| fatal("read response body", e));

    (parts, body)
}
