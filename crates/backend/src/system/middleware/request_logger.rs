use axum::body::Body;
use axum::http::{header, Request};
use axum::middleware::Next;
use axum::response::Response;

/// Middleware для логирования HTTP запросов: метод, путь, статус,
/// длительность и размер ответа (если известен из Content-Length).
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status();
    let size = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");
    let elapsed_ms = start.elapsed().as_millis();

    if status.is_server_error() {
        tracing::error!("{} {} -> {} | {}ms | {}", method, path, status.as_u16(), elapsed_ms, size);
    } else if status.is_client_error() {
        tracing::warn!("{} {} -> {} | {}ms | {}", method, path, status.as_u16(), elapsed_ms, size);
    } else {
        tracing::info!("{} {} -> {} | {}ms | {}", method, path, status.as_u16(), elapsed_ms, size);
    }

    response
}
