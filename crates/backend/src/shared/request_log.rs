use super::format::format_count;
use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Request logging middleware: time, duration, body size, status, method, path.
/// Cyan timestamp for 200, yellow for everything else.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Буферизуем тело, чтобы узнать реальный размер ответа
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::error!(%method, %path, "failed to buffer response body: {e}");
            return Response::from_parts(parts, Body::default());
        }
    };

    let status = parts.status.as_u16();
    let color_code = if status == 200 { "36" } else { "33" };
    let elapsed_ms = start.elapsed().as_millis() as u64;

    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code,
        chrono::Local::now().format("%H:%M:%S"),
        elapsed_ms,
        format_count(bytes.len()),
        status,
        method,
        path
    );
    tracing::debug!(%method, %path, status, elapsed_ms, size = bytes.len(), "request served");

    Response::from_parts(parts, Body::from(bytes))
}
