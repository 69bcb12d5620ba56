use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

use crate::api::AppState;

pub async fn get_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.prometheus_handle.as_ref().map_or_else(
        || "Metrics not enabled or failed to initialize".to_string(),
        metrics_exporter_prometheus::PrometheusHandle::render,
    )
}

/// Catalog area a route belongs to, used as a low-cardinality metrics label.
fn route_group(path: &str) -> &'static str {
    match path.trim_start_matches('/').split('/').next().unwrap_or_default() {
        "favorite" => "favorites",
        "user" | "users" => "accounts",
        "characters" => "characters",
        "planets" => "planets",
        "starships" => "starships",
        "" | "health" | "metrics" => "system",
        _ => "unmatched",
    }
}

/// Tags each request with an id, logs its completion and feeds the
/// `http_requests_total` / `http_request_duration_seconds` series.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let started = Instant::now();
    let request_id = Uuid::new_v4();
    let method = req.method().clone();

    // Unmatched requests fall back to the raw path only for the span
    let raw_path = req.uri().path().to_string();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_string());
    let group = route_group(route.as_deref().unwrap_or(&raw_path));

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %raw_path,
        group = group,
    );

    async move {
        let response = next.run(req).await;
        let elapsed = started.elapsed();
        let status = response.status();

        let labels = [
            ("method", method.to_string()),
            ("route", route.unwrap_or_else(|| "unmatched".to_string())),
            ("group", group.to_string()),
            ("status", status.as_u16().to_string()),
        ];
        metrics::counter!("http_requests_total", &labels).increment(1);
        metrics::histogram!("http_request_duration_seconds", &labels)
            .record(elapsed.as_secs_f64());

        info!(
            status_code = status.as_u16(),
            elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            client_error = status.is_client_error(),
            "{} {} finished",
            method,
            raw_path
        );

        response
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::route_group;

    #[test]
    fn test_route_groups() {
        assert_eq!(route_group("/favorite/{user_id}/planet/{planet_id}"), "favorites");
        assert_eq!(route_group("/users/{user_id}/favorites"), "accounts");
        assert_eq!(route_group("/user"), "accounts");
        assert_eq!(route_group("/starships/{id}"), "starships");
        assert_eq!(route_group("/"), "system");
        assert_eq!(route_group("/health/ready"), "system");
        assert_eq!(route_group("/droids/7"), "unmatched");
    }
}
