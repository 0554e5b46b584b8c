//! Operational HTTP endpoints.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};

use dynomite_core::exposition::CONTENT_TYPE;

use crate::app_state::AppState;

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn landing(State(state): State<AppState>) -> Html<String> {
    let path = &state.cfg().web.telemetry_path;
    Html(format!(
        "<html>
<head><title>Dynomite Exporter</title></head>
<body>
<h1>Dynomite Exporter</h1>
<p><a href='{path}'>Metrics</a></p>
</body>
</html>
"
    ))
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let body = state.registry().render().await;

    (StatusCode::OK, [(header::CONTENT_TYPE, CONTENT_TYPE)], body).into_response()
}
