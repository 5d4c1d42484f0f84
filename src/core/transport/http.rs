//! HTTP transport implementation.
//!
//! Streamable HTTP front-end for the protocol session: JSON-RPC over POST
//! on a single configured path, per-client session identifiers carried in
//! the `Mcp-Session-Id` header, host/origin allow-listing and a liveness
//! probe on `/health`.
//!
//! Transport-level rejections (disallowed host or origin, unknown session
//! id, malformed requests) are answered here with an HTTP status; they
//! never reach the protocol session.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::UtilityServer;

/// Header carrying the opaque session identifier, both directions.
const SESSION_ID_HEADER: &str = "mcp-session-id";

/// Protocol revision reported to clients on initialize.
const PROTOCOL_VERSION: &str = "2024-11-05";

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// JSON-RPC request structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<serde_json::Value>,
}

/// JSON-RPC response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Option<serde_json::Value>, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Option<serde_json::Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }

    /// Method not found error.
    pub fn method_not_found(id: Option<serde_json::Value>) -> Self {
        Self::error(id, -32601, "Method not found")
    }

    /// Invalid request error.
    pub fn invalid_request(id: Option<serde_json::Value>) -> Self {
        Self::error(id, -32600, "Invalid Request")
    }

    /// Invalid params error.
    pub fn invalid_params(id: Option<serde_json::Value>, msg: impl Into<String>) -> Self {
        Self::error(id, -32602, msg)
    }

    /// Session not found error.
    pub fn session_not_found(id: Option<serde_json::Value>) -> Self {
        Self::error(id, -32001, "Session not found")
    }
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The protocol session dispatcher.
    server: UtilityServer,
    /// Transport configuration (allow-lists, path).
    config: Arc<HttpConfig>,
    /// Live client sessions, keyed by opaque id.
    sessions: Arc<RwLock<HashMap<String, SessionState>>>,
}

impl AppState {
    fn new(server: UtilityServer, config: HttpConfig) -> Self {
        Self {
            server,
            config: Arc::new(config),
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

/// Per-client conversation state.
///
/// Used only for continuation semantics, never for authentication.
#[derive(Debug, Clone)]
struct SessionState {
    initialized: bool,
}

/// Outcome of matching a request against the session map.
#[derive(Debug, PartialEq, Eq)]
enum SessionOutcome {
    /// No id supplied; a fresh session was created.
    New(String),
    /// A known id continues its conversation.
    Existing(String),
    /// The supplied id is not in the session map.
    Unknown,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the HTTP transport until shutdown.
    pub async fn run(self, server: UtilityServer) -> TransportResult<()> {
        let addr = self.address();
        let rpc_path = self.config.rpc_path.clone();
        let cors = build_cors_layer(&self.config);
        let state = AppState::new(server, self.config);

        // The allow-list check wraps only the protocol route; /health is
        // a pure liveness probe and stays reachable regardless.
        let app = Router::new()
            .route(
                &rpc_path,
                axum::routing::post(handle_rpc).delete(handle_session_close),
            )
            .route_layer(middleware::from_fn_with_state(
                state.clone(),
                enforce_allow_lists,
            ))
            .route("/health", get(health_check))
            .route("/", get(root_handler))
            .layer(cors)
            .with_state(state);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Ready - listening on {} (streamable HTTP)", addr);
        info!("  → Protocol: POST {}", rpc_path);
        info!("  → Health:   GET /health");

        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
                info!("Interrupt received, shutting down HTTP transport");
            })
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Build the CORS layer from the configured origin allow-list.
///
/// The session-id header must be explicitly exposed or browser clients
/// cannot read it back.
fn build_cors_layer(config: &HttpConfig) -> CorsLayer {
    let session_header = HeaderName::from_static(SESSION_ID_HEADER);

    let layer = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([session_header]);

    if config.origins_wildcarded() {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer.allow_origin(origins)
    }
}

// ============================================================================
// Allow-listing (DNS rebinding protection)
// ============================================================================

/// Strip a `:port` suffix from a Host header value.
fn strip_port(host: &str) -> &str {
    if let Some(bracket_end) = host.rfind(']') {
        // IPv6 literal: [::1]:8080
        return &host[..=bracket_end];
    }
    match host.rsplit_once(':') {
        Some((name, port)) if port.parse::<u16>().is_ok() => name,
        _ => host,
    }
}

/// Check a request's Host header against the allow-list.
fn host_allowed(config: &HttpConfig, host: Option<&str>) -> bool {
    if !config.dns_rebinding_protection {
        return true;
    }
    let Some(host) = host else {
        return false;
    };
    let host = strip_port(host);
    config
        .allowed_hosts
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(host))
}

/// Check a request's Origin header against the allow-list.
///
/// Absent Origin is fine (non-browser clients); a wildcard list accepts
/// anything.
fn origin_allowed(config: &HttpConfig, origin: Option<&str>) -> bool {
    if !config.dns_rebinding_protection || config.origins_wildcarded() {
        return true;
    }
    let Some(origin) = origin else {
        return true;
    };
    config
        .allowed_origins
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(origin))
}

/// Reject disallowed hosts/origins before the protocol handler runs.
async fn enforce_allow_lists(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let headers = request.headers();
    let host = headers.get("host").and_then(|v| v.to_str().ok());
    let origin = headers.get("origin").and_then(|v| v.to_str().ok());

    if !host_allowed(&state.config, host) {
        warn!("Rejected request with disallowed Host: {:?}", host);
        return (StatusCode::FORBIDDEN, "Forbidden: host not allowed\n").into_response();
    }
    if !origin_allowed(&state.config, origin) {
        warn!("Rejected request with disallowed Origin: {:?}", origin);
        return (StatusCode::FORBIDDEN, "Forbidden: origin not allowed\n").into_response();
    }

    next.run(request).await
}

// ============================================================================
// Sessions
// ============================================================================

/// Match the request's session header against the session map, creating a
/// fresh session when the header is absent.
async fn resolve_session(state: &AppState, headers: &HeaderMap) -> SessionOutcome {
    let supplied = headers
        .get(SESSION_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    match supplied {
        Some(id) => {
            if state.sessions.read().await.contains_key(&id) {
                SessionOutcome::Existing(id)
            } else {
                SessionOutcome::Unknown
            }
        }
        None => {
            let id = uuid::Uuid::new_v4().to_string();
            state
                .sessions
                .write()
                .await
                .insert(id.clone(), SessionState { initialized: false });
            info!("Issued new session {id}");
            SessionOutcome::New(id)
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Root handler - provides API info.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "transport": "streamable HTTP",
        "endpoints": {
            "rpc": state.config.rpc_path,
            "health": "/health"
        },
        "protocol": "JSON-RPC 2.0"
    }))
}

/// Health check endpoint - pure liveness probe, independent of any
/// protocol session.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "ok\n")
}

/// Handle JSON-RPC requests on the protocol path.
#[instrument(skip_all, fields(method))]
async fn handle_rpc(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<JsonRpcRequest>,
) -> Response {
    tracing::Span::current().record("method", request.method.as_str());

    let session_id = match resolve_session(&state, &headers).await {
        SessionOutcome::New(id) | SessionOutcome::Existing(id) => id,
        SessionOutcome::Unknown => {
            warn!("Request for unknown session");
            return (
                StatusCode::NOT_FOUND,
                Json(JsonRpcResponse::session_not_found(request.id)),
            )
                .into_response();
        }
    };

    let response = process_request(&state, request, &session_id).await;

    let mut http_response = (StatusCode::OK, Json(response)).into_response();
    if let Ok(value) = HeaderValue::from_str(&session_id) {
        http_response
            .headers_mut()
            .insert(HeaderName::from_static(SESSION_ID_HEADER), value);
    }
    http_response
}

/// Explicit session teardown via DELETE on the protocol path.
async fn handle_session_close(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let supplied = headers
        .get(SESSION_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    match supplied {
        Some(id) => {
            if state.sessions.write().await.remove(&id).is_some() {
                info!("Closed session {id}");
                StatusCode::NO_CONTENT.into_response()
            } else {
                StatusCode::NOT_FOUND.into_response()
            }
        }
        None => (StatusCode::BAD_REQUEST, "Missing session id\n").into_response(),
    }
}

/// Process a JSON-RPC request and return the response.
async fn process_request(
    state: &AppState,
    request: JsonRpcRequest,
    session_id: &str,
) -> JsonRpcResponse {
    if request.jsonrpc != "2.0" {
        return JsonRpcResponse::invalid_request(request.id);
    }

    match request.method.as_str() {
        "initialize" => handle_initialize(state, request, session_id).await,
        "ping" => JsonRpcResponse::success(request.id, serde_json::json!({})),
        "tools/list" => handle_tools_list(state, request).await,
        "tools/call" => handle_tools_call(state, request).await,

        // Notifications need no payload; acknowledge and move on.
        method if method.starts_with("notifications/") => {
            handle_notification(state, &request, session_id).await;
            JsonRpcResponse::success(request.id, serde_json::json!(null))
        }

        _ => {
            warn!("Unknown method: {}", request.method);
            JsonRpcResponse::method_not_found(request.id)
        }
    }
}

/// Handle initialize request.
async fn handle_initialize(
    state: &AppState,
    request: JsonRpcRequest,
    session_id: &str,
) -> JsonRpcResponse {
    info!("Processing initialize request for session {session_id}");

    if let Some(session) = state.sessions.write().await.get_mut(session_id) {
        session.initialized = true;
    }

    let result = serde_json::json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {}
        },
        "serverInfo": {
            "name": state.server.name(),
            "version": state.server.version()
        }
    });

    JsonRpcResponse::success(request.id, result)
}

/// Handle tools/list request.
async fn handle_tools_list(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    info!("Processing tools/list request");

    let tools: Vec<serde_json::Value> = state
        .server
        .list_tools()
        .into_iter()
        .map(|t| {
            serde_json::json!({
                "name": t.name,
                "description": t.description,
                "inputSchema": t.input_schema
            })
        })
        .collect();

    JsonRpcResponse::success(request.id, serde_json::json!({ "tools": tools }))
}

/// Handle tools/call request.
///
/// `arguments` passes through as present-or-absent: an omitted field must
/// reach the dispatcher as absent so the uniform "No arguments provided"
/// rejection applies, never defaulted to `{}` here.
async fn handle_tools_call(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    info!("Processing tools/call request");

    let Some(params) = request.params else {
        return JsonRpcResponse::invalid_params(request.id, "Missing params");
    };

    let Some(name) = params.get("name").and_then(|v| v.as_str()) else {
        return JsonRpcResponse::invalid_params(request.id, "Missing tool name");
    };

    let arguments = match params.get("arguments") {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::Object(map)) => Some(map.clone()),
        Some(_) => {
            return JsonRpcResponse::invalid_params(request.id, "arguments must be an object");
        }
    };

    let result = state.server.dispatch_call(name, arguments);
    match serde_json::to_value(&result) {
        Ok(value) => JsonRpcResponse::success(request.id, value),
        Err(e) => JsonRpcResponse::error(request.id, -32603, e.to_string()),
    }
}

/// Handle notifications (no response payload).
async fn handle_notification(state: &AppState, request: &JsonRpcRequest, session_id: &str) {
    match request.method.as_str() {
        "notifications/initialized" => {
            info!("Client confirmed initialization for session {session_id}");
            if let Some(session) = state.sessions.write().await.get_mut(session_id) {
                session.initialized = true;
            }
        }
        _ => {
            info!("Received notification: {}", request.method);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ToolResult;
    use crate::domains::math;

    fn test_state() -> AppState {
        let server = UtilityServer::new(&math::domain(), "math-mcp-server").unwrap();
        AppState::new(server, HttpConfig::default())
    }

    fn rpc(method: &str, params: Option<serde_json::Value>) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(serde_json::json!(1)),
            method: method.to_string(),
            params,
        }
    }

    fn call_tool_envelope(response: &JsonRpcResponse) -> (ToolResult, bool) {
        let result = response.result.as_ref().expect("expected result");
        let text = result["content"][0]["text"].as_str().unwrap();
        let envelope: ToolResult = serde_json::from_str(text).unwrap();
        let is_error = result
            .get("isError")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        (envelope, is_error)
    }

    #[tokio::test]
    async fn test_health_check_body() {
        let response = health_check().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_session_issued_when_header_absent() {
        let state = test_state();
        let outcome = resolve_session(&state, &HeaderMap::new()).await;
        let SessionOutcome::New(id) = outcome else {
            panic!("expected new session");
        };
        assert!(state.sessions.read().await.contains_key(&id));
    }

    #[tokio::test]
    async fn test_known_session_continues() {
        let state = test_state();
        let SessionOutcome::New(id) = resolve_session(&state, &HeaderMap::new()).await else {
            panic!("expected new session");
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(SESSION_ID_HEADER),
            HeaderValue::from_str(&id).unwrap(),
        );
        assert_eq!(
            resolve_session(&state, &headers).await,
            SessionOutcome::Existing(id)
        );
    }

    #[tokio::test]
    async fn test_unknown_session_rejected() {
        let state = test_state();
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(SESSION_ID_HEADER),
            HeaderValue::from_static("not-a-session"),
        );
        assert_eq!(
            resolve_session(&state, &headers).await,
            SessionOutcome::Unknown
        );
    }

    #[test]
    fn test_host_allow_list() {
        let config = HttpConfig::default();
        assert!(host_allowed(&config, Some("127.0.0.1:8080")));
        assert!(host_allowed(&config, Some("localhost")));
        assert!(host_allowed(&config, Some("LOCALHOST:9000")));
        assert!(!host_allowed(&config, Some("evil.example:8080")));
        assert!(!host_allowed(&config, None));
    }

    #[test]
    fn test_host_check_disabled_without_protection() {
        let config = HttpConfig {
            dns_rebinding_protection: false,
            ..Default::default()
        };
        assert!(host_allowed(&config, Some("evil.example")));
        assert!(origin_allowed(&config, Some("https://evil.example")));
    }

    #[test]
    fn test_origin_allow_list() {
        let config = HttpConfig {
            allowed_origins: vec!["https://app.example".to_string()],
            ..Default::default()
        };
        assert!(origin_allowed(&config, Some("https://app.example")));
        assert!(!origin_allowed(&config, Some("https://evil.example")));
        // Non-browser clients send no Origin.
        assert!(origin_allowed(&config, None));
    }

    #[test]
    fn test_origin_wildcard_accepts_everything() {
        let config = HttpConfig::default();
        assert!(origin_allowed(&config, Some("https://anything.example")));
    }

    #[test]
    fn test_strip_port() {
        assert_eq!(strip_port("localhost:8080"), "localhost");
        assert_eq!(strip_port("localhost"), "localhost");
        assert_eq!(strip_port("[::1]:8080"), "[::1]");
    }

    #[tokio::test]
    async fn test_initialize_reports_server_info() {
        let state = test_state();
        let SessionOutcome::New(id) = resolve_session(&state, &HeaderMap::new()).await else {
            panic!("expected new session");
        };

        let response = process_request(&state, rpc("initialize", None), &id).await;
        let result = response.result.unwrap();
        assert_eq!(result["serverInfo"]["name"], "math-mcp-server");
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
        assert!(state.sessions.read().await[&id].initialized);
    }

    #[tokio::test]
    async fn test_tools_list_over_http() {
        let state = test_state();
        let response = process_request(&state, rpc("tools/list", None), "s").await;
        let tools = response.result.unwrap()["tools"].clone();
        let names: Vec<&str> = tools
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert!(names.contains(&"math_calculate"));
    }

    #[tokio::test]
    async fn test_tools_call_success_over_http() {
        let state = test_state();
        let request = rpc(
            "tools/call",
            Some(serde_json::json!({
                "name": "math_calculate",
                "arguments": { "expression": "(10 + 5) * 2 - 8 / 4" }
            })),
        );
        let response = process_request(&state, request, "s").await;
        let (envelope, is_error) = call_tool_envelope(&response);
        assert!(!is_error);
        assert!(envelope.success);
        assert_eq!(envelope.result.unwrap()["value"], 28);
    }

    #[tokio::test]
    async fn test_tools_call_missing_arguments_not_defaulted() {
        // An omitted arguments field must surface the uniform dispatch
        // error, not an empty-map call.
        let state = test_state();
        let request = rpc(
            "tools/call",
            Some(serde_json::json!({ "name": "math_calculate" })),
        );
        let response = process_request(&state, request, "s").await;
        let (envelope, is_error) = call_tool_envelope(&response);
        assert!(is_error);
        assert!(envelope.error.unwrap().contains("No arguments provided"));
    }

    #[tokio::test]
    async fn test_tools_call_unknown_tool_over_http() {
        let state = test_state();
        let request = rpc(
            "tools/call",
            Some(serde_json::json!({ "name": "does_not_exist", "arguments": {} })),
        );
        let response = process_request(&state, request, "s").await;
        let (envelope, is_error) = call_tool_envelope(&response);
        assert!(is_error);
        assert!(envelope.error.unwrap().contains("Unknown tool"));
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let state = test_state();
        let response = process_request(&state, rpc("bogus/method", None), "s").await;
        assert_eq!(response.error.unwrap().code, -32601);
    }

    #[tokio::test]
    async fn test_wrong_jsonrpc_version_rejected() {
        let state = test_state();
        let mut request = rpc("tools/list", None);
        request.jsonrpc = "1.0".to_string();
        let response = process_request(&state, request, "s").await;
        assert_eq!(response.error.unwrap().code, -32600);
    }
}
