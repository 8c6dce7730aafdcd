//! HTTP debug adapter (decode-once pipeline).
//!
//! Maps HTTP verbs onto DM operations before anything reaches the policy
//! or dispatcher layers:
//! - `GET    /dm/{oid}/{iid}`        -> Read
//! - `PUT    /dm/{oid}/{iid}`        -> Write (body = payload)
//! - `DELETE /dm/{oid}/{iid}`        -> Delete
//! - `POST   /dm/{oid}/{iid}/{rid}`  -> Execute
//! - `PUT    /dm/{oid}/{iid}/{rid}?pmax=1` -> Write-Attributes
//!
//! Caller identity comes from the `x-dmgate-caller` header (`bootstrap`,
//! `server:<short-id>`, absent = unauthenticated). This is a debug surface;
//! a production deployment would authenticate at the transport instead.

use std::sync::atomic::{AtomicU64, Ordering};

use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;

use dmgate_core::error::{DmError, ResponseCode, Result};
use dmgate_core::model::path::parse_target;
use dmgate_core::model::request::{parse_attribute_query, DmOperation, DmRequest, DmResponse};

use crate::app_state::AppState;
use crate::context::{Authorization, CallerContext};

static SESSION_SEQ: AtomicU64 = AtomicU64::new(1);

/// Resolve caller identity from headers.
fn resolve_caller(headers: &HeaderMap) -> Result<CallerContext> {
    let session_id = format!("http-{}", SESSION_SEQ.fetch_add(1, Ordering::Relaxed));

    let Some(raw) = headers.get("x-dmgate-caller") else {
        return Ok(CallerContext::unauthenticated(session_id));
    };
    let raw = raw
        .to_str()
        .map_err(|_| DmError::BadRequest("invalid x-dmgate-caller header".into()))?;

    let auth = if raw == "bootstrap" {
        Authorization::Bootstrap
    } else if let Some(id) = raw.strip_prefix("server:") {
        let short_id = id
            .parse::<u16>()
            .map_err(|_| DmError::BadRequest(format!("invalid short server id: {id}")))?;
        Authorization::Server { short_id }
    } else {
        return Err(DmError::BadRequest(format!("unknown caller kind: {raw}")));
    };

    Ok(CallerContext::new(session_id, auth))
}

/// Decode one HTTP request into a DM request.
fn decode(method: &Method, path: &str, query: Option<&str>, body: Bytes) -> Result<DmRequest> {
    let target = parse_target(path)?;

    let query_entries: Vec<String> = query
        .unwrap_or("")
        .split('&')
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect();

    let req = if *method == Method::GET {
        DmRequest::new(DmOperation::Read, target)
    } else if *method == Method::DELETE {
        DmRequest::new(DmOperation::Delete, target)
    } else if *method == Method::POST {
        DmRequest::new(DmOperation::Execute, target)
    } else if *method == Method::PUT {
        if query_entries.is_empty() {
            DmRequest::new(DmOperation::Write, target).with_payload(body)
        } else {
            let attrs = parse_attribute_query(&query_entries)?;
            DmRequest::new(DmOperation::WriteAttributes, target).with_attributes(attrs)
        }
    } else {
        return Err(DmError::BadRequest(format!("unsupported method: {method}")));
    };

    Ok(req)
}

fn http_status(code: ResponseCode) -> StatusCode {
    match code {
        ResponseCode::Content => StatusCode::OK,
        ResponseCode::Changed | ResponseCode::Deleted => StatusCode::NO_CONTENT,
        ResponseCode::BadRequest => StatusCode::BAD_REQUEST,
        ResponseCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ResponseCode::NotFound => StatusCode::NOT_FOUND,
        ResponseCode::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        ResponseCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn encode(resp: DmResponse) -> Response {
    let status = http_status(resp.status);
    match resp.payload {
        Some(payload) if resp.status.is_success() => (status, payload).into_response(),
        _ if resp.status.is_success() => status.into_response(),
        _ => {
            let body = json!({ "code": resp.status.as_str(), "coap": resp.status.coap() });
            (status, axum::Json(body)).into_response()
        }
    }
}

/// Single entry point for all `/dm/*` routes.
pub async fn dm_entry(
    State(state): State<AppState>,
    method: Method,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let caller = match resolve_caller(&headers) {
        Ok(c) => c,
        Err(e) => return encode(DmResponse::status(e.response_code())),
    };

    let request = match decode(&method, &path, query.as_deref(), body) {
        Ok(r) => r,
        Err(e) => {
            tracing::debug!(%path, error = %e, "request decode failed");
            return encode(DmResponse::status(e.response_code()));
        }
    };

    let response = state.dispatcher().handle(&request, &caller).await;

    let metrics = state.metrics();
    metrics
        .requests
        .inc(&[("op", request.op.as_str()), ("status", response.status.as_str())]);
    if response.status == ResponseCode::Unauthorized {
        metrics.policy_denials.inc(&[("op", request.op.as_str())]);
    }
    if response.status == ResponseCode::InternalError {
        metrics.store_errors.inc(&[("op", request.op.as_str())]);
    }

    encode(response)
}
