//! Server-sent event sessions.
//!
//! A client opens `GET {sse_path}` and first receives an `endpoint` event
//! naming the URL it must POST its JSON-RPC messages to. Responses to those
//! messages are pushed back on the same stream as `message` events.

use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{
        IntoResponse, Response,
        sse::{Event, KeepAlive, Sse},
    },
};
use futures::{Stream, StreamExt, stream};
use serde::Deserialize;
use tokio::sync::{RwLock, mpsc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::http::{AppState, JsonRpcRequest, process_request};

/// Events buffered per session before a POST waits on the stream.
const SESSION_BUFFER: usize = 32;

/// Open event streams keyed by session id.
pub(super) type SessionMap = Arc<RwLock<HashMap<String, mpsc::Sender<Event>>>>;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct MessageQuery {
    session_id: String,
}

/// Removes the session from the map once its stream is dropped.
struct SessionGuard {
    id: String,
    sessions: SessionMap,
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        let id = std::mem::take(&mut self.id);
        let sessions = Arc::clone(&self.sessions);
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            handle.spawn(async move {
                sessions.write().await.remove(&id);
                debug!("SSE session {} closed", id);
            });
        }
    }
}

/// Open a new event stream.
pub(super) async fn handle_stream(
    State(state): State<AppState>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, StatusCode> {
    let session_id = Uuid::new_v4().to_string();
    let query = serde_urlencoded::to_string([("sessionId", session_id.as_str())]).map_err(|e| {
        warn!("Failed to encode session endpoint: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    let endpoint = format!("{}?{}", state.message_path, query);

    let (tx, rx) = mpsc::channel(SESSION_BUFFER);
    state.sessions.write().await.insert(session_id.clone(), tx);
    info!("SSE session {} opened", session_id);

    let guard = SessionGuard {
        id: session_id,
        sessions: Arc::clone(&state.sessions),
    };

    let announce = stream::once(async move { Ok(Event::default().event("endpoint").data(endpoint)) });
    let messages = stream::unfold((rx, guard), |(mut rx, guard)| async move {
        rx.recv().await.map(|event| (Ok(event), (rx, guard)))
    });

    Ok(Sse::new(announce.chain(messages)).keep_alive(KeepAlive::default()))
}

/// Accept a JSON-RPC message for an open session.
///
/// The HTTP response only acknowledges receipt; the JSON-RPC response is
/// delivered on the session's event stream.
pub(super) async fn handle_message(
    State(state): State<AppState>,
    Query(query): Query<MessageQuery>,
    Json(request): Json<JsonRpcRequest>,
) -> Response {
    let sender = state.sessions.read().await.get(&query.session_id).cloned();
    let Some(sender) = sender else {
        return (StatusCode::NOT_FOUND, "Session not found").into_response();
    };

    debug!("SSE session {} received {}", query.session_id, request.method);

    let Some(response) = process_request(&state.server, request).await else {
        return StatusCode::ACCEPTED.into_response();
    };

    let event = match Event::default().event("message").json_data(&response) {
        Ok(event) => event,
        Err(e) => {
            warn!("Failed to encode SSE message: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    if sender.send(event).await.is_err() {
        state.sessions.write().await.remove(&query.session_id);
        return (StatusCode::GONE, "Session closed").into_response();
    }

    StatusCode::ACCEPTED.into_response()
}
