//! HTTP request handling.
//!
//! Every route is a `POST /{route}`. The flow for one request is:
//!   1. Resolve the route from the path
//!   2. Read the body (bounded by `max_body_bytes`)
//!   3. Lock the dispatcher and run the bot callback
//!   4. Map the result or error to an HTTP response
//!
//! Steps 2 and 3 run under the configured request deadline. The bot
//! callback in step 3 runs on tokio's blocking pool, so a slow `tick`
//! neither stalls the runtime nor escapes the deadline.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use skybot_protocol::{Codec, ProtocolError, Route};

use crate::server::ServerState;
use crate::{Bot, SkybotError};

pub(crate) async fn handle_request<B, C>(
    State(state): State<Arc<ServerState<B, C>>>,
    uri: Uri,
    body: Body,
) -> Response
where
    B: Bot,
    C: Codec,
{
    let route = match Route::from_path(uri.path()) {
        Ok(route) => route,
        Err(e) => {
            tracing::warn!(path = uri.path(), "unknown route");
            return (StatusCode::NOT_FOUND, e.to_string()).into_response();
        }
    };
    tracing::debug!(%route, "request");

    let deadline = state.config.request_timeout;
    match tokio::time::timeout(deadline, serve_route(Arc::clone(&state), route, body)).await {
        Ok(Ok(reply)) if reply.is_empty() => StatusCode::OK.into_response(),
        Ok(Ok(reply)) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            reply,
        )
            .into_response(),
        Ok(Err(e)) => reject(&state, route, e).await,
        Err(_) => {
            tracing::warn!(%route, ?deadline, "request deadline exceeded");
            (StatusCode::REQUEST_TIMEOUT, "request deadline exceeded").into_response()
        }
    }
}

async fn serve_route<B, C>(
    state: Arc<ServerState<B, C>>,
    route: Route,
    body: Body,
) -> Result<Vec<u8>, SkybotError>
where
    B: Bot,
    C: Codec,
{
    let bytes = axum::body::to_bytes(body, state.config.max_body_bytes)
        .await
        .map_err(SkybotError::Body)?;

    tokio::task::spawn_blocking(move || {
        let mut dispatcher = state.dispatcher.blocking_lock();
        dispatcher.dispatch(route, &bytes)
    })
    .await
    .map_err(SkybotError::Callback)?
}

/// Turns a failed request into an error response. A fatal error also
/// stops the server.
async fn reject<B, C>(state: &ServerState<B, C>, route: Route, err: SkybotError) -> Response
where
    B: Bot,
    C: Codec,
{
    let status = status_for(&err);
    let message = err.to_string();

    match err {
        SkybotError::Protocol(e @ ProtocolError::ProtocolVersionMismatch { .. }) => {
            tracing::error!(%route, error = %e, "host speaks another protocol version, shutting down");
            state.fail(e).await;
        }
        other => {
            tracing::warn!(%route, error = %other, "request rejected");
        }
    }

    (status, message).into_response()
}

fn status_for(err: &SkybotError) -> StatusCode {
    match err {
        SkybotError::Protocol(ProtocolError::UnknownRoute(_)) => StatusCode::NOT_FOUND,
        SkybotError::Protocol(
            ProtocolError::Encode(_) | ProtocolError::InvalidVariantState { .. },
        ) => StatusCode::INTERNAL_SERVER_ERROR,
        SkybotError::Protocol(_) | SkybotError::Body(_) | SkybotError::DeckNotFound(_) => {
            StatusCode::BAD_REQUEST
        }
        SkybotError::Callback(_) | SkybotError::Bind { .. } | SkybotError::Serve(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
