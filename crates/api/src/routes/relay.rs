//! Inbound message endpoint.

use axum::extract::State;
use axum::Json;
use relay_core::{InboundMessage, RelayResponse};

use crate::state::AppState;

/// Run one inbound message through the pipeline.
///
/// Always answers 200 once the body parses; failures are reported in the
/// response `status`.
pub async fn whatsapp(
    State(state): State<AppState>,
    Json(message): Json<InboundMessage>,
) -> Json<RelayResponse> {
    Json(state.orchestrator.handle(message).await)
}
