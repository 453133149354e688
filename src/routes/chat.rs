use axum::{Json, extract::State};
use tracing::Instrument;
use uuid::Uuid;

use crate::{
    error::AppError,
    extract::ValidatedJson,
    message::{ChatRequest, ChatResponse},
    services::prompt::compose_prompt,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    ValidatedJson(payload): ValidatedJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let span = tracing::info_span!(
        "chat",
        request_id = %Uuid::new_v4(),
        profile_id = %payload.profile.id
    );

    async move {
        let prompt = compose_prompt(&payload);

        match state.model.generate(&prompt).await {
            Ok(text) => {
                let reply = text.trim().to_string();
                tracing::info!(reply_len = reply.len(), "chat reply generated");
                Ok(Json(ChatResponse { reply }))
            }
            Err(e) => {
                tracing::error!(error = %e, "BACKEND ERROR");
                Err(AppError::from(e))
            }
        }
    }
    .instrument(span)
    .await
}
