//! Message Handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::{ListMessagesQuery, PostMessageRequest};
use crate::application::dto::response::{DeleteResponse, MessageResponse};
use crate::application::services::{MessageError, MessageService, MessageServiceImpl};
use crate::shared::error::AppError;
use crate::shared::validation::{validate_message, validation_error};
use crate::startup::AppState;

/// Build the message service over the shared store
fn message_service(state: &AppState) -> MessageServiceImpl<dyn crate::domain::MessageStore> {
    MessageServiceImpl::new(
        state.store.clone(),
        state.settings.history.default_list_limit,
    )
}

fn map_message_error(error: MessageError) -> AppError {
    match error {
        MessageError::NotFound => AppError::NotFound("Message not found".into()),
        MessageError::Storage(msg) => AppError::Internal(msg),
    }
}

/// Post a new message
pub async fn post_message(
    State(state): State<AppState>,
    Json(body): Json<PostMessageRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let content = validate_message(body.message.as_ref(), state.settings.message.max_length)
        .map_err(validation_error)?;

    let message = message_service(&state)
        .post_message(content)
        .await
        .map_err(map_message_error)?;

    Ok((StatusCode::CREATED, Json(MessageResponse::from(message))))
}

/// Get recent messages, newest first
pub async fn list_messages(
    State(state): State<AppState>,
    Query(query): Query<ListMessagesQuery>,
) -> Result<Json<Vec<MessageResponse>>, AppError> {
    let messages = message_service(&state)
        .list_messages(query.limit)
        .await
        .map_err(map_message_error)?;

    let responses: Vec<MessageResponse> =
        messages.into_iter().map(MessageResponse::from).collect();

    Ok(Json(responses))
}

/// Get a single message by id
pub async fn get_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id: i64 = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid message ID".into()))?;

    let message = message_service(&state)
        .get_message(id)
        .await
        .map_err(map_message_error)?;

    Ok(Json(MessageResponse::from(message)))
}

/// Delete a message by id
pub async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let id: i64 = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid message ID".into()))?;

    message_service(&state)
        .delete_message(id)
        .await
        .map_err(map_message_error)?;

    Ok(Json(DeleteResponse {
        message: format!("Message {} deleted", id),
    }))
}
