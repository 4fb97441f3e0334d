// handler/chat.rs
use std::sync::Arc;

use axum::{
    extract::Path,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use validator::Validate;

use crate::{
    db::chatdb::ChatExt,
    dtos::chatdtos::{
        ChatListResponseDto, MessageListResponseDto, MessageResponseDto, ResolveChatDto,
        ResolveChatResponseDto, SendMessageDto,
    },
    error::HttpError,
    middleware::SessionAuth,
    AppState,
};

pub fn chat_handler() -> Router {
    Router::new()
        .route("/", get(list_chats))
        .route("/resolve", post(resolve_chat))
        .route("/:chat_id/messages", get(get_messages).post(send_message))
}

/// Finds or creates the single thread for (pair, context). Called when a
/// user opens a conversation from a listing card.
pub async fn resolve_chat(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<SessionAuth>,
    Json(body): Json<ResolveChatDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let chat = app_state
        .db_client
        .get_or_create_chat(
            &auth.user.id,
            &body.other_user_id,
            body.context_type,
            &body.context_title,
        )
        .await
        .map_err(HttpError::from)?;

    Ok(Json(ResolveChatResponseDto {
        status: "success".to_string(),
        chat_id: chat.id,
    }))
}

pub async fn list_chats(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<SessionAuth>,
) -> Result<impl IntoResponse, HttpError> {
    let chats = app_state
        .db_client
        .get_user_chats(&auth.user.id)
        .await
        .map_err(HttpError::from)?;

    Ok(Json(ChatListResponseDto {
        status: "success".to_string(),
        results: chats.len(),
        chats,
    }))
}

pub async fn get_messages(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(chat_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let messages = app_state
        .db_client
        .get_chat_messages(&chat_id)
        .await
        .map_err(HttpError::from)?;

    Ok(Json(MessageListResponseDto {
        status: "success".to_string(),
        results: messages.len(),
        messages,
    }))
}

pub async fn send_message(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<SessionAuth>,
    Path(chat_id): Path<String>,
    Json(body): Json<SendMessageDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let message = app_state
        .db_client
        .send_message(&chat_id, &auth.user.id, &body.content)
        .await
        .map_err(HttpError::from)?;

    Ok(Json(MessageResponseDto {
        status: "success".to_string(),
        data: message,
    }))
}
