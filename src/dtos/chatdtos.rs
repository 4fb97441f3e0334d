// dtos/chatdtos.rs
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::chatmodel::{ChatOverview, ContextType, Message};

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveChatDto {
    #[validate(length(min = 1, message = "Other user id is required"))]
    pub other_user_id: String,

    pub context_type: ContextType,

    #[validate(length(min = 1, message = "Context title is required"))]
    pub context_title: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveChatResponseDto {
    pub status: String,
    pub chat_id: String,
}

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageDto {
    #[validate(length(min = 1, message = "Message content is required"))]
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ChatListResponseDto {
    pub status: String,
    pub chats: Vec<ChatOverview>,
    pub results: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponseDto {
    pub status: String,
    pub data: Message,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageListResponseDto {
    pub status: String,
    pub messages: Vec<Message>,
    pub results: usize,
}
