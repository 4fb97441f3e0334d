// models/chatmodel.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::usermodel::User;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ContextType {
    Pooling,
    Renting,
    Delivery,
}

impl ContextType {
    pub fn to_str(&self) -> &str {
        match self {
            ContextType::Pooling => "pooling",
            ContextType::Renting => "renting",
            ContextType::Delivery => "delivery",
        }
    }
}

/// A conversation thread between exactly two users about one listing.
/// `participants` is kept in canonical sorted order; together with the
/// context pair it forms the thread's identity key, so the same two users
/// can hold several independent threads distinguished by `context_title`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    pub id: String,
    pub participants: [String; 2],
    pub context_type: ContextType,
    pub context_title: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub chat_id: String,
    pub sender_id: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// A chat hydrated for the inbox view: the other participant's record and
/// the most recent message, joined on every read.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChatOverview {
    #[serde(flatten)]
    pub chat: Chat,
    pub other_user: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_message: Option<Message>,
}
