//! API Wire Types
//!
//! Shapes exchanged with the StarChat REST API. Every endpoint wraps its
//! payload in an envelope with a `code` field; 200 means success and any
//! other value carries a human-readable `message`. Failures are reported
//! with HTTP 200 and a non-200 envelope code, so callers must unwrap the
//! envelope rather than trust the transport status alone.

use chrono::{DateTime, Utc};

/// Standard response envelope.
#[derive(Debug, serde::Deserialize)]
pub struct Envelope<T> {
    pub code: i32,
    pub message: String,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Unwrap the payload, turning a non-200 code into an error message.
    pub fn into_result(self) -> Result<T, String> {
        if self.code == 200 {
            self.data
                .ok_or_else(|| "Empty response payload".to_string())
        } else {
            Err(self.message)
        }
    }
}

/// Envelope variant for paginated list endpoints.
#[derive(Debug, serde::Deserialize)]
pub struct PagedEnvelope<T> {
    pub code: i32,
    pub message: String,
    pub data: Option<Vec<T>>,
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Pagination {
    pub total: i64,
    pub page: i32,
    pub page_size: i32,
    pub total_pages: i32,
}

impl<T> PagedEnvelope<T> {
    pub fn into_result(self) -> Result<Vec<T>, String> {
        if self.code == 200 {
            Ok(self.data.unwrap_or_default())
        } else {
            Err(self.message)
        }
    }
}

/// A star persona available for chat.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Star {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub english_name: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub nationality: String,
    #[serde(default)]
    pub occupation: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub cover_image: String,
    #[serde(default)]
    pub introduction: String,
    #[serde(default)]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// A chat session between the user and one star.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Chat {
    pub id: u32,
    pub user_id: u32,
    pub star_id: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub last_message: String,
    pub last_active: DateTime<Utc>,
    #[serde(default)]
    pub message_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub star: Option<Star>,
}

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Star,
    System,
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Message {
    pub id: u32,
    pub chat_id: u32,
    #[serde(default)]
    pub sender_id: u32,
    pub sender_type: Sender,
    pub content: String,
    #[serde(default = "default_message_type")]
    pub message_type: String,
    #[serde(default)]
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_message_type() -> String {
    "text".to_string()
}

/// Body for `POST /chats/messages`.
#[derive(Debug, serde::Serialize)]
pub struct SendMessageRequest {
    pub chat_id: u32,
    pub content: String,
    pub message_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_success_unwraps_data() {
        let envelope: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"code":200,"message":"success","data":[1,2]}"#).unwrap();
        assert_eq!(envelope.into_result().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_envelope_failure_surfaces_message() {
        let envelope: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"code":404,"message":"star not found","data":null}"#).unwrap();
        assert_eq!(envelope.into_result().unwrap_err(), "star not found");
    }

    #[test]
    fn test_message_decodes_sender_type() {
        let json = r#"{
            "id": 7,
            "chat_id": 3,
            "sender_id": 0,
            "sender_type": "star",
            "content": "hello",
            "message_type": "text",
            "status": "sent",
            "created_at": "2024-05-01T12:00:00Z",
            "updated_at": "2024-05-01T12:00:00Z"
        }"#;
        let message: Message = serde_json::from_str(json).unwrap();
        assert_eq!(message.sender_type, Sender::Star);
        assert_eq!(message.content, "hello");
    }

    #[test]
    fn test_paged_envelope_decodes_pagination() {
        let json = r#"{
            "code": 200,
            "message": "success",
            "data": [],
            "pagination": {"total": 0, "page": 1, "page_size": 50, "total_pages": 0}
        }"#;
        let envelope: PagedEnvelope<Message> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.pagination.as_ref().unwrap().page_size, 50);
        assert!(envelope.into_result().unwrap().is_empty());
    }

    #[test]
    fn test_star_tolerates_missing_optional_fields() {
        let json = r#"{"id":1,"name":"Mei","created_at":"2024-01-01T00:00:00Z"}"#;
        let star: Star = serde_json::from_str(json).unwrap();
        assert_eq!(star.name, "Mei");
        assert!(star.avatar.is_empty());
    }
}
