//! HTTP API
//!
//! Typed operations against the StarChat REST API, issued through the
//! shared [`ApiClient`].

pub mod client;
pub mod types;

pub use client::ApiClient;
pub use types::{Chat, Message, Sender, Star};

use gloo_net::http::Response;
use serde::de::DeserializeOwned;

use types::{Envelope, PagedEnvelope, SendMessageRequest};

/// Decode an enveloped response, surfacing transport and API failures as
/// readable messages.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let envelope: Envelope<T> = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    envelope.into_result()
}

/// Fetch all active stars.
pub async fn fetch_stars(client: &ApiClient) -> Result<Vec<Star>, String> {
    let response = client.get("/stars").await?;
    decode(response).await
}

/// Fetch one star's profile.
pub async fn fetch_star(client: &ApiClient, star_id: u32) -> Result<Star, String> {
    let response = client.get(&format!("/stars/{}", star_id)).await?;
    decode(response).await
}

/// Get or create the chat session with a star.
pub async fn open_chat_with_star(client: &ApiClient, star_id: u32) -> Result<Chat, String> {
    let response = client
        .get(&format!("/chats/star?star_id={}", star_id))
        .await?;
    decode(response).await
}

/// One page of chat history, oldest first.
///
/// Pages count backwards in time: page 1 is the newest slice, the last page
/// the oldest.
#[derive(Debug, Clone, PartialEq)]
pub struct MessagePage {
    pub messages: Vec<Message>,
    pub page: u32,
    pub total_pages: u32,
}

impl MessagePage {
    /// Whether older history remains beyond this page.
    pub fn has_older(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Fetch a page of chat history, oldest first within the page.
///
/// The API returns messages newest first; the page is reversed here so the
/// chat view can render top-down.
pub async fn fetch_messages(
    client: &ApiClient,
    chat_id: u32,
    page: u32,
    page_size: u32,
) -> Result<MessagePage, String> {
    let response = client
        .get(&format!(
            "/chats/{}/messages?page={}&page_size={}",
            chat_id, page, page_size
        ))
        .await?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let envelope: PagedEnvelope<Message> = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    let total_pages = envelope
        .pagination
        .as_ref()
        .map(|p| p.total_pages.max(0) as u32)
        .unwrap_or(page);

    let mut messages = envelope.into_result()?;
    messages.reverse();

    Ok(MessagePage {
        messages,
        page,
        total_pages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_of_several_pages_has_older_history() {
        let page = MessagePage {
            messages: Vec::new(),
            page: 1,
            total_pages: 3,
        };
        assert!(page.has_older());
    }

    #[test]
    fn test_last_page_has_no_older_history() {
        let page = MessagePage {
            messages: Vec::new(),
            page: 3,
            total_pages: 3,
        };
        assert!(!page.has_older());

        let single = MessagePage {
            messages: Vec::new(),
            page: 1,
            total_pages: 1,
        };
        assert!(!single.has_older());
    }
}

/// Send a text message; the response is the star's reply.
pub async fn send_message(
    client: &ApiClient,
    chat_id: u32,
    content: &str,
) -> Result<Message, String> {
    let request = SendMessageRequest {
        chat_id,
        content: content.to_string(),
        message_type: "text".to_string(),
    };

    let response = client.post_json("/chats/messages", &request).await?;
    decode(response).await
}
