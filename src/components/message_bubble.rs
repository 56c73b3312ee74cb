//! Message Bubble Component
//!
//! A single chat message, aligned by sender.

use chrono::{DateTime, Utc};
use leptos::*;

use crate::api::{Message, Sender};

/// One message in the conversation
#[component]
pub fn MessageBubble(message: Message) -> impl IntoView {
    let (row_class, bubble_class) = match message.sender_type {
        Sender::User => ("flex justify-end", "bg-primary-600 text-white"),
        Sender::Star => ("flex justify-start", "bg-gray-700 text-white"),
        Sender::System => ("flex justify-center", "bg-gray-800 text-gray-400 text-sm"),
    };

    view! {
        <div class=row_class>
            <div class=format!("max-w-[75%] rounded-2xl px-4 py-2 {}", bubble_class)>
                <p class="whitespace-pre-wrap break-words">{message.content.clone()}</p>
                <p class="text-xs opacity-60 mt-1 text-right">
                    {short_time(&message.created_at)}
                </p>
            </div>
        </div>
    }
}

/// Compact time label for a message timestamp.
fn short_time(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_short_time_is_hours_and_minutes() {
        let timestamp = Utc.with_ymd_and_hms(2024, 5, 1, 9, 5, 30).unwrap();
        assert_eq!(short_time(&timestamp), "09:05");
    }
}
