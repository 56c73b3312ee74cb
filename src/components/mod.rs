//! UI Components
//!
//! Reusable Leptos components for the app.

pub mod chat_input;
pub mod loading;
pub mod message_bubble;
pub mod nav;
pub mod star_card;
pub mod toast;

pub use chat_input::ChatInput;
pub use loading::{CardSkeleton, ListSkeleton};
pub use message_bubble::MessageBubble;
pub use nav::Nav;
pub use star_card::StarCard;
pub use toast::Toast;
