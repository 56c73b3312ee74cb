//! Pages
//!
//! Top-level page components for each route.

pub mod chat;
pub mod not_found;
pub mod star_selection;

pub use chat::ChatPage;
pub use not_found::NotFound;
pub use star_selection::StarSelection;
