//! Chat Page
//!
//! Conversation view with one star. The `star_id` route parameter is
//! forwarded by the router; anything that does not parse as a star id
//! renders the not-found page instead of issuing doomed requests.

use chrono::Utc;
use leptos::*;
use leptos_router::*;

use crate::api::{self, ApiClient, Chat, Message, Sender, Star};
use crate::components::{ChatInput, ListSkeleton, MessageBubble};
use crate::pages::NotFound;
use crate::state::global::GlobalState;

const HISTORY_PAGE_SIZE: u32 = 50;
const MESSAGE_LIST_ID: &str = "message-list";

/// Chat page component
#[component]
pub fn ChatPage() -> impl IntoView {
    let params = use_params_map();
    let star_id = create_memo(move |_| {
        params.with(|p| p.get("star_id").and_then(|raw| raw.parse::<u32>().ok()))
    });

    view! {
        {move || match star_id.get() {
            Some(star_id) => view! { <ChatSession star_id=star_id /> }.into_view(),
            None => view! { <NotFound /> }.into_view(),
        }}
    }
}

/// The active conversation with one star
#[component]
fn ChatSession(star_id: u32) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let client = use_context::<ApiClient>().expect("ApiClient not found");

    let star = create_rw_signal(None::<Star>);
    let chat = create_rw_signal(None::<Chat>);
    let messages = create_rw_signal(Vec::<Message>::new());
    let (loading, set_loading) = create_signal(true);
    let (sending, set_sending) = create_signal(false);

    // History pagination: pages count backwards in time from 1 (newest)
    let (oldest_page, set_oldest_page) = create_signal(1u32);
    let (total_pages, set_total_pages) = create_signal(1u32);
    let (loading_older, set_loading_older) = create_signal(false);

    // Load the star profile, session, and history on mount
    let state_for_load = state.clone();
    let client_for_load = client.clone();
    create_effect(move |_| {
        let state = state_for_load.clone();
        let client = client_for_load.clone();
        spawn_local(async move {
            set_loading.set(true);

            // Cached star from the selection page saves one round trip
            match state.star(star_id) {
                Some(cached) => star.set(Some(cached)),
                None => match api::fetch_star(&client, star_id).await {
                    Ok(fetched) => star.set(Some(fetched)),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch star {}: {}", star_id, e).into(),
                        );
                        state.show_error(&format!("Failed to load star: {}", e));
                    }
                },
            }

            match api::open_chat_with_star(&client, star_id).await {
                Ok(session) => {
                    let chat_id = session.id;
                    chat.set(Some(session));

                    match api::fetch_messages(&client, chat_id, 1, HISTORY_PAGE_SIZE).await {
                        Ok(page) => {
                            set_oldest_page.set(page.page);
                            set_total_pages.set(page.total_pages);
                            messages.set(page.messages);
                            scroll_to_latest();
                        }
                        Err(e) => {
                            state.show_error(&format!("Failed to load history: {}", e));
                        }
                    }
                }
                Err(e) => {
                    state.show_error(&format!("Failed to open chat: {}", e));
                }
            }

            set_loading.set(false);
        });
    });

    // Pull older history in front of what is already shown
    let state_for_older = state.clone();
    let client_for_older = client.clone();
    let load_older = move |_| {
        if loading_older.get_untracked() {
            return;
        }
        let next_page = oldest_page.get_untracked() + 1;
        if next_page > total_pages.get_untracked() {
            return;
        }
        let Some(chat_id) = chat.get_untracked().map(|c| c.id) else {
            return;
        };

        set_loading_older.set(true);
        let state = state_for_older.clone();
        let client = client_for_older.clone();
        spawn_local(async move {
            match api::fetch_messages(&client, chat_id, next_page, HISTORY_PAGE_SIZE).await {
                Ok(mut page) => {
                    set_oldest_page.set(page.page);
                    set_total_pages.set(page.total_pages);
                    messages.update(|list| {
                        page.messages.append(list);
                        *list = page.messages;
                    });
                }
                Err(e) => {
                    state.show_error(&format!("Failed to load older messages: {}", e));
                }
            }
            set_loading_older.set(false);
        });
    };

    let state_for_send = state.clone();
    let on_send = move |content: String| {
        let Some((chat_id, user_id)) = chat.get_untracked().map(|c| (c.id, c.user_id)) else {
            state_for_send.show_error("Chat session is not ready yet");
            return;
        };

        // Echo the user's message immediately; the server persists it
        messages.update(|list| list.push(local_user_message(chat_id, user_id, &content)));
        scroll_to_latest();
        set_sending.set(true);

        let state = state_for_send.clone();
        let client = client.clone();
        spawn_local(async move {
            match api::send_message(&client, chat_id, &content).await {
                Ok(reply) => {
                    messages.update(|list| list.push(reply));
                    scroll_to_latest();
                }
                Err(e) => {
                    state.show_error(&format!("Failed to send message: {}", e));
                }
            }
            set_sending.set(false);
        });
    };

    view! {
        <div class="flex flex-col h-[calc(100vh-10rem)] max-w-3xl mx-auto">
            // Conversation header
            <div class="flex items-center space-x-4 pb-4 border-b border-gray-700">
                <A href="/" class="text-gray-400 hover:text-white transition-colors">
                    "←"
                </A>
                {move || match star.get() {
                    Some(star) => view! {
                        <div class="flex items-center space-x-3">
                            <StarAvatar star=star.clone() />
                            <div>
                                <h1 class="text-xl font-bold">{star.name.clone()}</h1>
                                <p class="text-sm text-gray-400">{star.occupation.clone()}</p>
                            </div>
                        </div>
                    }.into_view(),
                    None => view! {
                        <h1 class="text-xl font-bold text-gray-400">"..."</h1>
                    }.into_view(),
                }}
            </div>

            // Message history
            <div id=MESSAGE_LIST_ID class="flex-1 overflow-y-auto py-4 space-y-3">
                // Older history affordance
                {move || {
                    if oldest_page.get() < total_pages.get() {
                        view! {
                            <div class="text-center">
                                <button
                                    on:click=load_older.clone()
                                    disabled=move || loading_older.get()
                                    class="px-4 py-2 text-sm text-gray-400 hover:text-white
                                           bg-gray-800 hover:bg-gray-700 rounded-lg transition-colors"
                                >
                                    {move || if loading_older.get() {
                                        "Loading..."
                                    } else {
                                        "Load earlier messages"
                                    }}
                                </button>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}

                {move || {
                    if loading.get() {
                        view! { <ListSkeleton count=4 /> }.into_view()
                    } else if messages.get().is_empty() {
                        view! {
                            <p class="text-center text-gray-400 py-12">
                                "Say hi to start the conversation"
                            </p>
                        }.into_view()
                    } else {
                        messages.get().into_iter().map(|message| {
                            view! { <MessageBubble message=message /> }
                        }).collect_view()
                    }
                }}

                // Reply pending indicator
                {move || {
                    if sending.get() {
                        view! {
                            <p class="text-sm text-gray-500 italic">"Typing..."</p>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>

            // Composer
            <ChatInput disabled=Signal::derive(move || sending.get() || loading.get()) on_send=on_send />
        </div>
    }
}

/// Small round avatar, falls back to a star glyph without an image
#[component]
fn StarAvatar(star: Star) -> impl IntoView {
    view! {
        {if star.avatar.is_empty() {
            view! {
                <span class="w-10 h-10 rounded-full bg-gray-700 flex items-center justify-center text-xl">
                    "⭐"
                </span>
            }.into_view()
        } else {
            view! {
                <img src=star.avatar.clone() alt=star.name.clone() class="w-10 h-10 rounded-full object-cover" />
            }.into_view()
        }}
    }
}

/// Build the locally echoed copy of an outgoing message.
fn local_user_message(chat_id: u32, user_id: u32, content: &str) -> Message {
    let now = Utc::now();
    Message {
        id: 0,
        chat_id,
        sender_id: user_id,
        sender_type: Sender::User,
        content: content.to_string(),
        message_type: "text".to_string(),
        status: "sent".to_string(),
        created_at: now,
        updated_at: now,
    }
}

/// Pin the history view to the newest message.
fn scroll_to_latest() {
    if let Some(list) = leptos::document().get_element_by_id(MESSAGE_LIST_ID) {
        list.set_scroll_top(list.scroll_height());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_echo_is_a_user_text_message() {
        let message = local_user_message(3, 7, "hello there");
        assert_eq!(message.chat_id, 3);
        assert_eq!(message.sender_id, 7);
        assert_eq!(message.sender_type, Sender::User);
        assert_eq!(message.message_type, "text");
        assert_eq!(message.content, "hello there");
    }
}
