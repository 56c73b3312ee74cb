//! Chat Input Component
//!
//! Message composer with Enter-to-send.

use leptos::*;

/// Message composer
#[component]
pub fn ChatInput(
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_send: Callback<String>,
) -> impl IntoView {
    let (draft, set_draft) = create_signal(String::new());

    let submit = move || {
        let content = draft.get_untracked().trim().to_string();
        if content.is_empty() || disabled.get_untracked() {
            return;
        }
        set_draft.set(String::new());
        on_send.call(content);
    };

    view! {
        <div class="flex space-x-2 pt-4 border-t border-gray-700">
            <input
                type="text"
                placeholder="Type a message..."
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        submit();
                    }
                }
                class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
            <button
                on:click=move |_| submit()
                disabled=move || disabled.get()
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-700
                       rounded-lg font-medium transition-colors"
            >
                "Send"
            </button>
        </div>
    }
}
