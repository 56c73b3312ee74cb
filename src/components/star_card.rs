//! Star Card Component
//!
//! One selectable star on the landing page.

use leptos::*;
use leptos_router::*;

use crate::api::Star;
use crate::routes;

/// Clickable card linking to the star's chat page
#[component]
pub fn StarCard(star: Star) -> impl IntoView {
    let href = routes::chat_href(star.id);
    let subtitle = if star.english_name.is_empty() {
        star.occupation.clone()
    } else {
        star.english_name.clone()
    };

    view! {
        <A
            href=href
            class="block bg-gray-800 hover:bg-gray-750 rounded-xl p-4 border border-gray-700
                   hover:border-primary-500 transition-colors"
        >
            <div class="flex items-center space-x-4">
                {if star.avatar.is_empty() {
                    view! {
                        <span class="w-14 h-14 rounded-full bg-gray-700 flex items-center
                                     justify-center text-2xl shrink-0">
                            "⭐"
                        </span>
                    }.into_view()
                } else {
                    view! {
                        <img
                            src=star.avatar.clone()
                            alt=star.name.clone()
                            class="w-14 h-14 rounded-full object-cover shrink-0"
                        />
                    }.into_view()
                }}

                <div class="min-w-0">
                    <h2 class="text-lg font-semibold truncate">{star.name.clone()}</h2>
                    <p class="text-sm text-gray-400 truncate">{subtitle}</p>
                </div>
            </div>

            {(!star.introduction.is_empty()).then(|| view! {
                <p class="text-sm text-gray-400 mt-3 line-clamp-2">{star.introduction.clone()}</p>
            })}
        </A>
    }
}
