//! Star Selection Page
//!
//! Landing page: pick a star to start chatting with.

use leptos::*;

use crate::api::{self, ApiClient};
use crate::components::{CardSkeleton, StarCard};
use crate::state::global::GlobalState;

/// Star selection page component
#[component]
pub fn StarSelection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let client = use_context::<ApiClient>().expect("ApiClient not found");

    let stars_signal = state.stars;
    let loading_signal = state.loading;

    // Fetch the star list on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        let client = client.clone();
        spawn_local(async move {
            state.loading.set(true);

            match api::fetch_stars(&client).await {
                Ok(stars) => {
                    state.stars.set(stars);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch stars: {}", e).into());
                    state.show_error(&format!("Failed to load stars: {}", e));
                }
            }

            state.loading.set(false);
        });
    });

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Pick a Star"</h1>
                <p class="text-gray-400 mt-1">"Choose who you want to talk to"</p>
            </div>

            // Star grid
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                {move || {
                    if loading_signal.get() {
                        (0..6).map(|_| view! { <CardSkeleton /> }).collect_view()
                    } else {
                        let stars = stars_signal.get();
                        if stars.is_empty() {
                            view! {
                                <div class="col-span-full text-center py-12">
                                    <p class="text-gray-400">"No stars available right now."</p>
                                </div>
                            }.into_view()
                        } else {
                            stars.into_iter().map(|star| {
                                view! { <StarCard star=star /> }
                            }).collect_view()
                        }
                    }
                }}
            </div>
        </div>
    }
}
