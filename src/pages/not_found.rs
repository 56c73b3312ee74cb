//! Not Found Page
//!
//! The defined state for unmatched paths.

use leptos::*;
use leptos_router::*;

use crate::routes::{self, RouteTarget};

/// 404 Not Found page
#[component]
pub fn NotFound() -> impl IntoView {
    let location = use_location();

    // Log paths the route table cannot resolve. This page is also rendered
    // for chat paths with an invalid star id, which do resolve; skip those.
    create_effect(move |_| {
        let path = location.pathname.get();
        if routes::resolve(&path).target == RouteTarget::NotFound {
            web_sys::console::warn_1(&format!("Unresolved navigation: {}", path).into());
        }
    });

    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔭"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Back to the stars"
            </A>
        </div>
    }
}
