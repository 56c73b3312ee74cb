//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::api::ApiClient;
use crate::components::{Nav, Toast};
use crate::pages::{ChatPage, NotFound, StarSelection};
use crate::routes;
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    // The shared HTTP client is provided through context, never through an
    // ambient global
    provide_context(ApiClient::from_window());

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area, routed per the declared table
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path=routes::STAR_SELECTION_PATH view=StarSelection />
                        <Route path=routes::CHAT_PATH view=ChatPage />
                        <Route path=routes::NOT_FOUND_PATH view=NotFound />
                    </Routes>
                </main>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}
