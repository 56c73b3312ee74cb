//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use crate::api::Star;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Active stars from the API
    pub stars: RwSignal<Vec<Star>>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        stars: create_rw_signal(Vec::new()),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Look up a cached star by id
    pub fn star(&self, star_id: u32) -> Option<Star> {
        self.stars
            .get()
            .iter()
            .find(|star| star.id == star_id)
            .cloned()
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_star(id: u32, name: &str) -> Star {
        Star {
            id,
            name: name.to_string(),
            english_name: String::new(),
            gender: String::new(),
            birth_date: String::new(),
            nationality: String::new(),
            occupation: String::new(),
            avatar: String::new(),
            cover_image: String::new(),
            introduction: String::new(),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_star_lookup_by_id() {
        let runtime = create_runtime();

        let state = GlobalState {
            stars: create_rw_signal(vec![sample_star(1, "Mei"), sample_star(2, "Ren")]),
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
        };

        assert_eq!(state.star(2).unwrap().name, "Ren");
        assert!(state.star(9).is_none());

        runtime.dispose();
    }
}
