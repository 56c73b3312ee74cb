//! StarChat
//!
//! Chat with your favorite stars, built with Leptos (WASM).
//!
//! # Features
//!
//! - Star selection grid backed by the StarChat REST API
//! - One chat session per star, with persisted history
//! - Explicit route table with a defined not-found state
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the StarChat API via HTTP; the shared
//! API client is provided to the view tree through Leptos context.

use std::sync::atomic::{AtomicBool, Ordering};

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod routes;
mod state;

static BOOTSTRAPPED: AtomicBool = AtomicBool::new(false);

/// Claim the single bootstrap slot for this process.
///
/// Mounting is not re-entrant; returns `true` only for the first caller.
fn try_claim_bootstrap() -> bool {
    BOOTSTRAPPED
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_ok()
}

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    if !try_claim_bootstrap() {
        return;
    }

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_claimed_exactly_once() {
        assert!(try_claim_bootstrap());
        assert!(!try_claim_bootstrap());
        assert!(!try_claim_bootstrap());
    }
}
