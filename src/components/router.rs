//! Application router component.
//!
//! Uses native hashchange events instead of leptos_router for hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the active view is derived from `#/path`
//! - **Views remount on every route change**: each mount starts a fresh session
//!   and a fresh fetch, and drops the previous view's state
//! - **hashchange events**: Browser back/forward buttons work automatically

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::catalog::ProductList;
use crate::components::detail::ProductDetail;
use crate::models::AppRoute;
use crate::utils::dom::scroll_to_top;

/// Main application router.
///
/// - `#/` → Product list
/// - `#/product/{id}` → Product detail
#[component]
pub fn AppRouter() -> impl IntoView {
    let route = RwSignal::new(AppRoute::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    // Start each view at the top of the page
    Effect::new(move |prev: Option<AppRoute>| {
        let current = route.get();
        if prev.is_some_and(|p| p != current) {
            scroll_to_top();
        }
        current
    });

    move || match route.get() {
        AppRoute::List => view! { <ProductList /> }.into_any(),
        AppRoute::Product { id } => view! { <ProductDetail id=id /> }.into_any(),
    }
}
