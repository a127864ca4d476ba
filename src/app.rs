//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use leptos::prelude::*;
use storefront_core::CategorySource;

use crate::api::HttpProductRepository;
use crate::components::AppRouter;
use crate::config::{APP_NAME, CATEGORY_SOURCE};

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide context.
///
/// Provided at the root of the component tree and accessed from any child
/// with `use_context::<AppContext>()`. View state itself is not kept here:
/// each mounted view owns its own session and drops it on unmount.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Product API client shared by all views.
    pub repo: StoredValue<HttpProductRepository>,

    /// Whether category selection filters locally or re-fetches.
    pub category_source: CategorySource,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            repo: StoredValue::new(HttpProductRepository::default()),
            category_source: CATEGORY_SOURCE,
        }
    }

    /// A handle to the repository that can be moved into a future.
    pub fn repository(&self) -> HttpProductRepository {
        self.repo.get_value()
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::fatal>
                    <div class=css::fatalCard>
                        <h1 class=css::fatalTitle>"Something went wrong"</h1>
                        <p class=css::fatalText>
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details class=css::fatalDetails>
                            <summary>"Error details"</summary>
                            <ul>
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            class=css::reloadButton
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <div class=css::app>
                <header class=css::header>
                    <a class=css::brand href="#/">{APP_NAME}</a>
                </header>
                <main class=css::main>
                    <AppRouter />
                </main>
            </div>
        </ErrorBoundary>
    }
}
