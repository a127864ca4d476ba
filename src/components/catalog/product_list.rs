//! Product list component.
//!
//! Owns one [`ListSession`] for as long as it is mounted. Every control
//! updates the session; a memo re-runs the pipeline over it.

use leptos::prelude::*;
use storefront_core::{ListSession, ProductRepository, SortOption, no_matches};
use wasm_bindgen_futures::spawn_local;

use super::{Pagination, ProductTable, Toolbar};
use crate::app::AppContext;
use crate::config::PAGE_SIZE;
use crate::utils::format::format_showing;

stylance::import_crate_style!(css, "src/components/catalog/catalog.module.css");

/// Fetch products for `category` (all when `None`) into the session.
///
/// The response is dropped if a newer fetch was issued meanwhile or the
/// view has unmounted.
fn load_products(ctx: AppContext, session: RwSignal<ListSession>, category: Option<String>) {
    let Some(token) = session.try_update(|s| s.begin_load_for(category.as_deref())) else {
        return;
    };
    let repo = ctx.repository();

    spawn_local(async move {
        let result = repo.list_for(category.as_deref()).await;
        let _ = session.try_update(|s| s.finish_load(token, result));
    });
}

/// Fetch the category list from the API into the session.
fn load_categories(ctx: AppContext, session: RwSignal<ListSession>) {
    let repo = ctx.repository();

    spawn_local(async move {
        let result = repo.list_categories().await;
        let _ = session.try_update(|s| s.set_categories(result));
    });
}

#[component]
pub fn ProductList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let session = RwSignal::new(ListSession::new());

    load_products(ctx, session, None);
    if ctx.category_source.refetches() {
        load_categories(ctx, session);
    }

    // Derived signals
    let is_loading = Signal::derive(move || session.with(|s| s.is_loading()));
    let query = Memo::new(move |_| session.with(|s| s.query().clone()));
    let categories = Memo::new(move |_| session.with(|s| s.categories()));
    let catalog = Memo::new(move |_| session.with(|s| s.view(PAGE_SIZE)));

    let current_page = Signal::derive(move || {
        catalog.with(|c| c.as_ref().map(|v| v.page.page).unwrap_or(1))
    });
    let page_numbers = Signal::derive(move || {
        catalog.with(|c| c.as_ref().map(|v| v.page.page_numbers()).unwrap_or_default())
    });
    let has_previous = Signal::derive(move || {
        catalog.with(|c| c.as_ref().is_ok_and(|v| v.page.has_previous()))
    });
    let has_next = Signal::derive(move || {
        catalog.with(|c| c.as_ref().is_ok_and(|v| v.page.has_next()))
    });
    let rows = Signal::derive(move || {
        catalog.with(|c| c.as_ref().map(|v| v.rows().to_vec()).unwrap_or_default())
    });
    let summary = Signal::derive(move || {
        catalog.with(|c| {
            c.as_ref()
                .map(|v| format_showing(v.page.item_range(), v.total_matches()))
                .unwrap_or_default()
        })
    });
    let show_empty = Signal::derive(move || catalog.with(no_matches));
    let data_error = Signal::derive(move || {
        catalog.with(|c| c.as_ref().err().map(|e| e.to_string()))
    });

    // Control handlers
    let on_search = Callback::new(move |text: String| {
        session.update(|s| s.set_search(text));
    });

    let on_category = Callback::new(move |category: Option<String>| {
        session.update(|s| s.select_category(category.clone()));
        if ctx.category_source.refetches() {
            load_products(ctx, session, category);
        }
    });

    let on_sort = Callback::new(move |sort: SortOption| {
        session.update(|s| s.set_sort(sort));
    });

    let on_page = Callback::new(move |page: usize| {
        session.update(|s| s.go_to_page(page));
    });

    view! {
        <section class=css::panel>
            <Toolbar
                query=query
                categories=categories
                on_search=on_search
                on_category=on_category
                on_sort=on_sort
            />

            <Show
                when=move || !is_loading.get()
                fallback=|| view! { <p class=css::loading>"Loading products..."</p> }
            >
                {move || data_error.get().map(|message| view! {
                    <p class=css::dataError role="alert">
                        "Products cannot be sorted: " {message}
                    </p>
                })}

                <ProductTable rows=rows show_empty=show_empty />

                <footer class=css::footer>
                    <span class=css::summary>{summary}</span>
                    <Pagination
                        current_page=current_page
                        page_numbers=page_numbers
                        has_previous=has_previous
                        has_next=has_next
                        on_change=on_page
                    />
                </footer>
            </Show>
        </section>
    }
}
