//! List controls: title search, category filter and sort order.

use leptos::prelude::*;
use leptos_icons::Icon;
use storefront_core::{CatalogQuery, SortOption};

use crate::components::icons as ic;
use crate::utils::format::capitalize;

stylance::import_crate_style!(css, "src/components/catalog/catalog.module.css");

#[component]
pub fn Toolbar(
    query: Memo<CatalogQuery>,
    categories: Memo<Vec<String>>,
    on_search: Callback<String>,
    on_category: Callback<Option<String>>,
    on_sort: Callback<SortOption>,
) -> impl IntoView {
    view! {
        <div class=css::toolbar>
            <SearchBox query=query on_search=on_search />
            <CategorySelect query=query categories=categories on_category=on_category />
            <SortSelect query=query on_sort=on_sort />
        </div>
    }
}

#[component]
fn SearchBox(query: Memo<CatalogQuery>, on_search: Callback<String>) -> impl IntoView {
    view! {
        <div class=css::search>
            <span class=css::searchIcon aria-hidden="true"><Icon icon=ic::SEARCH /></span>
            <input
                type="text"
                class=css::searchInput
                placeholder="Search products..."
                aria-label="Search products by title"
                prop:value=move || query.with(|q| q.search.clone())
                on:input=move |ev| on_search.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Category dropdown; the empty value stands for all categories.
#[component]
fn CategorySelect(
    query: Memo<CatalogQuery>,
    categories: Memo<Vec<String>>,
    on_category: Callback<Option<String>>,
) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        on_category.run((!value.is_empty()).then_some(value));
    };

    view! {
        <select class=css::select aria-label="Filter by category" on:change=on_change>
            <option value="" prop:selected=move || query.with(|q| q.category.is_none())>
                "All Categories"
            </option>
            <For
                each=move || categories.get()
                key=|category| category.clone()
                children=move |category| {
                    let label = capitalize(&category);
                    let value = category.clone();
                    let is_selected = move || {
                        query.with(|q| q.category.as_deref() == Some(category.as_str()))
                    };
                    view! {
                        <option value=value prop:selected=is_selected>{label}</option>
                    }
                }
            />
        </select>
    }
}

/// Sort dropdown with `"{key}-{direction}"` option values.
#[component]
fn SortSelect(query: Memo<CatalogQuery>, on_sort: Callback<SortOption>) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        match value.parse::<SortOption>() {
            Ok(sort) => on_sort.run(sort),
            Err(e) => log::warn!("{}", e),
        }
    };

    view! {
        <select class=css::select aria-label="Sort products" on:change=on_change>
            <option value="" prop:selected=move || query.with(|q| q.sort.key.is_none())>
                "Sort By"
            </option>
            {SortOption::CHOICES
                .into_iter()
                .map(|(option, label)| {
                    view! {
                        <option
                            value=option.to_string()
                            prop:selected=move || query.with(|q| q.sort == option)
                        >
                            {label}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
