//! Product table and its rows.

use leptos::prelude::*;
use storefront_core::Product;

use crate::components::rating::RatingSummary;
use crate::models::AppRoute;
use crate::utils::format::format_price;

stylance::import_crate_style!(css, "src/components/catalog/catalog.module.css");

/// Table of the current page. Renders an empty-state row while `show_empty`.
#[component]
pub fn ProductTable(rows: Signal<Vec<Product>>, show_empty: Signal<bool>) -> impl IntoView {
    view! {
        <table class=css::table>
            <thead>
                <tr class=css::headRow>
                    <th class=css::colProduct>"Product"</th>
                    <th class=css::colCategory>"Category"</th>
                    <th class=css::colPrice>"Price"</th>
                    <th class=css::colRating>"Rating"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || rows.get()
                    key=|product| product.id
                    children=move |product| view! { <ProductRow product=product /> }
                />
                <Show when=move || show_empty.get()>
                    <tr>
                        <td class=css::empty colspan="4">"No products match your filters."</td>
                    </tr>
                </Show>
            </tbody>
        </table>
    }
}

/// One product; clicking it opens the detail view.
#[component]
fn ProductRow(product: Product) -> impl IntoView {
    let route = AppRoute::product(product.id);
    let on_click = {
        let route = route.clone();
        move |_: leptos::ev::MouseEvent| route.push()
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if activates_row(&ev.key()) {
            ev.prevent_default();
            route.push();
        }
    };

    let aria_label = format!("View details for {}", product.title);

    view! {
        <tr
            class=css::row
            on:click=on_click
            on:keydown=on_keydown
            tabindex="0"
            role="link"
            aria-label=aria_label
        >
            <td class=css::cellProduct>
                <div class=css::thumb>
                    <img src=product.image.clone() alt=product.title.clone() loading="lazy" />
                </div>
                <span class=css::title>{product.title.clone()}</span>
            </td>
            <td class=css::cellCategory>
                <span class=css::badge>{product.category.clone()}</span>
            </td>
            <td class=css::cellPrice>{format_price(product.price)}</td>
            <td class=css::cellRating>
                <RatingSummary product=product />
            </td>
        </tr>
    }
}

/// Keys that open a focused row, as for a button.
fn activates_row(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}
