//! Page controls for the product list.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/catalog/catalog.module.css");

/// Numbered page buttons with previous/next arrows.
///
/// Renders nothing when `page_numbers` is empty.
#[component]
pub fn Pagination(
    current_page: Signal<usize>,
    page_numbers: Signal<Vec<usize>>,
    has_previous: Signal<bool>,
    has_next: Signal<bool>,
    on_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || page_numbers.with(|pages| !pages.is_empty())>
            <nav class=css::pagination aria-label="Pagination">
                <button
                    class=css::pageArrow
                    disabled=move || !has_previous.get()
                    on:click=move |_| on_change.run(current_page.get().saturating_sub(1))
                    title="Previous page"
                >
                    <Icon icon=ic::CHEVRON_LEFT />
                </button>

                <For
                    each=move || page_numbers.get()
                    key=|page| *page
                    children=move |page| {
                        let class = move || {
                            if current_page.get() == page {
                                format!("{} {}", css::pageButton, css::pageActive)
                            } else {
                                css::pageButton.to_string()
                            }
                        };
                        view! {
                            <button
                                class=class
                                aria-current=move || (current_page.get() == page).then_some("page")
                                on:click=move |_| on_change.run(page)
                            >
                                {page}
                            </button>
                        }
                    }
                />

                <button
                    class=css::pageArrow
                    disabled=move || !has_next.get()
                    on:click=move |_| on_change.run(current_page.get() + 1)
                    title="Next page"
                >
                    <Icon icon=ic::CHEVRON_RIGHT />
                </button>
            </nav>
        </Show>
    }
}
