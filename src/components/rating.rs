//! Star rating display shared by list rows and the detail view.

use leptos::prelude::*;
use leptos_icons::Icon;
use storefront_core::Product;

use crate::components::icons as ic;
use crate::utils::format::{format_rate, format_reviews};

stylance::import_crate_style!(css, "src/components/rating.module.css");

/// Number of stars in a rating row.
const STAR_COUNT: usize = 5;

/// Five stars, the first `filled` highlighted.
#[component]
pub fn Stars(filled: usize) -> impl IntoView {
    (0..STAR_COUNT)
        .map(|i| {
            let class = if i < filled { css::starFilled } else { css::starEmpty };
            view! { <span class=class><Icon icon=ic::STAR /></span> }
        })
        .collect_view()
}

/// Rate, stars and review count for a product.
#[component]
pub fn RatingSummary(product: Product, #[prop(optional)] large: bool) -> impl IntoView {
    let class = if large {
        format!("{} {}", css::rating, css::ratingLarge)
    } else {
        css::rating.to_string()
    };

    view! {
        <div class=class aria-label=format!("Rated {} out of 5", format_rate(product.rating.rate))>
            <span class=css::rate>{format_rate(product.rating.rate)}</span>
            <span class=css::stars aria-hidden="true">
                <Stars filled=product.filled_stars() />
            </span>
            <span class=css::reviews>{format_reviews(product.rating.count)}</span>
        </div>
    }
}
