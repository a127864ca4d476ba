//! Product detail view.

use leptos::prelude::*;
use leptos_icons::Icon;
use storefront_core::{DetailSession, DetailState, Product, ProductId, ProductRepository};
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::rating::RatingSummary;
use crate::config::COMMISSION_RATE;
use crate::models::AppRoute;
use crate::utils::format::{commission, format_price};

stylance::import_crate_style!(css, "src/components/detail/detail.module.css");

/// Detail view for one product.
///
/// Fetches the product once per mount. A missing product, a failed request
/// and an unparseable id all render the same "not found" message.
#[component]
pub fn ProductDetail(id: Option<ProductId>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let session = match id {
        Some(id) => {
            let session = RwSignal::new(DetailSession::new());
            if let Some(token) = session.try_update(|s| s.begin_load()) {
                let repo = ctx.repository();
                spawn_local(async move {
                    let result = repo.get_by_id(id).await;
                    let _ = session.try_update(|s| s.finish_load(token, id, result));
                });
            }
            session
        }
        None => RwSignal::new(DetailSession::not_found()),
    };

    let state = Memo::new(move |_| session.with(|s| s.state().clone()));

    move || match state.get() {
        DetailState::Loading => view! {
            <p class=css::message>"Loading product details..."</p>
        }
        .into_any(),
        DetailState::NotFound => view! {
            <div class=css::notFound>
                <p class=css::notFoundText>"Product not found."</p>
                <BackButton />
            </div>
        }
        .into_any(),
        DetailState::Found(product) => view! { <DetailCard product=product /> }.into_any(),
    }
}

/// Returns to the product list.
#[component]
fn BackButton() -> impl IntoView {
    view! {
        <button
            class=css::back
            on:click=move |_| AppRoute::List.push()
            title="Back to products"
            aria-label="Back to products"
        >
            <Icon icon=ic::ARROW_LEFT />
        </button>
    }
}

#[component]
fn DetailCard(product: Product) -> impl IntoView {
    let price = format_price(product.price);
    let commission_label = format!("Commission ({:.0}%): ", COMMISSION_RATE * 100.0);
    let commission_amount = format_price(commission(product.price, COMMISSION_RATE));

    view! {
        <article class=css::card>
            <div class=css::backCorner>
                <BackButton />
            </div>

            <div class=css::imagePane>
                <div class=css::imageFrame>
                    <img src=product.image.clone() alt=product.title.clone() />
                </div>
            </div>

            <div class=css::info>
                <p class=css::productId>"Product ID: " {product.id}</p>
                <h2 class=css::title>{product.title.clone()}</h2>
                <p class=css::description>{product.description.clone()}</p>

                <p class=css::price>{price}</p>
                <p class=css::commission>
                    {commission_label}
                    <span class=css::commissionAmount>{commission_amount}</span>
                </p>

                <RatingSummary product=product.clone() large=true />

                <span class=css::category>
                    <Icon icon=ic::TAG />
                    {product.category.clone()}
                </span>
            </div>
        </article>
    }
}
