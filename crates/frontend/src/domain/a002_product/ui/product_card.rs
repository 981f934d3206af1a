use crate::layout::global_context::use_app_store;
use crate::shared::config::use_config;
use crate::shared::format::format_price;
use crate::shared::i18n::{t, Label};
use contracts::domain::a002_product::Product;
use contracts::domain::common::AggregateId;
use contracts::enums::Locale;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Card};

/// Product tile: picture, localized texts, prices and shopper actions.
#[component]
pub fn ProductCard(product: Product, locale: Locale) -> impl IntoView {
    let store = use_app_store();
    let currency = use_config().display.currency(locale).to_string();

    let sku = product.sku_id.as_string();
    let name = product.name(locale).to_string();
    let description = product.card_description(locale).to_string();
    let image_url = product.primary_image().map(|img| img.url.clone());
    let discount = product.discount_percent();
    let price = format_price(product.price_after, &currency);
    let price_before = discount
        .and(product.price_before)
        .map(|before| format_price(before, &currency));
    let in_stock = product.in_stock();

    let wished = {
        let sku = sku.clone();
        move || store.is_wishlisted(&sku)
    };
    let toggle_wish = move |_| {
        store.toggle_wishlist(&sku);
    };

    view! {
        <div class="product-card" dir=locale.dir()>
            <Card>
                <div class="product-card__media">
                    {match image_url {
                        Some(url) => {
                            view! { <img class="product-card__image" src=url alt=name.clone() loading="lazy" /> }
                                .into_any()
                        }
                        None => view! { <div class="product-card__placeholder"></div> }.into_any(),
                    }}
                    {discount.map(|d| view! { <span class="product-card__badge">{format!("-{}%", d)}</span> })}
                    <button
                        class="product-card__wish"
                        class:active=wished
                        title=t(Label::Wishlist, locale)
                        on:click=toggle_wish
                    >
                        "♥"
                    </button>
                </div>

                <h3 class="product-card__name">{name.clone()}</h3>
                <p class="product-card__description">{description}</p>

                <div class="product-card__prices">
                    <span class="product-card__price">{price}</span>
                    {price_before.map(|p| view! { <s class="product-card__price-before">{p}</s> })}
                </div>

                {if in_stock {
                    view! {
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| store.add_to_cart(1)
                        >
                            {t(Label::AddToCart, locale)}
                        </Button>
                    }
                        .into_any()
                } else {
                    view! { <span class="product-card__out">{t(Label::OutOfStock, locale)}</span> }.into_any()
                }}
            </Card>
        </div>
    }
}
