use super::product_card::ProductCard;
use contracts::domain::a002_product::Product;
use contracts::enums::Locale;
use contracts::shared::placement::rows_in_reading_order;
use leptos::prelude::*;

/// Grid of already-ranked products, row by row in reading order.
#[component]
pub fn ProductGrid(products: Vec<Product>, locale: Locale, row_len: usize) -> impl IntoView {
    let rows = rows_in_reading_order(&products, row_len, locale.is_arabic());

    view! {
        <div class="product-grid">
            {rows
                .into_iter()
                .map(|row| {
                    // Rows are laid out left to right; the order is in the data
                    view! {
                        <div class="product-grid__row" dir="ltr">
                            {row
                                .into_iter()
                                .map(|product| view! { <ProductCard product=product locale=locale /> })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
