use crate::domain::a002_product::ui::ProductGrid;
use crate::shared::i18n::{t, Label};
use contracts::domain::a003_category::Category;
use contracts::domain::common::AggregateId;
use contracts::enums::Locale;
use leptos::prelude::*;

/// Home page section of one category.
///
/// Expects a category from the render plan: visible, products ranked.
#[component]
pub fn CategorySection(category: Category, locale: Locale, row_len: usize) -> impl IntoView {
    let href = format!("/category/{}", category.id.as_string());
    let title = category.name(locale).to_string();

    view! {
        <section class="category-section">
            <div class="category-section__header">
                <h2>{title}</h2>
                <a href=href>{t(Label::ViewAll, locale)}</a>
            </div>
            <ProductGrid products=category.products locale=locale row_len=row_len />
        </section>
    }
}
