use contracts::domain::a001_product::Product;
use contracts::shared::format::format_money;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::use_store;
use crate::shared::browser;

/// Карточка товара в сетке каталога
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let ctx = use_store();
    let id = StoredValue::new(product.id.clone());

    let is_flashed = move || ctx.flashed.with(|f| f.as_ref() == Some(&id.get_value()));

    let on_view = move |_| {
        ctx.dispatch(|s| s.open_product(&id.get_value()));
    };

    let on_add = move |_| {
        let result = ctx.dispatch(|s| s.add_to_cart(&id.get_value(), 1, true));
        if let Some(Err(e)) = result {
            browser::alert(&e.to_string());
        }
    };

    let alt = format!("{} thumbnail", product.title);

    view! {
        <article class="card">
            <div class="thumb">
                <img src=product.cover_image().to_string() alt=alt loading="lazy" />
            </div>
            <h3>{product.title.clone()}</h3>
            <p class="short">{product.short_description.clone()}</p>
            <div class="meta">
                <span class="price">{format_money(product.price)}</span>
            </div>
            <div class="card-actions">
                <Button appearance=ButtonAppearance::Secondary on_click=on_view>
                    "Ver producto"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=on_add>
                    {move || if is_flashed() { "Agregado ✓" } else { "Agregar al carrito" }}
                </Button>
            </div>
        </article>
    }
}

/// Сетка карточек текущего экрана
#[component]
pub fn ProductGrid(products: Vec<Product>) -> impl IntoView {
    if products.is_empty() {
        return view! {
            <p class="catalog-empty">"No se encontraron productos."</p>
        }
        .into_any();
    }

    view! {
        <section id="catalog" class="catalog-grid">
            {products
                .into_iter()
                .map(|product| view! { <ProductCard product=product /> })
                .collect_view()}
        </section>
    }
    .into_any()
}
