use contracts::shared::format::format_money;
use contracts::usecases::u502_product_detail::OpenProduct;
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::use_store;
use crate::shared::browser;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;

/// Модальная карточка открытого товара: карусель, описание, количество
#[component]
pub fn ProductDetailModal() -> impl IntoView {
    let ctx = use_store();

    let is_open = move || ctx.with(|s| s.detail().is_open());

    let close = Callback::new(move |_: ()| {
        ctx.dispatch(|s| s.close_product());
    });

    view! {
        <Show when=is_open>
            <ModalFrame on_close=close label="Detalle del producto" modal_class="product-modal">
                <ProductDetailBody on_close=close />
            </ModalFrame>
        </Show>
    }
}

#[component]
fn ProductDetailBody(on_close: Callback<()>) -> impl IntoView {
    let ctx = use_store();

    let field = move |f: fn(&OpenProduct) -> String| {
        move || ctx.with(|s| s.detail().current().map(f).unwrap_or_default())
    };

    let title = field(|open| open.product.title.clone());
    let price = field(|open| format_money(open.product.price));
    let short = field(|open| open.product.short_description.clone());
    let long = field(|open| open.product.long_description.clone());
    let image = field(|open| open.current_image().to_string());
    let image_alt = field(|open| format!("{} imagen", open.product.title));
    let quantity = field(|open| open.quantity.to_string());
    let max_qty = move || {
        ctx.with(|s| {
            s.detail()
                .current()
                .and_then(|open| open.product.stock)
                .map(|stock| stock.to_string())
        })
    };
    let has_many_images = move || {
        ctx.with(|s| {
            s.detail()
                .current()
                .is_some_and(|open| open.product.images.len() > 1)
        })
    };
    let specs = move || {
        ctx.with(|s| {
            s.detail()
                .current()
                .map(|open| open.product.specs())
                .unwrap_or_default()
        })
    };

    let on_qty_change = move |ev: ev::Event| {
        let qty = event_target_value(&ev).trim().parse::<u32>().unwrap_or(1);
        ctx.dispatch(|s| s.set_detail_quantity(qty));
    };

    let on_add = move |_| {
        if let Some(Err(e)) = ctx.dispatch(|s| s.add_from_detail()) {
            browser::alert(&e.to_string());
        }
    };

    view! {
        <div class="product-modal__header">
            <h2 class="product-modal__title">{title}</h2>
            <button
                class="button button--ghost"
                title="Cerrar"
                aria-label="Cerrar"
                autofocus=true
                on:click=move |_| on_close.run(())
            >
                {icon("x")}
            </button>
        </div>

        <div class="product-modal__body">
            <div class="img-viewer">
                <Show when=has_many_images>
                    <button
                        class="img-nav img-nav--prev"
                        aria-label="Imagen anterior"
                        on:click=move |_| {
                            ctx.dispatch(|s| s.prev_image());
                        }
                    >
                        {icon("chevron-left")}
                    </button>
                </Show>
                <img src=image alt=image_alt />
                <Show when=has_many_images>
                    <button
                        class="img-nav img-nav--next"
                        aria-label="Imagen siguiente"
                        on:click=move |_| {
                            ctx.dispatch(|s| s.next_image());
                        }
                    >
                        {icon("chevron-right")}
                    </button>
                </Show>
            </div>

            <div class="product-info">
                <div class="price">{price}</div>
                <p class="short">{short}</p>
                <p class="long">{long}</p>
                <div class="specs">
                    {move || {
                        specs()
                            .into_iter()
                            .map(|(label, value)| {
                                view! {
                                    <div>
                                        <strong>{format!("{label}:")}</strong>
                                        " "
                                        {value}
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>

                <div class="product-actions">
                    <label class="qty-label">
                        "Cantidad"
                        <input
                            class="qty-input"
                            type="number"
                            min="1"
                            max=max_qty
                            prop:value=quantity
                            on:change=on_qty_change
                        />
                    </label>
                    <Button appearance=ButtonAppearance::Primary on_click=on_add>
                        "Agregar al carrito"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        "Cerrar"
                    </Button>
                </div>
            </div>
        </div>
    }
}
