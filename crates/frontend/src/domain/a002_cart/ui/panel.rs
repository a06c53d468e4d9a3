use contracts::domain::a001_product::ProductId;
use contracts::shared::format::format_money;
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::use_store;
use crate::shared::browser;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::usecases::u503_checkout::CheckoutForm;

/// Строка корзины, снятая с `Storefront` для отрисовки
#[derive(Debug, Clone, PartialEq)]
struct LineRow {
    id: ProductId,
    title: String,
    image: String,
    price: f64,
    qty: u32,
    line_total: f64,
}

/// Модальное окно корзины
#[component]
pub fn CartModal() -> impl IntoView {
    let ctx = use_store();

    let close = Callback::new(move |_: ()| ctx.cart_open.set(false));

    view! {
        <Show when=move || ctx.cart_open.get()>
            <ModalFrame on_close=close label="Carrito" modal_class="cart-modal">
                <div class="cart-modal__header">
                    <h2>"Tu carrito"</h2>
                    <button
                        class="button button--ghost"
                        title="Cerrar"
                        aria-label="Cerrar carrito"
                        autofocus=true
                        on:click=move |_| close.run(())
                    >
                        {icon("x")}
                    </button>
                </div>
                <CartItems />
                <CartTotals />
                <CheckoutForm />
            </ModalFrame>
        </Show>
    }
}

#[component]
fn CartItems() -> impl IntoView {
    let ctx = use_store();

    let rows = move || {
        ctx.with(|s| {
            s.cart()
                .lines(s.catalog())
                .into_iter()
                .map(|line| LineRow {
                    id: line.product.id.clone(),
                    title: line.product.title.clone(),
                    image: line.product.cover_image().to_string(),
                    price: line.product.price,
                    qty: line.qty,
                    line_total: line.line_total(),
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div id="cart-items" class="cart-items">
            {move || {
                let rows = rows();
                if rows.is_empty() {
                    return view! { <p>"Tu carrito está vacío."</p> }.into_any();
                }
                rows.into_iter()
                    .map(|row| view! { <CartItemRow row=row /> })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}

#[component]
fn CartItemRow(row: LineRow) -> impl IntoView {
    let ctx = use_store();
    let id = StoredValue::new(row.id.clone());

    let on_qty_change = move |ev: ev::Event| {
        let raw = event_target_value(&ev);
        // Пустое или нечисловое поле удаляет позицию, как и 0
        let qty = raw.trim().parse::<f64>().map(|v| v.trunc() as i64).unwrap_or(0);
        if let Some(Err(e)) = ctx.dispatch(|s| s.set_quantity(&id.get_value(), qty)) {
            browser::alert(&e.to_string());
        }
    };

    let on_remove = move |_| {
        ctx.dispatch(|s| s.remove_from_cart(&id.get_value()));
    };

    view! {
        <div class="cart-item">
            <div class="mini">
                <img src=row.image alt=row.title.clone() />
            </div>
            <div class="meta">
                <h4>{row.title.clone()}</h4>
                <small>
                    {format!("{} x {} = ", format_money(row.price), row.qty)}
                    <strong>{format_money(row.line_total)}</strong>
                </small>
            </div>
            <div class="controls">
                <input
                    class="qty-input"
                    type="number"
                    min="1"
                    prop:value=row.qty.to_string()
                    on:change=on_qty_change
                />
                <button class="button button--ghost" title="Eliminar" on:click=on_remove>
                    {icon("trash")}
                    " Eliminar"
                </button>
            </div>
        </div>
    }
}

#[component]
fn CartTotals() -> impl IntoView {
    let ctx = use_store();

    let totals = move || ctx.with(|s| s.cart().totals(s.catalog()));
    let is_empty = move || ctx.with(|s| s.cart().is_empty());

    let clear = move |_| {
        ctx.dispatch(|s| s.clear_cart(|| browser::confirm("¿Vaciar el carrito?")));
    };

    view! {
        <div class="cart-summary">
            <div class="cart-summary__row">
                <span>"Subtotal"</span>
                <span id="subtotal">{move || format_money(totals().subtotal)}</span>
            </div>
            <div class="cart-summary__row">
                <span>"Impuestos"</span>
                <span id="taxes">{move || format_money(totals().taxes)}</span>
            </div>
            <div class="cart-summary__row cart-summary__row--total">
                <span>"Total"</span>
                <span id="cart-total">{move || format_money(totals().total)}</span>
            </div>
            <Button
                appearance=ButtonAppearance::Subtle
                disabled=Signal::derive(is_empty)
                on_click=clear
            >
                {icon("trash")}
                " Vaciar carrito"
            </Button>
        </div>
    }
}
