use leptos::prelude::*;
use thaw::*;

use super::delivery::deliver;
use crate::layout::global_context::use_store;
use crate::shared::browser;
use crate::shared::icons::icon;

/// Заметка к заказу и кнопка отправки в WhatsApp
#[component]
pub fn CheckoutForm() -> impl IntoView {
    let ctx = use_store();

    let send = move |_| {
        let note = ctx.order_note.get_untracked();
        let user_agent = browser::user_agent();
        match ctx.store.with_untracked(|s| s.checkout(&note, &user_agent)) {
            Ok(link) => deliver(&link),
            Err(e) => browser::alert(&e.to_string()),
        }
    };

    view! {
        <div class="checkout">
            <label class="checkout__label" for="order-note">"Nota para el pedido (opcional)"</label>
            <Textarea
                attr:id="order-note"
                attr:rows=3
                value=ctx.order_note
                placeholder="Dirección, horario de entrega, aclaraciones..."
            />
            <Button appearance=ButtonAppearance::Primary on_click=send>
                {icon("message")}
                " Enviar pedido por WhatsApp"
            </Button>
        </div>
    }
}
