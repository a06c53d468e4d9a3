use crate::layout::global_context::use_store;
use crate::shared::icons::icon;
use crate::shared::search_input::SearchInput;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_store();
    let delay_ms = Signal::derive(move || ctx.with(|s| s.config().search_debounce_ms));

    let cart_count = move || ctx.with(|s| s.cart().total());
    let show_back = move || ctx.with(|s| !s.navigator().is_home());

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"Nuestro Catálogo"</span>
                <SearchInput
                    delay_ms=delay_ms
                    on_search=move |query: String| {
                        ctx.dispatch(|s| s.search(&query));
                    }
                />
            </div>
            <div class="header__actions">
                <Show when=show_back>
                    <button
                        class="button button--ghost"
                        on:click=move |_| {
                            ctx.dispatch(|s| s.back());
                        }
                    >
                        {icon("arrow-left")}
                        " Volver a categorías"
                    </button>
                </Show>
                <button
                    class="button button--primary header__cart"
                    aria-label="Abrir carrito"
                    on:click=move |_| ctx.cart_open.set(true)
                >
                    {icon("cart")}
                    <span class="badge badge--primary" aria-live="polite">{cart_count}</span>
                </button>
            </div>
        </header>
    }
}
