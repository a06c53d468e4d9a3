use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a001_product::api::{fetch_catalog, fetch_config};
use crate::domain::a001_product::ui::ProductDetailModal;
use crate::domain::a002_cart::ui::CartModal;
use crate::layout::global_context::{LoadState, StoreContext};
use crate::layout::Shell;
use crate::shared::browser;
use crate::usecases::u501_browse_catalog::CatalogArea;

#[component]
pub fn App() -> impl IntoView {
    // Provide the storefront context to the whole app.
    let ctx = StoreContext::new();
    provide_context(ctx);

    // Конфиг -> каталог -> якорь адреса. Корзина очищается при создании витрины.
    spawn_local(async move {
        let config = fetch_config().await;
        ctx.reconfigure(config.clone());

        match fetch_catalog(&config).await {
            Ok((catalog, source)) => {
                ctx.dispatch(|s| {
                    s.load_catalog(catalog, source);
                    s.sync_with_fragment(&browser::current_fragment());
                });
                ctx.load_state.set(LoadState::Ready);
            }
            Err(e) => ctx.load_state.set(LoadState::Failed(e.to_string())),
        }
    });

    browser::on_window_event("hashchange", move |_| {
        ctx.dispatch(|s| s.sync_with_fragment(&browser::current_fragment()));
    });

    browser::on_window_event("keydown", move |ev| {
        let is_escape = ev
            .dyn_ref::<web_sys::KeyboardEvent>()
            .is_some_and(|ev| ev.key() == "Escape");
        if is_escape {
            ctx.dispatch(|s| s.close_product());
            ctx.cart_open.set(false);
        }
    });

    view! {
        <Shell
            content=|| view! { <CatalogArea /> }.into_any()
            overlays=|| {
                view! {
                    <ProductDetailModal />
                    <CartModal />
                }
                .into_any()
            }
        />
    }
}
