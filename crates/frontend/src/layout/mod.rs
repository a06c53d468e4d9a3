pub mod global_context;
pub mod header;

use header::Header;
use leptos::prelude::*;

/// Каркас страницы витрины.
///
/// ```text
/// +------------------------------------------+
/// |  Header (поиск, назад, корзина)           |
/// +------------------------------------------+
/// |  content (категории / подкатегории / сетка)|
/// +------------------------------------------+
/// |  overlays (карточка товара, корзина)      |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C, O>(content: C, overlays: O) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
    O: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main">
                {content()}
            </main>
            {overlays()}
        </div>
    }
}
