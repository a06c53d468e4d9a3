use contracts::usecases::u501_browse_catalog::Debouncer;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::icons::icon;

/// Поле поиска с debounce: ввод склеивается по `delay_ms`, Enter и кнопка ищут сразу
#[component]
pub fn SearchInput(
    /// Callback с текстом запроса
    #[prop(into)]
    on_search: Callback<String>,
    /// Пауза после последнего нажатия, мс
    #[prop(into)]
    delay_ms: Signal<u32>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar productos...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(String::new());
    let debouncer = StoredValue::new(Debouncer::new());

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let ticket = debouncer
            .try_update_value(|d| d.schedule(new_value))
            .unwrap_or_default();
        let delay = delay_ms.get_untracked();
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            if let Some(query) = debouncer.try_update_value(|d| d.fire(ticket)).flatten() {
                on_search.run(query);
            }
        });
    };

    let search_now = move || {
        debouncer.update_value(|d| d.cancel());
        on_search.run(input_value.get_untracked());
    };

    let clear = move |_| {
        set_input_value.set(String::new());
        search_now();
    };

    view! {
        <div class="search" role="search">
            <input
                type="search"
                class="search__input"
                aria-label="Buscar productos"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        search_now();
                    }
                }
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search__clear" title="Limpiar" on:click=clear>
                    {icon("x")}
                </button>
            </Show>
            <Button appearance=ButtonAppearance::Primary on_click=move |_| search_now()>
                {icon("search")}
            </Button>
        </div>
    }
}
