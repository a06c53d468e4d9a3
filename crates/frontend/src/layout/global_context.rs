use contracts::domain::a001_product::ProductId;
use contracts::shared::config::StoreConfig;
use contracts::storefront::{StoreEvent, Storefront};
use contracts::usecases::u502_product_detail::product_fragment;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::browser;
use crate::shared::storage::LocalStorage;

pub type Store = Storefront<LocalStorage>;

/// Состояние загрузки каталога
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

/// Контекст витрины: единственный `Storefront` плюс чисто визуальное состояние
#[derive(Clone, Copy)]
pub struct StoreContext {
    pub store: RwSignal<Store>,
    pub load_state: RwSignal<LoadState>,
    pub cart_open: RwSignal<bool>,
    /// Товар, на кнопке которого сейчас написано "Agregado ✓"
    pub flashed: RwSignal<Option<ProductId>>,
    flash_seq: StoredValue<u64>,
    pub order_note: RwSignal<String>,
}

impl StoreContext {
    pub fn new() -> Self {
        Self {
            store: RwSignal::new(Storefront::new(StoreConfig::default(), LocalStorage)),
            load_state: RwSignal::new(LoadState::Loading),
            cart_open: RwSignal::new(false),
            flashed: RwSignal::new(None),
            flash_seq: StoredValue::new(0),
            order_note: RwSignal::new(String::new()),
        }
    }

    /// Пересоздать витрину с конфигом из `config.toml` (до загрузки каталога)
    pub fn reconfigure(&self, config: StoreConfig) {
        self.store.set(Storefront::new(config, LocalStorage));
    }

    /// Прочитать состояние (с подпиской на изменения)
    pub fn with<R>(&self, f: impl FnOnce(&Store) -> R) -> R {
        self.store.with(f)
    }

    pub fn config(&self) -> StoreConfig {
        self.store.with_untracked(|s| s.config().clone())
    }

    /// Выполнить действие над витриной и отработать опубликованные события
    pub fn dispatch<R>(&self, action: impl FnOnce(&mut Store) -> R) -> Option<R> {
        let result = self.store.try_update(action);
        let events = self
            .store
            .try_update_untracked(|s| s.take_events())
            .unwrap_or_default();
        for event in events {
            self.apply(event);
        }
        result
    }

    fn apply(&self, event: StoreEvent) {
        match event {
            StoreEvent::CatalogLoaded { source, count } => {
                log::debug!("catalog ready: {} products from {}", count, source.as_str());
            }
            StoreEvent::CartChanged { total } => {
                log::debug!("cart changed, {} items", total);
            }
            StoreEvent::ItemAdded { id } => self.flash_added(id),
            StoreEvent::ScreenChanged => browser::scroll_to_top(),
            StoreEvent::DetailOpened {
                id,
                publish_fragment,
            } => {
                if publish_fragment {
                    browser::push_address(&product_fragment(&id));
                }
            }
            StoreEvent::DetailClosed { restore_address } => {
                if restore_address {
                    browser::push_address(&browser::base_address());
                }
            }
        }
    }

    fn flash_added(&self, id: ProductId) {
        let flashed = self.flashed;
        let flash_seq = self.flash_seq;
        let delay = self.config().added_feedback_ms;
        let seq = flash_seq.try_update_value(|n| {
            *n += 1;
            *n
        });
        flashed.set(Some(id));
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            // Новое добавление за это время перезапускает подсказку
            if flash_seq.try_get_value() == seq {
                flashed.set(None);
            }
        });
    }
}

impl Default for StoreContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the storefront context
pub fn use_store() -> StoreContext {
    use_context::<StoreContext>().expect("StoreContext not provided in app root")
}
