//! Состояние всей витрины одним объектом.
//!
//! UI владеет одним `Storefront`, вызывает его методы из обработчиков событий
//! и после каждого вызова забирает [`StoreEvent`]ы через [`Storefront::take_events`].

use crate::domain::a001_product::{Catalog, CatalogSource, ProductId};
use crate::domain::a002_cart::{Cart, CartError, CartStorage};
use crate::domain::common::EventStore;
use crate::shared::config::StoreConfig;
use crate::usecases::u501_browse_catalog::{Navigator, Screen};
use crate::usecases::u502_product_detail::{parse_fragment, DetailView, FragmentTarget};
use crate::usecases::u503_checkout::{checkout, CheckoutError, CheckoutLink};

/// Уведомления для слоя отображения
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    CatalogLoaded {
        source: CatalogSource,
        count: usize,
    },
    /// Корзина изменилась; `total` — новое число штук для бейджа
    CartChanged { total: u32 },
    /// Товар добавлен кнопкой, нужна короткая подсказка на ней
    ItemAdded { id: ProductId },
    ScreenChanged,
    /// `publish_fragment` — нужно записать `#product-<id>` в адрес
    DetailOpened {
        id: ProductId,
        publish_fragment: bool,
    },
    /// `restore_address` — нужно вернуть адрес без якоря
    DetailClosed { restore_address: bool },
}

#[derive(Debug)]
pub struct Storefront<S> {
    config: StoreConfig,
    catalog: Catalog,
    cart: Cart<S>,
    navigator: Navigator,
    detail: DetailView,
    events: EventStore<StoreEvent>,
}

impl<S: CartStorage> Storefront<S> {
    /// Пустая витрина. Сохранённая корзина стирается.
    pub fn new(config: StoreConfig, storage: S) -> Self {
        let cart = Cart::open(storage, config.storage_key.clone());
        Self {
            config,
            catalog: Catalog::default(),
            cart,
            navigator: Navigator::new(),
            detail: DetailView::new(),
            events: EventStore::new(),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart<S> {
        &self.cart
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn screen(&self) -> &Screen {
        self.navigator.screen()
    }

    pub fn detail(&self) -> &DetailView {
        &self.detail
    }

    pub fn take_events(&mut self) -> Vec<StoreEvent> {
        self.events.drain()
    }

    pub fn load_catalog(&mut self, catalog: Catalog, source: CatalogSource) {
        log::info!("Catálogo cargado desde {}: {} productos", source.as_str(), catalog.len());
        self.events.publish(StoreEvent::CatalogLoaded {
            source,
            count: catalog.len(),
        });
        self.catalog = catalog;
        self.navigator = Navigator::new();
        self.events.publish(StoreEvent::ScreenChanged);
    }

    // ------------------------------------------------------------------
    // Корзина
    // ------------------------------------------------------------------

    /// `notify` — добавление кнопкой, UI покажет подтверждение на ней
    pub fn add_to_cart(&mut self, id: &ProductId, qty: u32, notify: bool) -> Result<u32, CartError> {
        let qty = self.cart.add(&self.catalog, id, qty)?;
        self.cart_changed();
        if notify {
            self.events.publish(StoreEvent::ItemAdded { id: id.clone() });
        }
        Ok(qty)
    }

    pub fn set_quantity(&mut self, id: &ProductId, qty: i64) -> Result<Option<u32>, CartError> {
        let result = self.cart.set_quantity(&self.catalog, id, qty)?;
        self.cart_changed();
        Ok(result)
    }

    pub fn remove_from_cart(&mut self, id: &ProductId) {
        self.cart.remove(id);
        self.cart_changed();
    }

    pub fn clear_cart(&mut self, confirm: impl FnOnce() -> bool) -> bool {
        let cleared = self.cart.clear(confirm);
        if cleared {
            self.cart_changed();
        }
        cleared
    }

    fn cart_changed(&mut self) {
        self.events.publish(StoreEvent::CartChanged {
            total: self.cart.total(),
        });
    }

    // ------------------------------------------------------------------
    // Навигация
    // ------------------------------------------------------------------

    pub fn select_category(&mut self, category: &str) {
        self.navigator.select_category(&self.catalog, category);
        self.events.publish(StoreEvent::ScreenChanged);
    }

    pub fn select_subcategory(&mut self, category: &str, subcategory: &str) {
        self.navigator
            .select_subcategory(&self.catalog, category, subcategory);
        self.events.publish(StoreEvent::ScreenChanged);
    }

    pub fn search(&mut self, query: &str) {
        self.navigator.search(&self.catalog, query);
        self.events.publish(StoreEvent::ScreenChanged);
    }

    pub fn back(&mut self) {
        self.navigator.back();
        self.events.publish(StoreEvent::ScreenChanged);
    }

    // ------------------------------------------------------------------
    // Карточка товара
    // ------------------------------------------------------------------

    /// Открыть карточку по действию пользователя (адрес обновит UI)
    pub fn open_product(&mut self, id: &ProductId) -> bool {
        self.open_detail(id, true)
    }

    /// Закрыть карточку по действию пользователя и убрать якорь из адреса
    pub fn close_product(&mut self) {
        if self.detail.close() {
            self.events.publish(StoreEvent::DetailClosed {
                restore_address: true,
            });
        }
    }

    /// Якорь адреса — единственный источник правды об открытой карточке.
    /// Вызывается после загрузки каталога и на каждый `hashchange`.
    pub fn sync_with_fragment(&mut self, fragment: &str) {
        match parse_fragment(fragment) {
            FragmentTarget::Product(id) => {
                let already_open = self
                    .detail
                    .current()
                    .is_some_and(|open| open.product.id == id);
                if !already_open {
                    self.open_detail(&id, false);
                }
            }
            FragmentTarget::None => {
                if self.detail.close() {
                    self.events.publish(StoreEvent::DetailClosed {
                        restore_address: false,
                    });
                }
            }
        }
    }

    fn open_detail(&mut self, id: &ProductId, publish_fragment: bool) -> bool {
        let in_cart = self.cart.quantity_of(id);
        if !self.detail.open(&self.catalog, id.as_str(), in_cart) {
            return false;
        }
        self.events.publish(StoreEvent::DetailOpened {
            id: id.clone(),
            publish_fragment,
        });
        true
    }

    pub fn next_image(&mut self) {
        self.detail.next_image();
    }

    pub fn prev_image(&mut self) {
        self.detail.prev_image();
    }

    pub fn set_detail_quantity(&mut self, qty: u32) {
        self.detail.set_quantity(qty);
    }

    /// Кнопка "Agregar al carrito" в карточке; карточка остаётся открытой
    pub fn add_from_detail(&mut self) -> Result<u32, CartError> {
        let Some((id, qty)) = self
            .detail
            .current()
            .map(|open| (open.product.id.clone(), open.quantity))
        else {
            return Ok(0);
        };
        self.add_to_cart(&id, qty, true)
    }

    // ------------------------------------------------------------------
    // Оформление
    // ------------------------------------------------------------------

    pub fn checkout(&self, note: &str, user_agent: &str) -> Result<CheckoutLink, CheckoutError> {
        checkout(
            &self.catalog,
            &self.cart,
            note,
            &self.config.whatsapp_number,
            user_agent,
        )
    }
}
