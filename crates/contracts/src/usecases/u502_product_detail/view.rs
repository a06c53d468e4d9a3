use crate::domain::a001_product::{Catalog, Product};

/// Открытая карточка товара
#[derive(Debug, Clone, PartialEq)]
pub struct OpenProduct {
    pub product: Product,
    pub image_index: usize,
    /// Значение поля количества в карточке
    pub quantity: u32,
}

impl OpenProduct {
    pub fn current_image(&self) -> &str {
        self.product
            .images
            .get(self.image_index)
            .map(String::as_str)
            .unwrap_or_else(|| self.product.cover_image())
    }
}

/// Карточка товара с каруселью картинок
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailView {
    open: Option<OpenProduct>,
}

impl DetailView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Открыть товар. Неизвестный id ничего не меняет и возвращает `false`.
    /// `in_cart` — сколько уже лежит в корзине (им заполняется поле количества).
    pub fn open(&mut self, catalog: &Catalog, id: &str, in_cart: Option<u32>) -> bool {
        let Some(product) = catalog.get(id) else {
            return false;
        };
        self.open = Some(OpenProduct {
            product: product.clone(),
            image_index: 0,
            quantity: in_cart.unwrap_or(1),
        });
        true
    }

    /// Закрыть карточку. Возвращает `true`, если она была открыта.
    pub fn close(&mut self) -> bool {
        self.open.take().is_some()
    }

    pub fn current(&self) -> Option<&OpenProduct> {
        self.open.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn next_image(&mut self) {
        if let Some(open) = self.open.as_mut() {
            let len = open.product.images.len().max(1);
            open.image_index = (open.image_index + 1) % len;
        }
    }

    pub fn prev_image(&mut self) {
        if let Some(open) = self.open.as_mut() {
            let len = open.product.images.len().max(1);
            open.image_index = (open.image_index + len - 1) % len;
        }
    }

    /// Поле количества: нечисловое или нулевое значение превращается в 1
    pub fn set_quantity(&mut self, qty: u32) {
        if let Some(open) = self.open.as_mut() {
            open.quantity = qty.max(1);
        }
    }
}
