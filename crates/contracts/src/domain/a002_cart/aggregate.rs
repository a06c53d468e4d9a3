use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::storage::CartStorage;
use crate::domain::a001_product::{Catalog, Product, ProductId};

/// Ошибки изменения корзины (текст показывается пользователю как есть)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("Producto no encontrado.")]
    UnknownProduct(ProductId),

    #[error("No hay suficiente stock. Disponible: {available}")]
    InsufficientStock { id: ProductId, available: u32 },
}

/// Позиция корзины. `qty` всегда >= 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    pub id: ProductId,
    pub qty: u32,
}

/// Позиция корзины, для которой нашёлся товар в каталоге
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartLine<'a> {
    pub product: &'a Product,
    pub qty: u32,
}

impl CartLine<'_> {
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.qty)
    }
}

/// Итоги корзины. Налоги пока всегда 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub subtotal: f64,
    pub taxes: f64,
    pub total: f64,
}

/// Корзина: product id -> количество, с записью в хранилище после каждого изменения.
///
/// Позиции хранятся в порядке первого добавления. Позиции, чей товар пропал из
/// каталога, не удаляются, но и не участвуют в суммах.
#[derive(Debug)]
pub struct Cart<S> {
    entries: Vec<CartEntry>,
    storage: S,
    key: String,
}

impl<S: CartStorage> Cart<S> {
    /// Открывает корзину. Слот очищается при каждом старте приложения,
    /// так что корзина всегда начинается пустой.
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        storage.remove(&key);
        let entries = restore(&storage, &key);
        Self {
            entries,
            storage,
            key,
        }
    }

    /// Добавляет `qty` штук к уже лежащим в корзине. Возвращает новое количество.
    pub fn add(&mut self, catalog: &Catalog, id: &ProductId, qty: u32) -> Result<u32, CartError> {
        let product = catalog
            .get(id.as_str())
            .ok_or_else(|| CartError::UnknownProduct(id.clone()))?;
        let current = self.quantity_of(id).unwrap_or(0);
        if qty == 0 {
            return Ok(current);
        }
        let new_qty = current.saturating_add(qty);
        check_stock(product, new_qty)?;

        match self.entries.iter_mut().find(|e| &e.id == id) {
            Some(entry) => entry.qty = new_qty,
            None => self.entries.push(CartEntry {
                id: id.clone(),
                qty: new_qty,
            }),
        }
        self.persist();
        Ok(new_qty)
    }

    /// Заменяет количество. `qty <= 0` удаляет позицию. Возвращает `None`, если позиция удалена.
    pub fn set_quantity(
        &mut self,
        catalog: &Catalog,
        id: &ProductId,
        qty: i64,
    ) -> Result<Option<u32>, CartError> {
        if qty <= 0 {
            self.remove(id);
            return Ok(None);
        }
        let product = catalog
            .get(id.as_str())
            .ok_or_else(|| CartError::UnknownProduct(id.clone()))?;
        let qty = u32::try_from(qty).unwrap_or(u32::MAX);
        check_stock(product, qty)?;

        match self.entries.iter_mut().find(|e| &e.id == id) {
            Some(entry) => entry.qty = qty,
            None => self.entries.push(CartEntry { id: id.clone(), qty }),
        }
        self.persist();
        Ok(Some(qty))
    }

    /// Удаляет позицию. Возвращает `true`, если она была.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| &e.id != id);
        self.persist();
        before != self.entries.len()
    }

    /// Очищает корзину, если пользователь подтвердил
    pub fn clear(&mut self, confirm: impl FnOnce() -> bool) -> bool {
        if !confirm() {
            return false;
        }
        self.entries.clear();
        self.persist();
        true
    }

    pub fn quantity_of(&self, id: &ProductId) -> Option<u32> {
        self.entries.iter().find(|e| &e.id == id).map(|e| e.qty)
    }

    /// Количество штук для бейджа
    pub fn total(&self) -> u32 {
        self.entries
            .iter()
            .fold(0u32, |sum, e| sum.saturating_add(e.qty))
    }

    pub fn subtotal(&self, catalog: &Catalog) -> f64 {
        self.lines(catalog).iter().map(CartLine::line_total).sum()
    }

    pub fn totals(&self, catalog: &Catalog) -> Totals {
        let subtotal = self.subtotal(catalog);
        let taxes = 0.0;
        Totals {
            subtotal,
            taxes,
            total: subtotal + taxes,
        }
    }

    /// Позиции с товарами из каталога, в порядке корзины (сироты пропускаются)
    pub fn lines<'a>(&self, catalog: &'a Catalog) -> Vec<CartLine<'a>> {
        self.entries
            .iter()
            .filter_map(|entry| {
                catalog.get(entry.id.as_str()).map(|product| CartLine {
                    product,
                    qty: entry.qty,
                })
            })
            .collect()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&self) {
        let blob: serde_json::Map<String, serde_json::Value> = self
            .entries
            .iter()
            .filter_map(|entry| {
                serde_json::to_value(entry)
                    .ok()
                    .map(|value| (entry.id.to_string(), value))
            })
            .collect();
        self.storage
            .write(&self.key, &serde_json::Value::Object(blob).to_string());
    }
}

fn check_stock(product: &Product, qty: u32) -> Result<(), CartError> {
    match product.stock {
        Some(available) if qty > available => Err(CartError::InsufficientStock {
            id: product.id.clone(),
            available,
        }),
        _ => Ok(()),
    }
}

/// Читает слот; битые данные и нулевые количества отбрасываются
fn restore<S: CartStorage>(storage: &S, key: &str) -> Vec<CartEntry> {
    let Some(raw) = storage.read(key) else {
        return Vec::new();
    };
    match serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(&raw) {
        Ok(map) => map
            .into_values()
            .filter_map(|value| serde_json::from_value::<CartEntry>(value).ok())
            .filter(|entry| entry.qty > 0)
            .collect(),
        Err(e) => {
            log::warn!("Carrito guardado ilegible, se descarta: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_cart::MemoryStorage;

    const KEY: &str = "nc_cart";

    fn catalog() -> Catalog {
        let mut limited = Product::new("a", "Mate", 100.0);
        limited.stock = Some(3);
        Catalog::new(vec![limited, Product::new("b", "Termo", 50.0)])
    }

    fn cart() -> Cart<MemoryStorage> {
        Cart::open(MemoryStorage::new(), KEY)
    }

    fn id(s: &str) -> ProductId {
        ProductId::from(s)
    }

    #[test]
    fn test_open_wipes_previous_slot() {
        let storage = MemoryStorage::with_slot(KEY, r#"{"a":{"id":"a","qty":2}}"#);
        let cart = Cart::open(storage, KEY);
        assert!(cart.is_empty());
        assert_eq!(cart.storage().read(KEY), None);
    }

    #[test]
    fn test_restore_reads_slot_and_drops_zero_entries() {
        let storage = MemoryStorage::with_slot(
            KEY,
            r#"{"a":{"id":"a","qty":2},"b":{"id":"b","qty":0}}"#,
        );
        let entries = restore(&storage, KEY);
        assert_eq!(entries, vec![CartEntry { id: id("a"), qty: 2 }]);

        let broken = MemoryStorage::with_slot(KEY, "][");
        assert!(restore(&broken, KEY).is_empty());
    }

    #[test]
    fn test_add_merges_and_persists() {
        let catalog = catalog();
        let mut cart = cart();
        assert_eq!(cart.add(&catalog, &id("a"), 1), Ok(1));
        assert_eq!(cart.add(&catalog, &id("a"), 2), Ok(3));
        assert_eq!(cart.quantity_of(&id("a")), Some(3));

        let saved: serde_json::Value =
            serde_json::from_str(&cart.storage().read(KEY).unwrap()).unwrap();
        assert_eq!(saved["a"]["qty"], 3);
        assert_eq!(saved["a"]["id"], "a");
    }

    #[test]
    fn test_add_over_stock_is_rejected_without_mutation() {
        let catalog = catalog();
        let mut cart = cart();
        cart.add(&catalog, &id("a"), 2).unwrap();
        let err = cart.add(&catalog, &id("a"), 2).unwrap_err();
        assert_eq!(
            err,
            CartError::InsufficientStock {
                id: id("a"),
                available: 3
            }
        );
        assert_eq!(err.to_string(), "No hay suficiente stock. Disponible: 3");
        assert_eq!(cart.quantity_of(&id("a")), Some(2));
    }

    #[test]
    fn test_add_unknown_product() {
        let catalog = catalog();
        let mut cart = cart();
        let err = cart.add(&catalog, &id("nope"), 1).unwrap_err();
        assert_eq!(err.to_string(), "Producto no encontrado.");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_zero_does_not_create_entry() {
        let catalog = catalog();
        let mut cart = cart();
        assert_eq!(cart.add(&catalog, &id("b"), 0), Ok(0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_replaces_and_checks_stock() {
        let catalog = catalog();
        let mut cart = cart();
        cart.add(&catalog, &id("a"), 2).unwrap();
        assert_eq!(cart.set_quantity(&catalog, &id("a"), 1), Ok(Some(1)));
        assert!(cart.set_quantity(&catalog, &id("a"), 4).is_err());
        assert_eq!(cart.quantity_of(&id("a")), Some(1));
        assert_eq!(cart.set_quantity(&catalog, &id("b"), 10), Ok(Some(10)));
    }

    #[test]
    fn test_set_quantity_zero_or_negative_removes() {
        let catalog = catalog();
        for qty in [0, -1, -50] {
            let mut cart = cart();
            cart.add(&catalog, &id("a"), 1).unwrap();
            cart.add(&catalog, &id("b"), 1).unwrap();
            assert_eq!(cart.set_quantity(&catalog, &id("a"), qty), Ok(None));
            assert_eq!(cart.quantity_of(&id("a")), None);
            assert_eq!(cart.entries().len(), 1);
        }
    }

    #[test]
    fn test_subtotal_skips_orphans() {
        let catalog = catalog();
        let mut cart = cart();
        cart.add(&catalog, &id("a"), 2).unwrap();
        cart.add(&catalog, &id("b"), 1).unwrap();
        assert_eq!(cart.subtotal(&catalog), 250.0);
        assert_eq!(cart.total(), 3);

        // "a" пропал из каталога после перезагрузки файла
        let shrunk = Catalog::new(vec![Product::new("b", "Termo", 50.0)]);
        assert_eq!(cart.subtotal(&shrunk), 50.0);
        assert_eq!(cart.lines(&shrunk).len(), 1);
        assert_eq!(cart.entries().len(), 2);
        assert_eq!(cart.total(), 3);
    }

    #[test]
    fn test_totals_have_zero_taxes() {
        let catalog = catalog();
        let mut cart = cart();
        cart.add(&catalog, &id("b"), 3).unwrap();
        let totals = cart.totals(&catalog);
        assert_eq!(totals.subtotal, 150.0);
        assert_eq!(totals.taxes, 0.0);
        assert_eq!(totals.total, 150.0);
    }

    #[test]
    fn test_clear_requires_confirmation() {
        let catalog = catalog();
        let mut cart = cart();
        cart.add(&catalog, &id("b"), 1).unwrap();
        assert!(!cart.clear(|| false));
        assert_eq!(cart.total(), 1);
        assert!(cart.clear(|| true));
        assert!(cart.is_empty());
        assert_eq!(cart.storage().read(KEY).as_deref(), Some("{}"));
    }

    #[test]
    fn test_remove_is_unconditional() {
        let catalog = catalog();
        let mut cart = cart();
        cart.add(&catalog, &id("b"), 1).unwrap();
        assert!(cart.remove(&id("b")));
        assert!(!cart.remove(&id("b")));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let catalog = catalog();
        let mut cart = cart();
        cart.add(&catalog, &id("b"), 1).unwrap();
        cart.add(&catalog, &id("a"), 1).unwrap();
        cart.add(&catalog, &id("b"), 1).unwrap();
        let order: Vec<&str> = cart
            .lines(&catalog)
            .iter()
            .map(|l| l.product.id.as_str())
            .collect();
        assert_eq!(order, vec!["b", "a"]);
    }
}
