use std::cell::RefCell;
use std::collections::HashMap;

/// Key-value слот, в который корзина пишет себя после каждого изменения.
///
/// В браузере это `localStorage`, в тестах — [`MemoryStorage`].
pub trait CartStorage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Хранилище в памяти (тесты и браузеры без `localStorage`)
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.write(key, value);
        storage
    }
}

impl CartStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.slots.borrow_mut().remove(key);
    }
}
