use contracts::domain::a002_cart::CartStorage;
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Cart slot in `localStorage`. Every call re-resolves the storage object,
/// so the type carries no JS handles and can live inside a signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl CartStorage for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = get_local_storage() {
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("No se pudo guardar el carrito: {:?}", e);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}
