/// Очередь доменных событий (outbox).
///
/// Агрегаты и `Storefront` публикуют события синхронно, UI-слой забирает их
/// через [`EventStore::drain`] после каждого действия пользователя и выполняет
/// побочные эффекты (перерисовка, history, таймеры).
#[derive(Debug, Clone, PartialEq)]
pub struct EventStore<E> {
    pending: Vec<E>,
}

impl<E> Default for EventStore<E> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<E> EventStore<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&mut self, event: E) {
        self.pending.push(event);
    }

    /// Забрать все накопленные события в порядке публикации
    pub fn drain(&mut self) -> Vec<E> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_returns_events_in_order_and_empties() {
        let mut store = EventStore::new();
        store.publish("a");
        store.publish("b");
        assert_eq!(store.drain(), vec!["a", "b"]);
        assert!(store.drain().is_empty());

        store.publish("c");
        assert_eq!(store.drain(), vec!["c"]);
    }
}
