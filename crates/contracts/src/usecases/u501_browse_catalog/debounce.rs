/// Склейка быстрых нажатий в поле поиска: выполняется только последний ввод.
///
/// UI вызывает [`Debouncer::schedule`] на каждый `input`, заводит таймер и по его
/// срабатыванию вызывает [`Debouncer::fire`] с полученным билетом. Устаревшие
/// билеты ничего не возвращают.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Debouncer {
    generation: u64,
    pending: Option<String>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Запомнить ввод, вытеснив предыдущий. Возвращает билет таймера.
    pub fn schedule(&mut self, input: impl Into<String>) -> u64 {
        self.generation += 1;
        self.pending = Some(input.into());
        self.generation
    }

    /// Таймер истёк: отдать ввод, если после него ничего не вводили
    pub fn fire(&mut self, ticket: u64) -> Option<String> {
        if ticket == self.generation {
            self.pending.take()
        } else {
            None
        }
    }

    /// Немедленный поиск (Enter, кнопка): ожидающий ввод отменяется
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
