pub mod aggregate;
pub mod storage;

pub use aggregate::{Cart, CartEntry, CartError, CartLine, Totals};
pub use storage::{CartStorage, MemoryStorage};
