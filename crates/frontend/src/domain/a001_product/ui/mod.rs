pub mod card;
pub mod details;

pub use card::{ProductCard, ProductGrid};
pub use details::ProductDetailModal;
