pub mod debounce;
pub mod navigator;

pub use debounce::Debouncer;
pub use navigator::{
    categories, display_name, search_products, subcategories_of, subcategory_cover, CategoryCard,
    GridOrigin, Navigator, Screen,
};
