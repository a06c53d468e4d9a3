pub mod aggregate;
pub mod catalog;
pub mod excel;

pub use aggregate::{Product, ProductId, PLACEHOLDER_IMAGE};
pub use catalog::{cache_busted, Catalog, CatalogSource, LoadError};
pub use excel::{FieldRule, ProductField, SheetRow, FIELD_RULES};
