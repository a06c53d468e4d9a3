use std::collections::HashSet;

use thiserror::Error;

use super::aggregate::{Product, ProductId};
use super::excel::{products_from_rows, SheetRow};

/// Ошибки загрузки каталога
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    #[error("No se pudo descargar {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("{url} respondió con estado {status}")]
    Status { url: String, status: u16 },

    #[error("Formato inválido en {url}: {reason}")]
    Parse { url: String, reason: String },

    #[error("SheetJS (XLSX) no está disponible")]
    SheetJsMissing,

    #[error("Error cargando productos.")]
    Exhausted,
}

/// Источник, из которого пришёл каталог
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    Spreadsheet,
    Json,
}

impl CatalogSource {
    /// Порядок попыток загрузки
    pub const FALLBACK_ORDER: [CatalogSource; 2] = [CatalogSource::Spreadsheet, CatalogSource::Json];

    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogSource::Spreadsheet => "xlsx",
            CatalogSource::Json => "json",
        }
    }
}

/// URL с параметром против промежуточных кэшей
pub fn cache_busted(url: &str, stamp: u64) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}_={stamp}")
}

/// Полный набор товаров сессии, в порядке файла
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Нормализует товары и отбрасывает повторы id (побеждает первый)
    pub fn new(products: Vec<Product>) -> Self {
        let mut seen = HashSet::new();
        let mut unique = Vec::with_capacity(products.len());
        for product in products {
            if product.id.as_str().trim().is_empty() {
                log::warn!("Producto sin id ignorado: {}", product.title);
                continue;
            }
            if seen.insert(product.id.clone()) {
                unique.push(product.normalized());
            } else {
                log::warn!("Producto duplicado ignorado: {}", product.id);
            }
        }
        Self { products: unique }
    }

    pub fn from_sheet_rows(rows: &[SheetRow]) -> Self {
        Self::new(products_from_rows(rows))
    }

    /// JSON-файл: массив товаров в канонической схеме
    pub fn from_json(url: &str, text: &str) -> Result<Self, LoadError> {
        let products: Vec<Product> =
            serde_json::from_str(text).map_err(|e| LoadError::Parse {
                url: url.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self::new(products))
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id.as_str()).is_some()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_ids_keep_first() {
        let catalog = Catalog::new(vec![
            Product::new("a", "Primero", 1.0),
            Product::new("b", "Otro", 2.0),
            Product::new("a", "Segundo", 3.0),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("a").unwrap().title, "Primero");
        assert!(catalog.get("zzz").is_none());
    }

    #[test]
    fn test_from_json_reports_parse_errors() {
        let err = Catalog::from_json("products.json", "{not json").unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));

        let catalog = Catalog::from_json(
            "products.json",
            r#"[{"id":"x","title":"Termo","price":100,"images":[]}]"#,
        )
        .unwrap();
        assert_eq!(catalog.products()[0].cover_image(), "images/placeholder.jpg");
    }

    #[test]
    fn test_from_json_tolerates_null_text_and_numeric_ids() {
        let catalog = Catalog::from_json(
            "products.json",
            r#"[{"id":"a","title":"Mate","price":10,"subcategory":null},
                {"id":5,"title":"Termo","price":5,"sku":1200},
                {"title":"Sin id","price":1}]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("a").unwrap().subcategory, "");
        let termo = catalog.get("5").unwrap();
        assert_eq!(termo.title, "Termo");
        assert_eq!(termo.sku, "1200");
    }

    #[test]
    fn test_blank_ids_are_dropped() {
        let catalog = Catalog::from_json(
            "products.json",
            r#"[{"id":"  ","title":"Sin id"},{"id":"k1","title":"Mate"}]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains(&ProductId::new("k1")));
    }

    #[test]
    fn test_cache_busted() {
        assert_eq!(cache_busted("products.json", 42), "products.json?_=42");
        assert_eq!(cache_busted("data?v=1", 42), "data?v=1&_=42");
    }
}
