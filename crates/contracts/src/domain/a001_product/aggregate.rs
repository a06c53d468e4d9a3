use crate::domain::common::AggregateId;
use serde::{Deserialize, Deserializer, Serialize};

use super::excel::{cell_to_number, cell_to_stock, cell_to_string, split_images};

/// Картинка по умолчанию для товаров без изображений
pub const PLACEHOLDER_IMAGE: &str = "images/placeholder.jpg";

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Empty product id".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Товар каталога. После загрузки не изменяется.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Пустой или отсутствующий id отбрасывается каталогом
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: ProductId,

    #[serde(default, deserialize_with = "deserialize_text")]
    pub title: String,

    #[serde(default, deserialize_with = "deserialize_price")]
    pub price: f64,

    #[serde(default, deserialize_with = "deserialize_images")]
    pub images: Vec<String>,

    #[serde(default, deserialize_with = "deserialize_text")]
    pub short_description: String,

    #[serde(default, deserialize_with = "deserialize_text")]
    pub long_description: String,

    #[serde(default, deserialize_with = "deserialize_text")]
    pub sku: String,

    /// `None` — остаток не ограничен
    #[serde(
        default,
        deserialize_with = "deserialize_stock",
        skip_serializing_if = "Option::is_none"
    )]
    pub stock: Option<u32>,

    #[serde(default, deserialize_with = "deserialize_text")]
    pub category: String,

    #[serde(default, deserialize_with = "deserialize_text")]
    pub subcategory: String,
}

impl Product {
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            images: Vec::new(),
            short_description: String::new(),
            long_description: String::new(),
            sku: String::new(),
            stock: None,
            category: String::new(),
            subcategory: String::new(),
        }
        .normalized()
    }

    /// Приводит товар к инвариантам: непустой список картинок, цена >= 0
    pub fn normalized(mut self) -> Self {
        self.images = self
            .images
            .iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if self.images.is_empty() {
            self.images.push(PLACEHOLDER_IMAGE.to_string());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            self.price = 0.0;
        }
        self
    }

    pub fn cover_image(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Хватает ли остатка на `qty` штук
    pub fn allows_quantity(&self, qty: u32) -> bool {
        self.stock.map_or(true, |stock| qty <= stock)
    }

    /// Текст, по которому ищет глобальный поиск (в нижнем регистре)
    pub fn search_text(&self) -> String {
        [
            self.title.as_str(),
            self.short_description.as_str(),
            self.long_description.as_str(),
            self.sku.as_str(),
            self.category.as_str(),
            self.subcategory.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
    }

    /// Строки блока характеристик в карточке товара
    pub fn specs(&self) -> Vec<(&'static str, String)> {
        let mut specs = Vec::new();
        if !self.sku.is_empty() {
            specs.push(("SKU", self.sku.clone()));
        }
        if let Some(stock) = self.stock {
            specs.push(("Stock", stock.to_string()));
        }
        specs
    }
}

/// Текстовое поле: `null` -> пусто, числа и логические значения -> текст
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(cell_to_string).unwrap_or_default())
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<ProductId, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_text(deserializer).map(ProductId)
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(cell_to_number).unwrap_or(0.0))
}

fn deserialize_stock<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(cell_to_stock))
}

/// Принимает как массив URL, так и строку через `,` `;` `|`
fn deserialize_images<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        Some(serde_json::Value::String(raw)) => split_images(&raw),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_fills_placeholder_and_clamps_price() {
        let mut product = Product::new("p1", "Mate", 10.0);
        product.images = vec!["  ".to_string()];
        product.price = -3.0;
        let product = product.normalized();
        assert_eq!(product.images, vec![PLACEHOLDER_IMAGE.to_string()]);
        assert_eq!(product.price, 0.0);
        assert_eq!(product.cover_image(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_json_accepts_loose_numbers_and_missing_fields() {
        let json = r#"{"id":"a1","title":"Termo","price":"1500","stock":3,"images":["x.jpg"," y.jpg "]}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        let product = product.normalized();
        assert_eq!(product.price, 1500.0);
        assert_eq!(product.stock, Some(3));
        assert_eq!(product.images, vec!["x.jpg", "y.jpg"]);
        assert_eq!(product.sku, "");
    }

    #[test]
    fn test_search_text_skips_empty_parts() {
        let mut product = Product::new("p1", "Widget Azul", 1.0);
        product.category = "Hogar".to_string();
        assert_eq!(product.search_text(), "widget azul hogar");
    }

    #[test]
    fn test_specs_and_stock_check() {
        let mut product = Product::new("p1", "Mate", 10.0);
        assert!(product.specs().is_empty());
        assert!(product.allows_quantity(1_000));

        product.sku = "MT-01".to_string();
        product.stock = Some(2);
        assert_eq!(
            product.specs(),
            vec![("SKU", "MT-01".to_string()), ("Stock", "2".to_string())]
        );
        assert!(product.allows_quantity(2));
        assert!(!product.allows_quantity(3));
    }

    #[test]
    fn test_product_id_from_string_rejects_blank() {
        assert!(ProductId::from_string("  ").is_err());
        assert_eq!(ProductId::from_string(" a7 ").unwrap().as_str(), "a7");
    }
}
