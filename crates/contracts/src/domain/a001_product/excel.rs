//! Импорт товаров из первой страницы Excel.
//!
//! Заголовки колонок в таблицах магазина пишут как попало (`price`, `Price`,
//! `precio`...), поэтому каждое поле описано упорядоченным списком кандидатов.
//! Побеждает первый кандидат с непустым значением.

use serde_json::Value;

use super::aggregate::{Product, ProductId, PLACEHOLDER_IMAGE};
use crate::domain::common::AggregateId;

/// Строка листа: заголовок колонки -> значение ячейки
pub type SheetRow = serde_json::Map<String, Value>;

/// Каноническое поле товара
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Id,
    Title,
    Price,
    Images,
    ShortDescription,
    LongDescription,
    Sku,
    Stock,
    Category,
    Subcategory,
}

/// Правило сопоставления: какие заголовки колонок дают поле, в порядке приоритета
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: ProductField,
    pub candidates: &'static [&'static str],
}

pub const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        field: ProductField::Id,
        candidates: &["id", "ID", "sku", "SKU"],
    },
    FieldRule {
        field: ProductField::Title,
        candidates: &["title", "Title", "nombre", "Nombre"],
    },
    FieldRule {
        field: ProductField::Price,
        candidates: &["price", "Price", "precio", "Precio"],
    },
    FieldRule {
        field: ProductField::Images,
        candidates: &["images", "Images", "imagenes", "Imagenes"],
    },
    FieldRule {
        field: ProductField::ShortDescription,
        candidates: &[
            "short_description",
            "short",
            "descripcion_corta",
            "descripcion",
            "Descripcion",
        ],
    },
    FieldRule {
        field: ProductField::LongDescription,
        candidates: &[
            "long_description",
            "long",
            "long_desc",
            "descripcion_larga",
            "DescripcionLarga",
        ],
    },
    FieldRule {
        field: ProductField::Sku,
        candidates: &["sku", "SKU"],
    },
    FieldRule {
        field: ProductField::Stock,
        candidates: &["stock", "Stock"],
    },
    FieldRule {
        field: ProductField::Category,
        candidates: &["category", "Category"],
    },
    FieldRule {
        field: ProductField::Subcategory,
        candidates: &["subcategory", "Subcategory"],
    },
];

/// Значение поля из строки листа: первый кандидат с непустой ячейкой
pub fn lookup(row: &SheetRow, field: ProductField) -> Option<&Value> {
    FIELD_RULES
        .iter()
        .filter(|rule| rule.field == field)
        .flat_map(|rule| rule.candidates.iter())
        .filter_map(|key| row.get(*key))
        .find(|value| !is_blank(value))
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

fn text(row: &SheetRow, field: ProductField) -> String {
    lookup(row, field).map(cell_to_string).unwrap_or_default()
}

/// Ячейка как текст. Целые числа без `.0` (SheetJS отдаёт их как f64).
pub fn cell_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.trim().to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => i.to_string(),
            (None, Some(f)) if f.fract() == 0.0 && f.abs() < 9.0e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

/// Ячейка как число: принимает и числа, и строки с числом
pub fn cell_to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

/// Остаток из ячейки. Пусто -> без ограничения, отрицательное -> 0.
pub fn cell_to_stock(value: &Value) -> Option<u32> {
    if is_blank(value) {
        return None;
    }
    match cell_to_number(value) {
        Some(n) => Some(n.floor().clamp(0.0, u32::MAX as f64) as u32),
        None => {
            log::warn!("Stock no numérico ({}), se considera sin límite", value);
            None
        }
    }
}

/// Делит строку картинок по `,` `;` `|`, выкидывая пустые куски
pub fn split_images(raw: &str) -> Vec<String> {
    raw.split([',', ';', '|'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Собрать товар из строки листа. `None`, если у строки нет ни id, ни названия.
pub fn product_from_row(row: &SheetRow) -> Option<Product> {
    let title = text(row, ProductField::Title);
    let raw_id = match text(row, ProductField::Id) {
        id if !id.is_empty() => id,
        _ => title.clone(),
    };
    let id = ProductId::from_string(&raw_id).ok()?;

    let images = match text(row, ProductField::Images) {
        raw if raw.is_empty() => vec![PLACEHOLDER_IMAGE.to_string()],
        raw => split_images(&raw),
    };

    let product = Product {
        id,
        title,
        price: lookup(row, ProductField::Price)
            .and_then(cell_to_number)
            .unwrap_or(0.0),
        images,
        short_description: text(row, ProductField::ShortDescription),
        long_description: text(row, ProductField::LongDescription),
        sku: text(row, ProductField::Sku),
        stock: lookup(row, ProductField::Stock).and_then(cell_to_stock),
        category: text(row, ProductField::Category),
        subcategory: text(row, ProductField::Subcategory),
    };
    Some(product.normalized())
}

/// Все строки листа -> товары. Пустые строки пропускаются.
pub fn products_from_rows(rows: &[SheetRow]) -> Vec<Product> {
    let products: Vec<Product> = rows.iter().filter_map(product_from_row).collect();
    let skipped = rows.len() - products.len();
    if skipped > 0 {
        log::warn!("Se omitieron {} filas sin id ni título", skipped);
    }
    products
}
