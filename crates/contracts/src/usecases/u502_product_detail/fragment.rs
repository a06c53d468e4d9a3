//! Протокол якоря адреса: `#product-<id>` открывает карточку товара.

use crate::domain::a001_product::ProductId;

pub const FRAGMENT_PREFIX: &str = "#product-";

/// Что означает текущий якорь адреса
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentTarget {
    /// `#product-<id>`
    Product(ProductId),
    /// Якоря нет или он не про товар
    None,
}

/// Якорь для ссылки на товар
pub fn product_fragment(id: &ProductId) -> String {
    format!("{FRAGMENT_PREFIX}{}", urlencoding::encode(id.as_str()))
}

/// Разбор `location.hash`. Браузер отдаёт якорь в percent-кодировке.
pub fn parse_fragment(fragment: &str) -> FragmentTarget {
    let Some(raw) = fragment.strip_prefix(FRAGMENT_PREFIX) else {
        return FragmentTarget::None;
    };
    let decoded = urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string());
    if decoded.is_empty() {
        FragmentTarget::None
    } else {
        FragmentTarget::Product(ProductId::new(decoded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_round_trip_with_spaces() {
        let id = ProductId::from("Mate imperial");
        let fragment = product_fragment(&id);
        assert_eq!(fragment, "#product-Mate%20imperial");
        assert_eq!(parse_fragment(&fragment), FragmentTarget::Product(id));
    }

    #[test]
    fn test_non_product_fragments() {
        assert_eq!(parse_fragment(""), FragmentTarget::None);
        assert_eq!(parse_fragment("#contacto"), FragmentTarget::None);
        assert_eq!(parse_fragment("#product-"), FragmentTarget::None);
        assert_eq!(
            parse_fragment("#product-a1"),
            FragmentTarget::Product(ProductId::from("a1"))
        );
    }
}
