use thiserror::Error;

use crate::domain::a001_product::Catalog;
use crate::domain::a002_cart::{Cart, CartStorage};
use crate::shared::format::format_money;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("El carrito está vacío.")]
    EmptyCart,

    #[error("Por favor, configura `whatsapp_number` en config.toml con tu número (ej: 5491123456789).")]
    MisconfiguredDestination,
}

/// Текст заказа для мессенджера.
///
/// Строка на каждую позицию с найденным товаром, затем подытог, налоги (0),
/// итог и необязательная заметка покупателя.
pub fn compose_order_message<S: CartStorage>(
    catalog: &Catalog,
    cart: &Cart<S>,
    note: &str,
) -> Result<String, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let mut lines: Vec<String> = cart
        .lines(catalog)
        .iter()
        .map(|line| {
            format!(
                "{} x {} — {} c/u — {}",
                line.qty,
                line.product.title,
                format_money(line.product.price),
                format_money(line.line_total())
            )
        })
        .collect();

    let totals = cart.totals(catalog);
    lines.push(format!("\nSubtotal: {}", format_money(totals.subtotal)));
    lines.push(format!("Impuestos: {}", format_money(totals.taxes)));
    lines.push(format!("Total: {}", format_money(totals.total)));

    // Заметка уходит как есть, без обрезки пробелов
    if !note.is_empty() {
        lines.push(format!("\nNota: {note}"));
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::{Product, ProductId};
    use crate::domain::a002_cart::MemoryStorage;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Product::new("a", "Mate", 100.0),
            Product::new("b", "Bombilla", 50.0),
        ])
    }

    #[test]
    fn test_empty_cart_is_rejected() {
        let cart = Cart::open(MemoryStorage::new(), "k");
        assert_eq!(
            compose_order_message(&catalog(), &cart, ""),
            Err(CheckoutError::EmptyCart)
        );
    }

    #[test]
    fn test_message_lines_in_order() {
        let catalog = catalog();
        let mut cart = Cart::open(MemoryStorage::new(), "k");
        cart.add(&catalog, &ProductId::from("a"), 2).unwrap();
        cart.add(&catalog, &ProductId::from("b"), 1).unwrap();

        let message = compose_order_message(&catalog, &cart, "").unwrap();
        assert_eq!(
            message,
            "2 x Mate — $100 c/u — $200\n\
             1 x Bombilla — $50 c/u — $50\n\
             \n\
             Subtotal: $250\n\
             Impuestos: $0\n\
             Total: $250"
        );
    }

    #[test]
    fn test_note_goes_last_and_orphans_are_skipped() {
        let catalog = catalog();
        let mut cart = Cart::open(MemoryStorage::new(), "k");
        cart.add(&catalog, &ProductId::from("a"), 1).unwrap();
        cart.add(&catalog, &ProductId::from("b"), 3).unwrap();

        let shrunk = Catalog::new(vec![Product::new("b", "Bombilla", 50.0)]);
        let message = compose_order_message(&shrunk, &cart, "  Envío a domicilio ").unwrap();
        let lines: Vec<&str> = message.lines().collect();
        assert_eq!(lines[0], "3 x Bombilla — $50 c/u — $150");
        assert!(!message.contains("Mate"));
        assert_eq!(lines.last(), Some(&"Nota:   Envío a domicilio "));
        assert!(message.contains("Total: $150\n\nNota:"));
    }

    #[test]
    fn test_whitespace_note_is_sent_verbatim() {
        let catalog = catalog();
        let mut cart = Cart::open(MemoryStorage::new(), "k");
        cart.add(&catalog, &ProductId::from("a"), 1).unwrap();

        let blank = compose_order_message(&catalog, &cart, "").unwrap();
        assert!(!blank.contains("Nota:"));

        let spaces = compose_order_message(&catalog, &cart, "  ").unwrap();
        assert!(spaces.ends_with("Total: $100\n\nNota:   "));
    }
}
